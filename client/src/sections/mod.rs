//! Section renderers: records in, one card per record out.
//!
//! DESIGN
//! ======
//! Each record type has a leptos component for its card and knows its grid
//! selector (`Card`). Rendering is the same for every section: find the
//! grid, mount cards in input order. A missing grid or an empty list renders
//! nothing. Cards are mounted once at page-ready and never re-rendered.


pub mod education;
pub mod experience;
pub mod projects;
pub mod skills;
pub mod stats;

use leptos::prelude::IntoView;

use crate::dom::Dom;

/// A record that renders as one card inside its section grid.
pub trait Card: Clone + 'static {
    /// Selector of the grid container.
    const GRID: &'static str;

    fn card(self) -> impl IntoView + 'static;
}

/// Render `records` into their grid. Returns the mounted cards.
pub fn render<D: Dom, R: Card>(dom: &D, records: &[R]) -> Vec<D::Node> {
    if records.is_empty() {
        return Vec::new();
    }
    let grid = dom.query(R::GRID);
    if grid.is_none() {
        log::debug!("{} not on page, skipping {} records", R::GRID, records.len());
    }
    render_into(dom, grid.as_ref(), records)
}

/// Render `records` into an explicit container.
pub fn render_into<D: Dom, R: Card>(dom: &D, container: Option<&D::Node>, records: &[R]) -> Vec<D::Node> {
    let Some(container) = container else {
        return Vec::new();
    };
    records
        .iter()
        .cloned()
        .filter_map(|record| dom.mount(container, move || record.card()))
        .collect()
}
