//! Skill cards with animated level bars.
//!
//! Bars mount at zero width carrying their level in `data-level`; one
//! deferred task later sets every bar's width so the style transition
//! animates from empty instead of snapping.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

use leptos::prelude::*;

use super::{Card, render};
use crate::content::SkillRecord;
use crate::dom::Dom;
use crate::util::schedule::Scheduler;

pub const BAR_SELECTOR: &str = ".skill-level";
pub const LEVEL_ATTR: &str = "data-level";

#[component]
pub fn SkillCard(record: SkillRecord) -> impl IntoView {
    let percent = format!("{}%", record.level);
    let level = record.level.to_string();
    view! {
        <div class="skill-item">
            <div class="skill-name">
                <span>{record.name}</span>
                <span>{percent}</span>
            </div>
            <div class="skill-bar">
                <div class="skill-level" data-level=level></div>
            </div>
        </div>
    }
}

impl Card for SkillRecord {
    const GRID: &'static str = ".skills-grid";

    fn card(self) -> impl IntoView + 'static {
        view! { <SkillCard record=self /> }
    }
}

/// Set every bar's width to its stored level.
pub fn fill_bars<D: Dom>(dom: &D) -> usize {
    let bars = dom.query_all(BAR_SELECTOR);
    for bar in &bars {
        if let Some(level) = dom.attribute(bar, LEVEL_ATTR) {
            dom.set_style(bar, "width", &format!("{level}%"));
        }
    }
    bars.len()
}

/// Render skills, then schedule the bar fill after `delay_ms`.
///
/// Nothing is scheduled when no card was mounted.
pub fn render_animated<D: Dom, S: Scheduler>(
    dom: &D,
    scheduler: &S,
    records: &[SkillRecord],
    delay_ms: u32,
) -> Vec<D::Node> {
    let cards = render(dom, records);
    if !cards.is_empty() {
        let dom = dom.clone();
        scheduler.defer(
            delay_ms,
            Box::new(move || {
                let filled = fill_bars(&dom);
                log::debug!("skills: filled {filled} bars");
            }),
        );
    }
    cards
}
