//! Theme controller: one dark flag mirrored onto the document root and
//! every toggle control.
//!
//! The desktop header and the mobile overlay each carry a toggle; both are
//! resynced on every change so neither can show a stale `aria-pressed`.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use crate::dom::{Dom, aria_bool};
use crate::page;
use crate::state::theme::ThemeState;
use crate::util::preference::PreferenceStore;

/// Class on `<html>` that style rules key dark mode on.
pub const DARK_CLASS: &str = "dark-theme";

pub struct ThemeController<D: Dom, S: PreferenceStore> {
    dom: D,
    store: S,
    key: String,
    controls: Vec<D::Node>,
    state: ThemeState,
}

impl<D: Dom, S: PreferenceStore> ThemeController<D, S> {
    /// Load the persisted preference and sync every toggle control.
    pub fn initialize(dom: D, store: S, key: &str) -> Self {
        let controls = dom.query_all(page::THEME_TOGGLES);
        let state = ThemeState::from_preference(store.get(key).as_deref());
        log::debug!("theme: {} ({} controls)", state.preference(), controls.len());
        let controller = Self { dom, store, key: key.to_owned(), controls, state };
        controller.sync();
        controller
    }

    /// Flip, persist, and resync. Returns the new dark flag.
    pub fn toggle(&mut self) -> bool {
        let dark = self.state.toggle();
        self.store.set(&self.key, self.state.preference());
        self.sync();
        dark
    }

    pub fn is_dark(&self) -> bool {
        self.state.dark
    }

    pub fn controls(&self) -> &[D::Node] {
        &self.controls
    }

    fn sync(&self) {
        if let Some(root) = self.dom.root() {
            self.dom.set_class(&root, DARK_CLASS, self.state.dark);
        }
        let pressed = aria_bool(self.state.dark);
        for control in &self.controls {
            self.dom.set_attribute(control, "aria-pressed", pressed);
        }
    }
}
