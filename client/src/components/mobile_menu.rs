//! Hamburger-driven overlay menu.

#[cfg(test)]
#[path = "mobile_menu_test.rs"]
mod mobile_menu_test;

use crate::dom::Dom;
use crate::page;
use crate::state::menu::MenuState;

pub const ACTIVE_CLASS: &str = "active";
pub const CANCEL_KEY: &str = "Escape";

pub struct NavigationController<D: Dom> {
    dom: D,
    trigger: D::Node,
    overlay: D::Node,
    links: Vec<D::Node>,
    state: MenuState,
}

impl<D: Dom> NavigationController<D> {
    /// `None` when the page lacks the trigger or the overlay; the menu is
    /// then inert and nothing gets wired.
    pub fn attach(dom: D) -> Option<Self> {
        let Some(trigger) = dom.query(page::MENU_TRIGGER) else {
            log::debug!("mobile menu: no trigger, skipping");
            return None;
        };
        let Some(overlay) = dom.query(page::MENU_OVERLAY) else {
            log::debug!("mobile menu: no overlay, skipping");
            return None;
        };
        let links = dom.query_within(&overlay, page::MENU_LINKS);
        let controller = Self { dom, trigger, overlay, links, state: MenuState::default() };
        controller.sync();
        Some(controller)
    }

    /// Trigger activation. Returns the new open flag.
    pub fn toggle_menu(&mut self) -> bool {
        let open = self.state.toggle();
        self.sync();
        open
    }

    /// A link inside the overlay was followed: always close.
    pub fn select_link(&mut self) {
        self.state.close();
        self.sync();
    }

    /// Cancel gesture. Returns whether the menu was open.
    pub fn cancel(&mut self) -> bool {
        let was_open = self.state.close();
        if was_open {
            self.sync();
        }
        was_open
    }

    /// Document keydown; only the cancel key does anything.
    pub fn handle_key(&mut self, key: &str) -> bool {
        key == CANCEL_KEY && self.cancel()
    }

    pub fn is_open(&self) -> bool {
        self.state.open
    }

    pub fn trigger(&self) -> &D::Node {
        &self.trigger
    }

    pub fn overlay(&self) -> &D::Node {
        &self.overlay
    }

    pub fn links(&self) -> &[D::Node] {
        &self.links
    }

    fn sync(&self) {
        self.dom.set_class(&self.trigger, ACTIVE_CLASS, self.state.open);
        self.dom.set_class(&self.overlay, ACTIVE_CLASS, self.state.open);
        self.dom.set_attribute(&self.trigger, "aria-expanded", self.state.aria_expanded());
        self.dom.set_attribute(&self.overlay, "aria-hidden", self.state.aria_hidden());
    }
}
