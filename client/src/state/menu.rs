//! Mobile overlay menu open/closed flag.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Force closed. Returns whether the menu was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    pub fn aria_expanded(self) -> &'static str {
        crate::dom::aria_bool(self.open)
    }

    pub fn aria_hidden(self) -> &'static str {
        crate::dom::aria_bool(!self.open)
    }
}
