//! Light/dark theme flag and its persisted form.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

pub const DARK: &str = "dark";
pub const LIGHT: &str = "light";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub dark: bool,
}

impl ThemeState {
    /// Only the literal `"dark"` selects dark; anything else, or nothing, is light.
    pub fn from_preference(stored: Option<&str>) -> Self {
        Self { dark: stored == Some(DARK) }
    }

    /// Flip the flag and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.dark = !self.dark;
        self.dark
    }

    pub fn preference(self) -> &'static str {
        if self.dark { DARK } else { LIGHT }
    }
}
