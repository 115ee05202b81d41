//! Site-level settings carried in the `site` block of the content file.
//!
//! Every field has a default, so a content file without a `site` block (or
//! with only some keys) still yields a complete configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONTACT_ADDRESS: &str = "vj.co.dev@gmail.com";
pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.2;
pub const DEFAULT_SKILL_BAR_DELAY_MS: u32 = 500;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Name shown in the header and page title.
    pub owner: String,
    /// `<title>` text.
    pub title: String,
    /// Recipient of contact-form hand-offs.
    pub contact_address: String,
    /// `localStorage` key holding `"dark"` / `"light"`.
    pub theme_storage_key: String,
    /// Fraction of an experience entry that must be visible to reveal it.
    pub reveal_threshold: f64,
    /// Delay before skill bars grow to their level.
    pub skill_bar_delay_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: "Portfolio".to_owned(),
            title: "Portfolio".to_owned(),
            contact_address: DEFAULT_CONTACT_ADDRESS.to_owned(),
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            skill_bar_delay_ms: DEFAULT_SKILL_BAR_DELAY_MS,
        }
    }
}

impl SiteConfig {
    /// Threshold clamped into the `[0, 1]` range the observer accepts.
    pub fn reveal_threshold(&self) -> f64 {
        if self.reveal_threshold.is_nan() {
            return DEFAULT_REVEAL_THRESHOLD;
        }
        self.reveal_threshold.clamp(0.0, 1.0)
    }
}
