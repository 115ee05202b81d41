//! Interactive page controllers.
//!
//! Each controller owns the elements it drives plus one state holder, and is
//! written against `Dom` so the browser wiring in `bootstrap::browser` only
//! forwards events.

pub mod contact_form;
pub mod mobile_menu;
pub mod reveal;
pub mod theme_toggle;
