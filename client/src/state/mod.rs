//! Page state holders.
//!
//! DESIGN
//! ======
//! Each flag the page mirrors into the DOM lives in one small value type.
//! Controllers own these and push every change out to all dependent
//! elements in the same call, so the DOM is never the source of truth.

pub mod menu;
pub mod reveal;
pub mod theme;
