//! # client
//!
//! WASM core of the portfolio page. Renders the education, experience,
//! projects, skills, and stats sections from bundled records and wires the
//! theme toggle, mobile menu, scroll reveal, and contact hand-off.
//!
//! Cards and the page shell are leptos components. The `ssr` feature renders
//! the shell to `index.html`; `hydrate` mounts cards into the live page.
//! Everything except `dom::browser` and `bootstrap::browser` is
//! target-independent, and tests run it natively against a `MemoryDom`.

pub mod bootstrap;
pub mod components;
pub mod config;
pub mod content;
pub mod dom;
pub mod page;
pub mod sections;
pub mod state;
pub mod util;

/// wasm-bindgen entry point: runs when the module is instantiated.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    bootstrap::browser::start();
}
