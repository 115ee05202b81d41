//! Document access seam shared by controllers, renderers, and bootstrap.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page logic is written once against `Dom`. In the browser it runs on the
//! live document (`BrowserDom`, `hydrate` feature) and section cards are
//! mounted as leptos views. Unit tests run the same logic on `MemoryDom`,
//! which loads the server-rendered HTML of those views.
//!
//! Handles are cheap clones; event closures capture them by value.

#[cfg(test)]
pub mod memory;

#[cfg(feature = "hydrate")]
pub mod browser;

#[cfg(test)]
pub use memory::{MemoryDom, NodeId};

#[cfg(feature = "hydrate")]
pub use browser::BrowserDom;

use leptos::prelude::IntoView;

/// Minimal document surface the page core needs.
///
/// Every method degrades silently: lookups return `None`/empty and
/// mutations on detached or missing nodes are no-ops.
pub trait Dom: Clone + 'static {
    /// Element handle. Equality is element identity.
    type Node: Clone + PartialEq + 'static;

    /// The document root element (`<html>`).
    fn root(&self) -> Option<Self::Node>;

    /// First element in document order matching `selector`.
    fn query(&self, selector: &str) -> Option<Self::Node>;

    /// Every element in document order matching `selector`.
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;

    /// Every descendant of `scope` matching `selector`.
    fn query_within(&self, scope: &Self::Node, selector: &str) -> Vec<Self::Node>;

    /// Render `view` as the last child of `parent`; returns the new element.
    fn mount<F, V>(&self, parent: &Self::Node, view: F) -> Option<Self::Node>
    where
        F: FnOnce() -> V + 'static,
        V: IntoView + 'static;

    /// Element children of `node`, in order.
    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Concatenated descendant text.
    fn text(&self, node: &Self::Node) -> String;

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    fn add_class(&self, node: &Self::Node, class: &str);
    fn remove_class(&self, node: &Self::Node, class: &str);

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str);

    /// Inline style property, e.g. `width`.
    fn style(&self, node: &Self::Node, property: &str) -> Option<String>;
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);

    /// Current value of a form control; `None` if `node` is not one.
    fn value(&self, node: &Self::Node) -> Option<String>;

    /// Reset every control inside `form` to its default.
    fn reset_form(&self, form: &Self::Node);

    /// Navigate the page to `href`.
    fn navigate(&self, href: &str);

    /// Add or remove `class` so that its presence equals `on`.
    fn set_class(&self, node: &Self::Node, class: &str, on: bool) {
        if on {
            self.add_class(node, class);
        } else {
            self.remove_class(node, class);
        }
    }
}

/// Attribute text for a boolean ARIA state.
pub fn aria_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
