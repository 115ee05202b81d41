//! `Dom` over the live browser document via web-sys.
//!
//! Every fallible JS call is routed through `settle`, which logs the failure
//! at debug level and carries on; the page never surfaces DOM errors.
//! Views are mounted with `leptos::mount::mount_to` and live as long as the
//! page, so their unmount handles are forgotten.

use leptos::prelude::IntoView;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use super::Dom;

/// Handle to the window's current document.
#[derive(Clone, Debug)]
pub struct BrowserDom {
    document: Document,
}

impl BrowserDom {
    /// `None` outside a window context (workers, SSR).
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }
}

fn settle<T>(result: Result<T, JsValue>, op: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::debug!("{op} failed: {err:?}");
            None
        }
    }
}

fn elements(list: Option<web_sys::NodeList>) -> Vec<web_sys::Element> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

impl Dom for BrowserDom {
    type Node = web_sys::Element;

    fn root(&self) -> Option<Self::Node> {
        self.document.document_element()
    }

    fn query(&self, selector: &str) -> Option<Self::Node> {
        settle(self.document.query_selector(selector), "query_selector").flatten()
    }

    fn query_all(&self, selector: &str) -> Vec<Self::Node> {
        elements(settle(self.document.query_selector_all(selector), "query_selector_all"))
    }

    fn query_within(&self, scope: &Self::Node, selector: &str) -> Vec<Self::Node> {
        elements(settle(scope.query_selector_all(selector), "query_selector_all"))
    }

    fn mount<F, V>(&self, parent: &Self::Node, view: F) -> Option<Self::Node>
    where
        F: FnOnce() -> V + 'static,
        V: IntoView + 'static,
    {
        let host = parent.dyn_ref::<HtmlElement>()?.clone();
        let before = host.child_element_count();
        leptos::mount::mount_to(host.clone(), view).forget();
        if host.child_element_count() > before {
            host.last_element_child()
        } else {
            None
        }
    }

    fn children(&self, node: &Self::Node) -> Vec<Self::Node> {
        let list = node.children();
        (0..list.length()).filter_map(|i| list.item(i)).collect()
    }

    fn text(&self, node: &Self::Node) -> String {
        node.text_content().unwrap_or_default()
    }

    fn has_class(&self, node: &Self::Node, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn add_class(&self, node: &Self::Node, class: &str) {
        settle(node.class_list().add_1(class), "classList.add");
    }

    fn remove_class(&self, node: &Self::Node, class: &str) {
        settle(node.class_list().remove_1(class), "classList.remove");
    }

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str) {
        settle(node.set_attribute(name, value), "set_attribute");
    }

    fn style(&self, node: &Self::Node, property: &str) -> Option<String> {
        let el = node.dyn_ref::<HtmlElement>()?;
        settle(el.style().get_property_value(property), "style.getPropertyValue")
            .filter(|value| !value.is_empty())
    }

    fn set_style(&self, node: &Self::Node, property: &str, value: &str) {
        if let Some(el) = node.dyn_ref::<HtmlElement>() {
            settle(el.style().set_property(property, value), "style.setProperty");
        }
    }

    fn value(&self, node: &Self::Node) -> Option<String> {
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        node.dyn_ref::<HtmlTextAreaElement>().map(HtmlTextAreaElement::value)
    }

    fn reset_form(&self, form: &Self::Node) {
        if let Some(form) = form.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    }

    fn navigate(&self, href: &str) {
        if let Some(window) = web_sys::window() {
            settle(window.location().set_href(href), "location.set_href");
        }
    }
}
