//! Arena-backed in-memory document for native tests.
//!
//! DESIGN
//! ======
//! Nodes live in a flat `Vec` owned by a shared `Rc<RefCell<_>>`, and handles
//! are plain indices, so clones of `MemoryDom` all observe the same tree the
//! way closures over a browser `Document` do. Nodes are never freed; the
//! page only ever grows.
//!
//! Content arrives as HTML: fixtures are written inline and mounted views
//! are rendered with leptos `to_html` and read back with quick-xml.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::IntoView;
use leptos::tachys::view::RenderHtml;
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use super::Dom;
use super::selector::{SelectorList, Subject};

const VOID_TAGS: &[&str] = &["area", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "wbr"];

/// Handle to an element or text node inside a `MemoryDom`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
struct ElementData {
    tag: String,
    attrs: Vec<(String, String)>,
    style: Vec<(String, String)>,
    value: Option<String>,
}

#[derive(Debug)]
enum Kind {
    Element(ElementData),
    Text(String),
}

#[derive(Debug)]
struct NodeData {
    kind: Kind,
    parent: Option<usize>,
    children: Vec<usize>,
}

#[derive(Debug, Default)]
struct Document {
    nodes: Vec<NodeData>,
    roots: Vec<usize>,
    navigations: Vec<String>,
}

/// Shared handle to an in-memory document.
#[derive(Clone, Debug)]
pub struct MemoryDom {
    inner: Rc<RefCell<Document>>,
}

impl Subject for ElementData {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn id(&self) -> Option<&str> {
        attr(&self.attrs, "id")
    }

    fn has_class(&self, class: &str) -> bool {
        attr(&self.attrs, "class").is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDom {
    /// Empty document: `<html><body></body></html>`.
    pub fn new() -> Self {
        Self::from_html("<html><body></body></html>")
    }

    /// Build a document from markup. The first top-level element is the root.
    pub fn from_html(html: &str) -> Self {
        let dom = Self { inner: Rc::new(RefCell::new(Document::default())) };
        dom.inner.borrow_mut().load(None, html);
        dom
    }

    /// Build a document from a rendered leptos view.
    pub fn from_view<V: IntoView>(view: V) -> Self {
        Self::from_html(&view.to_html())
    }

    pub fn body(&self) -> Option<NodeId> {
        self.query("body")
    }

    /// Simulate user input into a form control.
    pub fn set_value(&self, node: NodeId, value: &str) {
        if let Some(el) = self.inner.borrow_mut().element_mut(node.0) {
            if el.value.is_some() {
                el.value = Some(value.to_owned());
            }
        }
    }

    /// Every `href` passed to `navigate`, oldest first.
    pub fn navigations(&self) -> Vec<String> {
        self.inner.borrow().navigations.clone()
    }

    pub fn tag(&self, node: NodeId) -> Option<String> {
        self.inner.borrow().element(node.0).map(|el| el.tag.clone())
    }
}

fn tag_name(start: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(start.name().as_ref()).to_ascii_lowercase()
}

fn element_data(start: &BytesStart<'_>) -> ElementData {
    let attrs = start
        .html_attributes()
        .flatten()
        .map(|a| {
            let key = String::from_utf8_lossy(a.key.as_ref()).to_ascii_lowercase();
            let value = a
                .unescape_value()
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| String::from_utf8_lossy(&a.value).into_owned());
            (key, value)
        })
        .collect();
    ElementData { tag: tag_name(start), attrs, style: Vec::new(), value: None }
}

impl Document {
    fn push(&mut self, parent: Option<usize>, kind: Kind) -> usize {
        let index = self.nodes.len();
        self.nodes.push(NodeData { kind, parent, children: Vec::new() });
        match parent {
            Some(parent) => self.nodes[parent].children.push(index),
            None => self.roots.push(index),
        }
        index
    }

    /// Parse `html` under `parent`. Returns the new top-level elements.
    fn load(&mut self, parent: Option<usize>, html: &str) -> Vec<usize> {
        // Hydration markers between adjacent text nodes.
        let html = html.replace("<!>", "");
        let mut reader = Reader::from_str(&html);
        reader.config_mut().check_end_names = false;

        let first = self.nodes.len();
        let mut open: Vec<usize> = Vec::new();
        let mut top = Vec::new();
        loop {
            let event = match reader.read_event() {
                Ok(event) => event,
                Err(err) => {
                    log::debug!("markup rejected at {}: {err}", reader.buffer_position());
                    break;
                }
            };
            let current = open.last().copied().or(parent);
            match event {
                Event::Start(start) => {
                    let data = element_data(&start);
                    let void = VOID_TAGS.contains(&data.tag.as_str());
                    let index = self.push(current, Kind::Element(data));
                    if open.is_empty() {
                        top.push(index);
                    }
                    if !void {
                        open.push(index);
                    }
                }
                Event::Empty(start) => {
                    let index = self.push(current, Kind::Element(element_data(&start)));
                    if open.is_empty() {
                        top.push(index);
                    }
                }
                Event::End(end) => {
                    let tag = String::from_utf8_lossy(end.name().as_ref()).to_ascii_lowercase();
                    if let Some(pos) = open.iter().rposition(|&i| self.element(i).is_some_and(|el| el.tag == tag)) {
                        open.truncate(pos);
                    }
                }
                Event::Text(text) => match text.unescape() {
                    Ok(text) if !text.trim().is_empty() => {
                        self.push(current, Kind::Text(text.into_owned()));
                    }
                    Ok(_) => {}
                    Err(err) => log::debug!("text rejected: {err}"),
                },
                Event::Eof => break,
                _ => {}
            }
        }
        self.init_values(first);
        top
    }

    /// Form controls start with their `value` attribute (or text, for
    /// `<textarea>`); everything else carries no value.
    fn init_values(&mut self, from: usize) {
        for index in from..self.nodes.len() {
            let initial = match self.element(index) {
                Some(el) if el.tag == "input" || el.tag == "select" => {
                    Some(attr(&el.attrs, "value").unwrap_or_default().to_owned())
                }
                Some(el) if el.tag == "textarea" => {
                    let mut text = String::new();
                    self.text(index, &mut text);
                    Some(text)
                }
                _ => None,
            };
            if let (Some(initial), Some(el)) = (initial, self.element_mut(index)) {
                el.value = Some(initial);
            }
        }
    }

    fn element(&self, index: usize) -> Option<&ElementData> {
        match &self.nodes.get(index)?.kind {
            Kind::Element(el) => Some(el),
            Kind::Text(_) => None,
        }
    }

    fn element_mut(&mut self, index: usize) -> Option<&mut ElementData> {
        match &mut self.nodes.get_mut(index)?.kind {
            Kind::Element(el) => Some(el),
            Kind::Text(_) => None,
        }
    }

    /// Element descendants of `start` in document order, excluding `start`.
    fn descendants(&self, start: usize) -> Vec<usize> {
        let mut out = Vec::new();
        let mut stack: Vec<usize> = self.nodes[start].children.iter().rev().copied().collect();
        while let Some(index) = stack.pop() {
            if self.element(index).is_some() {
                out.push(index);
                stack.extend(self.nodes[index].children.iter().rev().copied());
            }
        }
        out
    }

    fn ancestors(&self, index: usize) -> Vec<&ElementData> {
        let mut out = Vec::new();
        let mut cursor = self.nodes[index].parent;
        while let Some(parent) = cursor {
            if let Some(el) = self.element(parent) {
                out.push(el);
            }
            cursor = self.nodes[parent].parent;
        }
        out
    }

    /// `scope` = `None` searches the whole document including the roots.
    fn select(&self, scope: Option<usize>, selector: &str) -> Vec<usize> {
        let Some(list) = SelectorList::parse(selector) else {
            log::debug!("unsupported selector: {selector}");
            return Vec::new();
        };
        let candidates = match scope {
            Some(scope) => self.descendants(scope),
            None => self
                .roots
                .iter()
                .filter(|&&root| self.element(root).is_some())
                .flat_map(|&root| std::iter::once(root).chain(self.descendants(root)))
                .collect(),
        };
        candidates
            .into_iter()
            .filter(|&index| {
                self.element(index)
                    .is_some_and(|el| list.matches(el, &self.ancestors(index)))
            })
            .collect()
    }

    fn text(&self, index: usize, out: &mut String) {
        match &self.nodes[index].kind {
            Kind::Text(text) => out.push_str(text),
            Kind::Element(_) => {
                for &child in &self.nodes[index].children {
                    self.text(child, out);
                }
            }
        }
    }
}

impl Dom for MemoryDom {
    type Node = NodeId;

    fn root(&self) -> Option<NodeId> {
        let doc = self.inner.borrow();
        doc.roots.iter().copied().find(|&root| doc.element(root).is_some()).map(NodeId)
    }

    fn query(&self, selector: &str) -> Option<NodeId> {
        self.inner.borrow().select(None, selector).first().copied().map(NodeId)
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        self.inner.borrow().select(None, selector).into_iter().map(NodeId).collect()
    }

    fn query_within(&self, scope: &NodeId, selector: &str) -> Vec<NodeId> {
        let doc = self.inner.borrow();
        if doc.element(scope.0).is_none() {
            return Vec::new();
        }
        doc.select(Some(scope.0), selector).into_iter().map(NodeId).collect()
    }

    fn mount<F, V>(&self, parent: &NodeId, view: F) -> Option<NodeId>
    where
        F: FnOnce() -> V + 'static,
        V: IntoView + 'static,
    {
        self.inner.borrow().element(parent.0)?;
        let html = view().to_html();
        let top = self.inner.borrow_mut().load(Some(parent.0), &html);
        top.first().copied().map(NodeId)
    }

    fn children(&self, node: &NodeId) -> Vec<NodeId> {
        let doc = self.inner.borrow();
        let Some(data) = doc.nodes.get(node.0) else {
            return Vec::new();
        };
        data.children
            .iter()
            .copied()
            .filter(|&child| doc.element(child).is_some())
            .map(NodeId)
            .collect()
    }

    fn text(&self, node: &NodeId) -> String {
        let doc = self.inner.borrow();
        let mut out = String::new();
        if node.0 < doc.nodes.len() {
            doc.text(node.0, &mut out);
        }
        out
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.inner.borrow().element(node.0).is_some_and(|el| el.has_class(class))
    }

    fn add_class(&self, node: &NodeId, class: &str) {
        let mut doc = self.inner.borrow_mut();
        let Some(el) = doc.element_mut(node.0) else {
            return;
        };
        if el.has_class(class) {
            return;
        }
        let classes = match attr(&el.attrs, "class") {
            Some(existing) if !existing.trim().is_empty() => format!("{existing} {class}"),
            _ => class.to_owned(),
        };
        set_attr(&mut el.attrs, "class", &classes);
    }

    fn remove_class(&self, node: &NodeId, class: &str) {
        let mut doc = self.inner.borrow_mut();
        let Some(el) = doc.element_mut(node.0) else {
            return;
        };
        let Some(existing) = attr(&el.attrs, "class") else {
            return;
        };
        let kept = existing
            .split_whitespace()
            .filter(|c| *c != class)
            .collect::<Vec<_>>()
            .join(" ");
        set_attr(&mut el.attrs, "class", &kept);
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        let doc = self.inner.borrow();
        doc.element(node.0).and_then(|el| attr(&el.attrs, name)).map(str::to_owned)
    }

    fn set_attribute(&self, node: &NodeId, name: &str, value: &str) {
        if let Some(el) = self.inner.borrow_mut().element_mut(node.0) {
            set_attr(&mut el.attrs, name, value);
        }
    }

    fn style(&self, node: &NodeId, property: &str) -> Option<String> {
        let doc = self.inner.borrow();
        doc.element(node.0).and_then(|el| attr(&el.style, property)).map(str::to_owned)
    }

    fn set_style(&self, node: &NodeId, property: &str, value: &str) {
        if let Some(el) = self.inner.borrow_mut().element_mut(node.0) {
            set_attr(&mut el.style, property, value);
        }
    }

    fn value(&self, node: &NodeId) -> Option<String> {
        self.inner.borrow().element(node.0).and_then(|el| el.value.clone())
    }

    fn reset_form(&self, form: &NodeId) {
        let mut doc = self.inner.borrow_mut();
        if doc.element(form.0).is_none() {
            return;
        }
        let defaults = doc
            .descendants(form.0)
            .into_iter()
            .filter_map(|index| {
                let el = doc.element(index)?;
                el.value.as_ref()?;
                let default = if el.tag == "textarea" {
                    let mut text = String::new();
                    doc.text(index, &mut text);
                    text
                } else {
                    attr(&el.attrs, "value").unwrap_or_default().to_owned()
                };
                Some((index, default))
            })
            .collect::<Vec<_>>();
        for (index, default) in defaults {
            if let Some(el) = doc.element_mut(index) {
                el.value = Some(default);
            }
        }
    }

    fn navigate(&self, href: &str) {
        self.inner.borrow_mut().navigations.push(href.to_owned());
    }
}

fn attr<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
}

fn set_attr(pairs: &mut Vec<(String, String)>, name: &str, value: &str) {
    if let Some((_, existing)) = pairs.iter_mut().find(|(k, _)| k == name) {
        *existing = value.to_owned();
    } else {
        pairs.push((name.to_owned(), value.to_owned()));
    }
}
