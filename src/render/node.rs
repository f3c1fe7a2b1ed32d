// SPDX-License-Identifier: PMPL-1.0-or-later

//! Declarative document tree and its HTML serialisation

use serde::Serialize;
use std::collections::BTreeMap;

const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "link", "meta", "use"];

/// A node of the rendered document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn text<S: Into<String>>(text: S) -> Self {
        Node::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    pub fn text_content(&self) -> String {
        match self {
            Node::Element(el) => el.text_content(),
            Node::Text(text) => text.clone(),
        }
    }

    pub fn write_html(&self, out: &mut String) {
        match self {
            Node::Element(el) => el.write_html(out),
            Node::Text(text) => out.push_str(&escape_text(text)),
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

/// An element with attributes and children.
///
/// The `class` attribute is stored like any other attribute; the class
/// helpers treat it as a whitespace-separated set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Element {
    pub fn new<S: Into<String>>(tag: S) -> Self {
        Self {
            tag: tag.into(),
            attrs: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    // ─── Builders ───────────────────────────────────────────────────

    pub fn attr<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.set_attr(key, value);
        self
    }

    pub fn id<S: Into<String>>(self, id: S) -> Self {
        self.attr("id", id)
    }

    pub fn class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn child<N: Into<Node>>(mut self, child: N) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn text<S: Into<String>>(self, text: S) -> Self {
        self.child(Node::Text(text.into()))
    }

    // ─── Attributes ─────────────────────────────────────────────────

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    pub fn set_attr<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.attrs.insert(key.into(), value.into());
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|classes| classes.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }
        let classes = match self.get_attr("class") {
            Some(existing) if !existing.is_empty() => format!("{existing} {class}"),
            _ => class.to_string(),
        };
        self.set_attr("class", classes);
    }

    pub fn remove_class(&mut self, class: &str) {
        let Some(existing) = self.get_attr("class") else {
            return;
        };
        let remaining: Vec<&str> = existing.split_whitespace().filter(|c| *c != class).collect();
        if remaining.is_empty() {
            self.attrs.remove("class");
        } else {
            let joined = remaining.join(" ");
            self.set_attr("class", joined);
        }
    }

    /// Toggle `class`; returns whether it is now present.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    // ─── Content ────────────────────────────────────────────────────

    /// Replace all children with a single text node.
    pub fn set_text<S: Into<String>>(&mut self, text: S) {
        self.children = vec![Node::Text(text.into())];
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    // ─── Queries ────────────────────────────────────────────────────

    /// Depth-first search for the first element matching `pred`, self included.
    pub fn find(&self, pred: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        if pred(self) {
            return Some(self);
        }
        self.child_elements().find_map(|child| child.find(pred))
    }

    pub fn find_mut(&mut self, pred: &dyn Fn(&Element) -> bool) -> Option<&mut Element> {
        if pred(&*self) {
            return Some(self);
        }
        self.children
            .iter_mut()
            .filter_map(Node::as_element_mut)
            .find_map(|child| child.find_mut(pred))
    }

    pub fn by_id(&self, id: &str) -> Option<&Element> {
        self.find(&|el: &Element| el.get_attr("id") == Some(id))
    }

    pub fn by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.find_mut(&|el: &Element| el.get_attr("id") == Some(id))
    }

    pub fn by_class(&self, class: &str) -> Option<&Element> {
        self.find(&|el: &Element| el.has_class(class))
    }

    pub fn by_class_mut(&mut self, class: &str) -> Option<&mut Element> {
        self.find_mut(&|el: &Element| el.has_class(class))
    }

    /// Every descendant element with `class`, in document order.
    pub fn all_by_class(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        collect_by_class(self, class, &mut found);
        found
    }

    /// Follow child indices from this element. An empty path is `self`.
    pub fn element_at(&self, path: &[usize]) -> Option<&Element> {
        match path.split_first() {
            None => Some(self),
            Some((&index, rest)) => self.children.get(index)?.as_element()?.element_at(rest),
        }
    }

    pub fn element_at_mut(&mut self, path: &[usize]) -> Option<&mut Element> {
        match path.split_first() {
            None => Some(self),
            Some((&index, rest)) => self
                .children
                .get_mut(index)?
                .as_element_mut()?
                .element_at_mut(rest),
        }
    }

    // ─── Serialisation ──────────────────────────────────────────────

    pub fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (key, value) in &self.attrs {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
        out.push('>');
        if VOID_TAGS.contains(&self.tag.as_str()) {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }
}

fn collect_by_class<'a>(el: &'a Element, class: &str, found: &mut Vec<&'a Element>) {
    for child in el.child_elements() {
        if child.has_class(class) {
            found.push(child);
        }
        collect_by_class(child, class, found);
    }
}

pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_set_operations() {
        let mut el = Element::new("article").class("trajectory-card");
        assert!(el.has_class("trajectory-card"));
        assert!(el.toggle_class("expanded"));
        assert_eq!(el.get_attr("class"), Some("trajectory-card expanded"));
        assert!(!el.toggle_class("expanded"));
        assert_eq!(el.get_attr("class"), Some("trajectory-card"));
        el.remove_class("trajectory-card");
        assert_eq!(el.get_attr("class"), None);
    }

    #[test]
    fn add_class_is_idempotent() {
        let el = Element::new("div").class("open").class("open");
        assert_eq!(el.get_attr("class"), Some("open"));
    }

    #[test]
    fn html_escapes_text_and_attributes() {
        let el = Element::new("a")
            .attr("href", "https://x.io/?a=1&b=\"2\"")
            .text("<b>Tom & Jerry</b>");
        assert_eq!(
            el.to_html(),
            "<a href=\"https://x.io/?a=1&amp;b=&quot;2&quot;\">&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;</a>"
        );
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let el = Element::new("img").attr("src", "a.png");
        assert_eq!(el.to_html(), "<img src=\"a.png\">");
    }

    #[test]
    fn path_navigation() {
        let root = Element::new("div").child(
            Element::new("article")
                .class("card")
                .child(Element::new("h2").text("Title")),
        );
        assert_eq!(root.element_at(&[0, 0]).map(|e| e.tag.as_str()), Some("h2"));
        assert_eq!(root.element_at(&[0, 0, 0]), None);
        assert_eq!(root.element_at(&[3]), None);
        assert_eq!(root.by_class("card").map(|e| e.text_content()).as_deref(), Some("Title"));
    }
}
