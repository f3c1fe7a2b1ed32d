// SPDX-License-Identifier: PMPL-1.0-or-later

//! Page skeleton and static-text application

use super::node::{Element, Node};
use crate::i18n::{t, Lang};
use serde::{Deserialize, Serialize};

pub const MAIN_TITLE_ID: &str = "main-title";
pub const INTRO_ID: &str = "intro";
pub const CONTACT_HEADING_ID: &str = "contact-heading";
pub const EMAIL_LINK_ID: &str = "email-link";
pub const WHATSAPP_LINK_ID: &str = "whatsapp-link";
pub const TIMELINE_HEADING_ID: &str = "traj-heading";
pub const PORTFOLIO_HEADING_ID: &str = "portfolio-heading";
pub const SEARCH_INPUT_ID: &str = "busca";
pub const LANG_TOGGLE_ID: &str = "lang-toggle";

pub const SEARCH_BOX_CLASS: &str = "search";
pub const SEARCH_BUTTON_CLASS: &str = "search-button";
pub const OPEN_CLASS: &str = "open";
pub const TIMELINE_CONTAINER_CLASS: &str = "card-container";
pub const CASES_CONTAINER_CLASS: &str = "cases-container";
const AUTOFOCUS_ATTR: &str = "autofocus";

/// Destinations of the two contact links
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLinks {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub whatsapp: Option<String>,
}

/// The whole rendered page: the element tree plus the focused element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub root: Element,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,
}

impl Document {
    /// Build the page skeleton with empty static text and empty containers.
    pub fn new(contact: &ContactLinks) -> Self {
        Self {
            root: page_shell(contact),
            focus: None,
        }
    }

    pub fn timeline_container(&self) -> Option<&Element> {
        self.root.by_class(TIMELINE_CONTAINER_CLASS)
    }

    pub fn timeline_container_mut(&mut self) -> Option<&mut Element> {
        self.root.by_class_mut(TIMELINE_CONTAINER_CLASS)
    }

    pub fn cases_container(&self) -> Option<&Element> {
        self.root.by_class(CASES_CONTAINER_CLASS)
    }

    pub fn cases_container_mut(&mut self) -> Option<&mut Element> {
        self.root.by_class_mut(CASES_CONTAINER_CLASS)
    }

    pub fn search_box(&self) -> Option<&Element> {
        self.root.by_class(SEARCH_BOX_CLASS)
    }

    pub fn search_box_mut(&mut self) -> Option<&mut Element> {
        self.root.by_class_mut(SEARCH_BOX_CLASS)
    }

    pub fn by_id(&self, id: &str) -> Option<&Element> {
        self.root.by_id(id)
    }

    /// Replace the children of the timeline container.
    pub fn replace_timeline(&mut self, nodes: Vec<Node>) {
        if let Some(container) = self.timeline_container_mut() {
            container.children = nodes;
        }
    }

    /// Replace the children of the case-study container.
    pub fn replace_cases(&mut self, nodes: Vec<Node>) {
        if let Some(container) = self.cases_container_mut() {
            container.children = nodes;
        }
    }

    /// HTML serialisation. The focused element, if any, carries
    /// `autofocus`.
    pub fn to_html(&self) -> String {
        let focused = self.focus.as_deref().and_then(|id| {
            let mut root = self.root.clone();
            let el = root.by_id_mut(id)?;
            el.set_attr(AUTOFOCUS_ATTR, "");
            Some(root)
        });
        let root = focused.as_ref().unwrap_or(&self.root);
        format!("<!DOCTYPE html>\n{}\n", root.to_html())
    }
}

/// The fixed page structure. Static text is filled in by
/// [`apply_static_text`]; the containers by the card renderers.
pub fn page_shell(contact: &ContactLinks) -> Element {
    let head = Element::new("head")
        .child(Element::new("meta").attr("charset", "utf-8"))
        .child(
            Element::new("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1"),
        )
        .child(Element::new("link").attr("rel", "stylesheet").attr("href", "style.css"));

    let header = Element::new("header")
        .child(Element::new("h1").id(MAIN_TITLE_ID))
        .child(Element::new("p").id(INTRO_ID))
        .child(
            Element::new("button")
                .id(LANG_TOGGLE_ID)
                .attr("type", "button")
                .attr("aria-pressed", "false"),
        );

    let contact_section = Element::new("section")
        .class("contact")
        .child(Element::new("h3").id(CONTACT_HEADING_ID))
        .child(contact_link(EMAIL_LINK_ID, contact.email.as_deref(), "icon-email"))
        .child(contact_link(WHATSAPP_LINK_ID, contact.whatsapp.as_deref(), "icon-whatsapp"));

    let search = Element::new("div")
        .class(SEARCH_BOX_CLASS)
        .child(
            Element::new("input")
                .id(SEARCH_INPUT_ID)
                .attr("type", "text")
                .attr("autocomplete", "off"),
        )
        .child(
            Element::new("button")
                .class(SEARCH_BUTTON_CLASS)
                .attr("type", "button")
                .attr("aria-controls", SEARCH_INPUT_ID),
        );

    let timeline = Element::new("section")
        .class("trajectory")
        .child(Element::new("h2").id(TIMELINE_HEADING_ID))
        .child(search)
        .child(Element::new("div").class(TIMELINE_CONTAINER_CLASS));

    let portfolio = Element::new("section")
        .class("portfolio")
        .child(Element::new("h2").id(PORTFOLIO_HEADING_ID))
        .child(Element::new("div").class(CASES_CONTAINER_CLASS));

    let body = Element::new("body")
        .child(header)
        .child(contact_section)
        .child(timeline)
        .child(portfolio);

    Element::new("html").child(head).child(body)
}

fn contact_link(id: &str, href: Option<&str>, icon: &str) -> Element {
    let mut link = Element::new("a").id(id).attr("target", "_blank").attr("rel", "noopener noreferrer");
    if let Some(href) = href {
        link.set_attr("href", href);
    }
    link.child(
        Element::new("svg")
            .class("icon")
            .attr("aria-hidden", "true")
            .child(Element::new("use").attr("href", format!("#{icon}"))),
    )
}

/// Write every language-dependent static label of the page.
///
/// Link destinations and embedded `<svg>` icons are preserved; only the
/// label text changes. Applying the same language twice is a no-op.
pub fn apply_static_text(doc: &mut Document, lang: Lang) {
    doc.root.set_attr("lang", lang.html_lang());

    set_text(doc, MAIN_TITLE_ID, t(lang, "page.title"));
    set_text(doc, INTRO_ID, t(lang, "page.intro"));
    set_text(doc, CONTACT_HEADING_ID, t(lang, "contact.heading"));
    set_link_label(doc, EMAIL_LINK_ID, t(lang, "contact.email"));
    set_link_label(doc, WHATSAPP_LINK_ID, t(lang, "contact.whatsapp"));
    set_text(doc, TIMELINE_HEADING_ID, t(lang, "timeline.heading"));
    set_text(doc, PORTFOLIO_HEADING_ID, t(lang, "portfolio.heading"));

    if let Some(input) = doc.root.by_id_mut(SEARCH_INPUT_ID) {
        input.set_attr("placeholder", t(lang, "search.placeholder"));
    }

    if let Some(toggle) = doc.root.by_id_mut(LANG_TOGGLE_ID) {
        toggle.set_text(t(lang, "toggle.label"));
        toggle.set_attr("aria-pressed", (lang == Lang::En).to_string());
    }
}

fn set_text(doc: &mut Document, id: &str, text: &str) {
    if let Some(el) = doc.root.by_id_mut(id) {
        el.set_text(text);
    }
}

fn set_link_label(doc: &mut Document, id: &str, label: &str) {
    let Some(link) = doc.root.by_id_mut(id) else {
        return;
    };
    let icon = link
        .children
        .iter()
        .find(|child| child.as_element().map(|el| el.tag == "svg").unwrap_or(false))
        .cloned();
    link.children = icon.into_iter().collect();
    link.children.push(Node::text(format!(" {label}")));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> ContactLinks {
        ContactLinks {
            email: Some("mailto:agnes@example.com".into()),
            whatsapp: Some("https://wa.me/5500000000000".into()),
        }
    }

    #[test]
    fn shell_has_both_containers_empty() {
        let doc = Document::new(&contact());
        assert!(doc.timeline_container().unwrap().children.is_empty());
        assert!(doc.cases_container().unwrap().children.is_empty());
    }

    #[test]
    fn static_text_in_english() {
        let mut doc = Document::new(&contact());
        apply_static_text(&mut doc, Lang::En);
        assert_eq!(doc.root.get_attr("lang"), Some("en"));
        assert_eq!(doc.by_id(MAIN_TITLE_ID).unwrap().text_content(), "Hi, I'm Agnes do Amaral");
        assert_eq!(
            doc.by_id(SEARCH_INPUT_ID).unwrap().get_attr("placeholder"),
            Some("Search by activity, position, etc")
        );
        let toggle = doc.by_id(LANG_TOGGLE_ID).unwrap();
        assert_eq!(toggle.text_content(), "PT");
        assert_eq!(toggle.get_attr("aria-pressed"), Some("true"));
    }

    #[test]
    fn link_labels_keep_href_and_icon() {
        let mut doc = Document::new(&contact());
        apply_static_text(&mut doc, Lang::Pt);
        apply_static_text(&mut doc, Lang::En);
        let link = doc.by_id(EMAIL_LINK_ID).unwrap();
        assert_eq!(link.get_attr("href"), Some("mailto:agnes@example.com"));
        assert_eq!(link.children.len(), 2);
        assert_eq!(link.child_elements().next().map(|e| e.tag.as_str()), Some("svg"));
        assert_eq!(link.text_content(), " E-mail");
    }

    #[test]
    fn switching_back_restores_static_text() {
        let mut doc = Document::new(&contact());
        apply_static_text(&mut doc, Lang::Pt);
        let before = doc.clone();
        apply_static_text(&mut doc, Lang::En);
        assert_ne!(doc, before);
        apply_static_text(&mut doc, Lang::Pt);
        assert_eq!(doc, before);
    }

    #[test]
    fn missing_contact_href_is_omitted() {
        let doc = Document::new(&ContactLinks::default());
        assert_eq!(doc.by_id(WHATSAPP_LINK_ID).unwrap().get_attr("href"), None);
    }

    #[test]
    fn focused_input_is_marked_in_html() {
        let mut doc = Document::new(&contact());
        assert!(!doc.to_html().contains("autofocus"));

        doc.focus = Some(SEARCH_INPUT_ID.to_string());
        let html = doc.to_html();
        let input = html
            .split('<')
            .find(|tag| tag.starts_with("input"))
            .unwrap();
        assert!(input.contains("autofocus=\"\""));
        assert!(input.contains("id=\"busca\""));
        // The tree itself is left untouched.
        assert_eq!(doc.by_id(SEARCH_INPUT_ID).unwrap().get_attr("autofocus"), None);
    }
}
