// SPDX-License-Identifier: PMPL-1.0-or-later

//! Timeline and case-study cards

use super::node::{Element, Node};
use crate::i18n::{t, Lang};
use crate::types::{CaseStudy, TimelineEntry};

pub const TIMELINE_CARD_CLASS: &str = "trajectory-card";
pub const EXPANDED_CLASS: &str = "expanded";
pub const NO_RESULTS_CLASS: &str = "sem-resultados";
pub const CASE_CARD_CLASS: &str = "case-card";
pub const CASE_IMAGE_CLASS: &str = "case-imagem";
pub const WITH_IMAGE_CLASS: &str = "com-imagem";

/// Cards for the timeline container.
///
/// An empty list yields a single "no results" paragraph. Cards are always
/// produced collapsed.
pub fn render_timeline(items: &[&TimelineEntry], lang: Lang) -> Vec<Node> {
    if items.is_empty() {
        return vec![Node::from(
            Element::new("p")
                .class(NO_RESULTS_CLASS)
                .text(t(lang, "search.no_results")),
        )];
    }
    items
        .iter()
        .map(|entry| Node::from(timeline_card(entry, lang)))
        .collect()
}

fn timeline_card(entry: &TimelineEntry, lang: Lang) -> Element {
    let bullets = entry
        .description_in(lang)
        .iter()
        .map(|item| Element::new("li").text(item.as_str()));

    Element::new("article")
        .class(TIMELINE_CARD_CLASS)
        .child(Element::new("h2").text(entry.name_in(lang)))
        .child(Element::new("p").text(entry.period_in(lang)))
        .child(Element::new("p").text(entry.role_in(lang)))
        .child(Element::new("ul").children(bullets))
}

/// Cards for the case-study container. An empty list renders nothing.
pub fn render_cases(items: &[&CaseStudy], lang: Lang) -> Vec<Node> {
    items
        .iter()
        .map(|case| Node::from(case_card(case, lang)))
        .collect()
}

fn case_card(case: &CaseStudy, lang: Lang) -> Element {
    let title = case.title_in(lang);
    let mut article = Element::new("article").class(CASE_CARD_CLASS);

    if let Some(src) = case.image() {
        article.add_class(WITH_IMAGE_CLASS);
        article = article.child(
            Element::new("img")
                .class(CASE_IMAGE_CLASS)
                .attr("src", src)
                .attr("alt", format!("{} {}", t(lang, "case.thumbnail_alt"), title)),
        );
    }

    article = article.child(Element::new("h4").text(title));

    if let Some(description) = case.description_in(lang) {
        article = article.child(Element::new("p").text(description));
    }

    article.child(
        Element::new("a")
            .attr("href", case.link.as_str())
            .attr("target", "_blank")
            .attr("rel", "noopener noreferrer")
            .text(t(lang, "case.learn_more")),
    )
}
