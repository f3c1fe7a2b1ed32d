// SPDX-License-Identifier: PMPL-1.0-or-later

//! Case-insensitive substring filtering over indexed items

use crate::i18n::Lang;
use crate::types::{CaseStudy, Dataset, Indexed, TimelineEntry};
use tracing::debug;

/// Items of `items` whose search text in `lang` contains `query`.
///
/// Matching is a plain substring test against the precomputed lowercase
/// text. An empty query matches everything. Source order is preserved.
pub fn filter<'a, T>(items: &'a [Indexed<T>], query: &str, lang: Lang) -> Vec<&'a T> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.search_text(lang).contains(needle.as_str()))
        .map(Indexed::item)
        .collect()
}

/// Result of running one query against both collections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matches<'a> {
    pub experiences: Vec<&'a TimelineEntry>,
    pub cases: Vec<&'a CaseStudy>,
}

/// Apply the same query to the timeline and the case studies.
pub fn filter_dataset<'a>(dataset: &'a Dataset, query: &str, lang: Lang) -> Matches<'a> {
    let matches = Matches {
        experiences: filter(&dataset.experiences, query, lang),
        cases: filter(&dataset.cases, query, lang),
    };
    debug!(
        query,
        %lang,
        experiences = matches.experiences.len(),
        cases = matches.cases.len(),
        "filter pass"
    );
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        Dataset::from_json(
            r#"{
            "experiencias": [
                {"nome": "Ana", "cargo": "Dev", "data": "2020", "descricao": ["Built X"]},
                {"nome": "Loja", "cargo": "Redatora", "data": "2021", "descricao": ["Textos para blog"],
                 "cargo_en": "Copywriter", "descricao_en": ["Blog copy"]}
            ],
            "cases": [
                {"titulo": "Blog da Loja", "descricao": "Artigos", "link": "https://a.io"},
                {"titulo": "Landing page", "link": "https://b.io", "titulo_en": "Landing page EN"}
            ]
        }"#,
        )
        .unwrap()
    }

    #[test]
    fn empty_query_matches_everything() {
        let data = dataset();
        let all = filter(&data.experiences, "", Lang::Pt);
        assert_eq!(all.len(), data.experiences.len());
    }

    #[test]
    fn query_is_case_insensitive() {
        let data = dataset();
        let hits = filter(&data.experiences, "DEV", Lang::Pt);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Ana");
    }

    #[test]
    fn matching_uses_the_selected_language() {
        let data = dataset();
        assert_eq!(filter(&data.experiences, "copywriter", Lang::Pt).len(), 0);
        assert_eq!(filter(&data.experiences, "copywriter", Lang::En).len(), 1);
        // Untranslated fields fall back to Portuguese in the English text.
        assert_eq!(filter(&data.experiences, "ana", Lang::En).len(), 1);
    }

    #[test]
    fn no_match_yields_empty() {
        let data = dataset();
        assert!(filter(&data.experiences, "zzz", Lang::Pt).is_empty());
    }

    #[test]
    fn order_is_preserved() {
        let data = dataset();
        let hits = filter(&data.cases, "a", Lang::Pt);
        let titles: Vec<&str> = hits.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Blog da Loja", "Landing page"]);
    }

    #[test]
    fn trailing_space_still_matches_case_without_description() {
        let data = dataset();
        let hits = filter(&data.cases, "landing page ", Lang::Pt);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Landing page");
        assert_eq!(filter(&data.cases, "landing page ", Lang::En).len(), 1);
    }

    #[test]
    fn both_collections_share_the_query() {
        let data = dataset();
        let matches = filter_dataset(&data, "loja", Lang::Pt);
        assert_eq!(matches.experiences.len(), 1);
        assert_eq!(matches.cases.len(), 1);
    }
}
