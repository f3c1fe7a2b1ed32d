// SPDX-License-Identifier: PMPL-1.0-or-later

//! Filtering properties over the demo dataset

use portfolio_search::i18n::Lang;
use portfolio_search::search::{filter, filter_dataset};
use portfolio_search::types::{Dataset, TimelineEntry};
use std::path::Path;

fn demo_dataset() -> Dataset {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/data.json");
    let payload = std::fs::read_to_string(path).expect("demo data should exist");
    Dataset::from_json(&payload).expect("demo data should parse")
}

#[test]
fn test_empty_query_returns_everything_in_order() {
    let dataset = demo_dataset();
    for lang in Lang::all() {
        let matches = filter_dataset(&dataset, "", *lang);
        assert_eq!(matches.experiences.len(), dataset.experiences.len());
        assert_eq!(matches.cases.len(), dataset.cases.len());
        for (found, original) in matches.experiences.iter().zip(&dataset.experiences) {
            assert_eq!(*found, original.item());
        }
    }
}

#[test]
fn test_results_are_an_ordered_subset() {
    let dataset = demo_dataset();
    for query in ["e", "ux", "página", "LANDING", "zzz"] {
        let found = filter(&dataset.experiences, query, Lang::Pt);
        let positions: Vec<usize> = found
            .iter()
            .map(|entry| {
                dataset
                    .experiences
                    .iter()
                    .position(|e| std::ptr::eq(e.item(), *entry))
                    .expect("result must come from the input")
            })
            .collect();
        assert!(
            positions.windows(2).all(|w| w[0] < w[1]),
            "order broken for {query:?}"
        );
    }
}

#[test]
fn test_matching_ignores_case() {
    let dataset = demo_dataset();
    let lower = filter_dataset(&dataset, "landing", Lang::Pt);
    let upper = filter_dataset(&dataset, "LANDING", Lang::Pt);
    assert_eq!(lower, upper);
    assert_eq!(lower.experiences.len(), 1);
    assert_eq!(lower.cases.len(), 1);
}

#[test]
fn test_language_selects_the_searched_text() {
    let dataset = demo_dataset();
    assert!(filter_dataset(&dataset, "copywriter", Lang::Pt).experiences.is_empty());
    assert_eq!(filter_dataset(&dataset, "copywriter", Lang::En).experiences.len(), 1);
    assert_eq!(filter_dataset(&dataset, "redatora", Lang::Pt).experiences.len(), 1);
}

#[test]
fn test_missing_translation_searches_portuguese_text() {
    let dataset = demo_dataset();
    // The second entry has no english bullets.
    let found = filter(&dataset.experiences, "redes sociais", Lang::En);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Agência Digital");
}

#[test]
fn test_period_is_not_searchable() {
    let dataset = Dataset::new(
        vec![TimelineEntry {
            name: "Acme".into(),
            role: "Dev".into(),
            period: "2019".into(),
            description: vec!["Wrote code".into()],
            name_en: None,
            role_en: None,
            period_en: None,
            description_en: None,
        }],
        vec![],
    );
    assert!(filter(&dataset.experiences, "2019", Lang::Pt).is_empty());
    assert_eq!(filter(&dataset.experiences, "wrote", Lang::Pt).len(), 1);
}
