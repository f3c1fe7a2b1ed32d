// SPDX-License-Identifier: PMPL-1.0-or-later

//! Console listing of search matches

use crate::i18n::{t, Lang};
use crate::search::Matches;
use colored::*;

pub struct ConsoleFormatter {
    lang: Lang,
}

impl ConsoleFormatter {
    pub fn new(lang: Lang) -> Self {
        Self { lang }
    }

    pub fn print(&self, query: &str, matches: &Matches<'_>) {
        print!("{}", self.format(query, matches));
    }

    pub fn format(&self, query: &str, matches: &Matches<'_>) -> String {
        let lang = self.lang;
        let mut out = String::new();

        out.push_str(&format!(
            "{} {} ({})\n\n",
            "SEARCH".bold().cyan(),
            format!("{query:?}").bold(),
            lang
        ));

        out.push_str(&format!(
            "{} [{}]\n",
            t(lang, "timeline.heading").bold().yellow(),
            matches.experiences.len()
        ));
        if matches.experiences.is_empty() {
            out.push_str(&format!("  {}\n", t(lang, "search.no_results").dimmed()));
        }
        for entry in &matches.experiences {
            out.push_str(&format!(
                "  {} {} {}\n",
                entry.name_in(lang).bold(),
                "·".dimmed(),
                entry.period_in(lang).dimmed()
            ));
            out.push_str(&format!("    {}\n", entry.role_in(lang).green()));
            for bullet in entry.description_in(lang) {
                out.push_str(&format!("    - {bullet}\n"));
            }
        }
        out.push('\n');

        out.push_str(&format!(
            "{} [{}]\n",
            t(lang, "portfolio.heading").bold().yellow(),
            matches.cases.len()
        ));
        for case in &matches.cases {
            out.push_str(&format!("  {}\n", case.title_in(lang).bold()));
            if let Some(description) = case.description_in(lang) {
                out.push_str(&format!("    {description}\n"));
            }
            out.push_str(&format!(
                "    {}: {}\n",
                t(lang, "case.learn_more"),
                case.link.as_str().underline()
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::filter_dataset;
    use crate::types::Dataset;

    #[test]
    fn lists_both_collections() {
        let data = Dataset::from_json(
            r#"{"experiences":[{"nome":"Ana","cargo":"Dev","data":"2020","descricao":["Built X"]}],
                "cases":[{"titulo":"Case","descricao":"Sobre","link":"https://x.io"}]}"#,
        )
        .unwrap();
        let matches = filter_dataset(&data, "", Lang::Pt);
        let text = ConsoleFormatter::new(Lang::Pt).format("", &matches);
        assert!(text.contains("Ana"));
        assert!(text.contains("Built X"));
        assert!(text.contains("Sobre"));
        assert!(text.contains("https://x.io"));
    }

    #[test]
    fn empty_timeline_prints_no_results() {
        let data = Dataset::default();
        let matches = filter_dataset(&data, "zzz", Lang::En);
        let text = ConsoleFormatter::new(Lang::En).format("zzz", &matches);
        assert!(text.contains("No results found."));
    }
}
