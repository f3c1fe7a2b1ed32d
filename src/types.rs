// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for the portfolio dataset
//!
//! The data file is authored in Portuguese; every textual field may carry an
//! optional English overlay with an `_en` suffix. Both the original Portuguese
//! key names (`experiencias`, `nome`, `cargo`, ...) and their English
//! equivalents are accepted on input.

use crate::i18n::{localized, localized_list, Lang};
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// One item of the professional-experience list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    #[serde(alias = "nome")]
    pub name: String,
    #[serde(alias = "cargo")]
    pub role: String,
    #[serde(alias = "data", default)]
    pub period: String,
    #[serde(alias = "descricao")]
    pub description: Vec<String>,

    #[serde(alias = "nome_en", default, skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    #[serde(alias = "cargo_en", default, skip_serializing_if = "Option::is_none")]
    pub role_en: Option<String>,
    #[serde(alias = "data_en", default, skip_serializing_if = "Option::is_none")]
    pub period_en: Option<String>,
    #[serde(alias = "descricao_en", default, skip_serializing_if = "Option::is_none")]
    pub description_en: Option<Vec<String>>,
}

impl TimelineEntry {
    pub fn name_in(&self, lang: Lang) -> &str {
        localized(lang, &self.name, self.name_en.as_deref())
    }

    pub fn role_in(&self, lang: Lang) -> &str {
        localized(lang, &self.role, self.role_en.as_deref())
    }

    pub fn period_in(&self, lang: Lang) -> &str {
        localized(lang, &self.period, self.period_en.as_deref())
    }

    pub fn description_in(&self, lang: Lang) -> &[String] {
        localized_list(lang, &self.description, self.description_en.as_deref())
    }
}

/// One portfolio work sample
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudy {
    #[serde(alias = "titulo")]
    pub title: String,
    #[serde(alias = "descricao", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub link: String,
    #[serde(alias = "imagem", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(alias = "titulo_en", default, skip_serializing_if = "Option::is_none")]
    pub title_en: Option<String>,
    #[serde(alias = "descricao_en", default, skip_serializing_if = "Option::is_none")]
    pub description_en: Option<String>,
}

impl CaseStudy {
    pub fn title_in(&self, lang: Lang) -> &str {
        localized(lang, &self.title, self.title_en.as_deref())
    }

    /// Localized description, `None` when absent or empty.
    pub fn description_in(&self, lang: Lang) -> Option<&str> {
        let default = self.description.as_deref().unwrap_or("");
        Some(localized(lang, default, self.description_en.as_deref())).filter(|d| !d.is_empty())
    }

    /// Thumbnail path, `None` when absent or empty.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref().filter(|src| !src.is_empty())
    }
}

/// Items that can be matched by the search box
pub trait Searchable {
    /// Text fields that make up the searchable text, joined with single
    /// spaces. Empty fields are kept. The default-language name or title is
    /// always among them.
    fn search_fields(&self, lang: Lang) -> Vec<&str>;
}

impl Searchable for TimelineEntry {
    fn search_fields(&self, lang: Lang) -> Vec<&str> {
        let name = self.name_in(lang);
        let mut fields = Vec::new();
        // A translated name still finds the entry by its Portuguese name.
        if name != self.name {
            fields.push(self.name.as_str());
        }
        fields.extend([name, self.role_in(lang)]);
        fields.extend(self.description_in(lang).iter().map(String::as_str));
        fields
    }
}

impl Searchable for CaseStudy {
    fn search_fields(&self, lang: Lang) -> Vec<&str> {
        let title = self.title_in(lang);
        let mut fields = Vec::new();
        if title != self.title {
            fields.push(self.title.as_str());
        }
        // A missing description still contributes its separator.
        fields.extend([title, self.description_in(lang).unwrap_or("")]);
        fields
    }
}

/// Precomputed lowercase search text, one per language
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchText {
    pt: String,
    en: String,
}

impl SearchText {
    pub fn build<T: Searchable + ?Sized>(item: &T) -> Self {
        Self {
            pt: join_lowercase(item.search_fields(Lang::Pt)),
            en: join_lowercase(item.search_fields(Lang::En)),
        }
    }

    pub fn get(&self, lang: Lang) -> &str {
        match lang {
            Lang::Pt => &self.pt,
            Lang::En => &self.en,
        }
    }
}

fn join_lowercase(fields: Vec<&str>) -> String {
    fields.join(" ").to_lowercase()
}

/// An item paired with its search text, computed once on construction.
///
/// The item is only reachable through shared references, so the search text
/// can never go stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indexed<T> {
    item: T,
    search_text: SearchText,
}

impl<T: Searchable> Indexed<T> {
    pub fn new(item: T) -> Self {
        let search_text = SearchText::build(&item);
        Self { item, search_text }
    }
}

impl<T> Indexed<T> {
    pub fn item(&self) -> &T {
        &self.item
    }

    pub fn search_text(&self, lang: Lang) -> &str {
        self.search_text.get(lang)
    }
}

impl<T> Deref for Indexed<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.item
    }
}

/// Wire shape of the data file
#[derive(Debug, Clone, Deserialize)]
struct RawDataset {
    #[serde(alias = "experiencias")]
    experiences: Vec<TimelineEntry>,
    cases: Vec<CaseStudy>,
}

/// The loaded data file: timeline entries and case studies, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawDataset")]
pub struct Dataset {
    pub experiences: Vec<Indexed<TimelineEntry>>,
    pub cases: Vec<Indexed<CaseStudy>>,
}

impl Dataset {
    pub fn new(experiences: Vec<TimelineEntry>, cases: Vec<CaseStudy>) -> Self {
        Self {
            experiences: experiences.into_iter().map(Indexed::new).collect(),
            cases: cases.into_iter().map(Indexed::new).collect(),
        }
    }

    /// Parse a data file payload and index every item.
    pub fn from_json(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(payload)
    }
}

impl From<RawDataset> for Dataset {
    fn from(raw: RawDataset) -> Self {
        Dataset::new(raw.experiences, raw.cases)
    }
}
