// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation catalog for the portfolio page.
//!
//! Embeds every static label of the page for both supported languages as a
//! compile-time table. Lookup is a linear scan over a dozen keys; it runs
//! once per language switch, not per keystroke.
//!
//! ## Adding a new key
//!
//! 1. Add the Portuguese entry to `PT` (the source language)
//! 2. Add the English entry to `EN` (missing keys fall back to Portuguese)

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The two languages the page can be displayed in.
///
/// Portuguese is the language the data file is authored in; English values
/// are optional overlays on top of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Pt,
    En,
}

impl Lang {
    /// ISO 639-1 two-letter code, also the persisted preference value.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::Pt => "pt",
            Lang::En => "en",
        }
    }

    /// Parse a language code. Returns `None` for anything but `pt` / `en`.
    ///
    /// Case-insensitive, because the code may come from a hand-typed URL.
    pub fn from_code(code: &str) -> Option<Lang> {
        match code.trim().to_ascii_lowercase().as_str() {
            "pt" => Some(Lang::Pt),
            "en" => Some(Lang::En),
            _ => None,
        }
    }

    /// Both languages, default first.
    pub fn all() -> &'static [Lang] {
        &[Lang::Pt, Lang::En]
    }

    /// The other supported language.
    pub fn toggled(&self) -> Lang {
        match self {
            Lang::Pt => Lang::En,
            Lang::En => Lang::Pt,
        }
    }

    /// Value for the document's `<html lang>` attribute.
    pub fn html_lang(&self) -> &'static str {
        match self {
            Lang::Pt => "pt-BR",
            Lang::En => "en",
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Lang {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lang::from_code(s).ok_or_else(|| format!("unsupported language code: {s}"))
    }
}

// ─── Translation Lookup ─────────────────────────────────────────────

/// Look up a translation key in the specified language.
///
/// Falls back to Portuguese if the key is missing in the requested language,
/// and to the empty string if it is missing there too.
///
/// # Examples
///
/// ```
/// use portfolio_search::i18n::{t, Lang};
/// assert_eq!(t(Lang::Pt, "search.no_results"), "Nenhum resultado encontrado.");
/// assert_eq!(t(Lang::En, "search.no_results"), "No results found.");
/// ```
pub fn t(lang: Lang, key: &str) -> &'static str {
    if let Some(value) = lookup(catalog_for(lang), key) {
        return value;
    }
    if lang != Lang::Pt {
        if let Some(value) = lookup(PT, key) {
            return value;
        }
    }
    ""
}

fn lookup(catalog: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    catalog.iter().find(|&&(k, _)| k == key).map(|&(_, v)| v)
}

fn catalog_for(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::Pt => PT,
        Lang::En => EN,
    }
}

// ─── Portuguese (source language, all keys defined here) ───────────

const PT: &[(&str, &str)] = &[
    ("page.title", "Oi, eu sou a Agnes do Amaral"),
    ("page.intro", "💡 Com experiência desde 2016 em copywriting, produção de conteúdo estratégico, UX writing e marketing digital. Atuei em agências e principalmente em empresas B2B, especialmente no setor de tecnologia, criando conteúdos técnicos e publicitários para geração de demanda, fortalecimento de marca e suporte à área comercial. Minha vivência inclui atividades como social media, criação de landing pages e fluxos de e-mail, metodologias ágeis, SEO e roteirização de vídeos. Sou uma profissional versátil, colaborativa e sempre aberta a novos aprendizados."),
    ("search.placeholder", "Busque por atividade, cargo, etc"),
    ("search.no_results", "Nenhum resultado encontrado."),
    ("contact.heading", "Vamos trabalhar juntos?"),
    ("contact.email", "E-mail"),
    ("contact.whatsapp", "WhatsApp"),
    ("timeline.heading", "Minha Trajetória Profissional"),
    ("portfolio.heading", "Portfólio"),
    ("case.learn_more", "Saiba mais"),
    ("case.thumbnail_alt", "Thumbnail do case"),
    // The toggle advertises the language it switches to.
    ("toggle.label", "EN"),
];

// ─── English ────────────────────────────────────────────────────────

const EN: &[(&str, &str)] = &[
    ("page.title", "Hi, I'm Agnes do Amaral"),
    ("page.intro", "💡 I have been working since 2016 in copywriting, strategic content production, UX writing and digital marketing. I've worked in agencies and mainly in B2B tech companies, creating technical and advertising content to drive demand, strengthen brands and support sales teams. My experience includes social media, landing pages and email flows, agile methodologies, SEO and video scripting. I'm versatile, collaborative and always open to new learning."),
    ("search.placeholder", "Search by activity, position, etc"),
    ("search.no_results", "No results found."),
    ("contact.heading", "Shall we work together?"),
    ("timeline.heading", "My Professional Background"),
    ("portfolio.heading", "Portfolio"),
    ("case.learn_more", "Learn more"),
    ("case.thumbnail_alt", "Case thumbnail:"),
    ("toggle.label", "PT"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portuguese_keys_all_resolve() {
        for &(key, _) in PT {
            assert!(!t(Lang::Pt, key).is_empty(), "PT key '{}' should resolve", key);
        }
    }

    #[test]
    fn english_keys_are_a_subset_of_portuguese() {
        for &(key, _) in EN {
            assert!(
                lookup(PT, key).is_some(),
                "EN key '{}' has no Portuguese source",
                key
            );
        }
    }

    #[test]
    fn fallback_to_portuguese() {
        // Contact labels are identical in both languages and only stored once.
        assert_eq!(t(Lang::En, "contact.email"), "E-mail");
        assert_eq!(t(Lang::En, "contact.whatsapp"), "WhatsApp");
    }

    #[test]
    fn unknown_key_is_empty() {
        assert_eq!(t(Lang::En, "does.not.exist"), "");
    }

    #[test]
    fn lang_code_roundtrip() {
        for lang in Lang::all() {
            assert_eq!(Lang::from_code(lang.code()), Some(*lang));
        }
        assert_eq!(Lang::from_code("EN"), Some(Lang::En));
        assert_eq!(Lang::from_code("fr"), None);
        assert_eq!(Lang::from_code(""), None);
    }

    #[test]
    fn toggle_flips_between_the_two_languages() {
        assert_eq!(Lang::Pt.toggled(), Lang::En);
        assert_eq!(Lang::En.toggled(), Lang::Pt);
        assert_eq!(Lang::default(), Lang::Pt);
    }
}
