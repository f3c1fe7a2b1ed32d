// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation for the portfolio page.
//!
//! ## Supported languages
//!
//! | Code | Language   | `<html lang>` |
//! |------|------------|---------------|
//! | pt   | Portuguese | pt-BR         |
//! | en   | English    | en            |
//!
//! Static labels live in an embedded catalog (see [`t`]). Dataset fields are
//! localized separately: English values are optional `_en` overlays on each
//! entry, resolved by [`localized`].
//!
//! The selected language itself is held by [`LanguageStore`], which reads and
//! writes the persisted preference through [`crate::storage`].

mod catalog;
mod store;

pub use catalog::{t, Lang};
pub use store::{url_lang_param, LanguageSource, LanguageStore};

/// Pick the language-appropriate value of a text field.
///
/// The overlay wins only when the language is English and the overlay is
/// present and non-empty; otherwise the default-language value is returned
/// verbatim.
pub fn localized<'a>(lang: Lang, default: &'a str, overlay: Option<&'a str>) -> &'a str {
    match (lang, overlay) {
        (Lang::En, Some(value)) if !value.is_empty() => value,
        _ => default,
    }
}

/// List counterpart of [`localized`]: a present overlay always wins in English.
pub fn localized_list<'a>(
    lang: Lang,
    default: &'a [String],
    overlay: Option<&'a [String]>,
) -> &'a [String] {
    match (lang, overlay) {
        (Lang::En, Some(values)) => values,
        _ => default,
    }
}
