// SPDX-License-Identifier: PMPL-1.0-or-later

//! Current-language holder with persistence.

use super::Lang;
use crate::storage::{PreferenceStore, StorageError};
use tracing::warn;
use url::Url;

/// Where the start-up language came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageSource {
    /// Forced by the caller, e.g. a command-line flag.
    Override,
    UrlParameter,
    Stored,
    Default,
}

#[derive(Debug, Clone)]
pub struct LanguageStore {
    current: Lang,
    source: LanguageSource,
    prefs: PreferenceStore,
}

impl LanguageStore {
    /// Determine the start-up language.
    ///
    /// Precedence: `lang` query parameter of `page_url`, then the persisted
    /// preference, then `default`. Unsupported codes are skipped. The URL
    /// parameter only applies to this session and is not persisted.
    pub fn resolve(page_url: Option<&str>, prefs: PreferenceStore, default: Lang) -> Self {
        if let Some(lang) = page_url.and_then(url_lang_param).and_then(|code| parse_code(&code)) {
            return Self {
                current: lang,
                source: LanguageSource::UrlParameter,
                prefs,
            };
        }

        let stored = match prefs.stored_code() {
            Ok(code) => code,
            Err(e) => {
                warn!("ignoring unreadable language preference: {e}");
                None
            }
        };
        if let Some(lang) = stored.and_then(|code| parse_code(&code)) {
            return Self {
                current: lang,
                source: LanguageSource::Stored,
                prefs,
            };
        }

        Self {
            current: default,
            source: LanguageSource::Default,
            prefs,
        }
    }

    /// Start in `lang` regardless of URL or stored preference. Like the URL
    /// parameter, the choice is not persisted until the language is toggled.
    pub fn overridden(lang: Lang, prefs: PreferenceStore) -> Self {
        Self {
            current: lang,
            source: LanguageSource::Override,
            prefs,
        }
    }

    pub fn get(&self) -> Lang {
        self.current
    }

    pub fn source(&self) -> LanguageSource {
        self.source
    }

    pub fn preferences(&self) -> &PreferenceStore {
        &self.prefs
    }

    /// Select `lang` and persist it.
    ///
    /// The in-memory selection changes even when persisting fails.
    pub fn set(&mut self, lang: Lang) -> Result<(), StorageError> {
        self.current = lang;
        self.prefs.write_lang(lang)
    }

    /// Flip to the other language and persist it. Returns the new language.
    pub fn toggle(&mut self) -> Result<Lang, StorageError> {
        let next = self.current.toggled();
        self.set(next)?;
        Ok(next)
    }
}

/// Extract the raw `lang` query parameter from a page URL.
pub fn url_lang_param(page_url: &str) -> Option<String> {
    let url = match Url::parse(page_url) {
        Ok(url) => url,
        Err(e) => {
            warn!("ignoring unparsable page url {page_url:?}: {e}");
            return None;
        }
    };
    url.query_pairs()
        .find(|(key, _)| key == "lang")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

fn parse_code(code: &str) -> Option<Lang> {
    let lang = Lang::from_code(code);
    if lang.is_none() {
        warn!("ignoring unsupported language code {code:?}");
    }
    lang
}
