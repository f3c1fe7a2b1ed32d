// SPDX-License-Identifier: PMPL-1.0-or-later

//! Optional YAML configuration.
//!
//! ```yaml
//! data: https://example.com/data.json
//! preferences: .portfolio/preferences.json
//! default_lang: pt
//! contact:
//!   email: mailto:agnes@example.com
//!   whatsapp: https://wa.me/5500000000000
//! ```

use crate::i18n::Lang;
use crate::loader::DataSource;
use crate::render::ContactLinks;
use crate::storage::PreferenceStore;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "PORTFOLIO_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "portfolio.yaml";
const DEFAULT_DATA: &str = "data.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PortfolioConfig {
    pub data: Option<String>,
    pub preferences: Option<PathBuf>,
    pub default_lang: Option<Lang>,
    pub contact: ContactLinks,
}

impl PortfolioConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Locate and read the configuration.
    ///
    /// An explicit path or `PORTFOLIO_CONFIG` must point at a readable file;
    /// the implicit `portfolio.yaml` is only read when present.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        if let Ok(path) = env::var(CONFIG_ENV) {
            if !path.is_empty() {
                return Self::from_file(Path::new(&path));
            }
        }
        let implicit = Path::new(DEFAULT_CONFIG_FILE);
        if implicit.exists() {
            return Self::from_file(implicit);
        }
        Ok(Self::default())
    }

    pub fn data_source(&self) -> DataSource {
        DataSource::parse(self.data.as_deref().unwrap_or(DEFAULT_DATA))
    }

    pub fn preference_store(&self) -> PreferenceStore {
        self.preferences
            .as_ref()
            .map(PreferenceStore::new)
            .unwrap_or_default()
    }

    pub fn default_lang(&self) -> Lang {
        self.default_lang.unwrap_or_default()
    }
}
