// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for printed/exported pages

use super::page::Document;
use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn serialize(&self, doc: &Document) -> Result<String> {
        match self {
            OutputFormat::Html => Ok(doc.to_html()),
            // The structured formats carry the same tree for tooling and tests.
            OutputFormat::Json => Ok(serde_json::to_string_pretty(doc)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(doc)?),
        }
    }
}
