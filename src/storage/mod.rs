// SPDX-License-Identifier: PMPL-1.0-or-later

//! Persistent storage for the language preference.
//!
//! The preference file is a tiny JSON object (`{"lang":"en"}`). The stored
//! code is kept as a plain string so that a hand-edited or stale value is
//! ignored by the caller instead of making the whole file unreadable.

use crate::i18n::Lang;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_PREFS_FILE: &str = ".portfolio/preferences.json";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read preferences from {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write preferences to {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("malformed preferences file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to serialise preferences: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

/// File-backed key/value store holding the last selected language.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn default_path() -> PathBuf {
        PathBuf::from(DEFAULT_PREFS_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the preference file. A missing file means "no preference yet".
    pub fn read(&self) -> Result<Preferences, StorageError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Preferences::default()),
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        serde_json::from_str(&data).map_err(|source| StorageError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// The stored language code, if any. Not validated.
    pub fn stored_code(&self) -> Result<Option<String>, StorageError> {
        Ok(self.read()?.lang)
    }

    pub fn write_lang(&self, lang: Lang) -> Result<(), StorageError> {
        let mut prefs = match self.read() {
            Ok(prefs) => prefs,
            // A corrupt file is overwritten rather than blocking the toggle.
            Err(StorageError::Parse { .. }) => Preferences::default(),
            Err(e) => return Err(e),
        };
        prefs.lang = Some(lang.code().to_string());
        let json = serde_json::to_string_pretty(&prefs)?;
        write_atomic(&self.path, json.as_bytes())
    }
}

impl Default for PreferenceStore {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), StorageError> {
    let write_err = |source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let tmp = tmp_path(path);
    fs::write(&tmp, bytes).map_err(write_err)?;
    fs::rename(&tmp, path).map_err(write_err)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("preferences");
    path.with_file_name(format!("{file_name}.tmp"))
}
