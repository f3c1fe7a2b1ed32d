// SPDX-License-Identifier: PMPL-1.0-or-later

//! Dataset loading from a local file or an HTTP(S) URL

use crate::types::Dataset;
use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the data file lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(Url),
}

impl DataSource {
    /// Classify a user-supplied location. Only `http`/`https` URLs are
    /// fetched over the network; everything else is a file path.
    pub fn parse(location: &str) -> Self {
        match Url::parse(location) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => DataSource::Url(url),
            _ => DataSource::File(PathBuf::from(location)),
        }
    }
}

impl FromStr for DataSource {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(DataSource::parse(s))
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => write!(f, "{url}"),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{url} returned HTTP {status}")]
    Status {
        url: Url,
        status: reqwest::StatusCode,
    },
    #[error("malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fetch and index the dataset.
///
/// This is the single suspension point of the page: it either yields a fully
/// indexed [`Dataset`] or a [`LoadError`], never a partial result.
pub async fn load(source: &DataSource) -> Result<Dataset, LoadError> {
    let payload = fetch(source).await?;
    debug!(bytes = payload.len(), %source, "dataset payload received");

    let dataset = Dataset::from_json(&payload)?;
    info!(
        experiences = dataset.experiences.len(),
        cases = dataset.cases.len(),
        %source,
        "dataset loaded"
    );
    Ok(dataset)
}

async fn fetch(source: &DataSource) -> Result<String, LoadError> {
    match source {
        DataSource::File(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| LoadError::Io {
                    path: path.clone(),
                    source,
                })
        }
        DataSource::Url(url) => {
            let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;
            let response = client.get(url.clone()).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(LoadError::Status {
                    url: url.clone(),
                    status,
                });
            }
            Ok(response.text().await?)
        }
    }
}
