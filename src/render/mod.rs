// SPDX-License-Identifier: PMPL-1.0-or-later

//! Page rendering
//!
//! Rendering is declarative: the card renderers turn filtered items into
//! [`Node`] lists, and the view controller swaps them into the [`Document`].
//! Nothing here touches I/O except [`save_document`].

pub mod cards;
pub mod formatter;
pub mod node;
pub mod output;
pub mod page;

use anyhow::Result;
use std::path::Path;

pub use cards::{render_cases, render_timeline};
pub use formatter::ConsoleFormatter;
pub use node::{Element, Node};
pub use output::OutputFormat;
pub use page::{apply_static_text, page_shell, ContactLinks, Document};

/// Serialise `doc` in `format` and write it to `path`
pub fn save_document<P: AsRef<Path>>(doc: &Document, format: OutputFormat, path: P) -> Result<()> {
    let content = format.serialize(doc)?;
    std::fs::write(path.as_ref(), content)?;
    tracing::info!(path = %path.as_ref().display(), ?format, "page written");
    Ok(())
}
