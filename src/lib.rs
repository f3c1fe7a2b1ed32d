// SPDX-License-Identifier: PMPL-1.0-or-later

//! Portfolio-Search: bilingual portfolio page with live search.
//!
//! Renders an experience timeline and a case-study gallery from a static
//! JSON data file, filters both lists as the visitor types, and switches the
//! whole page between Portuguese and English.
//!
//! PIPELINE:
//! 1. **Loader**: fetches the data file once and indexes every item with a
//!    lowercase search text per language.
//! 2. **Search**: case-insensitive substring filter over that text.
//! 3. **Render**: declarative cards and page skeleton, serialisable to HTML,
//!    JSON or YAML.
//! 4. **Controller**: owns the state and maps events (typing, toggles,
//!    clicks) onto re-renders.

pub mod config;
pub mod controller;
pub mod i18n;
pub mod loader;
pub mod render;
pub mod search;
pub mod session;
pub mod storage;
pub mod telemetry;
pub mod types;
