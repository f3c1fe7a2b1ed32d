// SPDX-License-Identifier: PMPL-1.0-or-later

//! View controller: owns the application state and the rendered document,
//! and turns user events into re-renders.
//!
//! All transitions run to completion on the caller's thread before the next
//! event is handled, so the document always reflects the latest input.

use crate::i18n::{Lang, LanguageStore};
use crate::loader::{self, DataSource, LoadError};
use crate::render::cards::{EXPANDED_CLASS, TIMELINE_CARD_CLASS};
use crate::render::page::{OPEN_CLASS, SEARCH_INPUT_ID};
use crate::render::{apply_static_text, render_cases, render_timeline, ContactLinks, Document};
use crate::search::filter_dataset;
use crate::types::Dataset;
use serde::Serialize;
use tracing::{debug, error, info, warn};

/// Progress of the one-off dataset load
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "reason", rename_all = "lowercase")]
pub enum LoadState {
    Pending,
    Loaded,
    Failed(String),
}

/// User interactions the page reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The search input now holds this text.
    Input(String),
    ToggleLanguage,
    ToggleSearch,
    /// Click on the node at this child-index path inside the timeline container.
    Click(Vec<usize>),
}

/// Everything the page knows besides its markup
#[derive(Debug)]
pub struct AppState {
    language: LanguageStore,
    query: String,
    dataset: Dataset,
    load_state: LoadState,
}

impl AppState {
    pub fn new(language: LanguageStore) -> Self {
        Self {
            language,
            query: String::new(),
            dataset: Dataset::default(),
            load_state: LoadState::Pending,
        }
    }

    pub fn lang(&self) -> Lang {
        self.language.get()
    }

    pub fn language(&self) -> &LanguageStore {
        &self.language
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn is_loaded(&self) -> bool {
        self.load_state == LoadState::Loaded
    }
}

pub struct ViewController {
    state: AppState,
    doc: Document,
}

impl ViewController {
    /// Build the page and apply the start-up language's static text.
    pub fn new(language: LanguageStore, contact: &ContactLinks) -> Self {
        let state = AppState::new(language);
        let mut doc = Document::new(contact);
        apply_static_text(&mut doc, state.lang());
        Self { state, doc }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Load the dataset once and render both full collections. Once the
    /// load has settled, further calls return the recorded state without
    /// touching `source`.
    pub async fn start(&mut self, source: &DataSource) -> &LoadState {
        if self.state.load_state != LoadState::Pending {
            debug!(%source, "dataset already settled, not loading again");
            return &self.state.load_state;
        }
        info!(%source, lang = %self.state.lang(), "loading dataset");
        let result = loader::load(source).await;
        self.finish_load(result)
    }

    /// Continuation of the load: either render everything or stay empty.
    pub fn finish_load(&mut self, result: Result<Dataset, LoadError>) -> &LoadState {
        if self.state.load_state != LoadState::Pending {
            warn!("dataset already settled, ignoring load result");
            return &self.state.load_state;
        }
        match result {
            Ok(dataset) => {
                self.state.dataset = dataset;
                self.state.load_state = LoadState::Loaded;
                self.rerender();
            }
            Err(e) => {
                error!("failed to load or process the dataset: {e}");
                self.state.load_state = LoadState::Failed(e.to_string());
            }
        }
        &self.state.load_state
    }

    /// Apply one event. Returns whether the document changed.
    pub fn handle(&mut self, event: Event) -> bool {
        let before = self.doc.clone();
        match event {
            Event::Input(query) => self.on_input(query),
            Event::ToggleLanguage => self.on_toggle_language(),
            Event::ToggleSearch => self.on_toggle_search(),
            Event::Click(path) => self.on_click(&path),
        }
        self.doc != before
    }

    fn on_input(&mut self, query: String) {
        if let Some(input) = self.doc.root.by_id_mut(SEARCH_INPUT_ID) {
            input.set_attr("value", query.as_str());
        }
        self.state.query = query;
        self.rerender();
    }

    fn on_toggle_language(&mut self) {
        let lang = match self.state.language.toggle() {
            Ok(lang) => lang,
            Err(e) => {
                warn!("language preference not saved: {e}");
                self.state.lang()
            }
        };
        info!(%lang, "language switched");
        apply_static_text(&mut self.doc, lang);
        self.rerender();
    }

    fn on_toggle_search(&mut self) {
        let Some(search) = self.doc.search_box_mut() else {
            return;
        };
        if search.toggle_class(OPEN_CLASS) {
            self.doc.focus = Some(SEARCH_INPUT_ID.to_string());
        }
    }

    /// Delegated click handling: the nearest enclosing timeline card toggles.
    fn on_click(&mut self, path: &[usize]) {
        let Some(container) = self.doc.timeline_container_mut() else {
            return;
        };
        let card_depth = (1..=path.len()).rev().find(|&depth| {
            container
                .element_at(&path[..depth])
                .map(|el| el.has_class(TIMELINE_CARD_CLASS))
                .unwrap_or(false)
        });
        let Some(depth) = card_depth else {
            debug!(?path, "click outside any timeline card");
            return;
        };
        if let Some(card) = container.element_at_mut(&path[..depth]) {
            let expanded = card.toggle_class(EXPANDED_CLASS);
            debug!(card = path[0], expanded, "timeline card toggled");
        }
    }

    /// Filter both collections with the current query and language and
    /// replace both containers. Does nothing until the dataset is loaded.
    fn rerender(&mut self) {
        if !self.state.is_loaded() {
            return;
        }
        let lang = self.state.lang();
        let matches = filter_dataset(&self.state.dataset, &self.state.query, lang);
        let timeline = render_timeline(&matches.experiences, lang);
        let cases = render_cases(&matches.cases, lang);
        self.doc.replace_timeline(timeline);
        self.doc.replace_cases(cases);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::PreferenceStore;
    use tempfile::TempDir;

    fn controller(dir: &TempDir) -> ViewController {
        let prefs = PreferenceStore::new(dir.path().join("prefs.json"));
        let language = LanguageStore::resolve(None, prefs, Lang::Pt);
        ViewController::new(language, &ContactLinks::default())
    }

    fn dataset() -> Dataset {
        Dataset::from_json(
            r#"{"experiences":[{"nome":"Ana","cargo":"Dev","data":"2020","descricao":["Built X"]}],"cases":[]}"#,
        )
        .unwrap()
    }

    fn timeline_len(ctl: &ViewController) -> usize {
        ctl.document().timeline_container().unwrap().children.len()
    }

    #[test]
    fn failed_load_leaves_page_empty() {
        let dir = TempDir::new().unwrap();
        let mut ctl = controller(&dir);
        let err = serde_json::from_str::<Dataset>("{").unwrap_err();
        let state = ctl.finish_load(Err(LoadError::Parse(err))).clone();
        assert!(matches!(state, LoadState::Failed(_)));
        assert_eq!(timeline_len(&ctl), 0);

        ctl.handle(Event::Input("dev".into()));
        assert_eq!(timeline_len(&ctl), 0);
    }

    #[test]
    fn second_load_result_is_ignored() {
        let dir = TempDir::new().unwrap();
        let mut ctl = controller(&dir);
        ctl.finish_load(Ok(dataset()));
        ctl.finish_load(Ok(Dataset::default()));
        assert_eq!(ctl.state().dataset().experiences.len(), 1);
    }

    #[test]
    fn click_inside_card_toggles_it() {
        let dir = TempDir::new().unwrap();
        let mut ctl = controller(&dir);
        ctl.finish_load(Ok(dataset()));

        // Text node inside the first bullet of the first card.
        assert!(ctl.handle(Event::Click(vec![0, 3, 0, 0])));
        let card = ctl.document().timeline_container().unwrap().element_at(&[0]).unwrap();
        assert!(card.has_class(EXPANDED_CLASS));

        assert!(ctl.handle(Event::Click(vec![0])));
        let card = ctl.document().timeline_container().unwrap().element_at(&[0]).unwrap();
        assert!(!card.has_class(EXPANDED_CLASS));
    }

    #[test]
    fn click_outside_cards_is_ignored() {
        let dir = TempDir::new().unwrap();
        let mut ctl = controller(&dir);
        ctl.finish_load(Ok(dataset()));
        assert!(!ctl.handle(Event::Click(vec![])));
        assert!(!ctl.handle(Event::Click(vec![7])));
    }

    #[test]
    fn rerender_resets_expanded_cards() {
        let dir = TempDir::new().unwrap();
        let mut ctl = controller(&dir);
        ctl.finish_load(Ok(dataset()));
        ctl.handle(Event::Click(vec![0]));
        ctl.handle(Event::Input(String::new()));
        let card = ctl.document().timeline_container().unwrap().element_at(&[0]).unwrap();
        assert!(!card.has_class(EXPANDED_CLASS));
    }

    #[test]
    fn search_box_opens_and_focuses() {
        let dir = TempDir::new().unwrap();
        let mut ctl = controller(&dir);
        ctl.handle(Event::ToggleSearch);
        assert!(ctl.document().search_box().unwrap().has_class(OPEN_CLASS));
        assert_eq!(ctl.document().focus.as_deref(), Some(SEARCH_INPUT_ID));

        ctl.handle(Event::ToggleSearch);
        assert!(!ctl.document().search_box().unwrap().has_class(OPEN_CLASS));
        assert_eq!(timeline_len(&ctl), 0);
    }
}
