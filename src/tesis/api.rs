//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for UI
//! clients. It dispatches to `commands/*.rs`, carries the state that outlives a
//! single command (the recent list and the config location) and returns
//! structured `Result<CmdResult>` values. No output formatting happens here.
//!
//! `CatalogApi<S: RecordStore>` is generic over the store: the CLI uses
//! `CatalogApi<JsonStore>`, tests use `CatalogApi<InMemoryStore>`.

use crate::commands;
use crate::error::Result;
use crate::filters::FilterState;
use crate::recent::RecentItems;
use crate::store::RecordStore;
use crate::validation::{validate_filters, FieldErrors};
use std::path::{Path, PathBuf};

pub use crate::commands::config::ConfigAction;
pub use crate::commands::search::SearchRequest;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

pub struct CatalogApi<S: RecordStore> {
    store: S,
    config_dir: PathBuf,
    recent: RecentItems,
}

impl<S: RecordStore> CatalogApi<S> {
    pub fn new(store: S, config_dir: PathBuf) -> Self {
        Self {
            store,
            config_dir,
            recent: RecentItems::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn recent(&self) -> &RecentItems {
        &self.recent
    }

    /// Checks filters without running a search.
    pub fn validate(&self, filters: &FilterState) -> std::result::Result<(), FieldErrors> {
        validate_filters(filters)
    }

    pub fn search(&self, request: &SearchRequest) -> Result<CmdResult> {
        commands::search::run(&self.store, request)
    }

    /// Previews records in the given order. Each one moves to the front of the
    /// recent list. Stops at the first unknown id, keeping earlier previews.
    pub fn preview<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<CmdResult> {
        let mut combined = CmdResult::default().with_recent(self.recent.clone());
        for id in ids {
            let result = commands::preview::run(&self.store, &self.recent, id.as_ref())?;
            self.recent = result.recent.clone();
            combined.merge(result);
        }
        Ok(combined)
    }

    pub fn catalogs(&self, current_year: i32) -> Result<CmdResult> {
        commands::catalogs::run(current_year)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TesisError;
    use crate::store::memory::fixtures::StoreFixture;
    use tempfile::TempDir;

    fn api() -> (CatalogApi<crate::store::memory::InMemoryStore>, TempDir) {
        let temp = TempDir::new().unwrap();
        let store = StoreFixture::new().with_sample_records().store;
        (CatalogApi::new(store, temp.path().to_path_buf()), temp)
    }

    #[test]
    fn search_dispatches_to_command() {
        let (api, _temp) = api();
        let result = api.search(&SearchRequest::default()).unwrap();
        assert_eq!(result.page.unwrap().total_results, 10);
    }

    #[test]
    fn preview_keeps_recent_between_calls() {
        let (mut api, _temp) = api();
        api.preview(&["1", "2"]).unwrap();
        let result = api.preview(&["3"]).unwrap();
        assert_eq!(result.listed_records.len(), 1);

        let ids: Vec<&str> = api.recent().items().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "2", "1"]);
    }

    #[test]
    fn preview_stops_at_unknown_id() {
        let (mut api, _temp) = api();
        let err = api.preview(&["1", "nope", "2"]).unwrap_err();
        assert!(matches!(err, TesisError::RecordNotFound(_)));
        assert_eq!(api.recent().len(), 1);
    }

    #[test]
    fn validate_does_not_search() {
        let (api, _temp) = api();
        let mut filters = FilterState::default();
        filters.tutor_name = "x".into();
        assert!(api.validate(&filters).is_err());
    }

    #[test]
    fn config_uses_config_dir() {
        let (api, temp) = api();
        api.config(ConfigAction::Set("default-sort".into(), "date_asc".into()))
            .unwrap();
        assert!(temp.path().join("config.json").exists());
        assert!(api.catalogs(2024).unwrap().catalog.is_some());
    }
}
