//! # Session
//!
//! Everything one search view remembers between interactions, held explicitly
//! instead of in globals.
//!
//! A session keeps two filter states. The *draft* is what the user is editing;
//! the *committed* state is what the displayed results are computed from. A
//! commit validates the draft and, only when it passes, replaces the committed
//! state with it. A failed commit stores per-field errors and leaves the results
//! exactly as they were.
//!
//! Removing an active filter chip bypasses validation: removal can only make a
//! valid state less constrained.

use crate::filters::{ActiveFilter, FilterState};
use crate::model::Record;
use crate::page::{clamp_page, Page};
use crate::query::{filter_records, related, sort_records, SortKey};
use crate::recent::RecentItems;
use crate::validation::{validate_filters, Field, FieldErrors};
use tracing::debug;

/// What a session currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView<'a> {
    pub page: Page<&'a Record>,
    pub related: Vec<&'a Record>,
}

#[derive(Debug, Clone)]
pub struct Session {
    draft: FilterState,
    committed: FilterState,
    errors: FieldErrors,
    sort: SortKey,
    page: usize,
    recent: RecentItems,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SortKey::default())
    }
}

impl Session {
    pub fn new(sort: SortKey) -> Self {
        Self {
            draft: FilterState::default(),
            committed: FilterState::default(),
            errors: FieldErrors::default(),
            sort,
            page: 1,
            recent: RecentItems::new(),
        }
    }

    pub fn draft(&self) -> &FilterState {
        &self.draft
    }

    pub fn committed(&self) -> &FilterState {
        &self.committed
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn recent(&self) -> &RecentItems {
        &self.recent
    }

    /// Applies an edit to the draft. Fields whose value changed lose their
    /// pending error immediately; the new value is only checked on commit.
    pub fn edit<F>(&mut self, apply: F)
    where
        F: FnOnce(&mut FilterState),
    {
        let before = self.draft.clone();
        apply(&mut self.draft);

        if before.search_term != self.draft.search_term {
            self.errors.clear(Field::SearchTerm);
        }
        if before.tutor_name != self.draft.tutor_name {
            self.errors.clear(Field::TutorName);
        }
        if before.selected_modalities != self.draft.selected_modalities {
            self.errors.clear(Field::Modalities);
        }
    }

    /// Validates the draft and makes it the committed state.
    pub fn commit(&mut self) -> Result<(), FieldErrors> {
        match validate_filters(&self.draft) {
            Ok(()) => {
                self.committed = self.draft.clone();
                self.errors = FieldErrors::default();
                self.page = 1;
                debug!(filters = ?self.committed.active_filters(), "committed filters");
                Ok(())
            }
            Err(errors) => {
                debug!(%errors, "commit rejected");
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    /// Resets the draft to the initial state. The committed state is kept until
    /// the next commit.
    pub fn clear_draft(&mut self) {
        self.draft = FilterState::default();
        self.errors = FieldErrors::default();
    }

    /// Drops one active filter from both the committed state and the draft.
    pub fn remove_active(&mut self, filter: &ActiveFilter) {
        self.committed = self.committed.without(filter);
        self.draft = self.draft.without(filter);
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// Moves to `page`, clamped to the pages the committed filters produce.
    /// Returns the page actually selected.
    pub fn go_to_page(&mut self, records: &[Record], page: usize) -> usize {
        let count = filter_records(records, &self.committed).len();
        self.page = clamp_page(page, count);
        self.page
    }

    pub fn preview(&mut self, record: &Record) {
        self.recent = self.recent.with(record);
    }

    /// The visible page and related records for the committed state.
    pub fn results<'a>(&self, records: &'a [Record]) -> ResultView<'a> {
        let filtered = filter_records(records, &self.committed);
        let related = related(&filtered);
        let sorted = sort_records(filtered, &self.committed, self.sort);
        ResultView {
            page: Page::new(&sorted, self.page),
            related,
        }
    }
}
