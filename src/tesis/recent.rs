//! Most-recently-viewed records.
//!
//! The list is ordered newest first, holds each id at most once and never grows
//! past [`RECENT_CAPACITY`]. Viewing a record already in the list moves it to the
//! front. Nothing here is persisted.

use crate::model::Record;
use serde::Serialize;

pub const RECENT_CAPACITY: usize = 5;

/// Returns a new list with `record` at the front.
pub fn add_recent(list: &[Record], record: &Record) -> Vec<Record> {
    std::iter::once(record.clone())
        .chain(list.iter().filter(|r| r.id != record.id).cloned())
        .take(RECENT_CAPACITY)
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RecentItems {
    items: Vec<Record>,
}

impl RecentItems {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(&self, record: &Record) -> RecentItems {
        RecentItems {
            items: add_recent(&self.items, record),
        }
    }

    pub fn items(&self) -> &[Record] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
