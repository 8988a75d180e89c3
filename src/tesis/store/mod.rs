//! # Storage Layer
//!
//! The catalog is a fixed collection of [`Record`]s, loaded once and read many
//! times. The [`RecordStore`] trait hides where the records came from so the
//! command layer can be tested without touching the filesystem.
//!
//! ## Implementations
//!
//! - [`fs::JsonStore`]: records read from a JSON array, either a file on disk
//!   or the dataset compiled into the binary.
//! - [`memory::InMemoryStore`]: records handed over directly, for tests and
//!   embedding.
//!
//! Both refuse collections that contain the same id twice. Stores are
//! read-only after construction.

use crate::error::{Result, TesisError};
use crate::model::Record;
use std::collections::HashSet;

pub mod fs;
pub mod memory;

/// Read-only access to the record collection.
pub trait RecordStore {
    /// Every record, in load order.
    fn records(&self) -> &[Record];

    /// Look up a record by id.
    fn get_record(&self, id: &str) -> Result<&Record> {
        self.records()
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| TesisError::RecordNotFound(id.to_string()))
    }

    fn len(&self) -> usize {
        self.records().len()
    }

    fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}

/// Rejects collections in which an id appears more than once.
pub(crate) fn ensure_unique_ids(records: &[Record]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id.as_str()) {
            return Err(TesisError::Store(format!(
                "Duplicate record id: {}",
                record.id
            )));
        }
    }
    Ok(())
}
