use super::{ensure_unique_ids, RecordStore};
use crate::error::{Result, TesisError};
use crate::model::Record;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// The dataset shipped with the binary.
const BUNDLED_DATA: &str = include_str!("../../../data/theses.json");

/// Records loaded from a JSON array.
#[derive(Debug)]
pub struct JsonStore {
    records: Vec<Record>,
    /// File the records came from; `None` for the bundled dataset.
    source: Option<PathBuf>,
}

impl JsonStore {
    /// Reads and parses a data file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TesisError::Store(format!("Cannot read data file {}: {}", path.display(), e))
        })?;
        let mut store = Self::from_json(&content)?;
        store.source = Some(path.to_path_buf());
        info!(path = %path.display(), records = store.records.len(), "loaded data file");
        Ok(store)
    }

    /// The dataset compiled into the binary.
    pub fn bundled() -> Result<Self> {
        let store = Self::from_json(BUNDLED_DATA)?;
        info!(records = store.records.len(), "loaded bundled dataset");
        Ok(store)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let records: Vec<Record> = serde_json::from_str(content)?;
        ensure_unique_ids(&records)?;
        Ok(Self {
            records,
            source: None,
        })
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

impl RecordStore for JsonStore {
    fn records(&self) -> &[Record] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn bundled_dataset_loads() {
        let store = JsonStore::bundled().unwrap();
        assert!(!store.is_empty());
        assert_eq!(store.source(), None);
        assert!(store.get_record("1").is_ok());
    }

    #[test]
    fn load_reads_a_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("records.json");
        fs::write(
            &path,
            r#"[{"id":"a","title":"T","author":"A","year":"2020","career":"Ingeniería Civil","type":"Tesis"}]"#,
        )
        .unwrap();

        let store = JsonStore::load(&path).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.source(), Some(path.as_path()));
    }

    #[test]
    fn missing_file_is_a_store_error() {
        let temp = TempDir::new().unwrap();
        let err = JsonStore::load(temp.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, TesisError::Store(_)));
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let err = JsonStore::from_json("{not json").unwrap_err();
        assert!(matches!(err, TesisError::Serialization(_)));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"[
            {"id":"1","title":"A","author":"x","year":"2020","career":"c","type":"Tesis"},
            {"id":"1","title":"B","author":"y","year":"2021","career":"c","type":"Tesis"}
        ]"#;
        let err = JsonStore::from_json(json).unwrap_err();
        assert_eq!(err.to_string(), "Store error: Duplicate record id: 1");
    }
}
