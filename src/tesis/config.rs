use crate::error::{Result, TesisError};
use crate::query::SortKey;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Keys accepted by [`TesisConfig::get`] and [`TesisConfig::set`].
pub const CONFIG_KEYS: [&str; 2] = ["data-file", "default-sort"];

/// Configuration for tesis, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TesisConfig {
    /// Records file to search. The bundled dataset is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// Sort applied when a search does not ask for one.
    #[serde(default)]
    pub default_sort: SortKey,
}

impl TesisConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TesisError::Io)?;
        let config: TesisConfig =
            serde_json::from_str(&content).map_err(TesisError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TesisError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TesisError::Serialization)?;
        fs::write(config_path, content).map_err(TesisError::Io)?;
        Ok(())
    }

    /// Display value of a key, `None` for unknown keys.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(
                self.data_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(bundled)".to_string()),
            ),
            "default-sort" => Some(self.default_sort.to_string()),
            _ => None,
        }
    }

    /// Sets a key from its textual value. An empty `data-file` goes back to
    /// the bundled dataset.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "data-file" => {
                self.data_file = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
                Ok(())
            }
            "default-sort" => {
                self.default_sort = value.parse().map_err(|e| format!("{}", e))?;
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }
}
