use crate::api::CatalogApi;
use crate::config::TesisConfig;
use crate::error::{Result, TesisError};
use crate::store::fs::JsonStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Overrides the configuration directory.
pub const CONFIG_DIR_ENV: &str = "TESIS_HOME";

pub struct TesisContext {
    pub api: CatalogApi<JsonStore>,
    pub config: TesisConfig,
}

/// `$TESIS_HOME` when set, otherwise the platform config directory.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("org", "tesis", "tesis")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| TesisError::Store("Could not determine config dir".to_string()))
}

pub fn initialize(data_override: Option<&Path>) -> Result<TesisContext> {
    initialize_in(config_dir()?, data_override)
}

/// Builds the context from a config directory. The data file is, in order of
/// preference: `data_override`, the configured `data_file` (relative paths
/// are taken from the config directory), or the bundled dataset.
pub fn initialize_in(config_dir: PathBuf, data_override: Option<&Path>) -> Result<TesisContext> {
    let config = TesisConfig::load(&config_dir).unwrap_or_else(|e| {
        warn!(error = %e, dir = %config_dir.display(), "ignoring unreadable config");
        TesisConfig::default()
    });

    let data_file = match data_override {
        Some(path) => Some(path.to_path_buf()),
        None => config.data_file.as_ref().map(|p| config_dir.join(p)),
    };
    debug!(config_dir = %config_dir.display(), data_file = ?data_file, "initializing");

    let store = match data_file {
        Some(path) => JsonStore::load(path)?,
        None => JsonStore::bundled()?,
    };

    Ok(TesisContext {
        api: CatalogApi::new(store, config_dir),
        config,
    })
}
