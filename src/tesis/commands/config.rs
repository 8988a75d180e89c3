use crate::commands::{CmdMessage, CmdResult};
use crate::config::TesisConfig;
use crate::error::Result;
use std::path::Path;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Runs a config action. An unreadable `config.json` is reported as a warning
/// and treated as defaults, so `Set` can overwrite it.
pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut config = load_or_warn(config_dir, &mut result);

    match action {
        ConfigAction::ShowAll => Ok(result.with_config(config)),
        ConfigAction::ShowKey(key) => {
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            if let Err(e) = config.set(&key, &value) {
                result.add_message(CmdMessage::error(e));
                return Ok(result);
            }
            config.save(config_dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result.with_config(config))
        }
    }
}

fn load_or_warn(config_dir: &Path, result: &mut CmdResult) -> TesisConfig {
    TesisConfig::load(config_dir).unwrap_or_else(|e| {
        warn!(error = %e, dir = %config_dir.display(), "ignoring unreadable config");
        result.add_message(CmdMessage::warning(format!(
            "Ignoring unreadable config ({}), using defaults.",
            e
        )));
        TesisConfig::default()
    })
}
