use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use godisk_engine::EngineSettings;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::logging::LogDestination;

pub(crate) const CONFIG_FILENAME: &str = "godisk.ron";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct ConsoleConfig {
    pub engine_url: String,
    pub download_dir: PathBuf,
    pub log_destination: LogDestination,
    pub empty_output_text: Option<String>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        let engine = EngineSettings::default();
        Self {
            engine_url: engine.base_url,
            download_dir: engine.download_dir,
            log_destination: LogDestination::default(),
            empty_output_text: None,
        }
    }
}

impl ConsoleConfig {
    pub(crate) fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            base_url: self.engine_url.clone(),
            download_dir: self.download_dir.clone(),
            ..EngineSettings::default()
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

/// Reads `godisk.ron` from `dir`. A missing file means defaults.
pub(crate) fn load_config(dir: &Path) -> Result<ConsoleConfig, ConfigError> {
    let path = dir.join(CONFIG_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(ConsoleConfig::default());
        }
        Err(source) => return Err(ConfigError::Read { path, source }),
    };

    ron::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
}
