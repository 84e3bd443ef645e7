use std::fs;
use std::io;
use std::path::Path;

use console_logging::console_info;
use thiserror::Error;

/// Only files with this suffix are accepted as command scripts.
pub const SCRIPT_EXTENSION: &str = ".mia";

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("{name} is not a .mia script")]
    InvalidFileType { name: String },
    #[error("could not read {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedScript {
    pub name: String,
    pub text: String,
}

/// Reads a `.mia` script into command text.
///
/// The extension is checked before touching the file system. Bytes that are
/// not valid UTF-8 are replaced rather than rejected.
pub fn load_script(path: &Path) -> Result<LoadedScript, ScriptError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    if !name.ends_with(SCRIPT_EXTENSION) {
        return Err(ScriptError::InvalidFileType { name });
    }

    let bytes = fs::read(path).map_err(|source| ScriptError::Read {
        name: name.clone(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes).into_owned();
    console_info!("Loaded script {} ({} bytes)", name, bytes.len());
    Ok(LoadedScript { name, text })
}
