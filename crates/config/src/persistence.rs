//! Where anchor's files live and how they are read and written.
//!
//! Config files and journal files share one format: they are parsed as
//! JSON5, so comments and trailing commas are fine, and written back as
//! pretty-printed JSON, which JSON5 reads unchanged.
//!
//! Config lookup order:
//!
//! 1. `./anchor.json5`, then `./anchor.json`
//! 2. `<config dir>/anchor/config.json5`, then `config.json`

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ConfigError, Result};

const LOCAL_NAMES: [&str; 2] = ["anchor.json5", "anchor.json"];
const USER_NAMES: [&str; 2] = ["config.json5", "config.json"];
const APP_DIR: &str = "anchor";

/// Returns the first config file that exists, if any.
///
/// ```no_run
/// use anchor_config::persistence::locate_config;
///
/// match locate_config() {
///     Some(path) => println!("using {}", path.display()),
///     None => println!("using defaults"),
/// }
/// ```
#[must_use]
pub fn locate_config() -> Option<PathBuf> {
    let user = user_config_dir().ok();
    LOCAL_NAMES
        .iter()
        .map(PathBuf::from)
        .chain(
            user.into_iter()
                .flat_map(|dir| USER_NAMES.iter().map(move |name| dir.join(name))),
        )
        .find(|candidate| candidate.is_file())
}

/// `<config dir>/anchor`, e.g. `~/.config/anchor` on Linux.
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDirectory`] when the platform has no config
/// directory.
pub fn user_config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().ok_or(ConfigError::NoHomeDirectory)?;
    Ok(base.join(APP_DIR))
}

/// `<data dir>/anchor`, e.g. `~/.local/share/anchor` on Linux. Logs go here
/// unless configured elsewhere.
///
/// # Errors
///
/// Returns [`ConfigError::NoDataDirectory`] when the platform has no data
/// directory.
pub fn user_data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().ok_or(ConfigError::NoDataDirectory)?;
    Ok(base.join(APP_DIR))
}

/// Parses the JSON5 (or plain JSON) file at `path` into `T`.
///
/// # Errors
///
/// Returns [`ConfigError::ReadFile`] if the file cannot be read and
/// [`ConfigError::ParseJson5`] if its content does not match `T`.
pub fn load_json5<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json5::from_str(&text)?)
}

/// Writes `value` to `path` as pretty JSON, creating missing parent
/// directories.
///
/// # Errors
///
/// Returns [`ConfigError::SerializeJson`] if `value` cannot be serialized
/// and [`ConfigError::WriteFile`] if the directory or file cannot be
/// written.
pub fn store_json<T: Serialize + ?Sized>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    let text = serde_json::to_string_pretty(value)?;
    let write_error = |source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(path, text).map_err(write_error)
}
