// src/config/loader.rs

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::model::ConfigFile;
use crate::errors::{GitterError, Result};
use crate::fs::FileSystem;
use crate::paths;

/// Load a configuration file from a given path.
///
/// Only TOML deserialization happens here. An empty file is a valid config
/// with no programs.
pub fn load_from_path(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let contents = fs.read_to_string(path)?;
    parse_str(&contents)
}

/// Parse config text.
pub fn parse_str(contents: &str) -> Result<ConfigFile> {
    let config: ConfigFile = toml::from_str(contents)?;
    Ok(config)
}

/// Default config location: `<config dir>/gitter/config.toml`.
///
/// On Linux the config dir is `$XDG_CONFIG_HOME` or `~/.config`.
pub fn default_config_path() -> Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| {
        GitterError::ConfigError("could not determine the user config directory".to_string())
    })?;
    Ok(base.join("gitter").join("config.toml"))
}

/// Create the config directory and an empty config file if they are missing.
///
/// Existing files are never touched.
pub fn ensure_config_file(fs: &dyn FileSystem, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !fs.is_dir(parent) {
            fs.create_dir_all(parent)?;
        }
    }

    if !fs.exists(path) {
        info!(path = %path.display(), "creating empty config file");
        fs.write(path, b"")?;
    }

    Ok(())
}

/// Pick the config file to load.
///
/// An explicit path gets `~` expanded and must already exist; it is never
/// created. Without one, `default_path` is used and bootstrapped with
/// [`ensure_config_file`].
pub fn select_config_path(
    fs: &dyn FileSystem,
    explicit: Option<&str>,
    home: &str,
    default_path: impl FnOnce() -> Result<PathBuf>,
) -> Result<PathBuf> {
    match explicit {
        Some(raw) => {
            let path = PathBuf::from(paths::resolve(raw, home));
            if !fs.exists(&path) {
                return Err(GitterError::ConfigError(format!(
                    "config file {:?} does not exist",
                    path
                )));
            }
            Ok(path)
        }
        None => {
            let path = default_path()?;
            ensure_config_file(fs, &path)?;
            Ok(path)
        }
    }
}
