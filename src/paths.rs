// src/paths.rs

//! Home-marker expansion for configured paths.
//!
//! Only a `~` at the very start of a path stands for the home directory; a
//! `~` anywhere else is an ordinary character. Expansion is textual: nothing
//! is checked against the filesystem.

use std::path::{Path, PathBuf};

use crate::config::AppConfig;

/// Character standing for the user's home directory.
pub const HOME_MARKER: char = '~';

/// Replace a leading [`HOME_MARKER`] in `path` with `home`.
///
/// Paths without a leading marker are returned unchanged.
pub fn resolve(path: &str, home: &str) -> String {
    match path.strip_prefix(HOME_MARKER) {
        Some(rest) => format!("{home}{rest}"),
        None => path.to_string(),
    }
}

/// The three paths of an application after home-marker expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub source: String,
    /// Empty when the program should not be published.
    pub export: String,
    pub binary: String,
}

impl ResolvedPaths {
    pub fn from_app(app: &AppConfig, home: &str) -> Self {
        Self {
            source: resolve(&app.path, home),
            export: resolve(&app.export, home),
            binary: resolve(&app.binary_path, home),
        }
    }

    pub fn source_dir(&self) -> &Path {
        Path::new(&self.source)
    }

    /// Export directory, or `None` when publishing is disabled.
    pub fn export_dir(&self) -> Option<PathBuf> {
        if self.export.is_empty() {
            None
        } else {
            Some(PathBuf::from(&self.export))
        }
    }

    pub fn binary_path(&self) -> &Path {
        Path::new(&self.binary)
    }
}
