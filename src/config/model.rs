// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [program.helix]
/// path = "~/src/helix"
/// update = "git pull"
/// build = "cargo build --release"
/// export = "~/.local/bin"
/// binary_path = "~/src/helix/target/release/hx"
/// ```
///
/// An empty file is valid and yields no programs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// All programs from `[program.<name>]`.
    ///
    /// Keys are the program names. A `BTreeMap` keeps the run order stable
    /// (sorted by name) from one run to the next.
    #[serde(default)]
    pub program: BTreeMap<String, AppConfig>,
}

impl ConfigFile {
    pub fn is_empty(&self) -> bool {
        self.program.is_empty()
    }
}

/// `[program.<name>]` section.
///
/// Every field is optional and defaults to the empty string. Empty commands
/// are still handed to the shell, which treats them as a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Source checkout; both commands run here. May start with `~`.
    #[serde(default)]
    pub path: String,

    /// Build command, e.g. `cargo build --release`.
    #[serde(default)]
    pub build: String,

    /// Update command, e.g. `git pull`.
    #[serde(default)]
    pub update: String,

    /// Directory the binary gets linked into. Empty disables publishing.
    #[serde(default)]
    pub export: String,

    /// Build output to link. May start with `~`.
    #[serde(default)]
    pub binary_path: String,

    /// Parsed and echoed, never executed.
    #[serde(default)]
    pub install_cmd: String,
}
