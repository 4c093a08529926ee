// src/config/mod.rs

//! Configuration loading for gitter.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Locate, bootstrap and load the config file (`loader.rs`).

pub mod loader;
pub mod model;

pub use loader::{
    default_config_path, ensure_config_file, load_from_path, parse_str, select_config_path,
};
pub use model::{AppConfig, ConfigFile};
