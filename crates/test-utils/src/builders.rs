#![allow(dead_code)]

use std::collections::BTreeMap;

use gitter::config::{AppConfig, ConfigFile};

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    program: BTreeMap<String, AppConfig>,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            program: BTreeMap::new(),
        }
    }

    pub fn with_app(mut self, name: &str, app: AppConfig) -> Self {
        self.program.insert(name.to_string(), app);
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile {
            program: self.program,
        }
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `AppConfig`. Commands default to `true`.
pub struct AppConfigBuilder {
    app: AppConfig,
}

impl AppConfigBuilder {
    pub fn new(path: &str) -> Self {
        Self {
            app: AppConfig {
                path: path.to_string(),
                build: "true".to_string(),
                update: "true".to_string(),
                export: String::new(),
                binary_path: String::new(),
                install_cmd: String::new(),
            },
        }
    }

    pub fn update(mut self, cmd: &str) -> Self {
        self.app.update = cmd.to_string();
        self
    }

    pub fn build_cmd(mut self, cmd: &str) -> Self {
        self.app.build = cmd.to_string();
        self
    }

    pub fn export(mut self, dir: &str) -> Self {
        self.app.export = dir.to_string();
        self
    }

    pub fn binary_path(mut self, path: &str) -> Self {
        self.app.binary_path = path.to_string();
        self
    }

    pub fn install_cmd(mut self, cmd: &str) -> Self {
        self.app.install_cmd = cmd.to_string();
        self
    }

    pub fn build(self) -> AppConfig {
        self.app
    }
}
