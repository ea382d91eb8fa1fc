//! Path management for SmartKitchen files.
//!
//! ```text
//! ~/.config/smartkitchen/       # config directory
//! └── config.toml               # API keys, model override
//!
//! ~/.local/share/smartkitchen/  # data directory
//! └── kv/                       # file-backed key-value store
//! ```

use kitchen_core::{KitchenError, Result};
use std::path::PathBuf;

const APP_DIR: &str = "smartkitchen";

/// Resolves the platform directories the application stores files in.
#[derive(Debug, Clone, Default)]
pub struct KitchenPaths {
    /// Overrides the platform base directories; used by tests.
    base_override: Option<PathBuf>,
}

impl KitchenPaths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Roots both the config and data directories under `base` instead of
    /// the platform defaults.
    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        Self {
            base_override: Some(base.into()),
        }
    }

    /// The configuration directory, e.g. `~/.config/smartkitchen`.
    pub fn config_dir(&self) -> Result<PathBuf> {
        if let Some(base) = &self.base_override {
            return Ok(base.join("config"));
        }
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| KitchenError::config("cannot determine config directory"))
    }

    /// The data directory, e.g. `~/.local/share/smartkitchen`.
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(base) = &self.base_override {
            return Ok(base.join("data"));
        }
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| KitchenError::config("cannot determine data directory"))
    }

    /// Path of the configuration file.
    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Directory the file-backed key-value store writes into.
    pub fn kv_dir(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join("kv"))
    }
}
