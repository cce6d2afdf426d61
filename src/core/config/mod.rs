//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! Searched in order:
//! 1. `$DAGGER_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/dagger/config.toml`
//! 3. `~/.dagger/config.toml` (canonical write location)
//!
//! # Example
//!
//! ```no_run
//! use daggerwork::core::config::Config;
//!
//! let config = Config::load().unwrap();
//! println!("Interpreter: {}", config.interpreter());
//! println!("Entrypoint: {}", config.entrypoint());
//! ```

pub mod schema;

pub use schema::{AliasConfig, LauncherConfig, NavigationConfig};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::paths::DaggerPaths;

/// Default program used to run entrypoints.
pub const DEFAULT_INTERPRETER: &str = "python3";

/// Default entrypoint filename.
pub const DEFAULT_ENTRYPOINT: &str = "main.py";

/// Default shell alias name.
pub const DEFAULT_ALIAS: &str = "dagger";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Loaded configuration with defaults applied by accessors.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Raw file contents (defaults when no file exists)
    pub file: LauncherConfig,
    /// Path the configuration was loaded from
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed or
    /// fails validation. A missing file is not an error.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::locate() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file: LauncherConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        file.validate()?;
        log::debug!("loaded config from {}", path.display());

        Ok(Self {
            file,
            path: Some(path.to_path_buf()),
        })
    }

    /// Find the first existing config file in search order.
    fn locate() -> Option<PathBuf> {
        // 1. Check $DAGGER_CONFIG
        if let Ok(path) = std::env::var("DAGGER_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        // 2. Check $XDG_CONFIG_HOME/dagger/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("dagger/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. Check ~/.dagger/config.toml
        DaggerPaths::from_home()
            .map(|paths| paths.config_path())
            .filter(|path| path.exists())
    }

    /// Get the canonical path for the config file.
    ///
    /// Returns `~/.dagger/config.toml`.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        DaggerPaths::from_home()
            .map(|paths| paths.config_path())
            .ok_or(ConfigError::NoHomeDir)
    }

    /// Write configuration atomically to `path`.
    ///
    /// Creates parent directories if needed. Writes to a temp file in the
    /// same directory and renames it into place.
    pub fn write_to(path: &Path, config: &LauncherConfig) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(config).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        let temp_path = path.with_extension("toml.tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Resolve the apps root.
    ///
    /// An explicit override (the `--apps-dir` flag) wins over the config
    /// file, which wins over `~/.dagger/apps`.
    pub fn apps_dir(&self, override_dir: Option<&Path>) -> Result<PathBuf, ConfigError> {
        if let Some(dir) = override_dir {
            return Ok(dir.to_path_buf());
        }
        if let Some(dir) = &self.file.apps_dir {
            return Ok(dir.clone());
        }
        DaggerPaths::from_home()
            .map(|paths| paths.default_apps_dir())
            .ok_or(ConfigError::NoHomeDir)
    }

    /// Get the interpreter used to run entrypoints.
    ///
    /// Defaults to "python3".
    pub fn interpreter(&self) -> &str {
        self.file
            .interpreter
            .as_deref()
            .unwrap_or(DEFAULT_INTERPRETER)
    }

    /// Get the entrypoint filename.
    ///
    /// Defaults to "main.py".
    pub fn entrypoint(&self) -> &str {
        self.file.entrypoint.as_deref().unwrap_or(DEFAULT_ENTRYPOINT)
    }

    /// Get the shell alias name.
    ///
    /// Defaults to "dagger".
    pub fn alias_name(&self) -> &str {
        self.file
            .alias
            .as_ref()
            .and_then(|a| a.name.as_deref())
            .unwrap_or(DEFAULT_ALIAS)
    }

    /// Get the configured shell profile, if one overrides detection.
    pub fn alias_profile(&self) -> Option<&Path> {
        self.file.alias.as_ref().and_then(|a| a.profile.as_deref())
    }

    /// Check if leaving a nested menu returns straight to the root menu.
    ///
    /// Defaults to `false` (one level back).
    pub fn back_to_root(&self) -> bool {
        self.file
            .navigation
            .as_ref()
            .and_then(|n| n.back_to_root)
            .unwrap_or(false)
    }

    /// Get the path the configuration was loaded from.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
