//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Location
//!
//! Searched in order:
//! 1. `$DAGGER_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/dagger/config.toml`
//! 3. `~/.dagger/config.toml` (canonical write location)
//!
//! # Validation
//!
//! Config values are validated after parsing so a bad entrypoint or alias
//! name is reported at startup rather than on first use.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Launcher configuration (user scope).
///
/// # Example
///
/// ```toml
/// apps_dir = "/home/me/apps"
/// interpreter = "python3"
/// entrypoint = "main.py"
///
/// [alias]
/// name = "dagger"
///
/// [navigation]
/// back_to_root = false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LauncherConfig {
    /// Apps root directory
    pub apps_dir: Option<PathBuf>,

    /// Program used to run entrypoints
    pub interpreter: Option<String>,

    /// Entrypoint filename inside every app directory
    pub entrypoint: Option<String>,

    /// Shell alias settings
    pub alias: Option<AliasConfig>,

    /// Menu navigation settings
    pub navigation: Option<NavigationConfig>,
}

impl LauncherConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(interpreter) = &self.interpreter {
            if interpreter.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "interpreter cannot be empty".into(),
                ));
            }
        }

        if let Some(entrypoint) = &self.entrypoint {
            validate_entrypoint(entrypoint)?;
        }

        if let Some(alias) = &self.alias {
            alias.validate()?;
        }

        Ok(())
    }
}

/// Entrypoints are bare filenames looked up directly inside an app directory.
fn validate_entrypoint(entrypoint: &str) -> Result<(), ConfigError> {
    if entrypoint.is_empty()
        || entrypoint == "."
        || entrypoint == ".."
        || entrypoint.contains('/')
        || entrypoint.contains('\\')
    {
        return Err(ConfigError::InvalidValue(format!(
            "invalid entrypoint '{}', must be a plain filename",
            entrypoint
        )));
    }
    Ok(())
}

/// Shell alias settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AliasConfig {
    /// Alias name (default: "dagger")
    pub name: Option<String>,

    /// Shell profile to edit (default: detected)
    pub profile: Option<PathBuf>,
}

impl AliasConfig {
    /// Validate the alias settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(name) = &self.name {
            let valid = !name.is_empty()
                && name
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
            if !valid {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid alias name '{}', use letters, digits, '-' or '_'",
                    name
                )));
            }
        }
        Ok(())
    }
}

/// Menu navigation settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct NavigationConfig {
    /// Return to the root menu when a nested menu is left
    pub back_to_root: Option<bool>,
}
