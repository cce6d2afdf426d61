//! core::paths
//!
//! Centralized path routing for launcher storage locations.
//!
//! # Storage Layout
//!
//! User-scoped data lives under `~/.dagger/`:
//! - `config.toml` - Launcher configuration (canonical write location)
//! - `apps/` - Default apps root
//!
//! Inside an apps root, every app is a bracket-named directory holding an
//! entrypoint file and, optionally, further bracket-named sub-apps:
//!
//! ```text
//! apps/
//!   [Foo]/
//!     main.py
//!     [Bar]/
//!       main.py
//! ```
//!
//! # Example
//!
//! ```
//! use daggerwork::core::paths::DaggerPaths;
//! use std::path::PathBuf;
//!
//! let paths = DaggerPaths::new(PathBuf::from("/home/me/.dagger"));
//! assert_eq!(paths.config_path(), PathBuf::from("/home/me/.dagger/config.toml"));
//! assert_eq!(paths.default_apps_dir(), PathBuf::from("/home/me/.dagger/apps"));
//! ```

use std::path::{Path, PathBuf};

use super::types::AppName;

/// Name of the per-user launcher directory under the home directory.
pub const BASE_DIR_NAME: &str = ".dagger";

/// Centralized path routing for launcher storage.
///
/// No code outside this module should compute `*.join(".dagger")` paths
/// or bracket-wrap directory names by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaggerPaths {
    /// Path to the per-user launcher directory.
    pub base_dir: PathBuf,
}

impl DaggerPaths {
    /// Create paths rooted at an explicit base directory.
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Create paths rooted at `~/.dagger`.
    ///
    /// Returns `None` if the home directory cannot be determined.
    pub fn from_home() -> Option<Self> {
        dirs::home_dir().map(|home| Self::new(home.join(BASE_DIR_NAME)))
    }

    /// Get the canonical configuration file path.
    ///
    /// This is `<base_dir>/config.toml`.
    pub fn config_path(&self) -> PathBuf {
        self.base_dir.join("config.toml")
    }

    /// Get the default apps root.
    ///
    /// This is `<base_dir>/apps/`.
    pub fn default_apps_dir(&self) -> PathBuf {
        self.base_dir.join("apps")
    }
}

/// Get the storage directory for an app under a root.
///
/// # Example
///
/// ```
/// use daggerwork::core::paths::app_dir;
/// use daggerwork::core::types::AppName;
/// use std::path::{Path, PathBuf};
///
/// let name = AppName::new("Foo").unwrap();
/// assert_eq!(app_dir(Path::new("/apps"), &name), PathBuf::from("/apps/[Foo]"));
/// ```
pub fn app_dir(root: &Path, name: &AppName) -> PathBuf {
    root.join(name.dir_name())
}

/// Get the entrypoint path inside an app directory.
pub fn entrypoint_path(app_dir: &Path, entrypoint: &str) -> PathBuf {
    app_dir.join(entrypoint)
}
