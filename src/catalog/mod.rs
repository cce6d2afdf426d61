//! catalog
//!
//! Discovery and creation of directory-backed apps.
//!
//! # Responsibilities
//!
//! - List the apps directly under a root
//! - Inspect one app for an entrypoint and nested sub-apps
//! - Create sample apps
//!
//! # Design
//!
//! The catalog owns no long-lived state. Every query rescans the
//! filesystem, so apps added or removed by another process show up on the
//! next menu render. Listings are sorted by display name.
//!
//! # Example
//!
//! ```no_run
//! use daggerwork::catalog::AppCatalog;
//! use std::path::Path;
//!
//! let catalog = AppCatalog::new("main.py");
//! let root = Path::new("/home/me/.dagger/apps");
//! for name in catalog.list_apps(root).unwrap_or_default() {
//!     let entry = catalog.inspect(root, &name);
//!     println!("{} (runnable: {})", name, entry.has_entrypoint);
//! }
//! ```

pub mod template;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::core::paths;
use crate::core::types::AppName;

/// Errors from catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The root exists but cannot be listed.
    #[error("cannot read apps directory '{path}': {source}")]
    Unavailable { path: PathBuf, source: io::Error },

    /// An app with the same directory name is already present.
    #[error("app '{0}' already exists")]
    AlreadyExists(AppName),

    /// Creating the app directory or its entrypoint failed.
    #[error("failed to create '{path}': {source}")]
    CreateFailed { path: PathBuf, source: io::Error },
}

/// A snapshot of one app directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppEntry {
    /// Display name (no brackets)
    pub display_name: AppName,
    /// The bracket-named directory
    pub directory: PathBuf,
    /// Where the entrypoint is (or would be)
    pub entrypoint: PathBuf,
    /// Whether the entrypoint file exists
    pub has_entrypoint: bool,
    /// Nested apps, sorted by display name
    pub sub_entries: Vec<AppName>,
}

impl AppEntry {
    /// Check if this entry needs a choice menu before anything runs.
    pub fn is_group(&self) -> bool {
        !self.sub_entries.is_empty()
    }
}

/// Directory-backed app catalog.
#[derive(Debug, Clone)]
pub struct AppCatalog {
    entrypoint: String,
}

impl AppCatalog {
    /// Create a catalog that looks for `entrypoint` inside every app.
    pub fn new(entrypoint: impl Into<String>) -> Self {
        Self {
            entrypoint: entrypoint.into(),
        }
    }

    /// Get the entrypoint filename.
    pub fn entrypoint_name(&self) -> &str {
        &self.entrypoint
    }

    /// Create the apps root if it does not exist.
    ///
    /// Returns `true` if the directory was created.
    pub fn ensure_root(&self, root: &Path) -> Result<bool, CatalogError> {
        if root.is_dir() {
            return Ok(false);
        }
        fs::create_dir_all(root).map_err(|e| CatalogError::CreateFailed {
            path: root.to_path_buf(),
            source: e,
        })?;
        log::debug!("created apps root {}", root.display());
        Ok(true)
    }

    /// List the apps directly under `root`.
    ///
    /// A missing root lists as empty.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Unavailable` if the root exists but cannot be
    /// read (permissions, not a directory). Callers treat this as "no apps"
    /// after reporting it.
    pub fn list_apps(&self, root: &Path) -> Result<Vec<AppName>, CatalogError> {
        match scan_apps(root) {
            Ok(apps) => Ok(apps),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(CatalogError::Unavailable {
                path: root.to_path_buf(),
                source: e,
            }),
        }
    }

    /// Inspect the app `name` under `root`.
    ///
    /// A missing directory yields an entry with no entrypoint and no
    /// sub-entries. Failing to scan sub-entries degrades to an empty list.
    pub fn inspect(&self, root: &Path, name: &AppName) -> AppEntry {
        let directory = paths::app_dir(root, name);
        let entrypoint = paths::entrypoint_path(&directory, &self.entrypoint);
        let has_entrypoint = entrypoint.is_file();

        let sub_entries = match scan_apps(&directory) {
            Ok(subs) => subs,
            Err(e) => {
                log::debug!("no sub-apps under {}: {}", directory.display(), e);
                Vec::new()
            }
        };

        AppEntry {
            display_name: name.clone(),
            directory,
            entrypoint,
            has_entrypoint,
            sub_entries,
        }
    }

    /// Create a sample app under `root`.
    ///
    /// Writes an entrypoint whose only behavior is printing a greeting that
    /// contains the display name. The root is created if needed.
    ///
    /// If the entrypoint cannot be written after the directory was created,
    /// the directory is left in place: the app is listed but not runnable.
    ///
    /// # Errors
    ///
    /// - `CatalogError::AlreadyExists` if the directory is present (nothing
    ///   is touched)
    /// - `CatalogError::CreateFailed` on any I/O failure
    pub fn create_app(&self, root: &Path, name: &AppName) -> Result<AppEntry, CatalogError> {
        let directory = paths::app_dir(root, name);
        if directory.symlink_metadata().is_ok() {
            return Err(CatalogError::AlreadyExists(name.clone()));
        }

        fs::create_dir_all(root).map_err(|e| CatalogError::CreateFailed {
            path: root.to_path_buf(),
            source: e,
        })?;

        fs::create_dir(&directory).map_err(|e| {
            if e.kind() == io::ErrorKind::AlreadyExists {
                CatalogError::AlreadyExists(name.clone())
            } else {
                CatalogError::CreateFailed {
                    path: directory.clone(),
                    source: e,
                }
            }
        })?;

        let entrypoint = paths::entrypoint_path(&directory, &self.entrypoint);
        let source = template::sample_entrypoint(name.as_str(), &self.entrypoint);
        fs::write(&entrypoint, source).map_err(|e| CatalogError::CreateFailed {
            path: entrypoint.clone(),
            source: e,
        })?;

        log::debug!("created app '{}' at {}", name, directory.display());
        Ok(self.inspect(root, name))
    }
}

/// Scan `dir` for bracket-named subdirectories.
fn scan_apps(dir: &Path) -> io::Result<Vec<AppName>> {
    let mut apps = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::debug!("skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };

        let file_name = entry.file_name();
        let Some(dir_name) = file_name.to_str() else {
            log::debug!(
                "ignoring non-UTF-8 entry {:?} in {}",
                file_name,
                dir.display()
            );
            continue;
        };

        if !entry.path().is_dir() {
            continue;
        }

        match AppName::from_dir_name(dir_name) {
            Some(name) => apps.push(name),
            None => log::debug!("ignoring directory '{}' in {}", dir_name, dir.display()),
        }
    }
    apps.sort();
    Ok(apps)
}
