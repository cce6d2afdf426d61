//! alias
//!
//! Shell alias management.
//!
//! # Design
//!
//! The alias lives in the user's shell profile inside a marker-delimited
//! block, so it can be detected and removed without touching anything else
//! in the file:
//!
//! ```text
//! # Dagger tool alias - do not edit
//! alias dagger='/usr/local/bin/dagger'
//! # End dagger tool alias
//! ```
//!
//! # Profile Detection
//!
//! - Windows: `~/Documents/WindowsPowerShell/Microsoft.PowerShell_profile.ps1`
//! - `$SHELL` ending in `zsh`: `~/.zshrc`
//! - macOS: `~/.bash_profile`
//! - Otherwise: `~/.bashrc`
//!
//! Profile writes are atomic (write to temp file, then rename).

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// First line of the alias block.
pub const MARKER_START: &str = "# Dagger tool alias - do not edit";

/// Last line of the alias block.
pub const MARKER_END: &str = "# End dagger tool alias";

/// Errors from alias operations.
#[derive(Debug, Error)]
pub enum AliasError {
    #[error("home directory not found")]
    NoHomeDir,

    #[error("failed to read shell profile '{path}': {source}")]
    ReadError { path: PathBuf, source: io::Error },

    #[error("failed to write shell profile '{path}': {source}")]
    WriteError { path: PathBuf, source: io::Error },
}

/// Which syntax the profile uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellKind {
    /// bash, zsh and friends
    Posix,
    /// Windows PowerShell
    PowerShell,
}

/// Platform facts that drive profile detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Other,
}

impl Platform {
    /// The platform this binary was built for.
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Other
        }
    }
}

/// Pick the profile file and syntax for a platform and `$SHELL` value.
///
/// # Example
///
/// ```
/// use daggerwork::alias::{profile_for, Platform, ShellKind};
/// use std::path::{Path, PathBuf};
///
/// let (path, kind) = profile_for(Path::new("/home/me"), Some("/usr/bin/zsh"), Platform::Other);
/// assert_eq!(path, PathBuf::from("/home/me/.zshrc"));
/// assert_eq!(kind, ShellKind::Posix);
/// ```
pub fn profile_for(home: &Path, shell: Option<&str>, platform: Platform) -> (PathBuf, ShellKind) {
    if platform == Platform::Windows {
        return (
            home.join("Documents")
                .join("WindowsPowerShell")
                .join("Microsoft.PowerShell_profile.ps1"),
            ShellKind::PowerShell,
        );
    }

    let shell_name = shell.and_then(|s| s.rsplit('/').next()).unwrap_or("");
    let file = if shell_name == "zsh" {
        ".zshrc"
    } else if platform == Platform::MacOs {
        ".bash_profile"
    } else {
        ".bashrc"
    };
    (home.join(file), ShellKind::Posix)
}

/// What an alias operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasOutcome {
    Added,
    AlreadySet,
    Removed,
    NotSet,
    ProfileMissing,
}

impl AliasOutcome {
    /// Whether the profile was modified.
    pub fn changed(self) -> bool {
        matches!(self, AliasOutcome::Added | AliasOutcome::Removed)
    }
}

/// Adds and removes the launcher alias in a shell profile.
#[derive(Debug, Clone)]
pub struct AliasManager {
    profile: PathBuf,
    kind: ShellKind,
    name: String,
    target: PathBuf,
}

impl AliasManager {
    /// Create a manager for an explicit profile.
    ///
    /// `target` is the program the alias runs.
    pub fn new(profile: PathBuf, kind: ShellKind, name: impl Into<String>, target: PathBuf) -> Self {
        Self {
            profile,
            kind,
            name: name.into(),
            target,
        }
    }

    /// Create a manager for the detected profile of the current user.
    ///
    /// A configured `profile_override` skips detection; its syntax is
    /// PowerShell if it ends in `.ps1`.
    pub fn detect(
        name: impl Into<String>,
        target: PathBuf,
        profile_override: Option<&Path>,
    ) -> Result<Self, AliasError> {
        let (profile, kind) = match profile_override {
            Some(path) => {
                let kind = if path.extension().is_some_and(|e| e == "ps1") {
                    ShellKind::PowerShell
                } else {
                    ShellKind::Posix
                };
                (path.to_path_buf(), kind)
            }
            None => {
                let home = dirs::home_dir().ok_or(AliasError::NoHomeDir)?;
                let shell = std::env::var("SHELL").ok();
                profile_for(&home, shell.as_deref(), Platform::current())
            }
        };
        Ok(Self::new(profile, kind, name, target))
    }

    /// Get the profile this manager edits.
    pub fn profile(&self) -> &Path {
        &self.profile
    }

    /// Get the alias name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The line defining the alias.
    pub fn alias_line(&self) -> String {
        let target = self.target.display().to_string();
        match self.kind {
            ShellKind::PowerShell => format!(
                "function {} {{ & '{}' @args }}",
                self.name,
                target.replace('\'', "''")
            ),
            ShellKind::Posix => format!("alias {}='{}'", self.name, target.replace('\'', "'\\''")),
        }
    }

    /// Check whether the alias block is present.
    ///
    /// A missing profile counts as not set.
    pub fn is_set(&self) -> Result<bool, AliasError> {
        Ok(self
            .read_profile()?
            .is_some_and(|content| has_block(&content)))
    }

    /// Append the alias block to the profile.
    ///
    /// Creates the profile (and its directory) if needed.
    pub fn add(&self) -> Result<AliasOutcome, AliasError> {
        let content = self.read_profile()?.unwrap_or_default();
        if has_block(&content) {
            return Ok(AliasOutcome::AlreadySet);
        }

        let updated = insert_block(&content, &self.alias_line());
        self.write_profile(&updated)?;
        log::debug!("added alias '{}' to {}", self.name, self.profile.display());
        Ok(AliasOutcome::Added)
    }

    /// Strip the alias block from the profile.
    pub fn remove(&self) -> Result<AliasOutcome, AliasError> {
        let Some(content) = self.read_profile()? else {
            return Ok(AliasOutcome::ProfileMissing);
        };

        let (updated, removed) = strip_block(&content);
        if !removed {
            return Ok(AliasOutcome::NotSet);
        }

        self.write_profile(&updated)?;
        log::debug!("removed alias '{}' from {}", self.name, self.profile.display());
        Ok(AliasOutcome::Removed)
    }

    /// User-facing description of an outcome.
    pub fn describe(&self, outcome: AliasOutcome) -> String {
        let profile = self.profile.display();
        match outcome {
            AliasOutcome::Added => format!(
                "Alias '{}' added to {}. {}",
                self.name,
                profile,
                self.reload_hint()
            ),
            AliasOutcome::Removed => format!(
                "Alias '{}' removed from {}. {}",
                self.name,
                profile,
                self.reload_hint()
            ),
            AliasOutcome::AlreadySet => format!("Alias '{}' is already set.", self.name),
            AliasOutcome::NotSet => format!("Alias '{}' is not set in {}.", self.name, profile),
            AliasOutcome::ProfileMissing => {
                format!("Configuration file {} does not exist.", profile)
            }
        }
    }

    /// Hint shown after the profile changes.
    pub fn reload_hint(&self) -> String {
        match self.kind {
            ShellKind::PowerShell => "Restart PowerShell.".to_string(),
            ShellKind::Posix => format!(
                "Restart your shell or run 'source {}'.",
                self.profile.display()
            ),
        }
    }

    fn read_profile(&self) -> Result<Option<String>, AliasError> {
        match fs::read_to_string(&self.profile) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AliasError::ReadError {
                path: self.profile.clone(),
                source: e,
            }),
        }
    }

    /// Replace the profile contents atomically.
    ///
    /// A symlinked profile is written through: the temp file and rename
    /// happen next to the file the link points at, and that file keeps its
    /// permissions.
    fn write_profile(&self, content: &str) -> Result<(), AliasError> {
        let write_err = |path: &Path, source: io::Error| AliasError::WriteError {
            path: path.to_path_buf(),
            source,
        };

        let target = match fs::canonicalize(&self.profile) {
            Ok(resolved) => resolved,
            Err(e) if e.kind() == io::ErrorKind::NotFound => self.profile.clone(),
            Err(e) => return Err(write_err(&self.profile, e)),
        };
        let permissions = fs::metadata(&target).ok().map(|m| m.permissions());

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| write_err(&target, e))?;
        }

        let mut temp_name = target
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        temp_name.push(".dagger-tmp");
        let temp_path = target.with_file_name(temp_name);

        let mut file = fs::File::create(&temp_path).map_err(|e| write_err(&temp_path, e))?;
        file.write_all(content.as_bytes())
            .map_err(|e| write_err(&temp_path, e))?;
        file.sync_all().map_err(|e| write_err(&temp_path, e))?;
        if let Some(permissions) = permissions {
            fs::set_permissions(&temp_path, permissions).map_err(|e| write_err(&temp_path, e))?;
        }

        fs::rename(&temp_path, &target).map_err(|e| write_err(&target, e))
    }
}

fn has_block(content: &str) -> bool {
    content.lines().any(|line| line.trim() == MARKER_START)
}

/// Append the marker block, separated from existing content by a blank line.
fn insert_block(content: &str, alias_line: &str) -> String {
    let mut out = content.to_string();
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out.push('\n');
    out.push_str(MARKER_START);
    out.push('\n');
    out.push_str(alias_line);
    out.push('\n');
    out.push_str(MARKER_END);
    out.push('\n');
    out
}

/// Remove every marker block, plus the blank line that precedes one.
///
/// Returns the new content and whether anything was removed.
fn strip_block(content: &str) -> (String, bool) {
    let mut kept: Vec<&str> = Vec::new();
    let mut skipping = false;
    let mut removed = false;

    for line in content.split_inclusive('\n') {
        let trimmed = line.trim();
        if !skipping && trimmed == MARKER_START {
            skipping = true;
            removed = true;
            if kept.last().is_some_and(|prev| prev.trim().is_empty()) {
                kept.pop();
            }
            continue;
        }
        if skipping {
            if trimmed == MARKER_END {
                skipping = false;
            }
            continue;
        }
        kept.push(line);
    }

    (kept.concat(), removed)
}
