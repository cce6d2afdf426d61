//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`AppName`] - Validated app display name
//!
//! # Validation
//!
//! These types enforce validity at construction time. Names typed by the
//! user go through the strict rules of [`AppName::new`]; names read back
//! from disk only need to address their directory. Either way a name that
//! would escape the apps root cannot be represented.
//!
//! # Examples
//!
//! ```
//! use daggerwork::core::types::AppName;
//!
//! let name = AppName::new("Disk Tools").unwrap();
//! assert_eq!(name.dir_name(), "[Disk Tools]");
//!
//! assert!(AppName::new("config").is_err());
//! assert!(AppName::new("../escape").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::naming::{self, RESERVED_DIR};

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid app name: {0}")]
    InvalidAppName(String),
}

/// A validated app display name.
///
/// Display names must satisfy:
/// - Cannot be empty or have leading/trailing whitespace
/// - Cannot be `.` or `..`
/// - Cannot contain `/`, `\`, `[`, `]`, or control characters
/// - Cannot be the reserved name `config`
///
/// # Example
///
/// ```
/// use daggerwork::core::types::AppName;
///
/// let name = AppName::new("Foo").unwrap();
/// assert_eq!(name.as_str(), "Foo");
///
/// assert!(AppName::new("").is_err());
/// assert!(AppName::new(" Foo").is_err());
/// assert!(AppName::new("a/b").is_err());
/// assert!(AppName::new("[Foo]").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AppName(String);

impl AppName {
    /// Create a new validated app name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidAppName` if the name breaks any rule above.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    /// Recover an app name from a directory name following the bracket
    /// convention.
    ///
    /// Returns `None` for ordinary directories and the reserved name. Any
    /// other bracketed directory is an app, even one whose inner text
    /// [`AppName::new`] would refuse to create.
    pub fn from_dir_name(dir_name: &str) -> Option<Self> {
        if naming::is_reserved(dir_name) {
            return None;
        }
        naming::decode(dir_name).and_then(Self::discovered)
    }

    /// Accept the inner text of a bracketed directory that already exists.
    ///
    /// Only the rules needed to address the directory apply: non-empty,
    /// not reserved, no path separator. Whitespace, brackets and dot names
    /// are kept as found.
    pub fn discovered(inner: &str) -> Option<Self> {
        let addressable = !inner.is_empty()
            && inner != RESERVED_DIR
            && !inner.contains(['/', '\\']);
        addressable.then(|| Self(inner.to_string()))
    }

    fn validate(name: &str) -> Result<(), TypeError> {
        if name.is_empty() {
            return Err(TypeError::InvalidAppName(
                "app name cannot be empty".into(),
            ));
        }

        if name.trim() != name {
            return Err(TypeError::InvalidAppName(
                "app name cannot start or end with whitespace".into(),
            ));
        }

        if name == "." || name == ".." {
            return Err(TypeError::InvalidAppName(format!(
                "app name cannot be '{name}'"
            )));
        }

        if name == RESERVED_DIR {
            return Err(TypeError::InvalidAppName(format!(
                "'{RESERVED_DIR}' is reserved"
            )));
        }

        const INVALID_CHARS: [char; 4] = ['/', '\\', '[', ']'];
        for c in INVALID_CHARS {
            if name.contains(c) {
                return Err(TypeError::InvalidAppName(format!(
                    "app name cannot contain '{c}'"
                )));
            }
        }

        if name.chars().any(char::is_control) {
            return Err(TypeError::InvalidAppName(
                "app name cannot contain control characters".into(),
            ));
        }

        Ok(())
    }

    /// Get the display name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the storage (directory) form of this name.
    pub fn dir_name(&self) -> String {
        naming::encode(&self.0)
    }
}

impl TryFrom<String> for AppName {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<AppName> for String {
    fn from(name: AppName) -> Self {
        name.0
    }
}

impl AsRef<str> for AppName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AppName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
