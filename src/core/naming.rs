//! core::naming
//!
//! The bracket convention for app directories.
//!
//! # Features
//!
//! - Wrap a display name into its storage (directory) form
//! - Unwrap a directory name back into a display name
//! - Recognize the reserved directory name
//!
//! A directory named `[Foo]` is the app displayed as `Foo`. Anything that is
//! not bracket-wrapped is an ordinary directory and never shows up in menus.

/// Directory name reserved for the launcher itself at the apps root.
pub const RESERVED_DIR: &str = "config";

/// Wrap a display name into its directory form.
///
/// # Example
///
/// ```
/// use daggerwork::core::naming::encode;
///
/// assert_eq!(encode("Foo"), "[Foo]");
/// assert_eq!(encode("Disk Tools"), "[Disk Tools]");
/// ```
pub fn encode(display: &str) -> String {
    format!("[{}]", display)
}

/// Unwrap a directory name into a display name.
///
/// Returns `None` if the name does not follow the bracket convention or
/// the bracketed part is empty.
///
/// # Example
///
/// ```
/// use daggerwork::core::naming::decode;
///
/// assert_eq!(decode("[Foo]"), Some("Foo"));
/// assert_eq!(decode("Foo"), None);
/// assert_eq!(decode("[]"), None);
/// ```
pub fn decode(dir_name: &str) -> Option<&str> {
    let inner = dir_name.strip_prefix('[')?.strip_suffix(']')?;
    if inner.is_empty() {
        None
    } else {
        Some(inner)
    }
}

/// Check whether a directory name is the reserved one, bare or bracketed.
pub fn is_reserved(dir_name: &str) -> bool {
    dir_name == RESERVED_DIR || decode(dir_name) == Some(RESERVED_DIR)
}
