//! run command - Run one app without the menu

use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context as _, Result};

use super::Context;
use crate::catalog::{AppCatalog, AppEntry};
use crate::core::types::AppName;
use crate::nav::NavError;
use crate::runner::AppRunner;
use crate::ui::output;

/// Run the app at `path` (`Parent/Child` for sub-apps).
///
/// The child's stdout and stderr are forwarded once it exits. A failed run
/// is an error, so the process exits non-zero.
pub fn run(ctx: &Context, path: &str) -> Result<()> {
    let catalog = ctx.catalog();
    let entry = resolve(&catalog, &ctx.apps_dir, path)?;

    if !entry.has_entrypoint {
        bail!(NavError::NoEntrypoint {
            name: entry.display_name,
            entrypoint: catalog.entrypoint_name().to_string(),
        });
    }

    let result = ctx.runner().execute(&entry.entrypoint);

    print!("{}", result.stdout);
    std::io::stdout().flush().context("Failed to write app output")?;
    if !result.stderr.is_empty() {
        eprint!("{}", result.stderr);
    }

    if let Some(reason) = result.failure_reason() {
        bail!("Running app '{}': {}", entry.display_name, reason);
    }

    output::print(
        format!("App '{}' finished", entry.display_name),
        ctx.verbosity,
    );
    Ok(())
}

/// Walk `path` from the apps root, one bracket directory per segment.
fn resolve(catalog: &AppCatalog, apps_dir: &Path, path: &str) -> Result<AppEntry> {
    let mut root = apps_dir.to_path_buf();
    let mut entry = None;

    for segment in path.split('/') {
        let name = AppName::discovered(segment)
            .with_context(|| format!("Invalid app path '{}'", path))?;
        let found = catalog.inspect(&root, &name);
        if !found.directory.is_dir() {
            bail!("App '{}' not found", path);
        }
        root = found.directory.clone();
        entry = Some(found);
    }

    entry.with_context(|| format!("Invalid app path '{}'", path))
}
