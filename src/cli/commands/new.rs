//! new command - Create a sample app

use anyhow::{Context as _, Result};

use super::Context;
use crate::core::types::AppName;
use crate::ui::output;

/// Create the sample app `name` under the apps directory.
pub fn new(ctx: &Context, name: &str) -> Result<()> {
    let name = AppName::new(name).context("Invalid app name")?;
    let entry = ctx
        .catalog()
        .create_app(&ctx.apps_dir, &name)
        .context("Failed to create app")?;

    output::print(
        format!(
            "Sample app '{}' created at {}",
            name,
            entry.directory.display()
        ),
        ctx.verbosity,
    );
    Ok(())
}
