//! alias command - Add, remove, or inspect the shell alias

use anyhow::{Context as _, Result};

use super::Context;
use crate::cli::args::AliasAction;
use crate::ui::output;

/// Apply an alias action to the detected (or configured) shell profile.
pub fn alias(ctx: &Context, action: AliasAction) -> Result<()> {
    let manager = ctx.alias_manager()?;

    let message = match action {
        AliasAction::Add => {
            let outcome = manager.add().context("Failed to add alias")?;
            manager.describe(outcome)
        }
        AliasAction::Remove => {
            let outcome = manager.remove().context("Failed to remove alias")?;
            manager.describe(outcome)
        }
        AliasAction::Status => {
            let set = manager.is_set().context("Failed to read shell profile")?;
            format!(
                "Alias '{}' is {} in {}",
                manager.name(),
                if set { "set" } else { "not set" },
                manager.profile().display()
            )
        }
    };

    output::print(message, ctx.verbosity);
    Ok(())
}
