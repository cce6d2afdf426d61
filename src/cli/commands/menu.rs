//! menu command - Interactive launcher session

use anyhow::{Context as _, Result};

use super::Context;
use crate::nav::{BackNavigation, Navigator};
use crate::ui::output;
use crate::ui::TerminalPresenter;

/// Run the interactive menu until the user quits.
pub fn menu(ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog();
    if catalog
        .ensure_root(&ctx.apps_dir)
        .context("Failed to create apps directory")?
    {
        output::print(
            format!("Created apps directory {}", ctx.apps_dir.display()),
            ctx.verbosity,
        );
    }

    let runner = ctx.runner();
    let alias = match ctx.alias_manager() {
        Ok(alias) => Some(alias),
        Err(e) => {
            output::warn(format!("alias options disabled: {:#}", e), ctx.verbosity);
            None
        }
    };

    let back = if ctx.config.back_to_root() {
        BackNavigation::Root
    } else {
        BackNavigation::Parent
    };

    let mut presenter = TerminalPresenter::stdio();
    let mut navigator =
        Navigator::new(&catalog, &runner, &mut presenter).with_back_navigation(back);
    if let Some(alias) = alias.as_ref() {
        navigator = navigator.with_alias(alias);
    }

    navigator
        .run_session(&ctx.apps_dir)
        .context("Menu session ended unexpectedly")
}
