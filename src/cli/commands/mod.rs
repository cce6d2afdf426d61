//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Calls the catalog, navigator, runner or alias manager
//! 3. Formats and displays output
//!
//! Only `menu` is interactive. Every other command runs once and exits.

mod alias;
mod completion;
mod config_cmd;
mod list;
mod menu;
mod new;
mod run;

// Re-export command functions for testing and direct invocation
pub use alias::alias;
pub use completion::completion;
pub use config_cmd::{get as config_get, list as config_list, set as config_set};
pub use list::list;
pub use menu::menu;
pub use new::new;
pub use run::run;

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::alias::AliasManager;
use crate::catalog::AppCatalog;
use crate::cli::args::{Command, ConfigAction};
use crate::core::config::Config;
use crate::runner::ProcessRunner;
use crate::ui::output::Verbosity;

/// Everything a handler needs from the global flags and config.
#[derive(Debug, Clone)]
pub struct Context {
    /// Resolved apps root
    pub apps_dir: PathBuf,
    /// Output verbosity
    pub verbosity: Verbosity,
    /// Loaded configuration
    pub config: Config,
}

impl Context {
    /// Catalog using the configured entrypoint.
    pub fn catalog(&self) -> AppCatalog {
        AppCatalog::new(self.config.entrypoint())
    }

    /// Runner using the configured interpreter.
    pub fn runner(&self) -> ProcessRunner {
        ProcessRunner::new(self.config.interpreter())
    }

    /// Alias manager for the configured alias, pointing at this binary.
    pub fn alias_manager(&self) -> Result<AliasManager> {
        let target = std::env::current_exe().context("Failed to locate the dagger executable")?;
        AliasManager::detect(self.config.alias_name(), target, self.config.alias_profile())
            .context("Failed to locate shell profile")
    }
}

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Menu => menu::menu(ctx),
        Command::List { json } => list::list(ctx, json),
        Command::New { name } => new::new(ctx, &name),
        Command::Run { name } => run::run(ctx, &name),
        Command::Alias { action } => alias::alias(ctx, action),
        Command::Config { action } => match action {
            ConfigAction::Get { key } => config_cmd::get(ctx, &key),
            ConfigAction::Set { key, value } => config_cmd::set(ctx, &key, &value),
            ConfigAction::List => config_cmd::list(ctx),
        },
        Command::Completion { shell } => completion::completion(shell),
    }
}
