//! cli
//!
//! Command-line interface layer for Dagger.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Initialise logging and load configuration
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. Handlers resolve what they need from the
//! [`commands::Context`] and call into [`crate::catalog`], [`crate::nav`],
//! [`crate::runner`] and [`crate::alias`]. Typed errors from those modules
//! are wrapped with `anyhow` context here and nowhere else.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use anyhow::{Context as _, Result};

use crate::core::config::Config;
use crate::ui::output::Verbosity;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);

    // RUST_LOG, when set, overrides the flag-derived level.
    env_logger::Builder::new()
        .filter_level(verbosity.log_level())
        .parse_env("RUST_LOG")
        .init();

    let config = Config::load().context("Failed to load config")?;
    let apps_dir = config
        .apps_dir(cli.apps_dir.as_deref())
        .context("Failed to resolve apps directory")?;
    log::debug!("apps directory: {}", apps_dir.display());

    let ctx = commands::Context {
        apps_dir,
        verbosity,
        config,
    };

    commands::dispatch(cli.command.unwrap_or(args::Command::Menu), &ctx)
}
