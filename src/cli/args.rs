//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--apps-dir <path>`: Use this apps directory instead of the configured one
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Dagger - an interactive launcher for apps kept as `[Name]` directories
#[derive(Parser, Debug)]
#[command(name = "dagger")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use this apps directory instead of the configured one
    #[arg(long, global = true, value_name = "DIR")]
    pub apps_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Command to run; opens the menu when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the interactive menu
    #[command(
        name = "menu",
        long_about = "Open the interactive menu.\n\n\
            Lists every app in the apps directory. Choosing an app runs it, or opens \
            its own menu when it contains sub-apps. This is what runs when no command \
            is given.",
        after_help = "\
KEYS:
    1, 2, ...   choose an app or option
    n           create a sample app (root menu)
    a / r       add or remove the shell alias (root menu)
    b           go back
    q           quit from any level"
    )]
    Menu,

    /// List apps in the apps directory
    #[command(
        name = "list",
        visible_alias = "ls",
        after_help = "\
EXAMPLES:
    # Names only, sorted
    dagger list

    # Full tree with entrypoint status, for scripting
    dagger list --json"
    )]
    List {
        /// Print the app tree as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a sample app
    #[command(
        name = "new",
        long_about = "Create a sample app.\n\n\
            Creates the `[NAME]` directory under the apps directory with an \
            entrypoint that prints a greeting. Fails if the app already exists."
    )]
    New {
        /// Display name of the app
        name: String,
    },

    /// Run an app without opening the menu
    #[command(
        name = "run",
        after_help = "\
EXAMPLES:
    # Run a top-level app
    dagger run Foo

    # Run a sub-app
    dagger run Foo/Bar"
    )]
    Run {
        /// App to run; sub-apps are addressed as Parent/Child
        name: String,
    },

    /// Manage the shell alias
    Alias {
        #[command(subcommand)]
        action: AliasAction,
    },

    /// Get, set, or list configuration values
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Alias subcommands
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum AliasAction {
    /// Add the alias to the shell profile
    Add,
    /// Remove the alias from the shell profile
    Remove,
    /// Show whether the alias is set
    Status,
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Value to set
        value: String,
    },
    /// List all configuration values
    List,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
