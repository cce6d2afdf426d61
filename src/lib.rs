//! Dagger - an interactive launcher for directory-backed apps
//!
//! An app is a directory named `[Display Name]` under the apps root. If it
//! holds the entrypoint file (`main.py` by default) it can be run; if it
//! holds further `[Name]` directories it opens its own menu of sub-apps.
//! Nesting is unbounded.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, dispatches)
//! - [`nav`] - Menu state machine driving one interactive session
//! - [`catalog`] - Filesystem discovery and sample-app creation
//! - [`runner`] - Runs entrypoints as child processes
//! - [`alias`] - Shell profile alias management
//! - [`core`] - Names, paths and configuration
//! - [`ui`] - Menu screens, the terminal presenter and plain output
//!
//! # Invariants
//!
//! 1. Every listing reflects the filesystem at the moment it is rendered
//! 2. Directory names without brackets, and `config`, are never listed
//! 3. No catalog, navigation or child-process failure ends a menu session

pub mod alias;
pub mod catalog;
pub mod cli;
pub mod core;
pub mod nav;
pub mod runner;
pub mod ui;
