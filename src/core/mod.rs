//! core
//!
//! Core domain types, naming rules, configuration, and paths.
//!
//! # Modules
//!
//! - [`types`] - Strong types: AppName
//! - [`naming`] - The `[Name]` directory convention
//! - [`config`] - Configuration schema and loading
//! - [`paths`] - Centralized path routing for launcher storage
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - Schemas are strict and self-describing
//! - Nothing here touches the terminal

pub mod config;
pub mod naming;
pub mod paths;
pub mod types;
