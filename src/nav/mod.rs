//! nav
//!
//! The menu state machine.
//!
//! # States
//!
//! - [`NavState::AtRoot`] - the root menu listing every app
//! - [`NavState::AtGroup`] - browsing an app that has sub-apps
//! - [`NavState::Running`] - an entrypoint is executing (transient)
//! - [`NavState::Exiting`] - the session is over
//!
//! # Traversal
//!
//! Each group level is one call of a recursive loop. The directory a level
//! scans is part of the [`NavigationContext`] passed into that call, so
//! descending never mutates shared state and returning restores the
//! caller's view for free.
//!
//! Entering an app with no sub-apps runs it straight away (or reports that
//! it has no entrypoint). Entering an app with sub-apps opens a choice
//! menu. `q` ends the whole session from any depth; `b` leaves one level.
//!
//! With [`BackNavigation::Root`], leaving any nested level (by `b` or after
//! a run) unwinds all the way to the root menu instead of to the parent.

pub mod command;
pub mod menu;

pub use command::MenuCommand;
pub use menu::{Choice, ChoiceList};

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::alias::AliasManager;
use crate::catalog::{AppCatalog, AppEntry};
use crate::core::types::AppName;
use crate::runner::{AppRunner, ProcessResult};
use crate::ui::{Notice, Presenter, PromptError};

/// Recoverable navigation conditions, reported to the user.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavError {
    #[error("App '{name}' does not have a {entrypoint} file.")]
    NoEntrypoint { name: AppName, entrypoint: String },

    #[error("{0}")]
    InvalidChoice(&'static str),
}

/// Where `b` leads from a nested menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackNavigation {
    /// One level up.
    #[default]
    Parent,
    /// Straight to the root menu.
    Root,
}

/// Current state of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavState {
    AtRoot,
    AtGroup(PathBuf),
    Running(AppEntry),
    Exiting,
}

/// The directory a menu level lists, and how it was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationContext {
    /// Directory whose bracket-named children are listed at this level
    pub root: PathBuf,
    /// Apps descended through from the apps root, outermost first
    pub path_stack: Vec<AppName>,
}

impl NavigationContext {
    /// Context for the apps root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            path_stack: Vec::new(),
        }
    }

    /// Context for browsing inside `entry`.
    pub fn descend(&self, entry: &AppEntry) -> Self {
        let mut path_stack = self.path_stack.clone();
        path_stack.push(entry.display_name.clone());
        Self {
            root: entry.directory.clone(),
            path_stack,
        }
    }

    /// Number of levels below the apps root.
    pub fn depth(&self) -> usize {
        self.path_stack.len()
    }
}

/// How a nested level ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    /// Control goes back to the caller's menu.
    Return,
    /// Every level between here and the root unwinds.
    Unwind,
    /// The session ends.
    Quit,
}

/// Drives an interactive menu session.
pub struct Navigator<'a, P, R> {
    catalog: &'a AppCatalog,
    runner: &'a R,
    presenter: &'a mut P,
    alias: Option<&'a AliasManager>,
    back: BackNavigation,
    state: NavState,
}

impl<'a, P: Presenter, R: AppRunner> Navigator<'a, P, R> {
    /// Create a navigator.
    pub fn new(catalog: &'a AppCatalog, runner: &'a R, presenter: &'a mut P) -> Self {
        Self {
            catalog,
            runner,
            presenter,
            alias: None,
            back: BackNavigation::default(),
            state: NavState::AtRoot,
        }
    }

    /// Offer alias add/remove in the root menu.
    pub fn with_alias(mut self, alias: &'a AliasManager) -> Self {
        self.alias = Some(alias);
        self
    }

    /// Choose where `b` leads from nested menus.
    pub fn with_back_navigation(mut self, back: BackNavigation) -> Self {
        self.back = back;
        self
    }

    /// Get the current state.
    pub fn state(&self) -> &NavState {
        &self.state
    }

    /// Run a session over `apps_root` until the user quits.
    ///
    /// # Errors
    ///
    /// Only presenter failures end a session early; every catalog and
    /// process condition is reported and recovered from.
    pub fn run_session(&mut self, apps_root: &Path) -> Result<(), PromptError> {
        let ctx = NavigationContext::new(apps_root);
        let result = self.root_loop(&ctx);
        self.set_state(NavState::Exiting);
        self.presenter.finish();
        result
    }

    fn set_state(&mut self, state: NavState) {
        log::debug!("nav: {} -> {}", state_label(&self.state), state_label(&state));
        self.state = state;
    }

    fn root_loop(&mut self, ctx: &NavigationContext) -> Result<(), PromptError> {
        loop {
            self.set_state(NavState::AtRoot);

            let apps = match self.catalog.list_apps(&ctx.root) {
                Ok(apps) => apps,
                Err(e) => {
                    self.presenter.notify(Notice::error(e.to_string()));
                    Vec::new()
                }
            };
            let alias_set = self.alias_status();

            self.presenter.render(&menu::root_screen(&apps, alias_set))?;
            let raw = self.presenter.read_choice("> ")?;

            match MenuCommand::decode(&raw) {
                MenuCommand::Quit => {
                    self.presenter.notify(Notice::warning("Exiting Dagger."));
                    return Ok(());
                }
                MenuCommand::Select(n) => match n.checked_sub(1).and_then(|i| apps.get(i)) {
                    Some(name) => {
                        if self.enter(ctx, name)? == Flow::Quit {
                            return Ok(());
                        }
                    }
                    None => self.report(NavError::InvalidChoice("Invalid app number.")),
                },
                MenuCommand::CreateApp => self.create_app(ctx)?,
                MenuCommand::AddAlias if alias_set == Some(false) => self.toggle_alias(true),
                MenuCommand::RemoveAlias if alias_set == Some(true) => self.toggle_alias(false),
                _ => self.report(NavError::InvalidChoice("Invalid choice.")),
            }
        }
    }

    /// Enter the app `name` listed at `ctx`.
    fn enter(&mut self, ctx: &NavigationContext, name: &AppName) -> Result<Flow, PromptError> {
        let entry = self.catalog.inspect(&ctx.root, name);

        if entry.is_group() {
            return self.group_loop(ctx, name);
        }

        if entry.has_entrypoint {
            self.run_entry(&entry)?;
        } else {
            let error = self.no_entrypoint(&entry);
            self.report(error);
        }
        Ok(Flow::Return)
    }

    /// Menu loop for a group listed at `parent`.
    fn group_loop(&mut self, parent: &NavigationContext, name: &AppName) -> Result<Flow, PromptError> {
        loop {
            let entry = self.catalog.inspect(&parent.root, name);
            let ctx = parent.descend(&entry);
            self.set_state(NavState::AtGroup(entry.directory.clone()));

            let choices = ChoiceList::for_entry(&entry);
            let screen = menu::group_screen(&ctx.path_stack, &choices, &self.back_target(&ctx));
            self.presenter.render(&screen)?;
            let raw = self.presenter.read_choice("Select an option: ")?;

            match MenuCommand::decode(&raw) {
                MenuCommand::Back => return Ok(Flow::Return),
                MenuCommand::Quit => return Ok(Flow::Quit),
                MenuCommand::Select(n) => match choices.resolve(n) {
                    Some(Choice::RunCurrent) => {
                        self.run_entry(&entry)?;
                        if self.back == BackNavigation::Root {
                            return Ok(Flow::Unwind);
                        }
                    }
                    Some(Choice::Descend(index)) => {
                        let sub = &choices.sub_entries()[index];
                        match self.enter(&ctx, sub)? {
                            Flow::Quit => return Ok(Flow::Quit),
                            _ if self.back == BackNavigation::Root => return Ok(Flow::Unwind),
                            Flow::Unwind => return Ok(Flow::Unwind),
                            Flow::Return => {}
                        }
                    }
                    None => self.report(NavError::InvalidChoice("Invalid sub-app number.")),
                },
                _ => self.report(NavError::InvalidChoice("Invalid choice.")),
            }
        }
    }

    fn run_entry(&mut self, entry: &AppEntry) -> Result<ProcessResult, PromptError> {
        self.set_state(NavState::Running(entry.clone()));
        self.presenter.begin_run(&entry.display_name)?;
        let result = self.runner.execute(&entry.entrypoint);
        self.presenter.show_run(&entry.display_name, &result)?;
        self.presenter.acknowledge()?;
        Ok(result)
    }

    fn create_app(&mut self, ctx: &NavigationContext) -> Result<(), PromptError> {
        let raw = match self.presenter.read_text("Enter the name for the new app: ") {
            Ok(raw) => raw,
            Err(PromptError::Cancelled) => return Ok(()),
            Err(e) => return Err(e),
        };

        if raw.is_empty() {
            self.presenter
                .notify(Notice::error("App name cannot be empty."));
            return Ok(());
        }

        let notice = match AppName::new(raw) {
            Err(e) => Notice::error(e.to_string()),
            Ok(name) => match self.catalog.create_app(&ctx.root, &name) {
                Ok(_) => Notice::success(format!("Sample app '{}' created.", name)),
                Err(e) => Notice::error(format!("Creating app: {}", e)),
            },
        };
        self.presenter.notify(notice);
        Ok(())
    }

    fn alias_status(&mut self) -> Option<bool> {
        let alias = self.alias?;
        match alias.is_set() {
            Ok(set) => Some(set),
            Err(e) => {
                self.presenter.notify(Notice::error(e.to_string()));
                Some(false)
            }
        }
    }

    fn toggle_alias(&mut self, add: bool) {
        let Some(alias) = self.alias else {
            return;
        };
        let result = if add { alias.add() } else { alias.remove() };
        let notice = match result {
            Ok(outcome) if outcome.changed() => Notice::success(alias.describe(outcome)),
            Ok(outcome) => Notice::warning(alias.describe(outcome)),
            Err(e) => Notice::error(e.to_string()),
        };
        self.presenter.notify(notice);
    }

    fn back_target(&self, ctx: &NavigationContext) -> String {
        match (self.back, ctx.depth()) {
            (BackNavigation::Parent, depth) if depth > 1 => ctx.path_stack[depth - 2].to_string(),
            _ => "main menu".to_string(),
        }
    }

    fn no_entrypoint(&self, entry: &AppEntry) -> NavError {
        NavError::NoEntrypoint {
            name: entry.display_name.clone(),
            entrypoint: self.catalog.entrypoint_name().to_string(),
        }
    }

    fn report(&mut self, error: NavError) {
        self.presenter.notify(Notice::error(error.to_string()));
    }
}

fn state_label(state: &NavState) -> String {
    match state {
        NavState::AtRoot => "AtRoot".into(),
        NavState::AtGroup(path) => format!("AtGroup({})", path.display()),
        NavState::Running(entry) => format!("Running({})", entry.display_name),
        NavState::Exiting => "Exiting".into(),
    }
}
