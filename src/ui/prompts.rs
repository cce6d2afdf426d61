//! ui::prompts
//!
//! Interactive prompts and the presenter seam.
//!
//! # Design
//!
//! Interactive menus depend on the [`Presenter`] trait rather than on the
//! terminal. A presenter shows a [`Screen`], reads one line of input, and
//! reports results. Choices come back trimmed and lower-cased; free text
//! comes back trimmed only.

use thiserror::Error;

use super::{Notice, Screen};
use crate::core::types::AppName;
use crate::runner::ProcessResult;

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("prompt cancelled by user")]
    Cancelled,

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for PromptError {
    fn from(e: std::io::Error) -> Self {
        PromptError::IoError(e.to_string())
    }
}

/// Renders menus and collects input for an interactive session.
pub trait Presenter {
    /// Show a menu box.
    fn render(&mut self, screen: &Screen) -> Result<(), PromptError>;

    /// Read a menu choice, trimmed and lower-cased.
    fn read_choice(&mut self, prompt: &str) -> Result<String, PromptError>;

    /// Read free text, trimmed.
    ///
    /// Returns `Err(PromptError::Cancelled)` if the user aborts the prompt.
    fn read_text(&mut self, prompt: &str) -> Result<String, PromptError>;

    /// Queue a message for the user.
    fn notify(&mut self, notice: Notice);

    /// Announce that an app is about to run.
    fn begin_run(&mut self, name: &AppName) -> Result<(), PromptError>;

    /// Show the captured output and outcome of a run.
    fn show_run(&mut self, name: &AppName, result: &ProcessResult) -> Result<(), PromptError>;

    /// Wait until the user acknowledges what is on screen.
    fn acknowledge(&mut self) -> Result<(), PromptError>;

    /// Flush anything still queued before the session ends.
    fn finish(&mut self);
}
