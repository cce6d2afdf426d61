//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`prompts`] - The [`Presenter`] seam used by interactive menus
//! - [`boxdraw`] - Bordered box layout
//! - [`terminal`] - Presenter backed by the real terminal
//! - [`output`] - Output formatting for one-shot commands
//!
//! # Design
//!
//! Menus are described as data ([`Screen`]) and handed to a presenter.
//! The navigation code never writes to the terminal itself, which keeps it
//! testable with a scripted presenter.

pub mod boxdraw;
pub mod output;
pub mod prompts;
pub mod terminal;

pub use prompts::{PromptError, Presenter};
pub use terminal::TerminalPresenter;

/// One line in the body of a menu box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuLine {
    /// A line of text.
    Text(String),
    /// A horizontal separator.
    Separator,
}

impl MenuLine {
    /// Create a text line.
    pub fn text(text: impl Into<String>) -> Self {
        MenuLine::Text(text.into())
    }
}

/// A menu box: a title and an ordered list of lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    /// First line of the box
    pub title: String,
    /// Whether the title is centered
    pub center_title: bool,
    /// Body lines
    pub lines: Vec<MenuLine>,
}

impl Screen {
    /// Get the body text lines, separators skipped.
    pub fn text_lines(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|line| match line {
                MenuLine::Text(text) => Some(text.as_str()),
                MenuLine::Separator => None,
            })
            .collect()
    }
}

/// How a notice should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Warning,
    Error,
}

/// A short message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub tone: Tone,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            tone: Tone::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            tone: Tone::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            tone: Tone::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            tone: Tone::Error,
            message: message.into(),
        }
    }
}
