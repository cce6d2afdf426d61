//! ui::terminal
//!
//! Presenter backed by a line-oriented terminal.
//!
//! # Behavior
//!
//! - Every menu render clears the screen (only when styled output is on)
//! - Notices are queued and printed under the next box, so they survive
//!   the redraw that follows them
//! - End of input on a menu prompt reads as `q`
//!
//! The presenter is generic over its reader and writer so it can be driven
//! from buffers in tests; [`TerminalPresenter::stdio`] wires it to the
//! process streams.

use std::io::{self, BufRead, IsTerminal, Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};

use super::boxdraw::{self, BoxRow};
use super::prompts::{Presenter, PromptError};
use super::{Notice, Screen, Tone};
use crate::core::types::AppName;
use crate::runner::ProcessResult;

/// Text-mode presenter.
pub struct TerminalPresenter<R, W> {
    input: R,
    output: W,
    styled: bool,
    pending: Vec<Notice>,
}

impl TerminalPresenter<io::StdinLock<'static>, Stdout> {
    /// Create a presenter on stdin/stdout.
    ///
    /// Colors and screen clearing are enabled only when stdout is a terminal.
    pub fn stdio() -> Self {
        let styled = io::stdout().is_terminal();
        Self::new(io::stdin().lock(), io::stdout(), styled)
    }
}

impl<R: BufRead, W: Write> TerminalPresenter<R, W> {
    /// Create a presenter over arbitrary streams.
    pub fn new(input: R, output: W, styled: bool) -> Self {
        Self {
            input,
            output,
            styled,
            pending: Vec::new(),
        }
    }

    /// Consume the presenter, returning its writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` and read one line. Returns `None` at end of input.
    fn prompt_line(&mut self, prompt: &str) -> Result<Option<String>, PromptError> {
        if self.styled {
            write!(self.output, "{}", prompt.green().bold())?;
        } else {
            write!(self.output, "{}", prompt)?;
        }
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn write_box(&mut self, screen: &Screen) -> io::Result<()> {
        for row in boxdraw::layout(screen) {
            if !self.styled {
                writeln!(self.output, "{}", boxdraw::plain(&[row]).concat())?;
                continue;
            }
            match row {
                BoxRow::Border(line) => writeln!(self.output, "{}", line.cyan())?,
                BoxRow::Content { text, title } => {
                    let bar = "│".cyan();
                    if title {
                        writeln!(self.output, "{bar}{}{bar}", text.blue().bold())?;
                    } else {
                        writeln!(self.output, "{bar}{text}{bar}")?;
                    }
                }
            }
        }
        Ok(())
    }

    fn write_notice(&mut self, notice: &Notice) -> io::Result<()> {
        let text = match notice.tone {
            Tone::Error => format!("Error: {}", notice.message),
            _ => notice.message.clone(),
        };
        if !self.styled {
            return writeln!(self.output, "{}", text);
        }
        match notice.tone {
            Tone::Info => writeln!(self.output, "{}", text.cyan()),
            Tone::Success => writeln!(self.output, "{}", text.green()),
            Tone::Warning => writeln!(self.output, "{}", text.yellow()),
            Tone::Error => writeln!(self.output, "{}", text.red()),
        }
    }

    fn flush_pending(&mut self) -> io::Result<()> {
        for notice in std::mem::take(&mut self.pending) {
            self.write_notice(&notice)?;
        }
        self.output.flush()
    }
}

impl<R: BufRead, W: Write> Presenter for TerminalPresenter<R, W> {
    fn render(&mut self, screen: &Screen) -> Result<(), PromptError> {
        if self.styled {
            queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        self.write_box(screen)?;
        self.flush_pending()?;
        Ok(())
    }

    fn read_choice(&mut self, prompt: &str) -> Result<String, PromptError> {
        Ok(self
            .prompt_line(prompt)?
            .map(|line| line.to_lowercase())
            .unwrap_or_else(|| "q".to_string()))
    }

    fn read_text(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.prompt_line(prompt)?.ok_or(PromptError::Cancelled)
    }

    fn notify(&mut self, notice: Notice) {
        self.pending.push(notice);
    }

    fn begin_run(&mut self, name: &AppName) -> Result<(), PromptError> {
        self.flush_pending()?;
        self.write_notice(&Notice::info(format!("Running app: {}", name)))?;
        self.output.flush()?;
        Ok(())
    }

    fn show_run(&mut self, name: &AppName, result: &ProcessResult) -> Result<(), PromptError> {
        write_block(&mut self.output, &result.stdout)?;

        match result.failure_reason() {
            None => {
                if self.styled {
                    write_block(&mut self.output, &result.stderr.as_str().red().to_string())?;
                } else {
                    write_block(&mut self.output, &result.stderr)?;
                }
                self.write_notice(&Notice::success(format!("App '{}' finished", name)))?;
            }
            Some(reason) => {
                self.write_notice(&Notice::error(format!("Running app '{}': {}", name, reason)))?;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn acknowledge(&mut self) -> Result<(), PromptError> {
        self.prompt_line("Press Enter to continue...")?;
        Ok(())
    }

    fn finish(&mut self) {
        if let Err(e) = self.flush_pending() {
            log::debug!("failed to flush notices: {}", e);
        }
    }
}

/// Write captured output, adding a final newline if it lacks one.
fn write_block(output: &mut impl Write, text: &str) -> io::Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    write!(output, "{}", text)?;
    if !text.ends_with('\n') {
        writeln!(output)?;
    }
    Ok(())
}
