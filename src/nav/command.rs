//! nav::command
//!
//! Decoding of raw menu input.
//!
//! Input is decoded once into a [`MenuCommand`]; the menu loops match on
//! the enum and never compare strings themselves. Whether a command is
//! meaningful at the current level (e.g. `Back` at the root) is decided by
//! the loop, not here.

/// A decoded menu command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuCommand {
    /// `b`
    Back,
    /// `q`
    Quit,
    /// A decimal numeral
    Select(usize),
    /// `n`
    CreateApp,
    /// `a`
    AddAlias,
    /// `r`
    RemoveAlias,
    /// Anything else
    Invalid(String),
}

impl MenuCommand {
    /// Decode trimmed, lower-cased input.
    ///
    /// # Example
    ///
    /// ```
    /// use daggerwork::nav::MenuCommand;
    ///
    /// assert_eq!(MenuCommand::decode("q"), MenuCommand::Quit);
    /// assert_eq!(MenuCommand::decode("12"), MenuCommand::Select(12));
    /// assert_eq!(MenuCommand::decode("x"), MenuCommand::Invalid("x".into()));
    /// ```
    pub fn decode(raw: &str) -> Self {
        match raw {
            "b" => MenuCommand::Back,
            "q" => MenuCommand::Quit,
            "n" => MenuCommand::CreateApp,
            "a" => MenuCommand::AddAlias,
            "r" => MenuCommand::RemoveAlias,
            digits if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => digits
                .parse()
                .map(MenuCommand::Select)
                .unwrap_or_else(|_| MenuCommand::Invalid(raw.to_string())),
            other => MenuCommand::Invalid(other.to_string()),
        }
    }
}
