//! nav::menu
//!
//! Menu content for the root and group levels.
//!
//! # Numbering
//!
//! A group that has its own entrypoint offers "Run this app" as choice 1
//! and numbers its sub-apps from 2. A group without one numbers its
//! sub-apps from 1. [`ChoiceList`] fixes the offset for one render and
//! maps numerals back to choices with the same offset.

use crate::catalog::AppEntry;
use crate::core::types::AppName;
use crate::ui::{MenuLine, Screen};

/// Title of the root menu.
pub const ROOT_TITLE: &str = "Dagger";

/// What a numeral selects in a group menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Run the group's own entrypoint.
    RunCurrent,
    /// Open the sub-app at this index.
    Descend(usize),
}

/// The numbered options of one group render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceList {
    runnable: bool,
    sub_entries: Vec<AppName>,
}

impl ChoiceList {
    /// Build the choices for `entry`.
    pub fn for_entry(entry: &AppEntry) -> Self {
        Self {
            runnable: entry.has_entrypoint,
            sub_entries: entry.sub_entries.clone(),
        }
    }

    /// Numeral of the first sub-app.
    pub fn offset(&self) -> usize {
        if self.runnable {
            2
        } else {
            1
        }
    }

    /// Number of selectable numerals.
    pub fn option_count(&self) -> usize {
        self.sub_entries.len() + usize::from(self.runnable)
    }

    /// Sub-apps in display order.
    pub fn sub_entries(&self) -> &[AppName] {
        &self.sub_entries
    }

    /// Map a numeral to a choice.
    pub fn resolve(&self, numeral: usize) -> Option<Choice> {
        if self.runnable && numeral == 1 {
            return Some(Choice::RunCurrent);
        }
        let index = numeral.checked_sub(self.offset())?;
        (index < self.sub_entries.len()).then_some(Choice::Descend(index))
    }

    /// The numbered lines, in order.
    pub fn numbered_lines(&self) -> Vec<String> {
        let run = self.runnable.then(|| "1. Run this app".to_string());
        let offset = self.offset();
        run.into_iter()
            .chain(
                self.sub_entries
                    .iter()
                    .enumerate()
                    .map(|(i, name)| format!("{}. {}", i + offset, name)),
            )
            .collect()
    }
}

/// Build the root menu.
///
/// `alias_set` is `None` when no alias manager is available, which hides
/// the alias option.
pub fn root_screen(apps: &[AppName], alias_set: Option<bool>) -> Screen {
    let mut lines = Vec::new();
    if apps.is_empty() {
        lines.push(MenuLine::text("No apps available yet."));
    } else {
        lines.push(MenuLine::text("Available Apps:"));
        lines.extend(
            apps.iter()
                .enumerate()
                .map(|(i, app)| MenuLine::text(format!("{}. {}", i + 1, app))),
        );
    }

    lines.push(MenuLine::Separator);
    lines.push(MenuLine::text("Options:"));
    lines.push(MenuLine::text("n. Create new sample app"));
    match alias_set {
        Some(true) => lines.push(MenuLine::text("r. Remove shell alias")),
        Some(false) => lines.push(MenuLine::text("a. Add shell alias")),
        None => {}
    }
    lines.push(MenuLine::text("q. Quit"));

    Screen {
        title: ROOT_TITLE.to_string(),
        center_title: true,
        lines,
    }
}

/// Build a group menu.
///
/// `trail` is the path of names from the apps root to this group;
/// `back_target` names where `b` leads.
pub fn group_screen(trail: &[AppName], choices: &ChoiceList, back_target: &str) -> Screen {
    let title = trail
        .iter()
        .map(AppName::as_str)
        .collect::<Vec<_>>()
        .join(" / ");

    let mut numbered = choices.numbered_lines().into_iter();
    let mut lines = Vec::new();
    if choices.runnable {
        if let Some(run) = numbered.next() {
            lines.push(MenuLine::Text(run));
            lines.push(MenuLine::Separator);
        }
    }
    lines.extend(numbered.map(MenuLine::Text));
    lines.push(MenuLine::Separator);
    lines.push(MenuLine::text(format!("b. Back to {}", back_target)));
    lines.push(MenuLine::text("q. Quit"));

    Screen {
        title: format!("App: {}", title),
        center_title: true,
        lines,
    }
}
