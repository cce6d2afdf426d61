//! ui::boxdraw
//!
//! Layout of bordered menu boxes.
//!
//! Layout is separated from styling: [`layout`] produces rows, and the
//! terminal presenter decides how to color borders and titles. [`plain`]
//! joins rows into bare text for non-terminal output and tests.
//!
//! ```text
//! ┌───────────────┐
//! │    Dagger     │
//! ├───────────────┤
//! │  1. Foo       │
//! └───────────────┘
//! ```

use super::{MenuLine, Screen};

const HORIZONTAL: char = '─';
const VERTICAL: char = '│';
const TOP_LEFT: char = '┌';
const TOP_RIGHT: char = '┐';
const BOTTOM_LEFT: char = '└';
const BOTTOM_RIGHT: char = '┘';
const LEFT_T: char = '├';
const RIGHT_T: char = '┤';

/// Spaces between the border and the text.
pub const PADDING: usize = 2;

/// One laid-out row of a box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoxRow {
    /// A full border line, corners included.
    Border(String),
    /// Padded text that goes between two vertical bars.
    Content { text: String, title: bool },
}

/// Lay out `screen` as a bordered box.
///
/// The title is the first content row, followed by a separator; it is
/// centered when the screen asks for it.
pub fn layout(screen: &Screen) -> Vec<BoxRow> {
    let widest = std::iter::once(screen.title.as_str())
        .chain(screen.lines.iter().filter_map(|line| match line {
            MenuLine::Text(text) => Some(text.as_str()),
            MenuLine::Separator => None,
        }))
        .map(display_width)
        .max()
        .unwrap_or(0);
    let inner = widest + 2 * PADDING;

    let rule = |left: char, right: char| {
        let mut line = String::with_capacity(inner + 2);
        line.push(left);
        line.extend(std::iter::repeat(HORIZONTAL).take(inner));
        line.push(right);
        BoxRow::Border(line)
    };

    let mut rows = Vec::with_capacity(screen.lines.len() + 4);
    rows.push(rule(TOP_LEFT, TOP_RIGHT));
    rows.push(BoxRow::Content {
        text: if screen.center_title {
            center(&screen.title, inner)
        } else {
            left_align(&screen.title, inner)
        },
        title: true,
    });
    rows.push(rule(LEFT_T, RIGHT_T));

    for line in &screen.lines {
        match line {
            MenuLine::Separator => rows.push(rule(LEFT_T, RIGHT_T)),
            MenuLine::Text(text) => rows.push(BoxRow::Content {
                text: left_align(text, inner),
                title: false,
            }),
        }
    }

    rows.push(rule(BOTTOM_LEFT, BOTTOM_RIGHT));
    rows
}

/// Join rows into plain text lines.
pub fn plain(rows: &[BoxRow]) -> Vec<String> {
    rows.iter()
        .map(|row| match row {
            BoxRow::Border(line) => line.clone(),
            BoxRow::Content { text, .. } => format!("{VERTICAL}{text}{VERTICAL}"),
        })
        .collect()
}

/// Width in terminal columns, counting one per char.
fn display_width(text: &str) -> usize {
    text.chars().count()
}

fn left_align(text: &str, width: usize) -> String {
    let pad = " ".repeat(PADDING);
    let fill = width.saturating_sub(display_width(text) + PADDING);
    format!("{pad}{text}{}", " ".repeat(fill))
}

fn center(text: &str, width: usize) -> String {
    let extra = width.saturating_sub(display_width(text));
    let left = extra / 2;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(extra - left))
}
