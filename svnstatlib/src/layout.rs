//! Cell layout: truncation, padding, wrapping and joining.
//!
//! A row is laid out in three steps:
//!
//! 1. [`wrap_row`] peels `width` chars at a time off every value, producing
//!    one line of cells per pass until all values are used up.
//! 2. [`fit_to_width`] pads each peeled chunk to its column width.
//! 3. [`join_row`] glues cells together with the table separators.
//!
//! Widths are always read from the columns passed in, never cached.

use crate::column::{Alignment, Column};

/// Decoration around and between cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separators {
    /// Printed before the first cell of every line
    pub left: String,
    /// Printed after the last cell of every line
    pub right: String,
    /// Printed between two cells
    pub column: String,
    /// Repeated to draw the rule under the header
    pub header: char,
    /// Repeated to draw the rule between rows
    pub row: char,
}

impl Default for Separators {
    fn default() -> Self {
        Self {
            left: " ".to_string(),
            right: " ".to_string(),
            column: " | ".to_string(),
            header: '=',
            row: '-',
        }
    }
}

impl Separators {
    /// Default separators with `| ` and ` |` borders.
    pub fn decorated() -> Self {
        Self::default().left("| ").right(" |")
    }

    /// Set the left border.
    pub fn left(mut self, left: impl Into<String>) -> Self {
        self.left = left.into();
        self
    }

    /// Set the right border.
    pub fn right(mut self, right: impl Into<String>) -> Self {
        self.right = right.into();
        self
    }

    /// Set the string between two cells.
    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.column = column.into();
        self
    }

    /// Set the header rule character.
    pub fn header(mut self, header: char) -> Self {
        self.header = header;
        self
    }

    /// Set the row rule character.
    pub fn row(mut self, row: char) -> Self {
        self.row = row;
        self
    }

    /// Width taken by separators in a line of `columns` cells.
    pub fn overhead(&self, columns: usize) -> usize {
        let between = columns.saturating_sub(1) * self.column.chars().count();
        self.left.chars().count() + self.right.chars().count() + between
    }
}

/// Truncate `value` to `width` chars and pad it to exactly `width`.
///
/// Centered values put the odd padding char on the right, so `"ab"` in a
/// cell of 5 becomes `" ab  "`.
pub fn fit_to_width(value: &str, width: usize, alignment: Alignment) -> String {
    match alignment {
        Alignment::Left => format!("{:<width$.width$}", value, width = width),
        Alignment::Center => format!("{:^width$.width$}", value, width = width),
        Alignment::Right => format!("{:>width$.width$}", value, width = width),
    }
}

/// Split `value` after `width` chars.
fn split_chars(value: &str, width: usize) -> (&str, &str) {
    match value.char_indices().nth(width) {
        Some((i, _)) => value.split_at(i),
        None => (value, ""),
    }
}

/// Wrap one value per column into lines of fitted cells.
///
/// Returns `max(ceil(len / width))` lines, and at least one line so that a
/// row of empty values still shows up. A zero-width column cannot hold any
/// text, so its value is dropped.
pub fn wrap_row<S: AsRef<str>>(columns: &[Column], values: &[S]) -> Vec<Vec<String>> {
    let mut remaining: Vec<&str> = columns
        .iter()
        .zip(values)
        .map(|(col, value)| if col.width == 0 { "" } else { value.as_ref() })
        .collect();

    let mut lines = Vec::new();
    loop {
        let line = columns
            .iter()
            .zip(remaining.iter_mut())
            .map(|(col, rest)| {
                let (chunk, tail) = split_chars(rest, col.width);
                *rest = tail;
                fit_to_width(chunk, col.width, col.alignment)
            })
            .collect();
        lines.push(line);

        if remaining.iter().all(|rest| rest.is_empty()) {
            break;
        }
    }
    lines
}

/// Join wrapped lines into a single `\n`-separated block.
pub fn join_row(lines: &[Vec<String>], separators: &Separators) -> String {
    lines
        .iter()
        .map(|cells| {
            format!(
                "{}{}{}",
                separators.left,
                cells.join(separators.column.as_str()),
                separators.right
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
