//! Positional field extraction for `svn status -uv` lines.
//!
//! A verbose status line looks like this:
//!
//! ```text
//! AML+SKC *    58416    48101 goncharov    path/to/file.txt
//! 0123456789
//! ```
//!
//! Positions 0-6 hold single-character flags, position 8 the out-of-date
//! marker, and everything from position 10 on is a whitespace-separated
//! tail of working revision, committed revision, author and path.
//! Unversioned items (`?` and `I`) only carry the status flag and a path.
//!
//! All offsets count chars, not bytes.

use crate::error::SvnstatError;
use crate::symbols::{self, SymbolTable};
use crate::Result;

/// Index where the whitespace-separated tail of a verbose line starts.
const TAIL_OFFSET: usize = 10;

/// Index of the tree-conflict flag, also used to spot conflict descriptions.
const CONFLICT_OFFSET: usize = 6;

/// Marker at [`CONFLICT_OFFSET`] that introduces a tree-conflict description.
const CONFLICT_DESCRIPTION_MARKER: char = '>';

/// One logical field of a status line.
///
/// Each kind carries its extraction rule and symbol table as data; the
/// "item must be under version control" guard is shared by every gated kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Status,
    Properties,
    Locked,
    AddWithHistory,
    Switched,
    LockInfo,
    TreeConflict,
    OutOfDate,
    WorkingRevision,
    CommittedRevision,
    CommittedAuthor,
    Path,
}

/// How a field finds its raw value in the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    /// Single character at a fixed index.
    Flag(usize),
    /// N-th (zero-based) whitespace token of the tail.
    TailToken(usize),
    /// Remainder of the line after the author.
    Path,
}

impl FieldKind {
    /// All fields in the order `svn status -uv` prints them.
    pub const ALL: [FieldKind; 12] = [
        FieldKind::Status,
        FieldKind::Properties,
        FieldKind::Locked,
        FieldKind::AddWithHistory,
        FieldKind::Switched,
        FieldKind::LockInfo,
        FieldKind::TreeConflict,
        FieldKind::OutOfDate,
        FieldKind::WorkingRevision,
        FieldKind::CommittedRevision,
        FieldKind::CommittedAuthor,
        FieldKind::Path,
    ];

    /// Column name, used as the default table title and in error messages.
    pub fn name(self) -> &'static str {
        match self {
            FieldKind::Status => "Status",
            FieldKind::Properties => "Props",
            FieldKind::Locked => "isLocked",
            FieldKind::AddWithHistory => "AddWithHist",
            FieldKind::Switched => "SwitchedToParent",
            FieldKind::LockInfo => "LockInfo",
            FieldKind::TreeConflict => "Conflict",
            FieldKind::OutOfDate => "Out of date",
            FieldKind::WorkingRevision => "Working revision",
            FieldKind::CommittedRevision => "Committed revision",
            FieldKind::CommittedAuthor => "Committed author",
            FieldKind::Path => "Working copy path",
        }
    }

    /// Symbol table applied to the raw value, if any.
    pub fn symbols(self) -> Option<SymbolTable> {
        match self {
            FieldKind::Status => Some(symbols::STATUS),
            FieldKind::Properties => Some(symbols::PROPERTIES),
            FieldKind::Locked => Some(symbols::LOCKED),
            FieldKind::AddWithHistory => Some(symbols::ADD_WITH_HISTORY),
            FieldKind::Switched => Some(symbols::SWITCHED),
            FieldKind::LockInfo => Some(symbols::LOCK_INFO),
            FieldKind::TreeConflict => Some(symbols::TREE_CONFLICT),
            FieldKind::OutOfDate => Some(symbols::OUT_OF_DATE),
            FieldKind::WorkingRevision
            | FieldKind::CommittedRevision
            | FieldKind::CommittedAuthor
            | FieldKind::Path => None,
        }
    }

    fn rule(self) -> Rule {
        match self {
            FieldKind::Status => Rule::Flag(0),
            FieldKind::Properties => Rule::Flag(1),
            FieldKind::Locked => Rule::Flag(2),
            FieldKind::AddWithHistory => Rule::Flag(3),
            FieldKind::Switched => Rule::Flag(4),
            FieldKind::LockInfo => Rule::Flag(5),
            FieldKind::TreeConflict => Rule::Flag(CONFLICT_OFFSET),
            FieldKind::OutOfDate => Rule::Flag(8),
            FieldKind::WorkingRevision => Rule::TailToken(0),
            FieldKind::CommittedRevision => Rule::TailToken(1),
            FieldKind::CommittedAuthor => Rule::TailToken(2),
            FieldKind::Path => Rule::Path,
        }
    }

    /// Only the status flag and the path exist for unversioned items.
    fn is_gated(self) -> bool {
        !matches!(self, FieldKind::Status | FieldKind::Path)
    }

    /// Extract and translate this field's value from `line`.
    ///
    /// Gated fields return an empty string for unversioned items without
    /// looking at the rest of the line, however long it is.
    pub fn extract(self, line: &str) -> Result<String> {
        // Each gated field re-derives the controlled flag from the line on
        // its own; there is no per-row state shared between fields.
        if self.is_gated() && !is_controlled(line)? {
            return Ok(String::new());
        }

        let raw = match self.rule() {
            Rule::Flag(index) => self.flag_at(line, index)?,
            Rule::TailToken(index) => self.tail_token(line, index)?,
            Rule::Path => extract_path(line)?,
        };

        Ok(match self.symbols() {
            Some(table) => symbols::translate(table, raw),
            None => raw,
        })
    }

    fn flag_at(self, line: &str, index: usize) -> Result<String> {
        line.chars()
            .nth(index)
            .map(String::from)
            .ok_or_else(|| SvnstatError::malformed(self.name(), "line is too short"))
    }

    fn tail_token(self, line: &str, index: usize) -> Result<String> {
        tail(line)
            .split_whitespace()
            .nth(index)
            .map(str::to_string)
            .ok_or_else(|| {
                SvnstatError::malformed(
                    self.name(),
                    format!("expected at least {} fields after the flags", index + 1),
                )
            })
    }
}

/// Everything from [`TAIL_OFFSET`] on, or `""` for shorter lines.
fn tail(line: &str) -> &str {
    line.char_indices()
        .nth(TAIL_OFFSET)
        .map(|(i, _)| &line[i..])
        .unwrap_or("")
}

/// The path follows the status flag for unversioned items and the committed
/// author for versioned ones.
///
/// The author is located by substring search, so an author name that also
/// appears earlier in the line moves the cut point to that earlier spot.
fn extract_path(line: &str) -> Result<String> {
    if !is_controlled(line)? {
        let mut chars = line.chars();
        chars.next();
        return Ok(chars.as_str().trim().to_string());
    }

    let author = FieldKind::CommittedAuthor.extract(line)?;
    let start = line.find(&author).map(|i| i + author.len()).unwrap_or(0);
    let path = line[start..].trim();
    if path.is_empty() {
        return Err(SvnstatError::malformed(
            FieldKind::Path.name(),
            "no path after the committed author",
        ));
    }
    Ok(path.to_string())
}

/// Whether the item on this line is under version control.
///
/// Everything except `?` (not controlled) and `I` (ignored) counts as
/// controlled.
pub fn is_controlled(line: &str) -> Result<bool> {
    match line.chars().next() {
        Some(code) => Ok(code != '?' && code != 'I'),
        None => Err(SvnstatError::malformed(
            FieldKind::Status.name(),
            "line is empty",
        )),
    }
}

/// Whether the line continues a tree-conflict row with its description,
/// e.g. `"      >   local edit, incoming delete upon update"`.
///
/// Lines shorter than seven chars are rejected here, before any column is
/// parsed.
pub fn is_conflict_description(line: &str) -> Result<bool> {
    match line.chars().nth(CONFLICT_OFFSET) {
        Some(marker) => Ok(marker == CONFLICT_DESCRIPTION_MARKER),
        None => Err(SvnstatError::malformed(
            FieldKind::TreeConflict.name(),
            "line is too short",
        )),
    }
}

/// Strip one trailing line terminator (`\n` or `\r\n`).
pub fn strip_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
