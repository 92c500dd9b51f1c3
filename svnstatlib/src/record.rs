//! Structured, serializable view of parsed status lines.
//!
//! The table renderer only needs display strings. `Row` keeps every field
//! under its own name instead, for callers that want JSON or further
//! processing.

use serde::{Deserialize, Serialize};

use crate::error::RowError;
use crate::field::{is_conflict_description, strip_line_terminator, FieldKind};
use crate::Result;

/// The twelve translated fields of one status line.
///
/// Fields that do not apply to the item (all but `status` and `path` for
/// unversioned items) are empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
    pub status: String,
    pub properties: String,
    pub locked: String,
    pub add_with_history: String,
    pub switched: String,
    pub lock_info: String,
    pub tree_conflict: String,
    pub out_of_date: String,
    pub working_revision: String,
    pub committed_revision: String,
    pub committed_author: String,
    pub path: String,
}

impl StatusRecord {
    /// Extract every field from `line`, failing on the first malformed one.
    pub fn parse(line: &str) -> Result<Self> {
        Ok(StatusRecord {
            status: FieldKind::Status.extract(line)?,
            properties: FieldKind::Properties.extract(line)?,
            locked: FieldKind::Locked.extract(line)?,
            add_with_history: FieldKind::AddWithHistory.extract(line)?,
            switched: FieldKind::Switched.extract(line)?,
            lock_info: FieldKind::LockInfo.extract(line)?,
            tree_conflict: FieldKind::TreeConflict.extract(line)?,
            out_of_date: FieldKind::OutOfDate.extract(line)?,
            working_revision: FieldKind::WorkingRevision.extract(line)?,
            committed_revision: FieldKind::CommittedRevision.extract(line)?,
            committed_author: FieldKind::CommittedAuthor.extract(line)?,
            path: FieldKind::Path.extract(line)?,
        })
    }

    /// Value of a single field.
    pub fn get(&self, field: FieldKind) -> &str {
        match field {
            FieldKind::Status => &self.status,
            FieldKind::Properties => &self.properties,
            FieldKind::Locked => &self.locked,
            FieldKind::AddWithHistory => &self.add_with_history,
            FieldKind::Switched => &self.switched,
            FieldKind::LockInfo => &self.lock_info,
            FieldKind::TreeConflict => &self.tree_conflict,
            FieldKind::OutOfDate => &self.out_of_date,
            FieldKind::WorkingRevision => &self.working_revision,
            FieldKind::CommittedRevision => &self.committed_revision,
            FieldKind::CommittedAuthor => &self.committed_author,
            FieldKind::Path => &self.path,
        }
    }
}

/// One input line after classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Row {
    /// A regular status line
    Record(StatusRecord),
    /// Tree-conflict description following a conflicted item, kept verbatim
    ConflictDescription(String),
}

impl Row {
    /// Classify and parse one line.
    pub fn parse(line: &str) -> Result<Self> {
        if is_conflict_description(line)? {
            return Ok(Row::ConflictDescription(
                strip_line_terminator(line).to_string(),
            ));
        }
        StatusRecord::parse(line).map(Row::Record)
    }
}

/// Lazily parse `lines` into rows, stopping after the first failure.
///
/// Rows before the bad line are yielded as usual; the failing line is
/// yielded as an `Err` and nothing follows it.
pub fn parse_rows<I, S>(lines: I) -> impl Iterator<Item = std::result::Result<Row, RowError>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut failed = false;
    lines
        .into_iter()
        .enumerate()
        .map_while(move |(index, line)| {
            if failed {
                return None;
            }
            let line = line.as_ref();
            let parsed = Row::parse(line).map_err(|source| RowError::new(index + 1, line, source));
            failed = parsed.is_err();
            Some(parsed)
        })
}
