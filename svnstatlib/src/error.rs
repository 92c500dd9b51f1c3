//! Error types for svnstatlib

use thiserror::Error;

/// Errors that can occur while parsing status lines
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SvnstatError {
    /// A status line does not have the shape a column expects
    #[error("can not parse column '{column}': {cause}")]
    MalformedInput { column: String, cause: String },
}

impl SvnstatError {
    /// Build a [`SvnstatError::MalformedInput`] for the given column.
    pub fn malformed(column: impl Into<String>, cause: impl Into<String>) -> Self {
        SvnstatError::MalformedInput {
            column: column.into(),
            cause: cause.into(),
        }
    }

    /// Name of the column that failed to parse.
    pub fn column(&self) -> &str {
        match self {
            SvnstatError::MalformedInput { column, .. } => column,
        }
    }
}

/// A status line that could not be turned into a row.
///
/// Carries the 1-based line number and the raw line so callers can report
/// exactly what stopped the run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {number}: {source}")]
pub struct RowError {
    /// 1-based position of the line in the input
    pub number: usize,
    /// The raw line as read
    pub line: String,
    /// Why the line was rejected
    #[source]
    pub source: SvnstatError,
}

impl RowError {
    pub fn new(number: usize, line: impl Into<String>, source: SvnstatError) -> Self {
        RowError {
            number,
            line: line.into(),
            source,
        }
    }
}
