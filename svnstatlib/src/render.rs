//! Streaming table rendering.
//!
//! [`TableStream`] turns a sequence of status lines into the blocks of a
//! finished table: the header, the header rule, then each row followed by a
//! row rule. Lines are pulled one at a time, so earlier rows can be written
//! out before later input is even read.
//!
//! The first malformed line ends the stream: it is yielded as an `Err` and
//! no further blocks follow.

use std::iter::FusedIterator;

use tracing::debug;

use crate::error::RowError;
use crate::table::Table;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Header,
    HeaderRule,
    Body { rule_due: bool },
    Done,
}

/// Iterator over the rendered blocks of a table.
#[derive(Debug)]
pub struct TableStream<'t, I> {
    table: &'t Table,
    lines: I,
    stage: Stage,
    line_number: usize,
}

impl<'t, I, S> TableStream<'t, I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    pub fn new(table: &'t Table, lines: impl IntoIterator<IntoIter = I>) -> Self {
        TableStream {
            table,
            lines: lines.into_iter(),
            stage: Stage::Header,
            line_number: 0,
        }
    }

    /// Number of input lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.line_number
    }
}

impl<I, S> Iterator for TableStream<'_, I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Result<String, RowError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.stage {
            Stage::Header => {
                self.stage = Stage::HeaderRule;
                Some(Ok(self.table.build_header()))
            }
            Stage::HeaderRule => {
                self.stage = Stage::Body { rule_due: false };
                Some(Ok(self.table.build_header_separator()))
            }
            Stage::Body { rule_due: true } => {
                self.stage = Stage::Body { rule_due: false };
                Some(Ok(self.table.build_row_separator()))
            }
            Stage::Body { rule_due: false } => {
                let Some(line) = self.lines.next() else {
                    self.stage = Stage::Done;
                    return None;
                };
                self.line_number += 1;
                let line = line.as_ref();
                match self.table.build_row(line) {
                    Ok(row) => {
                        self.stage = Stage::Body { rule_due: true };
                        Some(Ok(row))
                    }
                    Err(source) => {
                        debug!(line_number = self.line_number, %source, "stopping at malformed line");
                        self.stage = Stage::Done;
                        Some(Err(RowError::new(self.line_number, line, source)))
                    }
                }
            }
            Stage::Done => None,
        }
    }
}

impl<I, S> FusedIterator for TableStream<'_, I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
}

/// Render a whole table into memory, failing on the first malformed line.
pub fn render_table<I, S>(table: &Table, lines: I) -> Result<Vec<String>, RowError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    TableStream::new(table, lines).collect()
}
