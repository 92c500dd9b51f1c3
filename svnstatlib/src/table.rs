//! The status table: columns plus separators, rendered line by line.
//!
//! ```rust
//! use svnstatlib::Table;
//!
//! let table = Table::svn_status();
//! let row = table
//!     .build_row("?                                        svn.txt")
//!     .unwrap();
//! // "Not controlled" is wrapped inside the 6-wide "Status" column
//! assert_eq!(row.lines().count(), 3);
//! assert!(row.contains("svn.txt"));
//! ```

use tracing::{debug, trace};

use crate::column::Column;
use crate::field::{is_conflict_description, strip_line_terminator, FieldKind};
use crate::layout::{join_row, wrap_row, Separators};
use crate::Result;

/// An ordered set of columns and the separators drawn between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: Vec<Column>,
    separators: Separators,
}

impl Table {
    pub fn new(columns: Vec<Column>, separators: Separators) -> Self {
        Table {
            columns,
            separators,
        }
    }

    /// The twelve `svn status -uv` columns with `| ` / ` |` borders.
    pub fn svn_status() -> Self {
        let columns = FieldKind::ALL.into_iter().map(Column::for_field).collect();
        Table::new(columns, Separators::decorated())
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Mutable access to the columns, e.g. to resize one before rendering.
    pub fn columns_mut(&mut self) -> &mut [Column] {
        &mut self.columns
    }

    /// Resize the column at `index`. Returns `false` if there is no such
    /// column, in which case nothing changes.
    pub fn set_column_width(&mut self, index: usize, width: usize) -> bool {
        match self.columns.get_mut(index) {
            Some(column) => {
                debug!(index, width, title = %column.title, "overriding column width");
                column.width = width;
                true
            }
            None => false,
        }
    }

    /// Apply `(index, width)` overrides in order and return the indices that
    /// did not match a column.
    pub fn apply_width_overrides(&mut self, overrides: &[(usize, usize)]) -> Vec<usize> {
        overrides
            .iter()
            .filter(|(index, width)| !self.set_column_width(*index, *width))
            .map(|(index, _)| *index)
            .collect()
    }

    /// Total line width: every column plus every separator.
    pub fn width(&self) -> usize {
        let cells: usize = self.columns.iter().map(|c| c.width).sum();
        cells + self.separators.overhead(self.columns.len())
    }

    /// Column titles, wrapped to the column widths.
    pub fn build_header(&self) -> String {
        let titles: Vec<&str> = self.columns.iter().map(|c| c.title.as_str()).collect();
        join_row(&wrap_row(&self.columns, &titles), &self.separators)
    }

    /// Extract every column's value from `line`, in column order.
    pub fn extract_values(&self, line: &str) -> Result<Vec<String>> {
        self.columns.iter().map(|c| c.build_value(line)).collect()
    }

    /// Render one status line.
    ///
    /// Tree-conflict descriptions come back as the raw line without its
    /// terminator; everything else is parsed and wrapped into cells.
    pub fn build_row(&self, line: &str) -> Result<String> {
        if is_conflict_description(line)? {
            trace!(line, "passing conflict description through");
            return Ok(strip_line_terminator(line).to_string());
        }
        let values = self.extract_values(line)?;
        Ok(join_row(&wrap_row(&self.columns, &values), &self.separators))
    }

    /// Rule drawn under the header.
    pub fn build_header_separator(&self) -> String {
        self.separators.header.to_string().repeat(self.width())
    }

    /// Rule drawn after every row.
    pub fn build_row_separator(&self) -> String {
        self.separators.row.to_string().repeat(self.width())
    }
}

impl Default for Table {
    fn default() -> Self {
        Table::svn_status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::Alignment;

    const FULL: &str = r"AML+SKC *    58416    48101 goncharov    _cntl\win32\altpubserv.vcproj";

    fn two_revisions(width: usize, alignment: Alignment, separators: Separators) -> Table {
        Table::new(
            vec![
                Column::new(FieldKind::WorkingRevision, "col1", width, alignment),
                Column::new(FieldKind::CommittedRevision, "col2", width, alignment),
            ],
            separators,
        )
    }

    fn bare() -> Separators {
        Separators::default().left("").right("").column("|")
    }

    fn bars() -> Separators {
        Separators::default().left("|").right("|").column("|")
    }

    #[test]
    fn test_header_single_line() {
        let table = two_revisions(4, Alignment::Left, bare());
        assert_eq!(table.build_header(), "col1|col2");
    }

    #[test]
    fn test_header_padded() {
        let table = two_revisions(6, Alignment::Left, bare());
        assert_eq!(table.build_header(), "col1  |col2  ");
    }

    #[test]
    fn test_header_title_width() {
        let table = two_revisions(0, Alignment::Center, bars());
        assert_eq!(table.build_header(), "|col1|col2|");
    }

    #[test]
    fn test_header_wraps_narrow_column() {
        let table = Table::new(
            vec![
                Column::new(FieldKind::Status, "col1", 4, Alignment::Left),
                Column::new(FieldKind::Properties, "col2", 2, Alignment::Left),
            ],
            bars(),
        );
        assert_eq!(table.build_header(), "|col1|co|\n|    |l2|");
    }

    #[test]
    fn test_row_wraps_left() {
        let table = two_revisions(4, Alignment::Left, bars());
        assert_eq!(table.build_row(FULL).unwrap(), "|5841|4810|\n|6   |1   |");
    }

    #[test]
    fn test_row_wraps_right() {
        let table = two_revisions(4, Alignment::Right, bare());
        assert_eq!(table.build_row(FULL).unwrap(), "5841|4810\n   6|   1");
    }

    #[test]
    fn test_row_center_odd_padding() {
        let table = two_revisions(6, Alignment::Center, bare());
        assert_eq!(table.build_row(FULL).unwrap(), "58416 |48101 ");
    }

    #[test]
    fn test_row_center_even_padding() {
        let table = two_revisions(7, Alignment::Center, bare());
        assert_eq!(table.build_row(FULL).unwrap(), " 58416 | 48101 ");
    }

    #[test]
    fn test_separators_use_table_width() {
        let table = two_revisions(7, Alignment::Center, bare().column(""));
        assert_eq!(table.build_header_separator(), "=".repeat(14));
        assert_eq!(table.build_row_separator(), "-".repeat(14));

        let table = two_revisions(7, Alignment::Center, bare().column("").row('='));
        assert_eq!(table.build_row_separator(), "=".repeat(14));
    }

    #[test]
    fn test_default_table_width() {
        let table = Table::svn_status();
        let titles: usize = FieldKind::ALL[..11].iter().map(|f| f.name().len()).sum();
        assert_eq!(table.columns().len(), 12);
        assert_eq!(table.width(), titles + 50 + 2 + 2 + 11 * 3);
    }

    #[test]
    fn test_full_row_values() {
        let table = Table::svn_status();
        let values = table
            .extract_values("AML+SKC *    58416    48101 goncharov    path.txt")
            .unwrap();
        assert_eq!(
            values,
            vec![
                "Added",
                "Modified",
                "Locked",
                "+",
                "Switched",
                "Token",
                "Conflict",
                "Out of date",
                "58416",
                "48101",
                "goncharov",
                "path.txt",
            ]
        );
    }

    #[test]
    fn test_unversioned_row_values() {
        let table = Table::svn_status();
        let values = table
            .extract_values("?                                        svn.txt")
            .unwrap();
        assert_eq!(values[0], "Not controlled");
        assert!(values[1..11].iter().all(String::is_empty));
        assert_eq!(values[11], "svn.txt");
    }

    #[test]
    fn test_full_row_wraps_to_two_lines() {
        let table = Table::svn_status();
        let row = table
            .build_row("AML+SKC *    58416    48101 goncharov    path.txt")
            .unwrap();
        let lines: Vec<&str> = row.lines().collect();
        // "Modified" does not fit the 5-wide "Props" column
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.chars().count() == table.width()));
        assert!(lines[0].starts_with("| Added  | Modif | "));
        assert!(lines[1].starts_with("|        |  ied  | "));
    }

    #[test]
    fn test_unversioned_path_wraps() {
        let mut table = Table::svn_status();
        table.set_column_width(11, 4);
        let row = table
            .build_row("?                                        abcdefghij")
            .unwrap();
        let lines: Vec<&str> = row.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with(" | abcd |"));
        assert!(lines[1].ends_with(" | efgh |"));
        assert!(lines[2].ends_with(" | ij   |"));
        assert!(lines.iter().all(|l| l.chars().count() == table.width()));
    }

    #[test]
    fn test_conflict_description_passes_through() {
        let table = Table::svn_status();
        let line = "      >   local edit, incoming delete upon update\n";
        assert_eq!(
            table.build_row(line).unwrap(),
            "      >   local edit, incoming delete upon update"
        );
    }

    #[test]
    fn test_short_line_fails_in_classifier() {
        let table = Table::svn_status();
        let err = table.build_row("AML+SK").unwrap_err();
        assert_eq!(err.column(), "Conflict");
        assert!(table.build_row("AML+SKC ").is_err());
        assert!(table.build_row("").is_err());
    }

    #[test]
    fn test_missing_author_fails() {
        let table = Table::svn_status();
        let line = r"AML+SKC *    58416    48101    _cntl\win32\altpubserv.vcproj";
        assert!(table.build_row(line).is_err());
    }

    #[test]
    fn test_missing_path_fails() {
        let table = Table::svn_status();
        let err = table
            .build_row("AML+SKC *    58416    48101 goncharov    ")
            .unwrap_err();
        assert_eq!(err.column(), "Working copy path");
    }

    #[test]
    fn test_width_override_applies_on_next_render() {
        let mut table = Table::svn_status();
        let before = table.width();
        let header_before = table.build_header();
        assert!(header_before.starts_with("| Status | "));

        assert!(table.set_column_width(0, 10));

        assert_eq!(table.width(), before + 4);
        assert!(table.build_header().starts_with("|   Status   | "));
        assert_eq!(table.build_row_separator().len(), before + 4);
    }

    #[test]
    fn test_columns_mut_changes_width() {
        let mut table = Table::svn_status();
        table.columns_mut()[1].width = 1;
        let header = table.build_header();
        assert!(header.lines().count() > 1);
    }

    #[test]
    fn test_apply_width_overrides_reports_ignored() {
        let mut table = Table::svn_status();
        let ignored = table.apply_width_overrides(&[(0, 10), (12, 5), (11, 20), (99, 1)]);
        assert_eq!(ignored, vec![12, 99]);
        assert_eq!(table.columns()[0].width, 10);
        assert_eq!(table.columns()[11].width, 20);
    }
}
