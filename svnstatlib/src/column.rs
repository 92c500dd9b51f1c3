//! Column specifications: which field a column shows, and how.

use crate::field::FieldKind;
use crate::Result;

/// Horizontal alignment of a value inside its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

/// One table column.
///
/// Columns are plain mutable containers: changing `width` after the table
/// is built takes effect on the next render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Field extracted from each status line
    pub field: FieldKind,
    /// Header text
    pub title: String,
    /// Cell width in chars
    pub width: usize,
    /// Alignment of values inside the cell
    pub alignment: Alignment,
}

impl Column {
    /// Create a column. A `width` of 0 means "as wide as the title".
    pub fn new(
        field: FieldKind,
        title: impl Into<String>,
        width: usize,
        alignment: Alignment,
    ) -> Self {
        let title = title.into();
        let width = if width == 0 {
            title.chars().count()
        } else {
            width
        };
        Column {
            field,
            title,
            width,
            alignment,
        }
    }

    /// The stock column for `field` as printed by the default table.
    ///
    /// The path column is 50 chars wide and left-aligned; every other
    /// column is as wide as its title and centered.
    pub fn for_field(field: FieldKind) -> Self {
        match field {
            FieldKind::Path => Column::new(field, field.name(), 50, Alignment::Left),
            _ => Column::new(field, field.name(), 0, Alignment::Center),
        }
    }

    /// Replace the title, keeping the current width.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Replace the width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Replace the alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Extract this column's translated value from a status line.
    pub fn build_value(&self, line: &str) -> Result<String> {
        self.field.extract(line)
    }
}
