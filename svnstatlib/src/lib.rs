//! # svnstatlib
//!
//! Turn `svn status -uv` output into an aligned, word-wrapped text table.
//!
//! ## Overview
//!
//! Every status line is made of fixed-position flag characters followed by
//! a whitespace-separated tail of revisions, author and path:
//!
//! ```text
//! AML+SKC *    58416    48101 goncharov    path.txt
//! ```
//!
//! The library splits such lines into twelve named fields, translates the
//! one-letter flags into labels ("Added", "Locked", "Out of date", ...) and
//! lays the values out in fixed-width cells, wrapping anything too long onto
//! extra lines.
//!
//! - **Fields** ([`FieldKind`]): where each value lives in the line and how it
//!   is translated. Most fields only exist for versioned items.
//! - **Columns and tables** ([`Column`], [`Table`]): titles, widths,
//!   alignment, separators. Widths can be changed at any time before
//!   rendering.
//! - **Streaming** ([`TableStream`]): render lines lazily, stopping at the
//!   first malformed one.
//! - **Records** ([`Row`], [`StatusRecord`]): the parsed fields as data, for
//!   JSON output.
//!
//! No I/O happens here; callers feed lines in and write strings out.
//!
//! ## Example
//!
//! ```rust
//! use svnstatlib::{render_table, Table};
//!
//! let mut table = Table::svn_status();
//! table.set_column_width(11, 20);
//!
//! let lines = ["M            12       10 alice   src/lib.rs"];
//! let blocks = render_table(&table, lines).unwrap();
//!
//! // header, header rule, row, row rule
//! assert_eq!(blocks.len(), 4);
//! assert!(blocks[2].contains("alice"));
//! assert!(blocks[2].contains("src/lib.rs"));
//! ```

pub mod column;
pub mod error;
pub mod field;
pub mod layout;
pub mod record;
pub mod render;
pub mod symbols;
pub mod table;

pub use column::{Alignment, Column};
pub use error::{RowError, SvnstatError};
pub use field::{is_conflict_description, is_controlled, FieldKind};
pub use layout::{fit_to_width, join_row, wrap_row, Separators};
pub use record::{parse_rows, Row, StatusRecord};
pub use render::{render_table, TableStream};
pub use table::Table;

/// Result type for svnstatlib operations
pub type Result<T> = std::result::Result<T, SvnstatError>;
