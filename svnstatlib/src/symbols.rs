//! Symbol tables translating single-character status codes into labels.
//!
//! Each table is an immutable slice of `(code, label)` pairs. A code that is
//! not listed passes through unchanged, so unknown flags from newer `svn`
//! releases still show up in the table as their raw character.

/// Lookup table for one status column.
pub type SymbolTable = &'static [(char, &'static str)];

/// First column: item added, deleted, or otherwise changed.
pub const STATUS: SymbolTable = &[
    (' ', " "),
    ('M', "Modified"),
    ('D', "Deleted"),
    ('A', "Added"),
    // scheduled for deletion, then re-added under the same name
    ('R', "Replaced"),
    ('C', "Conflicts"),
    ('X', "External"),
    ('I', "Ignored"),
    ('?', "Not controlled"),
    // moved or deleted without svn, or an interrupted checkout
    ('!', "Missed"),
    // versioned as one kind of node, replaced by another kind
    ('~', "Kind replaced"),
];

/// Second column: properties of the file or directory.
pub const PROPERTIES: SymbolTable = &[(' ', " "), ('M', "Modified"), ('C', "Conflict")];

/// Third column: working copy directory lock.
pub const LOCKED: SymbolTable = &[(' ', " "), ('L', "Locked")];

/// Fourth column: scheduled addition with history.
pub const ADD_WITH_HISTORY: SymbolTable = &[(' ', " "), ('+', "+")];

/// Fifth column: item switched relative to its parent.
pub const SWITCHED: SymbolTable = &[(' ', " "), ('S', "Switched")];

/// Sixth column: repository lock information.
pub const LOCK_INFO: SymbolTable = &[
    (' ', " "),
    ('K', "Token"),
    // locked by another user or in another working copy
    ('O', "Other"),
    ('T', "Stolen"),
    ('B', "Broken"),
];

/// Seventh column: item is the victim of a tree conflict.
pub const TREE_CONFLICT: SymbolTable = &[(' ', " "), ('C', "Conflict")];

/// Ninth column: a newer revision exists on the server.
pub const OUT_OF_DATE: SymbolTable = &[(' ', " "), ('*', "Out of date")];

/// Translate a raw value through `table`.
///
/// Only single-character values are looked up; everything else, and any
/// character missing from the table, is returned as-is.
pub fn translate(table: SymbolTable, raw: String) -> String {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(code), None) => table
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, label)| (*label).to_string())
            .unwrap_or(raw),
        _ => raw,
    }
}
