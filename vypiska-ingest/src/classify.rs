//! Row classification for statement tables.

use crate::schema::StatementSchema;
use crate::types::{Cell, TransactionRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
    /// Fewer cells than the layout's minimum width.
    TooShort,
    /// Mapped, but every field was blank after normalization.
    Blank,
}

/// What a raw table row means to the account tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowClass {
    /// Repeated column labels.
    Header,
    /// Summary row that closes the active account.
    Terminator,
    Data(TransactionRecord),
    Discard(DiscardReason),
}

/// Classify `row` under `schema`.
///
/// Checks run in order: header labels, terminator keyword in the first
/// cell, minimum width, then the mapped record must carry some content.
pub fn classify_row(schema: StatementSchema, row: &[Cell]) -> RowClass {
    if schema.is_header_row(row) {
        return RowClass::Header;
    }
    if schema.is_terminator_row(row) {
        return RowClass::Terminator;
    }
    if row.len() < schema.min_row_width() {
        return RowClass::Discard(DiscardReason::TooShort);
    }
    let record = schema.map_row(row);
    if record.has_content() {
        RowClass::Data(record)
    } else {
        RowClass::Discard(DiscardReason::Blank)
    }
}
