//! Statement type detection from first-page text.

use crate::schema::{StatementSchema, StatementType};

/// Pick the layout whose account heading appears in `first_page_text`.
///
/// Layouts are tried in `StatementSchema::ALL` order and the first match
/// wins. Empty text, or text no layout recognizes, is `Unknown`.
pub fn detect_statement_type(first_page_text: &str) -> StatementType {
    if first_page_text.is_empty() {
        return StatementType::Unknown;
    }
    StatementSchema::ALL
        .into_iter()
        .find(|schema| schema.matches(first_page_text))
        .map(StatementType::Known)
        .unwrap_or(StatementType::Unknown)
}
