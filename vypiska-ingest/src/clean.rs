//! Storage-ready cleanup of extracted records.
//!
//! Extraction keeps cell text as printed. Before records are persisted the
//! amounts are made machine-readable, column-label leftovers are nulled and
//! the list is cut at the bank's closing summary.

use regex::Regex;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::sync::LazyLock;

use crate::schema::StatementSchema;
use crate::types::TransactionRecord;

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

const AMOUNT_FIELDS: &[&str] = &["debit", "credit"];
const COLUMN_LABELS: &[&str] = &["Кредит", "Дебет"];

/// A cleaned record: same fields as the source record, blanks as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanRecord {
    fields: Vec<(&'static str, Option<String>)>,
}

impl CleanRecord {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .and_then(|(_, value)| value.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> {
        self.fields.iter().map(|(name, value)| (*name, value.as_deref()))
    }

    /// True when every field is `None`.
    pub fn is_blank(&self) -> bool {
        self.fields.iter().all(|(_, value)| value.is_none())
    }
}

impl Serialize for CleanRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Strip grouping spaces (including U+00A0) and use `.` as the decimal mark.
fn clean_amount(value: &str) -> String {
    value
        .chars()
        .filter(|c| *c != ' ' && *c != '\u{a0}')
        .map(|c| if c == ',' { '.' } else { c })
        .collect()
}

pub fn clean_record(record: &TransactionRecord, schema: StatementSchema) -> CleanRecord {
    let empty_amount = schema.layout().empty_amount();

    let fields = record
        .iter()
        .map(|(name, raw)| {
            let mut value = WHITESPACE_RE.replace_all(raw.trim(), " ").into_owned();

            if AMOUNT_FIELDS.contains(&name) {
                value = clean_amount(&value);
                if value.is_empty() {
                    if let Some(fill) = empty_amount {
                        value = fill.to_string();
                    }
                }
            }

            if value.is_empty() || COLUMN_LABELS.iter().any(|label| *label == value) {
                (name, None)
            } else {
                (name, Some(value))
            }
        })
        .collect();

    CleanRecord { fields }
}

/// Label values that only appear on header rows that slipped through
/// extraction.
fn looks_like_header(record: &TransactionRecord) -> bool {
    record.get("account") == Some("Счет")
        || record.get("bik") == Some("БИК банка")
        || record.get("credit") == Some("Кредит")
        || record.get("debit") == Some("Дебет")
}

fn has_amount(record: &CleanRecord, placeholder: &str) -> bool {
    AMOUNT_FIELDS
        .iter()
        .any(|field| record.get(field).is_some_and(|v| v != placeholder))
}

/// Clean one account's records for storage.
///
/// Header-like records are skipped, processing stops at the first record
/// carrying the layout's closing phrase, and records left with no values
/// are dropped. Layouts that fill empty amounts also drop records where
/// neither side moved money.
pub fn clean_transactions(records: &[TransactionRecord], schema: StatementSchema) -> Vec<CleanRecord> {
    let closing = schema.layout().closing_phrase();
    let empty_amount = schema.layout().empty_amount();
    let mut out = Vec::new();

    for record in records {
        if looks_like_header(record) {
            continue;
        }
        if record.iter().any(|(_, value)| value.contains(closing)) {
            break;
        }

        let cleaned = clean_record(record, schema);
        if let Some(placeholder) = empty_amount {
            if !has_amount(&cleaned, placeholder) {
                continue;
            }
        }
        if !cleaned.is_blank() {
            out.push(cleaned);
        }
    }

    out
}
