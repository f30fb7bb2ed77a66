use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single extracted table cell. `None` when the extractor saw no text there.
pub type Cell = Option<String>;
pub type Row = Vec<Cell>;
pub type Table = Vec<Row>;

/// Account number as announced in the statement header.
///
/// Both supported banks print 20 digits, but nothing here relies on that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(String);

impl AccountNumber {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountNumber {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Normalized output of a layout's row mapping.
///
/// Field names are fixed per layout and kept in column order, so the
/// serialized object reads left to right like the statement table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionRecord {
    fields: Vec<(&'static str, String)>,
}

impl TransactionRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: &'static str, value: impl Into<String>) {
        self.fields.push((name, value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(name, value)| (*name, value.as_str()))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(name, _)| *name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the record has no fields at all (row was too short to map).
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// True when at least one field carries a non-empty value.
    pub fn has_content(&self) -> bool {
        self.fields.iter().any(|(_, value)| !value.is_empty())
    }
}

impl FromIterator<(&'static str, String)> for TransactionRecord {
    fn from_iter<I: IntoIterator<Item = (&'static str, String)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl Serialize for TransactionRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
