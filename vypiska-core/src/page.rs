//! Page interface consumed by the tracker.
//!
//! Whatever reads the source document (PDF text extraction, a JSON dump from
//! an external table extractor, test fixtures) hands pages over through
//! `StatementPage`.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use vypiska_ingest::Table;

pub trait StatementPage {
    /// Plain page text. `Ok(None)` when the page has no text layer.
    fn extract_text(&self) -> Result<Option<String>>;

    /// Tables found on the page, top to bottom.
    fn extract_tables(&self) -> Result<Vec<Table>>;
}

/// An already-extracted page held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl Page {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            tables: Vec::new(),
        }
    }

    pub fn blank() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, table: Table) -> Self {
        self.tables.push(table);
        self
    }
}

impl StatementPage for Page {
    fn extract_text(&self) -> Result<Option<String>> {
        Ok(self.text.clone())
    }

    fn extract_tables(&self) -> Result<Vec<Table>> {
        Ok(self.tables.clone())
    }
}
