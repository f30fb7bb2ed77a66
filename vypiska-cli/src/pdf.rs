//! PDF pages via `pdf-extract`, with tables recovered from the page text.
//!
//! Statement tables come out of text extraction as lines whose columns are
//! separated by wide gaps:
//!   15.01.2024   40702810938000012345   40817810000000000001   1 500,00   ...
//! A line with two or more gap-separated cells is a table row. A one-cell
//! line directly after a table (the "ИТОГО ..." summary) is kept as the
//! table's last row and ends it.

use anyhow::{anyhow, Context, Result};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;
use vypiska_core::{Row, StatementPage, Table};

static CELL_GAP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("valid cell gap regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfPage {
    text: String,
}

impl PdfPage {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl StatementPage for PdfPage {
    fn extract_text(&self) -> Result<Option<String>> {
        if self.text.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(self.text.clone()))
        }
    }

    fn extract_tables(&self) -> Result<Vec<Table>> {
        Ok(text_tables(&self.text))
    }
}

pub fn load_pdf(path: &Path) -> Result<Vec<PdfPage>> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes)
        .map_err(|e| anyhow!("failed to extract text from PDF: {e}"))?;
    debug!(path = %path.display(), pages = pages.len(), "pdf text extracted");
    Ok(pages.into_iter().map(PdfPage::new).collect())
}

fn split_cells(line: &str) -> Row {
    CELL_GAP_RE
        .split(line.trim())
        .map(|cell| Some(cell.to_string()))
        .collect()
}

/// Group gap-aligned lines of `text` into tables.
pub fn text_tables(text: &str) -> Vec<Table> {
    let mut tables = Vec::new();
    let mut current: Table = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let row = split_cells(line);
        if row.len() >= 2 {
            current.push(row);
        } else if !current.is_empty() {
            current.push(row);
            tables.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tables.push(current);
    }

    tables
}
