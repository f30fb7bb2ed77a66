//! Opens a statement document and picks the reader by file extension.

use anyhow::Result;
use std::path::Path;
use vypiska_core::{extract_transaction_data, Extraction, Page};

use crate::dump::load_page_dump;
use crate::pdf::{load_pdf, PdfPage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    PageDump,
}

impl DocumentFormat {
    /// `.json` is a page dump; everything else is read as PDF.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::PageDump,
            _ => DocumentFormat::Pdf,
        }
    }
}

pub enum Document {
    Pdf(Vec<PdfPage>),
    PageDump(Vec<Page>),
}

impl Document {
    pub fn open(path: &Path) -> Result<Self> {
        Ok(match DocumentFormat::from_path(path) {
            DocumentFormat::Pdf => Document::Pdf(load_pdf(path)?),
            DocumentFormat::PageDump => Document::PageDump(load_page_dump(path)?),
        })
    }

    pub fn page_count(&self) -> usize {
        match self {
            Document::Pdf(pages) => pages.len(),
            Document::PageDump(pages) => pages.len(),
        }
    }

    pub fn extract(&self) -> Result<Extraction> {
        match self {
            Document::Pdf(pages) => extract_transaction_data(pages),
            Document::PageDump(pages) => extract_transaction_data(pages),
        }
    }
}
