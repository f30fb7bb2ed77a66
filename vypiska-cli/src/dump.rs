//! JSON page dumps written by an external table extractor.
//!
//! Accepted shapes:
//!   {"pages": [{"text": "...", "tables": [[["cell", null, ...], ...]]}, ...]}
//!   [{"text": "...", "tables": [...]}, ...]

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use vypiska_core::Page;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PageDump {
    Wrapped { pages: Vec<Page> },
    Bare(Vec<Page>),
}

pub fn parse_page_dump(json: &str) -> Result<Vec<Page>> {
    let dump: PageDump = serde_json::from_str(json).context("parse page dump")?;
    Ok(match dump {
        PageDump::Wrapped { pages } => pages,
        PageDump::Bare(pages) => pages,
    })
}

pub fn load_page_dump(path: &Path) -> Result<Vec<Page>> {
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_page_dump(&s).with_context(|| format!("load {}", path.display()))
}
