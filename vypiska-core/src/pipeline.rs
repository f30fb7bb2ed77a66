//! Document-level extraction: detect the layout from page 1, then track
//! accounts across all pages.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{error, info, warn};
use vypiska_ingest::{detect_statement_type, StatementType};

use crate::accounts::AccountTransactions;
use crate::page::StatementPage;
use crate::tracker::AccountTracker;

/// Result of extracting one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extraction {
    pub account_transactions: AccountTransactions,
    pub first_page_text: String,
    pub statement_type: StatementType,
}

/// Extract per-account transactions from `pages`.
///
/// An unrecognized statement yields an empty mapping with
/// `StatementType::Unknown`. Errors are reserved for document-level
/// failures: no pages at all, or a first page whose text cannot be read.
pub fn extract_transaction_data<P: StatementPage>(pages: &[P]) -> Result<Extraction> {
    extract(pages).inspect_err(|err| error!(error = %err, "extraction failed"))
}

fn extract<P: StatementPage>(pages: &[P]) -> Result<Extraction> {
    let first = pages.first().context("document has no pages")?;
    let first_page_text = first
        .extract_text()
        .context("reading first page text")?
        .unwrap_or_default();

    let statement_type = detect_statement_type(&first_page_text);
    let Some(schema) = statement_type.schema() else {
        warn!("could not determine statement type");
        return Ok(Extraction {
            account_transactions: AccountTransactions::new(),
            first_page_text,
            statement_type,
        });
    };

    info!(statement_type = %schema, pages = pages.len(), "statement type detected");
    let account_transactions = AccountTracker::new(schema).run(pages);

    Ok(Extraction {
        account_transactions,
        first_page_text,
        statement_type,
    })
}

/// Extract several documents one after another.
///
/// Each document gets its own tracker; a failure is reported in that
/// document's slot and the rest still run.
pub fn extract_batch<P, D>(documents: &[D]) -> Vec<Result<Extraction>>
where
    P: StatementPage,
    D: AsRef<[P]>,
{
    documents
        .iter()
        .enumerate()
        .map(|(idx, doc)| {
            extract_transaction_data(doc.as_ref())
                .with_context(|| format!("document {}", idx + 1))
        })
        .collect()
}
