//! vypiska-core: account tracking and the extraction pipeline over statement pages.

pub mod accounts;
pub mod page;
pub mod pipeline;
pub mod tracker;

pub use accounts::AccountTransactions;
pub use page::{Page, StatementPage};
pub use pipeline::{extract_batch, extract_transaction_data, Extraction};
pub use tracker::{AccountTracker, TrackerState};

pub use vypiska_ingest::{
    AccountNumber, Cell, Row, StatementSchema, StatementType, Table, TransactionRecord,
};
