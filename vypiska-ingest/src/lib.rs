//! vypiska-ingest: statement row types and bank-specific layouts (Sberbank, VTB).

pub mod classify;
pub mod clean;
pub mod detect;
pub mod normalize;
pub mod parsers;
pub mod schema;
pub mod types;

pub use classify::{classify_row, DiscardReason, RowClass};
pub use clean::{clean_record, clean_transactions, CleanRecord};
pub use detect::detect_statement_type;
pub use normalize::clean_text;
pub use schema::{StatementLayout, StatementSchema, StatementType};
pub use types::{AccountNumber, Cell, Row, Table, TransactionRecord};
