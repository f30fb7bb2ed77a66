//! Account tracker — attributes table rows to the account that is open.
//!
//! Statements announce an account once, at the start of its section, and
//! close it with a summary row ("ИТОГО", "Количество операций"). Every data
//! row in between belongs to that account, across page breaks.
//!
//! States:
//! - `Idle`: no account open; data rows are dropped.
//! - `InAccount(acct)`: data rows are appended to `acct`.
//!
//! Transitions:
//! - page text announces accounts -> `InAccount(first announced)`
//! - terminator row -> `Idle` (no-op when already idle)
//!
//! A terminator closes the account immediately, so the rest of that table
//! is dropped unless the next page re-announces an account.

use tracing::{debug, info, warn};
use vypiska_ingest::{classify_row, AccountNumber, RowClass, StatementSchema, Table, TransactionRecord};

use crate::accounts::AccountTransactions;
use crate::page::StatementPage;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TrackerState {
    #[default]
    Idle,
    InAccount(AccountNumber),
}

impl TrackerState {
    pub fn active_account(&self) -> Option<&AccountNumber> {
        match self {
            TrackerState::Idle => None,
            TrackerState::InAccount(account) => Some(account),
        }
    }
}

/// One document's walk. Create a fresh tracker per document.
#[derive(Debug, Clone)]
pub struct AccountTracker {
    schema: StatementSchema,
    state: TrackerState,
    accounts: AccountTransactions,
    dropped_rows: usize,
}

impl AccountTracker {
    pub fn new(schema: StatementSchema) -> Self {
        Self {
            schema,
            state: TrackerState::Idle,
            accounts: AccountTransactions::new(),
            dropped_rows: 0,
        }
    }

    pub fn schema(&self) -> StatementSchema {
        self.schema
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn accounts(&self) -> &AccountTransactions {
        &self.accounts
    }

    /// Data rows seen while no account was open.
    pub fn dropped_rows(&self) -> usize {
        self.dropped_rows
    }

    /// Walk every page in order and return the accumulated mapping.
    pub fn run<P: StatementPage>(mut self, pages: &[P]) -> AccountTransactions {
        for (idx, page) in pages.iter().enumerate() {
            self.process_page(idx + 1, page);
        }
        info!(
            accounts = self.accounts.len(),
            records = self.accounts.total_records(),
            dropped = self.dropped_rows,
            "extraction finished"
        );
        self.accounts
    }

    /// Feed one page. `page_no` is 1-based and only used for logging.
    pub fn process_page<P: StatementPage + ?Sized>(&mut self, page_no: usize, page: &P) {
        let text = match page.extract_text() {
            Ok(Some(text)) if !text.is_empty() => text,
            Ok(_) => {
                warn!(page = page_no, "page has no text, skipping");
                return;
            }
            Err(err) => {
                warn!(page = page_no, error = %err, "could not read page text, skipping");
                return;
            }
        };

        let announced = self.schema.find_accounts(&text);
        if announced.len() > 1 {
            debug!(page = page_no, count = announced.len(), "several accounts announced, using the first");
        }
        if let Some(account) = announced.into_iter().next() {
            self.open(account);
        }

        let tables = match page.extract_tables() {
            Ok(tables) => tables,
            Err(err) => {
                warn!(page = page_no, error = %err, "could not read page tables, skipping");
                return;
            }
        };
        if tables.is_empty() {
            warn!(page = page_no, "no tables on page");
            return;
        }

        for table in &tables {
            self.process_table(table);
        }
    }

    pub fn process_table(&mut self, table: &Table) {
        for row in table {
            match classify_row(self.schema, row) {
                RowClass::Data(record) => self.append(record),
                RowClass::Terminator => self.close(),
                RowClass::Header | RowClass::Discard(_) => {}
            }
        }
    }

    fn open(&mut self, account: AccountNumber) {
        let is_new = self.accounts.open(&account);
        info!(account = %account, new = is_new, "account opened");
        self.state = TrackerState::InAccount(account);
    }

    fn close(&mut self) {
        if let TrackerState::InAccount(account) = std::mem::take(&mut self.state) {
            info!(account = %account, "account closed");
        }
    }

    fn append(&mut self, record: TransactionRecord) {
        match &self.state {
            TrackerState::InAccount(account) => self.accounts.push(account, record),
            TrackerState::Idle => {
                self.dropped_rows += 1;
                debug!("row outside any account dropped");
            }
        }
    }
}
