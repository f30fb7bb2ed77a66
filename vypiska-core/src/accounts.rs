//! Per-account transaction lists in document order.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use vypiska_ingest::{AccountNumber, TransactionRecord};

/// Account number -> records, keeping accounts in first-seen order.
///
/// Entries are only ever created or appended to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountTransactions {
    order: Vec<AccountNumber>,
    records: HashMap<AccountNumber, Vec<TransactionRecord>>,
}

impl AccountTransactions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of accounts seen.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, account: &AccountNumber) -> bool {
        self.records.contains_key(account)
    }

    /// Register `account` with an empty list. Returns false if it was
    /// already known.
    pub fn open(&mut self, account: &AccountNumber) -> bool {
        if self.records.contains_key(account) {
            return false;
        }
        self.order.push(account.clone());
        self.records.insert(account.clone(), Vec::new());
        true
    }

    pub fn push(&mut self, account: &AccountNumber, record: TransactionRecord) {
        self.open(account);
        if let Some(list) = self.records.get_mut(account) {
            list.push(record);
        }
    }

    pub fn get(&self, account: &AccountNumber) -> Option<&[TransactionRecord]> {
        self.records.get(account).map(Vec::as_slice)
    }

    pub fn accounts(&self) -> impl Iterator<Item = &AccountNumber> {
        self.order.iter()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AccountNumber, &[TransactionRecord])> {
        self.order.iter().map(move |account| {
            let list = self.records.get(account).map(Vec::as_slice).unwrap_or(&[]);
            (account, list)
        })
    }

    pub fn total_records(&self) -> usize {
        self.records.values().map(Vec::len).sum()
    }
}

impl Serialize for AccountTransactions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.order.len()))?;
        for (account, list) in self.iter() {
            map.serialize_entry(account, list)?;
        }
        map.end()
    }
}
