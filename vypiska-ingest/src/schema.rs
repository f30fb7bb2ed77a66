//! Statement layouts: the closed set of supported banks and the shared
//! interface every layout implements.
//!
//! Adding a bank means adding a layout under `crate::parsers` and one
//! `StatementSchema` variant. Detection, classification and account
//! tracking only talk to `StatementSchema`.

use regex::Regex;
use serde::ser::{Serialize, Serializer};
use std::fmt;

use crate::normalize::clean_text;
use crate::parsers::{SberbankLayout, VtbLayout};
use crate::types::{AccountNumber, Cell, TransactionRecord};

/// Column labels that mark a repeated table header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLabels {
    /// Expected text of the first cell ("date" column).
    pub date: &'static str,
    /// Expected text of the second cell ("account" column).
    pub account: &'static str,
}

impl Default for HeaderLabels {
    fn default() -> Self {
        Self {
            date: "Дата",
            account: "Счет",
        }
    }
}

/// Bank-specific rules for one statement format.
pub trait StatementLayout: Sync {
    /// Short label used in output (`statement_type`).
    fn label(&self) -> &'static str;

    /// Pattern whose first capture group is an account number.
    fn account_pattern(&self) -> &Regex;

    /// Output field names, in column order.
    fn field_names(&self) -> &'static [&'static str];

    /// Rows narrower than this are never mapped.
    fn min_row_width(&self) -> usize;

    fn header_labels(&self) -> HeaderLabels {
        HeaderLabels::default()
    }

    /// Substrings of the first cell that close the current account block.
    fn terminator_keywords(&self) -> &'static [&'static str] {
        &["ИТОГО", "Количество операций"]
    }

    /// Phrase that ends the transaction list during record cleaning.
    fn closing_phrase(&self) -> &'static str;

    /// Value written into empty debit/credit fields during cleaning, if the
    /// bank leaves the unused side blank.
    fn empty_amount(&self) -> Option<&'static str> {
        None
    }

    /// All account numbers announced in `text`, in order of appearance.
    fn find_accounts(&self, text: &str) -> Vec<AccountNumber> {
        self.account_pattern()
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| AccountNumber::new(m.as_str()))
            .collect()
    }

    /// Map a table row onto `field_names` by position.
    ///
    /// Returns an empty record when the row is narrower than
    /// `min_row_width`. Trailing fields past the end of a wide-enough row
    /// are filled with `""`.
    fn map_row(&self, row: &[Cell]) -> TransactionRecord {
        if row.len() < self.min_row_width() {
            return TransactionRecord::default();
        }
        self.field_names()
            .iter()
            .enumerate()
            .map(|(i, name)| (*name, clean_text(row.get(i).and_then(|c| c.as_deref()))))
            .collect()
    }
}

static SBERBANK: SberbankLayout = SberbankLayout;
static VTB: VtbLayout = VtbLayout;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementSchema {
    Sberbank,
    Vtb,
}

impl StatementSchema {
    /// Every supported layout, in detection priority order.
    pub const ALL: [StatementSchema; 2] = [StatementSchema::Sberbank, StatementSchema::Vtb];

    pub fn layout(self) -> &'static dyn StatementLayout {
        match self {
            StatementSchema::Sberbank => &SBERBANK,
            StatementSchema::Vtb => &VTB,
        }
    }

    pub fn label(self) -> &'static str {
        self.layout().label()
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    pub fn matches(self, text: &str) -> bool {
        self.layout().account_pattern().is_match(text)
    }

    pub fn find_accounts(self, text: &str) -> Vec<AccountNumber> {
        self.layout().find_accounts(text)
    }

    pub fn min_row_width(self) -> usize {
        self.layout().min_row_width()
    }

    pub fn field_names(self) -> &'static [&'static str] {
        self.layout().field_names()
    }

    pub fn map_row(self, row: &[Cell]) -> TransactionRecord {
        self.layout().map_row(row)
    }

    /// Repeated column-label row: first cell is the date label or second
    /// cell is the account label. Compared against the raw cell text.
    pub fn is_header_row(self, row: &[Cell]) -> bool {
        let labels = self.layout().header_labels();
        let cell = |i: usize| row.get(i).and_then(|c| c.as_deref());
        cell(0) == Some(labels.date) || cell(1) == Some(labels.account)
    }

    /// First cell contains one of the layout's closing keywords.
    pub fn is_terminator_row(self, row: &[Cell]) -> bool {
        match row.first().and_then(|c| c.as_deref()) {
            Some(first) if !first.is_empty() => self
                .layout()
                .terminator_keywords()
                .iter()
                .any(|kw| first.contains(kw)),
            _ => false,
        }
    }
}

impl fmt::Display for StatementSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of statement type detection for one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementType {
    Known(StatementSchema),
    Unknown,
}

impl StatementType {
    pub const UNKNOWN_LABEL: &'static str = "unknown";

    pub fn schema(self) -> Option<StatementSchema> {
        match self {
            StatementType::Known(schema) => Some(schema),
            StatementType::Unknown => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatementType::Known(schema) => schema.label(),
            StatementType::Unknown => Self::UNKNOWN_LABEL,
        }
    }

    pub fn is_known(self) -> bool {
        matches!(self, StatementType::Known(_))
    }
}

impl fmt::Display for StatementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for StatementType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
