//! VTB account statement layout.
//!
//! Account sections are announced as:
//!   Счет 40702810512340000001 (Валюта 643, Российский рубль)
//!
//! Transaction tables have nine fixed columns plus an optional tenth
//! (operation description) that some exports drop:
//!   Дата | № | Шифр | ИНН | БИК | Счет | Наименование | Дебет | Кредит | [Назначение]

use regex::Regex;
use std::sync::LazyLock;

use crate::schema::StatementLayout;

static ACCOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Счет\s(\d{20})\s\(Валюта\s\d{3},\sРоссийский\sрубль\)")
        .expect("valid vtb account regex")
});

const FIELDS: &[&str] = &[
    "date",
    "transaction_number",
    "operation_code",
    "inn",
    "bik",
    "account",
    "name",
    "debit",
    "credit",
    "description",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct VtbLayout;

impl StatementLayout for VtbLayout {
    fn label(&self) -> &'static str {
        "ВТБ"
    }

    fn account_pattern(&self) -> &Regex {
        &ACCOUNT_RE
    }

    fn field_names(&self) -> &'static [&'static str] {
        FIELDS
    }

    fn min_row_width(&self) -> usize {
        9
    }

    fn closing_phrase(&self) -> &'static str {
        "ИТОГО за период с"
    }
}
