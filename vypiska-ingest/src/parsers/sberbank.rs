//! Sberbank account statement layout.
//!
//! Each account section opens with a heading line:
//!   ВЫПИСКА ОПЕРАЦИЙ ПО ЛИЦЕВОМУ СЧЕТУ 40702810938000012345
//!
//! Transaction tables have nine columns:
//!   Дата | Счет (дебет) | Счет (кредит) | Дебет | Кредит | № док. | ВО | БИК | Назначение платежа

use regex::Regex;
use std::sync::LazyLock;

use crate::schema::StatementLayout;

static ACCOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"ВЫПИСКА ОПЕРАЦИЙ ПО ЛИЦЕВОМУ СЧЕТУ\s(\d{20})").expect("valid sberbank account regex")
});

const FIELDS: &[&str] = &[
    "date",
    "debit_account",
    "credit_account",
    "debit",
    "credit",
    "document_number",
    "vo_code",
    "bik",
    "payment_description",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct SberbankLayout;

impl StatementLayout for SberbankLayout {
    fn label(&self) -> &'static str {
        "СБЕР"
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
        "Количество операций"
    }

    fn empty_amount(&self) -> Option<&'static str> {
        Some("0.00")
    }
}
