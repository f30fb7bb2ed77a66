use anyhow::{anyhow, Result};
use vypiska_core::{
    extract_batch, extract_transaction_data, AccountNumber, Page, Row, StatementPage,
    StatementSchema, StatementType, Table,
};

const ACCT_A: &str = "40702810938000012345";
const ACCT_B: &str = "40702810938000067890";
const VTB_ACCT: &str = "40702810512340000001";

fn sber_heading(account: &str) -> String {
    format!("ПАО СБЕРБАНК\nВЫПИСКА ОПЕРАЦИЙ ПО ЛИЦЕВОМУ СЧЕТУ {account}\nза период с 01.01.2024 по 31.01.2024")
}

fn vtb_heading(account: &str) -> String {
    format!("Банк ВТБ (ПАО)\nСчет {account} (Валюта 643, Российский рубль)")
}

fn cells(values: &[&str]) -> Row {
    values.iter().map(|v| Some(v.to_string())).collect()
}

fn sber_row(date: &str, debit: &str) -> Row {
    cells(&[
        date,
        "40702810938000012345",
        "40817810000000000001",
        debit,
        "",
        "17",
        "01",
        "044525225",
        "Оплата по договору",
    ])
}

fn sber_header() -> Row {
    cells(&["Дата", "Счет", "", "Дебет", "Кредит", "№ док.", "ВО", "БИК", "Назначение"])
}

fn vtb_row(date: &str, credit: &str) -> Row {
    cells(&[
        date,
        "512",
        "01",
        "7701234567",
        "044525187",
        "40702810000000000002",
        "ООО Ромашка",
        "",
        credit,
        "Оплата по счету",
    ])
}

fn terminator() -> Row {
    cells(&["Количество операций: 2"])
}

fn dates(out: &vypiska_core::Extraction, account: &str) -> Vec<String> {
    out.account_transactions
        .get(&AccountNumber::from(account))
        .unwrap_or(&[])
        .iter()
        .map(|r| r.get("date").unwrap_or("").to_string())
        .collect()
}

/// Page 1 opens A with rows r1, r2. Page 2 closes A in one table; a later
/// table on the same page must not be attributed to A.
#[test]
fn test_rows_after_terminator_table_are_not_attributed() {
    let pages = vec![
        Page::new(sber_heading(ACCT_A))
            .with_table(vec![sber_header(), sber_row("r1", "10,00"), sber_row("r2", "20,00")]),
        Page::new("стр. 2")
            .with_table(vec![terminator()])
            .with_table(vec![sber_row("r3", "30,00")]),
    ];

    let out = extract_transaction_data(&pages).unwrap();
    assert_eq!(out.statement_type, StatementType::Known(StatementSchema::Sberbank));
    assert_eq!(dates(&out, ACCT_A), vec!["r1", "r2"]);
    assert_eq!(out.account_transactions.total_records(), 2);
}

#[test]
fn test_account_survives_page_break() {
    let pages = vec![
        Page::new(sber_heading(ACCT_A)).with_table(vec![sber_row("01.01.2024", "1,00")]),
        Page::new("стр. 2").with_table(vec![sber_row("02.01.2024", "2,00"), terminator()]),
    ];

    let out = extract_transaction_data(&pages).unwrap();
    assert_eq!(dates(&out, ACCT_A), vec!["01.01.2024", "02.01.2024"]);
}

#[test]
fn test_reannounced_account_accumulates_in_one_list() {
    let acct = "12345678901234567890";
    let pages = vec![
        Page::new(sber_heading(acct)).with_table(vec![sber_row("p1", "1,00"), terminator()]),
        Page::new(sber_heading(ACCT_B)).with_table(vec![sber_row("p2", "2,00")]),
        Page::new("стр. 3").with_table(vec![sber_row("p3", "3,00"), terminator()]),
        Page::new("стр. 4").with_table(vec![sber_row("dropped", "4,00")]),
        Page::new(sber_heading(acct)).with_table(vec![sber_row("p5", "5,00")]),
        Page::new("стр. 6").with_table(vec![sber_row("p6", "6,00")]),
    ];

    let out = extract_transaction_data(&pages).unwrap();
    let keys: Vec<_> = out.account_transactions.accounts().map(AccountNumber::as_str).collect();
    assert_eq!(keys, vec![acct, ACCT_B]);
    assert_eq!(dates(&out, acct), vec!["p1", "p5", "p6"]);
    assert_eq!(dates(&out, ACCT_B), vec!["p2", "p3"]);
}

#[test]
fn test_detection_uses_first_page_only() {
    let pages = vec![
        Page::new(sber_heading(ACCT_A)).with_table(vec![sber_row("01.01.2024", "1,00"), terminator()]),
        // A VTB heading on a later page is invisible to the Sberbank layout.
        Page::new(vtb_heading(VTB_ACCT)).with_table(vec![sber_row("02.01.2024", "2,00")]),
    ];

    let out = extract_transaction_data(&pages).unwrap();
    assert_eq!(out.statement_type, StatementType::Known(StatementSchema::Sberbank));
    let keys: Vec<_> = out.account_transactions.accounts().map(AccountNumber::as_str).collect();
    assert_eq!(keys, vec![ACCT_A]);
    assert_eq!(dates(&out, ACCT_A), vec!["01.01.2024"]);
}

#[test]
fn test_unknown_statement_yields_empty_result() {
    let pages = vec![Page::new("Statement of account 40702810938000012345")
        .with_table(vec![sber_row("01.01.2024", "1,00")])];

    let out = extract_transaction_data(&pages).unwrap();
    assert_eq!(out.statement_type, StatementType::Unknown);
    assert!(out.account_transactions.is_empty());
    assert_eq!(out.first_page_text, "Statement of account 40702810938000012345");
}

#[test]
fn test_short_blank_and_header_rows_are_never_appended() {
    let blank: Row = vec![None, Some(" ".into()), None, None, None, None, None, None, None];
    let pages = vec![Page::new(vtb_heading(VTB_ACCT)).with_table(vec![
        cells(&["Дата", "№", "Шифр", "ИНН", "БИК", "Счет", "Наименование", "Дебет", "Кредит", "Назначение"]),
        cells(&["", "Счет", "", "", "", "", "", "", ""]),
        cells(&["01.03.2024", "1", "01"]),
        blank,
        vtb_row("02.03.2024", "100,00"),
    ])];

    let out = extract_transaction_data(&pages).unwrap();
    assert_eq!(out.statement_type, StatementType::Known(StatementSchema::Vtb));
    assert_eq!(dates(&out, VTB_ACCT), vec!["02.03.2024"]);
}

#[test]
fn test_rows_after_closing_are_dropped_until_next_heading() {
    let pages = vec![
        Page::new(sber_heading(ACCT_A))
            .with_table(vec![terminator(), sber_row("orphan", "1,00")]),
        Page::new(sber_heading(ACCT_B)).with_table(vec![sber_row("kept", "2,00")]),
    ];

    let out = extract_transaction_data(&pages).unwrap();
    assert_eq!(dates(&out, ACCT_A), Vec::<String>::new());
    assert_eq!(dates(&out, ACCT_B), vec!["kept"]);
}

/// Page whose text layer cannot be read.
struct BrokenPage;

impl StatementPage for BrokenPage {
    fn extract_text(&self) -> Result<Option<String>> {
        Err(anyhow!("corrupt content stream"))
    }

    fn extract_tables(&self) -> Result<Vec<Table>> {
        Err(anyhow!("corrupt content stream"))
    }
}

enum TestPage {
    Ok(Page),
    Broken,
}

impl StatementPage for TestPage {
    fn extract_text(&self) -> Result<Option<String>> {
        match self {
            TestPage::Ok(page) => page.extract_text(),
            TestPage::Broken => BrokenPage.extract_text(),
        }
    }

    fn extract_tables(&self) -> Result<Vec<Table>> {
        match self {
            TestPage::Ok(page) => page.extract_tables(),
            TestPage::Broken => BrokenPage.extract_tables(),
        }
    }
}

#[test]
fn test_unreadable_later_page_is_skipped() {
    let pages = vec![
        TestPage::Ok(Page::new(sber_heading(ACCT_A)).with_table(vec![sber_row("a", "1,00")])),
        TestPage::Broken,
        TestPage::Ok(Page::new("стр. 3").with_table(vec![sber_row("b", "2,00")])),
    ];

    let out = extract_transaction_data(&pages).unwrap();
    assert_eq!(dates(&out, ACCT_A), vec!["a", "b"]);
}

#[test]
fn test_unreadable_first_page_fails_document() {
    let pages = vec![BrokenPage];
    let err = extract_transaction_data(&pages).unwrap_err();
    assert!(format!("{err:#}").contains("corrupt content stream"));
}

#[test]
fn test_batch_documents_do_not_share_state() {
    // First document ends with A still open.
    let doc1 = vec![Page::new(sber_heading(ACCT_A)).with_table(vec![sber_row("a1", "1,00")])];
    let doc2 = vec![
        Page::new(vtb_heading(VTB_ACCT)).with_table(vec![vtb_row("v1", "5,00")]),
    ];
    let doc3: Vec<Page> = Vec::new();

    let results = extract_batch::<Page, _>(&[doc1, doc2, doc3]);
    assert_eq!(results.len(), 3);

    let first = results[0].as_ref().unwrap();
    assert_eq!(dates(first, ACCT_A), vec!["a1"]);

    let second = results[1].as_ref().unwrap();
    assert_eq!(second.statement_type, StatementType::Known(StatementSchema::Vtb));
    assert!(second.account_transactions.get(&AccountNumber::from(ACCT_A)).is_none());
    assert_eq!(dates(second, VTB_ACCT), vec!["v1"]);

    let err = results[2].as_ref().unwrap_err();
    assert!(format!("{err:#}").contains("document 3"));
}

#[test]
fn test_serialized_shape() {
    let pages = vec![Page::new(vtb_heading(VTB_ACCT)).with_table(vec![vtb_row("02.03.2024", "100,00")])];
    let out = extract_transaction_data(&pages).unwrap();
    let json = serde_json::to_value(&out).unwrap();

    assert_eq!(json["statement_type"], "ВТБ");
    assert!(json["first_page_text"].as_str().unwrap().contains(VTB_ACCT));
    let rows = json["account_transactions"][VTB_ACCT].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["credit"], "100,00");
    assert_eq!(rows[0]["description"], "Оплата по счету");
}
