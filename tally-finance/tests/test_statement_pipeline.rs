use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tally_core::{Category, ProcessResult, ProcessorConfig, TransactionType};
use tally_finance::{process_statement, StatementProcessor};

const EPS: f64 = 1e-6;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("june_statement.txt")
}

fn fixture_bytes() -> Vec<u8> {
    std::fs::read(fixture_path()).unwrap()
}

fn canonical() -> StatementProcessor {
    StatementProcessor::new(ProcessorConfig::canonical()).unwrap()
}

fn assert_invariants(r: &ProcessResult) {
    for t in &r.transactions {
        assert_eq!(t.amount < 0.0, t.transaction_type == TransactionType::Debit, "{t:?}");
    }

    let s = &r.summary;
    assert!(s.total_income >= 0.0);
    assert!(s.total_expenses >= 0.0);
    assert!((s.total_income - s.total_expenses - s.net_flow).abs() < EPS);
    assert_eq!(s.total_transactions, r.transactions.len());

    let mut expected: BTreeMap<Category, f64> = BTreeMap::new();
    for t in &r.transactions {
        *expected.entry(t.category).or_insert(0.0) += t.amount.abs();
    }
    assert_eq!(s.categories.len(), expected.len());
    for (category, total) in &expected {
        assert!(Category::ALL.contains(category));
        assert!((s.categories[category] - total).abs() < EPS);
    }
}

/// Real-layout regression: the June statement with withdrawal/deposit/balance columns.
#[test]
fn test_june_statement_canonical() {
    let r = canonical().process_bytes(&fixture_bytes());
    assert!(r.success);
    assert!(r.error.is_none());
    assert_eq!(r.transactions.len(), 13);
    assert_invariants(&r);

    let first = &r.transactions[0];
    assert_eq!(first.date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    assert_eq!(first.description, "Rent Bill");
    assert_eq!(first.amount, -670.0);
    assert_eq!(first.category, Category::Utilities);

    let deposit = &r.transactions[4];
    assert_eq!(deposit.description, "Deposit");
    assert_eq!(deposit.amount, 7245.0);
    assert_eq!(deposit.transaction_type, TransactionType::Credit);
    assert_eq!(deposit.category, Category::Income);

    // "Payment from" deposits are read as bills by the keyword heuristics
    let check = &r.transactions[1];
    assert_eq!(check.description, "Check No. 3456, Payment from Nala Spencer");
    assert_eq!(check.transaction_type, TransactionType::Debit);
    assert_eq!(check.category, Category::Bills);

    let s = &r.summary;
    assert!((s.total_income - 10518.75).abs() < EPS);
    assert!((s.total_expenses - 10929.52).abs() < EPS);
    assert!((s.net_flow - -410.77).abs() < EPS);
    assert_eq!(s.unique_merchants, 12);
    assert!((s.categories[&Category::Utilities] - 1182.18).abs() < EPS);
    assert!((s.categories[&Category::Bills] - 1675.0).abs() < EPS);
    assert!((s.categories[&Category::Income] - 16993.65).abs() < EPS);
    assert!((s.categories[&Category::Other] - 1574.94).abs() < EPS);

    let meta = r.metadata.as_ref().unwrap();
    assert_eq!(meta.transaction_lines_found, 13);
    let range = meta.date_range.unwrap();
    assert_eq!(range.start, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    assert_eq!(range.end, NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
}

#[test]
fn test_source_order_preserved() {
    let r = canonical().process_bytes(&fixture_bytes());
    let dates: Vec<NaiveDate> = r.transactions.iter().map(|t| t.date).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
    assert_eq!(r.transactions[12].description, "Withholding Tax");
}

#[test]
fn test_processing_is_idempotent() {
    let p = canonical();
    let bytes = fixture_bytes();
    let a = p.process_bytes(&bytes);
    let b = p.process_bytes(&bytes);
    assert_eq!(a.transactions, b.transactions);
    assert_eq!(a.summary, b.summary);
}

#[test]
fn test_detailed_preset_on_june_statement() {
    let p = StatementProcessor::new(ProcessorConfig::detailed()).unwrap();
    let r = p.process_bytes(&fixture_bytes());
    assert!(r.success);
    assert_invariants(&r);

    // strict blacklist drops the two "Debit Transaction" rows
    assert_eq!(r.transactions.len(), 11);
    assert!(r.transactions.iter().all(|t| !t.description.contains("Debit")));

    let payroll = r
        .transactions
        .iter()
        .find(|t| t.description == "Payroll Run")
        .unwrap();
    assert_eq!(payroll.transaction_type, TransactionType::Credit);

    let check = r
        .transactions
        .iter()
        .find(|t| t.description.starts_with("Check No. 0231"))
        .unwrap();
    assert_eq!(check.transaction_type, TransactionType::Debit);
}

#[test]
fn test_bare_decimal_statement_yields_nothing() {
    let text = "01/15/2024  STARBUCKS COFFEE #1234        -5.75\n\
                01/11/2024  SALARY DEPOSIT                3500.00\n";
    let r = canonical().process_text(text);
    assert!(r.success);
    assert!(r.transactions.is_empty());
}

#[test]
fn test_header_line_rejected() {
    let r = canonical().process_text("01/31 DATE DESCRIPTION AMOUNT $10.00");
    assert!(r.success);
    assert!(r.transactions.is_empty());
}

#[test]
fn test_empty_input() {
    let r = canonical().process_bytes(b"");
    assert!(r.success);
    assert!(r.transactions.is_empty());
    assert_eq!(r.summary.total_transactions, 0);
    assert_eq!(r.summary.total_income, 0.0);
    assert_eq!(r.summary.total_expenses, 0.0);
    assert_eq!(r.summary.net_flow, 0.0);
    assert_eq!(r.summary.unique_merchants, 0);
    assert!(r.summary.categories.is_empty());
}

#[test]
fn test_decode_failure_shape() {
    let r = process_statement(&[0xff, 0xfe, 0xfd], ProcessorConfig::default());
    assert!(!r.success);
    assert!(!r.error.as_deref().unwrap_or("").is_empty());

    let v = serde_json::to_value(&r).unwrap();
    assert_eq!(v["success"], false);
    assert!(v["transactions"].as_array().unwrap().is_empty());
    assert_eq!(v["summary"]["totalTransactions"], 0);
}

#[test]
fn test_pdf_bytes_rejected() {
    let r = process_statement(b"%PDF-1.4\n%\xe2\xe3\xcf\xd3\n", ProcessorConfig::default());
    assert!(!r.success);
    assert!(r.error.unwrap().contains("PDF"));
}

#[test]
fn test_success_json_shape() {
    let r = canonical().process_bytes(&fixture_bytes());
    let v = serde_json::to_value(&r).unwrap();

    assert_eq!(v["success"], true);
    assert!(v.get("error").is_none());

    let t = &v["transactions"][0];
    assert_eq!(t["date"], "2024-06-01");
    assert_eq!(t["description"], "Rent Bill");
    assert_eq!(t["merchant"], "Rent Bill");
    assert_eq!(t["amount"], -670.0);
    assert_eq!(t["category"], "Utilities");
    assert_eq!(t["transactionType"], "debit");

    let s = &v["summary"];
    for key in [
        "totalTransactions",
        "totalIncome",
        "totalExpenses",
        "netFlow",
        "uniqueMerchants",
        "categories",
    ] {
        assert!(s.get(key).is_some(), "missing summary.{key}");
    }
    assert!(s["categories"].get("Utilities").is_some());

    let m = &v["metadata"];
    assert!(m["processedAt"].is_string());
    assert!(m["extractedTextLength"].as_u64().unwrap() > 0);
    assert_eq!(m["transactionLinesFound"], 13);
    assert_eq!(m["dateRange"]["start"], "2024-06-01");
}

#[test]
fn test_shared_processor_across_threads() {
    let p = canonical();
    let bytes = fixture_bytes();
    let expected = p.process_bytes(&bytes).summary;

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| p.process_bytes(&bytes).summary))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}
