//! Transaction, summary and result types emitted by the statement pipeline

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single transaction recovered from one statement line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Date of the transaction (YYYY-MM-DD)
    pub date: NaiveDate,
    /// Text between the date token and the amount token
    pub description: String,
    /// Positive = money in, negative = money out
    pub amount: f64,
    /// Same as `description` unless merchant cleanup is enabled
    pub merchant: String,
    pub category: Category,
    pub transaction_type: TransactionType,
}

impl Transaction {
    /// Build a transaction, deriving the type from the sign of `amount`.
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        amount: f64,
        merchant: impl Into<String>,
        category: Category,
    ) -> Self {
        // -0.0 would otherwise report as a credit with a negative sign bit
        let amount = if amount == 0.0 { 0.0 } else { amount };
        Self {
            date,
            description: description.into(),
            amount,
            merchant: merchant.into(),
            category,
            transaction_type: TransactionType::from_amount(amount),
        }
    }

    /// Returns true if money left the account
    pub fn is_debit(&self) -> bool {
        self.transaction_type == TransactionType::Debit
    }

    /// Get the absolute amount
    pub fn abs_amount(&self) -> f64 {
        self.amount.abs()
    }
}

/// Direction of a transaction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Credit,
    Debit,
}

impl TransactionType {
    pub fn from_amount(amount: f64) -> Self {
        if amount < 0.0 {
            TransactionType::Debit
        } else {
            TransactionType::Credit
        }
    }
}

/// Closed set of category labels
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Utilities,
    Bills,
    Income,
    Interest,
    Taxes,
    #[serde(rename = "Food and Drink")]
    FoodAndDrink,
    Transportation,
    Shopping,
    Entertainment,
    Groceries,
    Healthcare,
    Education,
    Other,
}

impl Category {
    pub const ALL: [Category; 13] = [
        Category::Utilities,
        Category::Bills,
        Category::Income,
        Category::Interest,
        Category::Taxes,
        Category::FoodAndDrink,
        Category::Transportation,
        Category::Shopping,
        Category::Entertainment,
        Category::Groceries,
        Category::Healthcare,
        Category::Education,
        Category::Other,
    ];

    /// Display label, identical to the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            Category::Utilities => "Utilities",
            Category::Bills => "Bills",
            Category::Income => "Income",
            Category::Interest => "Interest",
            Category::Taxes => "Taxes",
            Category::FoodAndDrink => "Food and Drink",
            Category::Transportation => "Transportation",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::Groceries => "Groceries",
            Category::Healthcare => "Healthcare",
            Category::Education => "Education",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Aggregate figures over one run's transactions.
///
/// `Default` is the all-zero summary used on failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_transactions: usize,
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_flow: f64,
    pub unique_merchants: usize,
    /// Category label -> summed absolute amount
    pub categories: BTreeMap<Category, f64>,
}

/// Earliest and latest transaction date of a statement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub processed_at: DateTime<Utc>,
    /// Length of the processed text in characters
    pub extracted_text_length: usize,
    pub transaction_lines_found: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
}

/// Top-level outcome of processing one statement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub transactions: Vec<Transaction>,
    pub summary: Summary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl ProcessResult {
    pub fn success(transactions: Vec<Transaction>, summary: Summary, metadata: Metadata) -> Self {
        Self {
            success: true,
            error: None,
            transactions,
            summary,
            metadata: Some(metadata),
        }
    }

    /// Failure shape: no transactions, zeroed summary, no metadata
    pub fn failure(error: impl fmt::Display) -> Self {
        Self {
            success: false,
            error: Some(error.to_string()),
            transactions: Vec::new(),
            summary: Summary::default(),
            metadata: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn june(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    #[test]
    fn test_transaction_type_follows_sign() {
        let rent = Transaction::new(june(1), "Rent Bill", -670.0, "Rent Bill", Category::Utilities);
        assert!(rent.is_debit());
        assert_eq!(rent.abs_amount(), 670.0);

        let deposit = Transaction::new(june(15), "Deposit", 7245.0, "Deposit", Category::Income);
        assert_eq!(deposit.transaction_type, TransactionType::Credit);
    }

    #[test]
    fn test_negative_zero_is_credit() {
        let t = Transaction::new(june(2), "Fee waiver", -0.0, "Fee waiver", Category::Other);
        assert_eq!(t.transaction_type, TransactionType::Credit);
        assert!(t.amount.is_sign_positive());
    }

    #[test]
    fn test_transaction_wire_shape() {
        let t = Transaction::new(june(1), "Rent Bill", -670.0, "Rent Bill", Category::Utilities);
        let v = serde_json::to_value(&t).unwrap();
        assert_eq!(v["date"], "2024-06-01");
        assert_eq!(v["transactionType"], "debit");
        assert_eq!(v["category"], "Utilities");
        assert_eq!(v["amount"], -670.0);
    }

    #[test]
    fn test_category_labels_match_serde() {
        for c in Category::ALL {
            let v = serde_json::to_value(c).unwrap();
            assert_eq!(v, c.label());
        }
        assert_eq!(Category::FoodAndDrink.to_string(), "Food and Drink");
    }

    #[test]
    fn test_failure_shape() {
        let r = ProcessResult::failure("invalid UTF-8");
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["success"], false);
        assert_eq!(v["error"], "invalid UTF-8");
        assert_eq!(v["transactions"].as_array().unwrap().len(), 0);
        assert_eq!(v["summary"]["totalTransactions"], 0);
        assert_eq!(v["summary"]["netFlow"], 0.0);
        assert!(v["summary"]["categories"].as_object().unwrap().is_empty());
        assert!(v.get("metadata").is_none());
    }
}
