//! Money-in vs money-out decision for an extracted amount.
//!
//! Purely lexical. Under the default withdrawal-keyword strategy a deposit
//! described as "Payment from ..." is booked as a debit.

use tally_core::{SignConfig, SignStrategy, TransactionType};
use tally_ingest::AmountToken;

/// Signed amount plus the direction it implies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignedAmount {
    pub amount: f64,
    pub transaction_type: TransactionType,
}

impl SignedAmount {
    fn new(value: f64, debit: bool) -> Self {
        let amount = if debit { -value.abs() } else { value.abs() };
        let amount = if amount == 0.0 { 0.0 } else { amount };
        Self {
            amount,
            transaction_type: TransactionType::from_amount(amount),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SignClassifier {
    strategy: SignStrategy,
    withdrawal: Vec<String>,
    income: Vec<String>,
    expense: Vec<String>,
}

impl SignClassifier {
    pub fn new(config: &SignConfig) -> Self {
        Self {
            strategy: config.strategy,
            withdrawal: lowered(&config.withdrawal_keywords),
            income: lowered(&config.income_keywords),
            expense: lowered(&config.expense_keywords),
        }
    }

    /// Sign `amount` using the whole `line` (withdrawal strategy) or the
    /// `description` (income/expense strategy).
    pub fn classify(&self, line: &str, description: &str, amount: &AmountToken) -> SignedAmount {
        match self.strategy {
            SignStrategy::WithdrawalKeywords => {
                let debit = contains_any(&line.to_lowercase(), &self.withdrawal);
                SignedAmount::new(amount.value, debit)
            }
            SignStrategy::IncomeExpense => {
                let desc = description.to_lowercase();
                if contains_any(&desc, &self.income) {
                    SignedAmount::new(amount.value, false)
                } else if contains_any(&desc, &self.expense) {
                    SignedAmount::new(amount.value, true)
                } else {
                    SignedAmount::new(amount.value, amount.negative)
                }
            }
        }
    }
}

fn lowered(words: &[String]) -> Vec<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}

pub(crate) fn contains_any(haystack: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|k| haystack.contains(k.as_str()))
}
