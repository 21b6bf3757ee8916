//! Summary figures over a list of extracted transactions.

use std::collections::{BTreeMap, HashSet};
use tally_core::{Category, DateRange, Summary, Transaction};

/// Folds transactions into a [`Summary`]
pub struct Aggregator;

impl Aggregator {
    pub fn summarize(txns: &[Transaction]) -> Summary {
        let total_income: f64 = txns.iter().filter(|t| t.amount > 0.0).map(|t| t.amount).sum();
        let total_expenses: f64 = txns
            .iter()
            .filter(|t| t.amount < 0.0)
            .map(|t| t.amount.abs())
            .sum();

        let merchants: HashSet<&str> = txns
            .iter()
            .map(|t| t.merchant.as_str())
            .filter(|m| !m.is_empty())
            .collect();

        let mut categories: BTreeMap<Category, f64> = BTreeMap::new();
        for t in txns {
            *categories.entry(t.category).or_insert(0.0) += t.abs_amount();
        }

        Summary {
            total_transactions: txns.len(),
            total_income,
            total_expenses,
            net_flow: total_income - total_expenses,
            unique_merchants: merchants.len(),
            categories,
        }
    }

    /// Earliest and latest transaction dates, if any
    pub fn date_range(txns: &[Transaction]) -> Option<DateRange> {
        let start = txns.iter().map(|t| t.date).min()?;
        let end = txns.iter().map(|t| t.date).max()?;
        Some(DateRange { start, end })
    }
}
