//! tally-finance: sign rules, category rules, aggregation and the statement processor

pub mod aggregator;
pub mod category_rules;
pub mod processor;
pub mod sign_rules;

pub use aggregator::Aggregator;
pub use category_rules::{categorize, Categorizer};
pub use processor::{process_statement, StatementProcessor};
pub use sign_rules::{SignClassifier, SignedAmount};
