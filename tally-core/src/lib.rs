//! tally-core: data model, configuration and errors for the statement extractor

pub mod config;
pub mod error;
pub mod finance;

pub use config::{CategoryRule, ProcessorConfig, SignConfig, SignStrategy};
pub use error::{Result, TallyError};
pub use finance::{
    Category, DateRange, Metadata, ProcessResult, Summary, Transaction, TransactionType,
};
