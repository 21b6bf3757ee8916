//! Errors that abort a whole statement run.
//!
//! Line-level problems never surface here: a line without a date or amount is
//! simply skipped by the extractor.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TallyError {
    #[error("statement text is not valid UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),
    #[error("input is a PDF document; extract its text before processing")]
    PdfInput,
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, TallyError>;
