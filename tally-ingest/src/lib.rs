//! tally-ingest: statement text decoding, candidate line selection and raw field extraction.

pub mod dates;
pub mod field_extractor;
pub mod line_selector;
pub mod merchant;
pub mod text;
pub mod types;

pub use dates::{DateFormat, DateNormalizer, DATE_FORMATS};
pub use field_extractor::FieldExtractor;
pub use line_selector::LineSelector;
pub use merchant::MerchantCleaner;
pub use text::{decode_statement, TextCleaner};
pub use types::{AmountToken, ExtractedFields, RawLine};
