//! Statement text preparation: byte decoding and optional boilerplate cleanup.

use regex::Regex;
use tally_core::{Result, TallyError};

/// Decode uploaded statement bytes into text.
///
/// PDF payloads are refused: turning a PDF into text happens before this crate.
pub fn decode_statement(bytes: &[u8]) -> Result<&str> {
    if bytes.starts_with(b"%PDF") {
        return Err(TallyError::PdfInput);
    }
    let text = std::str::from_utf8(bytes)?;
    Ok(text.strip_prefix('\u{feff}').unwrap_or(text))
}

/// Removes layout noise that PDF-to-text tools leave behind.
///
/// Runs of spaces and tabs become one space, blank lines go away, and
/// `Page N of M`, `Statement Period: ...` and masked card numbers
/// (`Account: 1234-5678-9012-3456`) are deleted.
#[derive(Debug, Clone)]
pub struct TextCleaner {
    spaces: Regex,
    blank_lines: Regex,
    page_numbers: Regex,
    statement_period: Regex,
    account_number: Regex,
}

impl TextCleaner {
    pub fn new() -> Result<Self> {
        Ok(Self {
            spaces: Regex::new(r"[ \t]+")?,
            blank_lines: Regex::new(r"\n\s*\n")?,
            page_numbers: Regex::new(r"Page \d+ of \d+")?,
            statement_period: Regex::new(r"Statement Period:.*?\n")?,
            account_number: Regex::new(r"Account: \d{4}-\d{4}-\d{4}-\d{4}")?,
        })
    }

    pub fn clean(&self, text: &str) -> String {
        let text = self.spaces.replace_all(text, " ");
        let text = self.blank_lines.replace_all(&text, "\n");
        let text = self.page_numbers.replace_all(&text, "");
        let text = self.statement_period.replace_all(&text, "");
        let text = self.account_number.replace_all(&text, "");
        text.trim().to_string()
    }
}
