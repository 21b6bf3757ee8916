//! Candidate line selection.
//!
//! A line is kept when it carries both a date token and a dollar amount and
//! none of the blacklisted header keywords.

use tally_core::Result;
use tracing::trace;

use crate::field_extractor::FieldExtractor;
use crate::types::RawLine;

#[derive(Debug, Clone)]
pub struct LineSelector {
    tokens: FieldExtractor,
    /// Lower-cased, in configured order
    blacklist: Vec<String>,
}

impl LineSelector {
    pub fn new<S: AsRef<str>>(blacklist: &[S]) -> Result<Self> {
        Ok(Self {
            tokens: FieldExtractor::new()?,
            blacklist: blacklist.iter().map(|k| k.as_ref().to_lowercase()).collect(),
        })
    }

    /// First blacklisted keyword contained in `line`, if any.
    pub fn blacklisted(&self, line: &str) -> Option<&str> {
        let lower = line.to_lowercase();
        self.blacklist
            .iter()
            .find(|k| lower.contains(k.as_str()))
            .map(String::as_str)
    }

    pub fn is_candidate(&self, line: &str) -> bool {
        if !self.tokens.has_date(line) || !self.tokens.has_amount(line) {
            return false;
        }
        self.blacklisted(line).is_none()
    }

    /// Candidate lines of `text`, in source order.
    pub fn select<'a>(&self, text: &'a str) -> Vec<RawLine<'a>> {
        let mut out = Vec::new();

        for (idx, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if !self.tokens.has_date(line) || !self.tokens.has_amount(line) {
                continue;
            }

            if let Some(keyword) = self.blacklisted(line) {
                trace!(line = idx + 1, keyword, "skipping header line");
                continue;
            }

            out.push(RawLine {
                number: idx + 1,
                text: line,
            });
        }

        out
    }
}
