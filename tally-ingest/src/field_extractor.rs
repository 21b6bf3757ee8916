//! Field extraction from a single candidate line.
//!
//! Expected rows after PDF-to-text (withdrawal, deposit and balance columns):
//!   06/01       Rent Bill                      $670.00                  $33,902.23
//!   06/15       Deposit                                        $7,245.00 $41,463.93
//!
//! The first dollar amount on the line is taken as the transaction amount;
//! running balances come after it. Columns are not validated.

use regex::Regex;
use tally_core::Result;

use crate::types::{AmountToken, ExtractedFields};

/// `06/01`, `6-1-24`, `01/15/2024`
pub const DATE_PATTERN: &str = r"\d{1,2}[/-]\d{1,2}(?:[/-]\d{2,4})?";

/// `$670.00`, `$33,902.23`, `- $14.05`, `($5.00)`
///
/// A leading `-` or `(` is captured as polarity but stays outside the token.
pub const AMOUNT_PATTERN: &str =
    r"(?P<polarity>-\s*|\()?(?P<token>\$(?P<value>\d{1,3}(?:,\d{3})*\.\d{2}))";

#[derive(Debug, Clone)]
pub struct FieldExtractor {
    date_re: Regex,
    amount_re: Regex,
}

impl FieldExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            date_re: Regex::new(DATE_PATTERN)?,
            amount_re: Regex::new(AMOUNT_PATTERN)?,
        })
    }

    pub fn has_date(&self, line: &str) -> bool {
        self.date_re.is_match(line)
    }

    pub fn has_amount(&self, line: &str) -> bool {
        self.amount_re.is_match(line)
    }

    /// All amount tokens on the line, in order of appearance.
    pub fn amounts<'a>(&self, line: &'a str) -> Vec<AmountToken<'a>> {
        self.amount_re
            .captures_iter(line)
            .filter_map(|caps| {
                let token = caps.name("token")?;
                let value: f64 = caps.name("value")?.as_str().replace(',', "").parse().ok()?;
                Some(AmountToken {
                    text: token.as_str(),
                    start: token.start(),
                    value,
                    negative: caps.name("polarity").is_some(),
                })
            })
            .collect()
    }

    /// Pull the date token, first amount and description out of `line`.
    ///
    /// Returns `None` when the line has no date token or no amount token.
    ///
    /// The description ends at the first occurrence of the chosen amount's
    /// `$` literal, so a polarity marker stays in the description. If that
    /// literal also appears earlier in the line, the cut happens there; if it
    /// falls before the date, the description is empty.
    pub fn extract<'a>(&self, line: &'a str) -> Option<ExtractedFields<'a>> {
        let date = self.date_re.find(line)?;
        let amount = self.amounts(line).into_iter().next()?;

        let anchor = line.find(amount.text).unwrap_or(amount.start);
        let description = if anchor >= date.end() {
            line[date.end()..anchor].trim()
        } else {
            ""
        };

        Some(ExtractedFields {
            date_token: date.as_str(),
            description,
            amount,
        })
    }
}
