//! Merchant name cleanup.
//!
//! Card processors prefix descriptions with the payment channel and append
//! location or posting-date suffixes:
//!   POS STARBUCKS STORE 1234 SEATTLE WA 06/02
//! Cleanup keeps only the merchant part.

use regex::Regex;
use tally_core::Result;

/// Channel prefixes, matched case-insensitively; only the first hit is removed.
pub const CHANNEL_PREFIXES: &[&str] = &[
    "POS ",
    "ATM ",
    "ONLINE ",
    "MOBILE ",
    "DEBIT CARD ",
    "CREDIT CARD ",
    "ACH ",
    "WIRE ",
    "TRANSFER ",
];

#[derive(Debug, Clone)]
pub struct MerchantCleaner {
    zip_code: Regex,
    state_and_date: Regex,
    trailing_date: Regex,
}

impl MerchantCleaner {
    pub fn new() -> Result<Self> {
        Ok(Self {
            zip_code: Regex::new(r"\s+\d{5}(-\d{4})?$")?,
            state_and_date: Regex::new(r"\s+[A-Z]{2}\s+\d{2}/\d{2}$")?,
            trailing_date: Regex::new(r"\s+\d{2}/\d{2}$")?,
        })
    }

    pub fn clean(&self, description: &str) -> String {
        let merchant = strip_channel_prefix(description);
        let merchant = self.zip_code.replace(merchant, "");
        let merchant = self.state_and_date.replace(&merchant, "");
        let merchant = self.trailing_date.replace(&merchant, "");
        merchant.trim().to_string()
    }
}

fn strip_channel_prefix(description: &str) -> &str {
    for prefix in CHANNEL_PREFIXES {
        let head = description.get(..prefix.len());
        if head.is_some_and(|h| h.eq_ignore_ascii_case(prefix)) {
            return &description[prefix.len()..];
        }
    }
    description
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cleaner() -> MerchantCleaner {
        MerchantCleaner::new().unwrap()
    }

    #[test]
    fn test_strips_prefix_and_state_date() {
        assert_eq!(
            cleaner().clean("POS STARBUCKS STORE 1234 SEATTLE WA 06/02"),
            "STARBUCKS STORE 1234 SEATTLE"
        );
    }

    #[test]
    fn test_prefix_is_case_insensitive_and_single() {
        assert_eq!(cleaner().clean("ach transfer PAYROLL ACME"), "transfer PAYROLL ACME");
        assert_eq!(cleaner().clean("Debit Card AMAZON MKTP"), "AMAZON MKTP");
    }

    #[test]
    fn test_strips_zip_codes() {
        assert_eq!(cleaner().clean("SHELL OIL 78666"), "SHELL OIL");
        assert_eq!(cleaner().clean("SHELL OIL 78666-1234"), "SHELL OIL");
    }

    #[test]
    fn test_strips_trailing_date() {
        assert_eq!(cleaner().clean("ONLINE NETFLIX.COM 06/14"), "NETFLIX.COM");
    }

    #[test]
    fn test_plain_description_unchanged() {
        assert_eq!(cleaner().clean("Rent Bill"), "Rent Bill");
        assert_eq!(cleaner().clean(""), "");
        assert_eq!(cleaner().clean("Café Olé"), "Café Olé");
    }
}
