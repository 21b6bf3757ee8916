//! The statement pipeline: select lines, extract fields, normalize the date,
//! sign the amount, categorize, then summarize.
//!
//! A processor is immutable once built and can be shared across threads.

use chrono::Utc;
use tally_core::{Metadata, ProcessResult, ProcessorConfig, Result, Transaction};
use tally_ingest::{
    decode_statement, DateNormalizer, FieldExtractor, LineSelector, MerchantCleaner, TextCleaner,
};
use tracing::{debug, info, warn};

use crate::aggregator::Aggregator;
use crate::category_rules::Categorizer;
use crate::sign_rules::SignClassifier;

#[derive(Debug, Clone)]
pub struct StatementProcessor {
    config: ProcessorConfig,
    cleaner: Option<TextCleaner>,
    selector: LineSelector,
    extractor: FieldExtractor,
    dates: DateNormalizer,
    signs: SignClassifier,
    categorizer: Categorizer,
    merchants: Option<MerchantCleaner>,
}

impl StatementProcessor {
    pub fn new(config: ProcessorConfig) -> Result<Self> {
        config.validate()?;

        let cleaner = if config.clean_text {
            Some(TextCleaner::new()?)
        } else {
            None
        };
        let merchants = if config.merchant_cleanup {
            Some(MerchantCleaner::new()?)
        } else {
            None
        };

        Ok(Self {
            cleaner,
            selector: LineSelector::new(config.blacklist.as_slice())?,
            extractor: FieldExtractor::new()?,
            dates: DateNormalizer::new(config.fallback_year),
            signs: SignClassifier::new(&config.sign),
            categorizer: Categorizer::new(&config.categories),
            merchants,
            config,
        })
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    pub fn categorizer(&self) -> &Categorizer {
        &self.categorizer
    }

    /// Turn one line into a transaction.
    ///
    /// Does not apply the header blacklist; use [`Self::extract`] for whole texts.
    pub fn parse_line(&self, line: &str) -> Option<Transaction> {
        let fields = self.extractor.extract(line)?;
        let signed = self.signs.classify(line, fields.description, &fields.amount);

        let Some(date) = self.dates.normalize(fields.date_token) else {
            debug!(token = fields.date_token, "no date format matched");
            return None;
        };

        let merchant = match &self.merchants {
            Some(cleaner) => cleaner.clean(fields.description),
            None => fields.description.to_string(),
        };
        let category = self.categorizer.categorize(fields.description);

        Some(Transaction::new(
            date,
            fields.description,
            signed.amount,
            merchant,
            category,
        ))
    }

    /// All transactions in `text`, in source order.
    pub fn extract(&self, text: &str) -> Vec<Transaction> {
        let candidates = self.selector.select(text);
        let mut out = Vec::with_capacity(candidates.len());

        for raw in &candidates {
            match self.parse_line(raw.text) {
                Some(txn) => out.push(txn),
                None => debug!(line = raw.number, "dropping candidate line"),
            }
        }

        debug!(candidates = candidates.len(), extracted = out.len(), "line scan done");
        out
    }

    /// Process already-decoded statement text.
    pub fn process_text(&self, text: &str) -> ProcessResult {
        let cleaned;
        let text = match &self.cleaner {
            Some(cleaner) => {
                cleaned = cleaner.clean(text);
                cleaned.as_str()
            }
            None => text,
        };

        let transactions = self.extract(text);
        let summary = Aggregator::summarize(&transactions);
        let metadata = Metadata {
            processed_at: Utc::now(),
            extracted_text_length: text.chars().count(),
            transaction_lines_found: transactions.len(),
            date_range: Aggregator::date_range(&transactions),
        };

        info!(
            transactions = summary.total_transactions,
            income = summary.total_income,
            expenses = summary.total_expenses,
            "statement processed"
        );

        ProcessResult::success(transactions, summary, metadata)
    }

    /// Process raw uploaded bytes; decode failures become a failed result.
    pub fn process_bytes(&self, bytes: &[u8]) -> ProcessResult {
        match decode_statement(bytes) {
            Ok(text) => self.process_text(text),
            Err(err) => {
                warn!(error = %err, "statement rejected");
                ProcessResult::failure(err)
            }
        }
    }
}

/// One-shot helper: build a processor from `config` and run it over `bytes`.
///
/// Invalid configuration is reported through the failed result shape as well.
pub fn process_statement(bytes: &[u8], config: ProcessorConfig) -> ProcessResult {
    match StatementProcessor::new(config) {
        Ok(processor) => processor.process_bytes(bytes),
        Err(err) => {
            warn!(error = %err, "processor configuration rejected");
            ProcessResult::failure(err)
        }
    }
}
