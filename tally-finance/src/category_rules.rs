//! Deterministic category rules mapping descriptions to category labels.
//!
//! Groups are checked in order against the lower-cased description; the first
//! group with any keyword hit decides. Nothing matches -> Other.

use tally_core::config::canonical_category_rules;
use tally_core::{Category, CategoryRule};

use crate::sign_rules::contains_any;

#[derive(Debug, Clone)]
pub struct Categorizer {
    rules: Vec<(Category, Vec<String>)>,
}

impl Categorizer {
    pub fn new(rules: &[CategoryRule]) -> Self {
        Self {
            rules: rules
                .iter()
                .map(|r| {
                    let keywords = r.keywords.iter().map(|k| k.to_lowercase()).collect();
                    (r.category, keywords)
                })
                .collect(),
        }
    }

    pub fn categorize(&self, description: &str) -> Category {
        let desc = description.to_lowercase();
        self.rules
            .iter()
            .find(|(_, keywords)| contains_any(&desc, keywords))
            .map(|(category, _)| *category)
            .unwrap_or(Category::Other)
    }

    /// Distinct labels this categorizer can produce, in evaluation order
    pub fn labels(&self) -> Vec<Category> {
        let mut out: Vec<Category> = Vec::new();
        for (category, _) in &self.rules {
            if !out.contains(category) {
                out.push(*category);
            }
        }
        if !out.contains(&Category::Other) {
            out.push(Category::Other);
        }
        out
    }
}

impl Default for Categorizer {
    fn default() -> Self {
        Self::new(&canonical_category_rules())
    }
}

/// Categorize with the canonical rule groups.
pub fn categorize(description: &str) -> Category {
    Categorizer::default().categorize(description)
}
