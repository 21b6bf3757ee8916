//! Processor configuration: keyword tables, category rules and presets.
//!
//! Every table here is an ordered list. Rules are evaluated top to bottom and
//! the first hit wins, so reordering entries changes results.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TallyError};
use crate::finance::Category;

/// Year substituted for dates that carry no year (`06/01`).
pub const DEFAULT_FALLBACK_YEAR: i32 = 2024;

/// Header keywords checked by the canonical pipeline.
pub const NARROW_BLACKLIST: &[&str] = &["date", "description", "withdrawal", "balance"];

/// Header/footer/summary keywords checked by the detailed pipeline.
pub const STRICT_BLACKLIST: &[&str] = &[
    "date",
    "description",
    "withdrawal",
    "balance",
    "total",
    "summary",
    "statement",
    "account",
    "amount",
    "debit",
    "credit",
    "beginning",
    "ending",
    "available",
    "current",
];

pub const WITHDRAWAL_KEYWORDS: &[&str] = &[
    "bill",
    "withdrawal",
    "debit",
    "payment",
    "rent",
    "electric",
    "phone",
    "internet",
    "payroll",
    "tax",
    "purchase",
    "buy",
    "spent",
    "fee",
    "charge",
    "starbucks",
    "amazon",
    "target",
    "spotify",
    "gas",
    "meijer",
    "venmo",
    "apple",
    "store",
    "subscription",
    "transfer",
    "groceries",
    "supplies",
    "textbooks",
    "campus",
    "coffee",
    "restaurant",
    "food",
    "shopping",
];

pub const INCOME_KEYWORDS: &[&str] = &[
    "deposit",
    "salary",
    "payroll",
    "refund",
    "transfer in",
    "direct deposit",
    "interest",
    "dividend",
    "cashback",
];

pub const EXPENSE_KEYWORDS: &[&str] = &[
    "purchase",
    "payment",
    "withdrawal",
    "transfer out",
    "fee",
    "charge",
    "debit",
    "atm",
    "pos",
    "online",
    "mobile",
];

/// How the sign of an extracted amount is decided
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SignStrategy {
    /// Any withdrawal keyword anywhere on the line makes the amount negative.
    #[default]
    WithdrawalKeywords,
    /// Income keywords, then expense keywords, then the token's own polarity.
    IncomeExpense,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SignConfig {
    pub strategy: SignStrategy,
    pub withdrawal_keywords: Vec<String>,
    pub income_keywords: Vec<String>,
    pub expense_keywords: Vec<String>,
}

impl Default for SignConfig {
    fn default() -> Self {
        Self {
            strategy: SignStrategy::WithdrawalKeywords,
            withdrawal_keywords: owned(WITHDRAWAL_KEYWORDS),
            income_keywords: owned(INCOME_KEYWORDS),
            expense_keywords: owned(EXPENSE_KEYWORDS),
        }
    }
}

/// One keyword group of the categorizer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryRule {
    pub category: Category,
    pub keywords: Vec<String>,
}

impl CategoryRule {
    pub fn new(category: Category, keywords: &[&str]) -> Self {
        Self {
            category,
            keywords: owned(keywords),
        }
    }
}

/// Groups used by the canonical pipeline.
///
/// "payment" sits in both Bills and the trailing Income group; Bills is
/// evaluated first and wins.
pub fn canonical_category_rules() -> Vec<CategoryRule> {
    vec![
        CategoryRule::new(
            Category::Utilities,
            &["rent", "electric", "phone", "internet", "utilities"],
        ),
        CategoryRule::new(Category::Bills, &["bill", "payment"]),
        CategoryRule::new(Category::Income, &["deposit", "salary", "payroll"]),
        CategoryRule::new(Category::Interest, &["interest", "earned"]),
        CategoryRule::new(Category::Taxes, &["tax", "withholding"]),
        CategoryRule::new(Category::Income, &["check", "payment"]),
    ]
}

/// Merchant-oriented groups evaluated ahead of the canonical ones.
pub fn detailed_category_rules() -> Vec<CategoryRule> {
    let mut rules = vec![
        CategoryRule::new(
            Category::FoodAndDrink,
            &[
                "restaurant", "cafe", "coffee", "pizza", "burger", "food", "dining", "lunch",
                "dinner", "breakfast", "starbucks", "mcdonald", "subway", "kfc", "domino",
                "papa john",
            ],
        ),
        CategoryRule::new(
            Category::Transportation,
            &[
                "uber", "lyft", "taxi", "gas", "fuel", "parking", "metro", "bus", "train",
                "airline", "flight",
            ],
        ),
        CategoryRule::new(
            Category::Shopping,
            &[
                "amazon", "walmart", "target", "shop", "store", "purchase", "retail", "mall",
                "online",
            ],
        ),
        CategoryRule::new(
            Category::Entertainment,
            &[
                "netflix", "spotify", "movie", "cinema", "theater", "game", "entertainment",
                "subscription",
            ],
        ),
        CategoryRule::new(
            Category::Groceries,
            &[
                "grocery", "supermarket", "market", "safeway", "kroger", "whole foods",
                "trader joe",
            ],
        ),
        CategoryRule::new(
            Category::Utilities,
            &[
                "electric", "water", "gas bill", "internet", "phone", "utility", "cable", "wifi",
            ],
        ),
        CategoryRule::new(
            Category::Healthcare,
            &[
                "pharmacy", "medical", "doctor", "hospital", "health", "cvs", "walgreens",
            ],
        ),
        CategoryRule::new(
            Category::Education,
            &[
                "tuition", "school", "university", "college", "book", "textbook", "education",
            ],
        ),
    ];
    rules.extend(canonical_category_rules());
    rules
}

/// Immutable configuration handed to the statement processor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Year used when a date token has no year
    pub fallback_year: i32,
    /// Strip channel prefixes and location/date suffixes from merchants
    pub merchant_cleanup: bool,
    /// Collapse whitespace and drop page/period/account boilerplate first
    pub clean_text: bool,
    /// A line holding any of these (case-insensitive) is a header, not a transaction
    pub blacklist: Vec<String>,
    pub sign: SignConfig,
    pub categories: Vec<CategoryRule>,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self::canonical()
    }
}

impl ProcessorConfig {
    /// The simple pipeline: narrow blacklist, withdrawal keywords, six groups.
    pub fn canonical() -> Self {
        Self {
            fallback_year: DEFAULT_FALLBACK_YEAR,
            merchant_cleanup: false,
            clean_text: false,
            blacklist: owned(NARROW_BLACKLIST),
            sign: SignConfig::default(),
            categories: canonical_category_rules(),
        }
    }

    /// Richer heuristics: strict blacklist, income/expense sets, merchant
    /// cleanup, text cleaning and the merchant-oriented category groups.
    pub fn detailed() -> Self {
        Self {
            fallback_year: DEFAULT_FALLBACK_YEAR,
            merchant_cleanup: true,
            clean_text: true,
            blacklist: owned(STRICT_BLACKLIST),
            sign: SignConfig {
                strategy: SignStrategy::IncomeExpense,
                ..SignConfig::default()
            },
            categories: detailed_category_rules(),
        }
    }

    /// Look up a preset by name (`canonical` or `detailed`)
    pub fn preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "canonical" | "simple" => Some(Self::canonical()),
            "detailed" => Some(Self::detailed()),
            _ => None,
        }
    }

    /// Reject configurations that would make matching meaningless.
    pub fn validate(&self) -> Result<()> {
        if !(1..=9999).contains(&self.fallback_year) {
            return Err(TallyError::Config(format!(
                "fallback_year {} is outside 1..=9999",
                self.fallback_year
            )));
        }

        // An empty keyword is a substring of every line
        let tables = [
            ("blacklist", &self.blacklist),
            ("sign.withdrawal_keywords", &self.sign.withdrawal_keywords),
            ("sign.income_keywords", &self.sign.income_keywords),
            ("sign.expense_keywords", &self.sign.expense_keywords),
        ];
        for (name, table) in tables {
            if table.iter().any(|k| k.trim().is_empty()) {
                return Err(TallyError::Config(format!("{name} contains an empty keyword")));
            }
        }
        for rule in &self.categories {
            if rule.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(TallyError::Config(format!(
                    "category rule {} contains an empty keyword",
                    rule.category
                )));
            }
        }
        Ok(())
    }
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
