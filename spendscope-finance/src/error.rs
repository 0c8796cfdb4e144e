use spendscope_core::Category;
use thiserror::Error;

/// Errors raised while analyzing a statement batch
#[derive(Debug, Error)]
pub enum FinanceError {
    /// Category totals no longer add up to the month total. Means a
    /// transaction was counted twice or landed in no category.
    #[error("sum is wrong for {month}: categories add up to {categories} cents, month total is {total} cents")]
    Consistency {
        month: String,
        categories: i128,
        total: i64,
    },

    /// A month or category total left the 64-bit cent range
    #[error("adding '{title}' overflows the {month} totals")]
    Overflow { month: String, title: String },

    /// A settled row whose date or amount could not be parsed
    #[error("row {index} ('{title}'): {reason}")]
    Record {
        index: usize,
        title: String,
        reason: String,
    },
}

/// Problems with a rule set
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("category 'other' is the fallback and cannot have a rule group")]
    OtherGroup,

    #[error("category '{0}' has more than one rule group")]
    DuplicateGroup(Category),

    #[error("empty pattern in {0} rules")]
    EmptyPattern(String),

    #[error("parse rules: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("serialize rules: {0}")]
    Serialize(#[from] toml::ser::Error),
}
