//! First-match classification of counterparty labels.

use spendscope_core::Category;

use crate::rules::RuleSet;

/// Ordered (category, lowercased patterns) pairs. `Other` is the implicit
/// last entry.
#[derive(Debug, Clone)]
pub struct Classifier {
    groups: Vec<(Category, Vec<String>)>,
}

impl Classifier {
    pub fn new(rules: &RuleSet) -> Self {
        Self {
            groups: rules
                .groups
                .iter()
                .map(|g| {
                    let patterns = g.patterns.iter().map(|p| p.to_lowercase()).collect();
                    (g.category, patterns)
                })
                .collect(),
        }
    }

    /// Category of the first group with a pattern contained in `label`.
    pub fn classify(&self, label: &str) -> Category {
        let label = label.to_lowercase();
        self.groups
            .iter()
            .find(|(_, patterns)| patterns.iter().any(|p| label.contains(p.as_str())))
            .map(|(category, _)| *category)
            .unwrap_or(Category::Other)
    }
}
