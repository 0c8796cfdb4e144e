//! Shop-name rules as data: one ordered pattern group per category plus the
//! skip list. Matching is a case-insensitive substring test.
//!
//! Group order is the classification priority. The built-in set follows
//! `Category::ALL`; a rules file may reorder groups, and its file order then
//! becomes the priority.

use serde::{Deserialize, Serialize};
use spendscope_core::Category;
use std::collections::HashSet;

use crate::error::RulesError;

/// Patterns that put a label into one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleGroup {
    pub category: Category,
    pub patterns: Vec<String>,
}

impl RuleGroup {
    pub fn new(category: Category, patterns: &[&str]) -> Self {
        Self {
            category,
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// The complete rule configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Counterparties whose transactions are ignored entirely
    #[serde(default)]
    pub skip: Vec<String>,
    #[serde(default, rename = "group")]
    pub groups: Vec<RuleGroup>,
}

impl RuleSet {
    /// Parse and validate a TOML rules document.
    pub fn from_toml_str(s: &str) -> Result<Self, RulesError> {
        let rules: RuleSet = toml::from_str(s)?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn to_toml_string(&self) -> Result<String, RulesError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), RulesError> {
        if self.skip.iter().any(|p| p.trim().is_empty()) {
            return Err(RulesError::EmptyPattern("skip".to_string()));
        }

        let mut seen = HashSet::new();
        for group in &self.groups {
            if group.category == Category::Other {
                return Err(RulesError::OtherGroup);
            }
            if !seen.insert(group.category) {
                return Err(RulesError::DuplicateGroup(group.category));
            }
            if group.patterns.iter().any(|p| p.trim().is_empty()) {
                return Err(RulesError::EmptyPattern(group.category.to_string()));
            }
        }
        Ok(())
    }
}

/// Built-in rules for a Helsinki-area household account.
impl Default for RuleSet {
    fn default() -> Self {
        Self {
            skip: vec!["ATM".to_string(), "ROMANOV ALEKSANDR".to_string()],
            groups: vec![
                RuleGroup::new(
                    Category::Food,
                    &[
                        "ALEPA",
                        "LIDL",
                        "PRISMA",
                        "K-supermarket",
                        "K-market",
                        "S-Market",
                        "K-Citymarket",
                    ],
                ),
                RuleGroup::new(
                    Category::HouseAndFurniture,
                    &[
                        "Asunto Oy Kuparikartano",
                        "TIKHOMIROV V TAI WEINER C",
                        "Helen Oy",
                        "IKEA",
                        "K-Rauta",
                    ],
                ),
                RuleGroup::new(Category::CarAndTransport, &["NESTE", "HSL", "HELPPOKATSASTUS"]),
                RuleGroup::new(Category::Kids, &["Phoenix Partners Ky/LaughLearn"]),
                RuleGroup::new(Category::Insurance, &["LahiTapiola", "If Vahinkovakuutus", "Fennia"]),
                RuleGroup::new(Category::Travel, &["FINNLINES", "FINNAIR", "VIKING LINE"]),
                RuleGroup::new(Category::SportEatFun, &["Rami's Coffee", "RAVINTOLA", "ELIXIA"]),
                RuleGroup::new(Category::Health, &["APTEEKKI", "Terveystalo", "Mehilainen"]),
                RuleGroup::new(Category::Investments, &["NORDNET", "SELIGSON"]),
            ],
        }
    }
}
