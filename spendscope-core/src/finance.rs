//! Finance record types shared by the ingest and analysis crates

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Cents;
use crate::time::month_label;

/// Spending categories. Declaration order is the classification priority.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    #[serde(rename = "food")]
    Food,
    #[serde(rename = "houseAndFurniture")]
    HouseAndFurniture,
    #[serde(rename = "carAndTransport")]
    CarAndTransport,
    #[serde(rename = "kids")]
    Kids,
    #[serde(rename = "insurance")]
    Insurance,
    #[serde(rename = "travel")]
    Travel,
    #[serde(rename = "sportEatFun")]
    SportEatFun,
    #[serde(rename = "health")]
    Health,
    #[serde(rename = "investments")]
    Investments,
    #[serde(rename = "other")]
    Other,
}

impl Category {
    /// Every category, in priority order. `Other` is always last.
    pub const ALL: [Category; 10] = [
        Category::Food,
        Category::HouseAndFurniture,
        Category::CarAndTransport,
        Category::Kids,
        Category::Insurance,
        Category::Travel,
        Category::SportEatFun,
        Category::Health,
        Category::Investments,
        Category::Other,
    ];

    /// Report key for this category
    pub fn name(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::HouseAndFurniture => "houseAndFurniture",
            Category::CarAndTransport => "carAndTransport",
            Category::Kids => "kids",
            Category::Insurance => "insurance",
            Category::Travel => "travel",
            Category::SportEatFun => "sportEatFun",
            Category::Health => "health",
            Category::Investments => "investments",
            Category::Other => "other",
        }
    }

    pub fn from_name(name: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Position in `ALL`
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A settled statement transaction with typed fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    /// Negative = expense, positive = income
    pub amount: Cents,
    /// Counterparty label used for classification
    pub title: String,
    pub currency: String,
}

impl Transaction {
    pub fn is_expense(&self) -> bool {
        self.amount.is_expense()
    }

    pub fn month_label(&self) -> String {
        month_label(self.date)
    }
}

/// One expense as listed under its category in a month report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseDetail {
    pub shop: String,
    /// Absolute amount
    pub amount: Cents,
    pub date: NaiveDate,
}

impl ExpenseDetail {
    pub fn from_transaction(txn: &Transaction) -> Self {
        Self {
            shop: txn.title.clone(),
            amount: txn.amount.abs(),
            date: txn.date,
        }
    }

    pub fn month_label(&self) -> String {
        month_label(self.date)
    }
}
