//! Per-month accumulation of classified expenses.
//!
//! One `Aggregator` belongs to one batch. `finish` consumes it, so a run's
//! buckets can never leak into the next run.

use spendscope_core::{Category, Cents, ExpenseDetail, Transaction};
use std::collections::HashMap;

use crate::error::FinanceError;

const CATEGORY_COUNT: usize = Category::ALL.len();

/// Running totals and details for one "Month Year" label
#[derive(Debug, Clone, PartialEq)]
pub struct MonthBucket {
    label: String,
    totals: [Cents; CATEGORY_COUNT],
    sum: Cents,
    details: [Vec<ExpenseDetail>; CATEGORY_COUNT],
}

impl MonthBucket {
    fn new(label: String) -> Self {
        Self {
            label,
            totals: [Cents::ZERO; CATEGORY_COUNT],
            sum: Cents::ZERO,
            details: std::array::from_fn(|_| Vec::new()),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Signed total for one category
    pub fn total(&self, category: Category) -> Cents {
        self.totals[category.index()]
    }

    /// Signed total for the whole month
    pub fn sum(&self) -> Cents {
        self.sum
    }

    /// Details in input order
    pub fn details(&self, category: Category) -> &[ExpenseDetail] {
        &self.details[category.index()]
    }

    pub fn transaction_count(&self) -> usize {
        self.details.iter().map(Vec::len).sum()
    }

    /// Both totals must keep a representable magnitude, otherwise the bucket
    /// is left untouched.
    fn add(&mut self, txn: &Transaction, category: Category) -> Result<(), FinanceError> {
        let i = category.index();
        let fits = |c: Option<Cents>| c.filter(|c| c.checked_abs().is_some());
        let (Some(total), Some(sum)) = (
            fits(self.totals[i].checked_add(txn.amount)),
            fits(self.sum.checked_add(txn.amount)),
        ) else {
            return Err(FinanceError::Overflow {
                month: self.label.clone(),
                title: txn.title.clone(),
            });
        };

        self.totals[i] = total;
        self.sum = sum;
        self.details[i].push(ExpenseDetail::from_transaction(txn));
        Ok(())
    }

    /// Category totals must add up to the month total.
    pub fn check_consistency(&self) -> Result<(), FinanceError> {
        let categories: i128 = self.totals.iter().map(|c| i128::from(c.get())).sum();
        if categories != i128::from(self.sum.get()) {
            return Err(FinanceError::Consistency {
                month: self.label.clone(),
                categories,
                total: self.sum.get(),
            });
        }
        Ok(())
    }
}

/// Builds month buckets in first-occurrence order
#[derive(Debug, Default)]
pub struct Aggregator {
    buckets: Vec<MonthBucket>,
    by_label: HashMap<String, usize>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one classified transaction to its month. The caller decides which
    /// transactions count (the analyzer only passes expenses).
    pub fn accumulate(&mut self, txn: &Transaction, category: Category) -> Result<(), FinanceError> {
        let label = txn.month_label();
        let idx = match self.by_label.get(&label) {
            Some(&idx) => idx,
            None => {
                let idx = self.buckets.len();
                self.by_label.insert(label.clone(), idx);
                self.buckets.push(MonthBucket::new(label));
                idx
            }
        };

        let bucket = &mut self.buckets[idx];
        bucket.add(txn, category)?;
        bucket.check_consistency()
    }

    pub fn month_count(&self) -> usize {
        self.buckets.len()
    }

    /// Finalized buckets in first-occurrence order
    pub fn finish(self) -> Vec<MonthBucket> {
        self.buckets
    }
}
