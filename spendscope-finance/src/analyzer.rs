//! The analysis pipeline: skip filter, classifier, aggregator, reporter.
//!
//! Rows are processed one at a time in input order. Every call to
//! [`Analyzer::aggregate`] starts from a fresh [`Aggregator`].

use spendscope_ingest::RawRecord;
use tracing::{debug, info, warn};

use crate::aggregator::{Aggregator, MonthBucket};
use crate::classifier::Classifier;
use crate::error::FinanceError;
use crate::report::{ReportDocument, build_report};
use crate::rules::RuleSet;
use crate::skip_filter::SkipFilter;

/// Row counts for one batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    pub rows: usize,
    pub skipped: usize,
    pub income: usize,
    pub expenses: usize,
}

#[derive(Debug, Clone)]
pub struct Analyzer {
    skip: SkipFilter,
    classifier: Classifier,
    expected_currency: Option<String>,
}

impl Analyzer {
    pub fn new(rules: &RuleSet) -> Self {
        Self {
            skip: SkipFilter::new(rules),
            classifier: Classifier::new(rules),
            expected_currency: None,
        }
    }

    /// Warn about rows in any other currency. Amounts are never converted.
    pub fn with_expected_currency(mut self, code: impl Into<String>) -> Self {
        self.expected_currency = Some(code.into());
        self
    }

    /// Consume the batch into month buckets.
    pub fn aggregate(&self, records: &[RawRecord]) -> Result<(Vec<MonthBucket>, BatchStats), FinanceError> {
        let mut agg = Aggregator::new();
        let mut stats = BatchStats {
            rows: records.len(),
            ..BatchStats::default()
        };

        for (index, record) in records.iter().enumerate() {
            if let Some(reason) = self.skip.skip_reason(record) {
                debug!(index, title = %record.title, ?reason, "skipping row");
                stats.skipped += 1;
                continue;
            }

            let txn = record.to_transaction().map_err(|e| FinanceError::Record {
                index,
                title: record.title.clone(),
                reason: format!("{e:#}"),
            })?;

            // Only expenses are analyzed
            if !txn.is_expense() {
                stats.income += 1;
                continue;
            }

            if let Some(expected) = &self.expected_currency {
                if !txn.currency.eq_ignore_ascii_case(expected) {
                    warn!(index, title = %txn.title, currency = %txn.currency, "unexpected currency, amount taken as-is");
                }
            }

            let category = self.classifier.classify(&txn.title);
            agg.accumulate(&txn, category)?;
            stats.expenses += 1;
        }

        info!(
            rows = stats.rows,
            skipped = stats.skipped,
            income = stats.income,
            expenses = stats.expenses,
            months = agg.month_count(),
            "batch aggregated"
        );
        Ok((agg.finish(), stats))
    }

    /// Aggregate and report in one step.
    pub fn analyze(&self, records: &[RawRecord]) -> Result<ReportDocument, FinanceError> {
        let (buckets, _) = self.aggregate(records)?;
        Ok(build_report(&buckets))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spendscope_core::{Category, Cents};

    fn analyzer() -> Analyzer {
        Analyzer::new(&RuleSet::default())
    }

    #[test]
    fn test_skips_header_pending_and_excluded() {
        let records = vec![
            RawRecord::new("Booking date", "Amount", "Title", "Currency"),
            RawRecord::new("Pending", "-12,00", "LIDL HKI-KONALA", "EUR"),
            RawRecord::new("2022/10/03", "-40,00", "ATM Kamppi", "EUR"),
            RawRecord::new("2022/10/11", "-27,37", "ALEPA MALMINKARTANO", "EUR"),
        ];
        let (buckets, stats) = analyzer().aggregate(&records).unwrap();
        assert_eq!(stats, BatchStats { rows: 4, skipped: 3, income: 0, expenses: 1 });
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].total(Category::Food), Cents::new(-2737));
        assert_eq!(buckets[0].sum(), Cents::new(-2737));
    }

    #[test]
    fn test_income_is_ignored() {
        let records = vec![
            RawRecord::new("2022/10/25", "2500,00", "ACME OY SALARY", "EUR"),
            RawRecord::new("2022/10/11", "-27,37", "ALEPA MALMINKARTANO", "EUR"),
            RawRecord::new("2022/10/12", "0,00", "ZERO ADJUSTMENT", "EUR"),
        ];
        let (buckets, stats) = analyzer().aggregate(&records).unwrap();
        assert_eq!(stats.income, 2);
        assert_eq!(buckets[0].sum(), Cents::new(-2737));
        assert_eq!(buckets[0].total(Category::Other), Cents::ZERO);
    }

    #[test]
    fn test_bad_row_aborts_with_position() {
        let records = vec![
            RawRecord::new("2022/10/11", "-27,37", "ALEPA", "EUR"),
            RawRecord::new("2022/10/12", "-abc", "LIDL", "EUR"),
        ];
        match analyzer().aggregate(&records) {
            Err(FinanceError::Record { index, title, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(title, "LIDL");
            }
            other => panic!("expected record error, got {other:?}"),
        }
    }

    #[test]
    fn test_runs_do_not_share_state() {
        let a = analyzer();
        let records = vec![RawRecord::new("2022/10/11", "-27,37", "ALEPA", "EUR")];
        let (first, _) = a.aggregate(&records).unwrap();
        let (second, _) = a.aggregate(&records).unwrap();
        assert_eq!(first, second);
        assert_eq!(second[0].details(Category::Food).len(), 1);
    }
}
