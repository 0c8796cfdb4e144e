//! Drops rows that must never reach classification.

use spendscope_ingest::RawRecord;

use crate::rules::RuleSet;

/// The export's header row carries this in the date column
pub const HEADER_SENTINEL: &str = "Booking date";

/// Not-yet-settled rows carry this in the date column
pub const PENDING_MARKER: &str = "pending";

/// Why a row was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Header,
    Pending,
    /// Title matched this skip pattern
    Excluded(String),
}

/// Pure predicate over raw rows
#[derive(Debug, Clone)]
pub struct SkipFilter {
    /// (original, lowercased)
    patterns: Vec<(String, String)>,
}

impl SkipFilter {
    pub fn new(rules: &RuleSet) -> Self {
        Self {
            patterns: rules
                .skip
                .iter()
                .map(|p| (p.clone(), p.to_lowercase()))
                .collect(),
        }
    }

    pub fn skip_reason(&self, record: &RawRecord) -> Option<SkipReason> {
        let date = record.booking_date.trim();
        if date.ends_with(HEADER_SENTINEL) {
            return Some(SkipReason::Header);
        }
        if date.eq_ignore_ascii_case(PENDING_MARKER) {
            return Some(SkipReason::Pending);
        }

        let title = record.title.to_lowercase();
        self.patterns
            .iter()
            .find(|(_, lower)| title.contains(lower.as_str()))
            .map(|(original, _)| SkipReason::Excluded(original.clone()))
    }

    pub fn should_skip(&self, record: &RawRecord) -> bool {
        self.skip_reason(record).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> SkipFilter {
        SkipFilter::new(&RuleSet::default())
    }

    #[test]
    fn test_header_row_with_bom() {
        let header = RawRecord::new("\u{feff}Booking date", "Amount", "Title", "Currency");
        assert_eq!(filter().skip_reason(&header), Some(SkipReason::Header));
    }

    #[test]
    fn test_pending_row() {
        let pending = RawRecord::new("Pending", "-12,00", "LIDL HKI-KONALA", "EUR");
        assert_eq!(filter().skip_reason(&pending), Some(SkipReason::Pending));
        let upper = RawRecord::new(" PENDING ", "-12,00", "LIDL HKI-KONALA", "EUR");
        assert!(filter().should_skip(&upper));
    }

    #[test]
    fn test_excluded_counterparty_case_insensitive() {
        let atm = RawRecord::new("2022/10/03", "-40,00", "Otto atm Kamppi", "EUR");
        assert_eq!(
            filter().skip_reason(&atm),
            Some(SkipReason::Excluded("ATM".to_string()))
        );
    }

    #[test]
    fn test_regular_row_passes() {
        let row = RawRecord::new("2022/10/11", "-27,37", "ALEPA MALMINKARTANO", "EUR");
        assert!(!filter().should_skip(&row));
    }

    #[test]
    fn test_empty_skip_list() {
        let f = SkipFilter::new(&RuleSet { skip: vec![], groups: vec![] });
        let atm = RawRecord::new("2022/10/03", "-40,00", "ATM Kamppi", "EUR");
        assert!(!f.should_skip(&atm));
    }
}
