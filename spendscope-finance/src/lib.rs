//! spendscope-finance: shop rules, classification, monthly aggregation and reporting

pub mod aggregator;
pub mod analyzer;
pub mod classifier;
pub mod error;
pub mod projection;
pub mod report;
pub mod rules;
pub mod skip_filter;

pub use aggregator::{Aggregator, MonthBucket};
pub use analyzer::{Analyzer, BatchStats};
pub use classifier::Classifier;
pub use error::{FinanceError, RulesError};
pub use projection::SavingsPlan;
pub use report::{ReportDocument, ReportFormat, build_report};
pub use rules::{RuleGroup, RuleSet};
pub use skip_filter::{SkipFilter, SkipReason};
