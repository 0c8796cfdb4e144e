//! Turns finalized month buckets into the JSON report.
//!
//! Amounts in the report are absolute euro values. Map-shaped fields are
//! serialized in a fixed order so identical input gives identical bytes.

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use spendscope_core::money::{round2, serialize_major, serialize_number};
use spendscope_core::{Category, Cents, ExpenseDetail, display_date};
use std::fmt;
use std::str::FromStr;

use crate::aggregator::MonthBucket;

pub const CURRENCY_WORD: &str = "euros";
pub const AVERAGE_KEY: &str = "on average";

/// Which top-level shape to write
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Bare array of month entries
    Flat,
    /// Month entries plus the cross-month average
    #[default]
    Summary,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "flat" => Ok(ReportFormat::Flat),
            "summary" => Ok(ReportFormat::Summary),
            other => Err(format!("unknown report format '{other}' (expected flat or summary)")),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Flat => f.write_str("flat"),
            ReportFormat::Summary => f.write_str("summary"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDocument {
    pub average_month_expenses: String,
    pub monthly_expenses: Vec<MonthReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthReport {
    pub month: String,
    pub sum: String,
    pub categories: CategoryReports,
}

/// Per-category entries in `Category::ALL` order
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryReports(pub Vec<(Category, CategoryReport)>);

impl CategoryReports {
    pub fn get(&self, category: Category) -> Option<&CategoryReport> {
        self.0.iter().find(|(c, _)| *c == category).map(|(_, r)| r)
    }
}

impl Serialize for CategoryReports {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (category, report) in &self.0 {
            map.serialize_entry(category.name(), report)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryReport {
    #[serde(serialize_with = "serialize_major")]
    pub amount: Cents,
    #[serde(serialize_with = "serialize_number")]
    pub percentage: f64,
    pub transactions: Listing,
}

/// Numbered transaction descriptions plus the optional average entry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listing {
    pub entries: Vec<String>,
    pub average: Option<String>,
}

impl Serialize for Listing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.entries.len() + usize::from(self.average.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        for (i, entry) in self.entries.iter().enumerate() {
            map.serialize_entry(&(i + 1).to_string(), entry)?;
        }
        if let Some(avg) = &self.average {
            map.serialize_entry(AVERAGE_KEY, avg)?;
        }
        map.end()
    }
}

impl ReportDocument {
    /// Pretty JSON with four-space indentation
    pub fn to_json(&self, format: ReportFormat) -> serde_json::Result<String> {
        match format {
            ReportFormat::Flat => to_pretty_json(&self.monthly_expenses),
            ReportFormat::Summary => to_pretty_json(self),
        }
    }
}

fn to_pretty_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// `round(|part| / |whole| * 100, 2)`, zero when the month is empty.
pub fn percentage(part: Cents, whole: Cents) -> f64 {
    if whole.get() == 0 {
        return 0.0;
    }
    round2(part.abs().get() as f64 / whole.abs().get() as f64 * 100.0)
}

/// Details belonging to `month`, largest first. Equal amounts keep input order.
pub fn month_listing<'a>(details: &'a [ExpenseDetail], month: &str) -> Vec<&'a ExpenseDetail> {
    let mut listed: Vec<_> = details.iter().filter(|d| d.month_label() == month).collect();
    // sort_by is stable
    listed.sort_by(|a, b| b.amount.cmp(&a.amount));
    listed
}

/// Floor of the mean absolute amount, `None` for an empty listing.
pub fn average_amount(listed: &[&ExpenseDetail]) -> Option<Cents> {
    if listed.is_empty() {
        return None;
    }
    // i128 so the sum cannot overflow; the mean of i64 magnitudes fits in i64
    let total: i128 = listed.iter().map(|d| i128::from(d.amount.get()).abs()).sum();
    Some(Cents::new((total / listed.len() as i128) as i64))
}

pub fn describe(detail: &ExpenseDetail) -> String {
    format!(
        "spent {} {CURRENCY_WORD} in {} on {}",
        detail.amount.abs(),
        detail.shop,
        display_date(detail.date)
    )
}

fn describe_average(amount: Cents) -> String {
    format!("spent on average {amount} {CURRENCY_WORD} per transaction")
}

fn category_report(bucket: &MonthBucket, category: Category) -> CategoryReport {
    let listed = month_listing(bucket.details(category), bucket.label());
    CategoryReport {
        amount: bucket.total(category).abs(),
        percentage: percentage(bucket.total(category), bucket.sum()),
        transactions: Listing {
            entries: listed.iter().map(|d| describe(d)).collect(),
            average: average_amount(&listed).map(describe_average),
        },
    }
}

pub fn month_report(bucket: &MonthBucket) -> MonthReport {
    MonthReport {
        month: bucket.label().to_string(),
        sum: format!("{} {CURRENCY_WORD}", bucket.sum().abs()),
        categories: CategoryReports(
            Category::ALL
                .into_iter()
                .map(|c| (c, category_report(bucket, c)))
                .collect(),
        ),
    }
}

/// Total expense divided by month count, rounded to whole cents.
pub fn average_month_expense(buckets: &[MonthBucket]) -> Cents {
    if buckets.is_empty() {
        return Cents::ZERO;
    }
    let total: i128 = buckets.iter().map(|b| i128::from(b.sum().get()).abs()).sum();
    let avg = (total as f64 / buckets.len() as f64).round();
    Cents::new(avg as i64)
}

/// Build the report. Month order is the buckets' order.
pub fn build_report(buckets: &[MonthBucket]) -> ReportDocument {
    ReportDocument {
        average_month_expenses: format!("{} {CURRENCY_WORD}", average_month_expense(buckets)),
        monthly_expenses: buckets.iter().map(month_report).collect(),
    }
}
