//! Date utilities: booking-date parsing and the labels used in reports.

use anyhow::{Result, anyhow};
use chrono::NaiveDate;

/// Rewrite `DD.MM.YYYY` into `YYYY/MM/DD`; other inputs are returned trimmed.
pub fn normalize_booking_date(raw: &str) -> String {
    let s = raw.trim();
    let parts: Vec<_> = s.split('.').collect();
    if let [day, month, year] = parts.as_slice() {
        return format!("{year}/{month}/{day}");
    }
    s.to_string()
}

/// Parse a booking date in `YYYY/MM/DD` or `DD.MM.YYYY` form.
pub fn parse_booking_date(raw: &str) -> Result<NaiveDate> {
    let normalized = normalize_booking_date(raw);
    NaiveDate::parse_from_str(&normalized, "%Y/%m/%d")
        .map_err(|e| anyhow!("invalid booking date '{}': {e}", raw.trim()))
}

/// Month bucket key, e.g. `October 2022`.
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Human-readable date used in transaction listings, e.g. `Tue Oct 11 2022`.
pub fn display_date(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_both_formats() {
        let expected = NaiveDate::from_ymd_opt(2022, 10, 7).unwrap();
        assert_eq!(parse_booking_date("2022/10/07").unwrap(), expected);
        assert_eq!(parse_booking_date("07.10.2022").unwrap(), expected);
        assert_eq!(parse_booking_date(" 7.10.2022 ").unwrap(), expected);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(parse_booking_date("Pending").is_err());
        assert!(parse_booking_date("2022-10-07").is_err());
        assert!(parse_booking_date("31.02.2022").is_err());
    }

    #[test]
    fn test_labels() {
        let d = NaiveDate::from_ymd_opt(2022, 10, 5).unwrap();
        assert_eq!(month_label(d), "October 2022");
        assert_eq!(display_date(d), "Wed Oct 05 2022");
    }
}
