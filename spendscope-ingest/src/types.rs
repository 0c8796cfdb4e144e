use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use spendscope_core::{Transaction, parse_amount, parse_booking_date};

/// One statement row exactly as exported, all fields still text.
///
/// Field order matches the export column order; rows are deserialized by
/// position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub booking_date: String,
    pub amount: String,
    pub sender: String,
    pub recipient: String,
    pub name: String,
    /// Counterparty label (shop name)
    pub title: String,
    pub reference_number: String,
    pub currency: String,
}

impl RawRecord {
    pub const FIELD_COUNT: usize = 8;

    /// Convenience constructor for the fields the analyzer reads
    pub fn new(booking_date: &str, amount: &str, title: &str, currency: &str) -> Self {
        Self {
            booking_date: booking_date.to_string(),
            amount: amount.to_string(),
            sender: String::new(),
            recipient: String::new(),
            name: String::new(),
            title: title.to_string(),
            reference_number: String::new(),
            currency: currency.to_string(),
        }
    }

    /// Parse date and amount into a typed transaction.
    pub fn to_transaction(&self) -> Result<Transaction> {
        let date = parse_booking_date(&self.booking_date)
            .with_context(|| format!("record '{}'", self.title))?;
        let amount =
            parse_amount(&self.amount).with_context(|| format!("record '{}'", self.title))?;

        Ok(Transaction {
            date,
            amount,
            title: self.title.trim().to_string(),
            currency: self.currency.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use spendscope_core::Cents;

    #[test]
    fn test_to_transaction() {
        let raw = RawRecord::new("2022/10/11", "-27,37", "ALEPA MALMINKARTANO", "EUR");
        let txn = raw.to_transaction().unwrap();
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2022, 10, 11).unwrap());
        assert_eq!(txn.amount, Cents::new(-2737));
        assert_eq!(txn.title, "ALEPA MALMINKARTANO");
        assert_eq!(txn.currency, "EUR");
    }

    #[test]
    fn test_to_transaction_dotted_date() {
        let raw = RawRecord::new("05.10.2022", "-734,8", "Asunto Oy Kuparikartano", "EUR");
        let txn = raw.to_transaction().unwrap();
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2022, 10, 5).unwrap());
        assert_eq!(txn.amount, Cents::new(-73480));
    }

    #[test]
    fn test_to_transaction_errors_name_the_record() {
        let raw = RawRecord::new("yesterday", "-1,00", "HSL Mobiili", "EUR");
        let err = raw.to_transaction().unwrap_err();
        assert!(format!("{err:#}").contains("HSL Mobiili"));
    }
}
