//! Money amounts kept in cents (minor units).
//!
//! All arithmetic happens on `i64` cents; conversion to euros only happens at
//! the edges (string rendering and JSON numbers).

use anyhow::{Context, Result, bail};
use regex::Regex;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A signed amount in cents. Negative = expense, positive = income.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cents(i64);

impl Cents {
    pub const ZERO: Cents = Cents(0);

    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn get(self) -> i64 {
        self.0
    }

    pub const fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Returns true for strictly negative amounts
    pub const fn is_expense(self) -> bool {
        self.0 < 0
    }

    pub const fn checked_add(self, rhs: Cents) -> Option<Cents> {
        match self.0.checked_add(rhs.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// `None` for `i64::MIN` cents, whose magnitude has no `i64` form
    pub const fn checked_abs(self) -> Option<Cents> {
        match self.0.checked_abs() {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Major units (euros) as a float. Zero stays exactly `0.0`.
    pub fn to_major(self) -> f64 {
        if self.0 == 0 {
            return 0.0;
        }
        self.0 as f64 / 100.0
    }
}

impl Add for Cents {
    type Output = Cents;

    fn add(self, rhs: Cents) -> Cents {
        Cents(self.0 + rhs.0)
    }
}

impl AddAssign for Cents {
    fn add_assign(&mut self, rhs: Cents) {
        self.0 += rhs.0;
    }
}

impl Sum for Cents {
    fn sum<I: Iterator<Item = Cents>>(iter: I) -> Cents {
        iter.fold(Cents::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Cents> for Cents {
    fn sum<I: Iterator<Item = &'a Cents>>(iter: I) -> Cents {
        iter.copied().sum()
    }
}

/// Renders the amount in major units with only significant decimals:
/// `17300` -> `173`, `73480` -> `734.8`, `2737` -> `27.37`, `0` -> `0`.
impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let (whole, frac) = (abs / 100, abs % 100);
        if frac == 0 {
            write!(f, "{sign}{whole}")
        } else if frac % 10 == 0 {
            write!(f, "{sign}{whole}.{}", frac / 10)
        } else {
            write!(f, "{sign}{whole}.{frac:02}")
        }
    }
}

/// Parse a statement amount into cents.
///
/// Accepts `-27,37`, `-2,8` (one fractional digit is padded: 280 cents),
/// `-27.37` and bare integers (`-173` = 17300 cents).
pub fn parse_amount(raw: &str) -> Result<Cents> {
    let amount_re = Regex::new(r"^(?P<sign>[+-])?(?P<whole>\d+)(?:[.,](?P<frac>\d{1,2}))?$")?;
    let Some(caps) = amount_re.captures(raw.trim()) else {
        bail!("unrecognized amount '{raw}'");
    };

    let whole: i64 = caps["whole"]
        .parse()
        .with_context(|| format!("amount out of range '{raw}'"))?;
    let frac: i64 = match caps.name("frac").map(|m| m.as_str()) {
        None => 0,
        Some(d) if d.len() == 1 => d.parse::<i64>()? * 10,
        Some(d) => d.parse()?,
    };

    let magnitude = whole
        .checked_mul(100)
        .and_then(|c| c.checked_add(frac))
        .with_context(|| format!("amount out of range '{raw}'"))?;

    let negative = caps.name("sign").map(|m| m.as_str()) == Some("-");
    Ok(Cents(if negative { -magnitude } else { magnitude }))
}

/// Round to two decimals, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Serialize a cent amount as a JSON number in major units.
/// Whole amounts are written as integers (`173`, `0`), others as decimals.
pub fn serialize_major<S: Serializer>(amount: &Cents, serializer: S) -> Result<S::Ok, S::Error> {
    if amount.get() % 100 == 0 {
        serializer.serialize_i64(amount.get() / 100)
    } else {
        serializer.serialize_f64(amount.to_major())
    }
}

/// Serialize a float as a JSON number, dropping a zero fractional part.
pub fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_major() {
        assert_eq!(Cents::new(2345).to_major(), 23.45);
        assert_eq!(Cents::new(0).to_major(), 0.0);
        assert_eq!(Cents::new(-7097).to_major(), -70.97);
    }

    #[test]
    fn test_display_drops_insignificant_decimals() {
        assert_eq!(Cents::new(17300).to_string(), "173");
        assert_eq!(Cents::new(73480).to_string(), "734.8");
        assert_eq!(Cents::new(2737).to_string(), "27.37");
        assert_eq!(Cents::new(99).to_string(), "0.99");
        assert_eq!(Cents::new(505).to_string(), "5.05");
        assert_eq!(Cents::new(0).to_string(), "0");
        assert_eq!(Cents::new(-262498).to_string(), "-2624.98");
    }

    #[test]
    fn test_parse_amount_formats() {
        assert_eq!(parse_amount("-27,37").unwrap(), Cents::new(-2737));
        assert_eq!(parse_amount("-2,8").unwrap(), Cents::new(-280));
        assert_eq!(parse_amount("-27.37").unwrap(), Cents::new(-2737));
        assert_eq!(parse_amount("-173").unwrap(), Cents::new(-17300));
        assert_eq!(parse_amount("1200,00").unwrap(), Cents::new(120000));
        assert_eq!(parse_amount("+5,00").unwrap(), Cents::new(500));
        assert_eq!(parse_amount(" -0,99 ").unwrap(), Cents::new(-99));
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert!(parse_amount("").is_err());
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("-1,234").is_err());
        assert!(parse_amount("1.000,00").is_err());
        assert!(parse_amount("99999999999999999999").is_err());
    }

    #[test]
    fn test_json_numbers() {
        #[derive(Serialize)]
        struct Row {
            #[serde(serialize_with = "serialize_major")]
            amount: Cents,
            #[serde(serialize_with = "serialize_number")]
            percentage: f64,
        }

        let whole = serde_json::to_string(&Row { amount: Cents::new(17300), percentage: 0.0 }).unwrap();
        assert_eq!(whole, r#"{"amount":173,"percentage":0}"#);

        let frac = serde_json::to_string(&Row { amount: Cents::new(7097), percentage: 2.7 }).unwrap();
        assert_eq!(frac, r#"{"amount":70.97,"percentage":2.7}"#);
    }

    #[test]
    fn test_checked_ops() {
        assert_eq!(Cents::new(-2737).checked_add(Cents::new(-280)), Some(Cents::new(-3017)));
        assert_eq!(Cents::new(i64::MAX).checked_add(Cents::new(1)), None);
        assert_eq!(Cents::new(-7097).checked_abs(), Some(Cents::new(7097)));
        assert_eq!(Cents::new(i64::MIN).checked_abs(), None);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(38.8149), 38.81);
        assert_eq!(round2(45.3210), 45.32);
        assert_eq!(round2(100.0), 100.0);
    }
}
