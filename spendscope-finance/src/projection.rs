//! Fixed monthly savings plan projection.

use spendscope_core::Cents;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavingsPlan {
    pub monthly: Cents,
    pub years: u32,
}

impl SavingsPlan {
    pub fn new(monthly: Cents, years: u32) -> Self {
        Self { monthly, years }
    }

    pub fn months(&self) -> u32 {
        self.years.saturating_mul(12)
    }

    /// Sum of all contributions, `None` on overflow.
    pub fn total(&self) -> Option<Cents> {
        self.monthly
            .get()
            .checked_mul(i64::from(self.months()))
            .map(Cents::new)
    }
}
