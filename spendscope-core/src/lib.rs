//! spendscope-core: money, date and category types shared across the workspace

pub mod finance;
pub mod money;
pub mod time;

pub use finance::{Category, ExpenseDetail, Transaction};
pub use money::{Cents, parse_amount};
pub use time::{display_date, month_label, parse_booking_date};
