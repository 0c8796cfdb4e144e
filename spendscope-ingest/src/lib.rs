//! spendscope-ingest: statement row types and bank export parsers.

pub mod parsers;
pub mod types;

pub use parsers::{parse_statement_file, parse_statement_str};
pub use types::RawRecord;
