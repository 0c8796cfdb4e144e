//! Nordea (Finland) account statement parser
//!
//! Semicolon-separated export, one header row followed by data rows:
//!   Booking date;Amount;Sender;Recipient;Name;Title;Reference number;Currency
//!   2022/10/11;-27,37;FI57 1040 3500 4294 14;;;ALEPA MALMINKARTANO;;EUR
//!
//! The header row is returned like any other record; the analyzer's skip
//! filter recognizes and drops it.

use anyhow::{Context, Result, bail};
use std::io::Read;
use std::path::Path;

use crate::types::RawRecord;

/// Parse statement rows from any reader.
pub fn parse_statement_reader<R: Read>(reader: R) -> Result<Vec<RawRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut out = Vec::new();
    for result in rdr.records() {
        let record = result.context("reading statement row")?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        if record.len() != RawRecord::FIELD_COUNT {
            bail!(
                "line {line}: expected {} fields, found {}",
                RawRecord::FIELD_COUNT,
                record.len()
            );
        }

        let raw: RawRecord = record
            .deserialize(None)
            .with_context(|| format!("line {line}: malformed record"))?;
        out.push(raw);
    }

    tracing::debug!(rows = out.len(), "parsed statement rows");
    Ok(out)
}

/// Parse statement text already held in memory.
pub fn parse_statement_str(text: &str) -> Result<Vec<RawRecord>> {
    parse_statement_reader(text.as_bytes())
}

/// Parse a statement file from disk.
pub fn parse_statement_file(path: impl AsRef<Path>) -> Result<Vec<RawRecord>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    parse_statement_reader(file).with_context(|| format!("parsing {}", path.display()))
}
