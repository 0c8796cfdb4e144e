use spendscope_core::Cents;
use spendscope_ingest::{RawRecord, parse_statement_file};
use std::io::Write;

#[test]
fn test_parse_statement_file_round_trip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "Booking date;Amount;Sender;Recipient;Name;Title;Reference number;Currency\n\
         Pending;-12,00;FI57 1040 3500 4294 14;;;LIDL HKI-KONALA;;EUR\n\
         10.10.2022;-10,96;FI57 1040 3500 4294 14;;;K-supermarket Konala;;EUR\n"
    )
    .unwrap();

    let rows = parse_statement_file(file.path()).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1].booking_date, "Pending");

    let txn = rows[2].to_transaction().unwrap();
    assert_eq!(txn.amount, Cents::new(-1096));
    assert_eq!(txn.month_label(), "October 2022");
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.csv");
    let err = parse_statement_file(&missing).unwrap_err();
    assert!(err.to_string().contains("nope.csv"));
}

#[test]
fn test_raw_record_field_count() {
    assert_eq!(RawRecord::FIELD_COUNT, 8);
}
