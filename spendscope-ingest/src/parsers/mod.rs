pub mod nordea_fi;

pub use nordea_fi::{parse_statement_file, parse_statement_reader, parse_statement_str};
