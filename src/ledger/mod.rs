//! The `;` separated worktime ledger: reading, merging and rewriting.

pub mod reader;
pub mod writer;

pub use reader::{LedgerParser, ParsedLedger, TodayObservation, parse_ledger, read_ledger};
pub use writer::{EXPORT_HEADER, write_export, write_ledger};
