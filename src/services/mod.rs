pub mod exporter;
pub mod failure_log;
pub mod ranking;
pub mod record_parser;

pub use exporter::{build_document, export, ExportedPaper};
pub use failure_log::FailureLog;
pub use ranking::{scan_limit_for, select};
pub use record_parser::{normalize_score, parse_decision, parse_paper, parse_review};
