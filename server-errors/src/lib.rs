//! Extracts HTTP 5xx entries from Common/Combined Log Format access logs and
//! summarizes them by status code.

pub mod aggregator;
pub mod error;
pub mod ingest;
pub mod invariants;
pub mod logging;
pub mod models;
pub mod parser;
pub mod report;

pub use aggregator::ErrorAggregator;
pub use error::AnalyzeError;
pub use ingest::{IngestStats, process_lines, process_log_file};
pub use models::{ErrorRecord, LogLine};
pub use parser::parse_log_line;
pub use report::Summary;
