use crate::invariants::Status;

/// One access-log line split into its Combined Log Format fields.
///
/// Every field is the raw text from the line; nothing is converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub ip: String,
    pub identity: String,
    pub user: String,
    pub timestamp: String,
    pub request: String,
    pub status: String,
    pub size: String,
    pub referrer: String,
    pub user_agent: String,
}

/// The part of a 5xx line kept for the detailed report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    pub timestamp: String,
    pub status: Status,
    pub ip: String,
    pub request: String,
}

impl From<LogLine> for ErrorRecord {
    fn from(line: LogLine) -> Self {
        Self {
            timestamp: line.timestamp,
            status: line.status.into(),
            ip: line.ip,
            request: line.request,
        }
    }
}
