use std::fmt;

use crate::{invariants::Status, models::ErrorRecord};

/// End-of-run report. `Display` renders the console layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    distribution: Vec<(Status, usize)>,
    entries: Vec<ErrorRecord>,
    total: usize,
}

impl Summary {
    pub(crate) fn new(distribution: Vec<(Status, usize)>, entries: Vec<ErrorRecord>) -> Self {
        let total = distribution.iter().map(|(_, count)| count).sum();
        Self {
            distribution,
            entries,
            total,
        }
    }

    pub fn has_errors(&self) -> bool {
        self.total > 0
    }

    pub fn distribution(&self) -> &[(Status, usize)] {
        &self.distribution
    }

    pub fn entries(&self) -> &[ErrorRecord] {
        &self.entries
    }

    pub fn total(&self) -> usize {
        self.total
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n=== Server Error (5xx) Summary ===")?;
        if !self.has_errors() {
            return writeln!(f, "No 5xx errors found.");
        }

        writeln!(f, "\nError Code Distribution:")?;
        for (status, count) in &self.distribution {
            writeln!(f, "HTTP {status}: {count} occurrences")?;
        }

        writeln!(f, "\nDetailed Error Entries:")?;
        for entry in &self.entries {
            writeln!(f, "\nTimestamp: {}", entry.timestamp)?;
            writeln!(f, "Status: {}", entry.status)?;
            writeln!(f, "IP: {}", entry.ip)?;
            writeln!(f, "Request: {}", entry.request)?;
        }

        writeln!(f, "\nTotal 5xx errors found: {}", self.total)
    }
}
