use std::collections::HashMap;

use crate::{
    invariants::Status,
    models::{ErrorRecord, LogLine},
    report::Summary,
};

/// Tallies 5xx lines for one run.
///
/// Every counter increment is paired with one appended record, so the sum
/// of the counts always equals the number of records.
#[derive(Debug, Default)]
pub struct ErrorAggregator {
    counts: HashMap<Status, usize>,
    records: Vec<ErrorRecord>,
}

impl ErrorAggregator {
    /// Records `line` if its status text starts with `5`. Returns whether it
    /// was recorded.
    pub fn classify(&mut self, line: LogLine) -> bool {
        let record = ErrorRecord::from(line);
        if !record.status.is_server_error() {
            return false;
        }
        *self.counts.entry(record.status.clone()).or_default() += 1;
        self.records.push(record);
        true
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn total(&self) -> usize {
        self.records.len()
    }

    pub fn count_of(&self, status: &str) -> usize {
        self.counts
            .get(&Status::from(status.to_string()))
            .copied()
            .unwrap_or_default()
    }

    pub fn records(&self) -> &[ErrorRecord] {
        &self.records
    }

    /// Status counts sorted by status text, then every record in the order
    /// it was classified.
    pub fn summarize(&self) -> Summary {
        let mut distribution: Vec<_> = self
            .counts
            .iter()
            .map(|(status, count)| (status.clone(), *count))
            .collect();
        distribution.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        Summary::new(distribution, self.records.clone())
    }
}
