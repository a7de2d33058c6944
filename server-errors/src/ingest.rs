use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use tracing::debug;

use crate::{aggregator::ErrorAggregator, error::AnalyzeError, parser::parse_log_line};

/// Line tallies for one pass over the input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngestStats {
    pub lines: usize,
    pub parsed: usize,
    pub skipped: usize,
    pub errors: usize,
}

pub fn process_log_file(
    path: &Path,
    aggregator: &mut ErrorAggregator,
) -> Result<IngestStats, AnalyzeError> {
    let file = File::open(path).map_err(|source| AnalyzeError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    process_lines(BufReader::new(file), aggregator).map_err(|source| AnalyzeError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Feeds every line of `reader` through the parser in order. `\n`, `\r\n`
/// and a lone `\r` all end a line. Lines outside the grammar, including
/// non-UTF-8 ones, are skipped.
pub fn process_lines<R: BufRead>(
    reader: R,
    aggregator: &mut ErrorAggregator,
) -> io::Result<IngestStats> {
    let mut stats = IngestStats::default();
    for chunk in reader.split(b'\n') {
        let chunk = chunk?;
        let chunk = chunk.strip_suffix(b"\r").unwrap_or(&chunk[..]);
        for raw in chunk.split(|b| *b == b'\r') {
            stats.lines += 1;
            process_line(raw, stats.lines, &mut stats, aggregator);
        }
    }
    Ok(stats)
}

fn process_line(
    raw: &[u8],
    number: usize,
    stats: &mut IngestStats,
    aggregator: &mut ErrorAggregator,
) {
    let Ok(line) = std::str::from_utf8(raw) else {
        debug!(line = number, "skipping line that is not UTF-8");
        stats.skipped += 1;
        return;
    };
    match parse_log_line(line) {
        Some(entry) => {
            stats.parsed += 1;
            if aggregator.classify(entry) {
                stats.errors += 1;
            }
        }
        None => {
            debug!(line = number, "skipping line outside the log format");
            stats.skipped += 1;
        }
    }
}
