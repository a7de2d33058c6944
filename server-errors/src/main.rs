use clap::Parser;
use server_errors::{ErrorAggregator, logging, process_log_file};
use std::{path::PathBuf, process::ExitCode};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(version, about = "Extract HTTP 5xx errors from log files", long_about = None)]
struct Args {
    /// Path to the log file
    logfile: PathBuf,
}

fn main() -> ExitCode {
    logging::init_logging();
    let args = Args::parse();

    let mut aggregator = ErrorAggregator::default();
    match process_log_file(&args.logfile, &mut aggregator) {
        Ok(stats) => {
            info!(
                lines = stats.lines,
                parsed = stats.parsed,
                skipped = stats.skipped,
                errors = stats.errors,
                "finished reading {}",
                args.logfile.display()
            );
            print!("{}", aggregator.summarize());
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!(error = ?e, "aborting without summary");
            println!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
