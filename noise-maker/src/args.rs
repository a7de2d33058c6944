use clap::Parser;
use derive_getters::Getters;
use std::path::PathBuf;

#[derive(Parser, Debug, Getters)]
#[command(name = "noise-maker")]
#[command(about = "Generate fake combined-format access logs for testing", long_about = None)]
pub struct CliArgs {
    /// Number of lines to write
    #[arg(long, default_value_t = 1000)]
    count: usize,

    /// Share of well-formed lines that carry a 5xx status
    #[arg(long, default_value_t = 0.05, value_parser = parse_rate)]
    error_rate: f64,

    /// Share of lines that are cut short and fall outside the format
    #[arg(long, default_value_t = 0.0, value_parser = parse_rate)]
    malformed_rate: f64,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Write to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn parse_rate(s: &str) -> Result<f64, String> {
    let rate: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        Err(format!("{rate} is not between 0 and 1"))
    }
}
