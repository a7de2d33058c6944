mod args;
mod generator;
mod stream;

use args::CliArgs;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::{
    fs::File,
    io::{self, BufWriter},
};
use stream::write_log_stream;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();
    let mut rng = match args.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_os_rng(),
    };

    match args.output() {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            write_log_stream(
                &mut out,
                &mut rng,
                *args.count(),
                *args.error_rate(),
                *args.malformed_rate(),
            )?;
            eprintln!("Wrote {} lines to {}", args.count(), path.display());
        }
        None => {
            let mut out = BufWriter::new(io::stdout().lock());
            write_log_stream(
                &mut out,
                &mut rng,
                *args.count(),
                *args.error_rate(),
                *args.malformed_rate(),
            )?;
        }
    }
    Ok(())
}
