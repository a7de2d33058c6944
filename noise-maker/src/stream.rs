use crate::generator::{generate_combined_log, generate_malformed_log};
use rand::Rng;
use std::io::{self, Write};

/// Writes `count` newline-terminated lines to `out`.
pub fn write_log_stream<W: Write, R: Rng + ?Sized>(
    out: &mut W,
    rng: &mut R,
    count: usize,
    error_rate: f64,
    malformed_rate: f64,
) -> io::Result<()> {
    for _ in 0..count {
        let log_line = if rng.random_bool(malformed_rate) {
            generate_malformed_log(rng)
        } else {
            generate_combined_log(rng, error_rate)
        };
        writeln!(out, "{log_line}")?;
    }
    out.flush()
}
