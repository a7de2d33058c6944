use chrono::Local;
use rand::{Rng, seq::IndexedRandom};

const METHODS: [(&str, u8); 4] = [("GET", 6), ("POST", 2), ("PUT", 1), ("DELETE", 1)];
const PATHS: [(&str, u8); 6] = [
    ("/", 10),
    ("/login", 10),
    ("/api", 50),
    ("/admin", 5),
    ("/splash", 20),
    ("/gallery?page=2", 10),
];
const STATUS: [(u16, u8); 7] = [
    (200, 50),
    (201, 10),
    (304, 10),
    (400, 10),
    (401, 20),
    (404, 50),
    (499, 1),
];
const SERVER_ERROR_STATUS: [(u16, u8); 4] = [(500, 10), (502, 3), (503, 5), (504, 2)];
const REFERRERS: [(&str, u8); 3] = [
    ("-", 50),
    ("https://example.com/", 10),
    ("https://search.example.org/?q=status", 5),
];
const AGENTS: [(&str, u8); 4] = [
    ("Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0", 30),
    ("Mozilla/5.0 (Macintosh; Intel Mac OS X 14_5) AppleWebKit/605.1.15", 20),
    ("curl/8.4.0", 5),
    ("kube-probe/1.29", 5),
];

fn pick<T: Copy, R: Rng + ?Sized>(rng: &mut R, table: &[(T, u8)]) -> T {
    table
        .choose_weighted(rng, |(_, w)| *w)
        .map(|(value, _)| *value)
        .expect("weighted tables are non-empty")
}

fn request_prefix<R: Rng + ?Sized>(rng: &mut R, status: u16) -> String {
    let ip = format!(
        "192.168.{}.{}",
        rng.random_range(0..256),
        rng.random_range(0..256)
    );
    let timestamp = Local::now().format("%d/%b/%Y:%H:%M:%S %z");
    let method = pick(rng, &METHODS);
    let path = pick(rng, &PATHS);
    let size = rng.random_range(100..2000);

    format!("{ip} - - [{timestamp}] \"{method} {path} HTTP/1.1\" {status} {size}")
}

/// One Combined Log Format line. `error_rate` is the chance of a 5xx status.
pub fn generate_combined_log<R: Rng + ?Sized>(rng: &mut R, error_rate: f64) -> String {
    let status = if rng.random_bool(error_rate) {
        pick(rng, &SERVER_ERROR_STATUS)
    } else {
        pick(rng, &STATUS)
    };
    let prefix = request_prefix(rng, status);
    let referrer = pick(rng, &REFERRERS);
    let agent = pick(rng, &AGENTS);

    format!("{prefix} \"{referrer}\" \"{agent}\"")
}

/// A line that looks like a server error but stops before the user agent.
pub fn generate_malformed_log<R: Rng + ?Sized>(rng: &mut R) -> String {
    let status = pick(rng, &SERVER_ERROR_STATUS);
    let prefix = request_prefix(rng, status);
    if rng.random_bool(0.5) {
        let referrer = pick(rng, &REFERRERS);
        format!("{prefix} \"{referrer}\"")
    } else {
        prefix
    }
}
