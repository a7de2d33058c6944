use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::models::LogLine;

// 127.0.0.1 - frank [10/Oct/2000:13:55:36 -0700] "GET /a.gif HTTP/1.0" 200 2326 "http://x/" "Mozilla/4.08"
// Quoted and bracketed fields are lazy: the first closing delimiter ends the field.
static COMBINED_LOG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"^(?P<ip>[\d.]+)\s+"#,
        r#"(?P<identity>\S+)\s+"#,
        r#"(?P<user>\S+)\s+"#,
        r#"\[(?P<timestamp>.*?)\]\s+"#,
        r#""(?P<request>.*?)"\s+"#,
        r#"(?P<status>\d+)\s+"#,
        r#"(?P<size>\S+)\s+"#,
        r#""(?P<referrer>.*?)"\s+"#,
        r#""(?P<user_agent>.*?)""#,
    ))
    .expect("combined log pattern is valid")
});

/// Parses one Combined Log Format line.
///
/// Surrounding whitespace, including the `\x1c`..`\x1f` separator controls,
/// is ignored. The match is anchored at the start only, so anything after the
/// user agent is tolerated. Returns `None` for blank, truncated or otherwise
/// foreign lines.
pub fn parse_log_line(line: &str) -> Option<LogLine> {
    let caps = COMBINED_LOG.captures(line.trim_matches(is_padding))?;
    Some(LogLine {
        ip: field(&caps, "ip"),
        identity: field(&caps, "identity"),
        user: field(&caps, "user"),
        timestamp: field(&caps, "timestamp"),
        request: field(&caps, "request"),
        status: field(&caps, "status"),
        size: field(&caps, "size"),
        referrer: field(&caps, "referrer"),
        user_agent: field(&caps, "user_agent"),
    })
}

fn is_padding(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

fn field(caps: &Captures<'_>, name: &str) -> String {
    caps.name(name)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
