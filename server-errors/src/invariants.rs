use std::{convert::Infallible, str::FromStr};

use derive_more::{Display, From};

/// HTTP status exactly as written in the log.
///
/// Ordering is lexicographic on the text, so `"1000"` sorts before `"500"`.
#[derive(Debug, Display, From, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Status(String);

impl Status {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// True when the text starts with `5`. No numeric range check.
    pub fn is_server_error(&self) -> bool {
        self.0.starts_with('5')
    }
}

impl FromStr for Status {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.into()))
    }
}
