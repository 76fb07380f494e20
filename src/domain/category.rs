use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Performance categories exposed by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PerfType {
    Classical,
    Blitz,
    Rapid,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryError {
    #[error("Invalid performance type: {0}")]
    Unknown(String),
}

impl PerfType {
    pub const ALL: [PerfType; 3] = [PerfType::Classical, PerfType::Blitz, PerfType::Rapid];

    /// Lower-case key used in query strings, provider URLs and `Player::perfs`
    pub fn as_key(&self) -> &'static str {
        match self {
            PerfType::Classical => "classical",
            PerfType::Blitz => "blitz",
            PerfType::Rapid => "rapid",
        }
    }

    /// Capitalized label the provider uses in rating-history payloads
    pub fn history_label(&self) -> &'static str {
        match self {
            PerfType::Classical => "Classical",
            PerfType::Blitz => "Blitz",
            PerfType::Rapid => "Rapid",
        }
    }
}

impl FromStr for PerfType {
    type Err = CategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let key = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|perf| perf.as_key() == key)
            .ok_or_else(|| CategoryError::Unknown(value.to_string()))
    }
}

impl fmt::Display for PerfType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}
