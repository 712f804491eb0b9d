//! Sweep direction for SCAN-family policies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Direction the head travels during a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Toward `total_cylinders - 1`.
    #[default]
    TowardHigh,
    /// Toward cylinder `0`.
    TowardLow,
}

impl Direction {
    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Direction::TowardHigh => Direction::TowardLow,
            Direction::TowardLow => Direction::TowardHigh,
        }
    }

    /// Canonical token (`toward-high` / `toward-low`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::TowardHigh => "toward-high",
            Direction::TowardLow => "toward-low",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the canonical tokens plus the `right`/`left` and `up`/`down`
/// spellings, case-insensitively.
impl FromStr for Direction {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "toward-high" | "high" | "right" | "up" => Ok(Direction::TowardHigh),
            "toward-low" | "low" | "left" | "down" => Ok(Direction::TowardLow),
            _ => Err(ConfigurationError::UnknownDirection(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens() {
        assert_eq!("toward-high".parse::<Direction>(), Ok(Direction::TowardHigh));
        assert_eq!("Right".parse::<Direction>(), Ok(Direction::TowardHigh));
        assert_eq!("toward-low".parse::<Direction>(), Ok(Direction::TowardLow));
        assert_eq!(" left ".parse::<Direction>(), Ok(Direction::TowardLow));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "sideways".parse::<Direction>(),
            Err(ConfigurationError::UnknownDirection("sideways".into()))
        );
    }

    #[test]
    fn test_reversed_and_display() {
        assert_eq!(Direction::TowardHigh.reversed(), Direction::TowardLow);
        assert_eq!(Direction::TowardLow.reversed(), Direction::TowardHigh);
        assert_eq!(Direction::TowardLow.to_string(), "toward-low");
    }

    #[test]
    fn test_serde_token() {
        let json = serde_json::to_string(&Direction::TowardHigh).unwrap();
        assert_eq!(json, "\"toward-high\"");
    }
}
