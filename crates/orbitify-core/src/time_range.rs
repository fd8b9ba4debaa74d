//! Listening-history windows accepted by the top-tracks endpoint.

use crate::error::OrbitifyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Server-defined bucket controlling which listening history produces "top tracks".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    #[default]
    ShortTerm,
    MediumTerm,
    LongTerm,
}

impl TimeRange {
    /// All ranges in selector order.
    pub const ALL: [TimeRange; 3] = [
        TimeRange::ShortTerm,
        TimeRange::MediumTerm,
        TimeRange::LongTerm,
    ];

    /// Wire value sent as the `time_range` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::ShortTerm => "short_term",
            TimeRange::MediumTerm => "medium_term",
            TimeRange::LongTerm => "long_term",
        }
    }

    /// Human label used in user-facing messages, e.g. `"short term"`.
    pub fn label(&self) -> String {
        self.as_str().replacen('_', " ", 1)
    }

    /// Option text shown by the range selector.
    pub fn description(&self) -> &'static str {
        match self {
            TimeRange::ShortTerm => "Last 4 weeks",
            TimeRange::MediumTerm => "Last 6 months",
            TimeRange::LongTerm => "All time",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = OrbitifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeRange::ALL
            .into_iter()
            .find(|range| range.as_str() == s.trim())
            .ok_or_else(|| OrbitifyError::InvalidTimeRange(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_short_term() {
        assert_eq!(TimeRange::default(), TimeRange::ShortTerm);
    }

    #[test]
    fn test_labels() {
        assert_eq!(TimeRange::ShortTerm.label(), "short term");
        assert_eq!(TimeRange::MediumTerm.label(), "medium term");
        assert_eq!(TimeRange::LongTerm.label(), "long term");
        assert_eq!(TimeRange::LongTerm.description(), "All time");
    }

    #[test]
    fn test_parse() {
        assert_eq!("medium_term".parse::<TimeRange>().unwrap(), TimeRange::MediumTerm);
        let err = "forever".parse::<TimeRange>().unwrap_err();
        assert_eq!(err, OrbitifyError::InvalidTimeRange("forever".to_string()));
    }

    #[test]
    fn test_serde_uses_wire_value() {
        let json = serde_json::to_string(&TimeRange::LongTerm).unwrap();
        assert_eq!(json, "\"long_term\"");
        let parsed: TimeRange = serde_json::from_str("\"short_term\"").unwrap();
        assert_eq!(parsed, TimeRange::ShortTerm);
    }
}
