//! Canonical timestamps and normalization of compact export dates.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// Canonical extended form used for storage and display.
const CANONICAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Length of the compact export form `YYYYMMDDTHHMMSSZ`.
const COMPACT_LEN: usize = 16;

/// A UTC point in time with whole-second precision.
///
/// Rendered and parsed in the canonical form `YYYY-MM-DDTHH:MM:SSZ`. Because the
/// canonical form is fixed-width, the string ordering of two timestamps matches
/// their chronological ordering, which the store relies on when sorting in SQL.
///
/// # Examples
///
/// ```
/// use hoard::domain::Timestamp;
///
/// let ts: Timestamp = "2024-01-15T12:00:00Z".parse().unwrap();
/// assert_eq!(ts.to_string(), "2024-01-15T12:00:00Z");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

/// Error returned when parsing a timestamp that is not in canonical form.
#[derive(Debug, Clone)]
pub struct ParseTimestampError(String);

impl fmt::Display for ParseTimestampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid timestamp '{}': expected YYYY-MM-DDTHH:MM:SSZ", self.0)
    }
}

impl std::error::Error for ParseTimestampError {}

impl Timestamp {
    /// Returns the current wall-clock time truncated to whole seconds.
    pub fn now() -> Self {
        Self(Utc::now().trunc_subsecs(0))
    }

    /// Wraps a `DateTime`, dropping any sub-second part.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt.trunc_subsecs(0))
    }

    /// Returns the underlying `DateTime`.
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Formats with a chrono format string, for display purposes.
    pub fn format(&self, fmt: &str) -> String {
        self.0.format(fmt).to_string()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(CANONICAL_FORMAT))
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self)
    }
}

impl FromStr for Timestamp {
    type Err = ParseTimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ts = NaiveDateTime::parse_from_str(s, CANONICAL_FORMAT)
            .map(|naive| Self(naive.and_utc()))
            .map_err(|_| ParseTimestampError(s.to_string()))?;
        // chrono accepts unpadded fields; only the fixed-width form round-trips.
        if ts.to_string() != s {
            return Err(ParseTimestampError(s.to_string()));
        }
        Ok(ts)
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ===========================================
// Normalization
// ===========================================

/// Result of normalizing a raw export date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalized {
    /// The canonical timestamp (the current time if the input was unusable).
    pub timestamp: Timestamp,
    /// True when the input was absent or invalid and the current time was substituted.
    pub fell_back: bool,
}

/// Normalizes a compact `YYYYMMDDTHHMMSSZ` date into a canonical timestamp.
///
/// Never fails. Absent input, input shorter than 16 characters, or input that
/// does not describe a real calendar date and time yields the current time with
/// `fell_back` set. Surrounding whitespace is ignored, as is anything after the
/// 16th character.
pub fn normalize(raw: Option<&str>) -> Normalized {
    match raw.map(str::trim).and_then(parse_compact) {
        Some(timestamp) => Normalized {
            timestamp,
            fell_back: false,
        },
        None => Normalized {
            timestamp: Timestamp::now(),
            fell_back: true,
        },
    }
}

fn parse_compact(raw: &str) -> Option<Timestamp> {
    let s = raw.get(..COMPACT_LEN)?;
    if !s.is_ascii() {
        return None;
    }

    let bytes = s.as_bytes();
    if bytes[8] != b'T' || bytes[15] != b'Z' {
        return None;
    }

    let field = |range: Range<usize>| -> Option<u32> {
        let part = &s[range];
        if part.bytes().all(|b| b.is_ascii_digit()) {
            part.parse().ok()
        } else {
            None
        }
    };

    let date = NaiveDate::from_ymd_opt(field(0..4)? as i32, field(4..6)?, field(6..8)?)?;
    let time = NaiveTime::from_hms_opt(field(9..11)?, field(11..13)?, field(13..15)?)?;
    Some(Timestamp(NaiveDateTime::new(date, time).and_utc()))
}
