//! Calendar dates in the service's `YYYY-MM-DD` wire format.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DecodingError;

/// Wire format used for every date the service returns.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date without time of day or timezone.
///
/// `encode` always emits quoted text and `parse` accepts the text with or
/// without one pair of surrounding quotes, so the two are inverses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    /// Wrap a calendar date.
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Build a date from its parts, returning `None` for impossible dates.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// The wrapped calendar date.
    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    /// Parse `YYYY-MM-DD`, stripping one pair of surrounding quotes first.
    pub fn parse(text: &str) -> Result<Self, DecodingError> {
        let text = strip_quotes(text);
        NaiveDate::parse_from_str(text, DATE_FORMAT)
            .map(Self)
            .map_err(|source| DecodingError::Date {
                input: text.to_string(),
                source,
            })
    }

    /// Parse raw wire bytes.
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodingError> {
        Self::parse(&String::from_utf8_lossy(bytes))
    }

    /// Encode as quoted wire text, e.g. `"2021-06-15"`.
    pub fn encode(&self) -> Vec<u8> {
        format!("\"{self}\"").into_bytes()
    }
}

fn strip_quotes(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(text)
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for Date {
    type Err = DecodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DateVisitor;

        impl Visitor<'_> for DateVisitor {
            type Value = Date;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a date formatted as YYYY-MM-DD")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Date, E> {
                Date::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(DateVisitor)
    }
}
