use chrono::NaiveDate;
use regex::Regex;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Wire format for calendar dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

fn date_shape() -> &'static Regex {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE.get_or_init(|| {
        Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date shape pattern is valid")
    })
}

/// Calendar date as served by the API, or an explicit absent value.
///
/// The API writes dates as `YYYY-MM-DD` and uses `null` or `""` where a date
/// is not known. Both map to the absent state, which serializes back to
/// `null`. Absent dates order before every present date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(Option<NaiveDate>);

impl Date {
    pub fn new(date: NaiveDate) -> Self {
        Self(Some(date))
    }

    pub fn absent() -> Self {
        Self(None)
    }

    /// Build a present date, `None` if the components are not a calendar date
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self::new)
    }

    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    pub fn as_naive_date(&self) -> Option<NaiveDate> {
        self.0
    }

    /// Parse the textual form; `""` is the absent date
    pub fn parse(input: &str) -> Result<Self, DateParseError> {
        if input.is_empty() {
            return Ok(Self::absent());
        }

        if !date_shape().is_match(input) {
            return Err(DateParseError::InvalidFormat(input.to_string()));
        }

        NaiveDate::parse_from_str(input, DATE_FORMAT)
            .map(Self::new)
            .map_err(|_| DateParseError::InvalidDate(input.to_string()))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(date) => write!(f, "{}", date.format(DATE_FORMAT)),
            None => Ok(()),
        }
    }
}

impl FromStr for Date {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self::new(date)
    }
}

impl From<Option<NaiveDate>> for Date {
    fn from(date: Option<NaiveDate>) -> Self {
        Self(date)
    }
}

impl Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0 {
            Some(date) => serializer.collect_str(&date.format(DATE_FORMAT)),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(DateVisitor)
    }
}

struct DateVisitor;

impl<'de> Visitor<'de> for DateVisitor {
    type Value = Date;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("null or a date string in YYYY-MM-DD format")
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Date::absent())
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Date::absent())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(self)
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Date::parse(value).map_err(E::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateParseError {
    #[error("invalid date \"{0}\": expected YYYY-MM-DD")]
    InvalidFormat(String),
    #[error("invalid date \"{0}\": not a calendar date")]
    InvalidDate(String),
}

impl DateParseError {
    /// The text that failed to parse
    pub fn input(&self) -> &str {
        match self {
            DateParseError::InvalidFormat(input) | DateParseError::InvalidDate(input) => input,
        }
    }
}
