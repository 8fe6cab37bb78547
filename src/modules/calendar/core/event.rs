// Calendar event as stored and as carried on the wire.
//
// Boundaries
// - No input or output here. Decoding happens in the inbound adapters,
//   storage in the EventStore port.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Wire format of `date` fields and query parameters.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid date {value:?}, expected YYYY-MM-DD")]
pub struct DateFormatError {
    pub value: String,
}

/// Parses exactly `YYYY-MM-DD`: zero-padded fields, no sign, no whitespace.
pub fn parse_date(value: &str) -> Result<NaiveDate, DateFormatError> {
    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(DateFormatError {
            value: value.to_string(),
        });
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| DateFormatError {
        value: value.to_string(),
    })
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_date(&value).map_err(serde::de::Error::custom)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid user_id")]
    InvalidUserId,

    #[error("invalid event_id")]
    InvalidEventId,

    #[error("invalid title")]
    EmptyTitle,
}

/// A single calendar entry owned by `user_id`.
///
/// Missing ids and title decode to their zero values so that `validate`
/// reports them instead of the JSON decoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub event_id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
}

impl Event {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_ids(self.user_id, self.event_id)?;
        if self.title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(())
    }
}

pub fn validate_user_id(user_id: i64) -> Result<(), ValidationError> {
    if user_id <= 0 {
        return Err(ValidationError::InvalidUserId);
    }
    Ok(())
}

pub fn validate_ids(user_id: i64, event_id: i64) -> Result<(), ValidationError> {
    validate_user_id(user_id)?;
    if event_id <= 0 {
        return Err(ValidationError::InvalidEventId);
    }
    Ok(())
}
