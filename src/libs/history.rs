//! History entry model and remote timestamp parsing.
//!
//! Remote payloads carry history dates in two shapes: a numeric epoch value
//! in milliseconds, or an ISO-8601 string with optional fractional seconds
//! and zone suffix. Both are normalized to UTC calendar dates here. Values
//! in neither shape are reported as errors so that callers can skip the
//! affected entry without aborting the batch.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde_json::Value;
use thiserror::Error;

use crate::libs::task::TaskKind;

#[derive(Debug, Error)]
pub enum TimestampError {
    #[error("history entry has no date field")]
    Missing,
    #[error("unrecognized date value '{0}'")]
    Unrecognized(String),
}

/// Where a history entry came from.
///
/// Remote entries mirror the tracking service and always take precedence
/// over anything recorded locally for the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Remote,
    Local,
}

impl Origin {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "local" => Origin::Local,
            _ => Origin::Remote,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Remote => "remote",
            Origin::Local => "local",
        }
    }
}

/// Daily measurement attached to a history entry.
///
/// Dailies and todos record completion, habits and everything else record
/// an accumulated score. Both collapse to a single REAL column in storage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Signal {
    Completed(bool),
    Score(f64),
}

impl Signal {
    pub fn from_value(kind: &TaskKind, value: f64) -> Self {
        match kind {
            TaskKind::Daily | TaskKind::Todo => Signal::Completed(value > 0.0),
            _ => Signal::Score(value),
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            Signal::Completed(true) => 1.0,
            Signal::Completed(false) => 0.0,
            Signal::Score(score) => *score,
        }
    }
}

/// One per-date observation in a task's history.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub date: NaiveDate,
    pub signal: Signal,
    pub origin: Origin,
}

impl Entry {
    pub fn new(date: NaiveDate, signal: Signal, origin: Origin) -> Self {
        Entry { date, signal, origin }
    }
}

/// Parses a raw remote date value into a UTC timestamp.
///
/// Accepted shapes, tried in order:
/// 1. JSON number: epoch milliseconds.
/// 2. Numeric string: epoch milliseconds.
/// 3. RFC 3339 string, e.g. `2017-01-13T02:00:00.000Z`.
/// 4. ISO string without zone, fractional seconds ignored.
/// 5. Bare calendar date, taken at midnight.
pub fn parse_remote_timestamp(raw: &Value) -> Result<NaiveDateTime, TimestampError> {
    if let Some(millis) = raw.as_f64() {
        return from_epoch_millis(millis).ok_or_else(|| TimestampError::Unrecognized(raw.to_string()));
    }
    if let Some(text) = raw.as_str() {
        let text = text.trim();
        if text.is_empty() {
            return Err(TimestampError::Missing);
        }
        if let Ok(millis) = text.parse::<f64>() {
            return from_epoch_millis(millis).ok_or_else(|| TimestampError::Unrecognized(text.to_string()));
        }
        if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
            return Ok(parsed.naive_utc());
        }
        let without_zone = text.trim_end_matches('Z');
        let without_fraction = without_zone.split('.').next().unwrap_or(without_zone);
        if let Ok(parsed) = NaiveDateTime::parse_from_str(without_fraction, "%Y-%m-%dT%H:%M:%S") {
            return Ok(parsed);
        }
        if let Ok(parsed) = NaiveDate::parse_from_str(without_fraction, "%Y-%m-%d") {
            return Ok(parsed.and_time(NaiveTime::MIN));
        }
        return Err(TimestampError::Unrecognized(text.to_string()));
    }
    if raw.is_null() {
        return Err(TimestampError::Missing);
    }
    Err(TimestampError::Unrecognized(raw.to_string()))
}

/// Parses a raw remote date value into a UTC calendar date.
pub fn parse_remote_date(raw: &Value) -> Result<NaiveDate, TimestampError> {
    parse_remote_timestamp(raw).map(|timestamp| timestamp.date())
}

fn from_epoch_millis(millis: f64) -> Option<NaiveDateTime> {
    if !millis.is_finite() {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(millis as i64).map(|timestamp| timestamp.naive_utc())
}
