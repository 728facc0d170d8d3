//! Venue double-booking checks.
//!
//! Stored matches carry only a start time, so every existing match is assumed
//! to occupy its venue for [`ASSUMED_MATCH_MINUTES`].

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::error::{AppError, AppResult};

pub const ASSUMED_MATCH_MINUTES: i64 = 90;

/// Half-open interval requested for a new match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Slot {
    /// Builds a slot from a `YYYY-MM-DD` date and `HH:MM[:SS]` times.
    pub fn parse(date: &str, start_time: &str, end_time: &str) -> AppResult<Self> {
        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|_| AppError::Validation(format!("invalid date: {date}")))?;
        let start = date.and_time(parse_time(start_time)?);
        let end = date.and_time(parse_time(end_time)?);
        if end <= start {
            return Err(AppError::Validation(
                "end time must be after start time".into(),
            ));
        }
        Ok(Self { start, end })
    }

    /// Whether an existing match starting at `existing_start` overlaps this slot.
    pub fn overlaps(&self, existing_start: NaiveDateTime) -> bool {
        existing_start < self.end
            && existing_start + TimeDelta::minutes(ASSUMED_MATCH_MINUTES) > self.start
    }
}

fn parse_time(value: &str) -> AppResult<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| AppError::Validation(format!("invalid time: {value}")))
}
