//! Calendar events as seen by the strand conversion.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::calendar::julian_day;
use crate::color::ColorKey;
use crate::error::{Result, ValidationError};
use crate::geometry::DAY_IN_MINUTES;

/// A calendar event reduced to julian days and minutes of day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub start_day: i32,
    pub end_day: i32,
    /// Minutes after midnight on `start_day`.
    pub start_time: u32,
    /// Minutes after midnight on `end_day`.
    pub end_time: u32,
    pub color: ColorKey,
    #[serde(default)]
    pub all_day: bool,
}

impl Event {
    /// Timed event starting and ending on `day`.
    pub fn on_day(day: i32, start_time: u32, end_time: u32, color: ColorKey) -> Self {
        Self::spanning(day, start_time, day, end_time, color)
    }

    /// Timed event that may cover several days.
    pub fn spanning(
        start_day: i32,
        start_time: u32,
        end_day: i32,
        end_time: u32,
        color: ColorKey,
    ) -> Self {
        Self {
            start_day,
            end_day,
            start_time,
            end_time,
            color,
            all_day: false,
        }
    }

    /// All-day event covering `start_day..=end_day`.
    pub fn all_day(start_day: i32, end_day: i32, color: ColorKey) -> Self {
        Self {
            start_day,
            end_day,
            start_time: 0,
            end_time: DAY_IN_MINUTES - 1,
            color,
            all_day: true,
        }
    }

    /// Build a timed event from local wall-clock datetimes.
    pub fn from_datetimes(start: NaiveDateTime, end: NaiveDateTime, color: ColorKey) -> Self {
        Self::spanning(
            julian_day(start.date()),
            start.hour() * 60 + start.minute(),
            julian_day(end.date()),
            end.hour() * 60 + end.minute(),
            color,
        )
    }

    /// Absolute start in minutes relative to midnight of `first_day`.
    pub fn start_minute_from(&self, first_day: i32) -> i64 {
        i64::from(self.start_day - first_day) * i64::from(DAY_IN_MINUTES)
            + i64::from(self.start_time)
    }

    /// Check the event's invariants.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the event ends on an earlier day than
    /// it starts or a time is not a minute of the day.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.start_day > self.end_day {
            return Err(ValidationError::EventOrder {
                start_day: self.start_day,
                end_day: self.end_day,
            });
        }
        self.validate_minutes()
    }

    fn validate_minutes(&self) -> Result<(), ValidationError> {
        for (field, minute) in [("start_time", self.start_time), ("end_time", self.end_time)] {
            if minute >= DAY_IN_MINUTES {
                return Err(ValidationError::MinuteOutOfRange {
                    field: field.to_string(),
                    minute,
                });
            }
        }
        Ok(())
    }
}

/// One entry of an event file: either the event itself, or wall-clock
/// datetimes (`YYYY-MM-DDTHH:MM:SS`) that are converted to julian days.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum EventInput {
    Julian(Event),
    Local {
        start: NaiveDateTime,
        end: NaiveDateTime,
        color: ColorKey,
        #[serde(default)]
        all_day: bool,
    },
}

impl From<EventInput> for Event {
    fn from(input: EventInput) -> Self {
        match input {
            EventInput::Julian(event) => event,
            EventInput::Local {
                start,
                end,
                color,
                all_day,
            } => Event {
                all_day,
                ..Event::from_datetimes(start, end, color)
            },
        }
    }
}

/// Parse a JSON array of events and sort it by start.
///
/// Events that end on an earlier day than they start are kept; the
/// conversion reports and skips them.
///
/// # Errors
///
/// Returns an error if the JSON is malformed or a time is not a minute of
/// the day.
pub fn parse_events(json: &str) -> Result<Vec<Event>> {
    let inputs: Vec<EventInput> = serde_json::from_str(json)?;
    let mut events: Vec<Event> = inputs.into_iter().map(Event::from).collect();
    for event in &events {
        event.validate_minutes()?;
    }
    events.sort_by_key(|e| (e.start_day, e.start_time));
    Ok(events)
}

/// Read and parse an event file.
///
/// # Errors
///
/// Returns [`CoreError::Io`](crate::error::CoreError::Io) if the file cannot
/// be read, otherwise whatever [`parse_events`] returns.
pub fn read_events(path: &Path) -> Result<Vec<Event>> {
    let json = std::fs::read_to_string(path)?;
    parse_events(&json)
}
