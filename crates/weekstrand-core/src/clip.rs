//! Clipping events to the displayed window of days.

use crate::event::Event;
use crate::geometry::DAY_IN_MINUTES;

/// The window of julian days being drawn, plus the near-midnight margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventClipper {
    first_day: i32,
    last_day: i32,
    min_other_minutes: i64,
}

impl EventClipper {
    pub fn new(first_day: i32, last_day: i32, min_other_minutes: i64) -> Self {
        Self {
            first_day,
            last_day,
            min_other_minutes,
        }
    }

    /// Whether any part of `event` falls inside the window.
    pub fn overlaps_window(&self, event: &Event) -> bool {
        event.end_day >= self.first_day && event.start_day <= self.last_day
    }

    /// Latest start time that still leaves a visible sliver before midnight.
    fn latest_start(&self) -> u32 {
        let latest = i64::from(DAY_IN_MINUTES) - self.min_other_minutes;
        latest.clamp(0, i64::from(DAY_IN_MINUTES)) as u32
    }

    /// Clipped copy of `event`, or `None` when it lies outside the window.
    ///
    /// An event starting before the window starts at midnight of the first
    /// day; one ending after it ends at the last minute of the last day.
    /// Starts too close to midnight are pulled back so the segment keeps a
    /// minimum visible length in the compressed late-evening zone.
    pub fn clip(&self, event: &Event) -> Option<Event> {
        if !self.overlaps_window(event) {
            return None;
        }

        let mut clipped = event.clone();
        if clipped.start_day < self.first_day {
            clipped.start_day = self.first_day;
            clipped.start_time = 0;
        }
        let latest_start = self.latest_start();
        if clipped.start_time > latest_start {
            clipped.start_time = latest_start;
        }
        if clipped.end_day > self.last_day {
            clipped.end_day = self.last_day;
            clipped.end_time = DAY_IN_MINUTES - 1;
        }
        Some(clipped)
    }
}
