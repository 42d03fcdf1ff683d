//! Single-day segments and the builder that cuts events into them.

use crate::color::ColorKey;
use crate::event::Event;
use crate::geometry::DAY_IN_MINUTES;

const DAY: i64 = DAY_IN_MINUTES as i64;

/// One contiguous stretch of time on one day, drawn in one color.
///
/// Minutes count from midnight of the window's first day. A segment never
/// crosses midnight; `end_minute` is inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start_minute: i64,
    pub end_minute: i64,
    /// Julian day the segment is drawn on.
    pub day: i32,
    pub color: ColorKey,
}

impl Segment {
    /// Start as minute of its own day.
    pub fn day_start_minute(&self) -> i64 {
        self.start_minute.rem_euclid(DAY)
    }

    /// End as minute of its own day.
    pub fn day_end_minute(&self) -> i64 {
        self.end_minute.rem_euclid(DAY)
    }
}

/// Cuts clipped events into per-day segments with a minimum duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentBuilder {
    first_day: i32,
    min_minutes: i64,
}

impl SegmentBuilder {
    pub fn new(first_day: i32, min_minutes: i64) -> Self {
        Self {
            first_day,
            min_minutes,
        }
    }

    pub fn min_minutes(&self) -> i64 {
        self.min_minutes
    }

    /// One segment per day covered by `event`, in day order.
    ///
    /// `min_start` is a floor for the first segment's start; later days always
    /// begin at midnight. Every segment lasts at least `min_minutes` unless
    /// that would run past midnight. An event that fails
    /// [`Event::validate`] is reported and yields nothing.
    pub fn build(&self, event: &Event, min_start: i64) -> Vec<Segment> {
        if let Err(e) = event.validate() {
            tracing::error!(
                "Skipping event: {e} (day {} {:04} -> day {} {:04}, color {})",
                event.start_day,
                event.start_time,
                event.end_day,
                event.end_time,
                event.color
            );
            return Vec::new();
        }

        let days = (event.end_day - event.start_day) as usize + 1;
        let mut segments = Vec::with_capacity(days);
        let mut day = event.start_day;
        let mut start_time = event.start_time;
        let mut floor = min_start;
        loop {
            let end_time = if day == event.end_day {
                event.end_time
            } else {
                DAY_IN_MINUTES - 1
            };
            segments.push(self.single_day(day, start_time, end_time, floor, event.color));
            if day == event.end_day {
                break;
            }
            day += 1;
            start_time = 0;
            floor = 0;
        }
        segments
    }

    fn single_day(
        &self,
        day: i32,
        start_time: u32,
        end_time: u32,
        min_start: i64,
        color: ColorKey,
    ) -> Segment {
        let day_offset = i64::from(day - self.first_day) * DAY;
        let end_of_day = day_offset + DAY - 1;

        let start_minute = (day_offset + i64::from(start_time))
            .max(min_start)
            .min(end_of_day);
        // Extend short segments, but never past the end of the day
        let min_end = (start_minute + self.min_minutes).min(end_of_day);
        let end_minute = (day_offset + i64::from(end_time))
            .max(min_end)
            .min(end_of_day);

        Segment {
            start_minute,
            end_minute,
            day,
            color,
        }
    }
}
