//! Drawing geometry and the minute-to-pixel mapping.
//!
//! The vertical axis of a day column is split into three zones. The work day
//! takes 3/4 of the height; the hours before and after it share the rest
//! equally, so off-hours are compressed into thin bands at the top and
//! bottom.

use serde::{Deserialize, Serialize};

use crate::config::StrandConfig;

/// Minutes in one day.
pub const DAY_IN_MINUTES: u32 = 24 * 60;

/// Smallest drawable height (bottom - top) in pixels.
pub const MIN_DRAW_HEIGHT: i32 = 8;

/// Where a week's strands are drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekGeometry {
    /// Julian day of the first column.
    pub first_julian_day: i32,
    /// Lowest y value strands are drawn at.
    pub top: i32,
    /// Highest y value strands are drawn at.
    pub bottom: i32,
    /// Minimum drawn length of a segment.
    pub min_pixels: i32,
    /// x coordinate of each day column, one per day of the window.
    pub day_xs: Vec<f32>,
}

impl WeekGeometry {
    /// Geometry with `days` evenly spaced columns, each centered in its slot.
    pub fn with_even_columns(
        first_julian_day: i32,
        days: usize,
        left: f32,
        column_width: f32,
        top: i32,
        bottom: i32,
        min_pixels: i32,
    ) -> Self {
        let day_xs = (0..days)
            .map(|i| left + column_width * i as f32 + column_width / 2.0)
            .collect();
        Self {
            first_julian_day,
            top,
            bottom,
            min_pixels,
            day_xs,
        }
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn num_days(&self) -> usize {
        self.day_xs.len()
    }

    pub fn last_julian_day(&self) -> i32 {
        self.first_julian_day + self.day_xs.len() as i32 - 1
    }

    /// Whether anything can be drawn with this geometry.
    pub fn is_drawable(&self) -> bool {
        !self.day_xs.is_empty() && self.height() >= MIN_DRAW_HEIGHT && self.min_pixels >= 0
    }

    /// x coordinate of the column showing `julian_day`.
    pub fn day_x(&self, julian_day: i32) -> Option<f32> {
        let index = usize::try_from(julian_day - self.first_julian_day).ok()?;
        self.day_xs.get(index).copied()
    }
}

/// Minimum segment durations derived from the minimum pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinuteThresholds {
    /// Minutes that occupy `min_pixels` in the work-day zone.
    pub min_minutes: i64,
    /// Minimum distance from midnight for starts in the compressed zones.
    pub min_other_minutes: i64,
}

impl MinuteThresholds {
    pub fn new(min_pixels: i32, height: i32, config: &StrandConfig) -> Self {
        // minutes/pixel in the work zone, which is 3/4 of the height
        let min_minutes = if height > 0 {
            i64::from(min_pixels) * 4 * i64::from(config.work_day_minutes())
                / (3 * i64::from(height))
        } else {
            0
        };
        // The off-hour zones hold a bit under half the pixels per minute
        let min_other_minutes = min_minutes * 5 / 2;
        Self {
            min_minutes,
            min_other_minutes,
        }
    }
}

/// Three-zone piecewise-linear mapping from minute of day to pixel offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneLayout {
    work_day_start: i64,
    work_day_end: i64,
    work_day_end_length: i64,
    work_day_height: i64,
    remainder_height: i64,
}

impl ZoneLayout {
    pub fn new(height: i32, config: &StrandConfig) -> Self {
        let height = i64::from(height);
        let work_day_height = height * 3 / 4;
        Self {
            work_day_start: i64::from(config.work_day_start),
            work_day_end: i64::from(config.work_day_end),
            work_day_end_length: i64::from(config.work_day_end_length()),
            work_day_height,
            remainder_height: (height - work_day_height) / 2,
        }
    }

    pub fn work_day_height(&self) -> i64 {
        self.work_day_height
    }

    pub fn remainder_height(&self) -> i64 {
        self.remainder_height
    }

    /// Pixel offset from the top of the drawing area for `minute` of the day.
    pub fn offset(&self, minute: i64) -> i64 {
        if minute < self.work_day_start {
            minute * self.remainder_height / self.work_day_start
        } else if minute < self.work_day_end {
            self.remainder_height
                + (minute - self.work_day_start) * self.work_day_height
                    / (self.work_day_end - self.work_day_start)
        } else {
            self.remainder_height
                + self.work_day_height
                + (minute - self.work_day_end) * self.remainder_height
                    / self.work_day_end_length
        }
    }
}
