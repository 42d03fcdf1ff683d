//! Strands: the drawable output, one per color.
//!
//! A strand holds a flat list of line endpoints. Drawing a week means setting
//! the pen to each strand's color and drawing its points as line pairs. The
//! conflict strand additionally carries the per-day all-day colors.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::color::ColorKey;
use crate::event::Event;

/// All segments of one color, ready for drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strand {
    pub color: ColorKey,
    /// Number of segments drawn in this color.
    pub count: usize,
    /// `x0, y0, x1, y1` for each segment, in segment order.
    pub points: Vec<f32>,
    /// All-day color per day of the window, `None` for days without one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_days: Option<Vec<Option<ColorKey>>>,
}

impl Strand {
    pub fn new(color: ColorKey) -> Self {
        Self {
            color,
            count: 0,
            points: Vec::new(),
            all_days: None,
        }
    }

    /// Line endpoints grouped per segment.
    pub fn lines(&self) -> impl Iterator<Item = [f32; 4]> + '_ {
        self.points
            .chunks_exact(4)
            .map(|c| [c[0], c[1], c[2], c[3]])
    }

    /// A strand with nothing to draw is dropped from the output.
    pub fn is_empty(&self) -> bool {
        self.count == 0 && self.all_days.is_none()
    }
}

/// Strands keyed by color, in color order.
pub type StrandMap = BTreeMap<ColorKey, Strand>;

/// Segment counts per color while a week is being converted.
///
/// The conflict strand always exists; other colors are created the first
/// time a segment of that color is counted.
#[derive(Debug, Clone)]
pub struct StrandTally {
    conflict_color: ColorKey,
    strands: StrandMap,
}

impl StrandTally {
    pub fn new(conflict_color: ColorKey) -> Self {
        let mut strands = StrandMap::new();
        strands.insert(conflict_color, Strand::new(conflict_color));
        Self {
            conflict_color,
            strands,
        }
    }

    pub fn conflict_color(&self) -> ColorKey {
        self.conflict_color
    }

    fn strand_mut(&mut self, color: ColorKey) -> &mut Strand {
        self.strands
            .entry(color)
            .or_insert_with(|| Strand::new(color))
    }

    pub fn increment(&mut self, color: ColorKey) {
        self.strand_mut(color).count += 1;
    }

    pub fn decrement(&mut self, color: ColorKey) {
        let strand = self.strand_mut(color);
        debug_assert!(strand.count > 0, "segment count underflow for {color}");
        strand.count = strand.count.saturating_sub(1);
    }

    /// Segment count for `color`, zero when it was never seen.
    pub fn count(&self, color: ColorKey) -> usize {
        self.strands.get(&color).map_or(0, |s| s.count)
    }

    /// Record an all-day event on the conflict strand.
    ///
    /// Each covered day of the window takes the event's color, or the
    /// conflict color when another all-day event already claimed that day.
    pub fn add_all_day(&mut self, event: &Event, first_day: i32, num_days: usize) {
        if num_days == 0 {
            return;
        }
        let conflict = self.conflict_color;
        let all_days = self
            .strand_mut(conflict)
            .all_days
            .get_or_insert_with(|| vec![None; num_days]);

        let first = (event.start_day - first_day).max(0);
        let last = (event.end_day - first_day).min(num_days as i32 - 1);
        for index in first..=last {
            let slot = &mut all_days[index as usize];
            *slot = Some(if slot.is_some() { conflict } else { event.color });
        }
    }

    pub fn into_strands(self) -> StrandMap {
        self.strands
    }
}
