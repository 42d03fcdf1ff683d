//! Conflict resolution between overlapping segments.
//!
//! The resolver keeps a single list of segments ordered by start minute with
//! no two same-day segments overlapping. Events must be added in ascending
//! start order. Wherever a new event overlaps what is already in the list,
//! the shared time is recolored with the conflict color, and conflict
//! segments that touch on the same day are folded into one so as few lines
//! as possible get drawn.
//!
//! Any overlap counts as a conflict, including two events of the same color.

use crate::color::ColorKey;
use crate::event::Event;
use crate::segment::{Segment, SegmentBuilder};
use crate::strand::StrandTally;

/// Running, overlap-free segment list for one conversion.
#[derive(Debug, Clone)]
pub struct ConflictResolver {
    first_day: i32,
    builder: SegmentBuilder,
    segments: Vec<Segment>,
    tally: StrandTally,
}

impl ConflictResolver {
    pub fn new(first_day: i32, min_minutes: i64, conflict_color: ColorKey) -> Self {
        Self {
            first_day,
            builder: SegmentBuilder::new(first_day, min_minutes),
            segments: Vec::new(),
            tally: StrandTally::new(conflict_color),
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn tally(&self) -> &StrandTally {
        &self.tally
    }

    pub fn tally_mut(&mut self) -> &mut StrandTally {
        &mut self.tally
    }

    pub fn into_parts(self) -> (Vec<Segment>, StrandTally) {
        (self.segments, self.tally)
    }

    /// Add a clipped event.
    ///
    /// An event starting at or after the end of the last segment cannot
    /// overlap anything and is appended, with its first segment starting no
    /// earlier than that end. Anything else is inserted segment by segment.
    pub fn add_event(&mut self, event: &Event) {
        let start_minute = event.start_minute_from(self.first_day).max(0);
        let min_start = match self.segments.last() {
            Some(last) if start_minute >= last.end_minute => last.end_minute,
            _ => 0,
        };
        for segment in self.builder.build(event, min_start) {
            self.insert(segment);
        }
    }

    fn push(&mut self, segment: Segment) {
        self.tally.increment(segment.color);
        self.segments.push(segment);
    }

    fn insert(&mut self, incoming: Segment) {
        match self.segments.last() {
            None => return self.push(incoming),
            Some(last) if incoming.start_minute >= last.end_minute => return self.push(incoming),
            _ => {}
        }

        if !self.absorb(incoming) {
            // Nothing on its day overlaps; keep it as a segment of its own
            let index = self
                .segments
                .partition_point(|s| s.start_minute <= incoming.start_minute);
            self.segments.insert(index, incoming);
            self.tally.increment(incoming.color);
        }
    }

    /// Merge `incoming` into every overlapping segment as a conflict.
    ///
    /// Walks backward from the tail while `incoming` starts at or before the
    /// current segment's end. Returns whether anything overlapped.
    fn absorb(&mut self, incoming: Segment) -> bool {
        let conflict = self.tally.conflict_color();
        let min_minutes = self.builder.min_minutes();
        let mut absorbed = false;

        let mut cursor = self.segments.len().checked_sub(1);
        while let Some(mut i) = cursor {
            let current = self.segments[i];
            if incoming.start_minute > current.end_minute {
                break;
            }
            if current.day != incoming.day
                || !overlaps(&current, incoming.start_minute, incoming.end_minute)
            {
                cursor = i.checked_sub(1);
                continue;
            }
            absorbed = true;

            if current.color != conflict {
                // Keep the part before the overlap in its own color if it is
                // long enough to be drawn
                if incoming.start_minute > current.start_minute + min_minutes {
                    let solo = Segment {
                        end_minute: incoming.start_minute - 1,
                        ..current
                    };
                    self.segments[i].start_minute = incoming.start_minute;
                    self.segments.insert(i, solo);
                    self.tally.increment(solo.color);
                    i += 1;
                }
                self.tally.decrement(current.color);
                self.segments[i].color = conflict;
                self.tally.increment(conflict);
            }

            let merged = &mut self.segments[i];
            merged.start_minute = merged.start_minute.min(incoming.start_minute);
            merged.end_minute = merged.end_minute.max(incoming.end_minute);

            if i + 1 < self.segments.len() {
                let current = self.segments[i];
                let rhs = &mut self.segments[i + 1];
                if rhs.color == conflict
                    && rhs.day == current.day
                    && rhs.start_minute <= current.end_minute + 1
                {
                    rhs.start_minute = rhs.start_minute.min(current.start_minute);
                    rhs.end_minute = rhs.end_minute.max(current.end_minute);
                    self.segments.remove(i);
                    self.tally.decrement(conflict);
                }
            }
            if i > 0 {
                let current = self.segments[i];
                let lhs = &mut self.segments[i - 1];
                if lhs.color == conflict
                    && lhs.day == current.day
                    && lhs.end_minute + 1 >= current.start_minute
                {
                    lhs.start_minute = lhs.start_minute.min(current.start_minute);
                    lhs.end_minute = lhs.end_minute.max(current.end_minute);
                    self.segments.remove(i);
                    self.tally.decrement(conflict);
                    i -= 1;
                }
            }

            cursor = i.checked_sub(1);
        }

        absorbed
    }
}

/// Whether `segment` shares time with `start..=end`.
///
/// Ranges that only meet at a boundary minute do not overlap; a zero-length
/// range overlaps anything it lies within.
fn overlaps(segment: &Segment, start: i64, end: i64) -> bool {
    let shared = segment.end_minute.min(end) - segment.start_minute.max(start);
    shared > 0 || (shared == 0 && (segment.start_minute == segment.end_minute || start == end))
}
