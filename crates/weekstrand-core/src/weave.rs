//! Turning the resolved segment list into per-color point buffers.

use crate::config::StrandConfig;
use crate::geometry::{WeekGeometry, ZoneLayout};
use crate::segment::Segment;
use crate::strand::{StrandMap, StrandTally};

/// Final pass of a conversion: prune unused colors and emit line endpoints.
#[derive(Debug, Clone)]
pub struct StrandWeaver<'a> {
    geometry: &'a WeekGeometry,
    layout: ZoneLayout,
}

impl<'a> StrandWeaver<'a> {
    pub fn new(geometry: &'a WeekGeometry, config: &StrandConfig) -> Self {
        Self {
            geometry,
            layout: ZoneLayout::new(geometry.height(), config),
        }
    }

    /// Endpoints `(x, y_top, x, y_bottom)` of one segment.
    pub fn line(&self, segment: &Segment) -> Option<[f32; 4]> {
        let x = self.geometry.day_x(segment.day)?;
        let top = i64::from(self.geometry.top);
        let y0 = top + self.layout.offset(segment.day_start_minute());
        let y1 = top + self.layout.offset(segment.day_end_minute());
        Some([x, y0 as f32, x, y1 as f32])
    }

    /// Build the output strands. Colors without segments or all-day data are
    /// dropped; every other strand gets exactly four points per segment, in
    /// segment order.
    pub fn weave(&self, segments: &[Segment], tally: StrandTally) -> StrandMap {
        let mut strands = tally.into_strands();
        strands.retain(|_, strand| !strand.is_empty());
        for strand in strands.values_mut() {
            strand.points = Vec::with_capacity(strand.count * 4);
        }

        for segment in segments {
            let Some(strand) = strands.get_mut(&segment.color) else {
                tracing::warn!("No strand for segment color {}", segment.color);
                continue;
            };
            match self.line(segment) {
                Some(line) => strand.points.extend_from_slice(&line),
                None => tracing::warn!("Segment on day {} is outside the window", segment.day),
            }
        }
        strands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorKey;

    const RED: ColorKey = ColorKey::rgb(0xFF, 0, 0);
    const BLUE: ColorKey = ColorKey::rgb(0, 0, 0xFF);

    fn geometry() -> WeekGeometry {
        WeekGeometry {
            first_julian_day: 100,
            top: 10,
            bottom: 210,
            min_pixels: 4,
            day_xs: vec![5.0, 15.0, 25.0],
        }
    }

    fn segment(day: i32, start: i64, end: i64, color: ColorKey) -> Segment {
        let offset = i64::from(day - 100) * 1440;
        Segment {
            start_minute: offset + start,
            end_minute: offset + end,
            day,
            color,
        }
    }

    #[test]
    fn test_points_use_day_column_and_zones() {
        let geometry = geometry();
        let weaver = StrandWeaver::new(&geometry, &StrandConfig::default());
        let segments = vec![
            segment(100, 360, 1200, RED),
            segment(101, 0, 360, BLUE),
            segment(102, 780, 800, RED),
        ];
        let mut tally = StrandTally::new(ColorKey::BLACK);
        tally.increment(RED);
        tally.increment(BLUE);
        tally.increment(RED);

        let strands = weaver.weave(&segments, tally);
        assert_eq!(strands.len(), 2);
        assert!(!strands.contains_key(&ColorKey::BLACK));

        let red = &strands[&RED];
        assert_eq!(red.count, 2);
        assert_eq!(red.points.len(), 8);
        assert_eq!(&red.points[..4], &[5.0, 35.0, 5.0, 185.0]);
        // 780 -> 25 + 420*150/840 = 100, 800 -> 25 + 440*150/840 = 103
        assert_eq!(&red.points[4..], &[25.0, 110.0, 25.0, 113.0]);

        let blue = &strands[&BLUE];
        assert_eq!(blue.points, vec![15.0, 10.0, 15.0, 35.0]);
    }

    #[test]
    fn test_pruned_strands_are_skipped() {
        let geometry = geometry();
        let weaver = StrandWeaver::new(&geometry, &StrandConfig::default());
        let mut tally = StrandTally::new(ColorKey::BLACK);
        tally.increment(RED);
        tally.decrement(RED);
        let strands = weaver.weave(&[], tally);
        assert!(strands.is_empty());
    }
}
