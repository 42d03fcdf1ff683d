//! Property tests for segment resolution and pixel mapping.

use proptest::prelude::*;
use weekstrand_core::{
    create_dna_strands, ColorKey, ConflictResolver, Event, EventClipper, MinuteThresholds,
    Segment, StrandConfig, WeekGeometry, ZoneLayout,
};

const FIRST_DAY: i32 = 2_461_332;
const DAYS: usize = 7;
const CONFLICT: ColorKey = ColorKey::BLACK;
const PALETTE: [ColorKey; 3] = [
    ColorKey::rgb(0xFF, 0, 0),
    ColorKey::rgb(0, 0xFF, 0),
    ColorKey::rgb(0, 0, 0xFF),
];

fn event_strategy() -> impl Strategy<Value = Event> {
    (-1i32..8, 0u32..1440, 0u32..3000, 0usize..PALETTE.len()).prop_map(
        |(day, start, duration, color)| {
            let end = i64::from(day) * 1440 + i64::from(start) + i64::from(duration);
            Event::spanning(
                FIRST_DAY + day,
                start,
                FIRST_DAY + end.div_euclid(1440) as i32,
                end.rem_euclid(1440) as u32,
                PALETTE[color],
            )
        },
    )
}

fn sorted_events() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec(event_strategy(), 1..40).prop_map(|mut events| {
        events.sort_by_key(|e| (e.start_day, e.start_time));
        events
    })
}

fn geometry(min_pixels: i32) -> WeekGeometry {
    WeekGeometry::with_even_columns(FIRST_DAY, DAYS, 0.0, 12.0, 0, 240, min_pixels)
}

/// Run the clipping and resolution stages and return the segment list.
fn resolve(events: &[Event], min_pixels: i32) -> ConflictResolver {
    let geometry = geometry(min_pixels);
    let config = StrandConfig::default();
    let thresholds = MinuteThresholds::new(min_pixels, geometry.height(), &config);
    let clipper = EventClipper::new(
        FIRST_DAY,
        geometry.last_julian_day(),
        thresholds.min_other_minutes,
    );
    let mut resolver = ConflictResolver::new(FIRST_DAY, thresholds.min_minutes, CONFLICT);
    for event in events {
        if let Some(clipped) = clipper.clip(event) {
            resolver.add_event(&clipped);
        }
    }
    resolver
}

fn same_day_pairs(segments: &[Segment]) -> impl Iterator<Item = (&Segment, &Segment)> {
    segments
        .windows(2)
        .map(|w| (&w[0], &w[1]))
        .filter(|(a, b)| a.day == b.day)
}

proptest! {
    #[test]
    fn segments_stay_within_their_day(events in sorted_events(), min_pixels in 0i32..12) {
        let resolver = resolve(&events, min_pixels);
        for s in resolver.segments() {
            let day_offset = i64::from(s.day - FIRST_DAY) * 1440;
            prop_assert!(s.day >= FIRST_DAY && s.day < FIRST_DAY + DAYS as i32);
            prop_assert!(s.start_minute >= day_offset, "{:?}", s);
            prop_assert!(s.start_minute <= s.end_minute, "{:?}", s);
            prop_assert!(s.end_minute < day_offset + 1440, "{:?}", s);
        }
    }

    #[test]
    fn segments_ordered_and_disjoint(events in sorted_events(), min_pixels in 0i32..12) {
        let resolver = resolve(&events, min_pixels);
        let segments = resolver.segments();
        for w in segments.windows(2) {
            prop_assert!(w[0].start_minute <= w[1].start_minute, "{:?}", w);
        }
        // Same-day neighbours may share a boundary minute but never overlap
        for (a, b) in same_day_pairs(segments) {
            prop_assert!(b.start_minute >= a.end_minute, "{:?} overlaps {:?}", a, b);
        }
    }

    #[test]
    fn touching_conflicts_are_merged(events in sorted_events(), min_pixels in 0i32..12) {
        let resolver = resolve(&events, min_pixels);
        for (a, b) in same_day_pairs(resolver.segments()) {
            if a.color == CONFLICT && b.color == CONFLICT {
                prop_assert!(b.start_minute > a.end_minute + 1, "{:?} touches {:?}", a, b);
            }
        }
    }

    #[test]
    fn counts_match_segments(events in sorted_events(), min_pixels in 0i32..12) {
        let resolver = resolve(&events, min_pixels);
        for color in PALETTE.iter().chain(std::iter::once(&CONFLICT)) {
            let expected = resolver.segments().iter().filter(|s| s.color == *color).count();
            prop_assert_eq!(resolver.tally().count(*color), expected);
        }
    }

    #[test]
    fn strands_have_four_points_per_segment(events in sorted_events(), min_pixels in 0i32..12) {
        let config = StrandConfig::default();
        let strands = create_dna_strands(&events, &geometry(min_pixels), &config)
            .expect("non-degenerate input");
        for strand in strands.values() {
            prop_assert!(strand.count > 0);
            prop_assert_eq!(strand.points.len(), strand.count * 4);
            for [x0, y0, x1, y1] in strand.lines() {
                prop_assert_eq!(x0, x1);
                prop_assert!(y0 <= y1);
                prop_assert!((0.0..=240.0).contains(&y1));
            }
        }
        let again = create_dna_strands(&events, &geometry(min_pixels), &config);
        prop_assert_eq!(Some(strands), again);
    }

    #[test]
    fn pixel_offset_is_monotonic(
        height in 8i32..2000,
        work_day_start in 0u32..1439,
        span in 1u32..1440,
    ) {
        let config = StrandConfig {
            work_day_start,
            work_day_end: (work_day_start + span).min(1440),
            ..Default::default()
        };
        let layout = ZoneLayout::new(height, &config);
        let mut previous = layout.offset(0);
        prop_assert!(previous >= 0);
        for minute in 1..1440 {
            let offset = layout.offset(minute);
            prop_assert!(offset >= previous, "offset drops at minute {}", minute);
            prop_assert!(offset <= i64::from(height));
            previous = offset;
        }
    }
}
