//! Converting a week of events into drawable strands.
//!
//! Events between midnight and the start of the work day are compressed into
//! the top 1/8 of the drawing area, events after the work day into the bottom
//! 1/8, and the work day uses the remaining 3/4. Segments keep at least
//! `min_pixels` of height, except for conflicts in the compressed zones,
//! which may be smaller.

use crate::clip::EventClipper;
use crate::config::StrandConfig;
use crate::event::Event;
use crate::geometry::{MinuteThresholds, WeekGeometry};
use crate::resolver::ConflictResolver;
use crate::strand::StrandMap;
use crate::weave::StrandWeaver;

/// Convert events into strands for the days described by `geometry`.
///
/// `events` must be sorted by start time. Returns `None` when there is
/// nothing to draw: no events, no day columns, a drawing area shorter than
/// [`MIN_DRAW_HEIGHT`](crate::geometry::MIN_DRAW_HEIGHT), a negative
/// `min_pixels`, or an invalid configuration. Events outside the window are
/// ignored and malformed events are logged and skipped.
pub fn create_dna_strands(
    events: &[Event],
    geometry: &WeekGeometry,
    config: &StrandConfig,
) -> Option<StrandMap> {
    if events.is_empty() || !geometry.is_drawable() {
        tracing::debug!(
            "Nothing to draw: {} events, {} days, height {}, min_pixels {}",
            events.len(),
            geometry.num_days(),
            geometry.height(),
            geometry.min_pixels
        );
        return None;
    }
    if let Err(e) = config.validate() {
        tracing::warn!("Refusing to build strands: {e}");
        return None;
    }

    let first_day = geometry.first_julian_day;
    let thresholds = MinuteThresholds::new(geometry.min_pixels, geometry.height(), config);
    let clipper = EventClipper::new(
        first_day,
        geometry.last_julian_day(),
        thresholds.min_other_minutes,
    );
    let mut resolver = ConflictResolver::new(first_day, thresholds.min_minutes, config.conflict_color);

    for event in events {
        let Some(clipped) = clipper.clip(event) else {
            continue;
        };
        if config.track_all_day && clipped.all_day {
            resolver
                .tally_mut()
                .add_all_day(&clipped, first_day, geometry.num_days());
            continue;
        }
        resolver.add_event(&clipped);
    }

    let (segments, tally) = resolver.into_parts();
    tracing::debug!(
        "Resolved {} events into {} segments (min {} minutes)",
        events.len(),
        segments.len(),
        thresholds.min_minutes
    );
    Some(StrandWeaver::new(geometry, config).weave(&segments, tally))
}
