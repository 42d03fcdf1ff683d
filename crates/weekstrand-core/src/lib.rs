//! # weekstrand Core Library
//!
//! Turns a week of calendar events into "DNA strands": per-color lists of
//! vertical line segments that render a compact overview of how each day is
//! occupied. Rendering, event storage and scrolling stay with the caller;
//! this crate only computes what to draw.
//!
//! ## Architecture
//!
//! - **Clipping**: events are clipped to the displayed window of days
//! - **Segments**: each event is cut into one segment per day, with a
//!   minimum visible duration
//! - **Conflict resolution**: overlapping time is recolored with the
//!   conflict color and adjacent conflicts are merged
//! - **Weaving**: segments are mapped to pixels through a three-zone layout
//!   that compresses the hours outside the work day
//!
//! ## Key Components
//!
//! - [`create_dna_strands`]: one-call conversion
//! - [`StrandConfig`]: work-day window and conflict color
//! - [`WeekGeometry`]: drawing area and day columns
//! - [`Strand`]: drawable output per color

pub mod calendar;
pub mod clip;
pub mod color;
pub mod config;
pub mod dna;
pub mod error;
pub mod event;
pub mod geometry;
pub mod resolver;
pub mod segment;
pub mod strand;
pub mod weave;

pub use calendar::{date_from_julian_day, julian_day, week_start, weeks_since_epoch};
pub use clip::EventClipper;
pub use color::ColorKey;
pub use config::StrandConfig;
pub use dna::create_dna_strands;
pub use error::{ConfigError, CoreError, ValidationError};
pub use event::{parse_events, read_events, Event};
pub use geometry::{MinuteThresholds, WeekGeometry, ZoneLayout, DAY_IN_MINUTES, MIN_DRAW_HEIGHT};
pub use resolver::ConflictResolver;
pub use segment::{Segment, SegmentBuilder};
pub use strand::{Strand, StrandMap, StrandTally};
pub use weave::StrandWeaver;
