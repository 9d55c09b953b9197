//! # grid-engine
//!
//! Calendar layout for month, week, day and agenda views.
//!
//! The engine turns dates and already-fetched events into the structures a
//! renderer draws: classified days, week rows, month blocks, quarter-hour event
//! spans and agenda buckets. It performs no I/O and never reads the clock;
//! "today" is always a parameter.
//!
//! ## Modules
//!
//! - [`day`] -- day variants, style bundles, day labels and ids
//! - [`sequence`] -- lazy infinite sequence of classified days
//! - [`grid`] -- week rows, month blocks, scroll extension
//! - [`span`] -- event placement on the 101-line day grid
//! - [`agenda`] -- range filtering, date buckets, duration wording
//! - [`dayview`] -- events of a single day with their spans
//! - [`event`] -- the event record consumed by the engine
//! - [`config`] -- layout configuration
//! - [`error`] -- Error types

pub mod agenda;
pub mod config;
pub mod day;
pub mod dayview;
pub mod error;
pub mod event;
pub mod grid;
pub mod sequence;
pub mod span;

pub use agenda::{agenda, agenda_range, bucket_by_date, events_in_range, human_duration, AgendaBucket};
pub use config::GridConfig;
pub use day::{classify, parse_day_id, CalendarDay, DayVariant, WEEK_LENGTH};
pub use dayview::{parse_day_view_date, DayView};
pub use error::GridError;
pub use event::Event;
pub use grid::{extend_weeks, month_block, partition_into_weeks, MonthBlock, Week};
pub use sequence::{days_from, DaySequence};
pub use span::EventSpan;
