//! Event geometry on the day-view grid.
//!
//! The day view is a single column of 101 grid lines: five header lines followed
//! by one line per quarter hour (4 per hour, 24 hours). An event occupies the
//! rows between its start and end lines. When a reference day is given, an event
//! that began before that day is drawn from the first line, and one that runs
//! past the day is drawn to the last line; their times are then shown with the
//! date so the reader can tell where they really start or end.

use chrono::{Duration, NaiveDateTime, Timelike};
use serde::Serialize;

use crate::config::{GridConfig, DEFAULT_COLOR};
use crate::event::Event;

/// Grid lines reserved for the header above midnight.
pub const HEADER_SLOTS: u32 = 5;
/// Quarter-hour lines per hour.
pub const SLOTS_PER_HOUR: u32 = 4;
/// Minutes covered by one grid line.
pub const MINUTES_PER_SLOT: u32 = 15;
/// First line of the grid; truncated starts snap here.
pub const FIRST_SLOT: u32 = 1;
/// Last line of the grid; truncated ends snap here.
pub const LAST_SLOT: u32 = HEADER_SLOTS + SLOTS_PER_HOUR * 24;

const TIME_FORMAT: &str = "%H:%M";
const MULTIDAY_FORMAT: &str = "%d/%m %H:%M";

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Rendering geometry of one event on one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventSpan {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Sub-day part of the event's length, in minutes. Whole days are not counted.
    pub length_minutes: f64,
    /// The event started before the reference day.
    pub start_truncated: bool,
    /// The event runs to or past the end of the reference day.
    pub end_truncated: bool,
    pub color: String,
    /// Human-readable time range, e.g. `07:05 - 09:15` or `01/02 13:00 - 23:30`.
    pub total_time: String,
    pub start_slot: u32,
    pub end_slot: u32,
    /// CSS `grid-row` value, `"<start_slot> / <end_slot>"`.
    pub grid_position: String,
}

impl EventSpan {
    /// Project `event` onto the day starting at `reference_day`, using the
    /// default event color.
    ///
    /// Without a reference day no truncation happens and the event is laid out
    /// by its own times.
    pub fn project(event: &Event, reference_day: Option<NaiveDateTime>) -> Self {
        Self::project_colored(event, reference_day, DEFAULT_COLOR)
    }

    /// Like [`EventSpan::project`], with the fallback color taken from `config`.
    pub fn project_with(
        event: &Event,
        reference_day: Option<NaiveDateTime>,
        config: &GridConfig,
    ) -> Self {
        Self::project_colored(event, reference_day, &config.default_color)
    }

    fn project_colored(
        event: &Event,
        reference_day: Option<NaiveDateTime>,
        default_color: &str,
    ) -> Self {
        let (start_truncated, end_truncated) = truncation(event, reference_day);

        let start_slot = if start_truncated {
            FIRST_SLOT
        } else {
            grid_slot(event.start)
        };
        let end_slot = if end_truncated {
            LAST_SLOT
        } else {
            grid_slot(event.end)
        };

        let total_time = format!(
            "{} - {}",
            event.start.format(time_format(start_truncated)),
            event.end.format(time_format(end_truncated)),
        );

        Self {
            start: event.start,
            end: event.end,
            length_minutes: length_minutes(event),
            start_truncated,
            end_truncated,
            color: event
                .color
                .clone()
                .unwrap_or_else(|| default_color.to_string()),
            total_time,
            start_slot,
            end_slot,
            grid_position: format!("{} / {}", start_slot, end_slot),
        }
    }
}

/// Whether `event` is cut off at the start and/or end of the day beginning at
/// `reference_day`.
fn truncation(event: &Event, reference_day: Option<NaiveDateTime>) -> (bool, bool) {
    let Some(day_start) = reference_day else {
        return (false, false);
    };
    let start_truncated = event.start < day_start;
    let end_truncated = day_start
        .checked_add_signed(Duration::hours(24))
        .is_some_and(|day_end| day_end <= event.end);
    (start_truncated, end_truncated)
}

fn time_format(truncated: bool) -> &'static str {
    if truncated {
        MULTIDAY_FORMAT
    } else {
        TIME_FORMAT
    }
}

/// Minutes between start and end, ignoring whole days.
fn length_minutes(event: &Event) -> f64 {
    let seconds = (event.end - event.start)
        .num_seconds()
        .rem_euclid(SECONDS_PER_DAY);
    seconds as f64 / 60.0
}

/// Grid line of a wall-clock time.
pub fn grid_slot(time: NaiveDateTime) -> u32 {
    time.hour() * SLOTS_PER_HOUR + quarter_hour_position(Some(time.minute())) + HEADER_SLOTS
}

/// Quarter of the hour a minute value falls in.
///
/// Ranges are open below and closed above: `1..=15` is 1, `16..=30` is 2,
/// `31..=45` is 3, `46..=60` is 4. Zero, a missing value, or anything past 60
/// is 0, i.e. the line of the full hour.
pub fn quarter_hour_position(minutes: Option<u32>) -> u32 {
    let Some(minutes) = minutes else {
        return 0;
    };
    (1..=SLOTS_PER_HOUR)
        .find(|quarter| {
            let upper = quarter * MINUTES_PER_SLOT;
            upper - MINUTES_PER_SLOT < minutes && minutes <= upper
        })
        .unwrap_or(0)
}
