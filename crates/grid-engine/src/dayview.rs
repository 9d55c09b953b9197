//! Day-view assembly.
//!
//! Selects the events touching one day and projects each onto that day's grid.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::config::GridConfig;
use crate::error::{GridError, Result};
use crate::event::Event;
use crate::span::EventSpan;

/// Format of the date segment in day-view requests, e.g. `2021-2-1`.
pub const DAY_VIEW_FORMAT: &str = "%Y-%m-%d";

/// Parse a day-view date. Month and day may be written without padding.
///
/// # Errors
/// Returns `GridError::InvalidDateFormat` if the string is not a `YYYY-MM-DD` date.
pub fn parse_day_view_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DAY_VIEW_FORMAT).map_err(|e| {
        tracing::error!(input, error = %e, "rejected day-view date");
        GridError::InvalidDateFormat {
            input: input.to_string(),
            expected: "YYYY-MM-DD",
        }
    })
}

/// Events that overlap the 24 hours starting at midnight of `day`.
///
/// An event is kept when it starts before the day is over and ends at or after
/// its midnight, so an event ending exactly at midnight shows on both days.
/// On the last representable day the day has no end.
pub fn events_on_day(events: &[Event], day: NaiveDate) -> impl Iterator<Item = &Event> {
    let day_start = day.and_time(chrono::NaiveTime::MIN);
    let day_end = day_start.checked_add_signed(Duration::hours(24));
    events.iter().filter(move |event| {
        day_end.is_none_or(|day_end| event.start < day_end) && day_start <= event.end
    })
}

/// An event together with its geometry on the viewed day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedEvent {
    pub event: Event,
    pub span: EventSpan,
}

/// Everything the day view draws.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayView {
    pub date: NaiveDate,
    /// Uppercase full month name, e.g. `FEBRUARY`.
    pub month: String,
    pub day: u32,
    pub events: Vec<PlacedEvent>,
}

impl DayView {
    /// Lay out the events of `events` that touch `date`, in input order.
    pub fn build(date: NaiveDate, events: &[Event], config: &GridConfig) -> Self {
        let midnight = date.and_time(chrono::NaiveTime::MIN);
        let events = events_on_day(events, date)
            .map(|event| PlacedEvent {
                span: EventSpan::project_with(event, Some(midnight), config),
                event: event.clone(),
            })
            .collect();

        Self {
            date,
            month: date.format("%B").to_string().to_uppercase(),
            day: date.day(),
            events,
        }
    }
}
