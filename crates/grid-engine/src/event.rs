//! The event record consumed by the layout engine.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A calendar event as handed over by the persistence layer.
///
/// Timestamps are timezone-naive wall-clock times. `start <= end` is assumed
/// and not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub owner_id: Option<i64>,
}

impl Event {
    pub fn new(title: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            title: title.into(),
            start,
            end,
            color: None,
            owner_id: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_owner(mut self, owner_id: i64) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    /// Calendar date the event starts on.
    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }
}

/// Sort events by start time, then end time. Ties keep their input order.
pub fn sort_by_start(events: &mut [Event]) {
    events.sort_by_key(|event| (event.start, event.end));
}
