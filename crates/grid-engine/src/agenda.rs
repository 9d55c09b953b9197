//! Agenda filtering, bucketing and duration wording.
//!
//! The agenda lists events day by day over a date range. Only the date part of
//! an event's start matters for membership; an event starting late on the last
//! day of the range is still listed, an event that started the day before is not.

use std::collections::HashMap;

use chrono::{Days, Duration, NaiveDate};
use serde::Serialize;

use crate::error::{GridError, Result};
use crate::event::Event;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Events whose start date lies in `[start, end]`, in input order.
///
/// A missing bound or an inverted range (`start > end`) selects nothing.
pub fn events_in_range<'a>(
    events: &'a [Event],
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> impl Iterator<Item = &'a Event> + 'a {
    let range = match (start, end) {
        (Some(start), Some(end)) if start <= end => Some(start..=end),
        _ => None,
    };
    events
        .iter()
        .filter(move |event| range.as_ref().is_some_and(|r| r.contains(&event.start_date())))
}

/// Units the duration wording may use, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Day,
    Hour,
    Minute,
}

impl TimeUnit {
    fn seconds(self) -> i64 {
        match self {
            TimeUnit::Day => SECONDS_PER_DAY,
            TimeUnit::Hour => SECONDS_PER_HOUR,
            TimeUnit::Minute => SECONDS_PER_MINUTE,
        }
    }

    fn describe(self, count: i64) -> String {
        match (self, count) {
            (TimeUnit::Day, 1) => "a day".to_string(),
            (TimeUnit::Hour, 1) => "an hour".to_string(),
            (TimeUnit::Minute, 1) => "a minute".to_string(),
            (TimeUnit::Day, n) => format!("{} days", n),
            (TimeUnit::Hour, n) => format!("{} hours", n),
            (TimeUnit::Minute, n) => format!("{} minutes", n),
        }
    }
}

/// The units with a non-zero component in `delta`.
///
/// Each unit is checked on its own: two days and thirty minutes gives
/// `[Day, Minute]`, without `Hour`. Seconds are never reported.
pub fn granularity(delta: Duration) -> Vec<TimeUnit> {
    let total = delta.num_seconds().max(0);
    let remainder = total % SECONDS_PER_DAY;

    let mut units = Vec::new();
    if total / SECONDS_PER_DAY > 0 {
        units.push(TimeUnit::Day);
    }
    if remainder / SECONDS_PER_HOUR > 0 {
        units.push(TimeUnit::Hour);
    }
    if (remainder % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE > 0 {
        units.push(TimeUnit::Minute);
    }
    units
}

/// Render `delta` using only the given units, largest first.
///
/// Parts are separated by spaces and the last two joined with "and":
/// `2 days 2 hours and 30 minutes`. With no units the result is `instantly`.
pub fn humanize(delta: Duration, units: &[TimeUnit]) -> String {
    let mut remaining = delta.num_seconds().max(0);
    let parts: Vec<String> = units
        .iter()
        .map(|unit| {
            let count = remaining / unit.seconds();
            remaining %= unit.seconds();
            unit.describe(count)
        })
        .collect();

    match parts.split_last() {
        None => "instantly".to_string(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} and {}", rest.join(" "), last),
    }
}

/// How long `event` lasts, in words (`a day and 2 hours`).
///
/// Returns `None` only when there is no event. Events ending before they start
/// are treated as zero-length.
pub fn human_duration(event: Option<&Event>) -> Option<String> {
    let event = event?;
    let delta = event.end - event.start;
    Some(humanize(delta, &granularity(delta)))
}

/// One listed event with its duration wording.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgendaEntry {
    pub event: Event,
    pub duration: Option<String>,
}

/// The events listed under one date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgendaDay {
    pub date: NaiveDate,
    pub entries: Vec<AgendaEntry>,
}

/// Events grouped by start date.
///
/// Dates keep the order in which they were first seen; entries keep the order
/// in which they were added.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AgendaBucket {
    pub days: Vec<AgendaDay>,
    #[serde(skip)]
    index: HashMap<NaiveDate, usize>,
}

impl AgendaBucket {
    pub fn new() -> Self {
        Self::default()
    }

    /// File `event` under its start date.
    pub fn push(&mut self, event: Event) {
        let date = event.start_date();
        let duration = human_duration(Some(&event));
        let slot = match self.index.get(&date) {
            Some(&slot) => slot,
            None => {
                self.days.push(AgendaDay {
                    date,
                    entries: Vec::new(),
                });
                self.index.insert(date, self.days.len() - 1);
                self.days.len() - 1
            }
        };
        self.days[slot].entries.push(AgendaEntry { event, duration });
    }

    pub fn get(&self, date: NaiveDate) -> Option<&[AgendaEntry]> {
        self.index
            .get(&date)
            .map(|&slot| self.days[slot].entries.as_slice())
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.iter().map(|day| day.date)
    }

    /// Number of distinct dates.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Group `events` by start date, attaching each one's duration wording.
pub fn bucket_by_date<'a, I>(events: I) -> AgendaBucket
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut bucket = AgendaBucket::new();
    for event in events {
        bucket.push(event.clone());
    }
    bucket
}

/// Filter `events` to `[start, end]` and bucket the result.
pub fn agenda(events: &[Event], start: Option<NaiveDate>, end: Option<NaiveDate>) -> AgendaBucket {
    bucket_by_date(events_in_range(events, start, end))
}

/// Resolve the date range an agenda request asks for.
///
/// A day count wins and spans `today ..= today + days`. Otherwise both bounds
/// must be present; if either is missing the agenda covers today only.
///
/// # Errors
/// Returns `GridError::OutOfRange` if `today + days` is past the last
/// representable date.
pub fn agenda_range(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    days: Option<u32>,
    today: NaiveDate,
) -> Result<(NaiveDate, NaiveDate)> {
    match (days, start, end) {
        (Some(days), _, _) => {
            let end = today
                .checked_add_days(Days::new(u64::from(days)))
                .ok_or_else(|| GridError::OutOfRange(format!("{} + {} days", today, days)))?;
            Ok((today, end))
        }
        (None, Some(start), Some(end)) => Ok((start, end)),
        _ => Ok((today, today)),
    }
}
