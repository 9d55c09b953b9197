//! Week and month-block partitioning.
//!
//! A month block is the rectangle of days drawn by the month view: it opens on
//! the configured week-start weekday on or before the 1st of the month and runs
//! for a fixed number of full weeks, borrowing leading and trailing days from the
//! neighbouring months.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;

use crate::config::GridConfig;
use crate::day::{classify, CalendarDay, WEEK_LENGTH};
use crate::sequence::{days_from, DaySequence};

/// One grid row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Week {
    pub days: Vec<CalendarDay>,
}

/// The rows of a month view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthBlock {
    pub weeks: Vec<Week>,
}

impl MonthBlock {
    /// All days of the block in display order.
    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.weeks.iter().flat_map(|week| week.days.iter())
    }

    pub fn first_day(&self) -> Option<&CalendarDay> {
        self.days().next()
    }

    pub fn last_day(&self) -> Option<&CalendarDay> {
        self.weeks.last().and_then(|week| week.days.last())
    }
}

/// Slice `days` into consecutive rows of `week_length`.
///
/// The last row is shorter when the input length is not a multiple of
/// `week_length`; it is not padded. A `week_length` of zero yields no rows.
pub fn partition_into_weeks<I>(days: I, week_length: usize) -> Vec<Week>
where
    I: IntoIterator<Item = CalendarDay>,
{
    if week_length == 0 {
        return Vec::new();
    }

    let mut days = days.into_iter().peekable();
    let mut weeks = Vec::new();
    while days.peek().is_some() {
        weeks.push(Week {
            days: days.by_ref().take(week_length).collect(),
        });
    }
    weeks
}

/// The first date shown in the month view of `date`'s month: the latest
/// `week_start` weekday on or before the 1st.
///
/// In the first month of the calendar the block is clamped to
/// `NaiveDate::MIN`.
pub fn first_day_of_month_block(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    let first_of_month = date.with_day(1).unwrap_or(date);
    let lead = (first_of_month.weekday().num_days_from_monday() + 7
        - week_start.num_days_from_monday())
        % 7;
    first_of_month
        .checked_sub_days(Days::new(u64::from(lead)))
        .unwrap_or(NaiveDate::MIN)
}

/// Build the month block containing `reference`, `weeks` rows tall.
pub fn month_block(
    reference: NaiveDate,
    weeks: usize,
    week_start: Weekday,
    today: NaiveDate,
) -> MonthBlock {
    let first = first_day_of_month_block(reference, week_start);
    // Equivalent to a sequence started the day before `first`.
    let days = std::iter::once(classify(first, today))
        .chain(DaySequence::new(first, today))
        .take(WEEK_LENGTH * weeks);

    MonthBlock {
        weeks: partition_into_weeks(days, WEEK_LENGTH),
    }
}

/// [`month_block`] with block height and week start taken from `config`.
pub fn month_block_for(reference: NaiveDate, today: NaiveDate, config: &GridConfig) -> MonthBlock {
    month_block(
        reference,
        config.month_block_weeks,
        config.week_start,
        today,
    )
}

/// The rows appended below `last_day` when the month view scrolls.
pub fn extend_weeks(last_day: NaiveDate, days: usize, today: NaiveDate) -> Vec<Week> {
    partition_into_weeks(days_from(last_day, days, today), WEEK_LENGTH)
}

/// Column headers of the month view, starting at `week_start`.
pub fn weekday_names(week_start: Weekday) -> Vec<String> {
    // Any real week will do; ISO week 1 of 2024 names every weekday once.
    NaiveDate::from_isoywd_opt(2024, 1, week_start)
        .into_iter()
        .flat_map(|first| first.iter_days().take(WEEK_LENGTH))
        .map(|date| date.format("%A").to_string())
        .collect()
}
