//! Lazy day sequences.
//!
//! [`DaySequence`] walks forward from a start date one day at a time, classifying
//! each date as it goes. It never yields the start date itself and it has no end,
//! so every consumer must bound it (`take`, `take_while`, ...).

use chrono::NaiveDate;

use crate::day::{classify, CalendarDay};

/// Infinite, restartable sequence of the days following `start`.
#[derive(Debug, Clone)]
pub struct DaySequence {
    cursor: Option<NaiveDate>,
    today: NaiveDate,
}

impl DaySequence {
    /// Start a sequence whose first element is the day after `start`.
    pub fn new(start: NaiveDate, today: NaiveDate) -> Self {
        Self {
            cursor: Some(start),
            today,
        }
    }
}

impl Iterator for DaySequence {
    type Item = CalendarDay;

    fn next(&mut self) -> Option<CalendarDay> {
        // Running off the end of the calendar ends the sequence.
        let next = self.cursor?.succ_opt();
        self.cursor = next;
        next.map(|date| classify(date, self.today))
    }
}

/// The `count` days following `start`.
pub fn days_from(
    start: NaiveDate,
    count: usize,
    today: NaiveDate,
) -> impl Iterator<Item = CalendarDay> {
    DaySequence::new(start, today).take(count)
}
