//! Day classification -- decides which presentational variant a calendar date is.
//!
//! Every date in a rendered grid is one of four mutually exclusive variants.
//! The variant selects a fixed style bundle from [`DayVariant::style`]; nothing
//! else about a day depends on it. "Today" is always supplied by the caller so
//! classification stays a pure function of its inputs.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;

use crate::error::{GridError, Result};

/// Number of days in a grid row.
pub const WEEK_LENGTH: usize = 7;

/// Display order of the week, Monday first. The last two entries are the weekend.
pub const DAYS_OF_THE_WEEK: [Weekday; WEEK_LENGTH] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Format of the day identity key, e.g. `03-May-1988`.
pub const DAY_ID_FORMAT: &str = "%d-%b-%Y";

/// The presentational classification of a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayVariant {
    Plain,
    Weekend,
    Today,
    FirstDayMonth,
}

/// CSS class bundle attached to a rendered day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayStyle {
    pub day_container: &'static str,
    pub date: &'static str,
    pub daily_event: &'static str,
    pub daily_event_front: &'static str,
    pub daily_event_back: &'static str,
    pub event: &'static str,
}

const DAILY_EVENT_BACK: &str = "daily back text-darkblue background-lightgray";

static PLAIN_STYLE: DayStyle = DayStyle {
    day_container: "day",
    date: "day-number",
    daily_event: "month-event",
    daily_event_front: "daily front background-warmyellow",
    daily_event_back: DAILY_EVENT_BACK,
    event: "event",
};

static WEEKEND_STYLE: DayStyle = DayStyle {
    day_container: "day ",
    date: "day-number text-gray",
    daily_event: "month-event",
    daily_event_front: "daily front background-warmyellow",
    daily_event_back: DAILY_EVENT_BACK,
    event: "event",
};

static TODAY_STYLE: DayStyle = DayStyle {
    day_container: "day text-darkblue background-yellow",
    date: "day-number",
    daily_event: "month-event",
    daily_event_front: "daily front text-lightgray background-darkblue",
    daily_event_back: DAILY_EVENT_BACK,
    event: "event",
};

static FIRST_DAY_MONTH_STYLE: DayStyle = DayStyle {
    day_container: "day text-darkblue background-lightgray",
    date: "day-number",
    daily_event: "month-event",
    daily_event_front: "daily front text-lightgray background-red",
    daily_event_back: DAILY_EVENT_BACK,
    event: "event",
};

impl DayVariant {
    /// The fixed style bundle for this variant.
    pub fn style(self) -> &'static DayStyle {
        match self {
            DayVariant::Plain => &PLAIN_STYLE,
            DayVariant::Weekend => &WEEKEND_STYLE,
            DayVariant::Today => &TODAY_STYLE,
            DayVariant::FirstDayMonth => &FIRST_DAY_MONTH_STYLE,
        }
    }
}

/// One date within a displayed grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// Full English weekday name, e.g. "Tuesday".
    pub name: String,
    pub variant: DayVariant,
    pub style: &'static DayStyle,
}

impl CalendarDay {
    /// The label drawn inside the grid cell.
    ///
    /// The first day of a month carries its month and year (`01 MAY 88`) so the
    /// month boundary is visible; every other day shows only its number (`03`).
    pub fn label(&self) -> String {
        match self.variant {
            DayVariant::FirstDayMonth => self.date.format("%d %b %y").to_string().to_uppercase(),
            _ => self.date.format("%d").to_string(),
        }
    }

    /// The date as `DD MONTH YY`, uppercase (e.g. `03 MAY 88`).
    pub fn short_date(&self) -> String {
        self.date.format("%d %B %y").to_string().to_uppercase()
    }

    /// The identity key of the day, `DD-Mon-YYYY` (e.g. `03-May-1988`).
    pub fn id(&self) -> String {
        self.date.format(DAY_ID_FORMAT).to_string()
    }
}

/// Returns true when `date` falls on one of the last two days of the week.
pub fn is_weekend(date: NaiveDate) -> bool {
    DAYS_OF_THE_WEEK[WEEK_LENGTH - 2..].contains(&date.weekday())
}

/// Decide the variant of `date`.
///
/// Today wins over first-of-month, which wins over weekend.
pub fn variant_of(date: NaiveDate, today: NaiveDate) -> DayVariant {
    if date == today {
        DayVariant::Today
    } else if date.day() == 1 {
        DayVariant::FirstDayMonth
    } else if is_weekend(date) {
        DayVariant::Weekend
    } else {
        DayVariant::Plain
    }
}

/// Build the [`CalendarDay`] for `date`, given the caller's notion of today.
pub fn classify(date: NaiveDate, today: NaiveDate) -> CalendarDay {
    let variant = variant_of(date, today);
    CalendarDay {
        date,
        name: date.format("%A").to_string(),
        variant,
        style: variant.style(),
    }
}

/// Parse a day identity key (`DD-Mon-YYYY`) back into a date.
///
/// # Errors
/// Returns `GridError::InvalidDateFormat` when the string is not a valid day id.
pub fn parse_day_id(id: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(id.trim(), DAY_ID_FORMAT).map_err(|e| {
        tracing::error!(input = id, error = %e, "rejected day id");
        GridError::InvalidDateFormat {
            input: id.to_string(),
            expected: "DD-Mon-YYYY",
        }
    })
}

/// The date `days` days before `date`, or `None` before the start of the calendar.
pub fn days_before(date: NaiveDate, days: u32) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(u64::from(days)))
}
