//! Tests for the lazy day sequence.

use chrono::NaiveDate;
use grid_engine::{days_from, DaySequence, DayVariant};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn sequence_starts_the_day_after() {
    let mut days = DaySequence::new(date(1988, 5, 3), date(2000, 1, 1));
    assert_eq!(days.next().unwrap().date, date(1988, 5, 4));
}

#[test]
fn days_from_yields_exactly_n() {
    let days: Vec<_> = days_from(date(1988, 5, 3), 3, date(2000, 1, 1)).collect();
    let dates: Vec<_> = days.iter().map(|d| d.date).collect();
    assert_eq!(dates, vec![date(1988, 5, 4), date(1988, 5, 5), date(1988, 5, 6)]);
}

#[test]
fn days_from_zero_is_empty() {
    assert_eq!(days_from(date(1988, 5, 3), 0, date(2000, 1, 1)).count(), 0);
}

#[test]
fn sequence_is_restartable() {
    let today = date(2021, 1, 10);
    let first: Vec<_> = DaySequence::new(date(2021, 1, 1), today).take(40).collect();
    let second: Vec<_> = DaySequence::new(date(2021, 1, 1), today).take(40).collect();
    assert_eq!(first, second);
}

#[test]
fn cloned_sequences_advance_independently() {
    let mut a = DaySequence::new(date(2021, 1, 1), date(2000, 1, 1));
    a.next();
    let mut b = a.clone();
    assert_eq!(a.next().unwrap().date, date(2021, 1, 3));
    assert_eq!(a.next().unwrap().date, date(2021, 1, 4));
    assert_eq!(b.next().unwrap().date, date(2021, 1, 3));
}

#[test]
fn sequence_classifies_each_day() {
    let today = date(2021, 1, 27);
    let days: Vec<_> = DaySequence::new(date(2020, 12, 31), today).take(31).collect();

    assert_eq!(days[0].variant, DayVariant::FirstDayMonth); // 1 Jan
    assert_eq!(days[1].variant, DayVariant::Weekend); // Sat 2 Jan
    assert_eq!(days[3].variant, DayVariant::Plain); // Mon 4 Jan
    assert_eq!(days[26].variant, DayVariant::Today); // 27 Jan
}

#[test]
fn sequence_crosses_year_and_leap_day() {
    let dates: Vec<_> = DaySequence::new(date(2024, 2, 27), date(2000, 1, 1))
        .take(3)
        .map(|d| d.date)
        .collect();
    assert_eq!(dates, vec![date(2024, 2, 28), date(2024, 2, 29), date(2024, 3, 1)]);
}

#[test]
fn sequence_ends_at_the_last_representable_date() {
    let days: Vec<_> = DaySequence::new(NaiveDate::MAX, date(2000, 1, 1))
        .take(5)
        .collect();
    assert!(days.is_empty());
}
