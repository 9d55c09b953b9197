//! Tests for agenda filtering, bucketing and duration wording.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use grid_engine::agenda::{granularity, humanize, TimeUnit};
use grid_engine::event::sort_by_start;
use grid_engine::{
    agenda, agenda_range, bucket_by_date, events_in_range, human_duration, Event, GridError,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(year, month, day).and_hms_opt(hour, minute, 0).unwrap()
}

/// Helper: an event starting 1 Nov 2021 08:00 and ending at `end`.
fn from_start(end: NaiveDateTime) -> Event {
    Event::new("test event", at(2021, 11, 1, 8, 0), end)
}

#[test]
fn duration_wording() {
    let cases = [
        (at(2021, 11, 3, 8, 0), "2 days"),
        (at(2021, 11, 3, 10, 30), "2 days 2 hours and 30 minutes"),
        (at(2021, 11, 1, 8, 30), "30 minutes"),
        (at(2021, 11, 1, 10, 0), "2 hours"),
        (at(2021, 11, 1, 10, 30), "2 hours and 30 minutes"),
        (at(2021, 11, 2, 10, 0), "a day and 2 hours"),
    ];
    for (end, expected) in cases {
        let event = from_start(end);
        assert_eq!(human_duration(Some(&event)).as_deref(), Some(expected));
    }
}

#[test]
fn duration_skips_zero_hours() {
    let event = from_start(at(2021, 11, 3, 8, 30));
    assert_eq!(
        human_duration(Some(&event)).as_deref(),
        Some("2 days and 30 minutes")
    );
}

#[test]
fn duration_singulars() {
    assert_eq!(
        human_duration(Some(&from_start(at(2021, 11, 1, 9, 1)))).as_deref(),
        Some("an hour and a minute")
    );
}

#[test]
fn duration_of_no_event_is_none() {
    assert_eq!(human_duration(None), None);
}

#[test]
fn zero_length_event_is_instant() {
    let event = from_start(at(2021, 11, 1, 8, 0));
    assert_eq!(human_duration(Some(&event)).as_deref(), Some("instantly"));
}

#[test]
fn granularity_checks_each_unit_independently() {
    let delta = Duration::days(2) + Duration::minutes(30);
    assert_eq!(granularity(delta), vec![TimeUnit::Day, TimeUnit::Minute]);
    assert!(granularity(Duration::seconds(59)).is_empty());
}

#[test]
fn humanize_uses_only_given_units() {
    let delta = Duration::hours(26);
    assert_eq!(humanize(delta, &[TimeUnit::Hour]), "26 hours");
    assert_eq!(humanize(delta, &[TimeUnit::Day, TimeUnit::Hour]), "a day and 2 hours");
}

fn week_of_events() -> Vec<Event> {
    vec![
        Event::new("monday", at(2021, 11, 1, 9, 0), at(2021, 11, 1, 10, 0)),
        Event::new("monday late", at(2021, 11, 1, 23, 0), at(2021, 11, 2, 1, 0)),
        Event::new("wednesday", at(2021, 11, 3, 12, 0), at(2021, 11, 3, 12, 30)),
        Event::new("friday", at(2021, 11, 5, 8, 0), at(2021, 11, 5, 9, 0)),
    ]
}

#[test]
fn range_is_inclusive_on_both_ends() {
    let events = week_of_events();
    let titles: Vec<_> = events_in_range(&events, Some(date(2021, 11, 1)), Some(date(2021, 11, 3)))
        .map(|e| e.title.as_str())
        .collect();
    assert_eq!(titles, vec!["monday", "monday late", "wednesday"]);
}

#[test]
fn range_matches_on_start_date_only() {
    let events = week_of_events();
    // "monday late" ends on Tuesday but starts on Monday.
    let on_tuesday: Vec<_> =
        events_in_range(&events, Some(date(2021, 11, 2)), Some(date(2021, 11, 2))).collect();
    assert!(on_tuesday.is_empty());
}

#[test]
fn inverted_range_is_empty() {
    let events = week_of_events();
    assert_eq!(
        events_in_range(&events, Some(date(2021, 11, 5)), Some(date(2021, 11, 1))).count(),
        0
    );
}

#[test]
fn missing_bound_is_empty() {
    let events = week_of_events();
    assert_eq!(events_in_range(&events, None, Some(date(2021, 11, 5))).count(), 0);
    assert_eq!(events_in_range(&events, Some(date(2021, 11, 1)), None).count(), 0);
}

#[test]
fn bucket_groups_by_start_date_in_order() {
    let events = week_of_events();
    let bucket = bucket_by_date(&events);

    let dates: Vec<_> = bucket.dates().collect();
    assert_eq!(
        dates,
        vec![date(2021, 11, 1), date(2021, 11, 3), date(2021, 11, 5)]
    );

    let monday = bucket.get(date(2021, 11, 1)).unwrap();
    assert_eq!(monday.len(), 2);
    assert_eq!(monday[0].event.title, "monday");
    assert_eq!(monday[0].duration.as_deref(), Some("an hour"));
    assert_eq!(monday[1].duration.as_deref(), Some("2 hours"));
    assert!(bucket.get(date(2021, 11, 2)).is_none());
}

#[test]
fn bucket_keeps_first_seen_key_order() {
    let events = vec![
        Event::new("later", at(2021, 11, 5, 8, 0), at(2021, 11, 5, 9, 0)),
        Event::new("earlier", at(2021, 11, 1, 8, 0), at(2021, 11, 1, 9, 0)),
        Event::new("later again", at(2021, 11, 5, 10, 0), at(2021, 11, 5, 11, 0)),
    ];
    let bucket = bucket_by_date(&events);
    assert_eq!(bucket.len(), 2);
    assert_eq!(bucket.days[0].date, date(2021, 11, 5));
    assert_eq!(bucket.days[0].entries[1].event.title, "later again");
}

#[test]
fn sorted_agenda() {
    let mut events = week_of_events();
    events.reverse();
    sort_by_start(&mut events);
    let bucket = agenda(&events, Some(date(2021, 11, 1)), Some(date(2021, 11, 30)));
    assert_eq!(bucket.len(), 3);
    assert_eq!(bucket.days[0].entries[0].event.title, "monday");
}

#[test]
fn agenda_over_inverted_range_is_empty() {
    let bucket = agenda(&week_of_events(), Some(date(2021, 12, 1)), Some(date(2021, 11, 1)));
    assert!(bucket.is_empty());
}

#[test]
fn agenda_range_resolution() {
    let today = date(2026, 10, 19);
    assert_eq!(
        agenda_range(None, None, Some(7), today).unwrap(),
        (today, date(2026, 10, 26))
    );
    assert_eq!(
        agenda_range(Some(date(2021, 1, 1)), Some(date(2021, 1, 5)), Some(2), today).unwrap(),
        (today, date(2026, 10, 21))
    );
    assert_eq!(
        agenda_range(Some(date(2021, 1, 1)), Some(date(2021, 1, 5)), None, today).unwrap(),
        (date(2021, 1, 1), date(2021, 1, 5))
    );
    assert_eq!(
        agenda_range(Some(date(2021, 1, 1)), None, None, today).unwrap(),
        (today, today)
    );
}

#[test]
fn agenda_range_past_end_of_calendar_is_an_error() {
    let err = agenda_range(None, None, Some(u32::MAX), date(2021, 1, 1)).unwrap_err();
    assert!(matches!(err, GridError::OutOfRange(_)));

    let last = NaiveDate::MAX;
    assert!(agenda_range(None, None, Some(1), last).is_err());
    assert_eq!(agenda_range(None, None, Some(0), last).unwrap(), (last, last));
}
