//! Integration tests for entry attachment: recurrence across the
//! covered years, February 29 handling, silent range skips, and the
//! rendered annotation fields.

use wcal_planner::{Birthday, Event, MonthNames, Nameday, Observance, Planner};
use wcal_time::Date;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn planner(year: u16, extra_weeks: u16) -> Planner {
    Planner::new(year, extra_weeks, 2, MonthNames::default()).unwrap()
}

// ───────────────────────── Birthdays ─────────────────────────

#[test]
fn leap_birthday_in_leap_year() {
    let mut p = planner(2024, 0);
    let birthday = Birthday::new(Some(2000), 2, 29, "Lena").unwrap();
    let report = p.add_birthday(&birthday);
    assert_eq!(report.placed, vec![date(2024, 2, 29)]);
    assert!(report.is_clean());

    let day = p
        .week_containing(date(2024, 2, 29))
        .unwrap()
        .thursday();
    assert_eq!(day.birthdays()[0].label(), "Lena (24)");
}

#[test]
fn leap_birthday_shifts_in_common_year() {
    let mut p = planner(2023, 0);
    let birthday = Birthday::new(Some(2000), 2, 29, "Lena").unwrap();
    let report = p.add_birthday(&birthday);
    // Feb 29 does not exist in 2023; the celebration moves to March 1
    // and the label carries the shift marker.
    assert_eq!(report.placed, vec![date(2023, 3, 1)]);

    let day = p
        .week_containing(date(2023, 3, 1))
        .unwrap()
        .wednesday();
    assert_eq!(day.birthdays()[0].label(), "Lena (23, 02-29)");
    assert!(p
        .week_containing(date(2023, 2, 28))
        .unwrap()
        .tuesday()
        .birthdays()
        .is_empty());
}

#[test]
fn unknown_birth_year_has_no_age() {
    let mut p = planner(2023, 0);
    let plain = Birthday::new(None, 7, 14, "Marie").unwrap();
    p.add_birthday(&plain);
    let day = p.week_containing(date(2023, 7, 14)).unwrap().friday();
    assert_eq!(day.birthdays()[0].label(), "Marie");

    let shifted = Birthday::new(None, 2, 29, "Ctirad").unwrap();
    p.add_birthday(&shifted);
    let day = p.week_containing(date(2023, 3, 1)).unwrap().wednesday();
    assert_eq!(day.birthdays()[0].label(), "Ctirad (02-29)");
}

#[test]
fn birthday_repeats_in_trailing_weeks() {
    // The 2023 grid with two extra weeks covers Jan 3 of both 2023
    // and 2024.
    let mut p = planner(2023, 2);
    let birthday = Birthday::new(Some(1990), 1, 3, "Ada").unwrap();
    let report = p.add_birthday(&birthday);
    assert_eq!(report.placed, vec![date(2023, 1, 3), date(2024, 1, 3)]);
}

// ───────────────────────── Namedays ─────────────────────────

#[test]
fn leap_nameday_skips_common_years() {
    let nameday = Nameday::new(2, 29, "Horaz").unwrap();

    let mut common = planner(2023, 0);
    let report = common.add_nameday(&nameday);
    assert!(report.placed.is_empty());
    assert!(report.is_clean());

    let mut leap = planner(2024, 0);
    let report = leap.add_nameday(&nameday);
    assert_eq!(report.placed, vec![date(2024, 2, 29)]);
    let day = leap.week_containing(date(2024, 2, 29)).unwrap().thursday();
    assert_eq!(day.namedays()[0].label(), "Horaz");
}

#[test]
fn namedays_keep_attachment_order() {
    let mut p = planner(2023, 0);
    p.add_nameday(&Nameday::new(6, 14, "Roland").unwrap());
    p.add_nameday(&Nameday::new(6, 14, "Herta").unwrap());
    let day = p.week_containing(date(2023, 6, 14)).unwrap().wednesday();
    let labels: Vec<&str> = day.namedays().iter().map(|o| o.label()).collect();
    assert_eq!(labels, ["Roland", "Herta"]);
}

// ───────────────────────── Events, moons, holidays ─────────────────────────

#[test]
fn out_of_range_event_is_silently_skipped() {
    let mut p = planner(2023, 0);
    let report = p.add_event(&Event::new(date(2024, 7, 4), "out of range"));
    assert!(report.placed.is_empty());
    assert!(report.is_clean());
    assert_eq!(p.to_csv().matches("out of range").count(), 0);
}

#[test]
fn event_in_leading_days_of_previous_year() {
    // Jan 1, 2023 is a Sunday, so the grid starts Dec 26, 2022 and an
    // event from late 2022 still lands.
    let mut p = planner(2023, 0);
    let report = p.add_event(&Event::new(date(2022, 12, 31), "fireworks"));
    assert_eq!(report.placed, vec![date(2022, 12, 31)]);
    let day = p.week_containing(date(2022, 12, 31)).unwrap().saturday();
    assert_eq!(day.events()[0].label(), "fireworks");
}

#[test]
fn later_moon_and_holiday_win() {
    let mut p = planner(2023, 0);
    p.set_moon(Observance::new(date(2023, 8, 1), "0.99"));
    p.set_moon(Observance::new(date(2023, 8, 1), "full moon"));
    p.set_holiday(Observance::new(date(2023, 8, 1), "provisional"));
    p.set_holiday(Observance::new(date(2023, 8, 1), "Bank Holiday"));

    let day = p.week_containing(date(2023, 8, 1)).unwrap().tuesday();
    assert_eq!(day.moon().unwrap().label(), "full moon");
    assert_eq!(day.holiday().unwrap().label(), "Bank Holiday");
}

// ───────────────────────── Rendering ─────────────────────────

#[test]
fn two_birthdays_render_comma_joined() {
    let mut p = planner(2023, 0);
    p.add_birthday(&Birthday::new(None, 6, 14, "Alice").unwrap());
    p.add_birthday(&Birthday::new(None, 6, 14, "Bob").unwrap());

    let csv = p.to_csv();
    assert!(csv.contains("\"Alice, Bob\""));
}

#[test]
fn empty_annotation_fields_render_as_quoted_empty() {
    let p = planner(2023, 0);
    let csv = p.to_csv();
    let row = csv.lines().nth(1).unwrap();
    // No entries were attached, so every annotation field is "".
    assert_eq!(row.matches("\"\"").count(), 35);
}

#[test]
fn annotations_appear_in_their_week_row() {
    let mut p = planner(2023, 0);
    p.add_event(&Event::new(date(2023, 6, 14), "release day"));
    p.set_holiday(Observance::new(date(2023, 6, 16), "Founding Day"));

    let csv = p.to_csv();
    let row = csv
        .lines()
        .find(|line| line.starts_with("2023-24,"))
        .unwrap();
    assert!(row.contains("\"release day\""));
    assert!(row.contains("\"Founding Day\""));

    // Neighboring rows stay clean.
    for line in csv.lines().filter(|l| !l.starts_with("2023-24,")) {
        assert!(!line.contains("release day"));
    }
}
