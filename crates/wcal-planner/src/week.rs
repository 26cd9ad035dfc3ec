//! `Week` — seven consecutive days, Monday-anchored.

use crate::day::Day;
use crate::diag::Misplaced;
use crate::entry::Observance;
use crate::month_names::MonthNames;
use wcal_core::errors::Result;
use wcal_core::{csv, ensure};
use wcal_time::{Date, Weekday};

/// Lowercase day names for the CSV header, Monday first.
const WEEKDAY_LABELS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Seven consecutive [`Day`]s plus pagination metadata.
///
/// A week is anchored at its Monday and spans a left/right page pair in
/// the printed layout (`left_page` even by convention, right = left + 1).
#[derive(Debug, Clone)]
pub struct Week {
    monday: Date,
    left_page: u32,
    days: [Day; 7],
}

impl Week {
    /// Build the week anchored at `monday` with the given left page.
    ///
    /// Fails if `monday` is not a Monday or if the seven days would run
    /// past the representable date range.
    pub fn new(monday: Date, left_page: u32) -> Result<Self> {
        ensure!(
            monday.weekday() == Weekday::Monday,
            "week anchor {monday} is a {}, not a Monday",
            monday.weekday()
        );
        monday.add_days(6)?;
        Ok(Self {
            monday,
            left_page,
            days: std::array::from_fn(|i| Day::new(monday + i as i32)),
        })
    }

    // ── Day accessors ────────────────────────────────────────────────────────

    /// All seven days, Monday first.
    pub fn days(&self) -> &[Day] {
        &self.days
    }

    /// Monday's bucket.
    pub fn monday(&self) -> &Day {
        &self.days[0]
    }

    /// Tuesday's bucket.
    pub fn tuesday(&self) -> &Day {
        &self.days[1]
    }

    /// Wednesday's bucket.
    pub fn wednesday(&self) -> &Day {
        &self.days[2]
    }

    /// Thursday's bucket.
    pub fn thursday(&self) -> &Day {
        &self.days[3]
    }

    /// Friday's bucket.
    pub fn friday(&self) -> &Day {
        &self.days[4]
    }

    /// Saturday's bucket.
    pub fn saturday(&self) -> &Day {
        &self.days[5]
    }

    /// Sunday's bucket.
    pub fn sunday(&self) -> &Day {
        &self.days[6]
    }

    // ── Metadata ─────────────────────────────────────────────────────────────

    /// Left page number of this week's two-page spread.
    pub fn left_page(&self) -> u32 {
        self.left_page
    }

    /// Right page number (left + 1).
    pub fn right_page(&self) -> u32 {
        self.left_page + 1
    }

    /// ISO 8601 week number.
    pub fn number(&self) -> u8 {
        self.monday.iso_week().1
    }

    /// Year-week identifier, `"{year}-{week:02}"`.
    ///
    /// The year component is the ISO week-year (the Thursday's year), so
    /// a week spanning a year boundary is coded in the year that owns it.
    pub fn code(&self) -> String {
        let (year, week) = self.monday.iso_week();
        format!("{year}-{week:02}")
    }

    /// Display label for the month(s) this week touches: one month name
    /// when Monday and Sunday share a month, else `"MonthA - MonthB"`.
    pub fn month_label(&self, months: &MonthNames) -> String {
        let first = self.monday.month();
        let last = self.days[6].date().month();
        if first == last {
            months.name(first).to_string()
        } else {
            format!("{} - {}", months.name(first), months.name(last))
        }
    }

    // ── Attachment ───────────────────────────────────────────────────────────

    /// Attach a resolved birthday to the day it falls on.
    pub fn add_birthday(&mut self, obs: Observance) -> Result<(), Misplaced> {
        self.day_for(&obs)?.add_birthday(obs)
    }

    /// Attach a resolved nameday to the day it falls on.
    pub fn add_nameday(&mut self, obs: Observance) -> Result<(), Misplaced> {
        self.day_for(&obs)?.add_nameday(obs)
    }

    /// Attach a resolved event to the day it falls on.
    pub fn add_event(&mut self, obs: Observance) -> Result<(), Misplaced> {
        self.day_for(&obs)?.add_event(obs)
    }

    /// Set the moon-phase marker on the day the observance falls on.
    pub fn set_moon(&mut self, obs: Observance) -> Result<(), Misplaced> {
        self.day_for(&obs)?.set_moon(obs)
    }

    /// Set the holiday on the day the observance falls on.
    pub fn set_holiday(&mut self, obs: Observance) -> Result<(), Misplaced> {
        self.day_for(&obs)?.set_holiday(obs)
    }

    fn day_for(&mut self, obs: &Observance) -> Result<&mut Day, Misplaced> {
        let delta = self.monday.days_until(obs.date());
        if (0..7).contains(&delta) {
            Ok(&mut self.days[delta as usize])
        } else {
            Err(Misplaced {
                target: self.monday,
                date: obs.date(),
                label: obs.label().to_string(),
            })
        }
    }

    // ── Serialization ────────────────────────────────────────────────────────

    /// The fixed CSV header line matching [`Week::csv_row`]: 5 metadata
    /// columns plus 6 columns for each of the 7 days, all quoted.
    pub fn csv_header() -> String {
        let mut fields = vec![
            csv::quote("code"),
            csv::quote("number"),
            csv::quote("page_left"),
            csv::quote("page_right"),
            csv::quote("month"),
        ];
        for day in WEEKDAY_LABELS {
            fields.push(csv::quote(day));
            fields.push(csv::quote(&format!("birthdays_{day}")));
            fields.push(csv::quote(&format!("namedays_{day}")));
            fields.push(csv::quote(&format!("events_{day}")));
            fields.push(csv::quote(&format!("moon_{day}")));
            fields.push(csv::quote(&format!("holiday_{day}")));
        }
        fields.join(",")
    }

    /// Render this week as one CSV row: code, week number, zero-padded
    /// three-digit page pair, month label, then per day the day-of-month
    /// number and the quoted birthday/nameday/event/moon/holiday fields
    /// (`""` when empty).  Consumers align by position, so the layout
    /// mirrors [`Week::csv_header`] exactly.
    pub fn csv_row(&self, months: &MonthNames) -> String {
        let mut fields = vec![
            self.code(),
            self.number().to_string(),
            format!("{:03}", self.left_page()),
            format!("{:03}", self.right_page()),
            self.month_label(months),
        ];
        for day in &self.days {
            fields.push(day.day_of_month().to_string());
            fields.push(csv::quote_join(day.birthdays().iter().map(|o| o.label())));
            fields.push(csv::quote_join(day.namedays().iter().map(|o| o.label())));
            fields.push(csv::quote_join(day.events().iter().map(|o| o.label())));
            fields.push(csv::quote_opt(day.moon().map(|o| o.label())));
            fields.push(csv::quote_opt(day.holiday().map(|o| o.label())));
        }
        fields.join(",")
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn obs(y: u16, m: u8, d: u8, label: &str) -> Observance {
        Observance::new(date(y, m, d), label)
    }

    #[test]
    fn requires_monday_anchor() {
        // 2023-06-12 is a Monday, 2023-06-13 a Tuesday.
        assert!(Week::new(date(2023, 6, 12), 2).is_ok());
        assert!(Week::new(date(2023, 6, 13), 2).is_err());
    }

    #[test]
    fn seven_consecutive_days() {
        let week = Week::new(date(2023, 6, 12), 2).unwrap();
        assert_eq!(week.monday().date(), date(2023, 6, 12));
        assert_eq!(week.wednesday().date(), date(2023, 6, 14));
        assert_eq!(week.sunday().date(), date(2023, 6, 18));
        for (i, day) in week.days().iter().enumerate() {
            assert_eq!(day.date(), date(2023, 6, 12 + i as u8));
        }
    }

    #[test]
    fn pages() {
        let week = Week::new(date(2023, 6, 12), 44).unwrap();
        assert_eq!(week.left_page(), 44);
        assert_eq!(week.right_page(), 45);
    }

    #[test]
    fn number_and_code() {
        // 2023-06-12 opens ISO week 24 of 2023.
        let week = Week::new(date(2023, 6, 12), 2).unwrap();
        assert_eq!(week.number(), 24);
        assert_eq!(week.code(), "2023-24");

        // The week of 2022-12-26 contains 2023-01-01 but belongs to
        // ISO week 52 of 2022 (its Thursday is Dec 29).
        let boundary = Week::new(date(2022, 12, 26), 2).unwrap();
        assert_eq!(boundary.number(), 52);
        assert_eq!(boundary.code(), "2022-52");

        // The week of 2024-12-30 is week 1 of 2025.
        let next = Week::new(date(2024, 12, 30), 2).unwrap();
        assert_eq!(next.code(), "2025-01");
    }

    #[test]
    fn month_label_single_and_span() {
        let months = MonthNames::default();
        // Fully inside March.
        let inner = Week::new(date(2023, 3, 13), 2).unwrap();
        assert_eq!(inner.month_label(&months), "March");
        // Mon Mar 27 .. Sun Apr 2.
        let spanning = Week::new(date(2023, 3, 27), 2).unwrap();
        assert_eq!(spanning.month_label(&months), "March - April");
    }

    #[test]
    fn attach_routes_to_day() {
        let mut week = Week::new(date(2023, 6, 12), 2).unwrap();
        week.add_birthday(obs(2023, 6, 14, "Ada")).unwrap();
        assert_eq!(week.wednesday().birthdays()[0].label(), "Ada");

        week.set_moon(obs(2023, 6, 18, "full moon")).unwrap();
        assert_eq!(week.sunday().moon().unwrap().label(), "full moon");
    }

    #[test]
    fn attach_outside_week_is_misplaced() {
        let mut week = Week::new(date(2023, 6, 12), 2).unwrap();
        let err = week.add_event(obs(2023, 6, 19, "next week")).unwrap_err();
        assert_eq!(err.target, date(2023, 6, 12));
        assert_eq!(err.date, date(2023, 6, 19));
        // One day before the Monday.
        assert!(week.add_event(obs(2023, 6, 11, "last week")).is_err());
    }

    #[test]
    fn header_and_row_have_47_columns() {
        let months = MonthNames::default();
        let week = Week::new(date(2023, 6, 12), 2).unwrap();
        assert_eq!(Week::csv_header().split(',').count(), 47);
        assert_eq!(week.csv_row(&months).split(',').count(), 47);
    }

    #[test]
    fn header_layout() {
        let header = Week::csv_header();
        assert!(header.starts_with(
            "\"code\",\"number\",\"page_left\",\"page_right\",\"month\",\"monday\",\"birthdays_monday\""
        ));
        assert!(header.ends_with("\"moon_sunday\",\"holiday_sunday\""));
    }

    #[test]
    fn row_rendering() {
        let months = MonthNames::default();
        let mut week = Week::new(date(2023, 6, 12), 6).unwrap();
        week.add_birthday(obs(2023, 6, 12, "Alice (30)")).unwrap();
        week.add_birthday(obs(2023, 6, 12, "Bob")).unwrap();
        week.set_holiday(obs(2023, 6, 12, "Midsummer")).unwrap();

        let row = week.csv_row(&months);
        assert!(row.starts_with("2023-24,24,006,007,June,12,\"Alice (30), Bob\",\"\",\"\",\"\",\"Midsummer\","));
        // The empty Tuesday renders five empty quoted fields after the
        // day number.
        assert!(row.contains(",13,\"\",\"\",\"\",\"\",\"\","));
    }
}
