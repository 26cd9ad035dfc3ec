//! `Planner` — the week grid for a target year.

use std::collections::HashMap;

use crate::diag::{Attachment, Misplaced};
use crate::entry::{Birthday, Event, Nameday, Observance};
use crate::month_names::MonthNames;
use crate::week::Week;
use wcal_core::errors::Result;
use wcal_core::Year;
use wcal_time::Date;

/// Which per-day slot an observance goes into.
#[derive(Debug, Clone, Copy)]
enum Slot {
    Birthday,
    Nameday,
    Event,
    Moon,
    Holiday,
}

/// A year's worth of Monday-anchored weeks plus a date index.
///
/// The grid starts on the Monday of the week containing January 1 and
/// runs through the week containing December 31 plus `extra_weeks`
/// trailing weeks, so the turn of the year is always covered on both
/// sides.  Entries are attached by resolving them against every year
/// the grid touches and dropping, with a report, whatever falls outside.
#[derive(Debug, Clone)]
pub struct Planner {
    year: Year,
    months: MonthNames,
    first_day: Date,
    last_day: Date,
    weeks: Vec<Week>,
    week_of_day: HashMap<Date, usize>,
}

impl Planner {
    /// Build the empty grid for `year`.
    ///
    /// `extra_weeks` trailing weeks are appended after the week of
    /// December 31; `start_page` is the left page of the first spread
    /// and each following week advances by two.
    pub fn new(year: Year, extra_weeks: u16, start_page: u32, months: MonthNames) -> Result<Self> {
        let first_day = Date::from_ymd(year, 1, 1)?.start_of_week();
        let last_day = Date::from_ymd(year, 12, 31)?
            .start_of_week()
            .add_days(6 + 7 * i32::from(extra_weeks))?;

        let mut weeks = Vec::new();
        let mut week_of_day = HashMap::new();
        let mut monday = first_day;
        let mut left_page = start_page;
        while monday < last_day {
            let index = weeks.len();
            weeks.push(Week::new(monday, left_page)?);
            for offset in 0..7 {
                week_of_day.insert(monday + offset, index);
            }
            monday = monday.add_days(7)?;
            left_page += 2;
        }

        Ok(Self {
            year,
            months,
            first_day,
            last_day,
            weeks,
            week_of_day,
        })
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    /// The target year the grid was built for.
    pub fn year(&self) -> Year {
        self.year
    }

    /// First date covered by the grid (always a Monday).
    pub fn first_day(&self) -> Date {
        self.first_day
    }

    /// Last date covered by the grid (always a Sunday).
    pub fn last_day(&self) -> Date {
        self.last_day
    }

    /// All weeks in chronological order.
    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// The week containing `date`, if the grid covers it.
    pub fn week_containing(&self, date: Date) -> Option<&Week> {
        self.week_of_day.get(&date).map(|&i| &self.weeks[i])
    }

    /// Whether the grid covers `date`.
    pub fn contains(&self, date: Date) -> bool {
        self.week_of_day.contains_key(&date)
    }

    /// Years the grid can touch: the weeks around January 1 belong
    /// partly to the previous year and the trailing weeks may reach
    /// into the next one.
    fn candidate_years(&self) -> [Year; 3] {
        [self.year - 1, self.year, self.year + 1]
    }

    // ── Attachment ───────────────────────────────────────────────────────────

    /// Attach a recurring birthday to every covered year it occurs in.
    ///
    /// The birthday is resolved against each candidate year (shifting
    /// February 29 as needed); resolutions in years outside the date
    /// range and dates outside the grid are skipped silently.
    pub fn add_birthday(&mut self, birthday: &Birthday) -> Attachment {
        let mut report = Attachment::default();
        for year in self.candidate_years() {
            if let Ok(obs) = birthday.observed(year) {
                self.place(obs, Slot::Birthday, &mut report);
            }
        }
        report
    }

    /// Attach a recurring nameday to every covered year it occurs in.
    ///
    /// A February 29 nameday resolves to nothing in non-leap years and
    /// is skipped for those.
    pub fn add_nameday(&mut self, nameday: &Nameday) -> Attachment {
        let mut report = Attachment::default();
        for year in self.candidate_years() {
            if let Some(obs) = nameday.observed(year) {
                self.place(obs, Slot::Nameday, &mut report);
            }
        }
        report
    }

    /// Attach a dated event.  Unlike birthdays and namedays an event
    /// carries a full date and is placed at most once.
    pub fn add_event(&mut self, event: &Event) -> Attachment {
        let mut report = Attachment::default();
        self.place(event.observance(), Slot::Event, &mut report);
        report
    }

    /// Set the moon-phase marker for a date.  A later marker on the
    /// same day replaces the earlier one.
    pub fn set_moon(&mut self, obs: Observance) -> Attachment {
        let mut report = Attachment::default();
        self.place(obs, Slot::Moon, &mut report);
        report
    }

    /// Set the holiday for a date.  A later holiday on the same day
    /// replaces the earlier one.
    pub fn set_holiday(&mut self, obs: Observance) -> Attachment {
        let mut report = Attachment::default();
        self.place(obs, Slot::Holiday, &mut report);
        report
    }

    fn place(&mut self, obs: Observance, slot: Slot, report: &mut Attachment) {
        let Some(&index) = self.week_of_day.get(&obs.date()) else {
            return;
        };
        let date = obs.date();
        let week = &mut self.weeks[index];
        let outcome = match slot {
            Slot::Birthday => week.add_birthday(obs),
            Slot::Nameday => week.add_nameday(obs),
            Slot::Event => week.add_event(obs),
            Slot::Moon => week.set_moon(obs),
            Slot::Holiday => week.set_holiday(obs),
        };
        match outcome {
            Ok(()) => report.placed.push(date),
            Err(misplaced) => report.dropped.push(misplaced),
        }
    }

    // ── Serialization ────────────────────────────────────────────────────────

    /// Render the whole grid as CSV: the header line followed by one
    /// row per week.  An empty grid renders as the empty string.
    pub fn to_csv(&self) -> String {
        if self.weeks.is_empty() {
            return String::new();
        }
        let mut lines = Vec::with_capacity(self.weeks.len() + 1);
        lines.push(Week::csv_header());
        for week in &self.weeks {
            lines.push(week.csv_row(&self.months));
        }
        lines.join("\n")
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use wcal_time::Weekday;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn planner(year: Year, extra_weeks: u16) -> Planner {
        Planner::new(year, extra_weeks, 2, MonthNames::default()).unwrap()
    }

    #[test]
    fn grid_2023() {
        let p = planner(2023, 2);
        // Jan 1, 2023 is a Sunday, so the grid opens on Monday Dec 26.
        assert_eq!(p.first_day(), date(2022, 12, 26));
        // Dec 31, 2023 is a Sunday; its week ends Dec 31 and two extra
        // weeks push the last day to Jan 14.
        assert_eq!(p.last_day(), date(2024, 1, 14));
        assert_eq!(p.weeks().len(), 55);
        assert_eq!(p.weeks()[0].code(), "2022-52");
        assert_eq!(p.weeks()[1].code(), "2023-01");
    }

    #[test]
    fn grid_covers_whole_year() {
        let p = planner(2024, 0);
        let mut day = date(2024, 1, 1);
        let end = date(2024, 12, 31);
        while day <= end {
            assert!(p.contains(day), "grid misses {day}");
            day += 1;
        }
    }

    #[test]
    fn page_sequence() {
        let p = planner(2023, 2);
        for (i, week) in p.weeks().iter().enumerate() {
            assert_eq!(week.left_page(), 2 + 2 * i as u32);
        }
    }

    #[test]
    fn weeks_are_seamless() {
        let p = planner(2023, 2);
        assert_eq!(p.first_day().weekday(), Weekday::Monday);
        assert_eq!(p.last_day().weekday(), Weekday::Sunday);
        for pair in p.weeks().windows(2) {
            assert_eq!(
                pair[0].sunday().date() + 1,
                pair[1].monday().date(),
                "gap after week {}",
                pair[0].code()
            );
        }
        assert_eq!(p.weeks().last().unwrap().sunday().date(), p.last_day());
    }

    #[test]
    fn lookup_yields_containing_week() {
        let p = planner(2023, 2);
        let week = p.week_containing(date(2023, 6, 14)).unwrap();
        assert_eq!(week.monday().date(), date(2023, 6, 12));
        assert!(p.week_containing(date(2025, 6, 14)).is_none());
    }

    #[test]
    fn birthday_lands_in_every_covered_year() {
        // The 2023 grid with extra weeks reaches into Jan 2024, so a
        // January 3 birthday is placed twice.
        let mut p = planner(2023, 2);
        let birthday = Birthday::new(Some(1990), 1, 3, "Ada").unwrap();
        let report = p.add_birthday(&birthday);
        assert_eq!(report.placed, vec![date(2023, 1, 3), date(2024, 1, 3)]);
        assert!(report.dropped.is_empty());

        let in_2023 = p.week_containing(date(2023, 1, 3)).unwrap();
        assert_eq!(in_2023.tuesday().birthdays()[0].label(), "Ada (33)");
        let in_2024 = p.week_containing(date(2024, 1, 3)).unwrap();
        assert_eq!(in_2024.wednesday().birthdays()[0].label(), "Ada (34)");
    }

    #[test]
    fn out_of_grid_event_is_skipped_silently() {
        let mut p = planner(2023, 2);
        let event = Event::new(date(2025, 3, 1), "far future");
        let report = p.add_event(&event);
        assert!(report.placed.is_empty());
        assert!(report.dropped.is_empty());
    }

    #[test]
    fn moon_replaces_on_same_day() {
        let mut p = planner(2023, 0);
        p.set_moon(Observance::new(date(2023, 6, 14), "0.48"));
        p.set_moon(Observance::new(date(2023, 6, 14), "full moon"));
        let week = p.week_containing(date(2023, 6, 14)).unwrap();
        assert_eq!(week.wednesday().moon().unwrap().label(), "full moon");
    }

    #[test]
    fn csv_shape() {
        let p = planner(2023, 2);
        let csv = p.to_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 56);
        assert_eq!(lines[0], Week::csv_header());
        assert!(lines[1].starts_with("2022-52,52,002,003,"));
    }
}
