//! `Day` — one calendar date's bucket of annotations.

use crate::diag::Misplaced;
use crate::entry::Observance;
use wcal_time::Date;

/// A specific date and the annotations attached to it: ordered lists of
/// birthdays, namedays, and events, plus at most one moon-phase marker
/// and at most one holiday.
///
/// Every attachment is validated: an observance whose resolved date is
/// not this day's date is refused with a [`Misplaced`] value.  Rejection
/// is a returned value, never a panic and never a fatal error.
#[derive(Debug, Clone)]
pub struct Day {
    date: Date,
    birthdays: Vec<Observance>,
    namedays: Vec<Observance>,
    events: Vec<Observance>,
    moon: Option<Observance>,
    holiday: Option<Observance>,
}

impl Day {
    pub(crate) fn new(date: Date) -> Self {
        Self {
            date,
            birthdays: Vec::new(),
            namedays: Vec::new(),
            events: Vec::new(),
            moon: None,
            holiday: None,
        }
    }

    /// The date this day represents.
    pub fn date(&self) -> Date {
        self.date
    }

    /// The day of the month (1–31), as printed in the CSV row.
    pub fn day_of_month(&self) -> u8 {
        self.date.day_of_month()
    }

    /// Birthdays attached to this day, in attachment order.
    pub fn birthdays(&self) -> &[Observance] {
        &self.birthdays
    }

    /// Namedays attached to this day, in attachment order.
    pub fn namedays(&self) -> &[Observance] {
        &self.namedays
    }

    /// Generic events attached to this day, in attachment order.
    pub fn events(&self) -> &[Observance] {
        &self.events
    }

    /// The moon-phase marker, if any.
    pub fn moon(&self) -> Option<&Observance> {
        self.moon.as_ref()
    }

    /// The holiday, if any.
    pub fn holiday(&self) -> Option<&Observance> {
        self.holiday.as_ref()
    }

    /// Attach a resolved birthday.
    pub fn add_birthday(&mut self, obs: Observance) -> Result<(), Misplaced> {
        self.check(&obs)?;
        self.birthdays.push(obs);
        Ok(())
    }

    /// Attach a resolved nameday.
    pub fn add_nameday(&mut self, obs: Observance) -> Result<(), Misplaced> {
        self.check(&obs)?;
        self.namedays.push(obs);
        Ok(())
    }

    /// Attach a resolved event.
    pub fn add_event(&mut self, obs: Observance) -> Result<(), Misplaced> {
        self.check(&obs)?;
        self.events.push(obs);
        Ok(())
    }

    /// Set the moon-phase marker, replacing any existing one.
    pub fn set_moon(&mut self, obs: Observance) -> Result<(), Misplaced> {
        self.check(&obs)?;
        self.moon = Some(obs);
        Ok(())
    }

    /// Set the holiday, replacing any existing one.
    pub fn set_holiday(&mut self, obs: Observance) -> Result<(), Misplaced> {
        self.check(&obs)?;
        self.holiday = Some(obs);
        Ok(())
    }

    fn check(&self, obs: &Observance) -> Result<(), Misplaced> {
        if obs.date() == self.date {
            Ok(())
        } else {
            Err(Misplaced {
                target: self.date,
                date: obs.date(),
                label: obs.label().to_string(),
            })
        }
    }
}

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
    fn attach_in_order() {
        let mut day = Day::new(date(2023, 6, 15));
        day.add_birthday(obs(2023, 6, 15, "Alice")).unwrap();
        day.add_birthday(obs(2023, 6, 15, "Bob")).unwrap();
        let labels: Vec<_> = day.birthdays().iter().map(|o| o.label()).collect();
        assert_eq!(labels, ["Alice", "Bob"]);
        assert!(day.namedays().is_empty());
        assert!(day.events().is_empty());
    }

    #[test]
    fn wrong_date_is_misplaced() {
        let mut day = Day::new(date(2023, 6, 15));
        let err = day.add_event(obs(2023, 6, 16, "meeting")).unwrap_err();
        assert_eq!(err.target, date(2023, 6, 15));
        assert_eq!(err.date, date(2023, 6, 16));
        assert_eq!(err.label, "meeting");
        // Nothing was stored.
        assert!(day.events().is_empty());
    }

    #[test]
    fn wrong_year_is_misplaced() {
        let mut day = Day::new(date(2023, 6, 15));
        assert!(day.add_nameday(obs(2024, 6, 15, "Vít")).is_err());
        assert!(day.namedays().is_empty());
    }

    #[test]
    fn moon_and_holiday_replace() {
        let mut day = Day::new(date(2023, 6, 15));
        day.set_moon(obs(2023, 6, 15, "full moon")).unwrap();
        day.set_moon(obs(2023, 6, 15, "new moon")).unwrap();
        assert_eq!(day.moon().unwrap().label(), "new moon");

        day.set_holiday(obs(2023, 6, 15, "holiday A")).unwrap();
        day.set_holiday(obs(2023, 6, 15, "holiday B")).unwrap();
        assert_eq!(day.holiday().unwrap().label(), "holiday B");
    }

    #[test]
    fn misplaced_marker_keeps_existing() {
        let mut day = Day::new(date(2023, 6, 15));
        day.set_holiday(obs(2023, 6, 15, "kept")).unwrap();
        assert!(day.set_holiday(obs(2023, 6, 16, "rejected")).is_err());
        assert_eq!(day.holiday().unwrap().label(), "kept");
    }
}
