//! Annotation value types: generic events, birthdays, and namedays.
//!
//! An [`Event`] carries a fixed date.  [`Birthday`] and [`Nameday`] carry
//! only a month/day pair and are resolved against a *celebration year*:
//! `observed(year)` is a pure function of the year, producing the
//! [`Observance`] (resolved date plus display label) that the grid
//! actually stores.  Leap-day handling differs between the two: a Feb 29
//! birthday shifts to March 1 in non-leap years, while a Feb 29 nameday
//! simply does not occur.

use wcal_core::errors::{Error, Result};
use wcal_core::parse;
use wcal_core::Year;
use wcal_time::date::{days_in_month, is_leap_year};
use wcal_time::Date;

/// Reference year for validating yearless month/day pairs; any leap year
/// works, since Feb 29 must be accepted.
const LEAP_REFERENCE_YEAR: Year = 2000;

fn check_month_day(month: u8, day: u8, year: Option<Year>) -> Result<()> {
    if !(1..=12).contains(&month) {
        return Err(Error::Date(format!("month {month} out of range [1, 12]")));
    }
    let max = days_in_month(year.unwrap_or(LEAP_REFERENCE_YEAR), month);
    if day == 0 || day > max {
        return Err(Error::Date(format!(
            "day {day} out of range [1, {max}] for month {month:02}"
        )));
    }
    Ok(())
}

// ── Observance ────────────────────────────────────────────────────────────────

/// An annotation resolved against a concrete year: the date it lands on
/// and the label to display.  This is the unit stored in a
/// [`Day`](crate::Day).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observance {
    date: Date,
    label: String,
}

impl Observance {
    /// Pair a date with a display label.
    pub fn new(date: Date, label: impl Into<String>) -> Self {
        Self {
            date,
            label: label.into(),
        }
    }

    /// The resolved date.
    pub fn date(&self) -> Date {
        self.date
    }

    /// The display label.
    pub fn label(&self) -> &str {
        &self.label
    }
}

// ── Event ─────────────────────────────────────────────────────────────────────

/// A generic dated annotation: a fixed date and a label.
///
/// Events do not recur; moon-phase and holiday markers are plain events
/// attached to dedicated slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    date: Date,
    label: String,
}

impl Event {
    /// Create an event on a concrete date.
    pub fn new(date: Date, label: impl Into<String>) -> Self {
        Self {
            date,
            label: label.into(),
        }
    }

    /// Parse from a `yyyy-mm-dd` date string and a label.
    pub fn parse(datestr: &str, label: impl Into<String>) -> Result<Self> {
        Ok(Self::new(datestr.parse()?, label))
    }

    /// The event's date.
    pub fn date(&self) -> Date {
        self.date
    }

    /// The event's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The event resolved for attachment (its own date and label).
    pub fn observance(&self) -> Observance {
        Observance::new(self.date, self.label.clone())
    }
}

// ── Birthday ──────────────────────────────────────────────────────────────────

/// A birthday: a month/day recurring every year, a name, and an optional
/// birth year.
///
/// The display label appends the age when the birth year is known, and a
/// `02-29` marker when the observance was shifted off a leap day:
/// `"Ada (44)"`, `"Ada (44, 02-29)"`, `"Ada (02-29)"`, `"Ada"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Birthday {
    born: Option<Year>,
    month: u8,
    day: u8,
    name: String,
}

impl Birthday {
    /// Create a birthday.  With a known birth year the full birth date
    /// must be a real date; without one, Feb 29 is still accepted.
    pub fn new(born: Option<Year>, month: u8, day: u8, name: impl Into<String>) -> Result<Self> {
        check_month_day(month, day, born)?;
        Ok(Self {
            born,
            month,
            day,
            name: name.into(),
        })
    }

    /// Parse from a `yyyy-mm-dd` date string and a name.  Year `0000`
    /// means the birth year is unknown.
    pub fn parse(datestr: &str, name: impl Into<String>) -> Result<Self> {
        let (year, month, day) = parse::parse_iso_date(datestr)?;
        let born = if year == 0 { None } else { Some(year) };
        Self::new(born, month, day, name)
    }

    /// The birth year, if known.
    pub fn born(&self) -> Option<Year> {
        self.born
    }

    /// The birthday month (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// The birthday day of month.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// The person's name, without age or shift markers.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolve the observance for a celebration year.
    ///
    /// Normally the birthday's month/day in that year; a Feb 29 birthday
    /// in a non-leap year shifts to March 1 and the label records the
    /// shift.  Fails only when the year is outside the representable
    /// date range.
    pub fn observed(&self, year: Year) -> Result<Observance> {
        let (date, shifted) = if self.month == 2 && self.day == 29 && !is_leap_year(year) {
            (Date::from_ymd(year, 3, 1)?, true)
        } else {
            (Date::from_ymd(year, self.month, self.day)?, false)
        };
        Ok(Observance::new(date, self.label_for(year, shifted)))
    }

    fn label_for(&self, year: Year, shifted: bool) -> String {
        let age = self.born.map(|born| year as i32 - born as i32);
        match (age, shifted) {
            (Some(age), false) => format!("{} ({age})", self.name),
            (Some(age), true) => format!("{} ({age}, 02-29)", self.name),
            (None, true) => format!("{} (02-29)", self.name),
            (None, false) => self.name.clone(),
        }
    }
}

// ── Nameday ───────────────────────────────────────────────────────────────────

/// A nameday: a yearless month/day pair and a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nameday {
    month: u8,
    day: u8,
    name: String,
}

impl Nameday {
    /// Create a nameday.  Feb 29 is accepted; it simply never occurs in
    /// non-leap years.
    pub fn new(month: u8, day: u8, name: impl Into<String>) -> Result<Self> {
        check_month_day(month, day, None)?;
        Ok(Self {
            month,
            day,
            name: name.into(),
        })
    }

    /// Parse from a `mm-dd` string and a name.
    pub fn parse(datestr: &str, name: impl Into<String>) -> Result<Self> {
        let (month, day) = parse::parse_month_day(datestr)?;
        Self::new(month, day, name)
    }

    /// The nameday month (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// The nameday day of month.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// The name celebrated.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolve the observance for a celebration year, or `None` when the
    /// nameday does not occur in that year (Feb 29 outside leap years, or
    /// a year outside the representable date range).
    pub fn observed(&self, year: Year) -> Option<Observance> {
        let date = Date::from_ymd(year, self.month, self.day).ok()?;
        Some(Observance::new(date, self.name.clone()))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
