//! `HolidayCalendar` trait and the `Holiday` value type.

use wcal_core::errors::Result;
use wcal_core::Year;
use wcal_time::Date;

/// A public holiday: a concrete date with a localized display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holiday {
    date: Date,
    name: String,
}

impl Holiday {
    /// Pair a date with its display name.
    pub fn new(date: Date, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
        }
    }

    /// The date the holiday falls on.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Localized display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Which of a calendar's name tables to use.
///
/// Calendars with a single table ignore the style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameStyle {
    /// Full official names.
    #[default]
    Long,
    /// Abbreviated everyday names.
    Short,
}

/// A country's public-holiday calendar.
pub trait HolidayCalendar: std::fmt::Debug + Send + Sync {
    /// Human-readable calendar name (e.g. `"Czech Republic"`).
    fn name(&self) -> &str;

    /// All public holidays of `year`, in chronological order.
    ///
    /// Fails only when `year` lies outside the representable date
    /// range.
    fn holidays(&self, year: Year) -> Result<Vec<Holiday>>;
}

/// Resolve a day-of-year to a date within `year`.
pub(crate) fn date_of_doy(year: Year, doy: u16) -> Result<Date> {
    Date::from_ymd(year, 1, 1)?.add_days(i32::from(doy) - 1)
}
