//! Public-holiday calendars with localized names.
//!
//! Each calendar implements [`HolidayCalendar`] and yields the
//! chronological [`Holiday`] list for a year, fixed-date entries
//! interleaved with the Easter-relative ones.  The names are the
//! local-language strings a printed planner would show, with a
//! [`NameStyle`] choice where a common short form exists.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod calendar;
mod czech_republic;
mod easter;
mod france;

pub use calendar::{Holiday, HolidayCalendar, NameStyle};
pub use czech_republic::CzechRepublic;
pub use france::France;
