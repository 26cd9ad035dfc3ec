//! France public holidays.

use crate::calendar::{date_of_doy, Holiday, HolidayCalendar};
use crate::easter::easter_monday;
use wcal_core::errors::Result;
use wcal_core::Year;
use wcal_time::Date;

/// French public-holiday calendar.
///
/// The following holidays are observed:
/// * New Year's Day (Jan 1)
/// * Easter Monday (em)
/// * Labour Day (May 1)
/// * Victory in Europe Day (May 8)
/// * Ascension Thursday (em+38)
/// * Whit Monday (em+49)
/// * Bastille Day (Jul 14)
/// * Assumption Day (Aug 15)
/// * All Saints' Day (Nov 1)
/// * Armistice Day (Nov 11)
/// * Christmas Day (Dec 25)
///
/// Names are French; there is only one name table.
#[derive(Debug, Clone, Copy, Default)]
pub struct France;

impl HolidayCalendar for France {
    fn name(&self) -> &str {
        "France"
    }

    fn holidays(&self, year: Year) -> Result<Vec<Holiday>> {
        let fixed = [
            (1, 1, "nouvel an"),
            (5, 1, "fête du travail"),
            (5, 8, "victoire 1945"),
            (7, 14, "fête nationale"),
            (8, 15, "Assomption"),
            (11, 1, "Toussaint"),
            (11, 11, "armistice 1918"),
            (12, 25, "Noël"),
        ];

        let mut holidays = Vec::with_capacity(11);
        for (month, day, name) in fixed {
            holidays.push(Holiday::new(Date::from_ymd(year, month, day)?, name));
        }

        let em = easter_monday(year);
        holidays.push(Holiday::new(date_of_doy(year, em)?, "lundi de Pâques"));
        holidays.push(Holiday::new(date_of_doy(year, em + 38)?, "Ascension"));
        holidays.push(Holiday::new(date_of_doy(year, em + 49)?, "Pentecôte"));

        // Ascension can precede May 1 (earliest Apr 30) or follow
        // May 8, so the interleaving is year-dependent.
        holidays.sort_by_key(Holiday::date);
        Ok(holidays)
    }
}
