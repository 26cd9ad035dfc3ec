//! Czech Republic public holidays.

use crate::calendar::{date_of_doy, Holiday, HolidayCalendar, NameStyle};
use crate::easter::easter_monday;
use wcal_core::errors::Result;
use wcal_core::Year;
use wcal_time::Date;

/// Czech public-holiday calendar.
///
/// The following holidays are observed:
/// * New Year's Day / Restoration Day (Jan 1)
/// * Good Friday (em-3, a public holiday since 2016)
/// * Easter Monday (em)
/// * Labour Day (May 1)
/// * Liberation Day (May 8)
/// * Saints Cyril and Methodius Day (Jul 5)
/// * Jan Hus Day (Jul 6)
/// * Czech Statehood Day (Sep 28)
/// * Independent Czechoslovak State Day (Oct 28)
/// * Struggle for Freedom and Democracy Day (Nov 17)
/// * Christmas Eve (Dec 24)
/// * Christmas Day (Dec 25)
/// * St. Stephen's Day (Dec 26)
///
/// Names are Czech; the [`NameStyle`] only changes Saints Cyril and
/// Methodius Day, which has a common short form.
#[derive(Debug, Clone, Copy, Default)]
pub struct CzechRepublic {
    style: NameStyle,
}

impl CzechRepublic {
    /// Calendar with the given name style.
    pub fn new(style: NameStyle) -> Self {
        Self { style }
    }

    fn cyril_and_methodius(&self) -> &'static str {
        match self.style {
            NameStyle::Long => "Den slovanských věrozvěstů Cyrila a Metoděje",
            NameStyle::Short => "Cyril a Metoděj",
        }
    }
}

impl HolidayCalendar for CzechRepublic {
    fn name(&self) -> &str {
        "Czech Republic"
    }

    fn holidays(&self, year: Year) -> Result<Vec<Holiday>> {
        let fixed = [
            (1, 1, "Nový rok"),
            (5, 1, "Svátek práce"),
            (5, 8, "Den vítězství"),
            (7, 5, self.cyril_and_methodius()),
            (7, 6, "Den upálení mistra Jana Husa"),
            (9, 28, "Den české státnosti"),
            (10, 28, "Den vzniku samostatného československého státu"),
            (11, 17, "Den boje za svobodu a demokracii"),
            (12, 24, "Štědrý den"),
            (12, 25, "1. svátek vánoční"),
            (12, 26, "2. svátek vánoční"),
        ];

        let mut holidays = Vec::with_capacity(13);
        for (month, day, name) in fixed {
            holidays.push(Holiday::new(Date::from_ymd(year, month, day)?, name));
        }

        let em = easter_monday(year);
        // Good Friday became a public holiday in 2016.
        if year >= 2016 {
            holidays.push(Holiday::new(date_of_doy(year, em - 3)?, "Velký pátek"));
        }
        holidays.push(Holiday::new(date_of_doy(year, em)?, "Velikonoční pondělí"));

        holidays.sort_by_key(Holiday::date);
        Ok(holidays)
    }
}
