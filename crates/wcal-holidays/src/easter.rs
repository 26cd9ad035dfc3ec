//! Easter Monday day-of-year, shared by the country calendars.

use wcal_core::Year;
use wcal_time::days_in_month;

/// Day-of-year of Easter Monday for `year`.
///
/// Good Friday is `easter_monday(year) - 3`, Ascension Thursday
/// `+ 38`, Whit Monday `+ 49`.
pub(crate) fn easter_monday(year: Year) -> u16 {
    let y = i32::from(year);
    // Oudin's algorithm for Easter Sunday (requires signed arithmetic)
    let g = y % 19;
    let c = y / 100;
    let h = (c - c / 4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
    let i = h - (h / 28) * (1 - (h / 28) * (29 / (h + 1)) * ((21 - g) / 11));
    let j = (y + y / 4 + i + 2 - c + c / 4) % 7;
    let p = i - j;
    let e_day = 1 + (p + 27 + (p + 6) / 40) % 31;
    let e_month = 3 + (p + 26) / 30;
    // Easter Sunday day-of-year
    let mut doy = e_day as u16;
    for month in 1..e_month {
        doy += u16::from(days_in_month(year, month as u8));
    }
    doy + 1 // Easter Monday = Easter Sunday + 1
}
