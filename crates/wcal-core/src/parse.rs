//! Date-string parsing helpers.
//!
//! The source files feeding the planner carry dates in two shapes:
//! full ISO dates (`yyyy-mm-dd`, where year `0000` marks an unknown birth
//! year) and yearless month-day pairs (`mm-dd`).  Validation of the
//! resulting numbers against the calendar is the caller's concern; these
//! helpers only take strings apart.

use crate::errors::{Error, Result};

/// Parse a date string in ISO 8601 format (`yyyy-mm-dd`).
///
/// Returns `(year, month, day)` on success.  Year `0` is allowed (the
/// birthday source uses `0000` for "year unknown").
pub fn parse_iso_date(s: &str) -> Result<(u16, u8, u8)> {
    let s = s.trim();
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 {
        return Err(Error::Parse(format!("expected yyyy-mm-dd, got {s:?}")));
    }
    let year: u16 = parts[0]
        .parse()
        .map_err(|_| Error::Parse(format!("invalid year in {s:?}")))?;
    let month: u8 = parts[1]
        .parse()
        .map_err(|_| Error::Parse(format!("invalid month in {s:?}")))?;
    let day: u8 = parts[2]
        .parse()
        .map_err(|_| Error::Parse(format!("invalid day in {s:?}")))?;
    Ok((year, month, day))
}

/// Parse a yearless month-day string (`mm-dd`).
///
/// Returns `(month, day)` on success.
pub fn parse_month_day(s: &str) -> Result<(u8, u8)> {
    let s = s.trim();
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 2 {
        return Err(Error::Parse(format!("expected mm-dd, got {s:?}")));
    }
    let month: u8 = parts[0]
        .parse()
        .map_err(|_| Error::Parse(format!("invalid month in {s:?}")))?;
    let day: u8 = parts[1]
        .parse()
        .map_err(|_| Error::Parse(format!("invalid day in {s:?}")))?;
    Ok((month, day))
}
