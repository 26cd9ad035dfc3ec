//! # weekcal
//!
//! Week-per-row calendar dataset generator.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the
//! individual `wcal-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use weekcal::planner::{Birthday, MonthNames, Planner};
//!
//! let mut planner = Planner::new(2024, 2, 2, MonthNames::default()).unwrap();
//! let birthday = Birthday::new(Some(1990), 7, 14, "Marie").unwrap();
//! planner.add_birthday(&birthday);
//! let csv = planner.to_csv();
//! assert!(csv.contains("Marie (34)"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Errors, CSV quoting, and shared parsing helpers.
pub use wcal_core as core;

/// Date, weekday, month, and ISO-week types.
pub use wcal_time as time;

/// The week grid, annotation types, and CSV serialization.
pub use wcal_planner as planner;

/// Public-holiday calendars with localized names.
pub use wcal_holidays as holidays;
