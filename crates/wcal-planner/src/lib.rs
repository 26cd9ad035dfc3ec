//! Week-per-row planner grid.
//!
//! The centerpiece is [`Planner`]: the Monday-anchored week grid for a
//! target year, extended by a configurable number of trailing weeks.
//! Recurring entries ([`Birthday`], [`Nameday`]) and dated ones
//! ([`Event`], moon phases, holidays) are resolved to concrete
//! [`Observance`]s and attached to the [`Day`] they fall on; the grid
//! then renders as CSV, one row per [`Week`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod day;
mod diag;
mod entry;
mod month_names;
mod planner;
mod week;

pub use day::Day;
pub use diag::{Attachment, Misplaced};
pub use entry::{Birthday, Event, Nameday, Observance};
pub use month_names::MonthNames;
pub use planner::Planner;
pub use week::Week;
