//! Structured diagnostics for non-fatal attachment anomalies.
//!
//! A rejected attachment is data, not a fatal error: bulk attachment
//! calls on [`Planner`](crate::Planner) collect [`Misplaced`] values into
//! an [`Attachment`] report instead of aborting or writing to an ambient
//! warning stream.  Callers decide whether to log, count, or ignore them.

use thiserror::Error;

use wcal_time::Date;

/// One rejected attachment: the annotation's resolved date does not
/// match the day (or week) it was offered to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{label:?} dated {date} does not belong to {target}")]
pub struct Misplaced {
    /// The date of the day (or week Monday) that refused the annotation.
    pub target: Date,
    /// The annotation's resolved date.
    pub date: Date,
    /// The annotation's display label.
    pub label: String,
}

/// The outcome of one bulk attachment call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attachment {
    /// Dates at which the annotation was placed (one per candidate year
    /// that landed inside the grid).
    pub placed: Vec<Date>,
    /// Attachments rejected by date validation.
    pub dropped: Vec<Misplaced>,
}

impl Attachment {
    /// `true` when nothing was dropped.
    pub fn is_clean(&self) -> bool {
        self.dropped.is_empty()
    }
}
