//! CSV field formatting helpers.
//!
//! The planner's output format wraps every textual field in double quotes
//! and joins multi-valued fields with `", "` inside a single quoted cell.
//! Numeric cells (week number, pages, day of month) are written raw by the
//! caller and never pass through these helpers.

/// Wrap a single value in double quotes.
pub fn quote(value: &str) -> String {
    format!("\"{value}\"")
}

/// Join values with `", "` and wrap the result in double quotes.
///
/// An empty iterator yields `""` (an empty quoted cell), which is how the
/// output format renders "no annotations on this day".
pub fn quote_join<I, S>(values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = values
        .into_iter()
        .map(|v| v.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("\"{joined}\"")
}

/// Quote the value if present, else an empty quoted cell.
pub fn quote_opt(value: Option<&str>) -> String {
    quote(value.unwrap_or(""))
}
