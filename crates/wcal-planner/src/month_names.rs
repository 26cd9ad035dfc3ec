//! Month display names.

use wcal_core::ensure;
use wcal_core::errors::Result;
use wcal_time::Month;

/// The twelve month display names, January first.
///
/// The default is English.  A caller may supply translated names; the
/// planner carries the list verbatim and does no other localization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthNames(Vec<String>);

impl MonthNames {
    /// Build from exactly twelve names in January→December order.
    pub fn new(names: Vec<String>) -> Result<Self> {
        ensure!(
            names.len() == 12,
            "month list must have exactly 12 entries, got {}",
            names.len()
        );
        Ok(Self(names))
    }

    /// The display name for `month` (1–12).
    pub fn name(&self, month: u8) -> &str {
        debug_assert!((1..=12).contains(&month));
        &self.0[month as usize - 1]
    }
}

impl Default for MonthNames {
    fn default() -> Self {
        Self(Month::ALL.iter().map(|m| m.name().to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_english() {
        let names = MonthNames::default();
        assert_eq!(names.name(1), "January");
        assert_eq!(names.name(12), "December");
    }

    #[test]
    fn exactly_twelve() {
        assert!(MonthNames::new(vec!["Jan".into(); 12]).is_ok());
        assert!(MonthNames::new(vec!["Jan".into(); 11]).is_err());
        assert!(MonthNames::new(vec!["Jan".into(); 13]).is_err());
        assert!(MonthNames::new(Vec::new()).is_err());
    }

    #[test]
    fn custom_names() {
        let czech: Vec<String> = [
            "leden", "únor", "březen", "duben", "květen", "červen", "červenec", "srpen", "září",
            "říjen", "listopad", "prosinec",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        let names = MonthNames::new(czech).unwrap();
        assert_eq!(names.name(3), "březen");
    }
}
