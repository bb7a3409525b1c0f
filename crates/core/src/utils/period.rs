use chrono::{Datelike, Months, NaiveDate};
use std::fmt;

use crate::errors::{Error, Result};

const MONTH_NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// A calendar month used as an aggregation window: `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Period {
    start: NaiveDate,
}

impl Period {
    /// Builds the period for `month` (1-12) of `year`.
    pub fn new(month: u32, year: i32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|start| Period { start })
            .ok_or_else(|| Error::invalid_input(format!("Invalid period {}/{}", month, year)))
    }

    /// The period that contains `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Period {
            start: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn month(&self) -> u32 {
        self.start.month()
    }

    pub fn year(&self) -> i32 {
        self.start.year()
    }

    /// First day of the period (inclusive).
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// First day of the following period (exclusive).
    pub fn end(&self) -> NaiveDate {
        self.start
            .checked_add_months(Months::new(1))
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start() && date < self.end()
    }

    /// Portuguese month name, as printed on exported reports.
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.start.month0() as usize]
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_period_bounds() {
        let period = Period::new(3, 2024).unwrap();
        assert_eq!(period.start(), date(2024, 3, 1));
        assert_eq!(period.end(), date(2024, 4, 1));
        assert!(period.contains(date(2024, 3, 31)));
        assert!(!period.contains(date(2024, 4, 1)));
        assert!(!period.contains(date(2024, 2, 29)));
    }

    #[test]
    fn test_december_rolls_over_to_next_year() {
        let period = Period::new(12, 2023).unwrap();
        assert_eq!(period.end(), date(2024, 1, 1));
        assert!(period.contains(date(2023, 12, 31)));
    }

    #[test]
    fn test_invalid_month_is_rejected() {
        assert!(Period::new(0, 2024).is_err());
        assert!(Period::new(13, 2024).is_err());
    }

    #[test]
    fn test_containing_and_display() {
        let period = Period::containing(date(2024, 2, 17));
        assert_eq!(period.start(), date(2024, 2, 1));
        assert_eq!(period.to_string(), "2024-02");
        assert_eq!(period.month_name(), "Fevereiro");
    }
}
