//! Academic calendar: mapping calendar dates to semesters
//!
//! The month boundaries live here as a single constant so that every place
//! that derives the current semester from a date agrees on it.

use crate::core::models::{Semester, Term};
use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Month boundaries used to place a date in a term.
///
/// Months before `summer_start_month` are Spring, months from
/// `summer_start_month` up to (not including) `fall_start_month` are Summer,
/// and the rest of the year is Fall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicCalendar {
    /// First month (1-12) of the Summer term
    pub summer_start_month: u32,
    /// First month (1-12) of the Fall term
    pub fall_start_month: u32,
}

/// Default boundaries: January-May Spring, June-August Summer, September-December Fall
pub const DEFAULT_CALENDAR: AcademicCalendar = AcademicCalendar {
    summer_start_month: 6,
    fall_start_month: 9,
};

impl Default for AcademicCalendar {
    fn default() -> Self {
        DEFAULT_CALENDAR
    }
}

impl AcademicCalendar {
    /// Create a calendar with custom boundaries
    ///
    /// # Errors
    /// Returns an error unless `2 <= summer_start_month < fall_start_month <= 12`,
    /// which keeps every term at least one month long.
    pub fn new(summer_start_month: u32, fall_start_month: u32) -> Result<Self, String> {
        if !(2..=12).contains(&summer_start_month)
            || !(2..=12).contains(&fall_start_month)
            || summer_start_month >= fall_start_month
        {
            return Err(format!(
                "Invalid calendar boundaries: summer starts in month {summer_start_month}, fall in month {fall_start_month}"
            ));
        }

        Ok(Self {
            summer_start_month,
            fall_start_month,
        })
    }

    /// Term containing the given month (1-12)
    #[must_use]
    pub const fn term_for_month(&self, month: u32) -> Term {
        if month < self.summer_start_month {
            Term::Spring
        } else if month < self.fall_start_month {
            Term::Summer
        } else {
            Term::Fall
        }
    }

    /// Semester containing the given date
    #[must_use]
    pub fn semester_for<D: Datelike>(&self, date: &D) -> Semester {
        Semester::new(date.year(), self.term_for_month(date.month()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn default_boundaries() {
        let cal = DEFAULT_CALENDAR;

        assert_eq!(cal.term_for_month(1), Term::Spring);
        assert_eq!(cal.term_for_month(5), Term::Spring);
        assert_eq!(cal.term_for_month(6), Term::Summer);
        assert_eq!(cal.term_for_month(8), Term::Summer);
        assert_eq!(cal.term_for_month(9), Term::Fall);
        assert_eq!(cal.term_for_month(12), Term::Fall);
    }

    #[test]
    fn semester_for_date() {
        let cal = AcademicCalendar::default();

        assert_eq!(
            cal.semester_for(&date(2024, 10, 16)),
            Semester::new(2024, Term::Fall)
        );
        assert_eq!(
            cal.semester_for(&date(2025, 1, 2)),
            Semester::new(2025, Term::Spring)
        );
    }

    #[test]
    fn custom_boundaries() {
        let cal = AcademicCalendar::new(5, 8).expect("valid calendar");

        assert_eq!(cal.term_for_month(5), Term::Summer);
        assert_eq!(cal.term_for_month(8), Term::Fall);
    }

    #[test]
    fn rejects_invalid_boundaries() {
        assert!(AcademicCalendar::new(9, 6).is_err());
        assert!(AcademicCalendar::new(1, 9).is_err());
        assert!(AcademicCalendar::new(6, 13).is_err());
        assert!(AcademicCalendar::new(6, 6).is_err());
    }
}
