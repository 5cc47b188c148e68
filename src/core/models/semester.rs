//! Semester model

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Academic term within a calendar year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Term {
    /// Spring term (first of the year)
    Spring,
    /// Summer term
    Summer,
    /// Fall term (last of the year)
    Fall,
}

impl Term {
    /// Position of the term inside its year (Spring=0, Summer=1, Fall=2)
    #[must_use]
    pub const fn order(self) -> i32 {
        match self {
            Self::Spring => 0,
            Self::Summer => 1,
            Self::Fall => 2,
        }
    }

    /// Whether this is one of the two regular (non-summer) terms
    #[must_use]
    pub const fn is_regular(self) -> bool {
        !matches!(self, Self::Summer)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spring => write!(f, "Spring"),
            Self::Summer => write!(f, "Summer"),
            Self::Fall => write!(f, "Fall"),
        }
    }
}

impl FromStr for Term {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "spring" | "sp" => Ok(Self::Spring),
            "summer" | "su" => Ok(Self::Summer),
            "fall" | "autumn" | "fa" => Ok(Self::Fall),
            _ => Err(format!("Unknown term: '{s}'")),
        }
    }
}

impl TryFrom<String> for Term {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A specific term in a specific year (e.g., Fall 2024)
///
/// Semesters are ordered chronologically by [`Semester::ordinal`], which is
/// also the key used when grouping courses by semester.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SemesterRepr", into = "String")]
pub struct Semester {
    /// Calendar year
    pub year: i32,
    /// Term within the year
    pub term: Term,
}

/// Earliest year accepted when parsing
pub const MIN_YEAR: i32 = 1;

/// Latest year accepted when parsing
pub const MAX_YEAR: i32 = 9999;

fn check_year(year: i32) -> Result<(), String> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(format!("Year {year} outside {MIN_YEAR}-{MAX_YEAR}"))
    }
}

/// Accepted on-disk shapes: `"Fall 2024"` or `{ year = 2024, term = "Fall" }`
#[derive(Deserialize)]
#[serde(untagged)]
enum SemesterRepr {
    Text(String),
    Table { year: i32, term: Term },
}

impl TryFrom<SemesterRepr> for Semester {
    type Error = String;

    fn try_from(repr: SemesterRepr) -> Result<Self, Self::Error> {
        match repr {
            SemesterRepr::Text(text) => text.parse(),
            SemesterRepr::Table { year, term } => {
                check_year(year)?;
                Ok(Self::new(year, term))
            }
        }
    }
}

impl From<Semester> for String {
    fn from(semester: Semester) -> Self {
        semester.to_string()
    }
}

impl Semester {
    /// Create a new semester
    #[must_use]
    pub const fn new(year: i32, term: Term) -> Self {
        Self { year, term }
    }

    /// Chronological ordinal: `year * 10 + term order`
    #[must_use]
    pub fn ordinal(&self) -> i64 {
        i64::from(self.year) * 10 + i64::from(self.term.order())
    }

    /// The semester immediately before this one
    #[must_use]
    pub const fn previous(&self) -> Self {
        match self.term {
            Term::Spring => Self::new(self.year.saturating_sub(1), Term::Fall),
            Term::Summer => Self::new(self.year, Term::Spring),
            Term::Fall => Self::new(self.year, Term::Summer),
        }
    }

    /// The semester immediately after this one
    #[must_use]
    pub const fn next(&self) -> Self {
        match self.term {
            Term::Spring => Self::new(self.year, Term::Summer),
            Term::Summer => Self::new(self.year, Term::Fall),
            Term::Fall => Self::new(self.year.saturating_add(1), Term::Spring),
        }
    }
}

impl PartialOrd for Semester {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Semester {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal().cmp(&other.ordinal())
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.term, self.year)
    }
}

impl FromStr for Semester {
    type Err = String;

    /// Parse `"Fall 2024"`, `"2024 Fall"`, or `"fall-2024"` (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
            .filter(|p| !p.is_empty())
            .collect();

        let [first, second] = parts.as_slice() else {
            return Err(format!("Invalid semester '{s}': expected e.g. 'Fall 2024'"));
        };

        let (term_str, year_str) = if first.chars().all(|c| c.is_ascii_digit()) {
            (*second, *first)
        } else {
            (*first, *second)
        };

        let term = term_str.parse::<Term>()?;
        let year = year_str
            .parse::<i32>()
            .map_err(|_| format!("Invalid year in semester '{s}'"))?;
        check_year(year)?;

        Ok(Self::new(year, term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal() {
        assert_eq!(Semester::new(2024, Term::Spring).ordinal(), 20240);
        assert_eq!(Semester::new(2024, Term::Summer).ordinal(), 20241);
        assert_eq!(Semester::new(2024, Term::Fall).ordinal(), 20242);
    }

    #[test]
    fn test_chronological_ordering() {
        let mut semesters = vec![
            Semester::new(2025, Term::Spring),
            Semester::new(2024, Term::Fall),
            Semester::new(2024, Term::Summer),
            Semester::new(2024, Term::Spring),
        ];
        semesters.sort();

        assert_eq!(semesters[0], Semester::new(2024, Term::Spring));
        assert_eq!(semesters[3], Semester::new(2025, Term::Spring));
    }

    #[test]
    fn test_previous_and_next_wrap_years() {
        let spring = Semester::new(2025, Term::Spring);
        assert_eq!(spring.previous(), Semester::new(2024, Term::Fall));
        assert_eq!(spring.previous().next(), spring);
        assert_eq!(
            Semester::new(2024, Term::Fall).next(),
            Semester::new(2025, Term::Spring)
        );
    }

    #[test]
    fn test_parse_formats() {
        let expected = Semester::new(2024, Term::Fall);
        assert_eq!("Fall 2024".parse::<Semester>(), Ok(expected));
        assert_eq!("2024 Fall".parse::<Semester>(), Ok(expected));
        assert_eq!("fall-2024".parse::<Semester>(), Ok(expected));
        assert_eq!("  FALL   2024 ".parse::<Semester>(), Ok(expected));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("Fall".parse::<Semester>().is_err());
        assert!("Winter 2024".parse::<Semester>().is_err());
        assert!("Fall twenty".parse::<Semester>().is_err());
    }

    #[test]
    fn test_parse_rejects_out_of_range_years() {
        assert!("Fall 2000000000".parse::<Semester>().is_err());
        assert!("Spring 0".parse::<Semester>().is_err());
        assert!("Fall 10000".parse::<Semester>().is_err());
        assert_eq!(
            "Fall 9999".parse::<Semester>(),
            Ok(Semester::new(MAX_YEAR, Term::Fall))
        );

        let table = toml::from_str::<toml::Value>("year = 2000000000\nterm = \"Fall\"")
            .expect("valid toml")
            .try_into::<Semester>();
        assert!(table.is_err());
    }

    #[test]
    fn test_extreme_years_order_without_overflow() {
        let far = Semester::new(i32::MAX, Term::Fall);
        let current = Semester::new(2024, Term::Fall);

        assert!(far > current);
        assert!(Semester::new(i32::MIN, Term::Spring) < current);
        assert_eq!(far.next().year, i32::MAX);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let semester = Semester::new(2023, Term::Summer);
        assert_eq!(semester.to_string(), "Summer 2023");
        assert_eq!(semester.to_string().parse::<Semester>(), Ok(semester));
    }

    #[test]
    fn test_deserialize_string_and_table() {
        #[derive(Deserialize)]
        struct Wrapper {
            a: Semester,
            b: Semester,
        }

        let wrapper: Wrapper = toml::from_str(
            r#"
a = "Spring 2023"
b = { year = 2023, term = "fall" }
"#,
        )
        .expect("parse semesters");

        assert_eq!(wrapper.a, Semester::new(2023, Term::Spring));
        assert_eq!(wrapper.b, Semester::new(2023, Term::Fall));
    }
}
