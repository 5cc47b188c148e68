//! Degree model

use serde::{Deserialize, Serialize};

/// A student's degree requirements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegreeConfig {
    /// Total credits required to graduate
    #[serde(alias = "creditRequirement")]
    pub credit_requirement: f64,

    /// Year the student started the degree
    #[serde(default, alias = "startYear", skip_serializing_if = "Option::is_none")]
    pub start_year: Option<i32>,

    /// Year the student expects to graduate
    #[serde(
        default,
        alias = "expectedGraduationYear",
        skip_serializing_if = "Option::is_none"
    )]
    pub expected_graduation_year: Option<i32>,
}

impl DegreeConfig {
    /// Create a degree configuration with no year bounds
    ///
    /// # Arguments
    /// * `credit_requirement` - Total credits required to graduate
    #[must_use]
    pub const fn new(credit_requirement: f64) -> Self {
        Self {
            credit_requirement,
            start_year: None,
            expected_graduation_year: None,
        }
    }

    /// Set the start and expected graduation years
    #[must_use]
    pub const fn with_years(mut self, start_year: i32, expected_graduation_year: i32) -> Self {
        self.start_year = Some(start_year);
        self.expected_graduation_year = Some(expected_graduation_year);
        self
    }
}

/// A student and their degree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    /// Student display name
    #[serde(default)]
    pub name: String,

    /// Degree requirements
    pub degree: DegreeConfig,
}

impl StudentProfile {
    /// Create a new student profile
    #[must_use]
    pub fn new(name: impl Into<String>, degree: DegreeConfig) -> Self {
        Self {
            name: name.into(),
            degree,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_creation() {
        let degree = DegreeConfig::new(128.0).with_years(2022, 2026);

        assert!((degree.credit_requirement - 128.0).abs() < f64::EPSILON);
        assert_eq!(degree.start_year, Some(2022));
        assert_eq!(degree.expected_graduation_year, Some(2026));
    }

    #[test]
    fn test_camel_case_aliases() {
        let degree: DegreeConfig = serde_json::from_str(
            r#"{"creditRequirement": 120, "startYear": 2021, "expectedGraduationYear": 2025}"#,
        )
        .expect("parse degree");

        assert!((degree.credit_requirement - 120.0).abs() < f64::EPSILON);
        assert_eq!(degree.start_year, Some(2021));
        assert_eq!(degree.expected_graduation_year, Some(2025));
    }

    #[test]
    fn test_profile_without_name() {
        let profile: StudentProfile = toml::from_str(
            r"
[degree]
credit_requirement = 180
",
        )
        .expect("parse profile");

        assert!(profile.name.is_empty());
        assert!(profile.degree.start_year.is_none());
    }
}
