//! Loader for student record files (TOML or JSON)
//!
//! This is the validating layer in front of the calculator: grades are
//! clamped into `[0, 100]` here and courses must carry positive credits.
//! The calculator itself trusts whatever it is given.

use crate::core::models::{AttemptKind, CourseRecord, GradeAttempt, StudentProfile};
use crate::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Lowest valid grade
pub const MIN_GRADE: f64 = 0.0;

/// Highest valid grade
pub const MAX_GRADE: f64 = 100.0;

/// A student and all of their course records, as stored in a file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// The student and degree
    pub student: StudentProfile,

    /// Course records in file order
    #[serde(default)]
    pub courses: Vec<CourseRecord>,
}

/// Errors raised while loading a student record
#[derive(Debug, Error)]
pub enum RecordError {
    /// The file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The file is not valid TOML for a student record
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// The file is not valid JSON for a student record
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension is not `.toml` or `.json`
    #[error("unsupported record format '{0}' (expected .toml or .json)")]
    UnsupportedFormat(String),

    /// A course has zero, negative, or non-finite credits
    #[error("course '{id}' has invalid credits {credits}")]
    InvalidCredits {
        /// Record identifier
        id: String,
        /// Offending credit value
        credits: f64,
    },

    /// The degree has a non-positive credit requirement
    #[error("degree credit requirement must be positive, got {0}")]
    InvalidRequirement(f64),
}

/// Supported record file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    /// TOML document
    Toml,
    /// JSON document
    Json,
}

impl RecordFormat {
    /// Pick the format from a file extension
    ///
    /// # Errors
    /// Returns [`RecordError::UnsupportedFormat`] for anything but `toml` or `json`.
    pub fn from_path(path: &Path) -> Result<Self, RecordError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match extension.as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            other => Err(RecordError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Load and validate a student record file
///
/// # Arguments
/// * `path` - Path to a `.toml` or `.json` file
///
/// # Errors
/// Returns an error if the file cannot be read or parsed, or fails validation
pub fn load_student_record<P: AsRef<Path>>(path: P) -> Result<StudentRecord, RecordError> {
    let path = path.as_ref();
    let format = RecordFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|source| RecordError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let record = parse_student_record(&content, format)?;
    debug!(
        "Loaded {} course records for '{}' from {}",
        record.courses.len(),
        record.student.name,
        path.display()
    );
    Ok(record)
}

/// Parse and validate a student record from a string
///
/// # Errors
/// Returns an error if the content cannot be parsed or fails validation
pub fn parse_student_record(
    content: &str,
    format: RecordFormat,
) -> Result<StudentRecord, RecordError> {
    let record: StudentRecord = match format {
        RecordFormat::Toml => toml::from_str(content)?,
        RecordFormat::Json => serde_json::from_str(content)?,
    };
    validate(record)
}

/// Check credits and clamp out-of-range grades
///
/// # Errors
/// Returns an error for non-positive credits or credit requirement
pub fn validate(mut record: StudentRecord) -> Result<StudentRecord, RecordError> {
    let requirement = record.student.degree.credit_requirement;
    if !(requirement.is_finite() && requirement > 0.0) {
        return Err(RecordError::InvalidRequirement(requirement));
    }

    for course in &mut record.courses {
        let credits = course.credits();
        if !(credits.is_finite() && credits > 0.0) {
            return Err(RecordError::InvalidCredits {
                id: course.id.clone(),
                credits,
            });
        }

        for attempt in &mut course.grades {
            clamp_attempt(&course.id, attempt);
        }
    }

    Ok(record)
}

/// Clamp a grade into `[0, 100]`
#[must_use]
pub fn clamp_grade(grade: f64) -> f64 {
    grade.clamp(MIN_GRADE, MAX_GRADE)
}

fn clamp_attempt(id: &str, attempt: &mut GradeAttempt) {
    match &mut attempt.kind {
        AttemptKind::Simple { grade } => clamp_in_place(id, "grade", grade),
        AttemptKind::Composite {
            components,
            cached_grade,
        } => {
            clamp_in_place(id, "grade", cached_grade);
            for component in components {
                clamp_in_place(id, "grade", &mut component.grade);
                clamp_in_place(id, "percentage", &mut component.percentage);
            }
        }
    }
}

fn clamp_in_place(id: &str, field: &str, value: &mut f64) {
    let clamped = clamp_grade(*value);
    if (clamped - *value).abs() > f64::EPSILON {
        warn!("Course '{id}': {field} {value} outside [0, 100], clamped to {clamped}");
        *value = clamped;
    }
}
