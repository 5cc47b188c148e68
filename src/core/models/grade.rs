//! Grade attempt and component models

use crate::core::grades::component_grade;
use serde::{Deserialize, Serialize};

/// A weighted sub-grade of an attempt (e.g., "Midterm", "Homework")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeComponent {
    /// Component name
    pub name: String,

    /// Grade earned on this component (0-100)
    pub grade: f64,

    /// Share of the attempt this component is worth (0-100)
    pub percentage: f64,
}

impl GradeComponent {
    /// Create a new grade component
    ///
    /// # Arguments
    /// * `name` - Component name
    /// * `grade` - Grade earned (0-100)
    /// * `percentage` - Weight of the component (0-100)
    #[must_use]
    pub fn new(name: impl Into<String>, grade: f64, percentage: f64) -> Self {
        Self {
            name: name.into(),
            grade,
            percentage,
        }
    }
}

/// How an attempt's grade is represented
#[derive(Debug, Clone, PartialEq)]
pub enum AttemptKind {
    /// A single stored grade
    Simple {
        /// The grade (0-100)
        grade: f64,
    },
    /// A grade made of weighted components.
    ///
    /// `cached_grade` is the value last stored alongside the components; it
    /// is kept for round-tripping but is never used for calculations.
    Composite {
        /// Weighted components
        components: Vec<GradeComponent>,
        /// Stored display value
        cached_grade: f64,
    },
}

/// One graded attempt at a course (a course may be retaken)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "AttemptRecord", into = "AttemptRecord")]
pub struct GradeAttempt {
    /// Whether this attempt is the one that counts
    pub is_final: bool,

    /// Optional label (e.g., "Retake")
    pub label: Option<String>,

    /// Grade representation
    pub kind: AttemptKind,
}

/// Document shape of an attempt: `components` present and non-empty means
/// the stored `grade` is only a cache.
#[derive(Serialize, Deserialize)]
struct AttemptRecord {
    #[serde(default)]
    grade: f64,
    #[serde(default, alias = "isFinal")]
    is_final: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    components: Vec<GradeComponent>,
}

impl From<AttemptRecord> for GradeAttempt {
    fn from(record: AttemptRecord) -> Self {
        let kind = if record.components.is_empty() {
            AttemptKind::Simple {
                grade: record.grade,
            }
        } else {
            AttemptKind::Composite {
                components: record.components,
                cached_grade: record.grade,
            }
        };

        Self {
            is_final: record.is_final,
            label: record.label,
            kind,
        }
    }
}

impl From<GradeAttempt> for AttemptRecord {
    fn from(attempt: GradeAttempt) -> Self {
        let (grade, components) = match attempt.kind {
            AttemptKind::Simple { grade } => (grade, Vec::new()),
            AttemptKind::Composite {
                components,
                cached_grade,
            } => (cached_grade, components),
        };

        Self {
            grade,
            is_final: attempt.is_final,
            label: attempt.label,
            components,
        }
    }
}

impl GradeAttempt {
    /// Create a non-final attempt with a single stored grade
    #[must_use]
    pub const fn simple(grade: f64) -> Self {
        Self {
            is_final: false,
            label: None,
            kind: AttemptKind::Simple { grade },
        }
    }

    /// Create a non-final attempt from weighted components.
    ///
    /// The cached grade is filled in from the components.
    #[must_use]
    pub fn composite(components: Vec<GradeComponent>) -> Self {
        let cached_grade = component_grade(&components);
        Self {
            is_final: false,
            label: None,
            kind: AttemptKind::Composite {
                components,
                cached_grade,
            },
        }
    }

    /// Mark this attempt as the final one
    #[must_use]
    pub const fn marked_final(mut self) -> Self {
        self.is_final = true;
        self
    }

    /// Attach a label to this attempt
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Grade this attempt contributes to calculations.
    ///
    /// Composite attempts with at least one component report the weighted
    /// component sum; the stored grade is ignored for them.
    #[must_use]
    pub fn effective_grade(&self) -> f64 {
        match &self.kind {
            AttemptKind::Simple { grade } => *grade,
            AttemptKind::Composite {
                components,
                cached_grade,
            } => {
                if components.is_empty() {
                    *cached_grade
                } else {
                    component_grade(components)
                }
            }
        }
    }

    /// Components of this attempt, empty for simple attempts
    #[must_use]
    pub fn components(&self) -> &[GradeComponent] {
        match &self.kind {
            AttemptKind::Simple { .. } => &[],
            AttemptKind::Composite { components, .. } => components,
        }
    }
}
