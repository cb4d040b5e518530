//! Error types for wall layout generation.

use thiserror::Error;

/// Result type for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Everything that can stop a wall from being built.
///
/// All variants are fatal to the current build; a partially generated wall is
/// never returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("invalid dimension `{field}`: {value} (must be finite and positive)")]
    InvalidDimension { field: &'static str, value: f64 },

    #[error("wall width {width_mm}mm spans {modules} half-modules of {half_module_mm}mm")]
    MisalignedWidth {
        width_mm: f64,
        half_module_mm: f64,
        modules: f64,
    },

    #[error("{bond} bond cannot tile course {course}: {reason}")]
    PatternInfeasible {
        bond: &'static str,
        course: usize,
        reason: String,
    },

    #[error("no valid course {course} found after {attempts} attempts")]
    SearchExhausted { course: usize, attempts: usize },

    #[error("course {course} is {actual_mm}mm wide, expected {expected_mm}mm")]
    WidthMismatch {
        course: usize,
        expected_mm: f64,
        actual_mm: f64,
    },

    #[error("unknown bond pattern: {0}")]
    UnknownBond(String),

    #[error("unknown build strategy: {0}")]
    UnknownStrategy(String),
}

impl LayoutError {
    pub(crate) fn infeasible(bond: &'static str, course: usize, reason: impl Into<String>) -> Self {
        Self::PatternInfeasible {
            bond,
            course,
            reason: reason.into(),
        }
    }
}
