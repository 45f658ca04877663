//! Error types for the polyfit optimizers.
//!
//! Precondition violations are reported before any generation runs.
//! Objective failures abort a run and are handed back unchanged.

use thiserror::Error;

/// Failure raised by an objective while evaluating a candidate.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("objective evaluation failed: {message}")]
pub struct ObjectiveError {
    message: String,
}

impl ObjectiveError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors that can occur while configuring or running an optimizer.
#[derive(Debug, Error)]
pub enum DEError {
    /// Population size is too small (must be >= 4).
    #[error("population size ({pop_size}) must be >= 4")]
    PopulationTooSmall {
        /// The invalid population size
        pop_size: usize,
    },

    /// Individuals need at least one gene.
    #[error("dimension must be >= 1")]
    ZeroDimension,

    /// Crossover rate is out of valid range [0, 1].
    #[error("invalid crossover rate: {rate} (must be in [0, 1])")]
    InvalidCrossoverRate {
        /// The invalid crossover rate
        rate: f64,
    },

    /// Differential weight is not a finite number.
    #[error("invalid scaling factor: {factor} (must be finite)")]
    InvalidScaling {
        /// The invalid scaling factor
        factor: f64,
    },

    /// Steepest descent step size is not a finite positive number.
    #[error("invalid step size: {alpha} (must be finite and > 0)")]
    InvalidStepSize {
        /// The invalid step size
        alpha: f64,
    },

    /// A vector has the wrong number of components.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Expected dimension
        expected: usize,
        /// Actual dimension provided
        got: usize,
    },

    /// A generation was requested before the population was initialized.
    #[error("population is not initialized")]
    NotInitialized,

    /// The objective failed; the run was aborted.
    #[error(transparent)]
    Objective(#[from] ObjectiveError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for optimizer operations.
pub type Result<T> = std::result::Result<T, DEError>;

impl DEError {
    /// Returns `true` for hyperparameter and sizing errors.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            DEError::PopulationTooSmall { .. }
                | DEError::ZeroDimension
                | DEError::InvalidCrossoverRate { .. }
                | DEError::InvalidScaling { .. }
                | DEError::InvalidStepSize { .. }
        )
    }

    /// Returns `true` if this is a dimension mismatch error.
    pub fn is_dimension_error(&self) -> bool {
        matches!(self, DEError::DimensionMismatch { .. } | DEError::ZeroDimension)
    }

    /// Returns `true` when the objective itself failed.
    pub fn is_objective_error(&self) -> bool {
        matches!(self, DEError::Objective(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DEError::PopulationTooSmall { pop_size: 3 };
        assert_eq!(err.to_string(), "population size (3) must be >= 4");

        let err: DEError = ObjectiveError::new("nan in residual").into();
        assert_eq!(err.to_string(), "objective evaluation failed: nan in residual");
    }

    #[test]
    fn test_categories() {
        let config_err = DEError::InvalidCrossoverRate { rate: 1.5 };
        let dim_err = DEError::DimensionMismatch { expected: 3, got: 2 };
        let obj_err = DEError::Objective(ObjectiveError::new("boom"));

        assert!(config_err.is_config_error());
        assert!(!config_err.is_dimension_error());
        assert!(dim_err.is_dimension_error());
        assert!(!dim_err.is_config_error());
        assert!(obj_err.is_objective_error());
        assert!(!obj_err.is_config_error());
        assert!(DEError::ZeroDimension.is_config_error());
    }
}
