//! Objective capability consumed by the optimizers.
//!
//! Any `Fn(&Array1<f64>) -> f64` is an infallible objective. The polynomial
//! fit from `polyfit-testfunctions` is adapted here to both traits.

use ndarray::Array1;
use polyfit_testfunctions::PolynomialApproximate;

use crate::error::ObjectiveError;

/// Scalar fitness of a candidate vector, lower is better.
pub trait Objective {
    fn evaluate(&self, x: &Array1<f64>) -> Result<f64, ObjectiveError>;
}

/// Objective with an analytic gradient, required by steepest descent.
pub trait Differentiable: Objective {
    /// Gradient at `x`; must have the same length as `x`.
    fn gradient(&self, x: &Array1<f64>) -> Result<Array1<f64>, ObjectiveError>;
}

impl<F> Objective for F
where
    F: Fn(&Array1<f64>) -> f64,
{
    fn evaluate(&self, x: &Array1<f64>) -> Result<f64, ObjectiveError> {
        Ok(self(x))
    }
}

impl Objective for PolynomialApproximate {
    fn evaluate(&self, w: &Array1<f64>) -> Result<f64, ObjectiveError> {
        if w.is_empty() {
            return Err(ObjectiveError::new("polynomial needs at least one coefficient"));
        }
        Ok(self.value(w))
    }
}

impl Differentiable for PolynomialApproximate {
    fn gradient(&self, w: &Array1<f64>) -> Result<Array1<f64>, ObjectiveError> {
        if w.is_empty() {
            return Err(ObjectiveError::new("polynomial needs at least one coefficient"));
        }
        Ok(PolynomialApproximate::gradient(self, w))
    }
}
