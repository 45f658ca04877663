//! Steepest descent: single-point fixed-step gradient iteration.
//!
//! `x <- x - alpha * grad(x)`, optionally divided by the dimension. No
//! population, no randomness, no selection. It shares [`Termination`] with
//! the DE engine.

use log::{debug, info};
use ndarray::Array1;

use crate::error::{DEError, Result};
use crate::objective::Differentiable;
use crate::termination::Termination;

/// How the gradient step is scaled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepNormalization {
    /// `x - alpha * grad`
    Raw,
    /// `x - alpha * grad / n`
    #[default]
    ByDimension,
}

/// Steepest descent optimizer
pub struct SteepestDescent<'a, O>
where
    O: Differentiable + ?Sized,
{
    func: &'a O,
    alpha: f64,
    normalization: StepNormalization,
    iterations: usize,
}

impl<'a, O> SteepestDescent<'a, O>
where
    O: Differentiable + ?Sized,
{
    /// Step size 0.01, normalized by dimension.
    pub fn new(func: &'a O) -> Self {
        Self { func, alpha: 0.01, normalization: StepNormalization::default(), iterations: 0 }
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn normalization(mut self, normalization: StepNormalization) -> Self {
        self.normalization = normalization;
        self
    }

    /// Total steps taken by this instance
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// One gradient step in place.
    pub fn step(&mut self, x: &mut Array1<f64>) -> Result<()> {
        let g = self.func.gradient(x)?;
        if g.len() != x.len() {
            return Err(DEError::DimensionMismatch { expected: x.len(), got: g.len() });
        }
        let scale = match self.normalization {
            StepNormalization::Raw => self.alpha,
            StepNormalization::ByDimension => self.alpha / x.len() as f64,
        };
        x.scaled_add(-scale, &g);
        self.iterations += 1;
        Ok(())
    }

    /// Iterate from `x0` until `termination` says stop.
    pub fn run(&mut self, termination: Termination, x0: &Array1<f64>) -> Result<Array1<f64>> {
        if x0.is_empty() {
            return Err(DEError::ZeroDimension);
        }
        if !(self.alpha.is_finite() && self.alpha > 0.0) {
            return Err(DEError::InvalidStepSize { alpha: self.alpha });
        }
        info!(
            "SD start: {} dimensions, alpha={}, {:?}, {:?}",
            x0.len(),
            self.alpha,
            self.normalization,
            termination
        );
        let mut x = x0.clone();
        let mut clock = termination.start();
        let mut steps = 0usize;
        while clock.should_continue() {
            self.step(&mut x)?;
            steps += 1;
            if steps % 100_000 == 0 {
                debug!("SD iter {:8}", steps);
            }
        }
        info!("SD finished after {} steps ({} total)", steps, self.iterations);
        Ok(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ObjectiveError;
    use crate::objective::Objective;

    struct Bowl;

    impl Objective for Bowl {
        fn evaluate(&self, x: &Array1<f64>) -> std::result::Result<f64, ObjectiveError> {
            Ok(x.mapv(|v| v * v).sum())
        }
    }

    impl Differentiable for Bowl {
        fn gradient(&self, x: &Array1<f64>) -> std::result::Result<Array1<f64>, ObjectiveError> {
            Ok(x.mapv(|v| 2.0 * v))
        }
    }

    struct WrongSize;

    impl Objective for WrongSize {
        fn evaluate(&self, _x: &Array1<f64>) -> std::result::Result<f64, ObjectiveError> {
            Ok(0.0)
        }
    }

    impl Differentiable for WrongSize {
        fn gradient(&self, x: &Array1<f64>) -> std::result::Result<Array1<f64>, ObjectiveError> {
            Ok(Array1::zeros(x.len() + 1))
        }
    }

    #[test]
    fn test_raw_and_normalized_steps() {
        let x0 = Array1::from(vec![1.0, -2.0]);

        let mut raw = SteepestDescent::new(&Bowl).alpha(0.1).normalization(StepNormalization::Raw);
        let xr = raw.run(Termination::FixedIterations(1), &x0).unwrap();
        assert!((xr[0] - 0.8).abs() < 1e-12);
        assert!((xr[1] + 1.6).abs() < 1e-12);

        let mut norm = SteepestDescent::new(&Bowl).alpha(0.1);
        let xn = norm.run(Termination::FixedIterations(1), &x0).unwrap();
        assert!((xn[0] - 0.9).abs() < 1e-12);
        assert!((xn[1] + 1.8).abs() < 1e-12);
        assert_eq!(norm.iterations(), 1);
    }

    #[test]
    fn test_converges_on_bowl() {
        let mut sd = SteepestDescent::new(&Bowl).alpha(0.1);
        let x = sd.run(Termination::FixedIterations(500), &Array1::from(vec![3.0, -4.0, 5.0])).unwrap();
        assert!(Bowl.evaluate(&x).unwrap() < 1e-12);
    }

    #[test]
    fn test_preconditions() {
        let mut sd = SteepestDescent::new(&Bowl);
        assert!(matches!(
            sd.run(Termination::FixedIterations(1), &Array1::zeros(0)),
            Err(DEError::ZeroDimension)
        ));
        let mut bad = SteepestDescent::new(&Bowl).alpha(-1.0);
        assert!(matches!(
            bad.run(Termination::FixedIterations(1), &Array1::zeros(2)),
            Err(DEError::InvalidStepSize { .. })
        ));
        let mut wrong = SteepestDescent::new(&WrongSize);
        assert!(matches!(
            wrong.run(Termination::FixedIterations(1), &Array1::zeros(2)),
            Err(DEError::DimensionMismatch { expected: 2, got: 3 })
        ));
    }
}
