//! Polynomial approximation of one period of a sine wave
//!
//! The target is `y = sin(2 pi x)` sampled at `point_count` evenly spaced
//! points on `[0, 1]`. A coefficient vector `w` describes the polynomial
//! `p(x) = w[0] + w[1] x + ... + w[d] x^d`, and the objective is the sum of
//! squared residuals between `y` and `p` at the sample points.

use ndarray::Array1;
use std::f64::consts::PI;

/// Least-squares fit of a polynomial to a sampled sine curve
#[derive(Debug, Clone)]
pub struct PolynomialApproximate {
    x: Array1<f64>,
    y: Array1<f64>,
}

impl PolynomialApproximate {
    /// Sample `sin(2 pi x)` at `point_count` points `x_k = k / (point_count - 1)`.
    ///
    /// Returns `None` when fewer than two points are requested, since the
    /// sample spacing is undefined.
    pub fn new(point_count: usize) -> Option<Self> {
        if point_count < 2 {
            return None;
        }
        let step = 1.0 / (point_count - 1) as f64;
        let x = Array1::from_shape_fn(point_count, |k| k as f64 * step);
        let y = target(&x);
        Some(Self { x, y })
    }

    /// Sample abscissae
    pub fn x(&self) -> &Array1<f64> {
        &self.x
    }

    /// Sampled target values
    pub fn y(&self) -> &Array1<f64> {
        &self.y
    }

    pub fn point_count(&self) -> usize {
        self.x.len()
    }

    /// Evaluate the polynomial with coefficients `w` at every sample point.
    pub fn eval(&self, w: &Array1<f64>) -> Array1<f64> {
        // Horner per sample point
        self.x.mapv(|xk| w.iter().rev().fold(0.0, |acc, &wi| acc * xk + wi))
    }

    /// Sum of squared residuals against the sampled target.
    pub fn value(&self, w: &Array1<f64>) -> f64 {
        let d = &self.y - &self.eval(w);
        d.mapv(|v| v * v).sum()
    }

    /// Gradient of [`Self::value`] with respect to the coefficients:
    /// `g_i = -2 * sum_k (y_k - p(x_k)) * x_k^i`
    pub fn gradient(&self, w: &Array1<f64>) -> Array1<f64> {
        let d = &self.y - &self.eval(w);
        let mut g = Array1::<f64>::zeros(w.len());
        // running power x_k^i, advanced once per coefficient
        let mut powers = Array1::<f64>::ones(self.x.len());
        for i in 0..w.len() {
            g[i] = -2.0 * (&d * &powers).sum();
            powers *= &self.x;
        }
        g
    }

    /// Residual against a freshly resampled target.
    ///
    /// Identical to [`Self::value`] while the stored target is the clean sine;
    /// this is the metric reported at the end of a fit.
    pub fn error(&self, w: &Array1<f64>) -> f64 {
        let d = target(&self.x) - self.eval(w);
        d.mapv(|v| v * v).sum()
    }
}

fn target(x: &Array1<f64>) -> Array1<f64> {
    x.mapv(|xk| (2.0 * PI * xk).sin())
}
