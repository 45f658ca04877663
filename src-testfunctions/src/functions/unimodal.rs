//! Unimodal test functions
//!
//! Single global minimum, no local traps. Used to check that an optimizer
//! actually descends and converges where it should.

use ndarray::Array1;

/// Sphere function - unimodal, convex
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
pub fn sphere(x: &Array1<f64>) -> f64 {
    x.iter().map(|&v| v * v).sum()
}

/// Simple quadratic function, f(x) = sum(x[i]^2)
/// Same as sphere, kept separate for recorder and smoke tests
pub fn quadratic(x: &Array1<f64>) -> f64 {
    x.iter().map(|&xi| xi * xi).sum()
}

/// Quadratic bowl centred on (5, 5, ..., 5)
/// Global minimum: f(x) = 0 at x = (5, ..., 5)
pub fn shifted_quadratic(x: &Array1<f64>) -> f64 {
    x.iter().map(|&xi| (xi - 5.0).powi(2)).sum()
}
