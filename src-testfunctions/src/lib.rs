//! Objective functions for the polyfit optimizers
//!
//! - **Unimodal**: sphere, quadratic and a shifted bowl, used as convergence checks
//! - **Polynomial**: least-squares fit of a polynomial to `sin(2 pi x)` on `[0, 1]`
//!
//! # Example
//!
//! ```rust
//! use ndarray::Array1;
//! use polyfit_testfunctions::*;
//!
//! let x = Array1::from_vec(vec![0.0, 0.0]);
//! assert_eq!(sphere(&x), 0.0);
//!
//! let pa = PolynomialApproximate::new(20).unwrap();
//! let w = Array1::from_vec(vec![0.0, 6.0, -18.0, 12.0]);
//! assert!(pa.value(&w) < pa.value(&Array1::zeros(4)));
//! ```

pub mod functions;
pub use functions::*;
