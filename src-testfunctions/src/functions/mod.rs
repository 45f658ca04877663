//! Objective functions organized by category
//!
//! - `unimodal`: single-optimum functions used to check optimizer convergence
//! - `polynomial`: least-squares polynomial fit of a sampled sine curve

pub mod polynomial;
pub mod unimodal;

pub use polynomial::*;
pub use unimodal::*;
