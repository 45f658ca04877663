//! Environment utilities and constants for polyfit

pub mod constants;
pub mod env_utils;

pub use env_utils::{EnvError, get_data_generated_dir, get_polyfit_dir, get_records_dir};
