//! Environment variable utilities for polyfit
//!
//! The `POLYFIT_DIR` variable points to the directory under which generated
//! artifacts (optimization records) are written.

use crate::constants::{DATA_GENERATED, POLYFIT_DIR, RECORDS};
use std::env;
use std::path::{Path, PathBuf};

/// Error type for environment variable issues
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error(
        "POLYFIT_DIR environment variable is not set. Please set it to the directory where records should be written (e.g., export POLYFIT_DIR=$PWD)"
    )]
    PolyfitDirNotSet,

    #[error("POLYFIT_DIR points to a non-existent directory: {0}")]
    PolyfitDirNotFound(PathBuf),

    #[error("Failed to create data_generated directory: {0}")]
    DataGeneratedCreationFailed(std::io::Error),
}

/// Get the POLYFIT_DIR environment variable and validate it exists
///
/// # Errors
///
/// Returns an error if POLYFIT_DIR is not set or points to a missing directory.
pub fn get_polyfit_dir() -> Result<PathBuf, EnvError> {
    let dir = env::var(POLYFIT_DIR).map_err(|_| EnvError::PolyfitDirNotSet)?;
    let path = PathBuf::from(dir);
    if !path.exists() {
        return Err(EnvError::PolyfitDirNotFound(path));
    }
    Ok(path)
}

/// Get the path to the data_generated directory, creating it if necessary
pub fn get_data_generated_dir() -> Result<PathBuf, EnvError> {
    data_generated_under(&get_polyfit_dir()?)
}

/// Get the path to the records subdirectory within data_generated, creating
/// both if needed
pub fn get_records_dir() -> Result<PathBuf, EnvError> {
    records_under(&get_polyfit_dir()?)
}

fn data_generated_under(root: &Path) -> Result<PathBuf, EnvError> {
    let data_generated = root.join(DATA_GENERATED);
    if !data_generated.exists() {
        std::fs::create_dir_all(&data_generated).map_err(EnvError::DataGeneratedCreationFailed)?;
    }
    Ok(data_generated)
}

fn records_under(root: &Path) -> Result<PathBuf, EnvError> {
    let records_dir = data_generated_under(root)?.join(RECORDS);
    if !records_dir.exists() {
        std::fs::create_dir_all(&records_dir).map_err(EnvError::DataGeneratedCreationFailed)?;
    }
    Ok(records_dir)
}
