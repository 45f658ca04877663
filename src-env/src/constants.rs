/// Environment variable naming the project root
pub const POLYFIT_DIR: &str = "POLYFIT_DIR";

/// Directory (relative to the project root) for generated artifacts
pub const DATA_GENERATED: &str = "data_generated";

/// Subdirectory of [`DATA_GENERATED`] holding optimization records
pub const RECORDS: &str = "records";
