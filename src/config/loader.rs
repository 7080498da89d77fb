use std::path::Path;

use crate::error::{AppError, AppResult, ConfigError};

use super::types::TestSpec;

/// Loads the suite description from a JSON file.
///
/// The file holds an array of test specs; see [`TestSpec`] for the fields.
///
/// # Errors
///
/// Returns an error when the suite file cannot be read or parsed, or when
/// it contains no tests.
pub fn load_suite(path: &Path) -> AppResult<Vec<TestSpec>> {
    let content = std::fs::read_to_string(path).map_err(|err| {
        AppError::config(ConfigError::ReadSuite {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    let specs: Vec<TestSpec> = serde_json::from_str(&content).map_err(|err| {
        AppError::config(ConfigError::ParseSuite {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    if specs.is_empty() {
        return Err(AppError::config(ConfigError::EmptySuite));
    }
    Ok(specs)
}
