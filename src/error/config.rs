use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read suite '{path}': {source}")]
    ReadSuite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse suite '{path}': {source}")]
    ParseSuite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Suite file contains no tests.")]
    EmptySuite,
    #[error("No suite file given and 'volley.json' was not found.")]
    SuiteFileMissing,
    #[error("Test '{name}' has invalid URI '{uri}': {source}")]
    InvalidUri {
        name: String,
        uri: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Test '{name}' requires concurrency >= 1 in count mode.")]
    ZeroConcurrency { name: String },
}
