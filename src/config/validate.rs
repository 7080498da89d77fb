use url::Url;

use crate::error::{AppError, AppResult, ConfigError};

use super::types::TestSpec;

/// Dispatch mode resolved from a validated spec. Exactly one mode is active
/// per test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchMode {
    /// Fixed number of attempts with a bounded number in flight.
    Count { requests: u64, concurrency: u64 },
    /// Unbounded issuance until the wall-clock deadline elapses.
    Duration { secs: u64 },
}

/// Checks a spec before dispatch starts and resolves its dispatch mode.
///
/// A zero-capacity concurrency bound in count mode would deadlock the
/// admission semaphore, so it is rejected here instead of hanging the run.
///
/// # Errors
///
/// Returns an error when the target URI does not parse as an absolute URL,
/// or when count mode is configured with `concurrency == 0`.
pub fn validate(spec: &TestSpec) -> AppResult<DispatchMode> {
    Url::parse(&spec.uri).map_err(|err| {
        AppError::config(ConfigError::InvalidUri {
            name: spec.name.clone(),
            uri: spec.uri.clone(),
            source: err,
        })
    })?;

    if spec.duration > 0 {
        return Ok(DispatchMode::Duration {
            secs: spec.duration,
        });
    }
    if spec.concurrency == 0 {
        return Err(AppError::config(ConfigError::ZeroConcurrency {
            name: spec.name.clone(),
        }));
    }
    Ok(DispatchMode::Count {
        requests: spec.requests,
        concurrency: spec.concurrency,
    })
}
