use reqwest::Client;

use crate::error::{AppError, AppResult, HttpError};

/// Builds the HTTP client shared by every attempt of one test.
///
/// Certificate verification is disabled so suites can target self-signed
/// staging endpoints; this tool is not a security boundary. Redirect and
/// timeout behavior stays at the client defaults.
///
/// # Errors
///
/// Returns an error when the underlying TLS backend cannot be initialized.
pub fn build_client() -> AppResult<Client> {
    Client::builder()
        .danger_accept_invalid_certs(true)
        .build()
        .map_err(|err| AppError::http(HttpError::BuildClientFailed { source: err }))
}
