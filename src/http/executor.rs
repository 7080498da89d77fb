use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::{Client, Request};
use tokio::time::Instant;
use tracing::{error, warn};

use crate::config::{HttpMethod, TestSpec};
use crate::error::HttpError;

/// Immutable request recipe shared by every attempt of one test.
#[derive(Debug, Clone)]
pub struct AttemptPlan {
    pub method: HttpMethod,
    pub uri: String,
    pub headers: BTreeMap<String, String>,
    pub body: Option<serde_json::Value>,
}

impl AttemptPlan {
    #[must_use]
    pub fn from_spec(spec: &TestSpec) -> Self {
        Self {
            method: spec.method,
            uri: spec.uri.clone(),
            headers: spec.headers.clone(),
            body: spec.body.clone(),
        }
    }
}

/// Issues one attempt and measures its wall-clock latency.
///
/// Returns `None` when the attempt produced no sample: the body could not be
/// serialized, the request could not be built, or the transport failed before
/// a response arrived. A response with status >= 400 still completed, so it
/// yields a sample; the status is logged as unsuccessful.
pub async fn execute_attempt(client: &Client, plan: &AttemptPlan) -> Option<Duration> {
    let request = match build_request(client, plan) {
        Ok(request) => request,
        Err(err) => {
            error!("Failed to prepare request for {}: {}", plan.uri, err);
            return None;
        }
    };

    let start = Instant::now();
    match client.execute(request).await {
        Ok(response) => {
            let elapsed = start.elapsed();
            let status = response.status();
            if status.as_u16() >= 400 {
                warn!("Unsuccessful HTTP response from {}: {}", plan.uri, status);
            }
            Some(elapsed)
        }
        Err(err) => {
            error!("Request to {} failed: {}", plan.uri, err);
            None
        }
    }
}

fn build_request(client: &Client, plan: &AttemptPlan) -> Result<Request, HttpError> {
    let mut builder = client.request(plan.method.into(), &plan.uri);

    if plan.method.sends_body() {
        let body = plan
            .body
            .as_ref()
            .map_or_else(|| Ok(Vec::new()), |value| serde_json::to_vec(value))
            .map_err(|err| HttpError::SerializeBody { source: err })?;
        builder = builder.body(body);
    }

    // Configured headers overwrite any client default of the same name.
    for (key, value) in &plan.headers {
        builder = builder.header(key.as_str(), value.as_str());
    }

    builder
        .build()
        .map_err(|err| HttpError::BuildRequestFailed { source: err })
}
