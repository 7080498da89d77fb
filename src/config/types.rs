use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One entry of the suite file: a single load test against one endpoint.
///
/// `duration > 0` selects duration mode and overrides the `requests` and
/// `concurrency` semantics; otherwise the test runs in count mode.
#[derive(Debug, Clone, Deserialize)]
pub struct TestSpec {
    /// Identifier used for reporting only; need not be unique.
    pub name: String,
    /// Absolute URL of the target endpoint.
    pub uri: String,
    #[serde(default)]
    pub method: HttpMethod,
    /// Serialized to JSON as the request body for POST/PUT; ignored otherwise.
    #[serde(default)]
    pub body: Option<serde_json::Value>,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    /// Target number of attempts in count mode.
    #[serde(default)]
    pub requests: u64,
    /// Wall-clock run length in seconds; > 0 selects duration mode.
    #[serde(default)]
    pub duration: u64,
    /// Maximum attempts in flight at once, honored in count mode.
    #[serde(default = "default_concurrency")]
    pub concurrency: u64,
}

const fn default_concurrency() -> u64 {
    1
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    #[serde(alias = "get")]
    Get,
    #[serde(alias = "post")]
    Post,
    #[serde(alias = "patch")]
    Patch,
    #[serde(alias = "put")]
    Put,
    #[serde(alias = "delete")]
    Delete,
}

impl HttpMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Whether the configured body is serialized and sent for this method.
    #[must_use]
    pub const fn sends_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Patch => Self::PATCH,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}
