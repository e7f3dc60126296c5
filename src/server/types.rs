use crate::{
    checker::{CheckRecord, FailedCheck},
    probe::EnvironmentStatus,
};
use serde::{Deserialize, Serialize};

/// Missing fields deserialize as empty and are reported as incomplete input.
#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    #[serde(flatten)]
    pub environment: EnvironmentStatus,
    pub analysing: bool,
}

#[derive(Debug, Serialize)]
pub struct DebugResponse {
    pub last: Option<CheckRecord>,
    pub last_error: Option<FailedCheck>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
    /// Outbound prompt of a query that was sent and failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}
