use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of the local inference runtime as last probed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentStatus {
    pub installed: bool,
    pub models: Vec<String>,
    pub active_model: String,
    pub model_exists: bool,
    /// Why model listing failed, as opposed to succeeding with no models.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probe_error: Option<String>,
    pub refreshed_at: DateTime<Utc>,
}

impl EnvironmentStatus {
    /// Status before any probe has run.
    pub fn unknown(active_model: impl Into<String>) -> Self {
        Self {
            installed: false,
            models: Vec::new(),
            active_model: active_model.into(),
            model_exists: false,
            probe_error: None,
            refreshed_at: Utc::now(),
        }
    }

    pub fn model_listed(&self) -> bool {
        self.models.iter().any(|m| m == &self.active_model)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct TagsResponse {
    #[serde(default)]
    pub models: Vec<TagEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TagEntry {
    pub name: String,
}
