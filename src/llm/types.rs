use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Body of `POST /api/generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
}

impl GenerateRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream: false,
        }
    }
}

/// Payload returned by the inference endpoint.
///
/// `raw` is kept exactly as received so timing and token metadata can be shown
/// in the debug panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InferenceResult {
    pub response: String,
    pub raw: Value,
}

impl InferenceResult {
    pub fn from_payload(raw: Value) -> crate::Result<Self> {
        let response = raw
            .get("response")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                crate::Error::inference("Malformed payload: missing string field 'response'")
            })?
            .to_string();

        Ok(Self { response, raw })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Answer {
    Yes,
    No,
    Unclear,
}

impl Answer {
    /// Substring classification of model output. "yes" wins over "no" when
    /// both appear.
    pub fn classify(text: &str) -> Self {
        let text = text.trim().to_lowercase();

        if text.contains("yes") {
            Self::Yes
        } else if text.contains("no") {
            Self::No
        } else {
            Self::Unclear
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "YES",
            Self::No => "NO",
            Self::Unclear => "UNCLEAR",
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
