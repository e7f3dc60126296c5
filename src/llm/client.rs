use super::types::*;
use crate::{Error, Result, config::OllamaConfig};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

#[async_trait]
pub trait InferenceClient: Send + Sync {
    async fn generate(&self, request: GenerateRequest) -> Result<InferenceResult>;
}

pub struct OllamaClient {
    client: reqwest::Client,
    generate_url: String,
}

impl OllamaClient {
    pub fn new(config: &OllamaConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            generate_url: config.endpoint("/api/generate"),
        })
    }

    pub fn generate_url(&self) -> &str {
        &self.generate_url
    }
}

#[async_trait]
impl InferenceClient for OllamaClient {
    async fn generate(&self, request: GenerateRequest) -> Result<InferenceResult> {
        debug!(
            "Sending generate request to {} for model {} ({} prompt chars)",
            self.generate_url,
            request.model,
            request.prompt.len()
        );

        let response = self
            .client
            .post(&self.generate_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::inference(format!("Request to {} failed: {}", self.generate_url, e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Inference endpoint returned {}: {}", status, body);
            return Err(Error::inference(format!(
                "Inference endpoint returned {}: {}",
                status, body
            )));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| Error::inference(format!("Malformed payload: {}", e)))?;

        InferenceResult::from_payload(payload)
    }
}

/// Sends one non-streamed request and classifies the reply. Never retries.
pub async fn query(
    client: &dyn InferenceClient,
    prompt: &str,
    model: &str,
) -> Result<(Answer, InferenceResult)> {
    let result = client.generate(GenerateRequest::new(model, prompt)).await?;
    let answer = Answer::classify(&result.response);

    debug!("Model replied {:?}, classified as {}", result.response, answer);

    Ok((answer, result))
}
