use super::{EnvironmentProbe, types::TagsResponse};
use crate::{Error, Result, config::OllamaConfig};
use async_trait::async_trait;
use std::process::{Output, Stdio};
use tokio::process::Command;
use tracing::{debug, warn};

/// Probes the runtime through its CLI (`list`, `show`) and its tags endpoint.
pub struct OllamaProbe {
    command: String,
    client: reqwest::Client,
    tags_url: String,
}

impl OllamaProbe {
    pub fn new(config: &OllamaConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            command: config.command.clone(),
            client,
            tags_url: config.endpoint("/api/tags"),
        })
    }

    async fn run(&self, args: &[&str]) -> std::io::Result<Output> {
        debug!("Running {} {}", self.command, args.join(" "));

        Command::new(&self.command)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
    }
}

#[async_trait]
impl EnvironmentProbe for OllamaProbe {
    async fn check_installation(&self) -> Result<String> {
        let output = self.run(&["list"]).await.map_err(|e| {
            Error::environment(format!("failed to run '{} list': {}", self.command, e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!("'{} list' exited with {}: {}", self.command, output.status, stderr.trim());
            return Err(Error::environment(format!(
                "'{} list' exited with {}",
                self.command, output.status
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    async fn list_models(&self) -> Result<Vec<String>> {
        let response = self
            .client
            .get(&self.tags_url)
            .send()
            .await
            .map_err(|e| Error::probe(format!("Request to {} failed: {}", self.tags_url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::probe(format!(
                "{} returned {}",
                self.tags_url, status
            )));
        }

        let tags: TagsResponse = response
            .json()
            .await
            .map_err(|e| Error::probe(format!("Malformed model list: {}", e)))?;

        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }

    async fn model_exists(&self, model: &str) -> Result<bool> {
        let output = self.run(&["show", model]).await.map_err(|e| {
            Error::probe(format!("failed to run '{} show {}': {}", self.command, model, e))
        })?;

        Ok(output.status.success())
    }
}
