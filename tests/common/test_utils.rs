use super::mocks::{MockInferenceClient, MockProbe};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;
use yesno_check::{Result, checker::Checker, config::OllamaConfig};

pub const TEST_MODEL: &str = "bespoke-minicheck";

/// Checker backed by mocks, with the environment cache already primed.
pub async fn create_test_checker(client: &MockInferenceClient, probe: &MockProbe) -> Arc<Checker> {
    let checker = Checker::new(Box::new(client.clone()), Box::new(probe.clone()), TEST_MODEL);
    checker.refresh_environment().await;
    Arc::new(checker)
}

/// Checker whose model is listed and which answers with `text`.
pub async fn create_ready_checker(text: &str) -> (Arc<Checker>, MockInferenceClient) {
    let client = MockInferenceClient::new().with_response(text);
    let probe = MockProbe::installed(&[TEST_MODEL, "llama3:latest"]);
    let checker = create_test_checker(&client, &probe).await;
    (checker, client)
}

pub fn ollama_config(base_url: &str) -> OllamaConfig {
    OllamaConfig {
        base_url: base_url.to_string(),
        model: TEST_MODEL.to_string(),
        command: "ollama".to_string(),
        timeout_secs: 5,
    }
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 9000
  logs:
    level: "debug"

ollama:
  base_url: "http://127.0.0.1:11434"
  model: "llama3"
  command: "/usr/local/bin/ollama"
  timeout_secs: 30
"#;

pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"
"#;
