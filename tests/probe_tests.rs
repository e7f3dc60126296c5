use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};
use yesno_check::{
    Error,
    probe::{EnvironmentProbe, OllamaProbe},
};

mod common;
use common::test_utils::ollama_config;

fn probe_with_command(command: &str) -> OllamaProbe {
    let mut config = ollama_config("http://127.0.0.1:9");
    config.command = command.to_string();
    OllamaProbe::new(&config).unwrap()
}

#[tokio::test]
async fn test_missing_binary_is_environment_unavailable() {
    let probe = probe_with_command("definitely-not-an-installed-ollama");

    let err = probe.check_installation().await.unwrap_err();
    assert!(matches!(err, Error::EnvironmentUnavailable(_)));
}

#[tokio::test]
async fn test_failing_list_command_is_environment_unavailable() {
    let probe = probe_with_command("false");

    let err = probe.check_installation().await.unwrap_err();
    assert!(err.to_string().contains("'false list' exited"));
}

#[tokio::test]
async fn test_successful_list_command_is_installed() {
    let probe = probe_with_command("true");
    assert_eq!(probe.check_installation().await.unwrap(), "");
}

#[tokio::test]
async fn test_model_exists_follows_exit_status() {
    assert!(probe_with_command("true").model_exists("bespoke-minicheck").await.unwrap());
    assert!(!probe_with_command("false").model_exists("bespoke-minicheck").await.unwrap());
}

#[tokio::test]
async fn test_model_exists_errors_when_command_cannot_run() {
    let probe = probe_with_command("definitely-not-an-installed-ollama");

    let err = probe.model_exists("bespoke-minicheck").await.unwrap_err();
    assert!(matches!(err, Error::Probe(_)));
}

#[tokio::test]
async fn test_list_models_reads_tags() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "models": [
                {"name": "bespoke-minicheck:latest", "size": 4_661_224_676u64},
                {"name": "llama3:8b", "size": 4_661_224_676u64}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let probe = OllamaProbe::new(&ollama_config(&server.uri())).unwrap();

    assert_eq!(
        probe.list_models().await.unwrap(),
        vec!["bespoke-minicheck:latest", "llama3:8b"]
    );
}

#[tokio::test]
async fn test_list_models_distinguishes_empty_from_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"models": []})))
        .mount(&server)
        .await;

    let probe = OllamaProbe::new(&ollama_config(&server.uri())).unwrap();
    assert!(probe.list_models().await.unwrap().is_empty());

    let down = OllamaProbe::new(&ollama_config("http://127.0.0.1:9")).unwrap();
    assert!(matches!(down.list_models().await.unwrap_err(), Error::Probe(_)));
}
