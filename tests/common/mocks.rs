use async_trait::async_trait;
use serde_json::json;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use std::time::Duration;
use yesno_check::{
    Error, Result,
    llm::{GenerateRequest, InferenceClient, InferenceResult},
    probe::EnvironmentProbe,
};

/// Mock inference client for testing
#[derive(Debug, Clone)]
pub struct MockInferenceClient {
    pub responses: Arc<Mutex<Vec<InferenceResult>>>,
    pub requests: Arc<Mutex<Vec<GenerateRequest>>>,
    pub error: Option<String>,
    pub delay: Option<Duration>,
}

impl MockInferenceClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
            delay: None,
        }
    }

    pub fn with_response(self, text: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(create_mock_result(text));
        self
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn get_requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl InferenceClient for MockInferenceClient {
    async fn generate(&self, request: GenerateRequest) -> Result<InferenceResult> {
        self.requests.lock().unwrap().push(request);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(ref error) = self.error {
            return Err(Error::inference(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::inference("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

impl Default for MockInferenceClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Mock environment probe for testing
#[derive(Debug, Clone)]
pub struct MockProbe {
    pub installed: bool,
    pub models: Vec<String>,
    pub list_error: Option<String>,
    pub show_succeeds: bool,
    pub show_calls: Arc<AtomicUsize>,
}

impl MockProbe {
    /// Runtime installed with the given models listed.
    pub fn installed(models: &[&str]) -> Self {
        Self {
            installed: true,
            models: models.iter().map(|m| m.to_string()).collect(),
            list_error: None,
            show_succeeds: false,
            show_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn not_installed() -> Self {
        Self {
            installed: false,
            ..Self::installed(&[])
        }
    }

    pub fn with_list_error(mut self, error: &str) -> Self {
        self.list_error = Some(error.to_string());
        self
    }

    pub fn with_show_success(mut self) -> Self {
        self.show_succeeds = true;
        self
    }

    pub fn show_call_count(&self) -> usize {
        self.show_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EnvironmentProbe for MockProbe {
    async fn check_installation(&self) -> Result<String> {
        if self.installed {
            Ok(self.models.join("\n"))
        } else {
            Err(Error::environment("mock runtime missing"))
        }
    }

    async fn list_models(&self) -> Result<Vec<String>> {
        if let Some(ref error) = self.list_error {
            return Err(Error::probe(error.clone()));
        }
        Ok(self.models.clone())
    }

    async fn model_exists(&self, _model: &str) -> Result<bool> {
        self.show_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.installed && self.show_succeeds)
    }
}

pub fn create_mock_result(text: &str) -> InferenceResult {
    InferenceResult {
        response: text.to_string(),
        raw: json!({
            "model": "bespoke-minicheck",
            "created_at": "2024-09-18T12:00:00Z",
            "response": text,
            "done": true,
            "total_duration": 1_234_567,
            "eval_count": 2
        }),
    }
}
