use crate::{
    llm::{Answer, InferenceResult},
    probe::EnvironmentStatus,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// One completed check, as shown in the debug panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckRecord {
    pub id: Uuid,
    pub context: String,
    pub question: String,
    pub prompt: String,
    pub answer: Answer,
    pub result: InferenceResult,
    pub explanation: String,
    pub completed_at: DateTime<Utc>,
}

impl CheckRecord {
    pub fn new(
        context: &str,
        question: &str,
        prompt: String,
        answer: Answer,
        result: InferenceResult,
    ) -> Self {
        let explanation = explain(&result.response, answer);
        Self {
            id: Uuid::new_v4(),
            context: context.to_string(),
            question: question.to_string(),
            prompt,
            answer,
            result,
            explanation,
            completed_at: Utc::now(),
        }
    }
}

pub fn explain(raw_response: &str, answer: Answer) -> String {
    format!(
        "The model's response is parsed to determine if it contains 'yes' or 'no'.\n\
         Raw response: {raw_response}\n\
         Interpreted answer: {answer}"
    )
}

/// A check whose query was sent but failed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailedCheck {
    pub prompt: String,
    pub error: String,
    pub failed_at: DateTime<Utc>,
}

impl FailedCheck {
    pub fn new(prompt: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            error: error.into(),
            failed_at: Utc::now(),
        }
    }
}

/// The single result slot plus the cached environment status.
#[derive(Debug, Clone)]
pub struct Session {
    pub last: Option<CheckRecord>,
    pub last_error: Option<FailedCheck>,
    pub environment: EnvironmentStatus,
}

impl Session {
    pub fn new(environment: EnvironmentStatus) -> Self {
        Self {
            last: None,
            last_error: None,
            environment,
        }
    }

    pub fn record_success(&mut self, record: CheckRecord) {
        self.last = Some(record);
        self.last_error = None;
    }

    /// Leaves `last` untouched; the page shows the error instead of it.
    pub fn record_failure(&mut self, failure: FailedCheck) {
        self.last_error = Some(failure);
    }
}
