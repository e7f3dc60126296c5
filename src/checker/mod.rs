mod session;

pub use session::{CheckRecord, FailedCheck, Session, explain};

use crate::{
    Error, Result,
    config::OllamaConfig,
    llm::{InferenceClient, OllamaClient, query},
    probe::{EnvironmentProbe, EnvironmentStatus, OllamaProbe},
    prompt::build_prompt,
};
use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, error, info, warn};

/// Runs yes/no checks against the configured model and owns the result slot.
///
/// Checks are serialized: a check started while another is outstanding fails
/// with [`Error::CheckInProgress`].
pub struct Checker {
    client: Box<dyn InferenceClient>,
    probe: Box<dyn EnvironmentProbe>,
    model: String,
    session: RwLock<Session>,
    in_flight: Mutex<()>,
    checking: AtomicBool,
}

/// Clears the checking flag when a check ends, however it ends.
struct CheckingFlag<'a>(&'a AtomicBool);

impl<'a> CheckingFlag<'a> {
    fn raise(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for CheckingFlag<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl Checker {
    pub fn new(
        client: Box<dyn InferenceClient>,
        probe: Box<dyn EnvironmentProbe>,
        model: impl Into<String>,
    ) -> Self {
        let model = model.into();
        Self {
            client,
            probe,
            session: RwLock::new(Session::new(EnvironmentStatus::unknown(model.clone()))),
            model,
            in_flight: Mutex::new(()),
            checking: AtomicBool::new(false),
        }
    }

    pub fn from_config(config: &OllamaConfig) -> Result<Self> {
        Ok(Self::new(
            Box::new(OllamaClient::new(config)?),
            Box::new(OllamaProbe::new(config)?),
            config.model.clone(),
        ))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Reads the flag only, so status polling never contends with `check`.
    pub fn is_checking(&self) -> bool {
        self.checking.load(Ordering::SeqCst)
    }

    pub async fn session(&self) -> Session {
        self.session.read().await.clone()
    }

    pub async fn environment(&self) -> EnvironmentStatus {
        self.session.read().await.environment.clone()
    }

    /// Re-probes installation, model list and model presence.
    pub async fn refresh_environment(&self) -> EnvironmentStatus {
        let installed = match self.probe.check_installation().await {
            Ok(_) => true,
            Err(e) => {
                warn!("Installation probe failed: {}", e);
                false
            }
        };

        let (models, probe_error) = if installed {
            match self.probe.list_models().await {
                Ok(models) => (models, None),
                Err(e) => {
                    warn!("Model listing failed: {}", e);
                    (Vec::new(), Some(e.to_string()))
                }
            }
        } else {
            (Vec::new(), None)
        };

        let mut status = EnvironmentStatus {
            installed,
            models,
            active_model: self.model.clone(),
            model_exists: false,
            probe_error,
            refreshed_at: Utc::now(),
        };
        status.model_exists = installed && (status.model_listed() || self.probe_model().await);

        info!(
            "Environment refreshed: installed={}, {} models, {} exists={}",
            status.installed,
            status.models.len(),
            status.active_model,
            status.model_exists
        );

        self.session.write().await.environment = status.clone();
        status
    }

    async fn probe_model(&self) -> bool {
        match self.probe.model_exists(&self.model).await {
            Ok(exists) => exists,
            Err(e) => {
                warn!("Model probe for {} failed: {}", self.model, e);
                false
            }
        }
    }

    /// Gates on environment, model and input, then asks the model.
    pub async fn check(&self, context: &str, question: &str) -> Result<CheckRecord> {
        let _guard = self.in_flight.try_lock().map_err(|_| Error::CheckInProgress)?;
        let _flag = CheckingFlag::raise(&self.checking);

        let environment = self.environment().await;
        if !environment.installed {
            return Err(Error::environment(
                "the list command failed on the last environment refresh",
            ));
        }

        if !environment.model_listed() && !self.probe_model().await {
            return Err(Error::ModelUnavailable {
                model: self.model.clone(),
            });
        }

        if context.trim().is_empty() || question.trim().is_empty() {
            return Err(Error::InputIncomplete);
        }

        let prompt = build_prompt(context, question);
        debug!("Built prompt of {} chars", prompt.len());

        match query(self.client.as_ref(), &prompt, &self.model).await {
            Ok((answer, result)) => {
                info!("Check completed with answer {}", answer);
                let record = CheckRecord::new(context, question, prompt, answer, result);
                self.session.write().await.record_success(record.clone());
                Ok(record)
            }
            Err(e) => {
                error!("Check failed: {}", e);
                self.session
                    .write()
                    .await
                    .record_failure(FailedCheck::new(prompt.clone(), e.to_string()));
                Err(Error::QueryFailed {
                    prompt,
                    source: Box::new(e),
                })
            }
        }
    }
}
