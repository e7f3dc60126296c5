mod command;
mod types;

pub use command::OllamaProbe;
pub use types::EnvironmentStatus;

use crate::Result;
use async_trait::async_trait;

/// Availability information about the local inference runtime.
#[async_trait]
pub trait EnvironmentProbe: Send + Sync {
    /// Output of the runtime's list command, or `EnvironmentUnavailable`.
    async fn check_installation(&self) -> Result<String>;

    async fn list_models(&self) -> Result<Vec<String>>;

    /// `Ok(false)` when the runtime answered but does not know the model.
    async fn model_exists(&self, model: &str) -> Result<bool>;
}
