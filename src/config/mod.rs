mod types;

pub use types::*;

use crate::Result;
use std::{env, path::Path};
use tracing::{debug, warn};

/// `$CONFIG_PATH`, or `config.yaml` in the working directory.
pub fn config_path() -> String {
    env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string())
}

pub async fn load() -> Result<Config> {
    let mut config = load_from(config_path()).await?;

    if let Ok(model) = env::var("OLLAMA_MODEL") {
        debug!("Model overridden by OLLAMA_MODEL: {}", model);
        config.ollama.model = model;
    }

    Ok(config)
}

/// Reads a YAML config file; a missing file yields the defaults.
pub async fn load_from(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();

    if !tokio::fs::try_exists(path).await? {
        warn!("Config file {} not found, using defaults", path.display());
        return Ok(Config::default());
    }

    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await?;
    parse(&config_str)
}

pub fn parse(config_str: &str) -> Result<Config> {
    let config: Config = serde_yaml::from_str(config_str)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<()> {
    if config.ollama.model.trim().is_empty() {
        return Err(crate::Error::config("ollama.model must not be empty"));
    }
    if config.ollama.timeout_secs == 0 {
        return Err(crate::Error::config("ollama.timeout_secs must be positive"));
    }
    Ok(())
}
