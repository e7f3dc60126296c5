use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};
use yesno_check::{config, server};

/// `RUST_LOG` wins over the configured level; a bad configured level is fatal.
fn init_tracing(configured_level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let level: LevelFilter = configured_level.parse().map_err(|_| {
                anyhow::anyhow!(
                    "Invalid log level in config: '{}'. Valid levels: error, warn, info, debug, trace",
                    configured_level
                )
            })?;
            EnvFilter::default().add_directive(level.into())
        }
    };

    tracing_subscriber::fmt().with_env_filter(filter).json().init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = config::config_path();

    // Logging depends on the config, so load errors go to stderr
    let config = config::load()
        .await
        .with_context(|| format!("Failed to load configuration from {}", config_path))?;

    init_tracing(&config.server.logs.level)?;

    info!(
        config_path = %config_path,
        model = %config.ollama.model,
        base_url = %config.ollama.base_url,
        command = %config.ollama.command,
        timeout_secs = config.ollama.timeout_secs,
        "Configuration resolved"
    );

    server::run(config).await?;

    Ok(())
}
