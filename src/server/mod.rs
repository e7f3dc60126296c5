pub mod handlers;
mod page;
pub mod types;

use crate::{Result, checker::Checker, config::Config};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn router(checker: Arc<Checker>) -> Router {
    let app_state = handlers::AppState { checker };

    Router::new()
        .route("/", get(handlers::index))
        .route("/api/status", get(handlers::status))
        .route("/api/status/refresh", post(handlers::refresh))
        .route("/api/check", post(handlers::check))
        .route("/api/debug", get(handlers::debug))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state)
}

pub async fn run(config: Config) -> Result<()> {
    let checker = Arc::new(Checker::from_config(&config.ollama)?);

    // Prime the environment cache so the first check is gated correctly
    checker.refresh_environment().await;

    let app = router(checker);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
