use super::{
    page::INDEX_HTML,
    types::{CheckRequest, DebugResponse, ErrorResponse, StatusResponse},
};
use crate::{Error, checker::{CheckRecord, Checker}};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub checker: Arc<Checker>,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn error_response(e: &Error) -> ApiError {
    let status = match e.root() {
        Error::EnvironmentUnavailable(_) | Error::ModelUnavailable { .. } => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        Error::InputIncomplete => StatusCode::UNPROCESSABLE_ENTITY,
        Error::Inference(_) | Error::Network(_) => StatusCode::BAD_GATEWAY,
        Error::CheckInProgress => StatusCode::CONFLICT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
            kind: e.kind().to_string(),
            remediation: e.remediation(),
            prompt: e.prompt().map(str::to_string),
        }),
    )
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        environment: state.checker.environment().await,
        analysing: state.checker.is_checking(),
    })
}

pub async fn refresh(State(state): State<AppState>) -> Json<StatusResponse> {
    info!("Refreshing environment status");
    Json(StatusResponse {
        environment: state.checker.refresh_environment().await,
        analysing: state.checker.is_checking(),
    })
}

pub async fn check(
    State(state): State<AppState>,
    Json(request): Json<CheckRequest>,
) -> Result<Json<CheckRecord>, ApiError> {
    info!(
        "Received check request ({} context chars, {} question chars)",
        request.context.len(),
        request.question.len()
    );

    match state.checker.check(&request.context, &request.question).await {
        Ok(record) => Ok(Json(record)),
        Err(e) => {
            warn!("Check rejected: {}", e);
            Err(error_response(&e))
        }
    }
}

pub async fn debug(State(state): State<AppState>) -> Response {
    let session = state.checker.session().await;

    if session.last.is_none() && session.last_error.is_none() {
        return StatusCode::NO_CONTENT.into_response();
    }

    Json(DebugResponse {
        last: session.last,
        last_error: session.last_error,
    })
    .into_response()
}
