//! Route handlers.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::{AppError, EMPTY_CONFIG, INVALID_JSON};
use super::state::AppState;
use crate::lint::{is_fatal, Issue};

/// `POST /lint` request body.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LintRequest {
    pub config: String,
    pub strict: bool,
    pub fix_suggestions: bool,
}

/// `POST /lint` response body.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintResponse {
    pub issues: Vec<Issue>,
    pub strict: bool,
    pub fatal: bool,
    pub generated_at: DateTime<Utc>,
}

/// `GET /health` response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime: String,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: format!("{}s", state.uptime().as_secs()),
    })
}

/// Lint the submitted configuration text.
///
/// The body is decoded regardless of `Content-Type`.
pub async fn lint(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<LintResponse>, AppError> {
    let request: LintRequest = serde_json::from_slice(&body).map_err(|err| {
        tracing::warn!(error = %err, "bad request body");
        AppError::BadRequest(INVALID_JSON)
    })?;

    if request.config.trim().is_empty() {
        return Err(AppError::BadRequest(EMPTY_CONFIG));
    }

    let issues = state.linter.lint_str(&request.config);
    let fatal = is_fatal(&issues, request.strict);
    tracing::debug!(
        issues = issues.len(),
        strict = request.strict,
        fix_suggestions = request.fix_suggestions,
        fatal,
        "linted request"
    );

    Ok(Json(LintResponse {
        issues,
        strict: request.strict,
        fatal,
        generated_at: Utc::now(),
    }))
}
