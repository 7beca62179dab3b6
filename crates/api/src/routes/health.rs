use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Index payload.
#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` or `error`.
    pub status: &'static str,
    /// `connected` or `disconnected`.
    pub database: &'static str,
    /// Failure detail, only present when the database is unreachable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// GET / -- static welcome message.
async fn index() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the blog API! Articles live under /api/v1/articles/.",
    })
}

/// GET /healthcheck -- runs a trivial query against the database.
///
/// Always responds 200; a failure is reported in the body.
async fn healthcheck(State(state): State<AppState>) -> Json<HealthResponse> {
    match blog_db::health_check(&state.pool).await {
        Ok(()) => Json(HealthResponse {
            status: "ok",
            database: "connected",
            error: None,
        }),
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            Json(HealthResponse {
                status: "error",
                database: "disconnected",
                error: Some(e.to_string()),
            })
        }
    }
}

/// Mount root-level routes (NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/healthcheck", get(healthcheck))
}
