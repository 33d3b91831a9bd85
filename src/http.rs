use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::pool::NamePool;
use crate::quiz::{self, InsufficientData, QuizPayload};

/// Shared handler state. The pool is immutable after startup, so cloning
/// the state per request is just an `Arc` bump.
#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<NamePool>,
    pub static_dir: PathBuf,
}

pub fn router(state: AppState) -> Router {
    let index = ServeFile::new(state.static_dir.join("index.html"));
    let assets = ServeDir::new(&state.static_dir);

    Router::new()
        .route_service("/", index)
        .route("/api/quiz", get(get_quiz))
        .nest_service("/static", assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn get_quiz(State(state): State<AppState>) -> Result<Json<QuizPayload>, ApiError> {
    let payload = quiz::generate(state.pool.names())?;
    Ok(Json(payload))
}

/// Handler errors, rendered as a JSON body with a matching status code.
struct ApiError {
    status: StatusCode,
    message: String,
}

impl From<InsufficientData> for ApiError {
    fn from(err: InsufficientData) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("request failed: {}", self.message);
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
