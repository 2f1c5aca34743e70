//! HTTP request handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde_json::Value;
use tracing::{debug, error};

use crate::maze::MazeError;
use crate::protocol::{ErrorResponse, HealthResponse, MazeResponse};

use super::state::SharedState;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Error returned by a handler, rendered as a JSON body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl From<MazeError> for ApiError {
    fn from(err: MazeError) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, "{}", self.message);
        } else {
            debug!(status = %self.status, "{}", self.message);
        }
        let body = ErrorResponse {
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /api/quiz
pub async fn quiz(State(state): State<SharedState>) -> Json<Value> {
    Json(state.quiz().raw().clone())
}

/// GET /api/maze
///
/// A fresh maze sized from the quiz's maximum score.
pub async fn maze(State(state): State<SharedState>) -> Result<Json<MazeResponse>, ApiError> {
    let mazes = state.mazes();
    let maze = mazes.build(state.quiz().max_score())?;
    Ok(Json(MazeResponse::new(maze, mazes.config().solve)))
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Answers CORS preflight requests; the headers come from the router layers.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn not_found() -> ApiError {
    ApiError {
        status: StatusCode::NOT_FOUND,
        message: "not found".to_string(),
    }
}
