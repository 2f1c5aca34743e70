//! HTTP server implementation.

use axum::http::header::{
    HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::data::load_quiz_from_json;
use crate::maze::MazeBuilder;
use crate::protocol::{ALLOW_HEADERS, ALLOW_METHODS, ALLOW_ORIGIN};
use crate::ServerError;

use super::handlers;
use super::state::{AppState, SharedState};

/// Build the application router.
///
/// Every response, including 404s and preflights, carries the CORS headers.
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(handlers::index).options(handlers::preflight))
        .route("/health", get(handlers::health).options(handlers::preflight))
        .route("/api/maze", get(handlers::maze).options(handlers::preflight))
        .route("/api/quiz", get(handlers::quiz).options(handlers::preflight))
        .fallback(handlers::not_found)
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(ALLOW_ORIGIN),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the quiz server until the listener fails.
pub async fn run(config: Config) -> Result<(), ServerError> {
    let quiz = load_quiz_from_json(&config.quiz_path)?;
    info!(
        path = %config.quiz_path.display(),
        questions = quiz.questions().len(),
        max_score = quiz.max_score(),
        "loaded quiz"
    );

    let mazes = MazeBuilder::new(config.maze);
    info!(
        side = mazes.side_for(quiz.max_score()),
        generator = ?config.maze.generator,
        solve = config.maze.solve,
        "maze settings"
    );

    let state = AppState::new(quiz, mazes).shared();

    let listener = TcpListener::bind(config.addr).await?;
    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state)).await?;
    Ok(())
}
