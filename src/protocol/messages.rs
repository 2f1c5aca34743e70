//! Response bodies for the HTTP API.
//!
//! All bodies are serialized as JSON.

use serde::Serialize;

use crate::maze::Maze;
use crate::models::Grid;

/// Body of `GET /api/maze`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum MazeResponse {
    /// `{ "grid": [[...]], "path": [[row, col], ...] }`
    Solved(Maze),
    /// Bare `[[...]]` grid, for servers running without a solver.
    GridOnly(Grid),
}

impl MazeResponse {
    pub fn new(maze: Maze, solve: bool) -> Self {
        if solve {
            MazeResponse::Solved(maze)
        } else {
            MazeResponse::GridOnly(maze.grid)
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Body returned alongside any non-2xx status.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Default server port.
pub const DEFAULT_PORT: u16 = 5000;

/// Every response carries these CORS headers.
pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization";
pub const ALLOW_METHODS: &str = "OPTIONS, HEAD, GET, POST, DELETE, PUT";
