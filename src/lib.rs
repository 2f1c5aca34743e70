//! # quiz-maze
//!
//! A small web backend that serves a quiz and randomized mazes whose size
//! follows the quiz's maximum score.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_maze::maze::{MazeBuilder, MazeConfig};
//! use quiz_maze::{load_quiz_from_json, LoadError};
//!
//! fn main() -> Result<(), LoadError> {
//!     // Load questions from a JSON file
//!     let quiz = load_quiz_from_json("quiz.json")?;
//!
//!     // Build a maze sized for the quiz
//!     let maze = MazeBuilder::new(MazeConfig::default())
//!         .build(quiz.max_score())
//!         .expect("default sizing is always large enough");
//!     println!("{} steps", maze.path.len());
//!
//!     Ok(())
//! }
//! ```

pub mod config;
mod data;
pub mod maze;
mod models;
pub mod protocol;
mod scoring;
pub mod server;

use std::fmt;
use std::io;

pub use config::{Args, Config, ConfigError};
pub use data::{load_quiz_from_json, LoadError, QuizData};
pub use models::{Answer, Cell, Grid, GridError, Question, OPEN, WALL};
pub use scoring::total_score;

/// Error type for running the server.
#[derive(Debug)]
pub enum ServerError {
    /// Invalid command line or environment settings.
    Config(ConfigError),
    /// Error loading the quiz file.
    Load(LoadError),
    /// IO error binding or serving.
    Io(io::Error),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::Config(e) => write!(f, "Invalid configuration: {}", e),
            ServerError::Load(e) => write!(f, "Failed to load quiz: {}", e),
            ServerError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ServerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServerError::Config(e) => Some(e),
            ServerError::Load(e) => Some(e),
            ServerError::Io(e) => Some(e),
        }
    }
}

impl From<ConfigError> for ServerError {
    fn from(err: ConfigError) -> Self {
        ServerError::Config(err)
    }
}

impl From<LoadError> for ServerError {
    fn from(err: LoadError) -> Self {
        ServerError::Load(err)
    }
}

impl From<io::Error> for ServerError {
    fn from(err: io::Error) -> Self {
        ServerError::Io(err)
    }
}
