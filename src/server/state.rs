//! Server state shared by every request handler.

use std::sync::Arc;

use crate::data::QuizData;
use crate::maze::MazeBuilder;

/// Read-only state built once at startup.
pub type SharedState = Arc<AppState>;

#[derive(Debug)]
pub struct AppState {
    /// Quiz served by `/api/quiz` and used to size mazes.
    quiz: QuizData,
    /// Maze pipeline configured from the command line.
    mazes: MazeBuilder,
}

impl AppState {
    pub fn new(quiz: QuizData, mazes: MazeBuilder) -> Self {
        Self { quiz, mazes }
    }

    pub fn shared(self) -> SharedState {
        Arc::new(self)
    }

    pub fn quiz(&self) -> &QuizData {
        &self.quiz
    }

    pub fn mazes(&self) -> &MazeBuilder {
        &self.mazes
    }
}
