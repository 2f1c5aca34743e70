use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

use crate::models::Question;
use crate::scoring::total_score;

/// Error loading the quiz file.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// The file is not valid JSON, or a question has the wrong shape.
    Parse(serde_json::Error),
    /// The top-level JSON value is not an array.
    NotAnArray,
    /// The question list is empty.
    Empty,
    /// A question has no answers to score.
    NoAnswers { index: usize },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            LoadError::Parse(e) => write!(f, "invalid quiz JSON: {}", e),
            LoadError::NotAnArray => write!(f, "quiz must be a JSON array of questions"),
            LoadError::Empty => write!(f, "quiz must contain at least one question"),
            LoadError::NoAnswers { index } => write!(f, "question {} has no answers", index),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err)
    }
}

/// Quiz questions loaded once at startup and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct QuizData {
    raw: Value,
    questions: Vec<Question>,
    max_score: f64,
}

impl QuizData {
    /// Validate a parsed quiz document.
    pub fn from_value(raw: Value) -> Result<Self, LoadError> {
        let items = raw.as_array().ok_or(LoadError::NotAnArray)?;
        if items.is_empty() {
            return Err(LoadError::Empty);
        }

        let questions = items
            .iter()
            .map(Question::deserialize)
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(index) = questions.iter().position(|q| q.answers.is_empty()) {
            return Err(LoadError::NoAnswers { index });
        }

        let max_score = total_score(&questions);
        Ok(Self {
            raw,
            questions,
            max_score,
        })
    }

    /// The document exactly as parsed from disk.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Maximum attainable score across all questions.
    pub fn max_score(&self) -> f64 {
        self.max_score
    }
}

impl std::str::FromStr for QuizData {
    type Err = LoadError;

    fn from_str(json: &str) -> Result<Self, Self::Err> {
        Self::from_value(serde_json::from_str(json)?)
    }
}

pub fn load_quiz_from_json<P: AsRef<Path>>(path: P) -> Result<QuizData, LoadError> {
    let path = path.as_ref();
    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    json_content.parse()
}
