mod loader;

pub use loader::{load_quiz_from_json, LoadError, QuizData};
