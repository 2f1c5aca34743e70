//! Maximum attainable quiz score.

use crate::models::Question;

/// Sum of the best points every question can give.
///
/// Negative single-choice questions can pull the sum below zero; the total
/// is clamped to 0 in that case.
pub fn total_score(questions: &[Question]) -> f64 {
    let total: f64 = questions.iter().map(Question::max_points).sum();
    total.max(0.0)
}
