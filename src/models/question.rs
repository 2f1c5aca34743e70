use serde::Deserialize;

/// A quiz question as far as scoring is concerned.
///
/// Display fields (`question`, answer `text`, ...) are ignored here; the raw
/// document keeps them for the `/api/quiz` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Question {
    #[serde(default)]
    pub multiple_choice: bool,
    pub answers: Vec<Answer>,
}

/// Points may be fractional; JSON integers load as whole values.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Answer {
    #[serde(default)]
    pub points: f64,
}

impl Question {
    /// Best points a player can collect on this question.
    ///
    /// Multiple-choice questions add up every positive answer, single-choice
    /// questions take the best answer. A question without answers is worth 0.
    pub fn max_points(&self) -> f64 {
        if self.multiple_choice {
            self.answers
                .iter()
                .map(|answer| answer.points)
                .filter(|&points| points > 0.0)
                .sum()
        } else {
            self.answers
                .iter()
                .map(|answer| answer.points)
                .reduce(f64::max)
                .unwrap_or(0.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(multiple_choice: bool, points: &[f64]) -> Question {
        Question {
            multiple_choice,
            answers: points.iter().map(|&points| Answer { points }).collect(),
        }
    }

    #[test]
    fn test_multiple_choice_sums_positive_answers() {
        assert_eq!(question(true, &[3.0, -2.0, 0.0, 4.0]).max_points(), 7.0);
        assert_eq!(question(true, &[-1.0, 0.0]).max_points(), 0.0);
    }

    #[test]
    fn test_single_choice_takes_best_answer() {
        assert_eq!(question(false, &[1.0, 5.0, 2.0]).max_points(), 5.0);
        assert_eq!(question(false, &[-3.0, -1.0]).max_points(), -1.0);
        assert_eq!(question(false, &[]).max_points(), 0.0);
    }

    #[test]
    fn test_defaults_when_fields_missing() {
        let q: Question =
            serde_json::from_str(r#"{"question": "Pick", "answers": [{"text": "a"}, {"points": 2}]}"#)
                .unwrap();
        assert!(!q.multiple_choice);
        assert_eq!(q.answers, vec![Answer { points: 0.0 }, Answer { points: 2.0 }]);
    }

    #[test]
    fn test_fractional_points() {
        let q: Question = serde_json::from_str(
            r#"{"multiple_choice": true, "answers": [{"points": 2.5}, {"points": 1}, {"points": -0.5}]}"#,
        )
        .unwrap();
        assert_eq!(q.max_points(), 3.5);
    }
}
