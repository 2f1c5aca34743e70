/// Smallest side a score-scaled maze gets.
pub const MIN_SIDE: usize = 5;

/// Side used by [`MazeSizing::Fixed`] unless configured otherwise.
pub const DEFAULT_FIXED_SIDE: usize = 10;

const SCORE_AREA_FACTOR: f64 = 2.5;

/// How many rooms a side of the maze gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MazeSizing {
    /// Grow the maze with the quiz score.
    #[default]
    Scaled,
    /// Always use the same side, ignoring the score.
    Fixed(usize),
}

impl MazeSizing {
    pub fn side_for(&self, score: f64) -> usize {
        match self {
            MazeSizing::Scaled => scaled_side(score),
            MazeSizing::Fixed(side) => *side,
        }
    }
}

/// Side length for a score: `floor(sqrt(score * 2.5))`, bumped to the next
/// odd number and never below [`MIN_SIDE`].
///
/// The area grows linearly with the score so the path length follows it.
pub fn scaled_side(score: f64) -> usize {
    // negative or NaN scores saturate to 0
    let mut side = (score * SCORE_AREA_FACTOR).sqrt().floor() as usize;
    if side % 2 == 0 {
        side += 1;
    }
    side.max(MIN_SIDE)
}
