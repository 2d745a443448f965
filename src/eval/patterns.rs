//! Pattern scores for Caro evaluation
//!
//! A line is scored by how many of the player's marks fall inside a five-cell
//! window and how many ends of that window are open.

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five in the window - immediate win
    pub const FIVE: i32 = 100_000;

    /// Four with at least one open end
    pub const OPEN_FOUR: i32 = 10_000;
    /// Four with both ends closed
    pub const CLOSED_FOUR: i32 = 1_000;

    /// Three with at least one open end
    pub const OPEN_THREE: i32 = 100;
    /// Three with both ends closed
    pub const CLOSED_THREE: i32 = 10;

    /// Two with at least one open end
    pub const OPEN_TWO: i32 = 5;

    /// Everything else, including a closed two
    pub const BASE: i32 = 1;
}

/// Map a window's mark count and open ends (0-2) to its score.
#[inline]
pub fn window_score(count: u32, open_ends: u32) -> i32 {
    match (count, open_ends) {
        (5.., _) => PatternScore::FIVE,
        (4, 1..) => PatternScore::OPEN_FOUR,
        (4, 0) => PatternScore::CLOSED_FOUR,
        (3, 1..) => PatternScore::OPEN_THREE,
        (3, 0) => PatternScore::CLOSED_THREE,
        (2, 1..) => PatternScore::OPEN_TWO,
        _ => PatternScore::BASE,
    }
}
