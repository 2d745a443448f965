//! Position evaluation

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, score_board, score_line};
pub use patterns::{window_score, PatternScore};
