//! Search module for the Caro bot
//!
//! Contains:
//! - Locality-ordered candidate move generation
//! - Depth-limited minimax with alpha-beta pruning

pub mod alphabeta;
pub mod movegen;

pub use alphabeta::{SearchResult, SearchStats, Searcher, WIN_SCORE};
pub use movegen::generate;
