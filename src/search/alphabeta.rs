//! Depth-limited minimax search with alpha-beta pruning
//!
//! The searcher scores positions from the point of view of its own mark: its
//! moves are maximizing nodes and the opponent's replies are minimizing nodes.
//! A single board is threaded through the recursion and every simulated move
//! is placed through a [`TrialMove`] guard, so the board carries no net
//! mutation once a subtree returns.
//!
//! # Example
//!
//! ```
//! use caro::board::{Board, Mark, Pos};
//! use caro::search::Searcher;
//!
//! let mut board = Board::with_size(9).unwrap();
//! board.place(Pos::new(4, 4), Mark::O);
//!
//! let mut searcher = Searcher::new(Mark::X);
//! let result = searcher.search(&mut board, 1, Some(Pos::new(4, 4)));
//! assert!(result.best_move.is_some());
//! assert_eq!(board.empty_count(), 80);
//! ```

use log::{debug, trace};

use crate::board::{Board, Mark, Pos, TrialMove};
use crate::eval::{evaluate, PatternScore};
use crate::rules::has_winning_line_through;

use super::movegen::generate;

/// Score of a completed five, signed by who made it
pub const WIN_SCORE: i32 = PatternScore::FIVE;

/// Infinity score for alpha-beta bounds
const INF: i32 = i32::MAX;

/// Maximum moves tried at the root when the search is deeper than
/// `WIDE_DEPTH`.
pub const MAX_ROOT_MOVES: usize = 15;

/// Maximum moves tried at internal nodes with more than `WIDE_DEPTH` plies
/// remaining.
pub const MAX_INTERNAL_MOVES: usize = 10;

/// Move caps apply only above this remaining depth
const WIDE_DEPTH: u8 = 2;

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited below the root
    pub nodes: u64,
    /// Alpha-beta cutoffs
    pub beta_cutoffs: u64,
    /// Cutoffs on the first move tried (measures move ordering quality)
    pub first_move_cutoffs: u64,
}

impl SearchStats {
    /// First-move cutoff rate in percent
    pub fn first_move_rate(&self) -> f64 {
        if self.beta_cutoffs == 0 {
            0.0
        } else {
            self.first_move_cutoffs as f64 / self.beta_cutoffs as f64 * 100.0
        }
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, `None` when the board has no empty cell
    pub best_move: Option<Pos>,
    /// Score of the best move
    pub score: i32,
    /// Depth searched below the root move
    pub depth: u8,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Minimax searcher for one mark.
///
/// Holds no position state between calls; only statistics of the last search.
#[derive(Debug, Clone)]
pub struct Searcher {
    mark: Mark,
    opponent: Mark,
    stats: SearchStats,
}

impl Searcher {
    pub fn new(mark: Mark) -> Self {
        Self {
            mark,
            opponent: mark.opponent(),
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn mark(&self) -> Mark {
        self.mark
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Pick the best move for the searcher's mark.
    ///
    /// Every root candidate is played and answered by a minimizing search of
    /// `depth` plies with a fresh window. The strictly highest score wins, so
    /// the earliest candidate wins ties. `last_move` seeds the candidate
    /// ordering.
    pub fn search(&mut self, board: &mut Board, depth: u8, last_move: Option<Pos>) -> SearchResult {
        self.stats = SearchStats::default();

        let mut moves = generate(board, last_move);
        if depth > WIDE_DEPTH {
            moves.truncate(MAX_ROOT_MOVES);
        }

        let mut best: Option<(Pos, i32)> = None;
        for &mov in &moves {
            let score = {
                let mut trial = TrialMove::place(board, mov, self.mark);
                self.minimax(&mut trial, depth, false, -INF, INF, Some(mov))
            };
            trace!("root candidate {} scored {}", mov, score);

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mov, score));
            }
        }

        debug!(
            "searched {} root moves at depth {}: {} nodes, {} cutoffs ({:.1}% first move)",
            moves.len(),
            depth,
            self.stats.nodes,
            self.stats.beta_cutoffs,
            self.stats.first_move_rate()
        );

        SearchResult {
            best_move: best.map(|(pos, _)| pos),
            score: best.map_or(0, |(_, score)| score),
            depth,
            stats: self.stats.clone(),
        }
    }

    /// Recursive minimax with alpha-beta pruning.
    ///
    /// `last_move` is the move that produced this node; a five through it
    /// ends the search with `±WIN_SCORE`, negative when the node is
    /// maximizing (the opponent just won). A full board scores 0 and depth 0
    /// returns the static evaluation for the searcher's mark.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        last_move: Option<Pos>,
    ) -> i32 {
        self.stats.nodes += 1;

        if let Some(last) = last_move {
            if has_winning_line_through(board, last) {
                return if maximizing { -WIN_SCORE } else { WIN_SCORE };
            }
        }

        if board.is_full() {
            return 0;
        }

        if depth == 0 {
            return evaluate(board, self.mark);
        }

        let mut moves = generate(board, last_move);
        if moves.is_empty() {
            return 0;
        }
        if depth > WIDE_DEPTH {
            moves.truncate(MAX_INTERNAL_MOVES);
        }

        let mover = if maximizing { self.mark } else { self.opponent };
        let mut best = if maximizing { -INF } else { INF };

        for (i, &mov) in moves.iter().enumerate() {
            let score = {
                let mut trial = TrialMove::place(board, mov, mover);
                self.minimax(&mut trial, depth - 1, !maximizing, alpha, beta, Some(mov))
            };

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if beta <= alpha {
                self.stats.beta_cutoffs += 1;
                if i == 0 {
                    self.stats.first_move_cutoffs += 1;
                }
                break;
            }
        }

        best
    }
}
