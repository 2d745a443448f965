//! Bot engine: difficulty policy and the move-selection entry point
//!
//! The engine is stateless between calls apart from its random number
//! generator. Each call validates its input, optionally takes the easy tier's
//! random shortcut, and otherwise runs an alpha-beta search on its own copy of
//! the board.
//!
//! # Example
//!
//! ```
//! use caro::{BotEngine, Board, Difficulty, Mark, Pos};
//!
//! let mut board = Board::with_size(9).unwrap();
//! board.place(Pos::new(4, 4), Mark::X);
//!
//! let mut engine = BotEngine::with_seed(7);
//! let pos = engine
//!     .best_move(&board, Mark::O, Difficulty::Easy, Some(Pos::new(4, 4)))
//!     .unwrap();
//! assert!(board.is_empty_at(pos));
//! ```

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Mark, Pos};
use crate::error::EngineError;
use crate::search::{generate, Searcher};

/// Bot strength tier.
///
/// Unknown names parse as [`Difficulty::Medium`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Search configuration for one difficulty tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchParams {
    /// Plies searched below the bot's own move
    pub depth: u8,
    /// Chance of skipping the search for a random nearby move
    pub random_probability: f64,
    /// Number of leading candidates the random pick is drawn from
    pub random_pool: usize,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Parse a tier name, case-insensitive; anything unrecognized is Medium.
    pub fn from_name(name: &str) -> Difficulty {
        match name.trim().to_ascii_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Medium,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn params(self) -> SearchParams {
        match self {
            Difficulty::Easy => SearchParams {
                depth: 1,
                random_probability: 0.3,
                random_pool: 5,
            },
            Difficulty::Medium => SearchParams {
                depth: 2,
                random_probability: 0.0,
                random_pool: 0,
            },
            Difficulty::Hard => SearchParams {
                depth: 3,
                random_probability: 0.0,
                random_pool: 0,
            },
        }
    }
}

impl From<&str> for Difficulty {
    fn from(name: &str) -> Self {
        Difficulty::from_name(name)
    }
}

impl From<String> for Difficulty {
    fn from(name: String) -> Self {
        Difficulty::from_name(&name)
    }
}

impl FromStr for Difficulty {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Difficulty::from_name(s))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How the move was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Random pick among the closest candidates (easy tier)
    Random,
    /// Minimax search with alpha-beta pruning
    AlphaBeta,
}

/// Result of a move search with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Chosen move, always an empty cell of the input board
    pub best_move: Pos,
    /// Search score of the move (0 for random picks)
    pub score: i32,
    pub search_type: SearchType,
    pub difficulty: Difficulty,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

/// Move-selection engine for the bot.
///
/// The random source is injected so the easy tier's shortcut is reproducible.
/// Concurrent games should each use their own engine and board.
pub struct BotEngine<R = StdRng> {
    rng: R,
}

impl BotEngine<StdRng> {
    /// Engine seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Engine with a deterministic seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for BotEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> BotEngine<R> {
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Best move for `bot_mark`.
    ///
    /// Convenience wrapper over [`BotEngine::best_move_with_stats`].
    pub fn best_move(
        &mut self,
        board: &Board,
        bot_mark: Mark,
        difficulty: Difficulty,
        last_move: Option<Pos>,
    ) -> Result<Pos, EngineError> {
        self.best_move_with_stats(board, bot_mark, difficulty, last_move)
            .map(|result| result.best_move)
    }

    /// Best move for `bot_mark` with search statistics.
    ///
    /// `last_move` is the opponent's latest move and seeds candidate
    /// ordering. The caller's board is never modified; the search runs on a
    /// copy.
    ///
    /// # Errors
    ///
    /// - [`EngineError::OutOfBounds`] if `last_move` is off the board
    /// - [`EngineError::NoLegalMove`] if the board has no empty cell
    pub fn best_move_with_stats(
        &mut self,
        board: &Board,
        bot_mark: Mark,
        difficulty: Difficulty,
        last_move: Option<Pos>,
    ) -> Result<MoveResult, EngineError> {
        let start = Instant::now();

        if let Some(last) = last_move {
            board.check_bounds(last)?;
        }
        if board.is_full() {
            return Err(EngineError::NoLegalMove);
        }

        let params = difficulty.params();

        if params.random_probability > 0.0 && self.rng.random_bool(params.random_probability) {
            let candidates = generate(board, last_move);
            let pool = candidates.len().min(params.random_pool);
            let pick = candidates[self.rng.random_range(0..pool)];
            debug!(
                "{} bot ({}) picked {} at random from {} candidates",
                difficulty, bot_mark, pick, pool
            );

            return Ok(MoveResult {
                best_move: pick,
                score: 0,
                search_type: SearchType::Random,
                difficulty,
                time_ms: start.elapsed().as_millis() as u64,
                nodes: 0,
            });
        }

        let mut work_board = board.clone();
        let mut searcher = Searcher::new(bot_mark);
        let result = searcher.search(&mut work_board, params.depth, last_move);
        let best_move = result.best_move.ok_or(EngineError::NoLegalMove)?;

        let time_ms = start.elapsed().as_millis() as u64;
        debug!(
            "{} bot ({}) plays {} score {} after {} nodes in {}ms",
            difficulty, bot_mark, best_move, result.score, result.stats.nodes, time_ms
        );

        Ok(MoveResult {
            best_move,
            score: result.score,
            search_type: SearchType::AlphaBeta,
            difficulty,
            time_ms,
            nodes: result.stats.nodes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use crate::search::WIN_SCORE;
    use proptest::prelude::*;

    #[test]
    fn test_difficulty_params() {
        assert_eq!(Difficulty::Easy.params().depth, 1);
        assert_eq!(Difficulty::Easy.params().random_probability, 0.3);
        assert_eq!(Difficulty::Easy.params().random_pool, 5);
        assert_eq!(Difficulty::Medium.params().depth, 2);
        assert_eq!(Difficulty::Medium.params().random_probability, 0.0);
        assert_eq!(Difficulty::Hard.params().depth, 3);
        assert_eq!(Difficulty::Hard.params().random_probability, 0.0);
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn test_difficulty_from_name() {
        assert_eq!(Difficulty::from_name("easy"), Difficulty::Easy);
        assert_eq!(Difficulty::from_name(" HARD "), Difficulty::Hard);
        assert_eq!(Difficulty::from_name("medium"), Difficulty::Medium);
        assert_eq!(Difficulty::from_name("nightmare"), Difficulty::Medium);
        assert_eq!("".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!(Difficulty::Hard.to_string(), "hard");
    }

    #[test]
    fn test_empty_board_medium() {
        let board = Board::new();
        let mut engine = BotEngine::with_seed(1);
        let result = engine
            .best_move_with_stats(&board, Mark::O, Difficulty::Medium, None)
            .unwrap();

        assert!(board.contains(result.best_move));
        assert!(board.is_empty_at(result.best_move));
        assert_eq!(result.search_type, SearchType::AlphaBeta);
        assert!(board.is_board_empty());
    }

    #[test]
    fn test_hard_blocks_open_four() {
        let mut board = Board::new();
        for col in 7..=10 {
            board.place(Pos::new(7, col), Mark::X);
        }
        let before = board.clone();

        let mut engine = BotEngine::with_seed(1);
        let pos = engine
            .best_move(&board, Mark::O, Difficulty::Hard, Some(Pos::new(7, 10)))
            .unwrap();

        assert!(
            pos == Pos::new(7, 6) || pos == Pos::new(7, 11),
            "expected a blocking move, got {}",
            pos
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut board = Board::with_size(9).unwrap();
        for col in 2..6 {
            board.place(Pos::new(3, col), Mark::O);
        }
        // Closed on the left, so only completing the five scores a win now
        board.place(Pos::new(3, 1), Mark::X);

        let mut engine = BotEngine::with_seed(3);
        let result = engine
            .best_move_with_stats(&board, Mark::O, Difficulty::Medium, Some(Pos::new(3, 1)))
            .unwrap();
        assert_eq!(result.best_move, Pos::new(3, 6));
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board: Board = "XOX\nXOO\nOXX".parse().unwrap();
        let mut engine = BotEngine::with_seed(1);
        for difficulty in Difficulty::ALL {
            assert_eq!(
                engine.best_move(&board, Mark::X, difficulty, None),
                Err(EngineError::NoLegalMove)
            );
        }
    }

    #[test]
    fn test_last_move_out_of_bounds() {
        let board = Board::with_size(9).unwrap();
        let mut engine = BotEngine::with_seed(1);
        assert_eq!(
            engine.best_move(&board, Mark::X, Difficulty::Easy, Some(Pos::new(9, 2))),
            Err(EngineError::OutOfBounds { row: 9, col: 2, size: 9 })
        );
    }

    #[test]
    fn test_easy_randomizes_about_thirty_percent() {
        let mut board = Board::with_size(7).unwrap();
        board.place(Pos::new(3, 3), Mark::X);
        board.place(Pos::new(2, 4), Mark::O);
        let last = Some(Pos::new(3, 3));
        let top_five: Vec<Pos> = generate(&board, last).into_iter().take(5).collect();

        let mut engine = BotEngine::with_seed(2024);
        let mut random_picks = 0;
        for _ in 0..1000 {
            let result = engine
                .best_move_with_stats(&board, Mark::O, Difficulty::Easy, last)
                .unwrap();
            if result.search_type == SearchType::Random {
                random_picks += 1;
                assert!(top_five.contains(&result.best_move));
            }
            assert!(board.is_empty_at(result.best_move));
        }

        assert!(
            (240..=360).contains(&random_picks),
            "random picks: {}",
            random_picks
        );
    }

    #[test]
    fn test_easy_pool_shrinks_to_remaining_cells() {
        // Three empty cells left, fewer than the five-move pool
        let board: Board = "XOXOX\nOXOXO\nOXOXO\nXOXOX\nXO...".parse().unwrap();
        let empty = [Pos::new(4, 2), Pos::new(4, 3), Pos::new(4, 4)];
        assert_eq!(board.empty_count(), empty.len());

        let mut seen = [false; 3];
        let mut random_picks = 0;
        for seed in 0..300 {
            let mut engine = BotEngine::with_seed(seed);
            let result = engine
                .best_move_with_stats(&board, Mark::X, Difficulty::Easy, Some(Pos::new(4, 1)))
                .unwrap();
            let idx = empty
                .iter()
                .position(|&p| p == result.best_move)
                .expect("move must be an empty cell");
            if result.search_type == SearchType::Random {
                random_picks += 1;
                seen[idx] = true;
            }
        }

        assert!(random_picks > 0);
        assert_eq!(seen, [true; 3], "random picks covered {:?}", seen);
    }

    #[test]
    fn test_same_seed_same_moves() {
        let mut board = Board::with_size(7).unwrap();
        board.place(Pos::new(3, 3), Mark::X);
        let last = Some(Pos::new(3, 3));

        let mut a = BotEngine::with_seed(99);
        let mut b = BotEngine::with_seed(99);
        for _ in 0..20 {
            assert_eq!(
                a.best_move(&board, Mark::O, Difficulty::Easy, last),
                b.best_move(&board, Mark::O, Difficulty::Easy, last)
            );
        }
    }

    fn arb_position() -> impl Strategy<Value = (Board, Option<Pos>)> {
        (5usize..8).prop_flat_map(|size| {
            (
                prop::collection::vec(prop::sample::select(vec![0u8, 0, 0, 1, 2]), size * size),
                prop::option::of((0..size, 0..size)),
            )
                .prop_map(move |(cells, last)| {
                    let rows = cells
                        .chunks(size)
                        .map(|row| {
                            row.iter()
                                .map(|&v| match v {
                                    1 => Cell::Occupied(Mark::X),
                                    2 => Cell::Occupied(Mark::O),
                                    _ => Cell::Empty,
                                })
                                .collect()
                        })
                        .collect();
                    let board = Board::from_rows(rows).unwrap();
                    (board, last.map(|(r, c)| Pos::new(r, c)))
                })
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn prop_best_move_is_legal_and_board_untouched(
            (board, last) in arb_position(),
            seed in any::<u64>(),
            tier in prop::sample::select(Difficulty::ALL.to_vec()),
        ) {
            let before = board.clone();
            let mut engine = BotEngine::with_seed(seed);
            match engine.best_move(&board, Mark::X, tier, last) {
                Ok(pos) => {
                    prop_assert!(board.contains(pos));
                    prop_assert!(board.is_empty_at(pos));
                }
                Err(err) => {
                    prop_assert_eq!(err, EngineError::NoLegalMove);
                    prop_assert!(board.is_full());
                }
            }
            prop_assert_eq!(board, before);
        }

        #[test]
        fn prop_search_restores_board(
            (board, last) in arb_position(),
            depth in 1u8..3,
        ) {
            let before = board.clone();
            let mut work = board.clone();
            let mut searcher = Searcher::new(Mark::O);
            let result = searcher.search(&mut work, depth, last);
            prop_assert_eq!(&work, &before);
            if let Some(pos) = result.best_move {
                prop_assert!(before.is_empty_at(pos));
            }
        }
    }
}
