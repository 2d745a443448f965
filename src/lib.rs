//! Caro (five-in-a-row) bot engine
//!
//! Given a square board of X and O marks, the engine picks the move for the
//! bot's mark:
//! - N x N board, marks `X` and `O`, X moves first
//! - Five or more identical marks in a row, column or diagonal win
//! - No captures and no forbidden moves
//!
//! # Architecture
//!
//! - [`board`]: Board representation and the reversible trial move
//! - [`rules`]: Win detection through a placed mark
//! - [`eval`]: Static pattern evaluation
//! - [`search`]: Candidate ordering and alpha-beta minimax
//! - [`engine`]: Difficulty policy and the bot entry point
//! - [`config`]: TOML settings for the desktop client
//! - [`ui`]: eframe/egui desktop client
//!
//! # Quick Start
//!
//! ```
//! use caro::{BotEngine, Board, Difficulty, Mark, Pos};
//!
//! let mut board = Board::with_size(9).unwrap();
//! board.place(Pos::new(4, 4), Mark::X);
//!
//! // Bot answers as O
//! let mut engine = BotEngine::with_seed(42);
//! let pos = engine
//!     .best_move(&board, Mark::O, Difficulty::Medium, Some(Pos::new(4, 4)))
//!     .unwrap();
//! board.play(pos, Mark::O).unwrap();
//! ```
//!
//! # Difficulty
//!
//! | Tier   | Depth | Random pick                      |
//! |--------|-------|----------------------------------|
//! | easy   | 1     | 30% among the 5 closest moves    |
//! | medium | 2     | never                            |
//! | hard   | 3     | never, 15 root / 10 inner moves  |

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Mark, Pos, DEFAULT_BOARD_SIZE};
pub use engine::{BotEngine, Difficulty, MoveResult, SearchParams, SearchType};
pub use error::{ConfigError, EngineError};
pub use eval::{evaluate, score_board};
pub use rules::{find_winner, has_winning_line_through, winning_line};
