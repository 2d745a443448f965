//! Game session state for the Caro GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::AppConfig;
use crate::{
    find_winner, has_winning_line_through, winning_line, Board, BotEngine, Difficulty,
    EngineError, Mark, MoveResult, Pos,
};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs bot
    PvE { human_mark: Mark },
    /// Player vs player on one machine
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human_mark: Mark::X }
    }
}

type SearchReceiver = Receiver<Result<MoveResult, EngineError>>;

/// Background search state
pub enum AiState {
    Idle,
    /// Bot is choosing its own move
    Thinking {
        receiver: SearchReceiver,
        start_time: Instant,
    },
    /// Hint for the side to move is being computed
    Suggesting {
        receiver: SearchReceiver,
    },
}

/// How a finished game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    Win { winner: Mark, line: Vec<Pos> },
    Draw,
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) {
        self.start_time = None;
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub current_turn: Mark,
    pub outcome: Option<GameOutcome>,
    pub last_move: Option<Pos>,
    pub move_history: Vec<(Pos, Mark)>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,
    /// Seeds a fresh engine for every bot move
    rng: StdRng,
}

impl GameState {
    pub fn new(mode: GameMode, config: &AppConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            board: Board::with_size(config.board_size).unwrap_or_default(),
            mode,
            difficulty: config.difficulty,
            current_turn: Mark::X,
            outcome: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            rng,
        }
    }

    /// Start over on an empty board of the same size.
    pub fn reset(&mut self) {
        self.board = Board::with_size(self.board.size()).unwrap_or_default();
        self.current_turn = Mark::X;
        self.outcome = None;
        self.last_move = None;
        self.move_history.clear();
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.move_timer = MoveTimer::default();
        self.suggested_move = None;
        self.message = None;
        info!(
            "new {}x{} game, {:?}, {}",
            self.board.size(),
            self.board.size(),
            self.mode,
            self.difficulty
        );
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_mark } => self.current_turn == human_mark,
            GameMode::PvP => true,
        }
    }

    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_mark } => self.current_turn != human_mark,
            GameMode::PvP => false,
        }
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    pub fn is_suggesting(&self) -> bool {
        matches!(self.ai_state, AiState::Suggesting { .. })
    }

    /// True while any worker thread is running
    pub fn is_busy(&self) -> bool {
        !matches!(self.ai_state, AiState::Idle)
    }

    /// Attempt to place the current player's mark at the given position
    pub fn try_place_mark(&mut self, pos: Pos) -> Result<(), String> {
        if self.is_game_over() {
            return Err("Game is over".to_string());
        }

        if self.is_ai_thinking() {
            return Err("Bot is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        // A pending hint is for the position before this move
        if self.is_suggesting() {
            self.ai_state = AiState::Idle;
        }

        self.execute_move(pos).map_err(|e| e.to_string())
    }

    /// Apply a move for whoever is to play, then settle win, draw or turn.
    fn execute_move(&mut self, pos: Pos) -> Result<(), EngineError> {
        let mark = self.current_turn;
        self.board.play(pos, mark)?;

        self.move_history.push((pos, mark));
        self.last_move = Some(pos);
        self.suggested_move = None;
        self.message = None;
        self.move_timer.stop();

        if has_winning_line_through(&self.board, pos) {
            info!("{} wins with {}", mark, pos);
            self.outcome = Some(GameOutcome::Win {
                winner: mark,
                line: winning_line(&self.board, pos),
            });
            return Ok(());
        }

        if self.board.is_full() {
            info!("board full, game drawn");
            self.outcome = Some(GameOutcome::Draw);
            return Ok(());
        }

        self.current_turn = mark.opponent();
        self.move_timer.start();
        Ok(())
    }

    /// Hand the position to a worker thread if the bot is to move.
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_busy() || self.is_game_over() {
            return;
        }

        self.ai_state = AiState::Thinking {
            receiver: self.spawn_search(self.difficulty),
            start_time: Instant::now(),
        };
    }

    /// Search the current position for the side to move on a worker thread.
    fn spawn_search(&mut self, difficulty: Difficulty) -> SearchReceiver {
        let board = self.board.clone();
        let mark = self.current_turn;
        let last_move = self.last_move;
        let seed: u64 = self.rng.random();

        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = BotEngine::with_seed(seed);
            let result = engine.best_move_with_stats(&board, mark, difficulty, last_move);
            // The receiver is gone if the game moved on; nothing to report
            let _ = tx.send(result);
        });

        rx
    }

    /// Poll the worker thread and apply its result when ready.
    pub fn check_ai_result(&mut self) {
        let polled = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => {
                receiver.try_recv().map(|result| (result, Some(start_time.elapsed())))
            }
            AiState::Suggesting { receiver } => receiver.try_recv().map(|result| (result, None)),
            AiState::Idle => return,
        };

        let (result, elapsed) = match polled {
            Ok(done) => done,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                self.ai_state = AiState::Idle;
                self.message = Some("Bot error".to_string());
                return;
            }
        };

        self.ai_state = AiState::Idle;
        match elapsed {
            Some(elapsed) => {
                self.move_timer.ai_thinking_time = Some(elapsed);
                self.apply_bot_result(result);
            }
            None => self.apply_suggestion(result),
        }
    }

    fn apply_bot_result(&mut self, result: Result<MoveResult, EngineError>) {
        match result {
            Ok(move_result) => {
                let pos = move_result.best_move;
                self.last_ai_result = Some(move_result);
                // The board may not match what the bot saw; re-check before applying
                if let Err(err) = self.execute_move(pos) {
                    warn!("rejected bot move {}: {}", pos, err);
                    self.message = Some(format!("Bot returned an invalid move: {}", err));
                }
            }
            Err(EngineError::NoLegalMove) => {
                self.outcome = Some(GameOutcome::Draw);
            }
            Err(err) => {
                warn!("bot failed: {}", err);
                self.message = Some(err.to_string());
            }
        }
    }

    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            _ => None,
        }
    }

    /// Ask the bot what it would play for the side to move (PvP hint).
    ///
    /// The search runs in the background; `check_ai_result` picks it up.
    pub fn request_suggestion(&mut self) {
        if self.is_game_over() || self.is_busy() {
            return;
        }

        self.ai_state = AiState::Suggesting {
            receiver: self.spawn_search(Difficulty::Medium),
        };
    }

    fn apply_suggestion(&mut self, result: Result<MoveResult, EngineError>) {
        match result {
            Ok(result) => {
                self.suggested_move = Some(result.best_move);
                self.last_ai_result = Some(result);
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    /// Take back the last move, or the last human and bot pair in PvE.
    pub fn undo(&mut self) {
        if self.move_history.is_empty() || self.is_ai_thinking() {
            return;
        }
        if self.is_suggesting() {
            self.ai_state = AiState::Idle;
        }

        let undo_count = match self.mode {
            GameMode::PvE { human_mark } => {
                // Rewind to the human's latest move
                match self.move_history.iter().rposition(|&(_, m)| m == human_mark) {
                    Some(idx) => self.move_history.len() - idx,
                    None => 0,
                }
            }
            GameMode::PvP => 1,
        };
        if undo_count == 0 {
            return;
        }

        let moves_to_keep = self.move_history.len() - undo_count;
        let moves: Vec<_> = self.move_history.drain(..moves_to_keep).collect();

        self.board = Board::with_size(self.board.size()).unwrap_or_default();
        self.current_turn = Mark::X;
        self.outcome = None;
        self.last_move = None;
        self.suggested_move = None;
        self.message = None;
        self.move_history.clear();

        for (pos, mark) in moves {
            self.board.place(pos, mark);
            self.move_history.push((pos, mark));
            self.last_move = Some(pos);
            self.current_turn = mark.opponent();
        }

        if let Some((winner, line)) = find_winner(&self.board) {
            self.outcome = Some(GameOutcome::Win { winner, line });
        }

        self.move_timer.start();
    }
}
