//! Scoped trial placement used by the search
//!
//! A [`TrialMove`] places a mark on an empty cell and clears it again when the
//! guard is dropped, so the board is restored on every exit path: normal
//! return, a pruning `break`, `?` propagation, or unwinding.

use std::ops::{Deref, DerefMut};

use super::{Board, Mark, Pos};

/// Mark placed for the lifetime of the guard
pub struct TrialMove<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl<'a> TrialMove<'a> {
    /// Place `mark` at `pos`, which must be empty.
    #[inline]
    pub fn place(board: &'a mut Board, pos: Pos, mark: Mark) -> Self {
        debug_assert!(board.is_empty_at(pos), "trial move on occupied cell {}", pos);
        board.place(pos, mark);
        Self { board, pos }
    }

    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for TrialMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for TrialMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.board.remove(self.pos);
    }
}
