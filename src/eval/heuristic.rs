//! Heuristic evaluation function for Caro board positions
//!
//! Static, position-local scoring with no lookahead. Every cell holding the
//! player's mark contributes one window per orientation; the search only calls
//! this at its depth cutoff.

use crate::board::{Board, Mark, Pos, DIRECTIONS};

use super::patterns::window_score;

/// Cells covered by one forward window, origin included
const WINDOW: isize = 5;

/// Score the five-cell window starting at `pos` along `(dr, dc)` for `mark`.
///
/// Marks of `mark` inside the window are counted; empty cells are skipped and
/// the window ends early at an opposing mark or the board edge. The cell just
/// before `pos` and the cell just past the full window each count as an open
/// end when they are on the board and empty. An early stop adds no weight of
/// its own.
#[must_use]
pub fn score_line(board: &Board, pos: Pos, (dr, dc): (isize, isize), mark: Mark) -> i32 {
    let size = board.size();
    let opponent = mark.opponent();

    let mut count = 0;
    for k in 0..WINDOW {
        let Some(p) = pos.offset(dr, dc, k, size) else {
            break;
        };
        let cell = board.get(p);
        if cell.holds(mark) {
            count += 1;
        } else if cell.holds(opponent) {
            break;
        }
    }

    let is_open = |k: isize| {
        pos.offset(dr, dc, k, size)
            .is_some_and(|p| board.is_empty_at(p))
    };
    let open_ends = u32::from(is_open(-1)) + u32::from(is_open(WINDOW));

    window_score(count, open_ends)
}

/// Sum of all window scores for `mark`.
#[must_use]
pub fn score_board(board: &Board, mark: Mark) -> i32 {
    board
        .marks()
        .filter(|&(_, m)| m == mark)
        .map(|(pos, _)| {
            DIRECTIONS
                .iter()
                .map(|&dir| score_line(board, pos, dir, mark))
                .sum::<i32>()
        })
        .sum()
}

/// Net position value for `mark`: its own score minus the opponent's.
///
/// Antisymmetric: `evaluate(board, X) == -evaluate(board, O)`.
#[must_use]
pub fn evaluate(board: &Board, mark: Mark) -> i32 {
    score_board(board, mark) - score_board(board, mark.opponent())
}
