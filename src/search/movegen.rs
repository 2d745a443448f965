//! Candidate move generation with locality ordering
//!
//! Empty cells within two rows and columns of the last move come first,
//! closest (Manhattan distance) first; every other empty cell follows in
//! row-major order. The ordering is what lets the search's move caps keep
//! only the most relevant candidates.

use crate::board::{Board, Pos};

/// Offset range scanned around the last move in each axis
const NEIGHBORHOOD_RADIUS: isize = 2;

/// Priority of cells outside the neighborhood; worse than any local cell
const FAR_PRIORITY: usize = 100;

/// A move plus its ordering priority (lower is tried first)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    pos: Pos,
    priority: usize,
}

/// Ordered candidate moves for the position.
///
/// Without a last move every empty cell shares one priority, so the result is
/// plain row-major order. Ties keep discovery order.
pub fn generate(board: &Board, last_move: Option<Pos>) -> Vec<Pos> {
    let size = board.size();
    let mut seen = vec![false; size * size];
    let mut candidates = Vec::with_capacity(board.empty_count());

    if let Some(center) = last_move {
        for dr in -NEIGHBORHOOD_RADIUS..=NEIGHBORHOOD_RADIUS {
            for dc in -NEIGHBORHOOD_RADIUS..=NEIGHBORHOOD_RADIUS {
                let Some(pos) = center.offset(dr, dc, 1, size) else {
                    continue;
                };
                let idx = pos.row * size + pos.col;
                if seen[idx] || !board.is_empty_at(pos) {
                    continue;
                }
                seen[idx] = true;
                candidates.push(Candidate {
                    pos,
                    priority: dr.unsigned_abs() + dc.unsigned_abs(),
                });
            }
        }
    }

    for pos in board.positions() {
        let idx = pos.row * size + pos.col;
        if !seen[idx] && board.is_empty_at(pos) {
            seen[idx] = true;
            candidates.push(Candidate {
                pos,
                priority: FAR_PRIORITY,
            });
        }
    }

    // Stable sort keeps discovery order among equal priorities
    candidates.sort_by_key(|c| c.priority);
    candidates.into_iter().map(|c| c.pos).collect()
}
