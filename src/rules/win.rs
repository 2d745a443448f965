//! Win condition checking for Caro
//!
//! A move wins when it completes five or more identical marks in a row
//! horizontally, vertically or along either diagonal. Overlines count.

use crate::board::{Board, Mark, Pos, DIRECTIONS};

/// Cells scanned on each side of the origin; enough to see any five through it.
const REACH: isize = 4;

/// Fast five-in-a-row check through a specific position.
///
/// Only checks the 4 orientations through `pos`. No allocation.
/// Returns false for an empty or off-board position.
#[inline]
pub fn has_winning_line_through(board: &Board, pos: Pos) -> bool {
    let Some(mark) = board.cell(pos).and_then(|c| c.mark()) else {
        return false;
    };

    DIRECTIONS.iter().any(|&(dr, dc)| {
        1 + run_length(board, pos, -dr, -dc, mark) + run_length(board, pos, dr, dc, mark) >= 5
    })
}

/// Same-mark cells following `pos` along `(dr, dc)`, at most `REACH`.
#[inline]
fn run_length(board: &Board, pos: Pos, dr: isize, dc: isize, mark: Mark) -> usize {
    (1..=REACH)
        .map_while(|k| pos.offset(dr, dc, k, board.size()))
        .take_while(|&p| board.get(p).holds(mark))
        .count()
}

/// The five cells of a winning run through `pos`, ordered along the line.
///
/// Returns an empty vector if `pos` is not part of a five. When the run is
/// longer than five, the first five cells of the scanned run are returned.
pub fn winning_line(board: &Board, pos: Pos) -> Vec<Pos> {
    let Some(mark) = board.cell(pos).and_then(|c| c.mark()) else {
        return Vec::new();
    };
    let size = board.size();

    for &(dr, dc) in &DIRECTIONS {
        let mut line = vec![pos];

        // Extend in negative direction first
        for k in 1..=REACH {
            match pos.offset(-dr, -dc, k, size) {
                Some(prev) if board.get(prev).holds(mark) => line.insert(0, prev),
                _ => break,
            }
        }

        // Extend in positive direction
        for k in 1..=REACH {
            match pos.offset(dr, dc, k, size) {
                Some(next) if board.get(next).holds(mark) => line.push(next),
                _ => break,
            }
        }

        if line.len() >= 5 {
            line.truncate(5);
            return line;
        }
    }

    Vec::new()
}

/// Scan the whole board for a five.
///
/// Returns the winning mark and its line, checking cells in row-major order.
pub fn find_winner(board: &Board) -> Option<(Mark, Vec<Pos>)> {
    board.marks().find_map(|(pos, mark)| {
        let line = winning_line(board, pos);
        (!line.is_empty()).then_some((mark, line))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use proptest::prelude::*;

    fn board_with(size: usize, cells: &[(usize, usize)], mark: Mark) -> Board {
        let mut board = Board::with_size(size).unwrap();
        for &(r, c) in cells {
            board.place(Pos::new(r, c), mark);
        }
        board
    }

    #[test]
    fn test_five_horizontal_at_edge() {
        let cells: Vec<_> = (0..5).map(|c| (0, c)).collect();
        let board = board_with(15, &cells, Mark::X);

        assert!(has_winning_line_through(&board, Pos::new(0, 2)));
        assert_eq!(
            winning_line(&board, Pos::new(0, 2)),
            vec![
                Pos::new(0, 0),
                Pos::new(0, 1),
                Pos::new(0, 2),
                Pos::new(0, 3),
                Pos::new(0, 4)
            ]
        );
    }

    #[test]
    fn test_five_vertical() {
        let cells: Vec<_> = (3..8).map(|r| (r, 9)).collect();
        let board = board_with(15, &cells, Mark::O);
        for r in 3..8 {
            assert!(has_winning_line_through(&board, Pos::new(r, 9)));
        }
        assert_eq!(winning_line(&board, Pos::new(7, 9))[0], Pos::new(3, 9));
    }

    #[test]
    fn test_five_diagonal_se() {
        let cells: Vec<_> = (0..5).map(|i| (10 + i, 10 + i)).collect();
        let board = board_with(15, &cells, Mark::X);
        assert!(has_winning_line_through(&board, Pos::new(14, 14)));
        assert_eq!(winning_line(&board, Pos::new(14, 14)).len(), 5);
    }

    #[test]
    fn test_five_diagonal_sw() {
        // Diagonal from (4, 8) to (8, 4)
        let cells: Vec<_> = (0..5).map(|i| (4 + i, 8 - i)).collect();
        let board = board_with(15, &cells, Mark::O);
        assert!(has_winning_line_through(&board, Pos::new(6, 6)));
        assert_eq!(
            winning_line(&board, Pos::new(6, 6)),
            vec![
                Pos::new(4, 8),
                Pos::new(5, 7),
                Pos::new(6, 6),
                Pos::new(7, 5),
                Pos::new(8, 4)
            ]
        );
    }

    #[test]
    fn test_crossing_fives_report_column() {
        // Row 6 and column 6 both hold five X through (6, 6)
        let mut cells: Vec<_> = (4..9).map(|c| (6, c)).collect();
        cells.extend((2..7).map(|r| (r, 6)));
        let board = board_with(15, &cells, Mark::X);

        let column: Vec<Pos> = (2..7).map(|r| Pos::new(r, 6)).collect();
        assert_eq!(winning_line(&board, Pos::new(6, 6)), column);
        assert_eq!(find_winner(&board), Some((Mark::X, column)));
    }

    #[test]
    fn test_four_is_not_a_win() {
        let cells: Vec<_> = (0..4).map(|c| (9, c)).collect();
        let board = board_with(15, &cells, Mark::X);
        assert!(!has_winning_line_through(&board, Pos::new(9, 3)));
        assert!(winning_line(&board, Pos::new(9, 3)).is_empty());
    }

    #[test]
    fn test_overline_wins_with_first_five() {
        let cells: Vec<_> = (2..9).map(|c| (5, c)).collect();
        let board = board_with(15, &cells, Mark::X);
        assert!(has_winning_line_through(&board, Pos::new(5, 8)));

        // Scan reaches four cells back from the origin
        let line = winning_line(&board, Pos::new(5, 8));
        assert_eq!(line.first(), Some(&Pos::new(5, 4)));
        assert_eq!(line.last(), Some(&Pos::new(5, 8)));
    }

    #[test]
    fn test_mixed_marks_break_run() {
        let board: Board = "XXOXX\n.....\n.....\n.....\n.....".parse().unwrap();
        assert!(!has_winning_line_through(&board, Pos::new(0, 0)));
        assert!(!has_winning_line_through(&board, Pos::new(0, 4)));
    }

    #[test]
    fn test_empty_or_off_board_origin() {
        let board = Board::new();
        assert!(!has_winning_line_through(&board, Pos::new(7, 7)));
        assert!(!has_winning_line_through(&board, Pos::new(15, 0)));
        assert!(winning_line(&board, Pos::new(99, 99)).is_empty());
    }

    #[test]
    fn test_find_winner() {
        let mut board = board_with(15, &[(1, 1), (2, 2), (3, 3), (4, 4)], Mark::O);
        assert_eq!(find_winner(&board), None);

        board.place(Pos::new(5, 5), Mark::O);
        let (mark, line) = find_winner(&board).unwrap();
        assert_eq!(mark, Mark::O);
        assert_eq!(line.len(), 5);
    }

    /// Brute-force reference: longest same-mark run through `pos` per direction.
    fn oracle_has_five(board: &Board, pos: Pos) -> bool {
        let Some(mark) = board.get(pos).mark() else {
            return false;
        };
        DIRECTIONS.iter().any(|&(dr, dc)| {
            let mut count = 1;
            let mut k = 1;
            while let Some(p) = pos.offset(dr, dc, k, board.size()) {
                if board.get(p) != Cell::Occupied(mark) {
                    break;
                }
                count += 1;
                k += 1;
            }
            k = 1;
            while let Some(p) = pos.offset(-dr, -dc, k, board.size()) {
                if board.get(p) != Cell::Occupied(mark) {
                    break;
                }
                count += 1;
                k += 1;
            }
            count >= 5
        })
    }

    fn arb_board() -> impl Strategy<Value = Board> {
        (5usize..10).prop_flat_map(|size| {
            prop::collection::vec(0u8..3, size * size).prop_map(move |cells| {
                let rows = cells
                    .chunks(size)
                    .map(|row| {
                        row.iter()
                            .map(|&v| match v {
                                0 => Cell::Empty,
                                1 => Cell::Occupied(Mark::X),
                                _ => Cell::Occupied(Mark::O),
                            })
                            .collect()
                    })
                    .collect();
                Board::from_rows(rows).unwrap()
            })
        })
    }

    proptest! {
        #[test]
        fn prop_detector_matches_oracle(board in arb_board()) {
            for pos in board.positions() {
                prop_assert_eq!(has_winning_line_through(&board, pos), oracle_has_five(&board, pos));
            }
        }

        #[test]
        fn prop_winning_line_is_five_collinear_cells(board in arb_board()) {
            for pos in board.positions() {
                let line = winning_line(&board, pos);
                if !has_winning_line_through(&board, pos) {
                    prop_assert!(line.is_empty());
                    continue;
                }

                prop_assert_eq!(line.len(), 5);
                prop_assert!(line.contains(&pos));
                let mark = board.get(pos);
                prop_assert!(line.iter().all(|&p| board.get(p) == mark));

                let dr = line[1].row as isize - line[0].row as isize;
                let dc = line[1].col as isize - line[0].col as isize;
                prop_assert!(dr.abs() <= 1 && dc.abs() <= 1 && (dr, dc) != (0, 0));
                for w in line.windows(2) {
                    prop_assert_eq!(w[1].row as isize - w[0].row as isize, dr);
                    prop_assert_eq!(w[1].col as isize - w[0].col as isize, dc);
                }
            }
        }
    }
}
