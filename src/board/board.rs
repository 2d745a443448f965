//! Square board with empty-cell tracking

use std::fmt;
use std::str::FromStr;

use super::{Cell, Mark, Pos, DEFAULT_BOARD_SIZE};
use crate::error::EngineError;

/// Game board, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    /// Number of empty cells, kept in sync by `place`/`remove`
    empty: usize,
}

impl Board {
    /// Empty 15x15 board
    pub fn new() -> Self {
        Self::empty(DEFAULT_BOARD_SIZE)
    }

    /// Empty board of the given size.
    pub fn with_size(size: usize) -> Result<Self, EngineError> {
        if size == 0 {
            return Err(EngineError::InvalidBoardShape(
                "board must have at least one cell".to_string(),
            ));
        }
        Ok(Self::empty(size))
    }

    fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
            empty: size * size,
        }
    }

    /// Build a board from rows, rejecting empty, ragged or non-square input.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, EngineError> {
        let size = rows.len();
        if size == 0 {
            return Err(EngineError::InvalidBoardShape(
                "board has no rows".to_string(),
            ));
        }

        let mut cells = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(EngineError::InvalidBoardShape(format!(
                    "row {} has {} cells, expected {}",
                    i,
                    row.len(),
                    size
                )));
            }
            cells.extend(row);
        }

        let empty = cells.iter().filter(|c| c.is_empty()).count();
        Ok(Self { size, cells, empty })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Check that `pos` lies on the board.
    pub fn check_bounds(&self, pos: Pos) -> Result<(), EngineError> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(EngineError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                size: self.size,
            })
        }
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        debug_assert!(self.contains(pos));
        pos.row * self.size + pos.col
    }

    /// Get cell at position (position must be on the board)
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[self.index(pos)]
    }

    /// Get cell at position, `None` when off the board
    #[inline]
    pub fn cell(&self, pos: Pos) -> Option<Cell> {
        if self.contains(pos) {
            Some(self.get(pos))
        } else {
            None
        }
    }

    #[inline]
    pub fn is_empty_at(&self, pos: Pos) -> bool {
        self.get(pos).is_empty()
    }

    /// Place a mark without legality checks.
    /// Use `play` for moves coming from outside the engine.
    #[inline]
    pub fn place(&mut self, pos: Pos, mark: Mark) {
        let idx = self.index(pos);
        if self.cells[idx].is_empty() {
            self.empty -= 1;
        }
        self.cells[idx] = Cell::Occupied(mark);
    }

    /// Clear a cell
    #[inline]
    pub fn remove(&mut self, pos: Pos) {
        let idx = self.index(pos);
        if !self.cells[idx].is_empty() {
            self.empty += 1;
        }
        self.cells[idx] = Cell::Empty;
    }

    /// Place a mark after checking bounds and vacancy.
    pub fn play(&mut self, pos: Pos, mark: Mark) -> Result<(), EngineError> {
        self.check_bounds(pos)?;
        if !self.is_empty_at(pos) {
            return Err(EngineError::CellOccupied {
                row: pos.row,
                col: pos.col,
            });
        }
        self.place(pos, mark);
        Ok(())
    }

    #[inline]
    pub fn empty_count(&self) -> usize {
        self.empty
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.empty == 0
    }

    /// Check if no mark has been placed
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.empty == self.cells.len()
    }

    /// Center cell (lower-right of the middle on even sizes)
    #[inline]
    pub fn center(&self) -> Pos {
        Pos::new(self.size / 2, self.size / 2)
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        let size = self.size;
        (0..size * size).map(move |i| Pos::new(i / size, i % size))
    }

    /// Occupied positions with their marks, row-major
    pub fn marks(&self) -> impl Iterator<Item = (Pos, Mark)> + '_ {
        self.positions()
            .filter_map(move |pos| self.get(pos).mark().map(|m| (pos, m)))
    }

    /// Copy of the board with every X and O exchanged.
    pub fn with_marks_swapped(&self) -> Board {
        let cells = self
            .cells
            .iter()
            .map(|c| match c {
                Cell::Empty => Cell::Empty,
                Cell::Occupied(m) => Cell::Occupied(m.opponent()),
            })
            .collect();
        Board {
            size: self.size,
            cells,
            empty: self.empty,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses one row per line: `.` (or `_`, `-`) for empty, `X`/`O` for marks.
/// Blank lines and spaces are ignored.
impl FromStr for Board {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let row = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| match c {
                    '.' | '_' | '-' => Ok(Cell::Empty),
                    other => Mark::from_symbol(other).map(Cell::Occupied),
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        Board::from_rows(rows)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                write!(f, "{}", self.get(Pos::new(row, col)).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
