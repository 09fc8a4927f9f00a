//! Board structure with placement and backtracking

use std::fmt;
use std::str::FromStr;

use super::{Cell, Mark, Move, BOARD_SIZE, TOTAL_CELLS};
use crate::error::{MoveError, ParseBoardError};
use crate::rules::{outcome, GameOutcome};

/// Game board: nine cells in row-major order.
///
/// The board is a plain value. Search works on its own copy and restores
/// every cell it touches before returning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; TOTAL_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; TOTAL_CELLS],
        }
    }

    /// Build a board directly from its cells (no reachability check)
    pub fn from_cells(cells: [Cell; TOTAL_CELLS]) -> Self {
        Self { cells }
    }

    #[inline]
    pub fn cells(&self) -> &[Cell; TOTAL_CELLS] {
        &self.cells
    }

    /// Get cell at index. Out-of-range indices read as empty.
    #[inline]
    pub fn get(&self, index: Move) -> Cell {
        self.cells.get(index).copied().unwrap_or(Cell::Empty)
    }

    /// Check if the cell at index is empty
    #[inline]
    pub fn is_empty(&self, index: Move) -> bool {
        self.cells.get(index) == Some(&Cell::Empty)
    }

    /// Place a mark after validating the move.
    ///
    /// Rejects out-of-range indices, occupied cells and boards whose game is
    /// already decided. On error the board is left untouched.
    pub fn place(&mut self, index: Move, mark: Mark) -> Result<(), MoveError> {
        if index >= TOTAL_CELLS {
            return Err(MoveError::OutOfRange { index });
        }
        if outcome(self, self.move_count()) != GameOutcome::InProgress {
            return Err(MoveError::GameOver);
        }
        if self.cells[index] != Cell::Empty {
            return Err(MoveError::Occupied { index });
        }
        self.cells[index] = mark.to_cell();
        Ok(())
    }

    /// Place a mark without validation.
    /// Use `place` for game moves; the caller guarantees `index` is in range.
    #[inline]
    pub fn place_mark(&mut self, index: Move, mark: Mark) {
        self.cells[index] = mark.to_cell();
    }

    /// Clear a cell. Backtracking only; `index` must be in range.
    #[inline]
    pub fn undo(&mut self, index: Move) {
        self.cells[index] = Cell::Empty;
    }

    /// Indices of all empty cells, ascending
    pub fn empty_cells(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Number of marks of one kind
    #[inline]
    pub fn count(&self, mark: Mark) -> usize {
        let cell = mark.to_cell();
        self.cells.iter().filter(|c| **c == cell).count()
    }

    /// Total marks on board
    #[inline]
    pub fn move_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|c| *c == Cell::Empty)
    }

    /// X moves first, so X leads O by zero or one mark.
    pub fn has_valid_counts(&self) -> bool {
        let x = self.count(Mark::X);
        let o = self.count(Mark::O);
        x == o || x == o + 1
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..BOARD_SIZE {
                write!(f, "{}", self.cells[row * BOARD_SIZE + col].to_char())?;
            }
        }
        Ok(())
    }
}

/// Parses nine cell characters (`X`, `O`, `.`, `_` or space for empty).
/// Row separators `|`, `/` and newlines are skipped.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; TOTAL_CELLS];
        let mut count = 0;

        for (position, character) in s.chars().enumerate() {
            if character == '|' || character == '/' || character == '\n' {
                continue;
            }
            let cell = Cell::from_char(character).ok_or_else(|| {
                ParseBoardError::InvalidCharacter {
                    character,
                    position,
                    context: s.to_string(),
                }
            })?;
            if count < TOTAL_CELLS {
                cells[count] = cell;
            }
            count += 1;
        }

        if count != TOTAL_CELLS {
            return Err(ParseBoardError::InvalidLength {
                expected: TOTAL_CELLS,
                got: count,
                context: s.to_string(),
            });
        }

        Ok(Self { cells })
    }
}
