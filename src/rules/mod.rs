//! Game rules for tic-tac-toe
//!
//! - Win lines (three in a row)
//! - Game outcome (in progress, won, tie)

pub mod win;

use crate::board::{Board, Mark, TOTAL_CELLS};

// Re-exports for convenient access
pub use win::{check_winner, find_line, has_line, winning_line, WIN_LINES};

/// Result of a game so far. Always derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    InProgress,
    Won(Mark),
    Tie,
}

impl GameOutcome {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }

    #[inline]
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameOutcome::Won(mark) => Some(mark),
            _ => None,
        }
    }
}

/// Outcome of `board` after `move_count` placements.
///
/// A line completed on the ninth move is a win, not a tie.
pub fn outcome(board: &Board, move_count: usize) -> GameOutcome {
    if let Some(mark) = check_winner(board) {
        GameOutcome::Won(mark)
    } else if move_count >= TOTAL_CELLS {
        GameOutcome::Tie
    } else {
        GameOutcome::InProgress
    }
}
