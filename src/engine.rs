//! AI engine wrapping the minimax search
//!
//! The engine is what the presentation layers talk to: it runs the search on
//! its own copy of the board and reports the chosen cell with a few
//! statistics for display and logging.
//!
//! # Example
//!
//! ```
//! use tictactoe::{AIEngine, Board, Mark};
//!
//! let mut engine = AIEngine::new();
//! let mut board = Board::new();
//! board.place(4, Mark::X).unwrap();
//!
//! let result = engine.get_move_with_stats(&board, Mark::O);
//! println!("Best move: {:?}", result.best_move);
//! println!("Score: {}", result.score);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use tracing::{debug, instrument};

use crate::board::{Board, Mark, Move};
use crate::search::{SearchResult, Searcher};

/// Result of a move search with statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Move>,
    /// Minimax score, from O's point of view
    pub score: i32,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// Main AI engine.
///
/// Stateless apart from the searcher's node counter, so one engine can be
/// reused across games.
#[derive(Debug, Default)]
pub struct AIEngine {
    searcher: Searcher,
}

impl AIEngine {
    /// Create a new AI engine.
    #[must_use]
    pub fn new() -> Self {
        Self {
            searcher: Searcher::new(),
        }
    }

    /// Get the best move for `mark` on `board`.
    ///
    /// Returns `None` if the board is already decided or full.
    ///
    /// # Example
    ///
    /// ```
    /// use tictactoe::{AIEngine, Board, Mark};
    ///
    /// let mut engine = AIEngine::new();
    /// let board: Board = "XX./.O./...".parse().unwrap();
    ///
    /// // O must block the top row
    /// assert_eq!(engine.get_move(&board, Mark::O), Some(2));
    /// ```
    #[must_use]
    pub fn get_move(&mut self, board: &Board, mark: Mark) -> Option<Move> {
        self.get_move_with_stats(board, mark).best_move
    }

    /// Get the best move with search statistics.
    #[must_use]
    #[instrument(skip(self, board), fields(moves = board.move_count()))]
    pub fn get_move_with_stats(&mut self, board: &Board, mark: Mark) -> MoveResult {
        let start = Instant::now();
        let result = self.searcher.search(board, mark);
        let result = MoveResult::from_search(result, start.elapsed().as_millis() as u64);

        debug!(
            best_move = ?result.best_move,
            score = result.score,
            nodes = result.nodes,
            time_ms = result.time_ms,
            "search finished"
        );
        result
    }
}
