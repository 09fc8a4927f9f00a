//! Exhaustive minimax search
//!
//! Scores are always from O's point of view: O (the engine's side) maximizes,
//! X minimizes. A win for O found `depth` plies below the root scores
//! `10 - depth`, a win for X scores `-10 + depth`, a full board scores 0.
//! The depth term makes the search prefer quick wins and slow losses.
//!
//! Candidate moves are tried in ascending index order and only a strictly
//! better score replaces the current best, so among equal scores the lowest
//! index wins. The result is fully deterministic.
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Board, Mark};
//! use tictactoe::search::Searcher;
//!
//! let mut searcher = Searcher::new();
//! let board: Board = "XX./OO./X..".parse().unwrap();
//!
//! let result = searcher.search(&board, Mark::O);
//! assert_eq!(result.best_move, Some(5));
//! assert_eq!(result.score, 9);
//! ```

use crate::board::{Board, Mark, Move};
use crate::rules::has_line;

/// Score of a win at depth 0
pub const WIN_SCORE: i32 = 10;

/// Search result containing the chosen move and its minimax score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found; `None` when the board was already terminal
    pub best_move: Option<Move>,
    /// Minimax score of the best move, from O's point of view
    pub score: i32,
    /// Total nodes visited
    pub nodes: u64,
}

/// Minimax searcher with node counting.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Search a private copy of `board` for the best move of `to_move`.
    #[must_use]
    pub fn search(&mut self, board: &Board, to_move: Mark) -> SearchResult {
        let mut work_board = *board;
        let result = self.search_at(&mut work_board, to_move, 0);
        debug_assert_eq!(work_board, *board, "search must restore the board");
        result
    }

    /// Search `board` in place starting at `depth`.
    ///
    /// Every placement made during the search is undone before returning,
    /// so `board` is bit-for-bit unchanged afterwards.
    #[must_use]
    pub fn search_at(&mut self, board: &mut Board, to_move: Mark, depth: i32) -> SearchResult {
        self.nodes = 0;
        let (best_move, score) = self.minimax(board, to_move, depth);
        SearchResult {
            best_move,
            score,
            nodes: self.nodes,
        }
    }

    /// Nodes visited by the last search
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    fn minimax(&mut self, board: &mut Board, to_move: Mark, depth: i32) -> (Option<Move>, i32) {
        self.nodes += 1;

        if has_line(board, Mark::X) {
            return (None, -WIN_SCORE + depth);
        }
        if has_line(board, Mark::O) {
            return (None, WIN_SCORE - depth);
        }

        let moves = board.empty_cells();
        if moves.is_empty() {
            return (None, 0);
        }

        let mut best: Option<(Move, i32)> = None;
        for index in moves {
            board.place_mark(index, to_move);
            let (_, score) = self.minimax(board, to_move.opponent(), depth + 1);
            board.undo(index);

            let improves = match best {
                None => true,
                Some((_, best_score)) => match to_move {
                    Mark::O => score > best_score,
                    Mark::X => score < best_score,
                },
            };
            if improves {
                best = Some((index, score));
            }
        }

        match best {
            Some((index, score)) => (Some(index), score),
            None => (None, 0),
        }
    }
}

/// Best move for `to_move` on `board`, searching from `depth`.
///
/// `board` is borrowed mutably for the duration of the search and restored
/// before return.
#[must_use]
pub fn best_move(board: &mut Board, to_move: Mark, depth: i32) -> SearchResult {
    Searcher::new().search_at(board, to_move, depth)
}
