//! Search module for the tic-tac-toe AI
//!
//! Contains:
//! - Exhaustive minimax with depth-adjusted scores

pub mod minimax;

pub use minimax::{best_move, SearchResult, Searcher, WIN_SCORE};
