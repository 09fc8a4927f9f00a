//! Tic-tac-toe with an unbeatable minimax opponent
//!
//! The human plays `X` and always moves first; the engine plays `O`.
//!
//! # Architecture
//!
//! - [`board`]: Board representation, placement and backtracking
//! - [`rules`]: Win lines and game outcome
//! - [`search`]: Exhaustive minimax with depth-adjusted scores
//! - [`engine`]: AI engine wrapping the search
//! - [`game`]: Game container with turn order and score tally
//! - [`console`], [`ui`]: terminal and egui front ends
//! - [`verify`]: exhaustive never-loses check
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{AIEngine, Game, GameOutcome};
//!
//! let mut game = Game::new();
//! let mut engine = AIEngine::new();
//!
//! // Human takes the center
//! game.play_human(4).unwrap();
//!
//! // Engine answers as O
//! if let Some((result, _)) = game.play_ai(&mut engine).unwrap() {
//!     println!("AI plays at {:?}", result.best_move);
//! }
//! assert_eq!(game.outcome(), GameOutcome::InProgress);
//! ```
//!
//! # Search
//!
//! The board has nine cells, so the search visits the whole game tree
//! without pruning. Scores are `10 - depth` for an `O` win, `depth - 10` for
//! an `X` win and `0` for a tie; ties between moves go to the lowest index.

pub mod board;
pub mod config;
pub mod console;
pub mod engine;
pub mod error;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;
pub mod verify;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Mark, Move, Pos, BOARD_SIZE, TOTAL_CELLS};
pub use engine::{AIEngine, MoveResult};
pub use error::{MoveError, ParseBoardError};
pub use game::{Game, ScoreTally, Transition};
pub use rules::GameOutcome;
