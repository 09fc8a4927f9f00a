//! GUI module for the tic-tac-toe game
//!
//! A thin egui/eframe front end over [`crate::game::Game`].

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::TicTacToeApp;
pub use game_state::{AiState, GameState};
