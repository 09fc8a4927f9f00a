//! Game container: board, turn order and score tally
//!
//! All state changes go through `play`, `play_ai` and `reset`. The outcome is
//! recomputed from the board on every query and never stored.
//!
//! Turn protocol for one round against the engine:
//! 1. commit the human move with [`Game::play_human`]
//! 2. if [`Game::is_ai_turn`], ask the engine (optionally after a delay)
//! 3. commit its answer with [`Game::play`] or do 2 and 3 at once with
//!    [`Game::play_ai`]

use tracing::{debug, info, instrument};

use crate::board::{Board, Mark, Move};
use crate::engine::{AIEngine, MoveResult};
use crate::error::{MoveError, Result};
use crate::rules::{outcome, winning_line, GameOutcome};

/// Mark played by the engine
pub const AI_MARK: Mark = Mark::O;

/// Wins per side, kept across resets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreTally {
    x_wins: u32,
    o_wins: u32,
}

impl ScoreTally {
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Count a finished game. Ties and unfinished games change nothing.
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Won(Mark::X) => self.x_wins += 1,
            GameOutcome::Won(Mark::O) => self.o_wins += 1,
            GameOutcome::Tie | GameOutcome::InProgress => {}
        }
    }
}

/// What a committed move did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Game goes on; the other side moves next
    Continue,
    /// Game just ended with this outcome
    Finished(GameOutcome),
}

/// A running game plus the session's score
#[derive(Debug, Clone, Default)]
pub struct Game {
    board: Board,
    move_count: usize,
    tally: ScoreTally,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    #[inline]
    pub fn tally(&self) -> &ScoreTally {
        &self.tally
    }

    /// Side to move, from move count parity
    #[inline]
    pub fn current_turn(&self) -> Mark {
        Mark::for_move_count(self.move_count)
    }

    pub fn outcome(&self) -> GameOutcome {
        outcome(&self.board, self.move_count)
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// True when the engine should move next
    pub fn is_ai_turn(&self) -> bool {
        self.current_turn() == AI_MARK && !self.is_over()
    }

    /// Completed line, if any
    pub fn winning_line(&self) -> Option<[Move; 3]> {
        winning_line(&self.board).map(|(_, line)| line)
    }

    /// Commit a move for the side to move.
    ///
    /// On error nothing changes. A move that wins the game bumps the tally
    /// exactly once; later moves are rejected with `GameOver`.
    #[instrument(skip(self), fields(mark = ?self.current_turn()))]
    pub fn play(&mut self, index: Move) -> Result<Transition> {
        let mark = self.current_turn();
        if let Err(err) = self.board.place(index, mark) {
            debug!(%err, "move rejected");
            return Err(err);
        }
        self.move_count += 1;
        debug_assert_eq!(self.move_count, self.board.move_count());

        match self.outcome() {
            GameOutcome::InProgress => Ok(Transition::Continue),
            finished => {
                self.tally.record(finished);
                info!(outcome = ?finished, moves = self.move_count, "game over");
                Ok(Transition::Finished(finished))
            }
        }
    }

    /// Commit a human move; rejected while the engine is to move.
    pub fn play_human(&mut self, index: Move) -> Result<Transition> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if self.current_turn() == AI_MARK {
            return Err(MoveError::NotYourTurn);
        }
        self.play(index)
    }

    /// Ask `engine` for a move and commit it.
    ///
    /// Returns `Ok(None)` when it is not the engine's turn.
    pub fn play_ai(&mut self, engine: &mut AIEngine) -> Result<Option<(MoveResult, Transition)>> {
        if !self.is_ai_turn() {
            return Ok(None);
        }
        let result = engine.get_move_with_stats(&self.board, AI_MARK);
        let index = result.best_move.ok_or(MoveError::GameOver)?;
        let transition = self.play(index)?;
        Ok(Some((result, transition)))
    }

    /// Start a new game. The tally is kept.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.move_count = 0;
        info!(
            x_wins = self.tally.wins(Mark::X),
            o_wins = self.tally.wins(Mark::O),
            "new game"
        );
    }

    /// One-line status for display
    pub fn status_text(&self) -> String {
        match self.outcome() {
            GameOutcome::InProgress => format!("Turn: {}", self.current_turn().player_name()),
            GameOutcome::Won(mark) => format!("Winner: {}", mark.player_name()),
            GameOutcome::Tie => "Tie!".to_string(),
        }
    }

    /// Score line for display
    pub fn score_text(&self) -> String {
        format!(
            "{}  {} - {}  {}",
            Mark::X.player_name(),
            self.tally.wins(Mark::X),
            self.tally.wins(Mark::O),
            Mark::O.player_name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Play X/O alternately through `moves`, unwrapping every step
    fn played(moves: &[Move]) -> Game {
        let mut game = Game::new();
        for &m in moves {
            game.play(m).unwrap();
        }
        game
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new();
        assert_eq!(game.current_turn(), Mark::X);
        game.play(4).unwrap();
        assert_eq!(game.current_turn(), Mark::O);
        assert!(game.is_ai_turn());
    }

    #[test]
    fn test_win_updates_tally_once() {
        // X: 0 1 2, O: 3 4
        let mut game = played(&[0, 3, 1, 4]);
        assert_eq!(game.play(2), Ok(Transition::Finished(GameOutcome::Won(Mark::X))));
        assert_eq!(game.tally().wins(Mark::X), 1);
        assert_eq!(game.winning_line(), Some([0, 1, 2]));

        assert_eq!(game.play(5), Err(MoveError::GameOver));
        assert_eq!(game.tally().wins(Mark::X), 1);
        assert_eq!(game.tally().wins(Mark::O), 0);
    }

    #[test]
    fn test_tie_leaves_tally() {
        // X O X / X O O / O X X
        let mut game = played(&[0, 1, 2, 4, 3, 5, 7, 6]);
        assert_eq!(game.play(8), Ok(Transition::Finished(GameOutcome::Tie)));
        assert_eq!(*game.tally(), ScoreTally::default());
        assert_eq!(game.status_text(), "Tie!");
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut game = played(&[4]);
        let board = *game.board();

        assert_eq!(game.play(4), Err(MoveError::Occupied { index: 4 }));
        assert_eq!(game.play(12), Err(MoveError::OutOfRange { index: 12 }));
        assert_eq!(*game.board(), board);
        assert_eq!(game.move_count(), 1);
        assert_eq!(game.current_turn(), Mark::O);
    }

    #[test]
    fn test_human_cannot_move_for_ai() {
        let mut game = played(&[0]);
        assert_eq!(game.play_human(1), Err(MoveError::NotYourTurn));
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn test_play_ai_answers() {
        let mut game = Game::new();
        let mut engine = AIEngine::new();

        assert_eq!(game.play_ai(&mut engine), Ok(None));

        game.play_human(0).unwrap();
        let (result, transition) = game.play_ai(&mut engine).unwrap().unwrap();
        assert_eq!(transition, Transition::Continue);
        // Only the center holds against a corner opening
        assert_eq!(result.best_move, Some(4));
        assert_eq!(game.current_turn(), Mark::X);
    }

    #[test]
    fn test_reset_keeps_tally() {
        let mut game = played(&[0, 3, 1, 4, 2]);
        game.reset();

        assert!(game.board().is_board_empty());
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.current_turn(), Mark::X);
        assert_eq!(game.tally().wins(Mark::X), 1);
        assert_eq!(game.score_text(), "Player 1  1 - 0  Player 2");
    }

    #[test]
    fn test_human_always_opens() {
        let mut game = Game::new();
        assert_eq!(game.current_turn(), Mark::X);
        assert!(!game.is_ai_turn());

        // O won the last game, X still opens the next
        game = played(&[1, 0, 2, 4, 5, 8]);
        assert_eq!(game.outcome(), GameOutcome::Won(Mark::O));
        game.reset();
        assert_eq!(game.current_turn(), Mark::X);
        assert!(!game.is_ai_turn());
    }

    #[test]
    fn test_status_text() {
        let mut game = Game::new();
        assert_eq!(game.status_text(), "Turn: Player 1");
        game.play(0).unwrap();
        assert_eq!(game.status_text(), "Turn: Player 2");

        let game = played(&[0, 3, 1, 4, 8, 5]);
        assert_eq!(game.status_text(), "Winner: Player 2");
        assert_eq!(game.tally().wins(Mark::O), 1);
    }
}
