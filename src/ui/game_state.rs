//! Game state management for the GUI

use crate::config::GameConfig;
use crate::error::MoveError;
use crate::game::{Game, Transition, AI_MARK};
use crate::{AIEngine, Move, MoveResult};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
        /// Search result held back until the delay has passed
        ready: Option<MoveResult>,
    },
}

/// Main game state
pub struct GameState {
    pub game: Game,
    pub ai_state: AiState,
    pub last_ai_result: Option<MoveResult>,
    pub message: Option<String>,
    config: GameConfig,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            game: Game::new(),
            ai_state: AiState::Idle,
            last_ai_result: None,
            message: None,
            config,
        }
    }

    /// New game; the score is kept and a pending AI move is dropped.
    pub fn reset(&mut self) {
        self.game.reset();
        self.ai_state = AiState::Idle;
        self.last_ai_result = None;
        self.message = None;
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to place the human's mark
    pub fn try_place(&mut self, index: Move) -> Result<(), MoveError> {
        if self.is_ai_thinking() {
            return Err(MoveError::NotYourTurn);
        }
        self.game.play_human(index)?;
        self.message = None;
        Ok(())
    }

    /// Start AI thinking
    pub fn start_ai_thinking(&mut self) {
        if !self.game.is_ai_turn() || self.is_ai_thinking() {
            return;
        }

        let board = *self.game.board();
        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::new();
            let result = engine.get_move_with_stats(&board, AI_MARK);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
            ready: None,
        };
    }

    /// Collect the AI result and apply it once the delay has elapsed
    pub fn check_ai_result(&mut self) {
        let AiState::Thinking {
            receiver,
            start_time,
            ready,
        } = &mut self.ai_state
        else {
            return;
        };

        if ready.is_none() {
            match receiver.try_recv() {
                Ok(result) => *ready = Some(result),
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    warn!("AI worker stopped without a result");
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            }
        }

        if start_time.elapsed() < self.config.ai_delay {
            return;
        }

        let Some(result) = ready.take() else {
            return;
        };
        self.ai_state = AiState::Idle;
        self.last_ai_result = Some(result);

        match result.best_move.map(|index| self.game.play(index)) {
            Some(Ok(Transition::Finished(outcome))) => debug!(?outcome, "AI move ended the game"),
            Some(Ok(Transition::Continue)) => {}
            Some(Err(err)) => {
                warn!(%err, "AI move rejected");
                self.message = Some(format!("AI move rejected: {err}"));
            }
            None => self.message = Some("AI could not find a move".to_string()),
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    fn wait_for_ai(state: &mut GameState) {
        let deadline = Instant::now() + Duration::from_secs(10);
        while state.is_ai_thinking() && Instant::now() < deadline {
            state.check_ai_result();
            thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn test_ai_replies_after_human_move() {
        let mut state = GameState::new(GameConfig::default().with_ai_delay_ms(0));
        state.try_place(4).unwrap();
        state.start_ai_thinking();
        assert!(state.is_ai_thinking());

        wait_for_ai(&mut state);
        assert!(!state.is_ai_thinking());
        assert_eq!(state.game.move_count(), 2);
        assert_eq!(state.game.current_turn(), Mark::X);
        assert_eq!(state.last_ai_result.and_then(|r| r.best_move), Some(0));
    }

    #[test]
    fn test_ai_waits_for_delay() {
        let mut state = GameState::new(GameConfig::default().with_ai_delay_ms(200));
        state.try_place(4).unwrap();
        state.start_ai_thinking();

        state.check_ai_result();
        assert!(state.is_ai_thinking());
        assert!(state.ai_thinking_elapsed().is_some());
        assert_eq!(state.game.move_count(), 1);

        wait_for_ai(&mut state);
        assert_eq!(state.game.move_count(), 2);
        assert!(state.ai_thinking_elapsed().is_none());
    }

    #[test]
    fn test_human_blocked_while_thinking() {
        let mut state = GameState::new(GameConfig::default().with_ai_delay_ms(5_000));
        state.try_place(0).unwrap();
        state.start_ai_thinking();

        assert_eq!(state.try_place(1), Err(MoveError::NotYourTurn));
        assert_eq!(state.game.move_count(), 1);
    }

    #[test]
    fn test_reset_drops_pending_move() {
        let mut state = GameState::new(GameConfig::default().with_ai_delay_ms(5_000));
        state.try_place(0).unwrap();
        state.start_ai_thinking();

        state.reset();
        assert!(!state.is_ai_thinking());
        assert!(state.game.board().is_board_empty());
    }

    #[test]
    fn test_no_thinking_on_human_turn() {
        let mut state = GameState::new(GameConfig::default());
        state.start_ai_thinking();
        assert!(!state.is_ai_thinking());
    }
}
