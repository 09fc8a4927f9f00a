//! Exhaustive check that the engine never loses as O
//!
//! Every sequence of X moves is played out; O always answers with the
//! engine's move. X moves first from an empty board.

use tracing::{info, warn};

use crate::engine::AIEngine;
use crate::game::{Game, Transition};
use crate::rules::GameOutcome;

/// Finished games by outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VerifyReport {
    pub games: u64,
    pub x_wins: u64,
    pub o_wins: u64,
    pub ties: u64,
}

impl VerifyReport {
    fn record(&mut self, outcome: GameOutcome) {
        self.games += 1;
        match outcome {
            GameOutcome::Won(crate::Mark::X) => self.x_wins += 1,
            GameOutcome::Won(crate::Mark::O) => self.o_wins += 1,
            GameOutcome::Tie => self.ties += 1,
            GameOutcome::InProgress => {}
        }
    }

    #[inline]
    pub fn engine_never_loses(&self) -> bool {
        self.x_wins == 0
    }
}

/// Play all X strategies against `engine`.
pub fn exhaustive_check(engine: &mut AIEngine) -> VerifyReport {
    let mut report = VerifyReport::default();
    explore(&Game::new(), engine, &mut report);
    info!(
        games = report.games,
        x_wins = report.x_wins,
        o_wins = report.o_wins,
        ties = report.ties,
        "exhaustive check finished"
    );
    report
}

fn explore(game: &Game, engine: &mut AIEngine, report: &mut VerifyReport) {
    for index in game.board().empty_cells() {
        let mut next = game.clone();
        match next.play_human(index) {
            Ok(Transition::Continue) => {}
            Ok(Transition::Finished(outcome)) => {
                report.record(outcome);
                continue;
            }
            Err(err) => {
                warn!(%err, index, "empty cell rejected");
                continue;
            }
        }

        match next.play_ai(engine) {
            Ok(Some((_, Transition::Continue))) => explore(&next, engine, report),
            Ok(Some((_, Transition::Finished(outcome)))) => report.record(outcome),
            Ok(None) => warn!(board = %next.board(), "engine had no turn"),
            Err(err) => warn!(%err, board = %next.board(), "engine move rejected"),
        }
    }
}
