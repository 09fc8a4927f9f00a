//! Terminal front end
//!
//! Cells are numbered 1-9 row by row. `r` starts a new game, `q` quits.

use std::io::{self, BufRead, Write};
use std::thread;

use tracing::{debug, warn};

use crate::board::{Board, Cell, BOARD_SIZE};
use crate::config::GameConfig;
use crate::engine::{AIEngine, MoveResult};
use crate::error::Result;
use crate::game::{Game, Transition};

/// Play until `q` or end of input.
pub fn run<R: BufRead, W: Write>(input: R, output: &mut W, config: &GameConfig) -> io::Result<()> {
    let mut game = Game::new();
    let mut engine = AIEngine::new();

    render(output, &game)?;
    for line in input.lines() {
        let line = line?;
        match line.trim() {
            "" => continue,
            "q" | "quit" => break,
            "r" | "reset" => game.reset(),
            other => match other.parse::<usize>() {
                Ok(n) if (1..=9).contains(&n) => {
                    if let Err(err) = game.play_human(n - 1) {
                        debug!(%err, "input ignored");
                        writeln!(output, "Invalid move: {err}")?;
                    }
                }
                _ => writeln!(output, "Enter 1-9, r or q")?,
            },
        }

        if game.is_ai_turn() {
            thread::sleep(config.ai_delay);
            let reply = game.play_ai(&mut engine);
            write_reply(output, reply)?;
        }
        render(output, &game)?;
    }
    Ok(())
}

/// Announce the engine's move, or why it made none
fn write_reply<W: Write>(output: &mut W, reply: Result<Option<(MoveResult, Transition)>>) -> io::Result<()> {
    match reply {
        Ok(Some((result, _))) => match result.best_move {
            Some(index) => writeln!(output, "Computer plays {}", index + 1),
            None => Ok(()),
        },
        Ok(None) => Ok(()),
        Err(err) => {
            warn!(%err, "AI move rejected");
            writeln!(output, "Computer could not move: {err}")
        }
    }
}

fn render<W: Write>(output: &mut W, game: &Game) -> io::Result<()> {
    writeln!(output)?;
    write_board(output, game.board())?;
    writeln!(output, "{}", game.status_text())?;
    writeln!(output, "{}", game.score_text())?;
    output.flush()
}

/// Board with empty cells shown as their 1-9 number
fn write_board<W: Write>(output: &mut W, board: &Board) -> io::Result<()> {
    for row in 0..BOARD_SIZE {
        let line: Vec<String> = (0..BOARD_SIZE)
            .map(|col| {
                let index = row * BOARD_SIZE + col;
                match board.get(index) {
                    Cell::Empty => (index + 1).to_string(),
                    cell => cell.to_char().to_string(),
                }
            })
            .collect();
        writeln!(output, " {}", line.join(" | "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MoveError;

    fn play(script: &str) -> String {
        let config = GameConfig::default().with_ai_delay_ms(0);
        let mut output = Vec::new();
        run(script.as_bytes(), &mut output, &config).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_computer_answers_center() {
        let out = play("5\nq\n");
        assert!(out.contains("Computer plays 1"));
        assert!(out.contains("Turn: Player 1"));
    }

    #[test]
    fn test_invalid_input_reported() {
        let out = play("5\n5\nx\n");
        assert!(out.contains("Invalid move"));
        assert!(out.contains("Enter 1-9, r or q"));
    }

    #[test]
    fn test_reset_clears_board() {
        let out = play("5\nr\n");
        let last_board = out.rsplit("\n\n").next().unwrap();
        assert!(last_board.contains(" 1 | 2 | 3"));
        assert!(last_board.contains(" 4 | 5 | 6"));
    }

    #[test]
    fn test_rejected_ai_move_reported() {
        let mut output = Vec::new();
        write_reply(&mut output, Err(MoveError::GameOver)).unwrap();
        let out = String::from_utf8(output).unwrap();
        assert!(out.contains("Computer could not move"));
        assert!(!out.contains("Computer plays"));
    }
}
