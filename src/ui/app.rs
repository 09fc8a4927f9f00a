//! Main application for the GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, TopBottomPanel};

use super::board_view::BoardView;
use super::game_state::GameState;
use super::theme::*;
use crate::config::GameConfig;
use crate::rules::GameOutcome;

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self {
            state: GameState::new(config),
            board_view: BoardView::default(),
        }
    }

    /// Title, status and score
    fn render_header(&mut self, ctx: &Context) {
        TopBottomPanel::top("header")
            .frame(Frame::new().fill(PANEL_BG).inner_margin(12.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("TIC TAC TOE").size(22.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new(self.state.game.score_text())
                            .size(14.0)
                            .color(TEXT_SECONDARY),
                    );
                });
            });
    }

    /// Status line, reset button and error message
    fn render_footer(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("footer")
            .frame(Frame::new().fill(PANEL_BG).inner_margin(12.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    let thinking = self.state.ai_thinking_elapsed();
                    let (status, color) = if let Some(elapsed) = thinking {
                        (
                            format!("Player 2 is thinking... {:.1}s", elapsed.as_secs_f32()),
                            STATUS_THINKING,
                        )
                    } else {
                        let color = match self.state.game.outcome() {
                            GameOutcome::Won(_) => WIN_HIGHLIGHT,
                            GameOutcome::Tie => TEXT_SECONDARY,
                            GameOutcome::InProgress => TEXT_PRIMARY,
                        };
                        (self.state.game.status_text(), color)
                    };
                    ui.label(RichText::new(status).size(16.0).color(color));

                    if let Some(msg) = &self.state.message {
                        ui.label(RichText::new(msg).size(11.0).color(STATUS_ERROR));
                    }

                    ui.add_space(8.0);
                    let reset = Frame::new()
                        .fill(egui::Color32::from_rgb(50, 53, 58))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(8.0)
                        .show(ui, |ui| {
                            ui.add(
                                egui::Label::new(RichText::new("RESET").size(13.0).color(TEXT_PRIMARY))
                                    .sense(egui::Sense::click()),
                            )
                        })
                        .inner;
                    if reset.clicked() {
                        self.state.reset();
                    }

                    if let Some(result) = &self.state.last_ai_result {
                        ui.add_space(4.0);
                        ui.label(
                            RichText::new(format!(
                                "score {} · {} nodes · {}ms",
                                result.score, result.nodes, result.time_ms
                            ))
                            .size(10.0)
                            .color(TEXT_MUTED),
                        );
                    }
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(PANEL_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    let accepts_input = !self.state.is_ai_thinking() && !self.state.game.is_over();
                    let clicked = self.board_view.show(
                        ui,
                        self.state.game.board(),
                        self.state.game.winning_line(),
                        accepts_input,
                    );

                    if let Some(index) = clicked {
                        if let Err(err) = self.state.try_place(index) {
                            tracing::debug!(%err, index, "click ignored");
                        }
                    }
                });
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        // N - New game
        if ctx.input(|i| i.key_pressed(egui::Key::N)) {
            self.state.reset();
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // Apply a finished AI move once its delay is over
        self.state.check_ai_result();

        if self.state.game.is_ai_turn() && !self.state.is_ai_thinking() {
            self.state.start_ai_thinking();
        }

        self.render_header(ctx);
        self.render_footer(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
