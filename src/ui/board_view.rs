//! Board rendering for the GUI

use crate::{Board, Cell, Move, Pos, BOARD_SIZE};
use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        winning_line: Option<[Move; 3]>,
        accepts_input: bool,
    ) -> Option<Move> {
        let available_size = ui.available_size();
        let board_size = (available_size.x.min(available_size.y) - 20.0).max(120.0);
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_marks(&painter, board);

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        if !accepts_input {
            return None;
        }

        let pointer_pos = response.hover_pos()?;
        let index = self.screen_to_board(pointer_pos)?.to_index();
        if board.get(index) != Cell::Empty {
            return None;
        }

        painter.rect_filled(self.cell_rect(index).shrink(4.0), CornerRadius::same(4), hover_valid());
        if response.clicked() {
            Some(index)
        } else {
            None
        }
    }

    /// Draw the two inner lines in each direction
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = BOARD_SIZE as f32 * self.cell_size;

        for i in 1..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for (index, cell) in board.cells().iter().enumerate() {
            let center = self.board_to_screen(Pos::from_index(index));
            let radius = self.cell_size * MARK_RADIUS_RATIO;

            match cell {
                Cell::X => {
                    let stroke = Stroke::new(MARK_WIDTH, X_MARK);
                    let d = Vec2::splat(radius * 0.8);
                    painter.line_segment([center - d, center + d], stroke);
                    painter.line_segment(
                        [center + Vec2::new(-d.x, d.y), center + Vec2::new(d.x, -d.y)],
                        stroke,
                    );
                }
                Cell::O => {
                    painter.circle_stroke(center, radius, Stroke::new(MARK_WIDTH, O_MARK));
                }
                Cell::Empty => {}
            }
        }
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &[Move; 3]) {
        let start = self.board_to_screen(Pos::from_index(line[0]));
        let end = self.board_to_screen(Pos::from_index(line[2]));
        painter.line_segment([start, end], Stroke::new(WIN_LINE_WIDTH, WIN_HIGHLIGHT));
    }

    fn cell_rect(&self, index: Move) -> Rect {
        Rect::from_center_size(
            self.board_to_screen(Pos::from_index(index)),
            Vec2::splat(self.cell_size),
        )
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Convert board position to the screen coordinates of the cell center
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + (pos.col as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + (pos.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> BoardView {
        BoardView {
            cell_size: 100.0,
            board_rect: Rect::from_min_size(Pos2::ZERO, Vec2::splat(300.0 + 2.0 * BOARD_MARGIN)),
        }
    }

    #[test]
    fn test_screen_board_roundtrip() {
        let view = view();
        for index in 0..9 {
            let pos = Pos::from_index(index);
            assert_eq!(view.screen_to_board(view.board_to_screen(pos)), Some(pos));
        }
    }

    #[test]
    fn test_outside_grid_is_none() {
        let view = view();
        assert_eq!(view.screen_to_board(Pos2::new(1.0, 1.0)), None);
    }
}
