//! Theme constants for the GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const GRID_LINE: Color32 = Color32::from_rgb(160, 165, 175);

// Marks
pub const X_MARK: Color32 = Color32::from_rgb(80, 180, 250);
pub const O_MARK: Color32 = Color32::from_rgb(250, 200, 80);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Functions for colors that can't be const
pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 100)
}

// Panel colors
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_THINKING: Color32 = Color32::from_rgb(255, 180, 50);
pub const STATUS_ERROR: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 16.0;
pub const MARK_RADIUS_RATIO: f32 = 0.32;
pub const MARK_WIDTH: f32 = 6.0;
pub const GRID_LINE_WIDTH: f32 = 3.0;
pub const WIN_LINE_WIDTH: f32 = 8.0;
