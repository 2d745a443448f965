//! Theme constants for the Caro GUI

use egui::Color32;

use crate::Mark;

// Board colors - paper grid
pub const BOARD_BG: Color32 = Color32::from_rgb(245, 240, 225);
pub const GRID_LINE: Color32 = Color32::from_rgb(150, 140, 120);

// Marks
pub const X_MARK: Color32 = Color32::from_rgb(200, 45, 45);
pub const O_MARK: Color32 = Color32::from_rgb(40, 90, 200);
pub const SUGGESTION: Color32 = Color32::from_rgb(120, 170, 120);

// Markers
pub const LAST_MOVE_FILL: Color32 = Color32::from_rgb(250, 225, 150);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 180, 50);

pub fn mark_color(mark: Mark) -> Color32 {
    match mark {
        Mark::X => X_MARK,
        Mark::O => O_MARK,
    }
}

// Functions for colors that can't be const
pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 90)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 70)
}

// Panel colors - dark theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_BUSY: Color32 = Color32::from_rgb(255, 180, 50);
pub const STATUS_WARN: Color32 = Color32::from_rgb(80, 60, 30);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const MARK_RADIUS_RATIO: f32 = 0.36;
pub const MARK_STROKE_RATIO: f32 = 0.09;
