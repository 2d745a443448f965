//! Board rendering for the Caro GUI
//!
//! Caro is played inside the squares of the grid, so positions map to cell
//! centers rather than line intersections.

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{Board, Mark, Pos};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Cells per side of the board last drawn
    board_size: usize,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            board_size: 0,
            board_rect: Rect::NOTHING,
        }
    }
}

/// What to draw on top of the marks
pub struct Overlay<'a> {
    pub current_turn: Mark,
    pub last_move: Option<Pos>,
    pub suggested_move: Option<Pos>,
    pub winning_line: Option<&'a [Pos]>,
    pub accepts_input: bool,
}

impl BoardView {
    /// Render the board and return click position if any
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, overlay: &Overlay<'_>) -> Option<Pos> {
        let available_size = ui.available_size();

        let side = available_size.x.min(available_size.y) - 20.0;
        self.board_size = board.size();
        self.cell_size = (side - 2.0 * BOARD_MARGIN) / board.size() as f32;

        let (response, painter) = ui.allocate_painter(Vec2::new(side, side), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_coordinates(&painter);

        if let Some(pos) = overlay.last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        for (pos, mark) in board.marks() {
            self.draw_mark(&painter, pos, mark, mark_color(mark));
        }

        if let Some(line) = overlay.winning_line {
            self.draw_winning_line(&painter, line);
        }

        if let Some(pos) = overlay.suggested_move {
            self.draw_mark(&painter, pos, overlay.current_turn, SUGGESTION);
        }

        let mut clicked_pos = None;

        if overlay.accepts_input {
            if let Some(board_pos) = response.hover_pos().and_then(|p| self.screen_to_board(p)) {
                let is_valid = board.is_empty_at(board_pos);
                self.draw_hover_preview(&painter, board_pos, overlay.current_turn, is_valid);

                if response.clicked() && is_valid {
                    clicked_pos = Some(board_pos);
                }
            }
        }

        clicked_pos
    }

    /// Draw the N+1 lines bounding the N x N cells
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let extent = self.board_size as f32 * self.cell_size;

        for i in 0..=self.board_size {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + extent);
            painter.line_segment([start, end], stroke);

            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + extent, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Zero-based row and column numbers along the top and left edges
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(11.0);

        for i in 0..self.board_size {
            let center = self.board_to_screen(Pos::new(i, i));
            let label = i.to_string();

            let top = Pos2::new(center.x, self.board_rect.min.y + BOARD_MARGIN * 0.5);
            painter.text(top, egui::Align2::CENTER_CENTER, &label, font.clone(), GRID_LINE);

            let left = Pos2::new(self.board_rect.min.x + BOARD_MARGIN * 0.5, center.y);
            painter.text(left, egui::Align2::CENTER_CENTER, &label, font.clone(), GRID_LINE);
        }
    }

    /// X as two crossed strokes, O as a ring
    fn draw_mark(&self, painter: &Painter, pos: Pos, mark: Mark, color: Color32) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * MARK_RADIUS_RATIO;
        let stroke = Stroke::new((self.cell_size * MARK_STROKE_RATIO).max(1.5), color);

        match mark {
            Mark::X => {
                let d = Vec2::splat(radius * std::f32::consts::FRAC_1_SQRT_2);
                painter.line_segment([center - d, center + d], stroke);
                painter.line_segment([center + Vec2::new(-d.x, d.y), center + Vec2::new(d.x, -d.y)], stroke);
            }
            Mark::O => {
                painter.circle_stroke(center, radius * 0.8, stroke);
            }
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let rect = self.cell_rect(pos).shrink(1.0);
        painter.rect_filled(rect, CornerRadius::same(2), LAST_MOVE_FILL);
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(3.0, WIN_HIGHLIGHT);

        for pos in line {
            painter.rect_stroke(
                self.cell_rect(*pos).shrink(2.0),
                CornerRadius::same(3),
                stroke,
                egui::StrokeKind::Inside,
            );
        }

        if let (Some(first), Some(last)) = (line.first(), line.last()) {
            painter.line_segment([self.board_to_screen(*first), self.board_to_screen(*last)], stroke);
        }
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Mark, is_valid: bool) {
        if is_valid {
            self.draw_mark(painter, pos, turn, hover_valid());
        } else {
            painter.rect_filled(self.cell_rect(pos).shrink(1.0), CornerRadius::same(2), hover_invalid());
        }
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        Rect::from_center_size(self.board_to_screen(pos), Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor();
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor();

        let size = self.board_size as f32;
        if col >= 0.0 && col < size && row >= 0.0 && row < size {
            Some(Pos::new(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Center of the cell at `pos` in screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + (pos.col as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + (pos.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}
