//! Board rendering for the Othello GUI

use crate::{Board, Cell, Pos, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

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
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any.
    ///
    /// Clicks are reported only when `interactive` is set; legality is left
    /// to the turn controller. `legal_moves` only drives the hover and hint
    /// markers.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        legal_moves: &[Pos],
        last_move: Option<Pos>,
        interactive: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);
        self.draw_disks(&painter, board);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if interactive {
            for &pos in legal_moves {
                self.draw_legal_hint(&painter, pos);
            }
        }

        let mut clicked_pos = None;

        if interactive {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(board_pos) = self.screen_to_board(pointer_pos) {
                    let is_legal = legal_moves.contains(&board_pos);
                    self.draw_hover_preview(&painter, board_pos, is_legal);

                    if response.clicked() {
                        clicked_pos = Some(board_pos);
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw the lines between the 8x8 cells
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = BOARD_SIZE as f32 * self.cell_size;

        for i in 0..=BOARD_SIZE {
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

    /// Dots on the grid intersections at (2,2), (2,6), (6,2), (6,6)
    fn draw_star_points(&self, painter: &Painter) {
        for (row, col) in STAR_POINTS {
            let x = self.board_rect.min.x + BOARD_MARGIN + col as f32 * self.cell_size;
            let y = self.board_rect.min.y + BOARD_MARGIN + row as f32 * self.cell_size;
            painter.circle_filled(Pos2::new(x, y), STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Draw coordinate labels (a-h, 1-8)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for i in 0..BOARD_SIZE {
            let center = BOARD_MARGIN + (i as f32 + 0.5) * self.cell_size;

            let letter = (b'a' + i as u8) as char;
            let pos = Pos2::new(self.board_rect.min.x + center, self.board_rect.min.y + BOARD_MARGIN * 0.5);
            painter.text(pos, egui::Align2::CENTER_CENTER, letter, font.clone(), LABEL_COLOR);

            let pos = Pos2::new(self.board_rect.min.x + BOARD_MARGIN * 0.5, self.board_rect.min.y + center);
            painter.text(pos, egui::Align2::CENTER_CENTER, format!("{}", i + 1), font.clone(), LABEL_COLOR);
        }
    }

    /// Draw all placed disks
    fn draw_disks(&self, painter: &Painter, board: &Board) {
        for cell in [Cell::Black, Cell::White] {
            let Some(disks) = board.disks(cell) else {
                continue;
            };
            for pos in disks.iter_ones() {
                self.draw_disk(painter, pos, cell);
            }
        }
    }

    /// Draw a single disk with a drop shadow
    fn draw_disk(&self, painter: &Painter, pos: Pos, cell: Cell) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * DISK_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match cell {
            Cell::Black => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 60));
                painter.circle_filled(center, radius, BLACK_DISK);

                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(center + highlight_offset, radius * 0.2, BLACK_DISK_HIGHLIGHT);
            }
            Cell::White => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 40));
                painter.circle_filled(center, radius, WHITE_DISK);
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, WHITE_DISK_SHADOW));
            }
            Cell::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    fn draw_legal_hint(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, self.cell_size * LEGAL_DOT_RADIUS_RATIO, legal_move_dot());
    }

    /// Ghost disk under the pointer: translucent black when legal, red otherwise
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, is_legal: bool) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * DISK_RADIUS_RATIO;

        let color = if is_legal {
            Color32::from_rgba_unmultiplied(20, 20, 20, 110)
        } else {
            hover_invalid()
        };

        painter.circle_filled(center, radius, color);
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        Pos::try_new(row, col)
    }

    /// Center of the cell at `pos` in screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + (pos.col as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + (pos.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}
