//! Board rendering for the Gomoku GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::rules;
use crate::{Board, Pos, Stone, Threat, BOARD_SIZE};

use super::theme::*;

/// What the board view should draw on top of the stones
#[derive(Default)]
pub struct Overlay<'a> {
    pub last_move: Option<Pos>,
    pub winning_line: Option<[Pos; 5]>,
    pub threats: &'a [(Stone, Threat)],
    /// Stone previewed under the cursor, `None` when input is disabled
    pub hover_stone: Option<Stone>,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    cell_size: f32,
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 36.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked empty cell, if any
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, overlay: &Overlay<'_>) -> Option<Pos> {
        let available_size = ui.available_size();
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / (BOARD_SIZE as f32 - 1.0);

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);

        for (stone, threat) in overlay.threats {
            self.draw_threat(&painter, *stone, threat);
        }
        self.draw_stones(&painter, board);

        if let Some(pos) = overlay.last_move {
            let center = self.board_to_screen(pos);
            painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
        }
        if let Some(line) = overlay.winning_line {
            self.draw_winning_line(&painter, &line);
        }

        let stone = overlay.hover_stone?;
        let board_pos = self.screen_to_board(response.hover_pos()?)?;
        if !rules::is_valid_move(board, board_pos) {
            return None;
        }

        let radius = self.cell_size * STONE_RADIUS_RATIO;
        painter.circle_filled(
            self.board_to_screen(board_pos),
            radius,
            hover_preview(stone == Stone::Black),
        );
        response.clicked().then_some(board_pos)
    }

    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = (BOARD_SIZE as f32 - 1.0) * self.cell_size;

        for i in 0..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_star_points(&self, painter: &Painter) {
        for (row, col) in STAR_POINTS {
            let center = self.board_to_screen(Pos::new(row, col));
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Numeric labels matching the text board, 0-14 on both axes
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for i in 0..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;
            let label = i.to_string();

            let top = Pos2::new(self.board_rect.min.x + offset, self.board_rect.min.y + 12.0);
            painter.text(top, egui::Align2::CENTER_CENTER, &label, font.clone(), GRID_LINE);

            let left = Pos2::new(self.board_rect.min.x + 12.0, self.board_rect.min.y + offset);
            painter.text(left, egui::Align2::CENTER_CENTER, &label, font.clone(), GRID_LINE);
        }
    }

    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for (bits, stone) in [(&board.black, Stone::Black), (&board.white, Stone::White)] {
            for pos in bits.iter_ones() {
                self.draw_stone(painter, pos, stone);
            }
        }
    }

    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match stone {
            Stone::Black => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.circle_filled(center, radius, BLACK_STONE);
                painter.circle_filled(
                    center + Vec2::new(-radius * 0.3, -radius * 0.3),
                    radius * 0.2,
                    BLACK_STONE_HIGHLIGHT,
                );
            }
            Stone::White => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, WHITE_STONE_SHADOW),
                );
            }
            Stone::Empty => {}
        }
    }

    /// Underline the run and ring its open ends
    fn draw_threat(&self, painter: &Painter, stone: Stone, threat: &Threat) {
        let color = if threat.open_ends == 2 {
            THREAT_OPEN
        } else {
            THREAT_HALF
        };
        let width = if stone == Stone::Black { 6.0 } else { 4.0 };

        let cells: Vec<Pos2> = threat.cells().map(|p| self.board_to_screen(p)).collect();
        if let (Some(&first), Some(&last)) = (cells.first(), cells.last()) {
            painter.line_segment([first, last], Stroke::new(width, color));
        }

        let radius = self.cell_size * STONE_RADIUS_RATIO * 0.5;
        for end in [threat.before(), threat.after()].into_iter().flatten() {
            painter.circle_stroke(self.board_to_screen(end), radius, Stroke::new(2.0, color));
        }
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; 5]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            painter.line_segment(
                [self.board_to_screen(pair[0]), self.board_to_screen(pair[1])],
                stroke,
            );
        }

        let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
        for pos in line {
            painter.circle_stroke(self.board_to_screen(*pos), radius, stroke);
        }
    }

    /// Convert screen coordinates to the nearest intersection
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).round() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).round() as i32;
        Pos::try_new(row, col)
    }

    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.col as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.row as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}
