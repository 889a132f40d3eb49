//! Theme constants for the Gomoku GUI

use egui::Color32;

// Board colors, soft pink wood
pub const BOARD_BG: Color32 = Color32::from_rgb(255, 230, 255);
pub const GRID_LINE: Color32 = Color32::from_rgb(70, 50, 70);
pub const STAR_POINT: Color32 = Color32::from_rgb(60, 40, 60);

// Stones
pub const BLACK_STONE: Color32 = Color32::from_rgb(25, 25, 30);
pub const BLACK_STONE_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const WHITE_STONE: Color32 = Color32::from_rgb(250, 250, 252);
pub const WHITE_STONE_SHADOW: Color32 = Color32::from_rgb(190, 190, 195);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);
pub const THREAT_OPEN: Color32 = Color32::from_rgb(255, 140, 0);
pub const THREAT_HALF: Color32 = Color32::from_rgb(240, 200, 60);

pub fn hover_preview(stone_black: bool) -> Color32 {
    if stone_black {
        Color32::from_rgba_unmultiplied(20, 20, 20, 80)
    } else {
        Color32::from_rgba_unmultiplied(240, 240, 240, 80)
    }
}

// Panels
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_BUSY: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 36.0;
pub const STONE_RADIUS_RATIO: f32 = 0.42;
pub const STAR_POINT_RADIUS: f32 = 4.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;

// Star points on a 15x15 board
pub const STAR_POINTS: [(u8, u8); 5] = [(3, 3), (3, 11), (7, 7), (11, 3), (11, 11)];
