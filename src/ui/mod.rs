//! GUI module for the Gomoku game
//!
//! Native desktop front end built on egui/eframe. AI moves run on a worker
//! thread against a copy of the board, so the UI thread is the only writer.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::GomokuApp;
pub use game_state::{GameMode, GameResult, GameState};
