//! Game rules for standard Gomoku
//!
//! Five or more in a row wins; a full board with no five is a tie.
//! There are no captures and no forbidden moves.

pub mod win;

// Re-exports for convenient access
pub use win::{
    check_winner, find_five_positions, has_five_at_pos, is_game_over, is_valid_move,
};
