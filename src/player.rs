//! Player roles
//!
//! Three roles share two stone colors: the minimax AI plays `O` and is the
//! side every search maximizes for, while the alpha-beta AI and the human
//! both play `X`. Whose turn it is belongs to the session, not the board.

use crate::board::Stone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Minimax AI, the maximizing side
    Minimax,
    /// Alpha-beta AI
    AlphaBeta,
    /// Human at the keyboard or mouse
    Human,
}

impl Player {
    /// Order in which immediate wins are looked for
    pub const FORCED_ORDER: [Player; 3] = [Player::Minimax, Player::AlphaBeta, Player::Human];

    /// Stone this role places on the board
    #[inline]
    pub fn stone(self) -> Stone {
        match self {
            Player::Minimax => Stone::White,
            Player::AlphaBeta | Player::Human => Stone::Black,
        }
    }

    /// Short label for front ends and logs
    pub fn label(self) -> &'static str {
        match self {
            Player::Minimax => "Minimax",
            Player::AlphaBeta => "AlphaBeta",
            Player::Human => "Human",
        }
    }
}

/// Stone the search maximizes for
pub const MAX_STONE: Stone = Stone::White;
