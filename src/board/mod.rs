//! Board representation for Gomoku

pub mod bitboard;
pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use bitboard::Bitboard;
pub use board::{Board, Placement};

/// Board size (15x15)
pub const BOARD_SIZE: usize = 15;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 225

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Direction vectors for line scanning: vertical, horizontal, diagonal down, diagonal up
pub const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Stone colors
///
/// `White` is drawn as `O` and belongs to the minimax (maximizing) player.
/// `Black` is drawn as `X` and is shared by the human and the alpha-beta AI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Text symbol used by the board rendering
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Stone::Black => 'X',
            Stone::White => 'O',
            Stone::Empty => '.',
        }
    }

    /// Lowercase byte used in evaluation scan lines
    #[inline]
    pub(crate) fn pattern_byte(self) -> u8 {
        match self {
            Stone::Black => b'x',
            Stone::White => b'o',
            Stone::Empty => b'.',
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    /// Build a position from signed coordinates, `None` if off the board
    #[inline]
    pub fn try_new(row: i32, col: i32) -> Option<Self> {
        if Self::is_valid(row, col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Board center, where the opening stone goes
    #[inline]
    pub fn center() -> Self {
        let mid = (BOARD_SIZE / 2) as u8;
        Self::new(mid, mid)
    }

    /// Position `steps` cells away along `(dr, dc)`
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, steps: i32) -> Option<Self> {
        Self::try_new(
            i32::from(self.row) + dr * steps,
            i32::from(self.col) + dc * steps,
        )
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Manhattan distance to the board center
    #[inline]
    pub fn center_distance(self) -> i32 {
        let mid = (BOARD_SIZE / 2) as i32;
        (i32::from(self.row) - mid).abs() + (i32::from(self.col) - mid).abs()
    }

    /// True for the four literal board corners
    #[inline]
    pub fn is_corner(self) -> bool {
        let last = (BOARD_SIZE - 1) as u8;
        (self.row == 0 || self.row == last) && (self.col == 0 || self.col == last)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
