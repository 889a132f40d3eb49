//! Board structure with scoped speculative placement

use std::fmt;
use std::ops::{Deref, DerefMut};

use super::bitboard::Bitboard;
use super::{Pos, Stone, BOARD_SIZE, TOTAL_CELLS};
use crate::error::{GameError, InvalidReason};
use crate::rules;

/// Game board: one bitboard per stone color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Black (`X`) stones bitboard
    pub black: Bitboard,
    /// White (`O`) stones bitboard
    pub white: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Place a stone for a real move.
    ///
    /// Rejects out-of-bounds coordinates, occupied cells and `Stone::Empty`,
    /// leaving the board untouched.
    pub fn place(&mut self, row: i32, col: i32, stone: Stone) -> Result<Pos, GameError> {
        let invalid = |reason| GameError::InvalidMove { row, col, reason };

        let pos = Pos::try_new(row, col).ok_or_else(|| invalid(InvalidReason::OutOfBounds))?;
        if stone == Stone::Empty {
            return Err(invalid(InvalidReason::EmptyStone));
        }
        if !self.is_empty(pos) {
            return Err(invalid(InvalidReason::Occupied));
        }

        self.place_stone(pos, stone);
        Ok(pos)
    }

    /// Set a stone without validation
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => {}
        }
    }

    /// Reset a cell to empty.
    ///
    /// Only meant for undoing a stone the same caller just set.
    #[inline]
    pub fn retract(&mut self, pos: Pos) {
        self.black.clear(pos);
        self.white.clear(pos);
    }

    /// Place a stone speculatively. The stone is retracted when the
    /// returned guard is dropped, on every exit path.
    #[inline]
    pub fn apply(&mut self, pos: Pos, stone: Stone) -> Placement<'_> {
        debug_assert!(self.is_empty(pos), "speculative move on occupied cell {:?}", pos);
        self.place_stone(pos, stone);
        Placement { board: self, pos }
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        }
    }

    /// Iterate empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..TOTAL_CELLS)
            .map(Pos::from_index)
            .filter(move |&pos| self.is_empty(pos))
    }

    /// First stone found with five in a row, if any
    #[inline]
    pub fn check_winner(&self) -> Option<Stone> {
        rules::check_winner(self)
    }

    /// Five winning positions, for highlighting
    pub fn winning_line(&self) -> Option<[Pos; 5]> {
        let winner = self.check_winner()?;
        rules::find_five_positions(self, winner)
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }

    /// Winner present or no empty cell left
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.check_winner().is_some() || self.is_full()
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Text rendering with row and column labels, two characters per cell
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..BOARD_SIZE {
            if col > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:>2}", col)?;
        }
        writeln!(f)?;

        for row in 0..BOARD_SIZE {
            write!(f, "{:>2} ", row)?;
            for col in 0..BOARD_SIZE {
                if col > 0 {
                    write!(f, " ")?;
                }
                let stone = self.get(Pos::new(row as u8, col as u8));
                write!(f, "{:<2}", stone.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A stone placed by [`Board::apply`]. Derefs to the board so recursion can
/// keep going through it; dropping it takes the stone back off.
pub struct Placement<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl Placement<'_> {
    /// Where the speculative stone sits
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.retract(self.pos);
    }
}
