//! Threat detection
//!
//! A threat is a run of two or more same-color stones with at least one
//! empty cell next to it, so it can still grow toward five. Threats are
//! recomputed from the board every time; nothing is cached.

use crate::board::{Board, Pos, Stone, DIRECTIONS};

/// Line orientation of a threat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Along a row
    Horizontal,
    /// Along a column
    Vertical,
    /// Top-left to bottom-right
    DiagonalDown,
    /// Top-right to bottom-left
    DiagonalUp,
}

impl Direction {
    /// Unit step `(dr, dc)` for this direction
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Vertical => (1, 0),
            Direction::Horizontal => (0, 1),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (1, -1),
        }
    }

    fn from_delta(delta: (i32, i32)) -> Self {
        match delta {
            (0, 1) => Direction::Horizontal,
            (1, 0) => Direction::Vertical,
            (1, 1) => Direction::DiagonalDown,
            _ => Direction::DiagonalUp,
        }
    }
}

/// An extendable run of stones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threat {
    pub direction: Direction,
    /// First stone of the run
    pub start: Pos,
    /// Number of consecutive stones (>= 2)
    pub length: u8,
    /// Empty in-bounds cells at the two ends (1 or 2)
    pub open_ends: u8,
}

impl Threat {
    /// Cell just before the run, if on the board
    #[inline]
    pub fn before(&self) -> Option<Pos> {
        let (dr, dc) = self.direction.delta();
        self.start.offset(dr, dc, -1)
    }

    /// Cell just after the run, if on the board
    #[inline]
    pub fn after(&self) -> Option<Pos> {
        let (dr, dc) = self.direction.delta();
        self.start.offset(dr, dc, i32::from(self.length))
    }

    /// Stones making up the run
    pub fn cells(&self) -> impl Iterator<Item = Pos> + '_ {
        let (dr, dc) = self.direction.delta();
        (0..i32::from(self.length)).filter_map(move |i| self.start.offset(dr, dc, i))
    }
}

/// Detect all threats for `stone`, most dangerous first.
///
/// Each run is reported once per direction: a cell whose predecessor in the
/// direction holds the same stone is not a run start and is skipped.
/// Sorted by length, then open ends, both descending; the sort is stable so
/// ties stay in row-major discovery order.
pub fn detect_threats(board: &Board, stone: Stone) -> Vec<Threat> {
    let Some(stones) = board.stones(stone) else {
        return Vec::new();
    };

    let mut threats = Vec::new();

    for pos in stones.iter_ones() {
        for &(dr, dc) in &DIRECTIONS {
            let before = pos.offset(dr, dc, -1);
            if before.is_some_and(|p| board.get(p) == stone) {
                continue;
            }

            let length = (0..)
                .map_while(|i| pos.offset(dr, dc, i))
                .take_while(|&p| board.get(p) == stone)
                .count();
            if length < 2 {
                continue;
            }

            let after = pos.offset(dr, dc, length as i32);
            let open_ends = [before, after]
                .into_iter()
                .flatten()
                .filter(|&p| board.is_empty(p))
                .count();

            if open_ends > 0 {
                threats.push(Threat {
                    direction: Direction::from_delta((dr, dc)),
                    start: pos,
                    length: length as u8,
                    open_ends: open_ends as u8,
                });
            }
        }
    }

    threats.sort_by(|a, b| (b.length, b.open_ends).cmp(&(a.length, a.open_ends)));
    threats
}
