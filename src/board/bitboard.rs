//! Bitboard implementation for stone sets

use super::{Pos, TOTAL_CELLS};

const WORDS: usize = 4;

/// One bit per cell.
/// Uses 4 x u64 to represent 225 cells (4 * 64 = 256 >= 225)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bitboard {
    bits: [u64; WORDS],
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: [0; WORDS] }
    }

    /// Set a bit at position
    #[inline]
    pub fn set(&mut self, pos: Pos) {
        let idx = pos.to_index();
        self.bits[idx / 64] |= 1u64 << (idx % 64);
    }

    /// Clear a bit at position
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        let idx = pos.to_index();
        self.bits[idx / 64] &= !(1u64 << (idx % 64));
    }

    /// Check if bit is set at position
    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        let idx = pos.to_index();
        (self.bits[idx / 64] >> (idx % 64)) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }

    /// Iterate over set bit positions in row-major order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter {
            bits: self.bits,
            word_idx: 0,
            current_word: self.bits[0],
        }
    }
}

impl std::ops::BitOr for Bitboard {
    type Output = Bitboard;

    fn bitor(self, rhs: Bitboard) -> Bitboard {
        let mut bits = self.bits;
        for (word, other) in bits.iter_mut().zip(rhs.bits) {
            *word |= other;
        }
        Bitboard { bits }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: [u64; WORDS],
    word_idx: usize,
    current_word: u64,
}

impl Iterator for BitboardIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current_word == 0 {
            self.word_idx += 1;
            if self.word_idx >= WORDS {
                return None;
            }
            self.current_word = self.bits[self.word_idx];
        }

        let bit_pos = self.current_word.trailing_zeros() as usize;
        let idx = self.word_idx * 64 + bit_pos;

        // Clear the bit we just found
        self.current_word &= self.current_word - 1;

        // Bits past the last cell are never set
        if idx < TOTAL_CELLS {
            Some(Pos::from_index(idx))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_clear() {
        let mut bb = Bitboard::new();
        let pos = Pos::new(14, 14);
        assert!(!bb.get(pos));
        bb.set(pos);
        assert!(bb.get(pos));
        assert_eq!(bb.count(), 1);
        bb.clear(pos);
        assert!(bb.is_empty());
    }

    #[test]
    fn test_iter_ones_row_major() {
        let mut bb = Bitboard::new();
        bb.set(Pos::new(10, 2));
        bb.set(Pos::new(0, 14));
        bb.set(Pos::new(4, 7));

        let found: Vec<Pos> = bb.iter_ones().collect();
        assert_eq!(found, vec![Pos::new(0, 14), Pos::new(4, 7), Pos::new(10, 2)]);
    }

    #[test]
    fn test_union() {
        let mut a = Bitboard::new();
        let mut b = Bitboard::new();
        a.set(Pos::new(1, 1));
        b.set(Pos::new(13, 13));
        assert_eq!((a | b).count(), 2);
    }
}
