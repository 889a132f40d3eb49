//! Pattern weights for Gomoku evaluation
//!
//! Shapes are written over `o` (minimax AI), `x` (opponent) and `.` (empty)
//! and matched as substrings of every board line. Opponent shapes weigh more
//! than their mirror so the evaluation leans toward defense.

/// Score type used by evaluation and search
pub type Score = i64;

/// Five in a row for the maximizing side
pub const FIVE: Score = 1_000_000;

/// Base bonus per `o` stone, reduced by 10 per step from the center
pub const CENTER_BONUS: Score = 500;
/// Reduction per unit of Manhattan distance from the center
pub const CENTER_DISTANCE_PENALTY: Score = 10;
/// Flat bonus for a stone of either color on a board corner
pub const CORNER_BONUS: Score = 200;

/// Penalty per stone of an opponent threat of length three or more
pub const LONG_THREAT_PENALTY: Score = 50_000;
/// Penalty for an opponent two with both ends open
pub const OPEN_TWO_THREAT_PENALTY: Score = 20_000;

/// Shape table scanned over every line. Order does not affect the total.
pub const PATTERNS: &[(&[u8], Score)] = &[
    // Win/loss
    (b"ooooo", 1_000_000),
    (b"xxxxx", -1_000_000),
    // Open four
    (b".oooo.", 100_000),
    (b".xxxx.", -200_000),
    (b"xoooox", -150_000),
    // Half-open four
    (b"oooo.", 50_000),
    (b".oooo", 50_000),
    (b"xxxx.", -75_000),
    (b".xxxx", -75_000),
    (b"xoooo", 40_000),
    (b"oooox", 40_000),
    (b"oxxxx", -60_000),
    (b"xxxxo", -60_000),
    // Open threes
    (b".ooo..", 15_000),
    (b"..ooo.", 15_000),
    (b".xxx..", -30_000),
    (b"..xxx.", -30_000),
    (b"x.xxx.", -25_000),
    (b".xxx.x", -25_000),
    // Split threes
    (b"oo.oo", 20_000),
    (b"xx.xx", -35_000),
    (b"ooo.o", 18_000),
    (b"xxx.x", -30_000),
    (b"o.ooo", 18_000),
    (b"x.xxx", -30_000),
    // Open twos
    (b".oo..", 5_000),
    (b"..oo.", 5_000),
    (b".xx..", -10_000),
    (b"..xx.", -10_000),
    (b"x.xx.", -8_000),
    (b".xx.x", -8_000),
];

/// Count every start offset where `pattern` occurs in `line`, overlaps included
#[inline]
pub fn count_occurrences(line: &[u8], pattern: &[u8]) -> usize {
    if pattern.len() > line.len() {
        return 0;
    }
    line.windows(pattern.len()).filter(|w| *w == pattern).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_alphabet() {
        for (shape, _) in PATTERNS {
            assert!(
                shape.iter().all(|b| matches!(b, b'o' | b'x' | b'.')),
                "unexpected byte in {:?}",
                std::str::from_utf8(shape)
            );
        }
    }

    #[test]
    fn test_opponent_shapes_weigh_more() {
        let weight = |shape: &[u8]| {
            PATTERNS
                .iter()
                .find(|(s, _)| *s == shape)
                .map(|(_, w)| *w)
                .unwrap()
        };
        assert!(weight(b".xxxx.").abs() > weight(b".oooo."));
        assert!(weight(b".xxx..").abs() > weight(b".ooo.."));
        assert!(weight(b".xx..").abs() > weight(b".oo.."));
    }

    #[test]
    fn test_count_overlapping() {
        assert_eq!(count_occurrences(b"oooooo", b"ooooo"), 2);
        assert_eq!(count_occurrences(b"..oo..", b".oo.."), 1);
        assert_eq!(count_occurrences(b"..oo..", b"..oo."), 1);
        assert_eq!(count_occurrences(b"xx", b"xx.xx"), 0);
        assert_eq!(count_occurrences(b"", b"o"), 0);
    }
}
