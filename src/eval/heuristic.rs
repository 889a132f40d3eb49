//! Heuristic evaluation function for Gomoku board positions
//!
//! Scores a position from the minimax AI's (`O`) perspective. The board is
//! flattened into its 88 scan lines (rows, columns and both diagonal
//! families) and scored in four passes:
//! - Exact five-in-a-row short-circuit
//! - Positional bonuses (center distance, corners)
//! - Pattern table matches, overlapping occurrences all counted
//! - Penalty for the opponent's live threats

use crate::board::{Board, Pos, BOARD_SIZE, WIN_LENGTH};
use crate::player::MAX_STONE;
use crate::search::threat::detect_threats;

use super::patterns::{
    count_occurrences, Score, CENTER_BONUS, CENTER_DISTANCE_PENALTY, CORNER_BONUS, FIVE,
    LONG_THREAT_PENALTY, OPEN_TWO_THREAT_PENALTY, PATTERNS,
};

/// Evaluate the board for the maximizing side.
///
/// Returns exactly `FIVE` if `O` has five in a row anywhere and exactly
/// `-FIVE` if `X` does, regardless of anything else on the board.
#[must_use]
pub fn evaluate(board: &Board) -> Score {
    let lines = board_lines(board);
    let max_byte = MAX_STONE.pattern_byte();
    let min_byte = MAX_STONE.opponent().pattern_byte();

    if lines.iter().any(|line| has_five(line, max_byte)) {
        return FIVE;
    }
    if lines.iter().any(|line| has_five(line, min_byte)) {
        return -FIVE;
    }

    let pattern_score: Score = lines.iter().map(|line| evaluate_line(line)).sum();

    evaluate_positions(board) + pattern_score - threat_penalty(board)
}

/// All rows, columns and diagonals as byte strings over `o`, `x`, `.`.
///
/// Diagonals of every length are included, down to the single-cell ones in
/// the corners.
pub fn board_lines(board: &Board) -> Vec<Vec<u8>> {
    let n = BOARD_SIZE as i32;
    let cell = |r: i32, c: i32| board.get(Pos::new(r as u8, c as u8)).pattern_byte();
    let mut lines = Vec::with_capacity(2 * BOARD_SIZE + 2 * (2 * BOARD_SIZE - 1));

    // Rows
    for r in 0..n {
        lines.push((0..n).map(|c| cell(r, c)).collect());
    }

    // Columns
    for c in 0..n {
        lines.push((0..n).map(|r| cell(r, c)).collect());
    }

    // Diagonals, offset i = row - col for the down family
    for i in (1 - n)..n {
        let down = (0..n)
            .filter(|&j| (0..n).contains(&(i + j)))
            .map(|j| cell(i + j, j))
            .collect();
        let up = (0..n)
            .filter(|&j| (0..n).contains(&(i + j)))
            .map(|j| cell(i + j, n - 1 - j))
            .collect();
        lines.push(down);
        lines.push(up);
    }

    lines
}

/// Check a line for `WIN_LENGTH` consecutive `byte`s
fn has_five(line: &[u8], byte: u8) -> bool {
    line.len() >= WIN_LENGTH && line.windows(WIN_LENGTH).any(|w| w.iter().all(|&b| b == byte))
}

/// Sum of `occurrences * weight` over the pattern table for one line
fn evaluate_line(line: &[u8]) -> Score {
    PATTERNS
        .iter()
        .map(|&(shape, weight)| count_occurrences(line, shape) as Score * weight)
        .sum()
}

/// Center bonus for `O` stones and corner bonus for any stone.
///
/// The corner bonus does not check the color, so it also rewards the
/// opponent's corner stones.
fn evaluate_positions(board: &Board) -> Score {
    let mut score = 0;

    if let Some(stones) = board.stones(MAX_STONE) {
        for pos in stones.iter_ones() {
            score += CENTER_BONUS - CENTER_DISTANCE_PENALTY * Score::from(pos.center_distance());
        }
    }

    for pos in (board.black | board.white).iter_ones() {
        if pos.is_corner() {
            score += CORNER_BONUS;
        }
    }

    score
}

/// Penalty for every opponent run that could grow into a five
fn threat_penalty(board: &Board) -> Score {
    detect_threats(board, MAX_STONE.opponent())
        .iter()
        .map(|threat| match (threat.length, threat.open_ends) {
            (len, _) if len >= 3 => LONG_THREAT_PENALTY * Score::from(len),
            (2, 2) => OPEN_TWO_THREAT_PENALTY,
            _ => 0,
        })
        .sum()
}
