//! Candidate move generation
//!
//! Moves pass through a strict-priority funnel and the first stage that
//! produces anything wins:
//!
//! 1. Any cell that completes five for some role (win or forced block)
//! 2. The center on an empty board
//! 3. Blocks against the opponent's threats
//! 4. Extensions of our own threats plus every cell touching a stone
//! 5. Every empty cell
//!
//! The search explores candidates in the order returned here, so pruning
//! quality depends entirely on this funnel.

use std::collections::{BTreeMap, BTreeSet};

use crate::board::{Board, Pos, Stone};
use crate::player::{Player, MAX_STONE};
use crate::rules::has_five_at_pos;

use super::threat::{detect_threats, Threat};

/// Generate the candidate moves for the current position.
///
/// Takes the board mutably to try immediate wins; every trial stone is retracted
/// before returning. The result is sorted in row-major order.
pub fn generate_moves(board: &mut Board) -> Vec<Pos> {
    // 1. Forced resolution: a cell that wins for anyone must be played
    if let Some(pos) = find_forced_move(board) {
        return vec![pos];
    }

    // 2. Opening
    if board.is_board_empty() {
        return vec![Pos::center()];
    }

    // 3. Defense preempts everything else
    let opponent_threats = detect_threats(board, MAX_STONE.opponent());
    if !opponent_threats.is_empty() {
        let blocks = blocking_moves(board, &opponent_threats);
        if !blocks.is_empty() {
            return blocks;
        }
    }

    // 4. Attack + proximity
    let mut moves = BTreeSet::new();
    let own_threats = detect_threats(board, MAX_STONE);
    moves.extend(blocking_moves(board, &own_threats));
    moves.extend(neighbor_moves(board));

    if !moves.is_empty() {
        return moves.into_iter().collect();
    }

    // 5. Fallback
    board.empty_cells().collect()
}

/// Find a cell that completes five, checking roles in
/// [`Player::FORCED_ORDER`] and cells in row-major order.
pub fn find_forced_move(board: &mut Board) -> Option<Pos> {
    let empty: Vec<Pos> = board.empty_cells().collect();

    for stone in forced_stones() {
        for &pos in &empty {
            let placed = board.apply(pos, stone);
            if has_five_at_pos(&placed, pos, stone) {
                return Some(pos);
            }
        }
    }
    None
}

/// Stones of [`Player::FORCED_ORDER`], each tried once.
///
/// Roles sharing a color are adjacent in the order, so dropping repeats
/// keeps the first occurrence of every stone.
fn forced_stones() -> Vec<Stone> {
    let mut stones: Vec<Stone> = Player::FORCED_ORDER.iter().map(|p| p.stone()).collect();
    stones.dedup();
    stones
}

/// Score the open ends of `threats` and return the best cells.
///
/// Each threat adds `10^(length + open_ends)` to the empty cell before and
/// the empty cell after its run. All cells tied at the top score are kept.
pub fn blocking_moves(board: &Board, threats: &[Threat]) -> Vec<Pos> {
    let mut scores: BTreeMap<Pos, u64> = BTreeMap::new();

    for threat in threats {
        let weight = 10u64.saturating_pow(u32::from(threat.length + threat.open_ends));
        for end in [threat.before(), threat.after()].into_iter().flatten() {
            if board.is_empty(end) {
                let entry = scores.entry(end).or_insert(0);
                *entry = entry.saturating_add(weight);
            }
        }
    }

    let Some(&best) = scores.values().max() else {
        return Vec::new();
    };
    scores
        .into_iter()
        .filter(|&(_, score)| score == best)
        .map(|(pos, _)| pos)
        .collect()
}

/// Every empty cell within one step (Chebyshev distance 1) of a stone
fn neighbor_moves(board: &Board) -> BTreeSet<Pos> {
    let occupied = board.black | board.white;
    let mut moves = BTreeSet::new();

    for pos in occupied.iter_ones() {
        for dr in -1..=1 {
            for dc in -1..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                if let Some(n) = pos.offset(dr, dc, 1) {
                    if board.is_empty(n) {
                        moves.insert(n);
                    }
                }
            }
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_board(setup: &[(u8, u8, Stone)]) -> Board {
        let mut board = Board::new();
        for &(r, c, s) in setup {
            board.place_stone(Pos::new(r, c), s);
        }
        board
    }

    fn row_of(row: u8, cols: std::ops::Range<u8>, stone: Stone) -> Vec<(u8, u8, Stone)> {
        cols.map(|c| (row, c, stone)).collect()
    }

    #[test]
    fn test_empty_board_opens_center() {
        let mut board = Board::new();
        assert_eq!(generate_moves(&mut board), vec![Pos::new(7, 7)]);
    }

    #[test]
    fn test_own_open_four_is_forced() {
        let mut board = setup_board(&row_of(7, 3..7, Stone::White));
        let before = board.clone();

        let moves = generate_moves(&mut board);
        assert_eq!(moves.len(), 1);
        assert!(moves[0] == Pos::new(7, 2) || moves[0] == Pos::new(7, 7));
        assert_eq!(board, before, "probing must not leave stones behind");
    }

    #[test]
    fn test_opponent_open_four_is_blocked() {
        let mut setup = row_of(7, 3..7, Stone::Black);
        setup.push((0, 0, Stone::White));
        let mut board = setup_board(&setup);

        let moves = generate_moves(&mut board);
        assert_eq!(moves.len(), 1);
        assert!(moves[0] == Pos::new(7, 2) || moves[0] == Pos::new(7, 7));
    }

    #[test]
    fn test_own_win_beats_block() {
        let mut setup = row_of(2, 0..4, Stone::Black);
        setup.extend(row_of(12, 5..9, Stone::White));
        let mut board = setup_board(&setup);

        let moves = generate_moves(&mut board);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].row, 12, "minimax role is checked first");
    }

    #[test]
    fn test_forced_move_gap() {
        let mut board = setup_board(&[
            (4, 4, Stone::White),
            (5, 5, Stone::White),
            (7, 7, Stone::White),
            (8, 8, Stone::White),
        ]);
        assert_eq!(find_forced_move(&mut board), Some(Pos::new(6, 6)));
    }

    #[test]
    fn test_defense_against_open_three() {
        let mut board = setup_board(&[
            (7, 5, Stone::Black),
            (7, 6, Stone::Black),
            (7, 7, Stone::Black),
            (8, 8, Stone::White),
        ]);
        let moves = generate_moves(&mut board);
        assert_eq!(moves, vec![Pos::new(7, 4), Pos::new(7, 8)]);
    }

    #[test]
    fn test_each_color_tried_once() {
        assert_eq!(forced_stones(), vec![Stone::White, Stone::Black]);
    }

    #[test]
    fn test_forced_block_for_shared_color() {
        // Only black can complete five; it is still found with black tried once
        let mut setup = row_of(11, 2..6, Stone::Black);
        setup.push((0, 14, Stone::White));
        let mut board = setup_board(&setup);
        assert_eq!(find_forced_move(&mut board), Some(Pos::new(11, 1)));
    }

    #[test]
    fn test_blocking_moves_accumulate() {
        // Two open twos sharing the cell (5, 5)
        let board = setup_board(&[
            (5, 6, Stone::Black),
            (5, 7, Stone::Black),
            (6, 5, Stone::Black),
            (7, 5, Stone::Black),
        ]);
        let threats = detect_threats(&board, Stone::Black);
        assert_eq!(blocking_moves(&board, &threats), vec![Pos::new(5, 5)]);
    }

    #[test]
    fn test_blocking_moves_empty_threats() {
        let board = Board::new();
        assert!(blocking_moves(&board, &[]).is_empty());
    }

    #[test]
    fn test_proximity_when_no_threats() {
        let mut board = setup_board(&[(7, 7, Stone::White)]);
        let moves = generate_moves(&mut board);
        assert_eq!(moves.len(), 8);
        assert!(moves.iter().all(|p| p.center_distance() <= 2 && *p != Pos::center()));
    }

    #[test]
    fn test_proximity_includes_attack_moves() {
        let mut board = setup_board(&[(7, 7, Stone::White), (7, 8, Stone::White)]);
        let moves = generate_moves(&mut board);
        assert!(moves.contains(&Pos::new(7, 6)));
        assert!(moves.contains(&Pos::new(7, 9)));
        assert!(moves.contains(&Pos::new(6, 7)));
        let mut sorted = moves.clone();
        sorted.sort();
        assert_eq!(moves, sorted);
    }
}
