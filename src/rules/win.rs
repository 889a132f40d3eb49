//! Win condition checking
//!
//! Five or more stones of one color in a row, column or diagonal.

use crate::board::{Board, Pos, Stone, DIRECTIONS, WIN_LENGTH};

/// Scan the board for five in a row.
///
/// Walks every occupied cell in row-major order and, for each direction,
/// counts the run starting there. Returns the stone of the first run that
/// reaches five. Overlapping starts may see the same run more than once.
pub fn check_winner(board: &Board) -> Option<Stone> {
    let occupied = board.black | board.white;

    for pos in occupied.iter_ones() {
        let stone = board.get(pos);
        for &(dr, dc) in &DIRECTIONS {
            if run_length(board, pos, dr, dc, stone) >= WIN_LENGTH {
                return Some(stone);
            }
        }
    }
    None
}

/// Winner present or board full
#[inline]
pub fn is_game_over(board: &Board) -> bool {
    board.is_terminal()
}

/// A cell can be played iff it is empty
#[inline]
pub fn is_valid_move(board: &Board, pos: Pos) -> bool {
    board.is_empty(pos)
}

/// Five-in-a-row check through a specific position.
///
/// Only looks at the 4 lines through `pos`. Used after a hypothetical
/// placement on a board that had no five before.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos, color: Stone) -> bool {
    DIRECTIONS.iter().any(|&(dr, dc)| {
        let forward = run_length(board, pos, dr, dc, color);
        let backward = run_length(board, pos, -dr, -dc, color);
        // `pos` is counted by both walks
        forward + backward > WIN_LENGTH
    })
}

/// Find the positions of a five-in-a-row for `stone`, if one exists.
pub fn find_five_positions(board: &Board, stone: Stone) -> Option<[Pos; 5]> {
    let stones = board.stones(stone)?;

    for pos in stones.iter_ones() {
        for &(dr, dc) in &DIRECTIONS {
            if run_length(board, pos, dr, dc, stone) >= WIN_LENGTH {
                let mut line = [pos; 5];
                for (i, slot) in line.iter_mut().enumerate().skip(1) {
                    *slot = pos.offset(dr, dc, i as i32)?;
                }
                return Some(line);
            }
        }
    }
    None
}

/// Count consecutive `stone` cells starting at `pos` (inclusive) along
/// `(dr, dc)`, stopping at five.
fn run_length(board: &Board, pos: Pos, dr: i32, dc: i32, stone: Stone) -> usize {
    (0..WIN_LENGTH as i32)
        .map_while(|i| pos.offset(dr, dc, i))
        .take_while(|&p| board.get(p) == stone)
        .count()
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

    #[test]
    fn test_no_winner_on_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_horizontal_five() {
        let board = setup_board(&[
            (7, 3, Stone::White),
            (7, 4, Stone::White),
            (7, 5, Stone::White),
            (7, 6, Stone::White),
            (7, 7, Stone::White),
        ]);
        assert_eq!(check_winner(&board), Some(Stone::White));
    }

    #[test]
    fn test_vertical_five_at_edge() {
        let board = setup_board(&[
            (10, 14, Stone::Black),
            (11, 14, Stone::Black),
            (12, 14, Stone::Black),
            (13, 14, Stone::Black),
            (14, 14, Stone::Black),
        ]);
        assert_eq!(check_winner(&board), Some(Stone::Black));
    }

    #[test]
    fn test_anti_diagonal_five() {
        let board = setup_board(&[
            (0, 4, Stone::Black),
            (1, 3, Stone::Black),
            (2, 2, Stone::Black),
            (3, 1, Stone::Black),
            (4, 0, Stone::Black),
        ]);
        assert_eq!(check_winner(&board), Some(Stone::Black));
        let line = find_five_positions(&board, Stone::Black).unwrap();
        assert_eq!(line[0], Pos::new(0, 4));
        assert_eq!(line[4], Pos::new(4, 0));
    }

    #[test]
    fn test_four_is_not_a_win() {
        let board = setup_board(&[
            (5, 5, Stone::White),
            (6, 6, Stone::White),
            (7, 7, Stone::White),
            (8, 8, Stone::White),
        ]);
        assert_eq!(check_winner(&board), None);
        assert!(!is_game_over(&board));
    }

    #[test]
    fn test_broken_run_is_not_a_win() {
        let board = setup_board(&[
            (2, 0, Stone::Black),
            (2, 1, Stone::Black),
            (2, 2, Stone::White),
            (2, 3, Stone::Black),
            (2, 4, Stone::Black),
            (2, 5, Stone::Black),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_overline_wins() {
        let setup: Vec<_> = (0..7).map(|c| (0u8, c as u8, Stone::White)).collect();
        let board = setup_board(&setup);
        assert_eq!(check_winner(&board), Some(Stone::White));
    }

    #[test]
    fn test_has_five_at_pos_middle_of_run() {
        let mut board = setup_board(&[
            (7, 3, Stone::White),
            (7, 4, Stone::White),
            (7, 6, Stone::White),
            (7, 7, Stone::White),
        ]);
        assert!(!has_five_at_pos(&board, Pos::new(7, 5), Stone::White));
        board.place_stone(Pos::new(7, 5), Stone::White);
        assert!(has_five_at_pos(&board, Pos::new(7, 5), Stone::White));
        assert!(!has_five_at_pos(&board, Pos::new(7, 5), Stone::Black));
    }

    #[test]
    fn test_is_valid_move() {
        let board = setup_board(&[(1, 1, Stone::Black)]);
        assert!(!is_valid_move(&board, Pos::new(1, 1)));
        assert!(is_valid_move(&board, Pos::new(1, 2)));
    }
}
