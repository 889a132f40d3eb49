use super::*;
use crate::error::{GameError, InvalidReason};

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_stone_symbols() {
    assert_eq!(Stone::Black.symbol(), 'X');
    assert_eq!(Stone::White.symbol(), 'O');
    assert_eq!(Stone::Empty.symbol(), '.');
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::center();
    assert_eq!(pos, Pos::new(7, 7));
    assert_eq!(pos.to_index(), 7 * 15 + 7);
    assert_eq!(Pos::from_index(112), pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(14, 14));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(15, 0));
    assert!(!Pos::is_valid(0, 15));
    assert_eq!(Pos::try_new(3, 15), None);
}

#[test]
fn test_pos_offset() {
    let pos = Pos::new(0, 14);
    assert_eq!(pos.offset(1, -1, 2), Some(Pos::new(2, 12)));
    assert_eq!(pos.offset(-1, 0, 1), None);
    assert_eq!(pos.offset(0, 1, 1), None);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 15);
    assert_eq!(TOTAL_CELLS, 225);
}

#[test]
fn test_pos_corners_and_distance() {
    assert!(Pos::new(0, 0).is_corner());
    assert!(Pos::new(14, 0).is_corner());
    assert!(!Pos::new(0, 7).is_corner());
    assert_eq!(Pos::center().center_distance(), 0);
    assert_eq!(Pos::new(0, 0).center_distance(), 14);
}

#[test]
fn test_place_and_get() {
    let mut board = Board::new();
    assert_eq!(board.place(3, 4, Stone::Black), Ok(Pos::new(3, 4)));
    assert_eq!(board.get(Pos::new(3, 4)), Stone::Black);
    assert_eq!(board.stone_count(), 1);
}

#[test]
fn test_place_rejects_occupied_and_leaves_board_unchanged() {
    let mut board = Board::new();
    board.place(7, 7, Stone::White).unwrap();
    let before = board.clone();

    let err = board.place(7, 7, Stone::Black).unwrap_err();
    assert_eq!(
        err,
        GameError::InvalidMove { row: 7, col: 7, reason: InvalidReason::Occupied }
    );
    assert_eq!(board, before);
}

#[test]
fn test_place_rejects_out_of_bounds() {
    let mut board = Board::new();
    for (row, col) in [(-1, 0), (0, -1), (15, 0), (0, 15), (100, 100)] {
        assert!(board.place(row, col, Stone::Black).is_err());
    }
    assert!(board.is_board_empty());
}

#[test]
fn test_place_rejects_empty_stone() {
    let mut board = Board::new();
    assert!(board.place(1, 1, Stone::Empty).is_err());
}

#[test]
fn test_place_retract_round_trip() {
    let mut board = Board::new();
    board.place(7, 7, Stone::White).unwrap();
    board.place(7, 8, Stone::Black).unwrap();
    let before = board.clone();

    for pos in before.empty_cells() {
        board.place(pos.row as i32, pos.col as i32, Stone::White).unwrap();
        board.retract(pos);
        assert_eq!(board, before);
    }
}

#[test]
fn test_apply_guard_retracts_on_drop() {
    let mut board = Board::new();
    let before = board.clone();
    {
        let placed = board.apply(Pos::new(2, 2), Stone::Black);
        assert_eq!(placed.get(Pos::new(2, 2)), Stone::Black);
        assert_eq!(placed.pos(), Pos::new(2, 2));
    }
    assert_eq!(board, before);
}

#[test]
fn test_apply_guard_retracts_on_early_return() {
    fn place_then_bail(board: &mut Board) -> Option<()> {
        let placed = board.apply(Pos::new(5, 5), Stone::White);
        if placed.stone_count() == 1 {
            return None;
        }
        Some(())
    }

    let mut board = Board::new();
    assert!(place_then_bail(&mut board).is_none());
    assert!(board.is_board_empty());
}

#[test]
fn test_nested_apply() {
    let mut board = Board::new();
    {
        let mut outer = board.apply(Pos::new(0, 0), Stone::White);
        {
            let inner = outer.apply(Pos::new(0, 1), Stone::Black);
            assert_eq!(inner.stone_count(), 2);
        }
        assert_eq!(outer.stone_count(), 1);
    }
    assert!(board.is_board_empty());
}

#[test]
fn test_is_full() {
    let mut board = Board::new();
    for idx in 0..TOTAL_CELLS {
        assert!(!board.is_full());
        let stone = if idx % 2 == 0 { Stone::Black } else { Stone::White };
        board.place_stone(Pos::from_index(idx), stone);
    }
    assert!(board.is_full());
    assert!(board.is_terminal());
}

#[test]
fn test_empty_cells_row_major() {
    let mut board = Board::new();
    board.place_stone(Pos::new(0, 0), Stone::Black);
    let first: Vec<Pos> = board.empty_cells().take(2).collect();
    assert_eq!(first, vec![Pos::new(0, 1), Pos::new(0, 2)]);
    assert_eq!(board.empty_cells().count(), TOTAL_CELLS - 1);
}

#[test]
fn test_display_layout() {
    let mut board = Board::new();
    board.place_stone(Pos::new(0, 0), Stone::Black);
    board.place_stone(Pos::new(0, 1), Stone::White);
    let text = board.to_string();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), BOARD_SIZE + 1);
    assert!(lines[0].starts_with("    0  1  2"));
    assert!(lines[1].starts_with(" 0 X  O  . "));
    assert!(lines[15].starts_with("14 .  ."));
}
