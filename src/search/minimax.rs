//! Plain minimax
//!
//! Same recursion as alpha-beta without any pruning: every candidate of
//! every node is explored.

use crate::board::Board;
use crate::eval::Score;
use crate::player::Player;

use super::alphabeta::{Searcher, INF};
use super::movegen::generate_moves;

impl Searcher {
    /// Minimax search to `depth` plies.
    ///
    /// The maximizing side places the minimax AI's stone and the minimizing
    /// side the human's.
    pub fn minimax(&mut self, board: &mut Board, depth: u8, maximizing: bool) -> Score {
        if let Some(score) = self.leaf(board, depth) {
            return score;
        }

        let moves = generate_moves(board);

        if maximizing {
            let stone = Player::Minimax.stone();
            let mut best = -INF;
            for mv in moves {
                let mut child = board.apply(mv, stone);
                best = best.max(self.minimax(&mut child, depth - 1, false));
            }
            best
        } else {
            let stone = Player::Human.stone();
            let mut best = INF;
            for mv in moves {
                let mut child = board.apply(mv, stone);
                best = best.min(self.minimax(&mut child, depth - 1, true));
            }
            best
        }
    }
}
