//! Alpha-beta search
//!
//! Depth-bounded minimax with alpha-beta cutoffs. Every ply places one stone
//! through a [`Placement`](crate::board::Placement) guard, so the board is
//! restored on every exit path, cutoffs included.
//!
//! Moves are tried in the order [`generate_moves`] returns them; there is no
//! separate ordering step.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos, Stone};
//! use gomoku::search::{Searcher, INF};
//!
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::White);
//! board.place_stone(Pos::new(7, 8), Stone::Black);
//!
//! let mut searcher = Searcher::new();
//! let score = searcher.alpha_beta(&mut board, 1, true, -INF, INF);
//! println!("score {} after {} nodes", score, searcher.stats().nodes);
//! ```

use crate::board::Board;
use crate::eval::{evaluate, Score};
use crate::player::Player;

use super::movegen::generate_moves;

/// Bound for alpha-beta windows, beyond any evaluation
pub const INF: Score = Score::MAX;

/// Search statistics for diagnostics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, leaves included
    pub nodes: u64,
    /// Static evaluations performed
    pub leaves: u64,
    /// Alpha-beta cutoffs
    pub cutoffs: u64,
}

/// Recursive searcher shared by both strategies
#[derive(Debug, Default)]
pub struct Searcher {
    pub(crate) stats: SearchStats,
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics accumulated since the last reset
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Evaluate at depth 0 or on a finished game
    #[inline]
    pub(crate) fn leaf(&mut self, board: &Board, depth: u8) -> Option<Score> {
        self.stats.nodes += 1;
        if depth == 0 || board.is_terminal() {
            self.stats.leaves += 1;
            Some(evaluate(board))
        } else {
            None
        }
    }

    /// Alpha-beta search.
    ///
    /// The maximizing side places the minimax AI's stone, the minimizing side
    /// the alpha-beta AI's. After each child the running best tightens
    /// `alpha` (maximizing) or `beta` (minimizing); iteration stops as soon
    /// as `alpha >= beta`. With a full window the result equals
    /// [`Searcher::minimax`] at the same depth.
    pub fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        mut alpha: Score,
        mut beta: Score,
    ) -> Score {
        if let Some(score) = self.leaf(board, depth) {
            return score;
        }

        let stone = if maximizing {
            Player::Minimax.stone()
        } else {
            Player::AlphaBeta.stone()
        };
        let mut best = if maximizing { -INF } else { INF };

        for mv in generate_moves(board) {
            let score = {
                let mut child = board.apply(mv, stone);
                self.alpha_beta(&mut child, depth - 1, !maximizing, alpha, beta)
            };

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Pos, Stone};
    use crate::eval::FIVE;

    fn setup_board(setup: &[(u8, u8, Stone)]) -> Board {
        let mut board = Board::new();
        for &(r, c, s) in setup {
            board.place_stone(Pos::new(r, c), s);
        }
        board
    }

    #[test]
    fn test_depth_zero_is_static_eval() {
        let mut board = setup_board(&[(7, 7, Stone::White)]);
        let mut searcher = Searcher::new();
        let score = searcher.alpha_beta(&mut board, 0, true, -INF, INF);
        assert_eq!(score, evaluate(&board));
        assert_eq!(searcher.stats().leaves, 1);
    }

    #[test]
    fn test_terminal_board_not_expanded() {
        let setup: Vec<_> = (0..5).map(|c| (0u8, c as u8, Stone::White)).collect();
        let mut board = setup_board(&setup);
        let mut searcher = Searcher::new();
        assert_eq!(searcher.alpha_beta(&mut board, 3, false, -INF, INF), FIVE);
        assert_eq!(searcher.stats().nodes, 1);
    }

    #[test]
    fn test_board_restored_after_search() {
        let mut board = setup_board(&[
            (7, 7, Stone::White),
            (7, 8, Stone::Black),
            (8, 8, Stone::White),
        ]);
        let before = board.clone();
        let mut searcher = Searcher::new();
        searcher.alpha_beta(&mut board, 2, false, -INF, INF);
        assert_eq!(board, before);
        assert!(searcher.stats().nodes > 1);
    }

    #[test]
    fn test_board_restored_after_cutoff() {
        let mut board = setup_board(&[(7, 7, Stone::White), (6, 6, Stone::Black)]);
        let before = board.clone();
        let mut searcher = Searcher::new();
        // A window this narrow forces cutoffs on the first child
        searcher.alpha_beta(&mut board, 2, true, 0, 1);
        assert!(searcher.stats().cutoffs > 0);
        assert_eq!(board, before);
    }

    #[test]
    fn test_maximizer_completes_open_four() {
        // The forced completion is the only candidate
        let mut board = setup_board(&[
            (7, 3, Stone::White),
            (7, 4, Stone::White),
            (7, 5, Stone::White),
            (7, 6, Stone::White),
            (6, 6, Stone::Black),
        ]);
        let mut searcher = Searcher::new();
        let score = searcher.alpha_beta(&mut board, 2, true, -INF, INF);
        assert_eq!(score, FIVE);
    }

    #[test]
    fn test_matches_minimax() {
        let positions = [
            vec![(7, 7, Stone::White), (7, 8, Stone::Black)],
            vec![(7, 7, Stone::White), (8, 8, Stone::Black), (6, 8, Stone::White)],
            vec![(3, 3, Stone::Black), (3, 4, Stone::Black), (4, 4, Stone::White)],
        ];
        for setup in positions {
            for maximizing in [true, false] {
                let mut board = setup_board(&setup);
                let mut ab = Searcher::new();
                let mut mm = Searcher::new();
                let ab_score = ab.alpha_beta(&mut board, 2, maximizing, -INF, INF);
                let mm_score = mm.minimax(&mut board, 2, maximizing);
                assert_eq!(ab_score, mm_score, "setup {:?}", setup);
                assert!(ab.stats().leaves <= mm.stats().leaves);
            }
        }
    }
}
