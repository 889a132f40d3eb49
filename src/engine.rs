//! Main AI engine: picks the minimax AI's move
//!
//! The engine always searches for the maximizing side (`O`). The search
//! follows this order:
//!
//! 1. **Forced / opening move**: if the move funnel yields a single
//!    candidate (an immediate win or block, or the center on an empty board)
//!    it is returned without searching
//! 2. **Downsampling**: more than [`MAX_CANDIDATES`] candidates are cut to a
//!    uniform random sample of that size
//! 3. **Search**: each candidate is scored with minimax or alpha-beta to
//!    [`MAX_DEPTH`] plies and the best one wins
//!
//! Randomness comes from an injected [`Rng`], so a seeded engine is fully
//! reproducible.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Pos, Stone, Strategy};
//!
//! let mut engine = AIEngine::with_seed(7);
//! let mut board = Board::new();
//! for col in 3..7 {
//!     board.place_stone(Pos::new(7, col), Stone::White);
//! }
//!
//! let result = engine.get_move_with_stats(&mut board, Strategy::AlphaBeta);
//! assert_eq!(result.best_move, Some(Pos::new(7, 2)));
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Pos};
use crate::eval::{evaluate, Score, FIVE};
use crate::player::MAX_STONE;
use crate::search::{generate_moves, Searcher, Strategy, INF};

/// Search depth in plies, counting the root move
pub const MAX_DEPTH: u8 = 3;

/// Most root candidates searched per move
pub const MAX_CANDIDATES: usize = 20;

/// Result of a move search with statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, `None` only when there are no candidates
    pub best_move: Option<Pos>,
    /// Search score of the chosen move, or its static score when forced
    pub score: Score,
    /// Strategy that produced the score
    pub strategy: Strategy,
    /// Whether the move was forced by the funnel without searching
    pub forced: bool,
    /// Candidates actually searched at the root
    pub candidates: usize,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    /// Create a result for a single-candidate move
    #[inline]
    fn forced(pos: Pos, score: Score, strategy: Strategy, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score,
            strategy,
            forced: true,
            candidates: 1,
            time_ms,
            nodes: 0,
        }
    }
}

/// Main AI engine for Gomoku.
///
/// Generic over the random source used for candidate downsampling and the
/// no-improvement fallback.
///
/// # Example
///
/// ```
/// use gomoku::{AIEngine, Board, Pos};
///
/// let mut engine = AIEngine::new();
/// let mut board = Board::new();
/// assert_eq!(engine.get_move(&mut board, false), Some(Pos::new(7, 7)));
/// ```
pub struct AIEngine<R = SmallRng> {
    searcher: Searcher,
    rng: R,
    max_depth: u8,
}

impl AIEngine<SmallRng> {
    /// Create an engine with the default depth and an entropy-seeded RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(MAX_DEPTH, SmallRng::from_entropy())
    }

    /// Create an engine whose random choices are fixed by `seed`.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_config(MAX_DEPTH, SmallRng::seed_from_u64(seed))
    }
}

impl Default for AIEngine<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> AIEngine<R> {
    /// Create an engine with a custom depth and random source.
    ///
    /// `max_depth` counts the root move and is clamped to at least 1.
    #[must_use]
    pub fn with_config(max_depth: u8, rng: R) -> Self {
        Self {
            searcher: Searcher::new(),
            rng,
            max_depth: max_depth.max(1),
        }
    }

    /// Configured search depth
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Get the best move for the minimax AI.
    ///
    /// Convenience wrapper over [`AIEngine::get_move_with_stats`].
    #[must_use]
    pub fn get_move(&mut self, board: &mut Board, use_alpha_beta: bool) -> Option<Pos> {
        self.get_move_with_stats(board, Strategy::from_flag(use_alpha_beta))
            .best_move
    }

    /// Get the best move with search statistics.
    ///
    /// The board is mutated speculatively during the search and is back in
    /// its original state when this returns. Must not be called on a board
    /// that already has a winner.
    pub fn get_move_with_stats(&mut self, board: &mut Board, strategy: Strategy) -> MoveResult {
        let start = Instant::now();
        self.searcher.reset_stats();

        let mut candidates = generate_moves(board);
        if let &[only] = candidates.as_slice() {
            // Static score of the position after the move
            let score = evaluate(&board.apply(only, MAX_STONE));
            log::debug!("forced move {:?} (score {})", only, score);
            return MoveResult::forced(only, score, strategy, elapsed_ms(start));
        }

        if candidates.len() > MAX_CANDIDATES {
            log::debug!(
                "sampling {} of {} candidates",
                MAX_CANDIDATES,
                candidates.len()
            );
            candidates = candidates
                .choose_multiple(&mut self.rng, MAX_CANDIDATES)
                .copied()
                .collect();
        }

        let mut best_score = -INF;
        let mut best_move = None;
        let mut alpha = -INF;

        for &mv in &candidates {
            let score = {
                let mut child = board.apply(mv, MAX_STONE);
                let depth = self.max_depth - 1;
                match strategy {
                    Strategy::Minimax => self.searcher.minimax(&mut child, depth, false),
                    Strategy::AlphaBeta => {
                        self.searcher.alpha_beta(&mut child, depth, false, alpha, INF)
                    }
                }
            };

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
                if score == FIVE {
                    break;
                }
            }
            alpha = alpha.max(best_score);
        }

        let best_move = best_move.or_else(|| candidates.choose(&mut self.rng).copied());
        let stats = self.searcher.stats();
        let result = MoveResult {
            best_move,
            score: best_score,
            strategy,
            forced: false,
            candidates: candidates.len(),
            time_ms: elapsed_ms(start),
            nodes: stats.nodes,
        };

        log::info!(
            "{:?} chose {:?} (score {}, {} candidates, {} nodes, {} cutoffs, {}ms)",
            strategy,
            result.best_move,
            result.score,
            result.candidates,
            result.nodes,
            stats.cutoffs,
            result.time_ms
        );
        result
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
