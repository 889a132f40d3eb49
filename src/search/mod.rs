//! Search module for Gomoku AI
//!
//! Contains:
//! - Threat detection (extendable runs of stones)
//! - Candidate move generation (the move funnel)
//! - Plain minimax and alpha-beta search over speculative placements

pub mod alphabeta;
pub mod minimax;
pub mod movegen;
pub mod threat;

pub use alphabeta::{SearchStats, Searcher, INF};
pub use movegen::{blocking_moves, generate_moves};
pub use threat::{detect_threats, Direction, Threat};

/// Tree search strategy used for the AI's move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Full minimax, every subtree explored
    Minimax,
    /// Minimax with alpha-beta cutoffs
    AlphaBeta,
}

impl Strategy {
    /// Map the front ends' `use_alpha_beta` flag
    #[inline]
    pub fn from_flag(use_alpha_beta: bool) -> Self {
        if use_alpha_beta {
            Strategy::AlphaBeta
        } else {
            Strategy::Minimax
        }
    }
}
