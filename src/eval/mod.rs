//! Position evaluation
//!
//! Static scoring from the minimax AI's point of view:
//! - Exact five-in-a-row detection
//! - Center and corner bonuses
//! - Pattern table lookups over every line
//! - Penalties for the opponent's threats

pub mod heuristic;
pub mod patterns;

pub use heuristic::{board_lines, evaluate};
pub use patterns::{Score, FIVE, PATTERNS};
