//! Gomoku search engine: minimax and alpha-beta on a 15x15 board
//!
//! Standard Gomoku rules:
//! - 15x15 board, coordinates `(row, col)` from `(0, 0)` top-left
//! - Five or more in a row wins, a full board is a tie
//! - No captures, no forbidden moves
//!
//! Three roles share two colors: the minimax AI plays `O` (white) and every
//! search maximizes for it; the alpha-beta AI and the human play `X` (black).
//!
//! # Architecture
//!
//! - [`board`]: Bitboard representation with scoped speculative placement
//! - [`rules`]: Win detection
//! - [`eval`]: Pattern-table evaluation
//! - [`search`]: Threat detection, move funnel, minimax and alpha-beta
//! - [`engine`]: Root search with candidate downsampling
//! - [`game`]: Session facade used by the front ends
//! - [`ui`]: egui desktop front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Game, Stone};
//!
//! let mut game = Game::with_seed(42);
//! game.place(7, 7, Stone::Black).unwrap();
//!
//! // AI responds as White
//! if let Some(pos) = game.get_best_move(true) {
//!     game.place(pos.row.into(), pos.col.into(), Stone::White).unwrap();
//!     println!("AI plays at ({}, {})", pos.row, pos.col);
//! }
//! assert_eq!(game.history().len(), 2);
//! ```
//!
//! # Move Funnel
//!
//! Candidates at every node come from a strict-priority funnel:
//! 1. A cell that completes five for anyone
//! 2. The center on an empty board
//! 3. Blocks against the opponent's threats
//! 4. Own threat extensions plus cells touching a stone
//! 5. Every empty cell

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod player;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use engine::{AIEngine, MoveResult};
pub use error::GameError;
pub use game::Game;
pub use player::Player;
pub use search::{Strategy, Threat};
