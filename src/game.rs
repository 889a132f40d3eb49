//! Game session facade
//!
//! [`Game`] owns the board and the AI engine and is what both front ends
//! talk to. Turn order is the front end's business; the facade only checks
//! that a placement is legal.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::{Board, Pos, Stone};
use crate::engine::{AIEngine, MoveResult};
use crate::error::GameError;
use crate::rules;
use crate::search::{self, Strategy, Threat};

/// A Gomoku session: board, AI engine and move history.
///
/// # Example
///
/// ```
/// use gomoku::{Game, Stone};
///
/// let mut game = Game::with_seed(1);
/// game.place(7, 7, Stone::Black).unwrap();
/// assert!(game.place(7, 7, Stone::White).is_err());
///
/// let reply = game.get_best_move(true).unwrap();
/// assert!(game.board().is_empty(reply));
/// ```
pub struct Game<R = SmallRng> {
    board: Board,
    engine: AIEngine<R>,
    history: Vec<(Pos, Stone)>,
}

impl Game<SmallRng> {
    /// New game with an entropy-seeded engine
    #[must_use]
    pub fn new() -> Self {
        Self::with_engine(AIEngine::new())
    }

    /// New game whose AI choices are fixed by `seed`
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_engine(AIEngine::with_seed(seed))
    }
}

impl Default for Game<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Game<R> {
    #[must_use]
    pub fn with_engine(engine: AIEngine<R>) -> Self {
        Self {
            board: Board::new(),
            engine,
            history: Vec::new(),
        }
    }

    /// Clear the board and history. The engine and its RNG are kept.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.history.clear();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves played so far, oldest first
    pub fn history(&self) -> &[(Pos, Stone)] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().map(|&(pos, _)| pos)
    }

    /// Place a stone, leaving the board untouched on error.
    pub fn place(&mut self, row: i32, col: i32, stone: Stone) -> Result<Pos, GameError> {
        let pos = self.board.place(row, col, stone)?;
        self.history.push((pos, stone));
        log::debug!("{:?} placed at {:?}", stone, pos);
        Ok(pos)
    }

    /// Color with five in a row, if any
    pub fn check_winner(&self) -> Option<Stone> {
        rules::check_winner(&self.board)
    }

    /// Winner found or board full
    pub fn is_game_over(&self) -> bool {
        rules::is_game_over(&self.board)
    }

    /// Current threats for `stone`, most dangerous first
    pub fn detect_threats(&self, stone: Stone) -> Vec<Threat> {
        search::detect_threats(&self.board, stone)
    }

    /// Best move for the minimax AI, searched with the chosen strategy.
    ///
    /// Does not place the stone.
    pub fn get_best_move(&mut self, use_alpha_beta: bool) -> Option<Pos> {
        self.engine.get_move(&mut self.board, use_alpha_beta)
    }

    /// Same as [`Game::get_best_move`] with search statistics
    pub fn get_best_move_with_stats(&mut self, strategy: Strategy) -> MoveResult {
        self.engine.get_move_with_stats(&mut self.board, strategy)
    }
}
