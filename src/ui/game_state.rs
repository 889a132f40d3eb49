//! Game state management for the Gomoku GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{AIEngine, Game, MoveResult, Player, Pos, Stone, Strategy, Threat};

/// Pause before every AI move so AI-vs-AI games can be followed
pub const AI_MOVE_DELAY: Duration = Duration::from_millis(500);

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Human (`X`) moves first against the minimax AI (`O`)
    HumanVsAi,
    /// Alpha-beta AI (`X`) moves first against the minimax AI (`O`)
    AiVsAi,
}

impl GameMode {
    /// Role that opens the game
    pub fn first_player(self) -> Player {
        match self {
            GameMode::HumanVsAi => Player::Human,
            GameMode::AiVsAi => Player::AlphaBeta,
        }
    }

    /// Role that moves after `player`
    pub fn next_player(self, player: Player) -> Player {
        match player {
            Player::Minimax => self.first_player(),
            Player::AlphaBeta | Player::Human => Player::Minimax,
        }
    }

    /// Role playing `stone` in this mode
    pub fn player_of(self, stone: Stone) -> Option<Player> {
        match stone {
            Stone::White => Some(Player::Minimax),
            Stone::Black => Some(self.first_player()),
            Stone::Empty => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GameMode::HumanVsAi => "Human vs AI",
            GameMode::AiVsAi => "AI vs AI",
        }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        player: Player,
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Game result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    /// `None` on a tie
    pub winner: Option<Player>,
    pub winning_line: Option<[Pos; 5]>,
}

impl GameResult {
    /// Banner text for the game-over card
    pub fn headline(&self, mode: GameMode) -> &'static str {
        match (mode, self.winner) {
            (_, None) => "It's a tie!",
            (GameMode::HumanVsAi, Some(Player::Human)) => "You win!",
            (GameMode::HumanVsAi, Some(_)) => "AI wins!",
            (GameMode::AiVsAi, Some(Player::Minimax)) => "AI (Minimax) wins!",
            (GameMode::AiVsAi, Some(_)) => "AI (Alpha-Beta) wins!",
        }
    }
}

/// Main game state
pub struct GameState {
    /// Board, history and rules. Its own engine stays idle: searches run on
    /// worker-owned engines seeded from `seeds`.
    pub game: Game,
    pub mode: GameMode,
    pub current: Player,
    pub game_over: Option<GameResult>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub message: Option<String>,
    seeds: SmallRng,
}

impl GameState {
    pub fn new(mode: GameMode) -> Self {
        Self::with_seed(mode, rand::random())
    }

    /// Game whose AI moves are reproducible from `seed`
    pub fn with_seed(mode: GameMode, seed: u64) -> Self {
        log::info!("starting {} game (seed {})", mode.label(), seed);
        Self {
            game: Game::with_seed(seed),
            mode,
            current: mode.first_player(),
            game_over: None,
            last_ai_result: None,
            ai_state: AiState::Idle,
            message: None,
            seeds: SmallRng::seed_from_u64(seed),
        }
    }

    /// Seed for the next worker engine
    fn next_engine_seed(&mut self) -> u64 {
        self.seeds.gen()
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        self.current == Player::Human
    }

    /// Check if it's an AI's turn
    pub fn is_ai_turn(&self) -> bool {
        !self.is_human_turn()
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt a human move at the given position
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }
        if !self.is_human_turn() || self.is_ai_thinking() {
            return Err("Not your turn".to_string());
        }
        self.execute_move(pos)
    }

    /// Place the current role's stone and advance the turn
    fn execute_move(&mut self, pos: Pos) -> Result<(), String> {
        let player = self.current;
        self.game
            .place(pos.row.into(), pos.col.into(), player.stone())
            .map_err(|e| e.to_string())?;
        self.message = None;

        if self.game.is_game_over() {
            let result = self.finish();
            log::info!("game over: {}", result.headline(self.mode));
            self.game_over = Some(result);
            return Ok(());
        }

        self.current = self.mode.next_player(player);
        Ok(())
    }

    fn finish(&self) -> GameResult {
        let winner = self.game.check_winner();
        GameResult {
            winner: winner.and_then(|stone| self.mode.player_of(stone)),
            winning_line: winner.and_then(|_| self.game.board().winning_line()),
        }
    }

    /// Start the AI search on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }

        let player = self.current;
        let strategy = Strategy::from_flag(player == Player::AlphaBeta);
        let mut board = self.game.board().clone();
        let seed = self.next_engine_seed();
        let (tx, rx) = channel();

        thread::spawn(move || {
            thread::sleep(AI_MOVE_DELAY);
            let mut engine = AIEngine::with_seed(seed);
            let result = engine.get_move_with_stats(&mut board, strategy);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            player,
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Apply the AI's move once the worker reports back
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, player, .. } => match receiver.try_recv() {
                Ok(result) => Some((result, *player)),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    log::warn!("AI worker dropped without a move");
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        let Some((move_result, player)) = result else {
            return;
        };
        self.ai_state = AiState::Idle;
        self.last_ai_result = Some(move_result.clone());

        match move_result.best_move {
            Some(pos) if player == self.current => {
                if let Err(msg) = self.execute_move(pos) {
                    log::warn!("AI move rejected: {}", msg);
                    self.message = Some(msg);
                }
            }
            Some(_) => log::warn!("discarding stale AI move for {}", player.label()),
            None => self.message = Some("AI could not find a move".to_string()),
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Live threats of both colors, for highlighting
    pub fn threats(&self) -> Vec<(Stone, Threat)> {
        [Stone::Black, Stone::White]
            .into_iter()
            .flat_map(|stone| {
                self.game
                    .detect_threats(stone)
                    .into_iter()
                    .map(move |threat| (stone, threat))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_order() {
        let human = GameMode::HumanVsAi;
        assert_eq!(human.first_player(), Player::Human);
        assert_eq!(human.next_player(Player::Human), Player::Minimax);
        assert_eq!(human.next_player(Player::Minimax), Player::Human);

        let ai = GameMode::AiVsAi;
        assert_eq!(ai.first_player(), Player::AlphaBeta);
        assert_eq!(ai.next_player(Player::Minimax), Player::AlphaBeta);
        assert_eq!(ai.player_of(Stone::Black), Some(Player::AlphaBeta));
    }

    #[test]
    fn test_human_move_passes_turn() {
        let mut state = GameState::new(GameMode::HumanVsAi);
        assert!(state.try_place_stone(Pos::new(7, 7)).is_ok());
        assert_eq!(state.current, Player::Minimax);
        assert_eq!(state.game.board().get(Pos::new(7, 7)), Stone::Black);
        assert!(state.try_place_stone(Pos::new(7, 8)).is_err());
    }

    #[test]
    fn test_win_ends_game() {
        let mut state = GameState::new(GameMode::HumanVsAi);
        for col in 0..4 {
            state.game.place(0, col, Stone::Black).unwrap();
        }
        state.try_place_stone(Pos::new(0, 4)).unwrap();

        let result = state.game_over.unwrap();
        assert_eq!(result.winner, Some(Player::Human));
        assert_eq!(result.headline(state.mode), "You win!");
        assert!(result.winning_line.is_some());
        assert!(state.try_place_stone(Pos::new(5, 5)).is_err());
    }

    #[test]
    fn test_engine_seeds_follow_session_seed() {
        let mut a = GameState::with_seed(GameMode::AiVsAi, 17);
        let mut b = GameState::with_seed(GameMode::AiVsAi, 17);
        let first = a.next_engine_seed();
        assert_eq!(first, b.next_engine_seed());
        assert_eq!(a.next_engine_seed(), b.next_engine_seed());
        assert_ne!(first, a.next_engine_seed());
    }

    #[test]
    fn test_headlines() {
        let tie = GameResult {
            winner: None,
            winning_line: None,
        };
        assert_eq!(tie.headline(GameMode::AiVsAi), "It's a tie!");

        let minimax = GameResult {
            winner: Some(Player::Minimax),
            winning_line: None,
        };
        assert_eq!(minimax.headline(GameMode::HumanVsAi), "AI wins!");
        assert_eq!(minimax.headline(GameMode::AiVsAi), "AI (Minimax) wins!");
    }
}
