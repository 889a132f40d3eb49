//! Gomoku in the terminal.
//!
//! ## Usage
//!
//! - `gomoku-cli` - Ask for the game mode interactively
//! - `gomoku-cli --mode human --human-first` - Play `X` against the minimax AI
//! - `gomoku-cli --mode ai --seed 7` - Watch alpha-beta (`X`) play minimax (`O`)

use std::io::{self, Write};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use gomoku::{AIEngine, Game, Player, Stone, Strategy};

/// Text front end for the Gomoku search engine
#[derive(Parser)]
#[command(name = "gomoku-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Game mode; asked interactively when omitted
    #[arg(long, value_enum)]
    mode: Option<Mode>,

    /// Move before the AI in human mode
    #[arg(long)]
    human_first: bool,

    /// Seed for the AI's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// More log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Human vs the minimax AI
    Human,
    /// Alpha-beta AI vs minimax AI
    Ai,
}

type Input = io::Lines<io::StdinLock<'static>>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let mut game = Game::with_engine(AIEngine::with_config(gomoku::engine::MAX_DEPTH, rng));
    let mut input = io::stdin().lines();

    let (mode, human_first) = match cli.mode {
        Some(mode) => (mode, cli.human_first),
        None => {
            let mode = choose_mode(&mut input)?;
            let human_first = mode == Mode::Human
                && prompt(&mut input, "Do you want to go first? (y/n): ")?
                    .eq_ignore_ascii_case("y");
            (mode, human_first)
        }
    };

    match mode {
        Mode::Human => play_human(&mut game, &mut input, human_first),
        Mode::Ai => play_ai(&mut game),
    }
}

fn prompt(input: &mut Input, message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush().context("failed to flush stdout")?;
    match input.next() {
        Some(line) => Ok(line.context("failed to read stdin")?.trim().to_string()),
        None => bail!("input closed"),
    }
}

fn choose_mode(input: &mut Input) -> Result<Mode> {
    loop {
        match prompt(input, "Do you want AI vs. Human or AI vs. AI ? (1/2): ")?.as_str() {
            "1" => return Ok(Mode::Human),
            "2" => return Ok(Mode::Ai),
            _ => println!("Invalid option. Try again."),
        }
    }
}

fn parse_move(line: &str) -> Option<(i32, i32)> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    parts.next().is_none().then_some((row, col))
}

fn play_human(game: &mut Game<SmallRng>, input: &mut Input, human_first: bool) -> Result<()> {
    let human = Player::Human.stone();
    let ai = Player::Minimax.stone();
    println!("You are '{}'. AI is '{}'.", human.symbol(), ai.symbol());
    println!("{}", game.board());

    let mut human_turn = human_first;
    while !game.is_game_over() {
        if human_turn {
            loop {
                let line = prompt(input, "Your move (row col): ")?;
                let Some((row, col)) = parse_move(&line) else {
                    println!("Enter two numbers separated by space.");
                    continue;
                };
                match game.place(row, col, human) {
                    Ok(_) => break,
                    Err(err) => {
                        log::debug!("{err}");
                        println!("Invalid move. Try again.");
                    }
                }
            }
        } else {
            println!("\nAI's turn...");
            ai_move(game, Player::Minimax)?;
        }

        println!("{}", game.board());
        human_turn = !human_turn;
    }

    match game.check_winner() {
        Some(stone) if stone == ai => println!("\nAI wins!"),
        Some(_) => println!("\nYou win! Congratulations!"),
        None => println!("\nIt's a tie!"),
    }
    Ok(())
}

fn play_ai(game: &mut Game<SmallRng>) -> Result<()> {
    println!(
        "Player 1: AI (alpha-beta) '{}'. Player 2: AI (minimax) '{}'.",
        Player::AlphaBeta.stone().symbol(),
        Player::Minimax.stone().symbol()
    );
    println!("{}", game.board());

    let mut current = Player::AlphaBeta;
    while !game.is_game_over() {
        println!("\n{}'s turn...", current.label());
        ai_move(game, current)?;
        println!("{}", game.board());

        current = match current {
            Player::AlphaBeta => Player::Minimax,
            _ => Player::AlphaBeta,
        };
    }

    match game.check_winner() {
        Some(Stone::White) => println!("\nMinimax (O) wins!"),
        Some(_) => println!("\nAlphaBeta (X) wins!"),
        None => println!("\nIt's a tie!"),
    }
    Ok(())
}

/// Search and play one AI move for `player`
fn ai_move(game: &mut Game<SmallRng>, player: Player) -> Result<()> {
    let start = Instant::now();
    let strategy = Strategy::from_flag(player == Player::AlphaBeta);
    let result = game.get_best_move_with_stats(strategy);

    let Some(pos) = result.best_move else {
        bail!("{} found no move", player.label());
    };
    game.place(pos.row.into(), pos.col.into(), player.stone())
        .with_context(|| format!("{} chose an illegal move", player.label()))?;

    println!(
        "{} ({}) moved to ({}, {}) in {:.2}s",
        player.label(),
        player.stone().symbol(),
        pos.row,
        pos.col,
        start.elapsed().as_secs_f64()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("7 8"), Some((7, 8)));
        assert_eq!(parse_move("  3\t-1 "), Some((3, -1)));
        assert_eq!(parse_move("7"), None);
        assert_eq!(parse_move("7 x"), None);
        assert_eq!(parse_move("7 8 9"), None);
    }
}
