//! gogrid: a minimal Go board engine.
//!
//! ## Usage
//!
//! - `gogrid` - Replay the demo game
//! - `gogrid show <FILE>` - Print a board read from a file
//! - `gogrid random` - Play random moves on an empty board

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::Level;

use gogrid::constants::MAX_N;
use gogrid::game::Game;
use gogrid::grid::Coord;
use gogrid::notation::parse_board;

/// gogrid: a minimal Go board engine with flip captures
#[derive(Parser)]
#[command(name = "gogrid")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a short game showing captures on an 11x11 board
    Demo,
    /// Print a board read from a file and the player to move
    Show {
        /// File holding one board row per line
        file: PathBuf,
        /// Run one capture pass before printing
        #[arg(long)]
        resolve: bool,
    },
    /// Play random moves on an empty board
    Random {
        /// Board size
        #[arg(long, default_value_t = gogrid::constants::N, value_parser = parse_size)]
        size: usize,
        /// Number of moves to play (stops early once the board is full)
        #[arg(long, default_value_t = 40)]
        moves: usize,
        /// Seed for the random number generator
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Show { file, resolve }) => run_show(&file, resolve),
        Some(Commands::Random { size, moves, seed }) => run_random(size, moves, seed),
        Some(Commands::Demo) | None => run_demo(),
    }
}

/// Parse a `--size` argument, rejecting boards too large to allocate sensibly.
fn parse_size(s: &str) -> Result<usize, String> {
    let size: usize = s.parse().map_err(|e| format!("{s:?} is not a board size: {e}"))?;
    if !(1..=MAX_N).contains(&size) {
        return Err(format!("board size must be between 1 and {MAX_N}, got {size}"));
    }
    Ok(size)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Moves of the demo game. White moves first; the last move captures the
/// Black stone at (5, 6).
const DEMO_MOVES: &[Coord] = &[(5, 5), (5, 6), (5, 7), (4, 5), (4, 6), (6, 5), (6, 6)];

fn run_demo() -> Result<()> {
    println!("gogrid: flip-capture Go demo\n");

    let mut game = Game::new(11);
    for &(row, col) in DEMO_MOVES {
        let outcome = game
            .play(row, col)
            .with_context(|| format!("demo move ({row}, {col})"))?;
        println!(
            "{} at ({row}, {col}), {} stone(s) captured",
            outcome.color, outcome.captured
        );
        println!("{game}\n");
    }

    let (row, col) = DEMO_MOVES[DEMO_MOVES.len() - 1];
    if let Err(err) = game.play(row, col) {
        println!("Replaying ({row}, {col}) is rejected: {err}");
    }
    Ok(())
}

fn run_show(file: &Path, resolve: bool) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("reading board from {}", file.display()))?;
    let mut game =
        parse_board(&text).with_context(|| format!("parsing board from {}", file.display()))?;
    if resolve {
        let flipped = game.resolve_captures();
        tracing::info!(flipped, "resolved captures");
    }
    println!("{game}");
    println!("{} to move", game.active_player());
    Ok(())
}

fn run_random(size: usize, moves: usize, seed: Option<u64>) -> Result<()> {
    let seed = seed.unwrap_or_else(|| fastrand::u64(..));
    tracing::info!(seed, size, moves, "starting random game");
    let mut rng = fastrand::Rng::with_seed(seed);

    let mut game = Game::new(size);
    let mut captured = 0;
    for _ in 0..moves {
        let empty: Vec<Coord> = game
            .grid()
            .all_points()
            .filter(|p| p.is_empty())
            .map(|p| p.coord())
            .collect();
        if empty.is_empty() {
            break;
        }
        let (row, col) = empty[rng.usize(..empty.len())];
        captured += game.play(row, col)?.captured;
    }

    println!("{game}");
    println!(
        "seed {seed}: {captured} stone(s) captured, {} to move",
        game.active_player()
    );
    Ok(())
}
