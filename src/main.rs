//! Othello-Rust: an Othello engine.
//!
//! ## Usage
//!
//! - `othello-rust` - Show a demo
//! - `othello-rust protocol` - Start the text protocol on stdin/stdout
//! - `othello-rust selfplay` - Play the engine against a random or engine opponent
//! - `othello-rust demo` - Run the demo
//!
//! Set `RUST_LOG` (e.g. `RUST_LOG=debug`) to control log output on stderr.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use fastrand::Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use othello_rust::board::{Player, str_coord};
use othello_rust::constants::DEFAULT_DEPTH;
use othello_rust::game::{Game, Outcome, Status};
use othello_rust::playout::random_move;
use othello_rust::protocol::ProtocolEngine;
use othello_rust::search::Searcher;

/// Othello-Rust: an Othello engine with alpha-beta search
#[derive(Parser)]
#[command(name = "othello-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the text protocol server for use with front ends
    Protocol {
        /// Search depth in plies
        #[arg(short, long, default_value_t = DEFAULT_DEPTH, value_parser = clap::value_parser!(u32).range(1..))]
        depth: u32,
    },
    /// Play a series of games and report the results
    Selfplay {
        /// Search depth in plies
        #[arg(short, long, default_value_t = DEFAULT_DEPTH, value_parser = clap::value_parser!(u32).range(1..))]
        depth: u32,
        /// Number of games; the engine alternates colors
        #[arg(short, long, default_value_t = 2)]
        games: u32,
        /// Seed for the random opponent
        #[arg(long, default_value_t = 1)]
        seed: u64,
        /// Who the engine plays against
        #[arg(long, value_enum, default_value_t = Opponent::Random)]
        opponent: Opponent,
    },
    /// Run a simple demo of the engine
    Demo,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Opponent {
    /// Uniformly random legal moves
    Random,
    /// The same engine at the same depth
    Engine,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Protocol { depth }) => {
            info!(depth, "starting text protocol");
            let mut engine = ProtocolEngine::with_depth(depth);
            engine.run(std::io::stdin().lock(), std::io::stdout())
        }
        Some(Commands::Selfplay {
            depth,
            games,
            seed,
            opponent,
        }) => run_selfplay(depth, games, seed, opponent),
        Some(Commands::Demo) | None => run_demo(),
    }
}

fn run_selfplay(depth: u32, games: u32, seed: u64, opponent: Opponent) -> anyhow::Result<()> {
    let mut rng = Rng::with_seed(seed);
    let mut searcher = Searcher::default();
    let (mut wins, mut losses, mut draws) = (0u32, 0u32, 0u32);

    for n in 0..games {
        let engine_color = if n % 2 == 0 { Player::Black } else { Player::White };
        let mut game = Game::new();

        let outcome = loop {
            let player = match game.status() {
                Status::Over(outcome) => break outcome,
                Status::Ongoing(player) => player,
            };
            let pt = if player == engine_color || opponent == Opponent::Engine {
                game.analyze(&mut searcher, player, depth)?
                    .best_move
                    .context("search returned no move")?
            } else {
                random_move(game.board(), player, &mut rng).context("no random move")?
            };
            game.make_move(pt, player)?;
        };

        let (black, white) = game.score();
        println!(
            "game {}: engine {engine_color}, {outcome} ({black}-{white}, {} moves, {} passes)",
            n + 1,
            game.moves_played(),
            game.passes()
        );
        match outcome {
            Outcome::Winner(p) if p == engine_color => wins += 1,
            Outcome::Winner(_) => losses += 1,
            Outcome::Draw => draws += 1,
        }
    }

    println!("engine: {wins} wins, {losses} losses, {draws} draws");
    Ok(())
}

fn run_demo() -> anyhow::Result<()> {
    println!("Othello-Rust: alpha-beta Othello engine\n");

    let mut game = Game::new();
    let mut searcher = Searcher::default();
    println!("{}", game.board());

    println!("=== Engine vs engine, depth 3, first 6 plies ===");
    for _ in 0..6 {
        let Some(player) = game.current_player() else {
            break;
        };
        let result = game.analyze(&mut searcher, player, 3)?;
        let pt = result.best_move.context("search returned no move")?;
        game.make_move(pt, player)?;
        println!(
            "{player} plays {} (score {}, {} nodes)",
            str_coord(pt),
            result.score,
            result.nodes
        );
    }

    println!("\n{}", game.board());
    let (black, white) = game.score();
    println!("Score: black {black}, white {white}");
    Ok(())
}
