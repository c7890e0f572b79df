//! GoBotGo: play Go through a turn-gated rules engine.
//!
//! ## Usage
//!
//! - `gobotgo` - Run the demo
//! - `gobotgo play` - Local two-player console on stdin/stdout
//! - `gobotgo demo` - Two random bots play each other on separate threads
//!
//! Set `RUST_LOG=debug` to see every move.

use std::sync::Arc;
use std::thread;

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use log::info;

use gobotgo::bot::RandomBot;
use gobotgo::console::Console;
use gobotgo::constants::{DEFAULT_BOARD_SIZE, DEFAULT_STONES};
use gobotgo::game::GameConfig;
use gobotgo::registry::{Match, MatchRegistry, PlayerId};

/// GoBotGo: a turn-gated Go rules engine
#[derive(Parser)]
#[command(name = "gobotgo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Clone, Copy)]
struct MatchArgs {
    /// Board size (NxN)
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE as u16, value_parser = clap::value_parser!(u16).range(1..))]
    size: u16,
    /// Stones each player may place
    #[arg(long, default_value_t = DEFAULT_STONES)]
    stones: u32,
}

impl From<MatchArgs> for GameConfig {
    fn from(args: MatchArgs) -> Self {
        GameConfig {
            board_size: usize::from(args.size),
            stones_per_player: args.stones,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Play a local match through the text console
    Play {
        #[command(flatten)]
        game: MatchArgs,
    },
    /// Watch two random bots play each other
    Demo {
        #[command(flatten)]
        game: MatchArgs,
        /// Seed for the bots (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play { game }) => {
            let mut console = Console::new(game.into());
            console.run().context("console I/O failed")
        }
        Some(Commands::Demo { game, seed }) => run_demo(game.into(), seed),
        None => run_demo(
            GameConfig {
                board_size: 9,
                stones_per_player: 40,
            },
            None,
        ),
    }
}

fn spawn_bot(
    game: Arc<Match>,
    id: PlayerId,
    seed: Option<u64>,
) -> thread::JoinHandle<Result<usize>> {
    thread::spawn(move || {
        let mut bot = seed.map_or_else(RandomBot::new, RandomBot::with_seed);
        bot.play_match(&game, id)
            .with_context(|| format!("bot {id} failed"))
    })
}

fn run_demo(config: GameConfig, seed: Option<u64>) -> Result<()> {
    println!("GoBotGo: random bots on a {0}x{0} board\n", config.board_size);

    let registry = MatchRegistry::new(config);
    let black = registry.join(0);
    let white = registry.join(0);

    let handles = [
        spawn_bot(Arc::clone(&black.game), black.id, seed),
        spawn_bot(Arc::clone(&white.game), white.id, seed.map(|s| s.wrapping_add(1))),
    ];
    for handle in handles {
        let turns = handle
            .join()
            .map_err(|_| anyhow!("bot thread panicked"))??;
        info!("bot finished after {turns} turns");
    }

    let state = black.game.state();
    let score = state.score();
    println!("{}", state.board());
    println!("Black: {} (captured {})", score.black, state.ledger(black.color).captured);
    println!("White: {} (captured {})", score.white, state.ledger(white.color).captured);
    println!("Winner: {}", score.leader());
    println!("\n{}", black.game.snapshot().to_json()?);
    Ok(())
}
