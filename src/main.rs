//! Command-line entry point for the arena.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::bail;
use clap::Parser;

use connect_arena::prelude::*;

/// Run a round-robin tournament between external Connect-Four bots.
#[derive(Parser)]
#[command(name = "connect-arena")]
#[command(about = "Round-robin tournament arena for external Connect-Four bots")]
struct Cli {
    /// Time budget per bot and game, in seconds
    #[arg(short, long, default_value_t = 2)]
    timeout: u64,

    /// Number of color-swapped rounds per pairing
    #[arg(short, long, default_value_t = 1)]
    games: usize,

    /// Path to a bot executable; repeat for every entrant
    #[arg(short, long = "program", value_name = "PATH")]
    program: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.program.len() < 2 {
        bail!("at least two programs expected");
    }
    let missing: Vec<_> = cli.program.iter().filter(|path| !path.is_file()).collect();
    if !missing.is_empty() {
        bail!("{missing:?} do not exist");
    }

    let config = Configuration::from_env()
        .with_time_budget(Duration::from_secs(cli.timeout))
        .with_games_per_pairing(cli.games);

    let agents = cli
        .program
        .into_iter()
        .map(|path| Arc::new(Agent::from_path(path)))
        .collect();

    let standings = Tournament::new(agents, config).play();

    println!("final table:");
    for (agent, points) in standings {
        println!("{agent}: {points}");
    }
    Ok(())
}
