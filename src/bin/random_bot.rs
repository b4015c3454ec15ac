//! Reference bot: plays a uniformly random legal column.
//!
//! Mirrors the engine's view of the game on a local board by applying
//! both the opponent's moves and its own.

use std::io::{self, BufRead, Write};

use rand::seq::SliceRandom;

use connect_arena::board::Board;
use connect_arena::game::START_TOKEN;

fn main() {
    // Any failure here means the engine hung up or we desynced; either
    // way the engine scores it, we just stop.
    if let Err(e) = run() {
        eprintln!("{e}");
    }
}

fn run() -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut board = Board::new();
    let mut rng = rand::thread_rng();

    for line in stdin.lock().lines() {
        let line = line?;
        let message = line.trim();
        if message != START_TOKEN {
            board.apply_move(message.parse()?)?;
        }

        let Some(&column) = board.legal_columns().choose(&mut rng) else {
            break;
        };
        println!("{column}");
        io::stdout().flush()?;
        board.apply_move(column)?;
    }
    Ok(())
}
