//! Demo bot that always answers the same column.
//!
//! The column is taken from the first argument, defaulting to 0. Useful
//! as a deterministic opponent.

use std::env;
use std::io::{self, BufRead, Write};

fn main() -> io::Result<()> {
    let column: usize = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        line?;
        println!("{column}");
        io::stdout().flush()?;
    }
    Ok(())
}
