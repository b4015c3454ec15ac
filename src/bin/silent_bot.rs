//! Demo bot that reads its turns but never answers.
//!
//! Exists to exercise the engine's timeout path: the engine must kill it
//! and score the game for the opponent.

use std::io::{self, BufRead};
use std::thread;
use std::time::Duration;

fn main() {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if line.is_err() {
            break;
        }
        thread::sleep(Duration::from_secs(3600));
    }
}
