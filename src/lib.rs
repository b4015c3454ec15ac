//! # Connect Arena
//!
//! A round-robin tournament runner for externally-launched Connect-Four
//! bots.
//!
//! Bots are ordinary executables speaking a line protocol on their
//! standard streams: the engine sends either the start token `Go` or the
//! opponent's last column index, and the bot answers with one line
//! holding the column it plays (0 to 6). Each bot gets a wall-clock time
//! budget for the whole game; overrunning it, replying with something
//! unparsable, or playing an impossible column forfeits the game on the
//! spot. Programs that fail to start are disqualified. Every failure
//! resolves into a match score, so one broken entrant never takes the
//! tournament down with it.
//!
//! It provides:
//! - Board state and win detection ([`board`])
//! - A cancellable, deadline-bound turn exchange with one bot process
//!   ([`bot_process`])
//! - Game and match orchestration ([`game`], [`match_runner`])
//! - Round-robin scheduling and standings ([`tournament`])
//!
//! # Usage Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use connect_arena::prelude::*;
//!
//! fn main() {
//!     let config = Configuration::new()
//!         .with_time_budget(Duration::from_secs(2))
//!         .with_games_per_pairing(1);
//!
//!     let agents = vec![
//!         Arc::new(Agent::from_path("bots/alpha")),
//!         Arc::new(Agent::from_path("bots/beta")),
//!     ];
//!
//!     println!("final table:");
//!     for (agent, points) in Tournament::new(agents, config).play() {
//!         println!("{agent}: {points}");
//!     }
//! }
//! ```
//!
//! # Bot Requirements
//!
//! - Reply exactly one line per received line, containing a decimal
//!   column index.
//! - Answer within the configured time budget; it is shared across the
//!   whole game.
//! - Exit once standard input closes. A bot that lingers is killed at
//!   match end anyway.
//!
//! See `src/bin/random_bot.rs` for a complete reference bot.
#![warn(missing_docs)]

pub mod agent;
pub mod board;
pub mod bot_process;
pub mod configuration;
pub mod error;
pub mod game;
mod logger;
pub mod match_runner;
pub mod tournament;

/// Commonly used types for quick access.
///
/// ```rust
/// use connect_arena::prelude::*;
/// ```
pub mod prelude {
    pub use crate::agent::Agent;
    pub use crate::board::{Board, Side};
    pub use crate::configuration::Configuration;
    pub use crate::match_runner::{run_match, MatchOutcome};
    pub use crate::tournament::Tournament;
}
