//! One match: a pair of bot processes around one game, with the
//! disqualification policy and the winner-to-points mapping.

use std::time::Duration;

use tracing::{info, warn};

use crate::agent::Agent;
use crate::board::Side;
use crate::bot_process::BotProcess;
use crate::game::Game;

/// Points a single game awards to its winner.
pub const MAX_POINTS: u32 = 2;

/// Point pair, status and history of one played match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Points awarded to the white program.
    pub white_points: u32,
    /// Points awarded to the black program.
    pub black_points: u32,
    /// `"Ok"`, `"timeout"`, a move failure's message, or `"DQ"`.
    pub status: String,
    /// Columns played, in order.
    pub history: Vec<usize>,
}

impl MatchOutcome {
    fn disqualified(white_points: u32, black_points: u32) -> MatchOutcome {
        MatchOutcome {
            white_points,
            black_points,
            status: "DQ".to_owned(),
            history: Vec::new(),
        }
    }
}

/// Plays one match between `white` and `black`.
///
/// Both processes are started independently; if either fails to come up
/// the match resolves as a disqualification without a single turn being
/// played. Every process that did start is terminated before this
/// function returns, on all paths.
pub fn run_match(white: &Agent, black: &Agent, budget: Duration) -> MatchOutcome {
    info!(white = %white, black = %black, "starting match");
    let white_bot = BotProcess::start(&white.path, &white.args);
    let black_bot = BotProcess::start(&black.path, &black.args);

    for failure in [&white_bot, &black_bot]
        .into_iter()
        .filter_map(|bot| bot.as_ref().err())
    {
        warn!("{failure}");
    }

    match (white_bot, black_bot) {
        (Ok(mut white_bot), Ok(mut black_bot)) => {
            let outcome = Game::new(&mut white_bot, &mut black_bot, budget).play();
            let (white_points, black_points) = match outcome.winner {
                Some(Side::White) => (MAX_POINTS, 0),
                Some(Side::Black) => (0, MAX_POINTS),
                None => (1, 1),
            };
            MatchOutcome {
                white_points,
                black_points,
                status: outcome.status,
                history: outcome.board.history().to_vec(),
            }
        }
        (Ok(_), Err(_)) => MatchOutcome::disqualified(MAX_POINTS, 0),
        (Err(_), Ok(_)) => MatchOutcome::disqualified(0, MAX_POINTS),
        (Err(_), Err(_)) => MatchOutcome::disqualified(0, 0),
    }
}
