//! Sequential round-robin scheduling and score accumulation.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use crate::agent::Agent;
use crate::configuration::Configuration;
use crate::logger::init_logger;
use crate::match_runner::{run_match, MatchOutcome};

/// Runs every unordered pairing of the given programs and accumulates
/// point totals.
///
/// Each pairing plays the configured number of rounds; a round is two
/// matches with colors swapped, so neither program keeps the first-move
/// advantage. Matches run strictly one at a time, and every match
/// resolves into a [`MatchOutcome`] whatever its bots do, so a broken
/// entrant can never abort the tournament.
pub struct Tournament {
    agents: Vec<Arc<Agent>>,
    config: Configuration,
}

impl Tournament {
    /// Creates a tournament over `agents`.
    pub fn new(agents: Vec<Arc<Agent>>, config: Configuration) -> Tournament {
        if config.log {
            init_logger();
        }
        Tournament { agents, config }
    }

    /// Plays all pairings and returns the standings, best first.
    pub fn play(&self) -> Vec<(Arc<Agent>, u32)> {
        let mut points: HashMap<Arc<Agent>, u32> =
            self.agents.iter().map(|agent| (agent.clone(), 0)).collect();

        for first in 0..self.agents.len() {
            for second in (first + 1)..self.agents.len() {
                self.play_pairing(&self.agents[first], &self.agents[second], &mut points);
            }
        }

        let mut standings: Vec<_> = points.into_iter().collect();
        standings.sort_by(|(a, ap), (b, bp)| bp.cmp(ap).then_with(|| a.name.cmp(&b.name)));
        standings
    }

    fn play_pairing(
        &self,
        first: &Arc<Agent>,
        second: &Arc<Agent>,
        points: &mut HashMap<Arc<Agent>, u32>,
    ) {
        info!(first = %first, second = %second, games = self.config.games_per_pairing, "pairing");
        for game in 0..self.config.games_per_pairing {
            let outcome = run_match(first, second, self.config.time_budget);
            *points.get_mut(first).expect("every agent is scored") += outcome.white_points;
            *points.get_mut(second).expect("every agent is scored") += outcome.black_points;
            self.report(game, first, second, &outcome);

            // Same round, colors swapped.
            let outcome = run_match(second, first, self.config.time_budget);
            *points.get_mut(first).expect("every agent is scored") += outcome.black_points;
            *points.get_mut(second).expect("every agent is scored") += outcome.white_points;
            self.report(game, second, first, &outcome);
        }
    }

    fn report(&self, game: usize, white: &Agent, black: &Agent, outcome: &MatchOutcome) {
        if !self.config.verbose {
            return;
        }
        println!("Game {game}, bots [{white}, {black}]");
        println!(
            "Status {}, score {}:{}",
            outcome.status, outcome.white_points, outcome.black_points
        );
        println!("Moves {:?}", outcome.history);
    }
}
