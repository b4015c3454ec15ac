//! Config for the tournament loop.
//!
//! A [`Configuration`] can be built programmatically with
//! [`Configuration::new()`] and the chainable setters, or read from
//! environment variables with [`Configuration::from_env()`].
//!
//! # Environment Variables
//!
//! The following environment variables can be used to override
//! configuration values. All values are optional; flags are
//! case-insensitive and enabled by setting the value to `"true"`.
//!
//! - `ARENA_TIME_BUDGET_SECS` — per-bot time budget per game, in seconds (default: `2`)
//! - `ARENA_GAMES_PER_PAIRING` — color-swapped rounds per pairing (default: `1`)
//! - `ARENA_VERBOSE` — print per-game reports to stdout (default: `true`)
//! - `ARENA_LOG` — enable logging to a file (default: `false`)

use std::time::Duration;

/// Settings consumed by the tournament loop.
#[derive(Debug, Clone, Copy)]
pub struct Configuration {
    pub(crate) time_budget: Duration,
    pub(crate) games_per_pairing: usize,
    pub(crate) verbose: bool,
    pub(crate) log: bool,
}

impl Configuration {
    /// Create a new configuration with default parameters.
    ///
    /// By default:
    /// - Each bot gets a two second budget per game.
    /// - Each pairing plays one round (two color-swapped matches).
    /// - Per-game reports are printed to stdout.
    /// - Logging to file is disabled.
    pub fn new() -> Self {
        Self {
            time_budget: Duration::from_secs(2),
            games_per_pairing: 1,
            verbose: true,
            log: false,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// See the module documentation for the recognized variables. Any
    /// other value (including unset) results in the default for each
    /// field.
    pub fn from_env() -> Self {
        fn get_env_flag(var: &str, default: bool) -> bool {
            match std::env::var(var) {
                Ok(val) => val.eq_ignore_ascii_case("true"),
                Err(_) => default,
            }
        }

        fn get_env_u64(var: &str) -> Option<u64> {
            std::env::var(var).ok()?.parse().ok()
        }

        let defaults = Self::new();
        Self {
            time_budget: get_env_u64("ARENA_TIME_BUDGET_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.time_budget),
            games_per_pairing: get_env_u64("ARENA_GAMES_PER_PAIRING")
                .map(|games| games as usize)
                .unwrap_or(defaults.games_per_pairing),
            verbose: get_env_flag("ARENA_VERBOSE", defaults.verbose),
            log: get_env_flag("ARENA_LOG", defaults.log),
        }
    }

    /// Sets the total clock-time each bot may spend across one game.
    ///
    /// This acts as a time budget: it shrinks with every reply, and a
    /// bot that exhausts it forfeits by timeout.
    #[must_use]
    pub fn with_time_budget(mut self, value: Duration) -> Self {
        self.time_budget = value;
        self
    }

    /// Sets the number of color-swapped rounds each pairing plays.
    #[must_use]
    pub fn with_games_per_pairing(mut self, value: usize) -> Self {
        self.games_per_pairing = value;
        self
    }

    /// Enable or disable per-game reports on stdout.
    #[must_use]
    pub fn with_verbose(mut self, value: bool) -> Self {
        self.verbose = value;
        self
    }

    /// Enable or disable logging to file.
    #[must_use]
    pub fn with_log(mut self, value: bool) -> Self {
        self.log = value;
        self
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}
