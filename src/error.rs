//! Typed failures of the arena.
//!
//! Every failure here is resolved into a match outcome by the layer that
//! observes it; none of them crosses the tournament loop.

use std::path::PathBuf;
use std::process::ExitStatus;

/// A bot program could not be brought up.
///
/// Handled at match level as a disqualification, never propagated further.
#[derive(Debug, thiserror::Error)]
pub enum SpawnError {
    /// The executable could not be spawned at all.
    #[error("failed to launch {path:?}: {source}")]
    Launch {
        /// Program that failed to start.
        path: PathBuf,
        /// Underlying spawn failure.
        source: std::io::Error,
    },

    /// The process was already dead right after launch.
    #[error("{path:?} terminated unexpectedly ({status})")]
    DiedAtStartup {
        /// Program that died.
        path: PathBuf,
        /// Exit status it died with.
        status: ExitStatus,
    },
}

/// A column that cannot take a piece: out of range or already full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot go to {0}")]
pub struct IllegalMove(pub usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn illegal_move_display() {
        assert_eq!(IllegalMove(3).to_string(), "cannot go to 3");
    }

    #[test]
    fn spawn_error_names_the_program() {
        let err = SpawnError::Launch {
            path: PathBuf::from("bots/missing"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("bots/missing"));
    }
}
