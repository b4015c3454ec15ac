//! Turn state machine for one game between two running bots.

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::board::{Board, Side};
use crate::bot_process::BotProcess;

/// Token sent to the opening bot instead of an opponent move.
pub const START_TOKEN: &str = "Go";

// How a mover forfeits. Kept as a value so the game loop can resolve
// every per-move failure the same way instead of unwinding.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Forfeit {
    Timeout,
    Illegal(String),
}

impl Forfeit {
    fn into_status(self) -> String {
        match self {
            Forfeit::Timeout => "timeout".to_owned(),
            Forfeit::Illegal(message) => message,
        }
    }
}

/// Result of one finished game.
#[derive(Debug)]
pub struct GameOutcome {
    /// Side holding a completed line; `None` on a draw.
    pub winner: Option<Side>,
    /// `"Ok"` for board outcomes, `"timeout"` or the move failure's
    /// message for forfeits.
    pub status: String,
    /// Final board, including the move history.
    pub board: Board,
}

/// Alternates turns between two bots against one board, charging each
/// side's time budget with the wall-clock duration of its turns.
pub struct Game<'a> {
    board: Board,
    white: &'a mut BotProcess,
    black: &'a mut BotProcess,
    white_clock: Duration,
    black_clock: Duration,
}

impl<'a> Game<'a> {
    /// Creates a game in which each side may spend `budget` in total.
    pub fn new(white: &'a mut BotProcess, black: &'a mut BotProcess, budget: Duration) -> Game<'a> {
        Game {
            board: Board::new(),
            white,
            black,
            white_clock: budget,
            black_clock: budget,
        }
    }

    /// Runs the game to completion.
    ///
    /// White opens with [`START_TOKEN`]; afterwards every bot receives
    /// the opponent's previous reply. The game ends on the first forfeit
    /// (immediate win for the other side) or when the board is finished,
    /// in which case the board decides the winner and the status is
    /// `"Ok"`.
    pub fn play(mut self) -> GameOutcome {
        let mut reply = match self.half_move(Side::White, START_TOKEN.to_owned()) {
            Ok(reply) => reply,
            Err(forfeit) => return self.forfeited(Side::White, forfeit),
        };
        while !self.board.finished() {
            reply = match self.half_move(Side::Black, reply) {
                Ok(reply) => reply,
                Err(forfeit) => return self.forfeited(Side::Black, forfeit),
            };
            if self.board.finished() {
                break;
            }
            reply = match self.half_move(Side::White, reply) {
                Ok(reply) => reply,
                Err(forfeit) => return self.forfeited(Side::White, forfeit),
            };
        }
        GameOutcome {
            winner: self.board.winner(),
            status: "Ok".to_owned(),
            board: self.board,
        }
    }

    fn forfeited(self, mover: Side, forfeit: Forfeit) -> GameOutcome {
        debug!(?mover, ?forfeit, "game forfeited");
        GameOutcome {
            winner: Some(mover.opponent()),
            status: forfeit.into_status(),
            board: self.board,
        }
    }

    fn half_move(&mut self, mover: Side, message: String) -> Result<String, Forfeit> {
        let budget = self.clock(mover);
        let bot = match mover {
            Side::White => &mut *self.white,
            Side::Black => &mut *self.black,
        };

        let start = Instant::now();
        let reply = bot.request_turn(&message, budget);
        let remaining = budget.saturating_sub(start.elapsed());
        *self.clock_mut(mover) = remaining;
        trace!(?mover, reply = %reply, remaining_ms = remaining.as_millis() as u64);

        if remaining.is_zero() {
            return Err(Forfeit::Timeout);
        }

        let column: usize = reply.trim().parse().map_err(|_| {
            Forfeit::Illegal(format!("cannot parse '{}' as a column", reply.trim()))
        })?;
        self.board
            .apply_move(column)
            .map_err(|e| Forfeit::Illegal(e.to_string()))?;

        Ok(reply)
    }

    fn clock(&self, side: Side) -> Duration {
        match side {
            Side::White => self.white_clock,
            Side::Black => self.black_clock,
        }
    }

    fn clock_mut(&mut self, side: Side) -> &mut Duration {
        match side {
            Side::White => &mut self.white_clock,
            Side::Black => &mut self.black_clock,
        }
    }
}
