//! One external bot process and its line-oriented turn exchange.

use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::SpawnError;

// Exclusive handles to the child's pipes. They travel into the exchange
// worker for the duration of one turn and come back through the channel
// when the worker answers in time. After a timeout they are lost together
// with the worker; the process is killed then, and the contract forbids
// further requests against a terminated bot.
#[derive(Debug)]
struct BotIo {
    stdin: ChildStdin,
    reader: BufReader<ChildStdout>,
}

/// A launched bot: one child process plus its turn-exchange pipes.
///
/// The process is killed when the handle is dropped, whatever happened
/// before, so a `BotProcess` held in a scope is released exactly once on
/// every exit path.
#[derive(Debug)]
pub struct BotProcess {
    child: Child,
    io: Option<BotIo>,
    alive: bool,
}

impl BotProcess {
    /// Launches `path` with piped standard streams.
    ///
    /// # Errors
    ///
    /// [`SpawnError`] when the program cannot be spawned or is already
    /// dead right after launch.
    pub fn start(path: &Path, args: &[String]) -> Result<BotProcess, SpawnError> {
        let mut child = Command::new(path)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|source| SpawnError::Launch {
                path: path.to_path_buf(),
                source,
            })?;

        if let Ok(Some(status)) = child.try_wait() {
            return Err(SpawnError::DiedAtStartup {
                path: path.to_path_buf(),
                status,
            });
        }

        let stdin = child.stdin.take().expect("stdin is piped");
        let reader = BufReader::new(child.stdout.take().expect("stdout is piped"));
        debug!(path = %path.display(), pid = child.id(), "bot started");

        Ok(BotProcess {
            child,
            io: Some(BotIo { stdin, reader }),
            alive: true,
        })
    }

    /// Sends `message` and waits at most `deadline` for one reply line.
    ///
    /// The write and the blocking read run on a worker thread while this
    /// call waits on a channel. When the deadline elapses the process is
    /// forcibly terminated, so the lingering read unblocks on pipe
    /// closure eventually, and the empty string is returned. I/O failures
    /// inside the worker come back as the error's message; they never
    /// escape as a panic or error.
    pub fn request_turn(&mut self, message: &str, deadline: Duration) -> String {
        let Some(mut io) = self.io.take() else {
            debug!(pid = self.child.id(), "turn requested with no usable pipes");
            return String::new();
        };

        let line = format!("{message}\n");
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let reply = exchange(&mut io, &line);
            // The receiver is gone if the caller timed out meanwhile.
            let _ = tx.send((reply, io));
        });

        match rx.recv_timeout(deadline) {
            Ok((reply, io)) => {
                self.io = Some(io);
                reply
            }
            Err(_) => {
                warn!(pid = self.child.id(), "no reply within deadline, killing bot");
                self.terminate();
                String::new()
            }
        }
    }

    /// Best-effort forced termination. Idempotent, never panics.
    pub fn terminate(&mut self) {
        if !self.alive {
            return;
        }
        self.alive = false;
        if let Err(e) = self.child.kill() {
            debug!(pid = self.child.id(), "kill failed: {e}");
        }
        let _ = self.child.wait();
    }

    /// Whether the process is still running.
    pub fn is_alive(&mut self) -> bool {
        self.alive && matches!(self.child.try_wait(), Ok(None))
    }
}

impl Drop for BotProcess {
    fn drop(&mut self) {
        self.terminate();
    }
}

fn exchange(io: &mut BotIo, line: &str) -> String {
    match try_exchange(io, line) {
        Ok(reply) => reply.trim().to_owned(),
        Err(e) => e.to_string(),
    }
}

fn try_exchange(io: &mut BotIo, line: &str) -> std::io::Result<String> {
    io.stdin.write_all(line.as_bytes())?;
    io.stdin.flush()?;
    let mut reply = String::new();
    io.reader.read_line(&mut reply)?;
    Ok(reply)
}
