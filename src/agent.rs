//! Identity of one competing program.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;

/// One entrant of the tournament: an executable and its launch arguments.
///
/// Agents key the score table, so equality and hashing follow the display
/// name and arguments, not the handle identity.
#[derive(Debug)]
pub struct Agent {
    /// Name shown in reports and standings.
    pub name: String,
    /// Path to the executable.
    pub path: PathBuf,
    /// Extra arguments passed on launch.
    pub args: Vec<String>,
}

impl Agent {
    /// Creates an agent with an explicit display name.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, args: Vec<String>) -> Agent {
        Agent {
            name: name.into(),
            path: path.into(),
            args,
        }
    }

    /// Creates an argument-less agent named after its executable path.
    pub fn from_path(path: impl Into<PathBuf>) -> Agent {
        let path = path.into();
        Agent {
            name: path.display().to_string(),
            path,
            args: Vec::new(),
        }
    }
}

impl PartialEq for Agent {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.args == other.args
    }
}

impl Eq for Agent {}

impl Hash for Agent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.args.hash(state);
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
