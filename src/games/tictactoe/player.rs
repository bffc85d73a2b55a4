//! Participants in a game.

use super::Mark;
use tracing::instrument;

/// A named participant writing one mark for the whole game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    mark: Mark,
}

impl Player {
    /// Creates a new player.
    #[instrument(skip(name), fields(name = %name.as_ref()))]
    pub fn new(name: impl AsRef<str>, mark: Mark) -> Self {
        Self {
            name: name.as_ref().to_string(),
            mark,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Mark this player writes.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Prompt shown when this player is asked for a move.
    pub fn prompt(&self) -> String {
        format!("{}'s Turn: ", self.name)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.mark)
    }
}
