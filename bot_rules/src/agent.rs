//! Agent identity.
//!
//! Each bot deliberates over its own facts, so a knowledge base is tied to
//! the agent that built it. The id shows up in every log line the store
//! emits, which is how interleaved output from several bots is told apart.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Owner of one knowledge base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentId(pub Uuid);

impl AgentId {
    /// A fresh random id, for a newly spawned bot.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Reuse an id the host already assigned to the bot's game object.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// The all-zero id. Stable across runs, so snapshots compare equal.
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for AgentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
