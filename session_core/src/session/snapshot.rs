//! Snapshot persistence for sessions.
//!
//! A snapshot is the serializable record of a playthrough: the session id
//! plus the whole [`GameState`]. Live presentation state (dialogue,
//! transients) is deliberately absent and does not survive a restore.

use game_rules::{GameState, MAX_VITAL};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, SnapshotError};

use super::{Session, SessionId};

/// Everything a saved session carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session: SessionId,
    pub state: GameState,
}

impl SessionSnapshot {
    /// Encodes the snapshot as JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Session {
    /// Captures the current playthrough as a snapshot.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session: self.id,
            state: self.state.clone(),
        }
    }

    /// Restores a snapshot into this session, adopting its id and state.
    ///
    /// The snapshot's location must exist in the world in play. Vitals and
    /// the story index are clamped back into range, and any live dialogue or
    /// transient effects are dropped.
    pub fn restore(&mut self, snapshot: SessionSnapshot) -> Result<(), EngineError> {
        if self.world.room(snapshot.state.location).is_none() {
            return Err(EngineError::InvalidRoom(snapshot.state.location));
        }

        let mut state = snapshot.state;
        state.health = state.health.min(MAX_VITAL);
        state.sanity = state.sanity.min(MAX_VITAL);
        state.current_story = state.current_story.min(self.world.last_story_index());

        self.id = snapshot.session;
        self.state = state;
        self.dialogue.clear();
        self.effects.clear_all();
        Ok(())
    }
}
