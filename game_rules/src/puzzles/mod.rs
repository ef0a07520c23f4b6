//! Puzzle definitions.

use serde::{Deserialize, Serialize};

use crate::items::ItemId;

/// Sanity restored by solving any puzzle.
pub const SOLVE_SANITY_BONUS: u8 = 15;

/// A riddle attached to a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    /// The riddle text shown to the player.
    pub prompt: String,
    /// The accepted answer.
    pub solution: String,
    /// Item granted on the first correct answer.
    pub reward: ItemId,
}

impl Puzzle {
    pub fn new(prompt: impl Into<String>, solution: impl Into<String>, reward: ItemId) -> Self {
        Puzzle {
            prompt: prompt.into(),
            solution: solution.into(),
            reward,
        }
    }

    /// Checks an answer, ignoring letter case but not whitespace.
    pub fn accepts(&self, answer: &str) -> bool {
        answer.to_lowercase() == self.solution.to_lowercase()
    }
}
