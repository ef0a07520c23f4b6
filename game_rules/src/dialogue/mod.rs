//! Dialogue scripts and their effect descriptors.
//!
//! Choices carry data describing what selecting them does instead of
//! callbacks, so scripts serialize cleanly and the session engine stays the
//! only place that mutates state.

use serde::{Deserialize, Serialize};

use crate::items::ItemId;
use crate::state::GameState;
use crate::world::RoomId;

/// A single state change requested by a dialogue choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Shift sanity by a signed amount, saturating at the vital bounds.
    AdjustSanity(i32),
    /// Shift health by a signed amount, saturating at the vital bounds.
    AdjustHealth(i32),
    /// Add an item to the inventory.
    GrantItem(ItemId),
    /// Move the player to another room, with everything a move entails.
    Navigate(RoomId),
    /// Advance the story by a number of passages.
    AdvanceStory(usize),
    /// Open another room's dialogue script.
    OpenDialogue(RoomId),
}

/// Availability condition on a dialogue choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Predicate {
    /// The player holds the item.
    RequiresItem(ItemId),
    /// The player does not hold the item.
    LacksItem(ItemId),
    /// Sanity is at least this value.
    MinSanity(u8),
}

impl Predicate {
    /// Evaluates the condition against the current state.
    pub fn is_met(&self, state: &GameState) -> bool {
        match self {
            Predicate::RequiresItem(item) => state.has_item(*item),
            Predicate::LacksItem(item) => !state.has_item(*item),
            Predicate::MinSanity(min) => state.sanity >= *min,
        }
    }
}

/// One selectable option in a dialogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Button label.
    pub label: String,
    /// Applied in order when the choice is selected.
    pub effects: Vec<Effect>,
    /// Gates selection when present.
    pub requires: Option<Predicate>,
}

impl Choice {
    pub fn new(label: impl Into<String>) -> Self {
        Choice {
            label: label.into(),
            effects: Vec::new(),
            requires: None,
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn with_requirement(mut self, predicate: Predicate) -> Self {
        self.requires = Some(predicate);
        self
    }
}

/// A room's dialogue: narration plus the choices it offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueScript {
    pub text: String,
    pub choices: Vec<Choice>,
}

impl DialogueScript {
    pub fn new(text: impl Into<String>) -> Self {
        DialogueScript {
            text: text.into(),
            choices: Vec::new(),
        }
    }

    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.choices.push(choice);
        self
    }
}
