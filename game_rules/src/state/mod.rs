//! Player state.
//!
//! [`GameState`] is the whole serializable record of one playthrough. All
//! mutation goes through the methods here so the bounds hold no matter who
//! calls.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::achievements::AchievementId;
use crate::items::ItemId;
use crate::world::RoomId;

/// Upper bound for health and sanity.
pub const MAX_VITAL: u8 = 100;

/// Most items the inventory holds.
pub const INVENTORY_CAPACITY: usize = 10;

/// The full mutable state of one playthrough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Physical condition, `0..=MAX_VITAL`.
    pub health: u8,
    /// Mental condition, `0..=MAX_VITAL`. Low sanity invites disruptions.
    pub sanity: u8,
    /// Room the player is in.
    pub location: RoomId,
    /// Carried items, in acquisition order. Duplicates allowed.
    pub inventory: Vec<ItemId>,
    /// Index of the story passage currently shown.
    pub current_story: usize,
    /// Story chapter. Held at 1 in this installment.
    pub chapter: u32,
    /// Unlocked achievements.
    pub achievements: BTreeSet<AchievementId>,
    /// Rooms whose puzzle has been solved.
    pub completed_puzzles: BTreeSet<RoomId>,
    /// Rooms the player has entered at least once.
    pub discovered_secrets: BTreeSet<RoomId>,
    pub sound_enabled: bool,
    pub music_enabled: bool,
}

impl GameState {
    /// The state every new playthrough starts from.
    pub fn new_session() -> Self {
        GameState {
            health: MAX_VITAL,
            sanity: 85,
            location: RoomId::MainHall,
            inventory: vec![ItemId::OldKey, ItemId::Candle],
            current_story: 0,
            chapter: 1,
            achievements: BTreeSet::new(),
            completed_puzzles: BTreeSet::new(),
            discovered_secrets: BTreeSet::new(),
            sound_enabled: true,
            music_enabled: true,
        }
    }

    /// Shifts health by `delta`, clamped into `0..=MAX_VITAL`.
    pub fn adjust_health(&mut self, delta: i32) {
        self.health = clamp_vital(self.health, delta);
    }

    /// Shifts sanity by `delta`, clamped into `0..=MAX_VITAL`.
    pub fn adjust_sanity(&mut self, delta: i32) {
        self.sanity = clamp_vital(self.sanity, delta);
    }

    /// Whether the inventory holds at least one of the item.
    pub fn has_item(&self, item: ItemId) -> bool {
        self.inventory.contains(&item)
    }

    /// True once the inventory is at capacity.
    pub fn inventory_full(&self) -> bool {
        self.inventory.len() >= INVENTORY_CAPACITY
    }

    /// Adds an item to the inventory. Returns `false` when full.
    pub fn grant_item(&mut self, item: ItemId) -> bool {
        if self.inventory_full() {
            return false;
        }
        self.inventory.push(item);
        true
    }

    /// Removes one occurrence of the item. Returns `false` when absent.
    pub fn remove_item(&mut self, item: ItemId) -> bool {
        match self.inventory.iter().position(|held| *held == item) {
            Some(index) => {
                self.inventory.remove(index);
                true
            }
            None => false,
        }
    }

    /// Moves the story forward by `steps`, never past `last_index`.
    pub fn advance_story(&mut self, steps: usize, last_index: usize) {
        self.current_story = self.current_story.saturating_add(steps).min(last_index);
    }

    /// Records a visited room. Returns `true` on first discovery.
    pub fn discover(&mut self, room: RoomId) -> bool {
        self.discovered_secrets.insert(room)
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new_session()
    }
}

fn clamp_vital(current: u8, delta: i32) -> u8 {
    (i32::from(current) + delta).clamp(0, i32::from(MAX_VITAL)) as u8
}
