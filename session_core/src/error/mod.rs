//! Engine errors.

use game_rules::{ItemId, RoomId};
use thiserror::Error;

/// Why a session command was rejected.
///
/// Every rejection is total: the command leaves state exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The room is not in the world catalog.
    #[error("unknown room: {0}")]
    InvalidRoom(RoomId),
    /// The action needs an item the player does not hold.
    #[error("item not in inventory: {0}")]
    ItemNotHeld(ItemId),
    /// No dialogue choice exists at this index.
    #[error("no dialogue choice at index {0}")]
    InvalidChoiceIndex(usize),
    /// The choice exists but its availability condition is unmet.
    #[error("dialogue choice {0} is not selectable yet")]
    ChoiceUnavailable(usize),
}

/// A snapshot could not be encoded or decoded.
#[derive(Debug, Error)]
#[error("malformed snapshot: {0}")]
pub struct SnapshotError(#[from] serde_json::Error);
