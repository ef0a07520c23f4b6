//! Achievement catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::world::ParseIdError;

/// Puzzles required for [`AchievementId::PuzzleMaster`].
pub const PUZZLE_MASTER_TARGET: usize = 3;

/// Identifier for an unlockable achievement.
///
/// Serializes as a stable snake_case id; titles and descriptions are
/// presentation text looked up from the id.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum AchievementId {
    #[serde(rename = "all_rooms")]
    AllRooms,
    #[serde(rename = "sanity_zero")]
    SanityZero,
    #[serde(rename = "puzzle_master")]
    PuzzleMaster,
    #[serde(rename = "first_puzzle")]
    FirstPuzzle,
    #[serde(rename = "locked_room")]
    LockedRoom,
}

impl AchievementId {
    /// Every achievement in the catalog.
    pub const ALL: [AchievementId; 5] = [
        AchievementId::AllRooms,
        AchievementId::SanityZero,
        AchievementId::PuzzleMaster,
        AchievementId::FirstPuzzle,
        AchievementId::LockedRoom,
    ];

    /// Stable id used in snapshots.
    pub fn id(&self) -> &'static str {
        match self {
            AchievementId::AllRooms => "all_rooms",
            AchievementId::SanityZero => "sanity_zero",
            AchievementId::PuzzleMaster => "puzzle_master",
            AchievementId::FirstPuzzle => "first_puzzle",
            AchievementId::LockedRoom => "locked_room",
        }
    }

    /// Title shown on the unlock banner.
    pub fn title(&self) -> &'static str {
        match self {
            AchievementId::AllRooms => "Исследователь тьмы",
            AchievementId::SanityZero => "На краю разума",
            AchievementId::PuzzleMaster => "Мастер загадок",
            AchievementId::FirstPuzzle => "Первая разгадка",
            AchievementId::LockedRoom => "Хранитель тайн",
        }
    }

    /// Unlock condition, as worded on the achievements screen.
    pub fn description(&self) -> &'static str {
        match self {
            AchievementId::AllRooms => "Посетить все комнаты особняка.",
            AchievementId::SanityZero => "Полностью потерять рассудок.",
            AchievementId::PuzzleMaster => "Разгадать три загадки особняка.",
            AchievementId::FirstPuzzle => "Разгадать загадку особняка.",
            AchievementId::LockedRoom => "Открыть запертую комнату.",
        }
    }
}

impl fmt::Display for AchievementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for AchievementId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AchievementId::ALL
            .into_iter()
            .find(|achievement| achievement.id() == s)
            .ok_or_else(|| ParseIdError {
                kind: "achievement",
                name: s.to_string(),
            })
    }
}
