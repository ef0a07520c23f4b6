//! Item catalog.
//!
//! Every item the player can carry, with its display text and what using it
//! does. The catalog is fixed content; the player's inventory lives in
//! [`GameState`](crate::state::GameState).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::world::ParseIdError;

/// Identifier for a carryable item.
///
/// Serializes as the item's display name, matching the reference save format.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ItemId {
    #[serde(rename = "Старый ключ")]
    OldKey,
    #[serde(rename = "Свеча")]
    Candle,
    #[serde(rename = "Магический амулет")]
    MagicAmulet,
    #[serde(rename = "Аптечка")]
    FirstAidKit,
    #[serde(rename = "Флакон лауданума")]
    Laudanum,
    #[serde(rename = "Потускневший медальон")]
    TarnishedMedallion,
}

/// What using an item does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemEffect {
    /// Opens gated rooms; using it directly changes nothing.
    Key,
    /// Consumed on use, restoring vitals.
    Restore { health: u8, sanity: u8 },
}

impl ItemId {
    /// Every item in the catalog.
    pub const ALL: [ItemId; 6] = [
        ItemId::OldKey,
        ItemId::Candle,
        ItemId::MagicAmulet,
        ItemId::FirstAidKit,
        ItemId::Laudanum,
        ItemId::TarnishedMedallion,
    ];

    /// Display name, as shown in the inventory.
    pub fn name(&self) -> &'static str {
        match self {
            ItemId::OldKey => "Старый ключ",
            ItemId::Candle => "Свеча",
            ItemId::MagicAmulet => "Магический амулет",
            ItemId::FirstAidKit => "Аптечка",
            ItemId::Laudanum => "Флакон лауданума",
            ItemId::TarnishedMedallion => "Потускневший медальон",
        }
    }

    /// Flavor text shown when the item is inspected.
    pub fn description(&self) -> &'static str {
        match self {
            ItemId::OldKey => {
                "Тяжелый железный ключ, покрытый ржавчиной. Открывает старые двери."
            }
            ItemId::Candle => "Восковая свеча, дающая слабый свет. Успокаивает нервы.",
            ItemId::MagicAmulet => {
                "Теплый на ощупь амулет. Символы на нем движутся, если смотреть слишком долго."
            }
            ItemId::FirstAidKit => {
                "Пожелтевшая коробка с бинтами и склянками. Пахнет спиртом и временем."
            }
            ItemId::Laudanum => {
                "Мутная настойка в граненом флаконе. Горчит, но приглушает шепот."
            }
            ItemId::TarnishedMedallion => {
                "Медальон с портретом, чье лицо стерто до гладкости."
            }
        }
    }

    /// What using this item does.
    pub fn effect(&self) -> ItemEffect {
        match self {
            ItemId::OldKey => ItemEffect::Key,
            ItemId::Candle => ItemEffect::Restore { health: 0, sanity: 10 },
            ItemId::MagicAmulet => ItemEffect::Restore { health: 10, sanity: 20 },
            ItemId::FirstAidKit => ItemEffect::Restore { health: 30, sanity: 0 },
            ItemId::Laudanum => ItemEffect::Restore { health: 5, sanity: 15 },
            ItemId::TarnishedMedallion => ItemEffect::Restore { health: 0, sanity: 25 },
        }
    }

    /// Whether a successful use removes the item from the inventory.
    pub fn is_consumable(&self) -> bool {
        matches!(self.effect(), ItemEffect::Restore { .. })
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ItemId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemId::ALL
            .into_iter()
            .find(|item| item.name() == s)
            .ok_or_else(|| ParseIdError {
                kind: "item",
                name: s.to_string(),
            })
    }
}
