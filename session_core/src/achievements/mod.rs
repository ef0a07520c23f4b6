//! Achievement tracking.

use game_rules::{AchievementId, GameState};
use log::info;

use crate::transient::Transients;

/// Unlocks an achievement once, emitting its banner on the first unlock.
///
/// Returns whether this call did the unlock.
pub fn unlock_achievement(
    state: &mut GameState,
    effects: &mut Transients,
    id: AchievementId,
) -> bool {
    if !state.achievements.insert(id) {
        return false;
    }

    info!("achievement unlocked: {id}");
    effects.show_banner(id.title());
    true
}
