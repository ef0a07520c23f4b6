//! The session facade.
//!
//! One [`Session`] owns everything a playthrough needs: the world catalog,
//! the mutable state, the dialogue controller, the transient store and the
//! random source. Hosts drive it from a single thread; every command either
//! completes in full or rejects without touching state.

mod snapshot;

pub use snapshot::*;

use std::fmt;

use game_rules::{
    AchievementId, DialogueScript, Effect, GameState, ItemEffect, ItemId, RoomId, World,
    PUZZLE_MASTER_TARGET, SOLVE_SANITY_BONUS,
};
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::achievements::unlock_achievement;
use crate::dialogue::{DialogueController, DialogueView};
use crate::disruption::{roll_disruption, Disruption};
use crate::error::EngineError;
use crate::transient::{TransientKind, TransientToken, Transients};

/// Lighter of the two per-move sanity costs.
pub const DECAY_LIGHT: u8 = 3;

/// Heavier of the two per-move sanity costs.
pub const DECAY_HEAVY: u8 = 7;

/// Unique identifier for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Creates a new random session id.
    pub fn new() -> Self {
        SessionId(Uuid::new_v4())
    }

    /// Creates a nil id (all zeros).
    pub fn nil() -> Self {
        SessionId(Uuid::nil())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        SessionId::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One running playthrough.
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    world: World,
    state: GameState,
    dialogue: DialogueController,
    effects: Transients,
    rng: StdRng,
}

impl Session {
    /// Starts a fresh playthrough of the standard mansion.
    pub fn new() -> Self {
        Session::with_rng(StdRng::from_entropy())
    }

    /// Starts a fresh playthrough with a caller-supplied random source.
    pub fn with_rng(rng: StdRng) -> Self {
        Session::with_world(World::shadow_mind(), rng)
    }

    /// Starts a playthrough of a custom world.
    pub fn with_world(world: World, rng: StdRng) -> Self {
        Session {
            id: SessionId::new(),
            world,
            state: GameState::new_session(),
            dialogue: DialogueController::new(),
            effects: Transients::new(),
            rng,
        }
    }

    /// This session's id.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The world catalog in play.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Current player state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Currently visible transient effects.
    pub fn transients(&self) -> &Transients {
        &self.effects
    }

    /// The live dialogue as the player sees it, if any.
    pub fn dialogue_view(&self) -> Option<DialogueView> {
        self.dialogue.view(&self.state)
    }

    /// Story passage currently shown.
    pub fn story_passage(&self) -> Option<&str> {
        self.world.story_passage(self.state.current_story)
    }

    /// Moves the player to `target`.
    ///
    /// A successful move costs a random 3 or 7 sanity, advances the story by
    /// one passage and records the visit. Entering a gated room while holding
    /// its key opens it: the entry dialogue is presented and the locked-room
    /// achievement unlocks. Without the key the move still lands, but the
    /// player only reaches the locked door.
    pub fn move_to_room(&mut self, target: RoomId) -> Result<(), EngineError> {
        let room = self
            .world
            .room(target)
            .ok_or(EngineError::InvalidRoom(target))?;
        let opens_gate = match room.gate {
            Some(key) => self.state.has_item(key),
            None => false,
        };

        let decay = if self.rng.gen_bool(0.5) {
            DECAY_LIGHT
        } else {
            DECAY_HEAVY
        };
        self.apply_sanity_delta(-i32::from(decay));

        self.state.location = target;
        let last = self.world.last_story_index();
        self.state.advance_story(1, last);
        self.state.discover(target);
        debug!("moved to {target}, sanity now {}", self.state.sanity);

        if self.state.discovered_secrets.len() == self.world.room_count() {
            unlock_achievement(&mut self.state, &mut self.effects, AchievementId::AllRooms);
        }

        if opens_gate {
            unlock_achievement(
                &mut self.state,
                &mut self.effects,
                AchievementId::LockedRoom,
            );
            let _ = self.present_room_dialogue(target);
        }

        Ok(())
    }

    /// Attempts a puzzle answer for the named room.
    ///
    /// Returns whether the answer solved it. Wrong answers, rooms without a
    /// puzzle, and already-solved puzzles all come back `false` and change
    /// nothing.
    pub fn solve_puzzle(&mut self, room: RoomId, answer: &str) -> bool {
        let reward = match self.world.room(room).and_then(|r| r.puzzle.as_ref()) {
            Some(puzzle) if puzzle.accepts(answer) => puzzle.reward,
            _ => return false,
        };
        // A solved puzzle stays solved; repeat answers earn nothing.
        if !self.state.completed_puzzles.insert(room) {
            return false;
        }

        if !self.state.grant_item(reward) {
            warn!("inventory full, puzzle reward {reward} lost");
        }
        self.state.adjust_sanity(i32::from(SOLVE_SANITY_BONUS));
        debug!("puzzle in {room} solved");

        if self.state.completed_puzzles.len() == 1 {
            unlock_achievement(
                &mut self.state,
                &mut self.effects,
                AchievementId::FirstPuzzle,
            );
        }
        if self.state.completed_puzzles.len() >= PUZZLE_MASTER_TARGET {
            unlock_achievement(
                &mut self.state,
                &mut self.effects,
                AchievementId::PuzzleMaster,
            );
        }
        true
    }

    /// Uses an item from the inventory.
    ///
    /// Restorative items apply their vitals and are consumed. Key items are
    /// held rather than used; the call succeeds and changes nothing.
    pub fn use_item(&mut self, item: ItemId) -> Result<(), EngineError> {
        if !self.state.has_item(item) {
            return Err(EngineError::ItemNotHeld(item));
        }

        match item.effect() {
            ItemEffect::Key => {
                debug!("{item} is a key, nothing to apply");
            }
            ItemEffect::Restore { health, sanity } => {
                self.state.adjust_health(i32::from(health));
                self.apply_sanity_delta(i32::from(sanity));
                self.state.remove_item(item);
                debug!(
                    "used {item}, health {} sanity {}",
                    self.state.health, self.state.sanity
                );
            }
        }
        Ok(())
    }

    /// Presents the named room's dialogue.
    ///
    /// Rooms without a script yield their plain description with zero
    /// choices, dismissable through [`Session::dismiss_dialogue`]. Unknown
    /// rooms are rejected.
    pub fn show_dialogue(&mut self, room: RoomId) -> Result<DialogueView, EngineError> {
        self.present_room_dialogue(room)
            .ok_or(EngineError::InvalidRoom(room))
    }

    /// Selects a choice in the live dialogue and applies its effects in order.
    pub fn select_choice(&mut self, index: usize) -> Result<(), EngineError> {
        let effects = self.dialogue.select(index, &self.state)?;
        for effect in effects {
            self.apply_effect(effect);
        }
        Ok(())
    }

    /// Dismisses a choice-free dialogue. Returns whether one closed.
    pub fn dismiss_dialogue(&mut self) -> bool {
        self.dialogue.dismiss()
    }

    /// Runs one disruption roll. Hosts call this every
    /// [`TICK_PERIOD`](crate::disruption::TICK_PERIOD) while the session is
    /// on screen.
    pub fn tick(&mut self) -> Option<Disruption> {
        roll_disruption(
            self.state.sanity,
            self.world.hallucinations(),
            &mut self.rng,
            &mut self.effects,
        )
    }

    /// Clears a transient effect if `token` still matches what is showing.
    pub fn clear_transient(&mut self, kind: TransientKind, token: TransientToken) -> bool {
        self.effects.clear(kind, token)
    }

    /// Resets the playthrough to the starting state, keeping the session id.
    pub fn reset_progress(&mut self) -> &GameState {
        self.state = GameState::new_session();
        self.dialogue.clear();
        self.effects.clear_all();
        debug!("session {} reset", self.id);
        &self.state
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.state.sound_enabled = enabled;
    }

    pub fn set_music_enabled(&mut self, enabled: bool) {
        self.state.music_enabled = enabled;
    }

    fn present_room_dialogue(&mut self, room: RoomId) -> Option<DialogueView> {
        let entry = self.world.room(room)?;
        let view = match &entry.script {
            Some(script) => {
                self.dialogue.present(room, script);
                DialogueView::of_script(room, script, &self.state)
            }
            None => {
                let narration = DialogueScript::new(entry.description.clone());
                self.dialogue.present(room, &narration);
                DialogueView::of_script(room, &narration, &self.state)
            }
        };
        Some(view)
    }

    fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::AdjustSanity(delta) => self.apply_sanity_delta(delta),
            Effect::AdjustHealth(delta) => self.state.adjust_health(delta),
            Effect::GrantItem(item) => {
                if !self.state.grant_item(item) {
                    warn!("inventory full, {item} lost");
                }
            }
            Effect::Navigate(room) => {
                if let Err(err) = self.move_to_room(room) {
                    warn!("navigate effect skipped: {err}");
                }
            }
            Effect::AdvanceStory(steps) => {
                let last = self.world.last_story_index();
                self.state.advance_story(steps, last);
            }
            Effect::OpenDialogue(room) => {
                if self.present_room_dialogue(room).is_none() {
                    warn!("open dialogue effect skipped: unknown room {room}");
                }
            }
        }
    }

    fn apply_sanity_delta(&mut self, delta: i32) {
        self.state.adjust_sanity(delta);
        if delta < 0 && self.state.sanity == 0 {
            unlock_achievement(
                &mut self.state,
                &mut self.effects,
                AchievementId::SanityZero,
            );
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_rules::{Choice, Room};

    fn seeded_session() -> Session {
        Session::with_rng(StdRng::seed_from_u64(42))
    }

    /// Rewrites the session's sanity through a snapshot restore.
    fn with_sanity(session: &mut Session, sanity: u8) {
        let mut snap = session.snapshot();
        snap.state.sanity = sanity;
        session.restore(snap).unwrap();
    }

    fn next_glitch_token(session: &mut Session) -> TransientToken {
        for _ in 0..1000 {
            if let Some(Disruption::Glitch) = session.tick() {
                if let Some(token) = session.transients().glitch() {
                    return token;
                }
            }
        }
        panic!("no glitch within 1000 ticks");
    }

    #[test]
    fn test_new_session_wakes_up_in_main_hall() {
        let session = seeded_session();

        assert_ne!(session.id(), SessionId::nil());
        assert_eq!(session.state().location, RoomId::MainHall);
        assert_eq!(session.state().sanity, 85);
        assert!(session
            .story_passage()
            .unwrap()
            .starts_with("Вы просыпаетесь"));
        assert!(session.dialogue_view().is_none());
    }

    #[test]
    fn test_move_costs_three_or_seven_sanity() {
        let mut session = seeded_session();
        let before = session.state().sanity;

        session.move_to_room(RoomId::DarkCorridor).unwrap();

        let lost = before - session.state().sanity;
        assert!(
            lost == DECAY_LIGHT || lost == DECAY_HEAVY,
            "unexpected decay {lost}"
        );
    }

    #[test]
    fn test_move_advances_story_and_records_visit() {
        let mut session = seeded_session();
        session.move_to_room(RoomId::Library).unwrap();

        let state = session.state();
        assert_eq!(state.location, RoomId::Library);
        assert_eq!(state.current_story, 1);
        assert!(state.discovered_secrets.contains(&RoomId::Library));
    }

    #[test]
    fn test_move_outside_catalog_is_rejected_whole() {
        let mut world = World::new();
        world.add_room(Room::new(RoomId::MainHall, "Стены без дверей."));
        let mut session = Session::with_world(world, StdRng::seed_from_u64(42));

        let before = session.state().clone();
        let err = session.move_to_room(RoomId::Library).unwrap_err();

        assert_eq!(err, EngineError::InvalidRoom(RoomId::Library));
        // No decay, no discovery, nothing.
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn test_story_stops_at_final_passage() {
        let mut session = seeded_session();
        for _ in 0..10 {
            let target = if session.state().location == RoomId::MainHall {
                RoomId::DarkCorridor
            } else {
                RoomId::MainHall
            };
            session.move_to_room(target).unwrap();
        }

        assert_eq!(
            session.state().current_story,
            session.world().last_story_index()
        );
        assert!(session.story_passage().unwrap().contains("выход"));
    }

    #[test]
    fn test_visiting_every_room_unlocks_explorer() {
        let mut session = seeded_session();
        let route = [
            RoomId::DarkCorridor,
            RoomId::Library,
            RoomId::Basement,
            RoomId::Attic,
            RoomId::LockedRoom,
            RoomId::MirrorHall,
            RoomId::Study,
            RoomId::MainHall,
        ];
        for room in route {
            session.move_to_room(room).unwrap();
        }

        assert!(session
            .state()
            .achievements
            .contains(&AchievementId::AllRooms));
        let (_, title) = session.transients().banner().unwrap();
        assert_eq!(title, "Исследователь тьмы");
    }

    #[test]
    fn test_sanity_floor_unlocks_breaking_point() {
        let mut session = seeded_session();
        for _ in 0..100 {
            let target = if session.state().location == RoomId::MainHall {
                RoomId::DarkCorridor
            } else {
                RoomId::MainHall
            };
            session.move_to_room(target).unwrap();
            if session.state().sanity == 0 {
                break;
            }
        }

        assert_eq!(session.state().sanity, 0);
        assert_eq!(session.state().health, 100);
        assert!(session
            .state()
            .achievements
            .contains(&AchievementId::SanityZero));

        // Pinned at the floor from here on.
        session.move_to_room(RoomId::Library).unwrap();
        assert_eq!(session.state().sanity, 0);
    }

    #[test]
    fn test_solving_riddle_grants_reward_and_bonus() {
        let mut session = seeded_session();

        assert!(session.solve_puzzle(RoomId::Library, "ТИШИНА"));
        assert!(session.state().has_item(ItemId::MagicAmulet));
        assert_eq!(session.state().sanity, 100);
        assert!(session
            .state()
            .completed_puzzles
            .contains(&RoomId::Library));
        assert!(session
            .state()
            .achievements
            .contains(&AchievementId::FirstPuzzle));

        let (_, title) = session.transients().banner().unwrap();
        assert_eq!(title, "Первая разгадка");
    }

    #[test]
    fn test_wrong_answer_changes_nothing() {
        let mut session = seeded_session();
        let before = session.state().clone();

        assert!(!session.solve_puzzle(RoomId::Library, "ЭХО"));
        assert!(!session.solve_puzzle(RoomId::MainHall, "ТИШИНА"));
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn test_repeat_solve_pays_out_once() {
        let mut session = seeded_session();
        assert!(session.solve_puzzle(RoomId::Library, "ТИШИНА"));
        with_sanity(&mut session, 40);

        assert!(!session.solve_puzzle(RoomId::Library, "ТИШИНА"));
        assert_eq!(session.state().sanity, 40);
        assert_eq!(
            session
                .state()
                .inventory
                .iter()
                .filter(|i| **i == ItemId::MagicAmulet)
                .count(),
            1
        );
    }

    #[test]
    fn test_answer_case_is_ignored() {
        let mut session = seeded_session();
        assert!(session.solve_puzzle(RoomId::Basement, "тьма"));
        assert!(session.state().has_item(ItemId::FirstAidKit));
    }

    #[test]
    fn test_three_riddles_make_puzzle_master() {
        let mut session = seeded_session();
        assert!(session.solve_puzzle(RoomId::Library, "ТИШИНА"));
        assert!(session.solve_puzzle(RoomId::Basement, "ТЬМА"));
        assert!(session.solve_puzzle(RoomId::Attic, "ЭХО"));

        assert!(session
            .state()
            .achievements
            .contains(&AchievementId::PuzzleMaster));
        let (_, title) = session.transients().banner().unwrap();
        assert_eq!(title, "Мастер загадок");
    }

    #[test]
    fn test_reward_is_lost_when_inventory_is_full() {
        let mut session = seeded_session();
        let mut snap = session.snapshot();
        snap.state.inventory = vec![ItemId::Candle; 10];
        session.restore(snap).unwrap();

        assert!(session.solve_puzzle(RoomId::Library, "ТИШИНА"));
        assert!(!session.state().has_item(ItemId::MagicAmulet));
        assert_eq!(session.state().inventory.len(), 10);
        // The solve itself still counts.
        assert!(session
            .state()
            .completed_puzzles
            .contains(&RoomId::Library));
        assert_eq!(session.state().sanity, 100);
    }

    #[test]
    fn test_using_candle_restores_sanity_and_burns_out() {
        let mut session = seeded_session();

        session.use_item(ItemId::Candle).unwrap();
        assert_eq!(session.state().sanity, 95);
        assert!(!session.state().has_item(ItemId::Candle));

        let err = session.use_item(ItemId::Candle).unwrap_err();
        assert_eq!(err, EngineError::ItemNotHeld(ItemId::Candle));
    }

    #[test]
    fn test_using_key_changes_nothing() {
        let mut session = seeded_session();
        let before = session.state().clone();

        session.use_item(ItemId::OldKey).unwrap();
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn test_entering_locked_room_with_key_opens_it() {
        let mut session = seeded_session();
        session.move_to_room(RoomId::LockedRoom).unwrap();

        let view = session.dialogue_view().unwrap();
        assert_eq!(view.room, RoomId::LockedRoom);
        assert!(view.text.contains("шкатулка"));
        assert!(view.choices[0].selectable);

        assert!(session
            .state()
            .achievements
            .contains(&AchievementId::LockedRoom));
        let (_, title) = session.transients().banner().unwrap();
        assert_eq!(title, "Хранитель тайн");
    }

    #[test]
    fn test_locked_door_without_key_stays_shut() {
        let mut session = seeded_session();
        let mut snap = session.snapshot();
        snap.state.inventory.retain(|item| *item != ItemId::OldKey);
        session.restore(snap).unwrap();

        session.move_to_room(RoomId::LockedRoom).unwrap();

        assert_eq!(session.state().location, RoomId::LockedRoom);
        assert!(session.dialogue_view().is_none());
        assert!(!session
            .state()
            .achievements
            .contains(&AchievementId::LockedRoom));
    }

    #[test]
    fn test_mirror_choice_applies_effects_in_order() {
        let mut session = seeded_session();
        let view = session.show_dialogue(RoomId::MirrorHall).unwrap();
        assert_eq!(view.choices.len(), 3);

        session.select_choice(0).unwrap();

        assert_eq!(session.state().sanity, 75);
        assert_eq!(session.state().current_story, 1);
        assert!(session.dialogue_view().is_none());
    }

    #[test]
    fn test_mirror_retreat_walks_back_home() {
        let mut session = seeded_session();
        session.show_dialogue(RoomId::MirrorHall).unwrap();
        let before = session.state().sanity;

        session.select_choice(2).unwrap();

        assert_eq!(session.state().location, RoomId::MainHall);
        let lost = before - session.state().sanity;
        assert!(lost == DECAY_LIGHT || lost == DECAY_HEAVY);
    }

    #[test]
    fn test_the_box_opens_only_once() {
        let mut session = seeded_session();
        session.move_to_room(RoomId::LockedRoom).unwrap();
        session.select_choice(0).unwrap();
        assert!(session.state().has_item(ItemId::TarnishedMedallion));

        let view = session.show_dialogue(RoomId::LockedRoom).unwrap();
        assert!(!view.choices[0].selectable);

        let err = session.select_choice(0).unwrap_err();
        assert_eq!(err, EngineError::ChoiceUnavailable(0));
        assert!(session.dialogue_view().is_some());
        assert_eq!(
            session
                .state()
                .inventory
                .iter()
                .filter(|i| **i == ItemId::TarnishedMedallion)
                .count(),
            1
        );
    }

    #[test]
    fn test_reading_in_the_dark_needs_nerve() {
        let mut session = seeded_session();
        with_sanity(&mut session, 30);

        let view = session.show_dialogue(RoomId::Study).unwrap();
        assert!(view.choices[0].selectable);
        assert!(!view.choices[1].selectable);

        let err = session.select_choice(1).unwrap_err();
        assert_eq!(err, EngineError::ChoiceUnavailable(1));
        assert!(session.dialogue_view().is_some());

        // Reading by candlelight still works.
        session.select_choice(0).unwrap();
        assert_eq!(session.state().sanity, 25);
        assert_eq!(session.state().current_story, 1);
    }

    #[test]
    fn test_select_without_dialogue_is_rejected() {
        let mut session = seeded_session();
        let err = session.select_choice(0).unwrap_err();
        assert_eq!(err, EngineError::InvalidChoiceIndex(0));
    }

    #[test]
    fn test_open_dialogue_effect_chains_presentations() {
        let mut world = World::new();
        world.add_room(
            Room::new(RoomId::MainHall, "Пустой зал.").with_script(
                DialogueScript::new("Дверь в кабинет приоткрыта.").with_choice(
                    Choice::new("Заглянуть").with_effect(Effect::OpenDialogue(RoomId::Study)),
                ),
            ),
        );
        world.add_room(Room::new(RoomId::Study, "Кабинет пуст."));
        let mut session = Session::with_world(world, StdRng::seed_from_u64(42));

        session.show_dialogue(RoomId::MainHall).unwrap();
        session.select_choice(0).unwrap();

        let view = session.dialogue_view().unwrap();
        assert_eq!(view.room, RoomId::Study);
        assert_eq!(view.text, "Кабинет пуст.");
        assert!(view.choices.is_empty());
    }

    #[test]
    fn test_identical_seeds_replay_identically() {
        let mut first = Session::with_rng(StdRng::seed_from_u64(99));
        let mut second = Session::with_rng(StdRng::seed_from_u64(99));

        for session in [&mut first, &mut second] {
            session.move_to_room(RoomId::DarkCorridor).unwrap();
            session.move_to_room(RoomId::Library).unwrap();
            session.solve_puzzle(RoomId::Library, "ТИШИНА");
            session.move_to_room(RoomId::Attic).unwrap();
        }

        assert_eq!(first.state(), second.state());
    }

    #[test]
    fn test_unscripted_room_narrates_its_description() {
        let mut session = seeded_session();
        let view = session.show_dialogue(RoomId::Basement).unwrap();

        assert!(view.text.contains("подвал"));
        assert!(view.choices.is_empty());

        // The only way out of plain narration is the continue action.
        assert!(session.dismiss_dialogue());
        assert!(session.dialogue_view().is_none());
    }

    #[test]
    fn test_show_dialogue_rejects_unknown_room() {
        let mut world = World::new();
        world.add_room(Room::new(RoomId::MainHall, "Стены без дверей."));
        let mut session = Session::with_world(world, StdRng::seed_from_u64(42));

        let err = session.show_dialogue(RoomId::Attic).unwrap_err();
        assert_eq!(err, EngineError::InvalidRoom(RoomId::Attic));
    }

    #[test]
    fn test_ticks_are_quiet_while_sane() {
        let mut session = seeded_session();
        for _ in 0..100 {
            assert_eq!(session.tick(), None);
        }
        assert!(session.transients().glitch().is_none());
        assert!(session.transients().hallucination().is_none());
    }

    #[test]
    fn test_low_sanity_ticks_disrupt() {
        let mut session = seeded_session();
        with_sanity(&mut session, 30);

        let mut glitches = 0;
        let mut hallucinations = 0;
        for _ in 0..500 {
            match session.tick() {
                Some(Disruption::Glitch) => glitches += 1,
                Some(Disruption::Hallucination(message)) => {
                    assert!(session.world().hallucinations().contains(&message));
                    hallucinations += 1;
                }
                None => {}
            }
        }

        assert!(glitches > 0);
        assert!(hallucinations > 0);
    }

    #[test]
    fn test_stale_glitch_timer_is_ignored() {
        let mut session = seeded_session();
        with_sanity(&mut session, 20);

        let first = next_glitch_token(&mut session);
        let second = next_glitch_token(&mut session);
        assert_ne!(first, second);

        assert!(!session.clear_transient(TransientKind::Glitch, first));
        assert_eq!(session.transients().glitch(), Some(second));

        assert!(session.clear_transient(TransientKind::Glitch, second));
        assert!(session.transients().glitch().is_none());
    }

    #[test]
    fn test_reset_returns_to_the_first_morning() {
        let mut session = seeded_session();
        let id = session.id();
        session.move_to_room(RoomId::Library).unwrap();
        session.solve_puzzle(RoomId::Library, "ТИШИНА");
        session.show_dialogue(RoomId::MirrorHall).unwrap();

        let state = session.reset_progress().clone();

        assert_eq!(state, GameState::new_session());
        assert_eq!(session.id(), id);
        assert!(session.dialogue_view().is_none());
        assert!(session.transients().banner().is_none());
    }
}
