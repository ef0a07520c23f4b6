//! Dialogue state machine.
//!
//! At most one dialogue is live per session. The controller validates
//! selections against the script and the current state, hands the chosen
//! effect list back to the caller, and returns to idle. It never mutates
//! [`GameState`] itself.

use game_rules::{Choice, DialogueScript, Effect, GameState, RoomId};
use serde::Serialize;

use crate::error::EngineError;

/// A dialogue currently presented to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDialogue {
    pub room: RoomId,
    pub text: String,
    pub choices: Vec<Choice>,
}

/// Presentation copy of a live dialogue, with per-choice availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialogueView {
    pub room: RoomId,
    pub text: String,
    pub choices: Vec<ChoiceView>,
}

/// One choice as the player sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceView {
    pub label: String,
    /// Whether selecting this choice would currently be accepted.
    pub selectable: bool,
}

impl DialogueView {
    /// Builds the view of a script as seen from `state`.
    pub fn of_script(room: RoomId, script: &DialogueScript, state: &GameState) -> Self {
        DialogueView {
            room,
            text: script.text.clone(),
            choices: choice_views(&script.choices, state),
        }
    }
}

fn choice_views(choices: &[Choice], state: &GameState) -> Vec<ChoiceView> {
    choices
        .iter()
        .map(|choice| ChoiceView {
            label: choice.label.clone(),
            selectable: choice
                .requires
                .map_or(true, |predicate| predicate.is_met(state)),
        })
        .collect()
}

/// Holds the zero-or-one live dialogue of a session.
#[derive(Debug, Clone, Default)]
pub struct DialogueController {
    active: Option<ActiveDialogue>,
}

impl DialogueController {
    pub fn new() -> Self {
        DialogueController::default()
    }

    /// Whether a dialogue is currently live.
    pub fn is_presenting(&self) -> bool {
        self.active.is_some()
    }

    /// The live dialogue, if any.
    pub fn active(&self) -> Option<&ActiveDialogue> {
        self.active.as_ref()
    }

    /// Presents a script, replacing any dialogue already live.
    pub fn present(&mut self, room: RoomId, script: &DialogueScript) {
        self.active = Some(ActiveDialogue {
            room,
            text: script.text.clone(),
            choices: script.choices.clone(),
        });
    }

    /// Presentation view with availability evaluated against `state`.
    pub fn view(&self, state: &GameState) -> Option<DialogueView> {
        self.active.as_ref().map(|dialogue| DialogueView {
            room: dialogue.room,
            text: dialogue.text.clone(),
            choices: choice_views(&dialogue.choices, state),
        })
    }

    /// Selects a choice, closing the dialogue and returning its effects.
    ///
    /// The dialogue stays live when the selection is rejected.
    pub fn select(
        &mut self,
        index: usize,
        state: &GameState,
    ) -> Result<Vec<Effect>, EngineError> {
        let dialogue = self
            .active
            .as_ref()
            .ok_or(EngineError::InvalidChoiceIndex(index))?;
        let choice = dialogue
            .choices
            .get(index)
            .ok_or(EngineError::InvalidChoiceIndex(index))?;
        if let Some(predicate) = choice.requires {
            if !predicate.is_met(state) {
                return Err(EngineError::ChoiceUnavailable(index));
            }
        }

        let effects = choice.effects.clone();
        self.active = None;
        Ok(effects)
    }

    /// Dismisses a dialogue that offers no choices. Returns whether one closed.
    pub fn dismiss(&mut self) -> bool {
        match &self.active {
            Some(dialogue) if dialogue.choices.is_empty() => {
                self.active = None;
                true
            }
            _ => false,
        }
    }

    /// Drops any live dialogue unconditionally.
    pub fn clear(&mut self) {
        self.active = None;
    }
}
