//! Rooms and the world catalog.
//!
//! ## The Mansion
//!
//! Eight fixed rooms make up the playable space. Three carry riddles, one is
//! locked behind the old key, and three host dialogue scripts. The catalog
//! also owns the story passages shown as the playthrough progresses and the
//! pool of hallucination messages the disruption scheduler draws from.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dialogue::{Choice, DialogueScript, Effect, Predicate};
use crate::items::ItemId;
use crate::puzzles::Puzzle;

/// Failed to parse a catalog id from its display name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} name: {name}")]
pub struct ParseIdError {
    pub kind: &'static str,
    pub name: String,
}

/// Identifier for a room of the mansion.
///
/// Serializes as the room's display name, matching the reference save format.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RoomId {
    #[serde(rename = "Главная комната")]
    MainHall,
    #[serde(rename = "Темный коридор")]
    DarkCorridor,
    #[serde(rename = "Библиотека")]
    Library,
    #[serde(rename = "Подвал")]
    Basement,
    #[serde(rename = "Чердак")]
    Attic,
    #[serde(rename = "Запертая комната")]
    LockedRoom,
    #[serde(rename = "Зеркальный зал")]
    MirrorHall,
    #[serde(rename = "Кабинет")]
    Study,
}

impl RoomId {
    /// Every room of the mansion.
    pub const ALL: [RoomId; 8] = [
        RoomId::MainHall,
        RoomId::DarkCorridor,
        RoomId::Library,
        RoomId::Basement,
        RoomId::Attic,
        RoomId::LockedRoom,
        RoomId::MirrorHall,
        RoomId::Study,
    ];

    /// Display name, as shown on the navigation buttons.
    pub fn name(&self) -> &'static str {
        match self {
            RoomId::MainHall => "Главная комната",
            RoomId::DarkCorridor => "Темный коридор",
            RoomId::Library => "Библиотека",
            RoomId::Basement => "Подвал",
            RoomId::Attic => "Чердак",
            RoomId::LockedRoom => "Запертая комната",
            RoomId::MirrorHall => "Зеркальный зал",
            RoomId::Study => "Кабинет",
        }
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for RoomId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoomId::ALL
            .into_iter()
            .find(|room| room.name() == s)
            .ok_or_else(|| ParseIdError {
                kind: "room",
                name: s.to_string(),
            })
    }
}

/// A room of the mansion: description plus whatever it hosts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub description: String,
    /// Riddle solvable here, if any.
    pub puzzle: Option<Puzzle>,
    /// Item required to enter.
    pub gate: Option<ItemId>,
    /// Dialogue offered in this room.
    pub script: Option<DialogueScript>,
}

impl Room {
    pub fn new(id: RoomId, description: impl Into<String>) -> Self {
        Room {
            id,
            description: description.into(),
            puzzle: None,
            gate: None,
            script: None,
        }
    }

    pub fn with_puzzle(mut self, puzzle: Puzzle) -> Self {
        self.puzzle = Some(puzzle);
        self
    }

    pub fn with_gate(mut self, key: ItemId) -> Self {
        self.gate = Some(key);
        self
    }

    pub fn with_script(mut self, script: DialogueScript) -> Self {
        self.script = Some(script);
        self
    }
}

/// The static world catalog: rooms, story passages, hallucination pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    rooms: HashMap<RoomId, Room>,
    story: Vec<String>,
    hallucinations: Vec<String>,
}

impl World {
    /// An empty world. Tests build small ones; play uses [`World::shadow_mind`].
    pub fn new() -> Self {
        World {
            rooms: HashMap::new(),
            story: Vec::new(),
            hallucinations: Vec::new(),
        }
    }

    /// Adds a room to the catalog, replacing any previous entry for its id.
    pub fn add_room(&mut self, room: Room) {
        self.rooms.insert(room.id, room);
    }

    /// Appends a story passage.
    pub fn add_story_passage(&mut self, text: impl Into<String>) {
        self.story.push(text.into());
    }

    /// Appends a hallucination message.
    pub fn add_hallucination(&mut self, text: impl Into<String>) {
        self.hallucinations.push(text.into());
    }

    /// Looks up a room.
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(&id)
    }

    /// Number of rooms in the catalog.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Story passage at `index`, if the story is that long.
    pub fn story_passage(&self, index: usize) -> Option<&str> {
        self.story.get(index).map(String::as_str)
    }

    /// Index of the final story passage.
    pub fn last_story_index(&self) -> usize {
        self.story.len().saturating_sub(1)
    }

    /// Messages the disruption scheduler draws from.
    pub fn hallucinations(&self) -> &[String] {
        &self.hallucinations
    }

    /// The full Shadow Mind mansion.
    pub fn shadow_mind() -> Self {
        let mut world = World::new();

        // Rooms.
        world.add_room(Room::new(
            RoomId::MainHall,
            "Просторная комната с высоким потолком. Пыльная мебель укрыта белыми \
             простынями, единственное окно заколочено досками.",
        ));
        world.add_room(Room::new(
            RoomId::DarkCorridor,
            "Узкий коридор, уходящий во тьму. Половицы скрипят под ногами, и скрипу \
             отвечает что-то еще.",
        ));
        world.add_room(
            Room::new(
                RoomId::Library,
                "Стеллажи до потолка, забитые истлевшими книгами. На пюпитре лежит \
                 раскрытый том с обведенной чернилами загадкой.",
            )
            .with_puzzle(Puzzle::new(
                "Ее нарушают, едва произнеся ее имя. Что это?",
                "ТИШИНА",
                ItemId::MagicAmulet,
            )),
        );
        world.add_room(
            Room::new(
                RoomId::Basement,
                "Холодный каменный подвал. Пахнет сыростью и чем-то горьким. На дальней \
                 стене выцарапаны слова.",
            )
            .with_puzzle(Puzzle::new(
                "Чем ее больше, тем меньше видно. Что это?",
                "ТЬМА",
                ItemId::FirstAidKit,
            )),
        );
        world.add_room(
            Room::new(
                RoomId::Attic,
                "Низкий чердак, заваленный сундуками и сломанной мебелью. Сквозь щели \
                 в крыше сочится серый свет.",
            )
            .with_puzzle(Puzzle::new(
                "Говорит без языка, слышит без ушей. Что это?",
                "ЭХО",
                ItemId::Laudanum,
            )),
        );
        world.add_room(
            Room::new(
                RoomId::LockedRoom,
                "Массивная дубовая дверь с железным замком. Дом предпочитает молчать \
                 о том, что за ней.",
            )
            .with_gate(ItemId::OldKey)
            .with_script(
                DialogueScript::new(
                    "Ключ поворачивается с тяжелым щелчком. Посреди пустой комнаты стоит \
                     шкатулка. Больше здесь нет ничего. И никого.",
                )
                .with_choice(
                    Choice::new("Открыть шкатулку")
                        .with_effect(Effect::GrantItem(ItemId::TarnishedMedallion))
                        .with_effect(Effect::AdjustSanity(-5))
                        .with_requirement(Predicate::LacksItem(ItemId::TarnishedMedallion)),
                )
                .with_choice(
                    Choice::new("Выйти и закрыть за собой дверь")
                        .with_effect(Effect::AdjustSanity(5)),
                ),
            ),
        );
        world.add_room(
            Room::new(
                RoomId::MirrorHall,
                "Десятки зеркал в тяжелых рамах. Отражения двигаются с едва заметным \
                 опозданием.",
            )
            .with_script(
                DialogueScript::new(
                    "Отражения поворачиваются к вам чуть раньше, чем вы успеваете \
                     пошевелиться.",
                )
                .with_choice(
                    Choice::new("Вглядеться в ближайшее зеркало")
                        .with_effect(Effect::AdjustSanity(-10))
                        .with_effect(Effect::AdvanceStory(1)),
                )
                .with_choice(
                    Choice::new("Разбить зеркало")
                        .with_effect(Effect::AdjustHealth(-5))
                        .with_effect(Effect::AdjustSanity(10)),
                )
                .with_choice(
                    Choice::new("Отвернуться и уйти")
                        .with_effect(Effect::Navigate(RoomId::MainHall)),
                ),
            ),
        );
        world.add_room(
            Room::new(
                RoomId::Study,
                "Кабинет хозяина дома. На столе лежит дневник в кожаном переплете, \
                 рядом огарок свечи.",
            )
            .with_script(
                DialogueScript::new(
                    "Дневник хозяина лежит раскрытым, словно его оставили минуту назад.",
                )
                .with_choice(
                    Choice::new("Прочитать дневник при свече")
                        .with_effect(Effect::AdvanceStory(1))
                        .with_effect(Effect::AdjustSanity(-5))
                        .with_requirement(Predicate::RequiresItem(ItemId::Candle)),
                )
                .with_choice(
                    Choice::new("Читать в темноте")
                        .with_effect(Effect::AdvanceStory(1))
                        .with_effect(Effect::AdjustSanity(-15))
                        .with_requirement(Predicate::MinSanity(40)),
                )
                .with_choice(Choice::new("Закрыть дневник")),
            ),
        );

        // Story passages, in the order navigation advances through them.
        world.add_story_passage(
            "Вы просыпаетесь в незнакомой комнате. Воздух тяжел, а тени танцуют в углах...",
        );
        world.add_story_passage(
            "Скрип половиц под ногами эхом разносится по коридору. Что-то наблюдает за вами...",
        );
        world.add_story_passage(
            "Зеркало в конце коридора отражает не ваше лицо. Реальность начинает искажаться...",
        );
        world.add_story_passage(
            "Шепот за стенами становится громче. Слова почти различимы, и лучше бы их не разбирать...",
        );
        world.add_story_passage(
            "Дом больше не скрывает своего взгляда. Каждая дверь ведет глубже, чем должна...",
        );
        world.add_story_passage(
            "Вы уже не помните, как выглядел выход. Возможно, его никогда и не было...",
        );

        // Hallucination pool.
        world.add_hallucination("Ты не один здесь...");
        world.add_hallucination("Они помнят твое имя.");
        world.add_hallucination("Обернись. Медленно.");
        world.add_hallucination("Стены дышат в такт твоему сердцу.");
        world.add_hallucination("За дверью кто-то считает твои шаги.");

        world
    }
}

impl Default for World {
    fn default() -> Self {
        World::new()
    }
}
