//! # Game Rules
//!
//! The "World Bible" crate - contains all room, item, puzzle, achievement, and
//! dialogue definitions for Shadow Mind, plus the mutable player state.
//! This crate is the single source of truth for game content and carries no
//! engine logic.

pub mod achievements;
pub mod dialogue;
pub mod items;
pub mod puzzles;
pub mod state;
pub mod world;

pub use achievements::*;
pub use dialogue::*;
pub use items::*;
pub use puzzles::*;
pub use state::*;
pub use world::*;
