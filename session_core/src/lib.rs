//! # Session Core
//!
//! The engine crate for Shadow Mind. A [`Session`] owns one running
//! playthrough and everything it does: navigation with sanity decay, puzzle
//! solving, gated dialogue, the disruption scheduler, achievement tracking,
//! and snapshot persistence. World content and the state record live in
//! `game_rules`; this crate is the only code that mutates them.

pub mod achievements;
pub mod dialogue;
pub mod disruption;
pub mod error;
pub mod session;
pub mod transient;

pub use achievements::*;
pub use dialogue::*;
pub use disruption::*;
pub use error::*;
pub use session::*;
pub use transient::*;
