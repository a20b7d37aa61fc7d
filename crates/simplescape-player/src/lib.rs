//! Player state transitions for the `SimpleScape` simulation.
//!
//! This crate is the pure logic layer: every operation takes a
//! [`GameState`] snapshot and produces the next one without touching I/O.
//! It sits between `simplescape-types` (data structures) plus
//! `simplescape-world` (static game data) and the `simplescape-core`
//! session, which owns the state and drives ticks.
//!
//! # Modules
//!
//! - [`actions`] -- The reducer entry point [`apply`], dispatch, and validation.
//! - [`combat`] -- Melee, ranged, and spell rounds; death, loot, retaliation.
//! - [`config`] -- Tunable numeric rules ([`GameRules`]).
//! - [`dice`] -- Random rolls behind the [`Dice`] trait.
//! - [`economy`] -- Shop trading and banking.
//! - [`equipment`] -- Equipping, unequipping, and gear bonuses.
//! - [`error`] -- Error types ([`PlayerError`], [`ActionError`]).
//! - [`inventory`] -- Slot-capacity stacking collections.
//! - [`production`] -- Gathering, processing, enchanting, and thieving.
//! - [`quests`] -- Quest state machine.
//! - [`skills`] -- Experience table, levels, and level-up announcements.
//! - [`slayer`] -- Slayer assignments and kill counts.
//! - [`state`] -- New games and the idle transition.
//! - [`vitals`] -- Hit points, food, bones, prayer, and soft death.
//!
//! [`GameState`]: simplescape_types::GameState

pub mod actions;
pub mod combat;
pub mod config;
pub mod dice;
pub mod economy;
pub mod equipment;
pub mod error;
pub mod inventory;
pub mod production;
pub mod quests;
pub mod skills;
pub mod slayer;
pub mod state;
pub mod vitals;

// Re-export primary types at crate root for convenience.
pub use actions::{Rejection, apply};
pub use config::GameRules;
pub use dice::{Dice, ScriptedDice};
pub use error::{ActionError, ActionResult, PlayerError};
pub use state::{go_idle, new_game};
