//! Shared type definitions for the `SimpleScape` simulation.
//!
//! This crate is the single source of truth for the game state, the save
//! snapshot, and the command vocabulary. Types flow downstream to
//! `TypeScript` via `ts-rs` for the presentation layer.
//!
//! # Modules
//!
//! - [`enums`] -- Skills, activities, slots, prayers, quests, monster keys
//! - [`items`] -- The closed item catalog
//! - [`structs`] -- Player, collections, encounters, session state
//! - [`commands`] -- Commands accepted by the reducer

pub mod commands;
pub mod enums;
pub mod items;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use commands::{ActivityRequest, Command, TradeRequest, TransferAmount, TransferRequest};
pub use enums::{Activity, EquipmentSlot, MonsterKey, Prayer, QuestId, QuestStatus, Skill};
pub use items::Item;
pub use structs::{
    Encounter, GameState, ItemStack, LootEntry, Player, SaveSnapshot, SkillXp, SlayerTask,
    default_prayer_pool, default_quests,
};
