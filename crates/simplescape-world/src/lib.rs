//! Static game data for the `SimpleScape` simulation.
//!
//! Everything here is fixed at compile time: the item catalog, the
//! per-activity recipe registries, monsters, spells, prayers, quests,
//! slayer assignments, and the state a new game starts from.
//!
//! # Modules
//!
//! - [`catalog`] -- Value, food, prayer, and equipment stats per item
//! - [`recipes`] -- Typed recipe registries for every production activity
//! - [`spells`] -- Combat spells and enchantments
//! - [`prayers`] -- Prayer unlock levels, drain, and boosted skill
//! - [`monsters`] -- Monster templates and encounter spawning
//! - [`quests`] -- Quest objectives and rewards
//! - [`slayer`] -- Slayer masters and assignment tables
//! - [`starting`] -- New-game player, shop stock, and opening messages
//! - [`ticks`] -- Default tick interval per activity

pub mod catalog;
pub mod monsters;
pub mod prayers;
pub mod quests;
pub mod recipes;
pub mod slayer;
pub mod spells;
pub mod starting;
pub mod ticks;

// Re-export primary lookups at crate root.
pub use catalog::{GEMS, ItemDef, SpeedBonus, fixed, item_def};
pub use monsters::{MonsterTemplate, monster};
pub use prayers::{PrayerDef, prayer_boosting, prayer_def};
pub use quests::{QuestDef, quest_def};
pub use recipes::{Ingredient, Recipe, RecipeBook, RecipeKind, cooking_recipe, recipe_book};
pub use slayer::{SlayerAssignment, SlayerMaster, VANNAKA};
pub use spells::{Spell, SpellEffect, spell, spellbook};
pub use starting::{
    STARTER_TOOLS, WELCOME_BACK_MESSAGE, WELCOME_MESSAGE, general_store_stock, starting_player,
};
pub use ticks::{DEFAULT_TICK_MS, base_tick_ms};
