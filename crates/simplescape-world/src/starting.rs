//! Starting state for a new game: skills, loadout, shop stock, and the
//! opening log lines.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;
use simplescape_types::{
    Item, ItemStack, Player, Skill, SkillXp, default_prayer_pool, default_quests,
};

/// Hitpoints experience of a new player (level 10).
pub const STARTING_HITPOINTS_XP: i64 = 1154;

/// Hit points of a new player.
pub const STARTING_HP: u32 = 10;

/// Tools every player is guaranteed to own. Re-added on load when missing
/// from both inventory and bank.
pub const STARTER_TOOLS: [Item; 4] = [Item::BronzeAxe, Item::Tinderbox, Item::Needle, Item::Thread];

/// Gold a new player starts with.
pub const STARTING_GOLD: u32 = 500;

/// First log line of a new game.
pub const WELCOME_MESSAGE: &str =
    "Welcome to SimpleScape! You find an axe, tinderbox, needle, thread and 500 gold.";

/// First log line after a saved game is restored.
pub const WELCOME_BACK_MESSAGE: &str = "Welcome back! Your progress has been loaded.";

/// Experience table of a new player: zero everywhere except Hitpoints.
pub fn starting_skills() -> BTreeMap<Skill, SkillXp> {
    Skill::ALL
        .into_iter()
        .map(|skill| {
            let xp = if skill == Skill::Hitpoints {
                Decimal::new(STARTING_HITPOINTS_XP, 0)
            } else {
                Decimal::ZERO
            };
            (skill, SkillXp::new(xp))
        })
        .collect()
}

/// A freshly created player.
pub fn starting_player() -> Player {
    let mut inventory: Vec<ItemStack> = STARTER_TOOLS
        .into_iter()
        .map(|item| ItemStack::new(item, 1))
        .collect();
    inventory.push(ItemStack::new(Item::CURRENCY, STARTING_GOLD));

    Player {
        skills: starting_skills(),
        inventory,
        bank: Vec::new(),
        hp: STARTING_HP,
        equipment: BTreeMap::new(),
        prayer_points: default_prayer_pool(),
        max_prayer_points: default_prayer_pool(),
        active_prayers: BTreeSet::new(),
        quests: default_quests(),
        slayer_task: None,
    }
}

/// The general store's opening stock.
pub fn general_store_stock() -> Vec<ItemStack> {
    vec![
        ItemStack::new(Item::BronzeAxe, 10),
        ItemStack::new(Item::Tinderbox, 10),
        ItemStack::new(Item::Needle, 100),
        ItemStack::new(Item::Thread, 100),
        ItemStack::new(Item::Staff, 10),
        ItemStack::new(Item::BronzeDagger, 10),
        ItemStack::new(Item::AirRune, 1000),
        ItemStack::new(Item::MindRune, 1000),
        ItemStack::new(Item::WaterRune, 500),
        ItemStack::new(Item::EarthRune, 500),
        ItemStack::new(Item::FireRune, 500),
        ItemStack::new(Item::Bread, 20),
        ItemStack::new(Item::Cake, 10),
    ]
}
