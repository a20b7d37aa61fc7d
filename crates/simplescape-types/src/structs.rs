//! Core state structs: player, collections, encounters, and the session
//! state the reducer operates on.
//!
//! Field names serialize in camelCase to stay compatible with saves written
//! by the browser build of the game. Optional fields that older saves may
//! lack carry `#[serde(default)]` so a structurally valid but incomplete
//! snapshot still loads.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{Activity, EquipmentSlot, MonsterKey, Prayer, QuestId, QuestStatus, Skill};
use crate::items::Item;

// ---------------------------------------------------------------------------
// Collections
// ---------------------------------------------------------------------------

/// A stack of one item. Quantity is always greater than zero while the
/// stack sits in a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ItemStack {
    /// The stacked item.
    #[serde(rename = "name")]
    pub item: Item,
    /// Units in the stack.
    pub quantity: u32,
}

impl ItemStack {
    /// Create a stack.
    pub const fn new(item: Item, quantity: u32) -> Self {
        Self { item, quantity }
    }
}

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

/// Accumulated experience in one skill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SkillXp {
    /// Total experience. Fractional rewards (37.5 for an oak log) are kept
    /// exactly.
    #[ts(as = "String")]
    pub xp: Decimal,
}

impl SkillXp {
    /// Wrap an experience total.
    pub const fn new(xp: Decimal) -> Self {
        Self { xp }
    }
}

/// An assigned slayer task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct SlayerTask {
    /// The monster to kill.
    pub monster_key: MonsterKey,
    /// Kills assigned.
    pub initial_amount: u32,
    /// Kills still owed. Never increases and never exceeds `initial_amount`.
    pub remaining: u32,
}

/// Complete player state. This is what gets saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Player {
    /// Experience per skill.
    pub skills: BTreeMap<Skill, SkillXp>,
    /// Carried stacks, in pickup order. Capped by the inventory slot count.
    pub inventory: Vec<ItemStack>,
    /// Banked stacks. Capped by the bank slot count.
    #[serde(default)]
    pub bank: Vec<ItemStack>,
    /// Current hit points.
    pub hp: u32,
    /// Worn items, one per slot.
    #[serde(default)]
    pub equipment: BTreeMap<EquipmentSlot, Item>,
    /// Current prayer pool.
    #[serde(default = "default_prayer_pool")]
    #[ts(as = "String")]
    pub prayer_points: Decimal,
    /// Prayer pool ceiling. Never decreases.
    #[serde(default = "default_prayer_pool")]
    #[ts(as = "String")]
    pub max_prayer_points: Decimal,
    /// Prayers currently switched on.
    #[serde(default)]
    pub active_prayers: BTreeSet<Prayer>,
    /// Quest progress.
    #[serde(default = "default_quests")]
    pub quests: BTreeMap<QuestId, QuestStatus>,
    /// The outstanding slayer assignment, if any.
    #[serde(default)]
    pub slayer_task: Option<SlayerTask>,
}

/// Prayer pool given to saves that predate prayer.
pub fn default_prayer_pool() -> Decimal {
    Decimal::from(10)
}

/// Quest log given to saves that predate quests.
pub fn default_quests() -> BTreeMap<QuestId, QuestStatus> {
    QuestId::ALL
        .iter()
        .map(|quest| (*quest, QuestStatus::NotStarted))
        .collect()
}

// ---------------------------------------------------------------------------
// Encounter
// ---------------------------------------------------------------------------

/// One entry of a monster's loot table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct LootEntry {
    /// Dropped item.
    #[serde(rename = "name")]
    pub item: Item,
    /// Units dropped.
    pub quantity: u32,
    /// Probability in `[0, 1]`. `None` means the drop is guaranteed.
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub drop_chance: Option<Decimal>,
}

/// A live monster being fought. Exists only while the activity is combat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Encounter {
    /// Template the monster was spawned from.
    pub key: MonsterKey,
    /// Display name.
    pub name: String,
    /// Starting hit points.
    pub max_hp: u32,
    /// Remaining hit points, at most `max_hp`.
    pub hp: u32,
    /// Attack level; retaliation rolls `0..=attack`.
    pub attack: u32,
    /// Defence level.
    pub defence: u32,
    /// Rolled independently on death.
    pub loot: Vec<LootEntry>,
    /// Inclusive `(min, max)` gold dropped on death.
    pub gold_drop: (u32, u32),
    /// Hitpoints experience granted on death.
    pub xp: u32,
}

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// Everything the reducer reads and writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct GameState {
    /// The one activity in progress.
    pub activity: Activity,
    /// Recipe or spot key. Set exactly when the activity needs one.
    pub current_resource_key: Option<String>,
    /// Append-only message log.
    pub log: Vec<String>,
    /// The player.
    pub player: Player,
    /// General store stock. Uncapped.
    pub shop_stock: Vec<ItemStack>,
    /// The monster being fought, while in combat.
    pub monster: Option<Encounter>,
}

/// The persisted part of a session: the player plus the shop stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct SaveSnapshot {
    /// Saved player.
    pub player: Player,
    /// Saved shop stock.
    pub shop_stock: Vec<ItemStack>,
}

impl GameState {
    /// Copy out the persisted part of the state.
    pub fn snapshot(&self) -> SaveSnapshot {
        SaveSnapshot {
            player: self.player.clone(),
            shop_stock: self.shop_stock.clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn item_stack_uses_name_field() {
        let stack = ItemStack::new(Item::Logs, 3);
        let json = serde_json::to_value(stack).unwrap();
        assert_eq!(json["name"], "Logs");
        assert_eq!(json["quantity"], 3);
    }

    #[test]
    fn player_without_optional_fields_gets_defaults() {
        let json = r#"{
            "skills": { "Attack": { "xp": 0 }, "Hitpoints": { "xp": 1154 } },
            "inventory": [ { "name": "Logs", "quantity": 2 } ],
            "hp": 10
        }"#;
        let player: Player = serde_json::from_str(json).unwrap();
        assert!(player.bank.is_empty());
        assert!(player.equipment.is_empty());
        assert_eq!(player.prayer_points, Decimal::from(10));
        assert_eq!(player.max_prayer_points, Decimal::from(10));
        assert!(player.active_prayers.is_empty());
        assert_eq!(
            player.quests.get(&QuestId::CooksEmergency),
            Some(&QuestStatus::NotStarted)
        );
        assert_eq!(player.slayer_task, None);
    }

    #[test]
    fn fractional_xp_survives_round_trip() {
        let mut skills = BTreeMap::new();
        skills.insert(Skill::Woodcutting, SkillXp::new(Decimal::new(375, 1)));
        let player = Player {
            skills,
            inventory: vec![ItemStack::new(Item::OakLogs, 1)],
            bank: Vec::new(),
            hp: 10,
            equipment: BTreeMap::new(),
            prayer_points: Decimal::new(95, 1),
            max_prayer_points: Decimal::from(10),
            active_prayers: BTreeSet::new(),
            quests: default_quests(),
            slayer_task: None,
        };
        let json = serde_json::to_string(&player).unwrap();
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(back, player);
    }

    #[test]
    fn slayer_task_field_names() {
        let task = SlayerTask {
            monster_key: MonsterKey::Cow,
            initial_amount: 12,
            remaining: 4,
        };
        let json = serde_json::to_value(task).unwrap();
        assert_eq!(json["monsterKey"], "cow");
        assert_eq!(json["initialAmount"], 12);
    }
}
