//! Precondition checks shared by every transition.
//!
//! A failed check yields a [`Rejection`]. Its `Display` text is the exact
//! log line the player sees; the reducer appends it to an otherwise
//! unchanged state.

use simplescape_types::{Activity, Item, ItemStack, Prayer, Skill};
use simplescape_world::Ingredient;

use crate::inventory;

/// A command that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// Another activity is already running.
    #[error("You are already busy.")]
    Busy,

    /// A keyed activity or combat was started without a target.
    #[error("You need to choose what to do first.")]
    NoTarget,

    /// The key, spell, or target does not exist.
    #[error("Nothing interesting happens.")]
    NothingInteresting,

    /// Gathering level too low.
    #[error("You need level {level} {skill} to do that.")]
    GatheringLevel {
        /// Required level.
        level: u32,
        /// Gathering skill.
        skill: Skill,
    },

    /// Crafting level too low.
    #[error("You need level {level} Crafting to make {name}.")]
    CraftingLevel {
        /// Required level.
        level: u32,
        /// Recipe name.
        name: &'static str,
    },

    /// Leather work needs a needle and thread.
    #[error("You need a needle and thread for that.")]
    NeedleAndThread,

    /// Inputs for a crafting or fletching recipe are missing.
    #[error("You don't have the required items.")]
    MissingMaterials,

    /// Firemaking needs a tinderbox.
    #[error("You need a tinderbox to light a fire.")]
    NoTinderbox,

    /// Firemaking level too low.
    #[error("You need level {level} Firemaking to burn {}.", .logs.lowercase())]
    FiremakingLevel {
        /// Required level.
        level: u32,
        /// Logs to burn.
        logs: Item,
    },

    /// No logs of the chosen kind are carried.
    #[error("You don't have any {} to burn.", .logs.lowercase())]
    NoLogs {
        /// Logs to burn.
        logs: Item,
    },

    /// No raw food is carried.
    #[error("You don't have anything to cook.")]
    NothingToCook,

    /// Cooking level too low for the first raw food carried.
    #[error("You need level {level} Cooking to cook {}.", .raw.lowercase())]
    CookingLevel {
        /// Required level.
        level: u32,
        /// The raw food.
        raw: Item,
    },

    /// Thieving level too low.
    #[error("You need level {level} Thieving for that.")]
    ThievingLevel {
        /// Required level.
        level: u32,
    },

    /// Fletching level too low.
    #[error("You need level {level} Fletching to do that.")]
    FletchingLevel {
        /// Required level.
        level: u32,
    },

    /// Smithing level too low.
    #[error("You need level {level} Smithing to make a {name}.")]
    SmithingLevel {
        /// Required level.
        level: u32,
        /// Recipe name.
        name: &'static str,
    },

    /// Bars or ore for a smithing recipe are missing.
    #[error("You don't have the required items to make a {name}.")]
    SmithingMaterials {
        /// Recipe name.
        name: &'static str,
    },

    /// Magic level too low for a spell.
    #[error("You need level {level} Magic to cast {spell}.")]
    MagicLevel {
        /// Required level.
        level: u32,
        /// Spell name.
        spell: &'static str,
    },

    /// Runes for a spell are missing.
    #[error("You don't have enough runes to cast {spell}.")]
    NotEnoughRunes {
        /// Spell name.
        spell: &'static str,
    },

    /// The item an enchantment consumes is missing.
    #[error("You need a {item} to enchant.")]
    NothingToEnchant {
        /// The item to enchant.
        item: Item,
    },

    /// A spell was cast with no monster to hit.
    #[error("There is nothing to attack.")]
    NotInCombat,

    /// An enchantment was cast at a monster.
    #[error("You can't cast {spell} in combat.")]
    NotCombatSpell {
        /// Spell name.
        spell: &'static str,
    },

    /// The item is not in the inventory.
    #[error("You don't have any {}.", .item.lowercase())]
    NotHeld {
        /// The missing item.
        item: Item,
    },

    /// The item does not heal.
    #[error("You can't eat that.")]
    NotFood,

    /// The item grants no prayer experience.
    #[error("You can't bury that.")]
    NotBones,

    /// The item has no equipment slot.
    #[error("You can't wear that.")]
    NotWearable,

    /// Hit points are already at the maximum.
    #[error("You are already at full health.")]
    FullHealth,

    /// Prayer level too low.
    #[error("You need level {level} Prayer to use {prayer}.")]
    PrayerLevel {
        /// Required level.
        level: u32,
        /// The prayer.
        prayer: Prayer,
    },

    /// The prayer pool is empty.
    #[error("You don't have enough prayer points.")]
    NoPrayerPoints,

    /// Swapping equipment needs a free slot for the old item.
    #[error("You don't have enough inventory space to unequip your current item.")]
    NoRoomToSwap,

    /// Unequipping needs a free slot.
    #[error("Not enough inventory space to unequip this item.")]
    NoRoomToUnequip,

    /// The slot is empty.
    #[error("You have nothing equipped there.")]
    NothingEquipped,

    /// The quest was already started.
    #[error("You have already started {quest}.")]
    QuestAlreadyStarted {
        /// Quest name.
        quest: &'static str,
    },

    /// The quest is not in progress.
    #[error("You are not on the quest {quest}.")]
    QuestNotInProgress {
        /// Quest name.
        quest: &'static str,
    },

    /// Objective items are missing.
    #[error("You don't have the items required to complete the quest.")]
    QuestItems,

    /// An unfinished slayer task exists.
    #[error("You already have a slayer task!")]
    SlayerTaskActive,

    /// No assignment is open at the current Slayer level.
    #[error("You are not a high enough Slayer level for any tasks.")]
    SlayerLevel,

    /// The shop has none of the item.
    #[error("The shop is out of {}.", .item.lowercase())]
    NotInStock {
        /// The item.
        item: Item,
    },

    /// Not enough currency for the purchase.
    #[error("You don't have enough gold.")]
    NotEnoughGold,

    /// The purchase or sale needs a free inventory slot.
    #[error("You don't have enough inventory space.")]
    NoInventorySpace,

    /// The shop does not trade in the item.
    #[error("The shop won't buy that.")]
    CannotSell,

    /// The item is not in the bank.
    #[error("You don't have any {} in your bank.", .item.lowercase())]
    NotInBank {
        /// The item.
        item: Item,
    },

    /// The bank has no free slot.
    #[error("Your bank is full.")]
    BankFull,

    /// The inventory has no free slot.
    #[error("Your inventory is full.")]
    InventoryFull,

    /// The inventory is empty.
    #[error("You have nothing to deposit.")]
    NothingToDeposit,
}

/// Stage 1: nothing else may be running.
pub const fn require_idle(activity: Activity) -> Result<(), Rejection> {
    match activity {
        Activity::Idle => Ok(()),
        _ => Err(Rejection::Busy),
    }
}

/// Stage 2: a keyed activity needs its key.
pub fn require_key(key: Option<&str>) -> Result<&str, Rejection> {
    key.ok_or(Rejection::NoTarget)
}

/// The item must be carried. Returns the quantity held.
pub fn require_held(inventory: &[ItemStack], item: Item) -> Result<u32, Rejection> {
    match inventory::quantity_of(inventory, item) {
        0 => Err(Rejection::NotHeld { item }),
        held => Ok(held),
    }
}

/// Whether every ingredient is carried in full.
pub fn has_ingredients(inventory: &[ItemStack], ingredients: &[Ingredient]) -> bool {
    ingredients
        .iter()
        .all(|ingredient| inventory::has_item(inventory, ingredient.item, ingredient.quantity))
}

/// Whether every tool is carried.
pub fn has_tools(inventory: &[ItemStack], tools: &[Item]) -> bool {
    tools.iter().all(|tool| inventory::has_item(inventory, *tool, 1))
}
