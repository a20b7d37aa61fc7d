//! Enumeration types for the game simulation.
//!
//! Serialized names match the save format written by earlier versions of
//! the game, so stored snapshots keep loading: skills use their display
//! names (`"Attack"`), activities and slots are lowercase, quests and
//! monsters are camelCase keys.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

/// A trainable skill. Every player carries experience in all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Skill {
    /// Melee accuracy.
    Attack,
    /// Melee damage.
    Strength,
    /// Damage mitigation.
    Defence,
    /// Hit point pool; level + 9 is the maximum hp.
    Hitpoints,
    /// Chopping trees.
    Woodcutting,
    /// Mining rocks.
    Mining,
    /// Catching fish.
    Fishing,
    /// Cooking raw food.
    Cooking,
    /// Smelting ore and smithing bars.
    Smithing,
    /// Bows, arrows, and bowstrings.
    Fletching,
    /// Bow combat.
    Ranged,
    /// Burning logs.
    Firemaking,
    /// Leather, gems, and jewelry.
    Crafting,
    /// Spells.
    Magic,
    /// Prayer pool and unlocks.
    Prayer,
    /// Pickpocketing and stalls.
    Thieving,
    /// Assigned monster kills.
    Slayer,
}

impl Skill {
    /// Every skill, in display order.
    pub const ALL: [Self; 17] = [
        Self::Attack,
        Self::Strength,
        Self::Defence,
        Self::Hitpoints,
        Self::Woodcutting,
        Self::Mining,
        Self::Fishing,
        Self::Cooking,
        Self::Smithing,
        Self::Fletching,
        Self::Ranged,
        Self::Firemaking,
        Self::Crafting,
        Self::Magic,
        Self::Prayer,
        Self::Thieving,
        Self::Slayer,
    ];

    /// Display name, as used in log lines.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Attack => "Attack",
            Self::Strength => "Strength",
            Self::Defence => "Defence",
            Self::Hitpoints => "Hitpoints",
            Self::Woodcutting => "Woodcutting",
            Self::Mining => "Mining",
            Self::Fishing => "Fishing",
            Self::Cooking => "Cooking",
            Self::Smithing => "Smithing",
            Self::Fletching => "Fletching",
            Self::Ranged => "Ranged",
            Self::Firemaking => "Firemaking",
            Self::Crafting => "Crafting",
            Self::Magic => "Magic",
            Self::Prayer => "Prayer",
            Self::Thieving => "Thieving",
            Self::Slayer => "Slayer",
        }
    }
}

impl core::fmt::Display for Skill {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Activities
// ---------------------------------------------------------------------------

/// The single activity a player is engaged in. Ticks only run while this
/// is not [`Activity::Idle`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum Activity {
    /// Nothing in progress.
    #[default]
    Idle,
    /// Gathering logs at a tree.
    Woodcutting,
    /// Gathering ore at a rock.
    Mining,
    /// Gathering raw fish at a spot.
    Fishing,
    /// Fighting the current encounter.
    Combat,
    /// Cooking whatever raw food is carried.
    Cooking,
    /// Smelting or smithing a recipe.
    Smithing,
    /// Fletching a recipe.
    Fletching,
    /// Burning logs.
    Firemaking,
    /// Crafting a recipe.
    Crafting,
    /// Casting an enchantment repeatedly.
    Enchanting,
    /// Stealing from a target.
    Thieving,
}

impl Activity {
    /// Gathering activities yield one unit per tick at no input cost.
    pub const fn is_gathering(self) -> bool {
        matches!(self, Self::Woodcutting | Self::Mining | Self::Fishing)
    }

    /// Activities that run without a resource key.
    pub const fn is_keyless(self) -> bool {
        matches!(self, Self::Idle | Self::Combat | Self::Cooking)
    }

    /// The skill that receives experience from this activity.
    ///
    /// Combat spreads experience over several skills and returns `None`.
    pub const fn skill(self) -> Option<Skill> {
        match self {
            Self::Idle | Self::Combat => None,
            Self::Woodcutting => Some(Skill::Woodcutting),
            Self::Mining => Some(Skill::Mining),
            Self::Fishing => Some(Skill::Fishing),
            Self::Cooking => Some(Skill::Cooking),
            Self::Smithing => Some(Skill::Smithing),
            Self::Fletching => Some(Skill::Fletching),
            Self::Firemaking => Some(Skill::Firemaking),
            Self::Crafting => Some(Skill::Crafting),
            Self::Enchanting => Some(Skill::Magic),
            Self::Thieving => Some(Skill::Thieving),
        }
    }
}

// ---------------------------------------------------------------------------
// Equipment
// ---------------------------------------------------------------------------

/// A worn equipment slot. Each slot holds at most one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum EquipmentSlot {
    /// Helmets.
    Head,
    /// Platebodies and leather bodies.
    Body,
    /// Platelegs and chaps.
    Legs,
    /// Weapons, axes, bows, and staves.
    Weapon,
    /// Kiteshields.
    Shield,
    /// Arrows.
    Ammo,
    /// Gloves.
    Hands,
    /// Boots.
    Feet,
    /// Rings.
    Ring,
}

impl EquipmentSlot {
    /// Every slot, in display order.
    pub const ALL: [Self; 9] = [
        Self::Head,
        Self::Body,
        Self::Legs,
        Self::Weapon,
        Self::Shield,
        Self::Ammo,
        Self::Hands,
        Self::Feet,
        Self::Ring,
    ];
}

// ---------------------------------------------------------------------------
// Prayers
// ---------------------------------------------------------------------------

/// A toggleable prayer that drains the prayer pool while active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Prayer {
    /// Boosts effective Defence.
    #[serde(rename = "Thick Skin")]
    ThickSkin,
    /// Boosts effective Strength.
    #[serde(rename = "Burst of Strength")]
    BurstOfStrength,
    /// Boosts effective Attack.
    #[serde(rename = "Clarity of Thought")]
    ClarityOfThought,
}

impl Prayer {
    /// Every prayer, in unlock order.
    pub const ALL: [Self; 3] = [Self::ThickSkin, Self::BurstOfStrength, Self::ClarityOfThought];

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ThickSkin => "Thick Skin",
            Self::BurstOfStrength => "Burst of Strength",
            Self::ClarityOfThought => "Clarity of Thought",
        }
    }
}

impl core::fmt::Display for Prayer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Quests
// ---------------------------------------------------------------------------

/// Identifier of a quest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum QuestId {
    /// The Cook needs ingredients.
    #[serde(rename = "cooksEmergency")]
    CooksEmergency,
}

impl QuestId {
    /// Every quest.
    pub const ALL: [Self; 1] = [Self::CooksEmergency];
}

/// Progress through a quest. Only ever moves forward.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "kebab-case")]
#[ts(export, export_to = "bindings/")]
pub enum QuestStatus {
    /// Not yet accepted.
    #[default]
    NotStarted,
    /// Accepted; objectives outstanding.
    InProgress,
    /// Finished and rewarded.
    Completed,
}

// ---------------------------------------------------------------------------
// Monsters
// ---------------------------------------------------------------------------

/// Key of a monster template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub enum MonsterKey {
    /// Weak humanoid that drops runes.
    Goblin,
    /// Harmless; drops cowhide.
    Cow,
    /// Undead; drops earth runes and iron ore.
    Skeleton,
    /// Tough spirit; rare adamant axe drop.
    TreeSpirit,
    /// Harmless; drops feathers.
    Chicken,
    /// Miner; drops coal, ore, and gems.
    Dwarf,
}

impl MonsterKey {
    /// Every monster template.
    pub const ALL: [Self; 6] = [
        Self::Goblin,
        Self::Cow,
        Self::Skeleton,
        Self::TreeSpirit,
        Self::Chicken,
        Self::Dwarf,
    ];
}
