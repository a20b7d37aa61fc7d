//! The spellbook.
//!
//! Combat spells and enchantments share one table. A spell is a combat
//! spell exactly when its effect carries a maximum hit.

use rust_decimal::Decimal;
use simplescape_types::Item;

use crate::catalog::fixed;
use crate::recipes::Ingredient;

/// What casting a spell does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpellEffect {
    /// Damage the current encounter for `0..=max_hit`.
    Strike {
        /// Highest possible hit.
        max_hit: u32,
    },
    /// Turn one carried item into another.
    Enchant {
        /// Item consumed.
        target: Item,
        /// Item produced.
        product: Item,
    },
}

/// A spellbook entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spell {
    /// Lookup key.
    pub key: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Minimum Magic level.
    pub level_req: u32,
    /// Magic experience per cast.
    pub xp: Decimal,
    /// Runes consumed per cast.
    pub runes: &'static [Ingredient],
    /// Effect of the cast.
    pub effect: SpellEffect,
}

impl Spell {
    /// Maximum hit for combat spells, `None` for enchantments.
    pub const fn max_hit(&self) -> Option<u32> {
        match self.effect {
            SpellEffect::Strike { max_hit } => Some(max_hit),
            SpellEffect::Enchant { .. } => None,
        }
    }
}

static SPELLBOOK: &[Spell] = &[
    Spell {
        key: "windStrike",
        name: "Wind Strike",
        level_req: 1,
        xp: fixed(55, 1), // 5.5
        runes: &[
            Ingredient {
                item: Item::AirRune,
                quantity: 1,
            },
            Ingredient {
                item: Item::MindRune,
                quantity: 1,
            },
        ],
        effect: SpellEffect::Strike { max_hit: 2 },
    },
    Spell {
        key: "enchantSapphireRing",
        name: "Enchant Sapphire Ring",
        level_req: 7,
        xp: fixed(175, 1), // 17.5
        runes: &[
            Ingredient {
                item: Item::WaterRune,
                quantity: 1,
            },
            Ingredient {
                item: Item::CosmicRune,
                quantity: 1,
            },
        ],
        effect: SpellEffect::Enchant {
            target: Item::SapphireRing,
            product: Item::SapphireRing,
        },
    },
];

/// Every spell, in book order.
pub const fn spellbook() -> &'static [Spell] {
    SPELLBOOK
}

/// Find a spell by key.
pub fn spell(key: &str) -> Option<&'static Spell> {
    SPELLBOOK.iter().find(|spell| spell.key == key)
}
