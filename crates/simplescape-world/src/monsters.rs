//! Monster templates and encounter spawning.

use rust_decimal::Decimal;
use simplescape_types::{Encounter, Item, LootEntry, MonsterKey};

use crate::catalog::fixed;

/// Static definition of a monster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonsterTemplate {
    /// Display name.
    pub name: &'static str,
    /// Starting hit points.
    pub max_hp: u32,
    /// Attack level.
    pub attack: u32,
    /// Defence level.
    pub defence: u32,
    /// Loot table, rolled entry by entry on death.
    pub loot: &'static [LootEntry],
    /// Inclusive `(min, max)` gold dropped.
    pub gold_drop: (u32, u32),
    /// Hitpoints experience on death.
    pub xp: u32,
}

impl MonsterTemplate {
    /// Spawn a fresh encounter at full health.
    pub fn spawn(&self, key: MonsterKey) -> Encounter {
        Encounter {
            key,
            name: String::from(self.name),
            max_hp: self.max_hp,
            hp: self.max_hp,
            attack: self.attack,
            defence: self.defence,
            loot: self.loot.to_vec(),
            gold_drop: self.gold_drop,
            xp: self.xp,
        }
    }
}

const fn entry(item: Item, quantity: u32, chance: Decimal) -> LootEntry {
    LootEntry {
        item,
        quantity,
        drop_chance: Some(chance),
    }
}

const fn percent(value: u32) -> Decimal {
    fixed(value, 2)
}

static GOBLIN: MonsterTemplate = MonsterTemplate {
    name: "Goblin",
    max_hp: 10,
    attack: 1,
    defence: 1,
    loot: &[
        entry(Item::Bones, 1, Decimal::ONE),
        entry(Item::AirRune, 5, percent(50)),
        entry(Item::MindRune, 5, percent(50)),
    ],
    gold_drop: (5, 15),
    xp: 15,
};

static COW: MonsterTemplate = MonsterTemplate {
    name: "Cow",
    max_hp: 8,
    attack: 0,
    defence: 0,
    loot: &[entry(Item::Cowhide, 1, Decimal::ONE)],
    gold_drop: (3, 10),
    xp: 10,
};

static SKELETON: MonsterTemplate = MonsterTemplate {
    name: "Skeleton",
    max_hp: 20,
    attack: 5,
    defence: 5,
    loot: &[
        entry(Item::Bones, 1, Decimal::ONE),
        entry(Item::EarthRune, 5, percent(60)),
        entry(Item::IronOre, 1, Decimal::ONE),
    ],
    gold_drop: (10, 25),
    xp: 30,
};

static TREE_SPIRIT: MonsterTemplate = MonsterTemplate {
    name: "Tree Spirit",
    max_hp: 60,
    attack: 15,
    defence: 10,
    loot: &[
        entry(Item::Bones, 1, Decimal::ONE),
        entry(Item::AdamantAxe, 1, percent(10)),
        entry(Item::FireRune, 10, percent(80)),
    ],
    gold_drop: (100, 200),
    xp: 100,
};

static CHICKEN: MonsterTemplate = MonsterTemplate {
    name: "Chicken",
    max_hp: 3,
    attack: 0,
    defence: 0,
    loot: &[entry(Item::Feathers, 15, Decimal::ONE)],
    gold_drop: (1, 5),
    xp: 5,
};

static DWARF: MonsterTemplate = MonsterTemplate {
    name: "Dwarf",
    max_hp: 35,
    attack: 8,
    defence: 15,
    loot: &[
        entry(Item::Bones, 1, Decimal::ONE),
        entry(Item::Coal, 1, percent(50)),
        entry(Item::IronOre, 1, percent(80)),
        entry(Item::UncutSapphire, 1, percent(5)),
        entry(Item::UncutEmerald, 1, percent(2)),
        entry(Item::CosmicRune, 3, percent(20)),
        entry(Item::Staff, 1, percent(5)),
    ],
    gold_drop: (25, 75),
    xp: 45,
};

/// Look up a monster template.
pub const fn monster(key: MonsterKey) -> &'static MonsterTemplate {
    match key {
        MonsterKey::Goblin => &GOBLIN,
        MonsterKey::Cow => &COW,
        MonsterKey::Skeleton => &SKELETON,
        MonsterKey::TreeSpirit => &TREE_SPIRIT,
        MonsterKey::Chicken => &CHICKEN,
        MonsterKey::Dwarf => &DWARF,
    }
}
