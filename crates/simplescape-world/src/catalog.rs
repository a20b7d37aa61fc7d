//! Item catalog: value, food, prayer, and equipment stats for every item.
//!
//! [`item_def`] is total over [`Item`], so a missing definition is a
//! compile error rather than a runtime lookup failure.

use rust_decimal::Decimal;
use simplescape_types::{EquipmentSlot, Item, Skill};

/// `mantissa / 10^scale` as a [`Decimal`], usable in constant tables.
pub const fn fixed(mantissa: u32, scale: u32) -> Decimal {
    Decimal::from_parts(mantissa, 0, 0, false, scale)
}

/// Fractional speed-up a tool gives to one gathering skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedBonus {
    /// Skill the bonus applies to.
    pub skill: Skill,
    /// Fraction of the base duration removed, in `[0, 1)`.
    pub fraction: Decimal,
}

/// Static definition of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemDef {
    /// Shop value in gold pieces.
    pub value: u32,
    /// Hit points restored when eaten. `None` for inedible items.
    pub heal_amount: Option<u32>,
    /// Prayer experience when buried. `None` for items that cannot be buried.
    pub prayer_xp: Option<Decimal>,
    /// Examine text.
    pub examine: &'static str,
    /// Slot the item is worn in. `None` for items that cannot be equipped.
    pub slot: Option<EquipmentSlot>,
    /// Melee accuracy bonus.
    pub attack_bonus: u32,
    /// Added to total defence when worn.
    pub defence_bonus: u32,
    /// Magic bonus.
    pub magic_bonus: u32,
    /// Marks a bow. Non-zero means the weapon fires ammunition.
    pub ranged_bonus: u32,
    /// Damage bonus of ammunition.
    pub ranged_strength: u32,
    /// Gathering speed bonus while wielded.
    pub speed_bonus: Option<SpeedBonus>,
}

impl ItemDef {
    /// Whether a wielded item of this kind makes combat ranged.
    pub const fn is_ranged_weapon(&self) -> bool {
        self.ranged_bonus > 0
    }
}

const fn plain(value: u32, examine: &'static str) -> ItemDef {
    ItemDef {
        value,
        heal_amount: None,
        prayer_xp: None,
        examine,
        slot: None,
        attack_bonus: 0,
        defence_bonus: 0,
        magic_bonus: 0,
        ranged_bonus: 0,
        ranged_strength: 0,
        speed_bonus: None,
    }
}

const fn food(value: u32, heal: u32, examine: &'static str) -> ItemDef {
    ItemDef {
        heal_amount: Some(heal),
        ..plain(value, examine)
    }
}

const fn worn(value: u32, examine: &'static str, slot: EquipmentSlot) -> ItemDef {
    ItemDef {
        slot: Some(slot),
        ..plain(value, examine)
    }
}

const fn armour(value: u32, examine: &'static str, slot: EquipmentSlot, defence: u32) -> ItemDef {
    ItemDef {
        defence_bonus: defence,
        ..worn(value, examine, slot)
    }
}

const fn weapon(value: u32, examine: &'static str, attack: u32) -> ItemDef {
    ItemDef {
        attack_bonus: attack,
        ..worn(value, examine, EquipmentSlot::Weapon)
    }
}

const fn axe(value: u32, examine: &'static str, attack: u32, hundredths: u32) -> ItemDef {
    ItemDef {
        speed_bonus: Some(SpeedBonus {
            skill: Skill::Woodcutting,
            fraction: fixed(hundredths, 2),
        }),
        ..weapon(value, examine, attack)
    }
}

const fn bow(value: u32, examine: &'static str, ranged: u32) -> ItemDef {
    ItemDef {
        ranged_bonus: ranged,
        ..worn(value, examine, EquipmentSlot::Weapon)
    }
}

const fn arrows(value: u32, examine: &'static str, strength: u32) -> ItemDef {
    ItemDef {
        ranged_strength: strength,
        ..worn(value, examine, EquipmentSlot::Ammo)
    }
}

const fn ring(value: u32, examine: &'static str, attack: u32) -> ItemDef {
    ItemDef {
        attack_bonus: attack,
        ..worn(value, examine, EquipmentSlot::Ring)
    }
}

/// Look up the static definition of an item.
#[allow(clippy::too_many_lines)]
pub const fn item_def(item: Item) -> ItemDef {
    use EquipmentSlot::{Body, Feet, Hands, Head, Legs, Shield};

    match item {
        // ---- Logs ----
        Item::Logs => plain(2, "A pile of sturdy logs."),
        Item::OakLogs => plain(10, "Logs from an oak tree."),
        Item::MapleLogs => plain(40, "Logs from a maple tree."),
        Item::YewLogs => plain(150, "Logs from a yew tree."),
        Item::MagicLogs => plain(300, "Logs from an enchanted magic tree."),

        // ---- Ores ----
        Item::Ore => plain(3, "Some kind of rock containing ore. Looks like copper."),
        Item::Coal => plain(20, "A lump of coal."),
        Item::TinOre => plain(3, "This looks like tin ore."),
        Item::IronOre => plain(15, "A piece of iron ore."),
        Item::MithrilOre => plain(80, "A piece of mithril ore."),
        Item::GoldOre => plain(30, "A piece of gold ore."),

        // ---- Fish ----
        Item::RawFish => plain(4, "I should cook this."),
        Item::RawTrout => plain(10, "A raw trout. Looks tasty."),
        Item::RawLobster => plain(50, "A raw lobster. Needs cooking."),
        Item::RawSwordfish => plain(70, "A raw swordfish. Needs cooking."),
        Item::CookedFish => food(4, 3, "A cooked shrimp."),
        Item::CookedTrout => food(10, 7, "A nicely cooked trout."),
        Item::CookedLobster => food(50, 12, "A delicious-looking cooked lobster."),
        Item::CookedSwordfish => food(70, 14, "A meaty cooked swordfish."),
        Item::BurntFish => plain(1, "Oops."),

        // ---- Food ----
        Item::Bread => food(12, 5, "A loaf of bread."),
        Item::Cake => food(20, 9, "A delicious cake."),

        // ---- Bars ----
        Item::BronzeBar => plain(12, "A solid bar of bronze."),
        Item::IronBar => plain(25, "A solid bar of iron."),
        Item::SteelBar => plain(50, "A solid bar of steel."),
        Item::MithrilBar => plain(150, "A solid bar of mithril."),
        Item::GoldBar => plain(70, "A shiny gold bar."),

        // ---- Axes ----
        Item::BronzeAxe => axe(16, "A basic woodcutting axe.", 1, 5),
        Item::IronAxe => axe(56, "A decent woodcutting axe.", 3, 10),
        Item::SteelAxe => axe(200, "A good woodcutting axe.", 5, 15),
        Item::MithrilAxe => axe(520, "A very good woodcutting axe.", 7, 20),
        Item::AdamantAxe => axe(1280, "A sharp, powerful woodcutting axe.", 8, 25),

        // ---- Bronze ----
        Item::BronzeDagger => weapon(10, "A pointy dagger made of bronze.", 4),
        Item::BronzeFullHelm => armour(24, "A bronze full helmet.", Head, 4),
        Item::BronzePlatebody => armour(60, "A bronze platebody.", Body, 10),
        Item::BronzePlatelegs => armour(36, "A pair of bronze platelegs.", Legs, 6),
        Item::BronzeKiteshield => armour(40, "A bronze kiteshield.", Shield, 5),

        // ---- Iron ----
        Item::IronDagger => weapon(35, "A pointy dagger made of iron.", 7),
        Item::IronFullHelm => armour(84, "An iron full helmet.", Head, 6),
        Item::IronPlatebody => armour(210, "An iron platebody.", Body, 15),
        Item::IronPlatelegs => armour(126, "A pair of iron platelegs.", Legs, 10),
        Item::IronKiteshield => armour(140, "An iron kiteshield.", Shield, 8),

        // ---- Steel ----
        Item::SteelDagger => weapon(125, "A pointy dagger made of steel.", 10),
        Item::SteelFullHelm => armour(330, "A steel full helmet.", Head, 9),
        Item::SteelPlatebody => armour(825, "A steel platebody.", Body, 25),
        Item::SteelPlatelegs => armour(495, "A pair of steel platelegs.", Legs, 16),
        Item::SteelKiteshield => armour(550, "A steel kiteshield.", Shield, 12),

        // ---- Mithril ----
        Item::MithrilDagger => weapon(325, "A pointy dagger made of mithril.", 15),
        Item::MithrilFullHelm => armour(858, "A mithril full helmet.", Head, 13),
        Item::MithrilPlatebody => armour(2145, "A mithril platebody.", Body, 35),
        Item::MithrilPlatelegs => armour(1287, "A pair of mithril platelegs.", Legs, 22),
        Item::MithrilKiteshield => armour(1430, "A mithril kiteshield.", Shield, 18),

        // ---- Fletching and ranged ----
        Item::Flax => plain(2, "A bundle of flax."),
        Item::Bowstring => plain(30, "A string for a bow."),
        Item::Feathers => plain(2, "A handful of feathers."),
        Item::ArrowShafts => plain(1, "A bundle of headless arrow shafts."),
        Item::ShortbowU => plain(10, "An unstrung shortbow."),
        Item::LongbowU => plain(20, "An unstrung longbow."),
        Item::OakShortbowU => plain(25, "An unstrung oak shortbow."),
        Item::OakLongbowU => plain(50, "An unstrung oak longbow."),
        Item::MapleShortbowU => plain(100, "An unstrung maple shortbow."),
        Item::MapleLongbowU => plain(150, "An unstrung maple longbow."),
        Item::Shortbow => bow(40, "A standard shortbow.", 8),
        Item::Longbow => bow(50, "A standard longbow.", 8),
        Item::OakShortbow => bow(60, "A shortbow made of oak.", 14),
        Item::OakLongbow => bow(80, "A longbow made of oak.", 14),
        Item::MapleShortbow => bow(200, "A shortbow made of maple.", 20),
        Item::MapleLongbow => bow(250, "A longbow made of maple.", 20),
        Item::BronzeArrowtips => plain(2, "Tips for bronze arrows."),
        Item::IronArrowtips => plain(7, "Tips for iron arrows."),
        Item::SteelArrowtips => plain(15, "Tips for steel arrows."),
        Item::MithrilArrowtips => plain(40, "Tips for mithril arrows."),
        Item::BronzeArrows => arrows(3, "A bundle of bronze arrows.", 7),
        Item::IronArrows => arrows(10, "A bundle of iron arrows.", 10),
        Item::SteelArrows => arrows(20, "A bundle of steel arrows.", 15),
        Item::MithrilArrows => arrows(50, "A bundle of mithril arrows.", 22),

        // ---- Crafting ----
        Item::Cowhide => plain(50, "The unprocessed hide of a cow."),
        Item::Leather => plain(55, "A piece of tanned leather."),
        Item::Needle => plain(1, "For sewing things."),
        Item::Thread => plain(1, "A spool of thread."),
        Item::LeatherGloves => armour(60, "Gloves made of soft leather.", Hands, 1),
        Item::LeatherBoots => armour(60, "Boots made of soft leather.", Feet, 1),
        Item::LeatherBody => armour(150, "A body made of soft leather.", Body, 8),
        Item::LeatherChaps => armour(100, "Chaps made of soft leather.", Legs, 4),

        // ---- Magic ----
        Item::Staff => ItemDef {
            magic_bonus: 4,
            ..weapon(20, "A basic magical staff.", 2)
        },
        Item::AirRune => plain(4, "A rune of air."),
        Item::MindRune => plain(3, "A rune of the mind."),
        Item::WaterRune => plain(4, "A rune of water."),
        Item::EarthRune => plain(4, "A rune of earth."),
        Item::FireRune => plain(4, "A rune of fire."),
        Item::CosmicRune => plain(100, "A rune of cosmic power."),

        // ---- Gems ----
        Item::UncutSapphire => plain(250, "A raw sapphire. It could be cut."),
        Item::UncutEmerald => plain(500, "A raw emerald. It could be cut."),
        Item::UncutRuby => plain(1000, "A raw ruby. It could be cut."),
        Item::UncutDiamond => plain(2000, "A raw diamond. It could be cut."),
        Item::Sapphire => plain(500, "A cut sapphire."),
        Item::Emerald => plain(1000, "A cut emerald."),
        Item::Ruby => plain(2000, "A cut ruby."),
        Item::Diamond => plain(4000, "A cut diamond."),

        // ---- Jewelry ----
        Item::GoldRing => ring(150, "A simple gold ring.", 0),
        Item::SapphireRing => ring(750, "A ring with a sapphire.", 1),
        Item::EmeraldRing => ring(1250, "A ring with an emerald.", 2),
        Item::RubyRing => ring(2250, "A ring with a ruby.", 3),
        Item::DiamondRing => ring(4500, "A ring with a diamond.", 4),

        // ---- Other ----
        Item::Bones => ItemDef {
            prayer_xp: Some(fixed(45, 1)), // 4.5
            ..plain(10, "How very human.")
        },
        Item::Tinderbox => plain(1, "Useful for lighting fires."),
        Item::GoldPiece => plain(1, "Lovely money!"),
    }
}

/// Uncut gems that mining can turn up.
pub const GEMS: [Item; 4] = [
    Item::UncutSapphire,
    Item::UncutEmerald,
    Item::UncutRuby,
    Item::UncutDiamond,
];

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn axes_speed_up_woodcutting() {
        let def = item_def(Item::MithrilAxe);
        assert_eq!(def.slot, Some(EquipmentSlot::Weapon));
        assert_eq!(def.attack_bonus, 7);
        assert_eq!(
            def.speed_bonus,
            Some(SpeedBonus {
                skill: Skill::Woodcutting,
                fraction: dec!(0.20),
            })
        );
    }

    #[test]
    fn fixed_point_constants() {
        const BONES_XP: Decimal = fixed(45, 1);
        assert_eq!(BONES_XP, dec!(4.5));
        assert_eq!(fixed(85, 2), dec!(0.85));
        assert_eq!(fixed(350, 0), dec!(350));
        assert_eq!(fixed(0, 2), Decimal::ZERO);
    }

    #[test]
    fn only_bows_are_ranged_weapons() {
        assert!(item_def(Item::OakShortbow).is_ranged_weapon());
        assert!(!item_def(Item::Staff).is_ranged_weapon());
        assert!(!item_def(Item::BronzeArrows).is_ranged_weapon());
    }

    #[test]
    fn food_and_bones() {
        assert_eq!(item_def(Item::CookedLobster).heal_amount, Some(12));
        assert_eq!(item_def(Item::Bones).prayer_xp, Some(dec!(4.5)));
        assert_eq!(item_def(Item::Logs).heal_amount, None);
    }

    #[test]
    fn every_item_has_examine_text_and_value() {
        for item in Item::ALL {
            let def = item_def(*item);
            assert!(!def.examine.is_empty(), "{item} has no examine text");
            assert!(def.value > 0, "{item} has no value");
        }
    }
}
