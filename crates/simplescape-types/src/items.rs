//! The closed set of items in the game.
//!
//! Items are a plain enum generated by [`define_items!`] so that every
//! collection, recipe, and loot table is checked at compile time. The wire
//! form is the item's display name, which is also what older saves hold.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Generates the [`Item`] enum with its display names and lookup helpers.
macro_rules! define_items {
    ( $( $variant:ident => $name:literal ),+ $(,)? ) => {
        /// An item that can be carried, banked, equipped, or traded.
        ///
        /// Serialized by display name (`"Bronze Axe"`).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export, export_to = "bindings/")]
        pub enum Item {
            $(
                #[doc = $name]
                #[serde(rename = $name)]
                $variant,
            )+
        }

        impl Item {
            /// Every item, in catalog order.
            pub const ALL: &'static [Self] = &[ $( Self::$variant ),+ ];

            /// Display name, as shown in log lines.
            pub const fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => $name ),+
                }
            }
        }
    };
}

define_items! {
    // Logs
    Logs => "Logs",
    OakLogs => "Oak Logs",
    MapleLogs => "Maple Logs",
    YewLogs => "Yew Logs",
    MagicLogs => "Magic Logs",
    // Ores
    Ore => "Ore",
    Coal => "Coal",
    TinOre => "Tin Ore",
    IronOre => "Iron Ore",
    MithrilOre => "Mithril Ore",
    GoldOre => "Gold Ore",
    // Fish
    RawFish => "Raw Fish",
    RawTrout => "Raw Trout",
    RawLobster => "Raw Lobster",
    RawSwordfish => "Raw Swordfish",
    CookedFish => "Cooked Fish",
    CookedTrout => "Cooked Trout",
    CookedLobster => "Cooked Lobster",
    CookedSwordfish => "Cooked Swordfish",
    BurntFish => "Burnt Fish",
    // Food
    Bread => "Bread",
    Cake => "Cake",
    // Bars
    BronzeBar => "Bronze Bar",
    IronBar => "Iron Bar",
    SteelBar => "Steel Bar",
    MithrilBar => "Mithril Bar",
    GoldBar => "Gold Bar",
    // Axes
    BronzeAxe => "Bronze Axe",
    IronAxe => "Iron Axe",
    SteelAxe => "Steel Axe",
    MithrilAxe => "Mithril Axe",
    AdamantAxe => "Adamant Axe",
    // Bronze
    BronzeDagger => "Bronze Dagger",
    BronzeFullHelm => "Bronze Full Helm",
    BronzePlatebody => "Bronze Platebody",
    BronzePlatelegs => "Bronze Platelegs",
    BronzeKiteshield => "Bronze Kiteshield",
    // Iron
    IronDagger => "Iron Dagger",
    IronFullHelm => "Iron Full Helm",
    IronPlatebody => "Iron Platebody",
    IronPlatelegs => "Iron Platelegs",
    IronKiteshield => "Iron Kiteshield",
    // Steel
    SteelDagger => "Steel Dagger",
    SteelFullHelm => "Steel Full Helm",
    SteelPlatebody => "Steel Platebody",
    SteelPlatelegs => "Steel Platelegs",
    SteelKiteshield => "Steel Kiteshield",
    // Mithril
    MithrilDagger => "Mithril Dagger",
    MithrilFullHelm => "Mithril Full Helm",
    MithrilPlatebody => "Mithril Platebody",
    MithrilPlatelegs => "Mithril Platelegs",
    MithrilKiteshield => "Mithril Kiteshield",
    // Fletching
    Flax => "Flax",
    Bowstring => "Bowstring",
    Feathers => "Feathers",
    ArrowShafts => "Arrow Shafts",
    ShortbowU => "Shortbow (u)",
    LongbowU => "Longbow (u)",
    OakShortbowU => "Oak Shortbow (u)",
    OakLongbowU => "Oak Longbow (u)",
    MapleShortbowU => "Maple Shortbow (u)",
    MapleLongbowU => "Maple Longbow (u)",
    Shortbow => "Shortbow",
    Longbow => "Longbow",
    OakShortbow => "Oak Shortbow",
    OakLongbow => "Oak Longbow",
    MapleShortbow => "Maple Shortbow",
    MapleLongbow => "Maple Longbow",
    BronzeArrowtips => "Bronze Arrowtips",
    IronArrowtips => "Iron Arrowtips",
    SteelArrowtips => "Steel Arrowtips",
    MithrilArrowtips => "Mithril Arrowtips",
    BronzeArrows => "Bronze Arrows",
    IronArrows => "Iron Arrows",
    SteelArrows => "Steel Arrows",
    MithrilArrows => "Mithril Arrows",
    // Crafting
    Cowhide => "Cowhide",
    Leather => "Leather",
    Needle => "Needle",
    Thread => "Thread",
    LeatherGloves => "Leather Gloves",
    LeatherBoots => "Leather Boots",
    LeatherBody => "Leather Body",
    LeatherChaps => "Leather Chaps",
    // Magic
    Staff => "Staff",
    AirRune => "Air Rune",
    MindRune => "Mind Rune",
    WaterRune => "Water Rune",
    EarthRune => "Earth Rune",
    FireRune => "Fire Rune",
    CosmicRune => "Cosmic Rune",
    // Gems
    UncutSapphire => "Uncut Sapphire",
    UncutEmerald => "Uncut Emerald",
    UncutRuby => "Uncut Ruby",
    UncutDiamond => "Uncut Diamond",
    Sapphire => "Sapphire",
    Emerald => "Emerald",
    Ruby => "Ruby",
    Diamond => "Diamond",
    // Jewelry
    GoldRing => "Gold Ring",
    SapphireRing => "Sapphire Ring",
    EmeraldRing => "Emerald Ring",
    RubyRing => "Ruby Ring",
    DiamondRing => "Diamond Ring",
    // Other
    Bones => "Bones",
    Tinderbox => "Tinderbox",
    GoldPiece => "Gold piece",
}

impl Item {
    /// The currency item.
    pub const CURRENCY: Self = Self::GoldPiece;

    /// Look up an item by its display name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|item| item.name() == name)
    }

    /// Lowercased display name, for log lines like "You get some logs.".
    pub fn lowercase(self) -> String {
        self.name().to_lowercase()
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn serializes_by_display_name() {
        let json = serde_json::to_string(&Item::ShortbowU).unwrap();
        assert_eq!(json, "\"Shortbow (u)\"");
        let back: Item = serde_json::from_str("\"Gold piece\"").unwrap();
        assert_eq!(back, Item::GoldPiece);
    }

    #[test]
    fn unknown_names_fail_to_parse() {
        assert!(serde_json::from_str::<Item>("\"Dragon Scimitar\"").is_err());
        assert_eq!(Item::from_name("Dragon Scimitar"), None);
    }

    #[test]
    fn from_name_round_trips_every_item() {
        for item in Item::ALL {
            assert_eq!(Item::from_name(item.name()), Some(*item));
        }
    }

    #[test]
    fn lowercase_name() {
        assert_eq!(Item::OakLogs.lowercase(), "oak logs");
    }
}
