//! Quest definitions.

use rust_decimal::Decimal;
use simplescape_types::{Item, QuestId, Skill};

use crate::catalog::fixed;
use crate::recipes::Ingredient;

/// Static definition of a quest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestDef {
    /// Display name.
    pub name: &'static str,
    /// Journal text.
    pub description: &'static str,
    /// Quest giver.
    pub npc: &'static str,
    /// Items handed in to finish the quest. Consumed on completion.
    pub objective: &'static [Ingredient],
    /// Experience granted on completion.
    pub reward_xp: &'static [(Skill, Decimal)],
    /// Items granted on completion.
    pub reward_items: &'static [Ingredient],
}

static COOKS_EMERGENCY: QuestDef = QuestDef {
    name: "Cook's Emergency",
    description: "The local Cook is in a panic. He needs some ingredients for a special meal and has asked for your help.",
    npc: "Cook",
    objective: &[
        Ingredient {
            item: Item::RawTrout,
            quantity: 1,
        },
        Ingredient {
            item: Item::Logs,
            quantity: 1,
        },
    ],
    reward_xp: &[(Skill::Cooking, fixed(350, 0))],
    reward_items: &[
        Ingredient {
            item: Item::CookedTrout,
            quantity: 5,
        },
        Ingredient {
            item: Item::GoldPiece,
            quantity: 250,
        },
    ],
};

/// Look up a quest.
pub const fn quest_def(quest: QuestId) -> &'static QuestDef {
    match quest {
        QuestId::CooksEmergency => &COOKS_EMERGENCY,
    }
}
