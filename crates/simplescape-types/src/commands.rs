//! Commands accepted by the reducer.
//!
//! A [`Command`] is an adjacently tagged union (`{"type": "BUY_ITEM",
//! "payload": {...}}`), the same shape the presentation layer has always
//! sent. Dispatch is an exhaustive `match` on the variant.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ts_rs::TS;

use crate::enums::{Activity, EquipmentSlot, MonsterKey, Prayer, QuestId};
use crate::items::Item;
use crate::structs::SaveSnapshot;

/// Request to begin an activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct ActivityRequest {
    /// Activity to start.
    pub activity: Activity,
    /// Monster to fight, for combat.
    #[serde(default)]
    pub monster_key: Option<MonsterKey>,
    /// Recipe, spot, spell, or target key, for keyed activities.
    #[serde(default)]
    pub resource_key: Option<String>,
}

/// A shop purchase or sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct TradeRequest {
    /// Item traded.
    pub item_name: Item,
    /// Units requested. Clamped to what is available.
    pub quantity: u32,
}

/// How much of a stack to move between inventory and bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferAmount {
    /// At most this many units.
    Count(u32),
    /// The whole stack.
    All,
}

impl Serialize for TransferAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Count(count) => serializer.serialize_u32(*count),
            Self::All => serializer.serialize_str("all"),
        }
    }
}

impl<'de> Deserialize<'de> for TransferAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Count(u32),
            Keyword(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Count(count) => Ok(Self::Count(count)),
            Raw::Keyword(word) if word == "all" => Ok(Self::All),
            Raw::Keyword(word) => Err(serde::de::Error::custom(format!(
                "expected a count or \"all\", got {word:?}"
            ))),
        }
    }
}

/// A bank deposit or withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct TransferRequest {
    /// Item moved.
    pub item_name: Item,
    /// Units moved.
    #[ts(type = "number | \"all\"")]
    pub quantity: TransferAmount,
}

/// Every command the reducer understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "bindings/")]
pub enum Command {
    /// Begin an activity. Ignored unless idle.
    StartActivity(ActivityRequest),
    /// Return to idle and drop any encounter.
    StopActivity,
    /// Advance the current activity by one step.
    GameTick,
    /// Drain the prayer pool by one prayer interval.
    PrayerTick,
    /// Eat one unit of food.
    EatFood(Item),
    /// Bury one unit of bones.
    BuryBones(Item),
    /// Switch a prayer on or off.
    TogglePrayer(Prayer),
    /// Drop a whole inventory stack.
    DropItem(Item),
    /// Log an item's examine text.
    ExamineItem(Item),
    /// Wear an item from the inventory.
    EquipItem(Item),
    /// Return a worn item to the inventory.
    UnequipItem(EquipmentSlot),
    /// Cast a combat spell at the current encounter.
    CastSpell(String),
    /// Accept a quest.
    StartQuest(QuestId),
    /// Hand in a quest's objective items.
    AdvanceQuest(QuestId),
    /// Ask the slayer master for an assignment.
    GetSlayerTask,
    /// Buy from the general store.
    BuyItem(TradeRequest),
    /// Sell to the general store.
    SellItem(TradeRequest),
    /// Move a stack into the bank.
    DepositItem(TransferRequest),
    /// Move a stack out of the bank.
    WithdrawItem(TransferRequest),
    /// Move every inventory stack into the bank.
    DepositAllInventory,
    /// Replace the player and shop with a saved snapshot.
    LoadGame(Box<SaveSnapshot>),
    /// Append a line to the log.
    AddLog(String),
}

impl Command {
    /// Short variant name for tracing fields.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::StartActivity(_) => "start_activity",
            Self::StopActivity => "stop_activity",
            Self::GameTick => "game_tick",
            Self::PrayerTick => "prayer_tick",
            Self::EatFood(_) => "eat_food",
            Self::BuryBones(_) => "bury_bones",
            Self::TogglePrayer(_) => "toggle_prayer",
            Self::DropItem(_) => "drop_item",
            Self::ExamineItem(_) => "examine_item",
            Self::EquipItem(_) => "equip_item",
            Self::UnequipItem(_) => "unequip_item",
            Self::CastSpell(_) => "cast_spell",
            Self::StartQuest(_) => "start_quest",
            Self::AdvanceQuest(_) => "advance_quest",
            Self::GetSlayerTask => "get_slayer_task",
            Self::BuyItem(_) => "buy_item",
            Self::SellItem(_) => "sell_item",
            Self::DepositItem(_) => "deposit_item",
            Self::WithdrawItem(_) => "withdraw_item",
            Self::DepositAllInventory => "deposit_all_inventory",
            Self::LoadGame(_) => "load_game",
            Self::AddLog(_) => "add_log",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn unit_commands_need_no_payload() {
        let cmd: Command = serde_json::from_str(r#"{"type":"GAME_TICK"}"#).unwrap();
        assert_eq!(cmd, Command::GameTick);
    }

    #[test]
    fn start_activity_payload() {
        let json = r#"{"type":"START_ACTIVITY","payload":{"activity":"woodcutting","resourceKey":"oak"}}"#;
        let cmd: Command = serde_json::from_str(json).unwrap();
        assert_eq!(
            cmd,
            Command::StartActivity(ActivityRequest {
                activity: Activity::Woodcutting,
                monster_key: None,
                resource_key: Some(String::from("oak")),
            })
        );
    }

    #[test]
    fn transfer_amount_accepts_all_or_count() {
        let json = r#"{"type":"DEPOSIT_ITEM","payload":{"itemName":"Logs","quantity":"all"}}"#;
        let cmd: Command = serde_json::from_str(json).unwrap();
        assert_eq!(
            cmd,
            Command::DepositItem(TransferRequest {
                item_name: Item::Logs,
                quantity: TransferAmount::All,
            })
        );

        let json = r#"{"type":"WITHDRAW_ITEM","payload":{"itemName":"Coal","quantity":5}}"#;
        let cmd: Command = serde_json::from_str(json).unwrap();
        assert_eq!(
            cmd,
            Command::WithdrawItem(TransferRequest {
                item_name: Item::Coal,
                quantity: TransferAmount::Count(5),
            })
        );
    }

    #[test]
    fn transfer_amount_rejects_other_words() {
        let json = r#"{"itemName":"Logs","quantity":"some"}"#;
        assert!(serde_json::from_str::<TransferRequest>(json).is_err());
    }

    #[test]
    fn commands_serialize_with_type_tag() {
        let json = serde_json::to_value(Command::EatFood(Item::Cake)).unwrap();
        assert_eq!(json["type"], "EAT_FOOD");
        assert_eq!(json["payload"], "Cake");
        assert_eq!(Command::EatFood(Item::Cake).kind(), "eat_food");
    }
}
