//! Save documents: encoding, decoding, and startup rehydration.
//!
//! A save is two JSON documents, the player and the shop stock, stored
//! under separate keys. Decoding is lenient about age: fields added after
//! a save was written take their defaults, and skills the save predates
//! start at zero. It is strict about shape and content: a player document
//! without a skills map and an inventory list, or one whose collections or
//! counters break the rules live state keeps, is rejected as invalid.
//!
//! The [`SnapshotError`] display strings are the log lines the player
//! sees when a load fails.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde_json::Value;
use simplescape_player::{GameRules, inventory, skills};
use simplescape_types::{Activity, GameState, ItemStack, Player, SaveSnapshot, Skill};
use simplescape_world::{STARTER_TOOLS, WELCOME_BACK_MESSAGE, general_store_stock, prayer_def};
use tracing::debug;

/// Why a save could not be turned back into state.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// Nothing is stored under the player key.
    #[error("No saved data found.")]
    Missing,

    /// The document parsed but lacks required fields or breaks a state
    /// invariant.
    #[error("Saved data appears to be invalid.")]
    Invalid {
        /// What was wrong, for diagnostics.
        reason: String,
    },

    /// A document is not valid JSON or does not fit the save schema.
    #[error("Failed to load data. It might be corrupted.")]
    Corrupted {
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The current state could not be serialized.
    #[error("failed to encode save: {source}")]
    Encode {
        /// The underlying serialization error.
        #[source]
        source: serde_json::Error,
    },
}

impl SnapshotError {
    fn corrupted(source: serde_json::Error) -> Self {
        Self::Corrupted { source }
    }

    fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid {
            reason: reason.into(),
        }
    }
}

/// The two serialized save documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedSave {
    /// Player document.
    pub player: String,
    /// Shop stock document.
    pub shop: String,
}

/// Serialize a snapshot into its two documents.
pub fn encode(snapshot: &SaveSnapshot) -> Result<EncodedSave, SnapshotError> {
    let to_error = |source| SnapshotError::Encode { source };
    Ok(EncodedSave {
        player: serde_json::to_string(&snapshot.player).map_err(to_error)?,
        shop: serde_json::to_string(&snapshot.shop_stock).map_err(to_error)?,
    })
}

/// Decode a player document.
///
/// Skills missing from the save are added with zero experience. The result
/// is checked with [`check_player`] against `rules`.
pub fn decode_player(document: Option<&str>, rules: &GameRules) -> Result<Player, SnapshotError> {
    let document = document.ok_or(SnapshotError::Missing)?;
    let value: Value = serde_json::from_str(document).map_err(SnapshotError::corrupted)?;

    let has_skills = value.get("skills").is_some_and(Value::is_object);
    let has_inventory = value.get("inventory").is_some_and(Value::is_array);
    if !has_skills {
        return Err(SnapshotError::invalid("player has no skills map"));
    }
    if !has_inventory {
        return Err(SnapshotError::invalid("player has no inventory list"));
    }

    let mut player: Player = serde_json::from_value(value).map_err(SnapshotError::corrupted)?;
    for skill in Skill::ALL {
        player.skills.entry(skill).or_default();
    }
    check_player(&player, rules)?;
    Ok(player)
}

/// Decode a shop stock document. No document means the opening stock.
pub fn decode_shop(document: Option<&str>) -> Result<Vec<ItemStack>, SnapshotError> {
    let Some(text) = document else {
        return Ok(general_store_stock());
    };
    let stock: Vec<ItemStack> = serde_json::from_str(text).map_err(SnapshotError::corrupted)?;
    check_stacks("shop", &stock, None)?;
    Ok(stock)
}

/// Decode both documents into a snapshot ready for
/// [`Command::LoadGame`](simplescape_types::Command::LoadGame).
pub fn decode(
    player: Option<&str>,
    shop: Option<&str>,
    rules: &GameRules,
) -> Result<SaveSnapshot, SnapshotError> {
    Ok(SaveSnapshot {
        player: decode_player(player, rules)?,
        shop_stock: decode_shop(shop)?,
    })
}

/// Check a decoded player against the invariants live state relies on.
///
/// - Inventory and bank hold at most one stack per item, every stack is
///   non-empty, and neither exceeds its slot count.
/// - The prayer pool is not negative.
/// - Every active prayer is unlocked at the player's Prayer level.
/// - A slayer task never has more kills remaining than were assigned.
pub fn check_player(player: &Player, rules: &GameRules) -> Result<(), SnapshotError> {
    check_stacks("inventory", &player.inventory, Some(rules.inventory_slots))?;
    check_stacks("bank", &player.bank, Some(rules.bank_slots))?;

    if player.prayer_points < Decimal::ZERO || player.max_prayer_points < Decimal::ZERO {
        return Err(SnapshotError::invalid("negative prayer points"));
    }

    let prayer_level = skills::level(player, Skill::Prayer);
    if let Some(prayer) = player
        .active_prayers
        .iter()
        .find(|prayer| prayer_def(**prayer).level_req > prayer_level)
    {
        return Err(SnapshotError::invalid(format!(
            "{prayer:?} is active below its level requirement"
        )));
    }

    if player
        .slayer_task
        .is_some_and(|task| task.remaining > task.initial_amount)
    {
        return Err(SnapshotError::invalid(
            "slayer task has more kills remaining than assigned",
        ));
    }
    Ok(())
}

fn check_stacks(
    collection: &str,
    stacks: &[ItemStack],
    capacity: Option<usize>,
) -> Result<(), SnapshotError> {
    if let Some(capacity) = capacity.filter(|capacity| stacks.len() > *capacity) {
        return Err(SnapshotError::invalid(format!(
            "{collection} holds {} stacks, limit is {capacity}",
            stacks.len()
        )));
    }

    let mut seen = BTreeSet::new();
    for stack in stacks {
        if stack.quantity == 0 {
            return Err(SnapshotError::invalid(format!(
                "{collection} has an empty {} stack",
                stack.item
            )));
        }
        if !seen.insert(stack.item) {
            return Err(SnapshotError::invalid(format!(
                "{collection} has two {} stacks",
                stack.item
            )));
        }
    }
    Ok(())
}

/// Build the opening state of a session from a decoded save.
///
/// Starter tools the player holds in neither inventory nor bank are given
/// back while inventory space allows, and the log starts with the
/// welcome-back line.
pub fn rehydrate(snapshot: SaveSnapshot, rules: &GameRules) -> GameState {
    let SaveSnapshot {
        mut player,
        shop_stock,
    } = snapshot;

    for tool in STARTER_TOOLS {
        let owned = inventory::has_item(&player.inventory, tool, 1)
            || inventory::has_item(&player.bank, tool, 1);
        if owned {
            continue;
        }
        match inventory::add_item(&mut player.inventory, Some(rules.inventory_slots), tool, 1) {
            Ok(()) => debug!(item = %tool, "Restored starter tool"),
            Err(err) => debug!(item = %tool, error = %err, "No room to restore starter tool"),
        }
    }

    GameState {
        activity: Activity::Idle,
        current_resource_key: None,
        log: vec![WELCOME_BACK_MESSAGE.to_owned()],
        player,
        shop_stock,
        monster: None,
    }
}
