//! Hit points and prayer: eating, burying, prayer toggles and drain, and
//! soft-death recovery.

use rust_decimal::Decimal;
use simplescape_types::{GameState, Item, Prayer, Skill};
use simplescape_world::{item_def, prayer_def};

use crate::actions::validation::{Rejection, require_held};
use crate::config::GameRules;
use crate::error::{ActionError, ActionResult};
use crate::inventory;
use crate::skills;
use crate::state::go_idle;

/// Hit points restored by a soft death: half the maximum, at least 1.
pub fn recovery_hp(hitpoints_level: u32) -> u32 {
    skills::pool_for_level(hitpoints_level)
        .checked_div(2)
        .unwrap_or(0)
        .max(1)
}

/// Recover from 0 hit points without losing items.
///
/// Restores [`recovery_hp`], switches off every prayer, and returns to idle.
pub fn recover(state: &mut GameState) {
    let level = skills::level(&state.player, Skill::Hitpoints);
    state.player.hp = recovery_hp(level);
    state.player.active_prayers.clear();
    go_idle(state);
}

/// Eat one unit of food.
pub fn eat(state: &mut GameState, food: Item) -> ActionResult {
    require_held(&state.player.inventory, food)?;
    let heal = item_def(food).heal_amount.ok_or(Rejection::NotFood)?;

    let max_hp = skills::max_hp(&state.player);
    if state.player.hp >= max_hp {
        return Err(Rejection::FullHealth.into());
    }

    let new_hp = state.player.hp.saturating_add(heal).min(max_hp);
    let healed = new_hp.saturating_sub(state.player.hp);
    state.player.hp = new_hp;
    inventory::remove_item(&mut state.player.inventory, food, 1);
    state.log.push(format!(
        "You eat the {} and heal {healed} HP.",
        food.lowercase()
    ));
    Ok(())
}

/// Bury one unit of bones for Prayer experience.
pub fn bury(state: &mut GameState, bones: Item) -> ActionResult {
    require_held(&state.player.inventory, bones)?;
    let prayer_xp = item_def(bones).prayer_xp.ok_or(Rejection::NotBones)?;

    inventory::remove_item(&mut state.player.inventory, bones, 1);
    skills::grant_xp(&mut state.player, Skill::Prayer, prayer_xp)?;
    skills::sync_prayer_pool(&mut state.player);
    state.log.push(String::from("You bury the bones."));
    Ok(())
}

/// Switch a prayer on or off.
///
/// Switching on needs the level and a non-empty pool; switching off always
/// succeeds.
pub fn toggle_prayer(state: &mut GameState, prayer: Prayer) -> ActionResult {
    let def = prayer_def(prayer);
    if skills::level(&state.player, Skill::Prayer) < def.level_req {
        return Err(Rejection::PrayerLevel {
            level: def.level_req,
            prayer,
        }
        .into());
    }

    if state.player.active_prayers.remove(&prayer) {
        state.log.push(format!("You deactivate {prayer}."));
        return Ok(());
    }

    if state.player.prayer_points <= Decimal::ZERO {
        return Err(Rejection::NoPrayerPoints.into());
    }
    state.player.active_prayers.insert(prayer);
    state.log.push(format!("You activate {prayer}."));
    Ok(())
}

/// Drain the prayer pool by one prayer tick.
///
/// Each active prayer drains `drain_per_minute * prayer_tick_ms / 60000`.
/// An empty pool switches every prayer off.
pub fn prayer_tick(state: &mut GameState, rules: &GameRules) -> ActionResult {
    if state.player.active_prayers.is_empty() {
        return Err(ActionError::Ignored);
    }

    let per_minute = state
        .player
        .active_prayers
        .iter()
        .map(|prayer| prayer_def(*prayer).drain_per_minute)
        .fold(Decimal::ZERO, Decimal::saturating_add);
    let drain = per_minute.saturating_mul(rules.prayer_tick_fraction());
    let remaining = state.player.prayer_points.saturating_sub(drain);

    if remaining <= Decimal::ZERO {
        state.player.prayer_points = Decimal::ZERO;
        state.player.active_prayers.clear();
        state
            .log
            .push(String::from("You have run out of prayer points."));
    } else {
        state.player.prayer_points = remaining;
    }
    Ok(())
}
