//! Worn equipment: equipping, unequipping, and the bonuses gear provides.

use rust_decimal::Decimal;
use simplescape_types::{EquipmentSlot, GameState, Item, Player, Skill};
use simplescape_world::item_def;

use crate::actions::validation::{Rejection, require_held};
use crate::config::GameRules;
use crate::error::{ActionError, ActionResult, PlayerError};
use crate::inventory;

/// The item in the weapon slot.
pub fn weapon(player: &Player) -> Option<Item> {
    player.equipment.get(&EquipmentSlot::Weapon).copied()
}

/// Sum of the defence bonuses of everything worn.
pub fn defence_bonus(player: &Player) -> u32 {
    player
        .equipment
        .values()
        .map(|item| item_def(*item).defence_bonus)
        .fold(0, u32::saturating_add)
}

/// Speed bonus the equipped weapon grants to `skill`, as a fraction.
pub fn speed_bonus(player: &Player, skill: Skill) -> Option<Decimal> {
    weapon(player)
        .and_then(|item| item_def(item).speed_bonus)
        .filter(|bonus| bonus.skill == skill)
        .map(|bonus| bonus.fraction)
}

/// Wear one unit of `item`, returning whatever occupied its slot to the
/// inventory.
pub fn equip(state: &mut GameState, item: Item, rules: &GameRules) -> ActionResult {
    require_held(&state.player.inventory, item)?;
    let slot = item_def(item).slot.ok_or(Rejection::NotWearable)?;

    let player = &mut state.player;
    inventory::remove_item(&mut player.inventory, item, 1);
    if let Some(current) = player.equipment.get(&slot).copied() {
        inventory::add_item(
            &mut player.inventory,
            Some(rules.inventory_slots),
            current,
            1,
        )
        .map_err(|err| match err {
            PlayerError::CollectionFull { .. } => ActionError::from(Rejection::NoRoomToSwap),
            other @ PlayerError::ArithmeticOverflow { .. } => ActionError::from(other),
        })?;
    }
    player.equipment.insert(slot, item);
    state.log.push(format!("You equip the {item}."));
    Ok(())
}

/// Move the item in `slot` back to the inventory.
pub fn unequip(state: &mut GameState, slot: EquipmentSlot, rules: &GameRules) -> ActionResult {
    let player = &mut state.player;
    let item = player
        .equipment
        .get(&slot)
        .copied()
        .ok_or(Rejection::NothingEquipped)?;

    inventory::add_item(&mut player.inventory, Some(rules.inventory_slots), item, 1).map_err(
        |err| match err {
            PlayerError::CollectionFull { .. } => ActionError::from(Rejection::NoRoomToUnequip),
            other @ PlayerError::ArithmeticOverflow { .. } => ActionError::from(other),
        },
    )?;
    player.equipment.remove(&slot);
    state.log.push(format!("You unequip the {item}."));
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use simplescape_types::ItemStack;

    use crate::state::new_game;

    fn fill_inventory(state: &mut GameState, slots: usize) {
        let fillers = Item::ALL
            .iter()
            .filter(|item| item_def(**item).slot.is_none())
            .filter(|item| !inventory::has_item(&state.player.inventory, **item, 1))
            .copied()
            .collect::<Vec<_>>();
        for item in fillers {
            if state.player.inventory.len() >= slots {
                break;
            }
            state.player.inventory.push(ItemStack::new(item, 1));
        }
    }

    #[test]
    fn equip_moves_item_to_slot() {
        let rules = GameRules::default();
        let mut state = new_game();
        equip(&mut state, Item::BronzeAxe, &rules).unwrap();
        assert_eq!(weapon(&state.player), Some(Item::BronzeAxe));
        assert!(!inventory::has_item(&state.player.inventory, Item::BronzeAxe, 1));
        assert_eq!(
            state.log.last().map(String::as_str),
            Some("You equip the Bronze Axe.")
        );
        assert_eq!(speed_bonus(&state.player, Skill::Woodcutting), Some(dec!(0.05)));
        assert_eq!(speed_bonus(&state.player, Skill::Mining), None);
    }

    #[test]
    fn equip_swaps_with_current_item() {
        let rules = GameRules::default();
        let mut state = new_game();
        state.player.inventory.push(ItemStack::new(Item::BronzeDagger, 1));
        equip(&mut state, Item::BronzeAxe, &rules).unwrap();
        equip(&mut state, Item::BronzeDagger, &rules).unwrap();
        assert_eq!(weapon(&state.player), Some(Item::BronzeDagger));
        assert!(inventory::has_item(&state.player.inventory, Item::BronzeAxe, 1));
    }

    #[test]
    fn swap_needs_room() {
        let rules = GameRules::default();
        let mut state = new_game();
        state.player.inventory.push(ItemStack::new(Item::BronzeDagger, 2));
        equip(&mut state, Item::BronzeAxe, &rules).unwrap();
        fill_inventory(&mut state, 28);
        assert_eq!(
            equip(&mut state, Item::BronzeDagger, &rules),
            Err(Rejection::NoRoomToSwap.into())
        );
    }

    #[test]
    fn unequip_returns_item() {
        let rules = GameRules::default();
        let mut state = new_game();
        state.player.inventory.push(ItemStack::new(Item::BronzePlatebody, 1));
        equip(&mut state, Item::BronzePlatebody, &rules).unwrap();
        assert_eq!(defence_bonus(&state.player), 10);
        unequip(&mut state, EquipmentSlot::Body, &rules).unwrap();
        assert_eq!(defence_bonus(&state.player), 0);
        assert_eq!(
            state.log.last().map(String::as_str),
            Some("You unequip the Bronze Platebody.")
        );
        assert_eq!(
            unequip(&mut state, EquipmentSlot::Body, &rules),
            Err(Rejection::NothingEquipped.into())
        );
    }

    #[test]
    fn unequip_needs_room() {
        let rules = GameRules::default();
        let mut state = new_game();
        equip(&mut state, Item::BronzeAxe, &rules).unwrap();
        fill_inventory(&mut state, 28);
        assert_eq!(
            unequip(&mut state, EquipmentSlot::Weapon, &rules),
            Err(Rejection::NoRoomToUnequip.into())
        );
        assert_eq!(weapon(&state.player), Some(Item::BronzeAxe));
    }

    #[test]
    fn cannot_wear_logs() {
        let rules = GameRules::default();
        let mut state = new_game();
        state.player.inventory.push(ItemStack::new(Item::Logs, 1));
        assert_eq!(
            equip(&mut state, Item::Logs, &rules),
            Err(Rejection::NotWearable.into())
        );
    }
}
