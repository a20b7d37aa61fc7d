//! General store trading and banking.
//!
//! Purchases and sales clamp the requested quantity to what is available.
//! Banking moves whole or partial stacks between the capped inventory and
//! the capped bank; the shop's stock is uncapped.

use simplescape_types::{GameState, Item, TradeRequest, TransferAmount, TransferRequest};
use simplescape_world::item_def;

use crate::actions::validation::{Rejection, require_held};
use crate::config::GameRules;
use crate::error::{ActionError, ActionResult, PlayerError, overflow};
use crate::inventory;

/// Turn a full collection into the rejection the player sees.
fn full_as(rejection: Rejection) -> impl FnOnce(PlayerError) -> ActionError {
    move |err| match err {
        PlayerError::CollectionFull { .. } => ActionError::from(rejection),
        other @ PlayerError::ArithmeticOverflow { .. } => ActionError::from(other),
    }
}

// ---------------------------------------------------------------------------
// Shop
// ---------------------------------------------------------------------------

/// Price the shop pays for one unit of `item`.
pub fn sell_price(item: Item, rules: &GameRules) -> Result<u32, PlayerError> {
    item_def(item)
        .value
        .checked_mul(rules.sell_price_pct)
        .and_then(|scaled| scaled.checked_div(100))
        .ok_or_else(|| overflow("sell price"))
}

/// Buy up to `request.quantity` units from the general store.
pub fn buy(state: &mut GameState, request: TradeRequest, rules: &GameRules) -> ActionResult {
    let item = request.item_name;
    let stock = inventory::quantity_of(&state.shop_stock, item);
    if stock == 0 {
        return Err(Rejection::NotInStock { item }.into());
    }
    let amount = request.quantity.min(stock);
    if amount == 0 {
        return Err(ActionError::Ignored);
    }

    let cost = item_def(item)
        .value
        .checked_mul(amount)
        .ok_or_else(|| overflow("purchase cost"))?;
    if !inventory::has_item(&state.player.inventory, Item::CURRENCY, cost) {
        return Err(Rejection::NotEnoughGold.into());
    }

    // Paying first frees the gold slot when the purchase spends it all.
    let player = &mut state.player;
    inventory::remove_item(&mut player.inventory, Item::CURRENCY, cost);
    inventory::add_item(&mut player.inventory, Some(rules.inventory_slots), item, amount)
        .map_err(full_as(Rejection::NoInventorySpace))?;
    inventory::remove_item(&mut state.shop_stock, item, amount);
    Ok(())
}

/// Sell up to `request.quantity` units to the general store.
pub fn sell(state: &mut GameState, request: TradeRequest, rules: &GameRules) -> ActionResult {
    let item = request.item_name;
    if item == Item::CURRENCY || item_def(item).value == 0 {
        return Err(Rejection::CannotSell.into());
    }
    let held = require_held(&state.player.inventory, item)?;
    let amount = request.quantity.min(held);
    if amount == 0 {
        return Err(ActionError::Ignored);
    }

    let price = sell_price(item, rules)?
        .checked_mul(amount)
        .ok_or_else(|| overflow("sale price"))?;

    let player = &mut state.player;
    inventory::remove_item(&mut player.inventory, item, amount);
    inventory::add_item(
        &mut player.inventory,
        Some(rules.inventory_slots),
        Item::CURRENCY,
        price,
    )
    .map_err(full_as(Rejection::NoInventorySpace))?;
    inventory::add_item(&mut state.shop_stock, None, item, amount)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Bank
// ---------------------------------------------------------------------------

fn resolve_amount(amount: TransferAmount, held: u32) -> u32 {
    match amount {
        TransferAmount::All => held,
        TransferAmount::Count(count) => count.min(held),
    }
}

/// Move units of one item from the inventory to the bank.
pub fn deposit(state: &mut GameState, request: TransferRequest, rules: &GameRules) -> ActionResult {
    let item = request.item_name;
    let held = require_held(&state.player.inventory, item)?;
    let amount = resolve_amount(request.quantity, held);
    if amount == 0 {
        return Err(ActionError::Ignored);
    }

    let player = &mut state.player;
    inventory::add_item(&mut player.bank, Some(rules.bank_slots), item, amount)
        .map_err(full_as(Rejection::BankFull))?;
    inventory::remove_item(&mut player.inventory, item, amount);
    Ok(())
}

/// Move units of one item from the bank to the inventory.
pub fn withdraw(state: &mut GameState, request: TransferRequest, rules: &GameRules) -> ActionResult {
    let item = request.item_name;
    let banked = inventory::quantity_of(&state.player.bank, item);
    if banked == 0 {
        return Err(Rejection::NotInBank { item }.into());
    }
    let amount = resolve_amount(request.quantity, banked);
    if amount == 0 {
        return Err(ActionError::Ignored);
    }

    let player = &mut state.player;
    inventory::add_item(
        &mut player.inventory,
        Some(rules.inventory_slots),
        item,
        amount,
    )
    .map_err(full_as(Rejection::InventoryFull))?;
    inventory::remove_item(&mut player.bank, item, amount);
    Ok(())
}

/// Move every inventory stack to the bank, in inventory order.
///
/// Stops at the first stack the bank cannot take; the rest stay carried.
pub fn deposit_all(state: &mut GameState, rules: &GameRules) -> ActionResult {
    if state.player.inventory.is_empty() {
        return Err(Rejection::NothingToDeposit.into());
    }

    let player = &mut state.player;
    let stacks = std::mem::take(&mut player.inventory);
    let mut remaining = stacks.into_iter();
    let mut bank_full = false;
    for stack in remaining.by_ref() {
        match inventory::add_item(&mut player.bank, Some(rules.bank_slots), stack.item, stack.quantity) {
            Ok(()) => {}
            Err(PlayerError::CollectionFull { .. }) => {
                player.inventory.push(stack);
                bank_full = true;
                break;
            }
            Err(other) => return Err(other.into()),
        }
    }
    player.inventory.extend(remaining);

    if bank_full {
        state.log.push(String::from("Your bank is full."));
    }
    Ok(())
}
