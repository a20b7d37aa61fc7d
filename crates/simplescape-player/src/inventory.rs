//! Slot-capacity stacking collections.
//!
//! Inventory, bank, and shop stock are all ordered lists of [`ItemStack`]s.
//! A collection never holds two stacks of the same item and never keeps an
//! empty stack. Capacity counts distinct stacks, not units; quantities are
//! only bounded by `u32`.

use simplescape_types::{Item, ItemStack};

use crate::error::{PlayerError, overflow};

/// Units of `item` held, or 0.
pub fn quantity_of(collection: &[ItemStack], item: Item) -> u32 {
    collection
        .iter()
        .find(|stack| stack.item == item)
        .map_or(0, |stack| stack.quantity)
}

/// Whether at least `quantity` units of `item` are held.
pub fn has_item(collection: &[ItemStack], item: Item, quantity: u32) -> bool {
    quantity_of(collection, item) >= quantity
}

/// Whether `item` could be added without needing a new slot beyond
/// `capacity`.
pub fn has_room_for(collection: &[ItemStack], capacity: Option<usize>, item: Item) -> bool {
    collection.iter().any(|stack| stack.item == item)
        || capacity.is_none_or(|cap| collection.len() < cap)
}

/// Add `quantity` units of `item`.
///
/// Stacks onto an existing stack of the same item; otherwise opens a new
/// stack if the collection is under `capacity` (`None` means uncapped).
/// Fails without mutation when a new stack is needed and none fits.
/// Adding zero units is a no-op.
pub fn add_item(
    collection: &mut Vec<ItemStack>,
    capacity: Option<usize>,
    item: Item,
    quantity: u32,
) -> Result<(), PlayerError> {
    if quantity == 0 {
        return Ok(());
    }

    if let Some(stack) = collection.iter_mut().find(|stack| stack.item == item) {
        stack.quantity = stack
            .quantity
            .checked_add(quantity)
            .ok_or_else(|| overflow("stack quantity in add_item"))?;
        return Ok(());
    }

    if let Some(cap) = capacity {
        if collection.len() >= cap {
            return Err(PlayerError::CollectionFull {
                item,
                capacity: cap,
            });
        }
    }

    collection.push(ItemStack::new(item, quantity));
    Ok(())
}

/// Remove up to `quantity` units of `item`.
///
/// Saturates at the held amount and deletes the stack once it reaches
/// zero. Callers check availability first.
pub fn remove_item(collection: &mut Vec<ItemStack>, item: Item, quantity: u32) {
    if let Some(stack) = collection.iter_mut().find(|stack| stack.item == item) {
        stack.quantity = stack.quantity.saturating_sub(quantity);
    }
    collection.retain(|stack| stack.quantity > 0);
}

/// Remove the whole stack of `item`, returning how many units it held.
pub fn take_stack(collection: &mut Vec<ItemStack>, item: Item) -> u32 {
    let held = quantity_of(collection, item);
    collection.retain(|stack| stack.item != item);
    held
}
