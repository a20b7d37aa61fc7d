//! Quest progression: not started, in progress, completed.

use simplescape_types::{GameState, QuestId, QuestStatus};
use simplescape_world::quest_def;

use crate::actions::validation::{Rejection, has_ingredients};
use crate::config::GameRules;
use crate::error::ActionResult;
use crate::inventory;
use crate::skills;

fn status(state: &GameState, quest: QuestId) -> QuestStatus {
    state.player.quests.get(&quest).copied().unwrap_or_default()
}

/// Accept a quest that has not been started.
pub fn start(state: &mut GameState, quest: QuestId) -> ActionResult {
    let def = quest_def(quest);
    if status(state, quest) != QuestStatus::NotStarted {
        return Err(Rejection::QuestAlreadyStarted { quest: def.name }.into());
    }
    state.player.quests.insert(quest, QuestStatus::InProgress);
    state.log.push(format!("Quest Started: {}", def.name));
    Ok(())
}

/// Hand in the objective items of a quest in progress and collect the
/// rewards. Rewards that do not fit in the inventory are lost.
pub fn advance(state: &mut GameState, quest: QuestId, rules: &GameRules) -> ActionResult {
    let def = quest_def(quest);
    if status(state, quest) != QuestStatus::InProgress {
        return Err(Rejection::QuestNotInProgress { quest: def.name }.into());
    }
    if !has_ingredients(&state.player.inventory, def.objective) {
        return Err(Rejection::QuestItems.into());
    }

    state.log.push(format!("Quest Complete: {}!", def.name));
    let player = &mut state.player;
    for item in def.objective {
        inventory::remove_item(&mut player.inventory, item.item, item.quantity);
    }
    for reward in def.reward_items {
        let stored = inventory::add_item(
            &mut player.inventory,
            Some(rules.inventory_slots),
            reward.item,
            reward.quantity,
        )
        .is_ok();
        if !stored {
            state.log.push(String::from(
                "Your inventory was full, so a reward was dropped!",
            ));
        }
    }
    for (skill, xp) in def.reward_xp {
        skills::grant_xp(player, *skill, *xp)?;
    }
    player.quests.insert(quest, QuestStatus::Completed);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use simplescape_types::{Item, ItemStack, Skill};

    use crate::state::new_game;

    #[test]
    fn quest_lifecycle() {
        let rules = GameRules::default();
        let mut state = new_game();
        let quest = QuestId::CooksEmergency;

        assert_eq!(
            advance(&mut state, quest, &rules),
            Err(Rejection::QuestNotInProgress {
                quest: "Cook's Emergency"
            }
            .into())
        );
        start(&mut state, quest).unwrap();
        assert_eq!(
            state.log.last().map(String::as_str),
            Some("Quest Started: Cook's Emergency")
        );
        assert_eq!(
            start(&mut state, quest),
            Err(Rejection::QuestAlreadyStarted {
                quest: "Cook's Emergency"
            }
            .into())
        );
        assert_eq!(
            advance(&mut state, quest, &rules),
            Err(Rejection::QuestItems.into())
        );

        state.player.inventory.push(ItemStack::new(Item::RawTrout, 1));
        state.player.inventory.push(ItemStack::new(Item::Logs, 1));
        advance(&mut state, quest, &rules).unwrap();
        assert_eq!(state.player.quests.get(&quest), Some(&QuestStatus::Completed));
        assert_eq!(inventory::quantity_of(&state.player.inventory, Item::RawTrout), 0);
        assert_eq!(inventory::quantity_of(&state.player.inventory, Item::CookedTrout), 5);
        assert_eq!(inventory::quantity_of(&state.player.inventory, Item::GoldPiece), 750);
        assert_eq!(skills::xp(&state.player, Skill::Cooking), dec!(350));
        assert_eq!(
            start(&mut state, quest),
            Err(Rejection::QuestAlreadyStarted {
                quest: "Cook's Emergency"
            }
            .into())
        );
    }

    #[test]
    fn full_inventory_loses_reward() {
        let rules = GameRules {
            inventory_slots: 7,
            ..GameRules::default()
        };
        let mut state = new_game();
        start(&mut state, QuestId::CooksEmergency).unwrap();
        state.player.inventory.push(ItemStack::new(Item::RawTrout, 1));
        state.player.inventory.push(ItemStack::new(Item::Logs, 2));
        state.player.inventory.push(ItemStack::new(Item::Bread, 1));
        advance(&mut state, QuestId::CooksEmergency, &rules).unwrap();
        assert_eq!(inventory::quantity_of(&state.player.inventory, Item::CookedTrout), 0);
        assert_eq!(inventory::quantity_of(&state.player.inventory, Item::GoldPiece), 750);
        assert_eq!(
            state.log.last().map(String::as_str),
            Some("Your inventory was full, so a reward was dropped!")
        );
    }
}
