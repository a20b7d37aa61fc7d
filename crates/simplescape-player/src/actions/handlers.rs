//! Command dispatch.
//!
//! [`dispatch`] routes each [`Command`] variant to the subsystem that owns
//! it. It mutates a draft state; [`super::apply`] decides whether the draft
//! is kept.

use simplescape_types::{Activity, Command, GameState, Item};
use simplescape_world::item_def;

use crate::actions::validation::{require_held, require_idle};
use crate::config::GameRules;
use crate::dice::Dice;
use crate::error::{ActionError, ActionResult};
use crate::state::go_idle;
use crate::{combat, economy, equipment, inventory, production, quests, slayer, vitals};

/// Run `command` against the draft `state`.
pub fn dispatch<D: Dice + ?Sized>(
    state: &mut GameState,
    command: &Command,
    rules: &GameRules,
    dice: &mut D,
) -> ActionResult {
    match command {
        Command::StartActivity(request) => {
            require_idle(state.activity)?;
            match request.activity {
                Activity::Idle => Err(ActionError::Ignored),
                Activity::Combat => combat::engage(state, request.monster_key),
                activity => production::start(state, activity, request.resource_key.as_deref()),
            }
        }
        Command::StopActivity => {
            go_idle(state);
            Ok(())
        }
        Command::GameTick => match state.activity {
            Activity::Idle => Err(ActionError::Ignored),
            Activity::Combat => combat::tick(state, rules, dice),
            _ => production::tick(state, rules, dice),
        },
        Command::PrayerTick => vitals::prayer_tick(state, rules),
        Command::EatFood(item) => vitals::eat(state, *item),
        Command::BuryBones(item) => vitals::bury(state, *item),
        Command::TogglePrayer(prayer) => vitals::toggle_prayer(state, *prayer),
        Command::DropItem(item) => drop_item(state, *item),
        Command::ExamineItem(item) => {
            state.log.push(String::from(item_def(*item).examine));
            Ok(())
        }
        Command::EquipItem(item) => equipment::equip(state, *item, rules),
        Command::UnequipItem(slot) => equipment::unequip(state, *slot, rules),
        Command::CastSpell(key) => combat::cast_spell(state, key, rules, dice),
        Command::StartQuest(quest) => quests::start(state, *quest),
        Command::AdvanceQuest(quest) => quests::advance(state, *quest, rules),
        Command::GetSlayerTask => slayer::assign(state, dice),
        Command::BuyItem(request) => economy::buy(state, *request, rules),
        Command::SellItem(request) => economy::sell(state, *request, rules),
        Command::DepositItem(request) => economy::deposit(state, *request, rules),
        Command::WithdrawItem(request) => economy::withdraw(state, *request, rules),
        Command::DepositAllInventory => economy::deposit_all(state, rules),
        Command::LoadGame(snapshot) => {
            state.player = snapshot.player.clone();
            state.shop_stock = snapshot.shop_stock.clone();
            go_idle(state);
            state.log.push(String::from("Game loaded successfully."));
            Ok(())
        }
        Command::AddLog(line) => {
            state.log.push(line.clone());
            Ok(())
        }
    }
}

/// Drop the whole stack of `item`.
fn drop_item(state: &mut GameState, item: Item) -> ActionResult {
    require_held(&state.player.inventory, item)?;
    inventory::take_stack(&mut state.player.inventory, item);
    state.log.push(format!("You drop the {}.", item.lowercase()));
    Ok(())
}
