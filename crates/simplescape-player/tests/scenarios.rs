//! End-to-end reducer scenarios driven through `apply`.

#![allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use simplescape_player::{GameRules, ScriptedDice, apply, inventory, new_game, skills};
use simplescape_types::{
    Activity, ActivityRequest, Command, GameState, Item, ItemStack, MonsterKey, Prayer, Skill,
    SkillXp, TradeRequest, TransferAmount, TransferRequest,
};
use simplescape_world::item_def;

fn start(activity: Activity, key: &str) -> Command {
    Command::StartActivity(ActivityRequest {
        activity,
        monster_key: None,
        resource_key: Some(String::from(key)),
    })
}

fn last_line(state: &GameState) -> &str {
    state.log.last().map_or("", String::as_str)
}

#[test]
fn gathering_above_level_is_rejected_with_one_line() {
    let rules = GameRules::default();
    let mut dice = ScriptedDice::new();
    let state = new_game();

    let next = apply(&state, &start(Activity::Woodcutting, "oak"), &rules, &mut dice);

    assert_eq!(next.activity, Activity::Idle);
    assert_eq!(next.current_resource_key, None);
    assert_eq!(next.log.len(), state.log.len() + 1);
    assert_eq!(next.player, state.player);
}

#[test]
fn burnt_fish_grants_no_cooking_xp() {
    let rules = GameRules::default();
    let mut state = new_game();
    state.player.inventory.push(ItemStack::new(Item::RawFish, 1));
    let mut dice = ScriptedDice::new();

    let state = apply(
        &state,
        &Command::StartActivity(ActivityRequest {
            activity: Activity::Cooking,
            monster_key: None,
            resource_key: None,
        }),
        &rules,
        &mut dice,
    );
    assert_eq!(state.activity, Activity::Cooking);

    let next = apply(&state, &Command::GameTick, &rules, &mut dice);
    assert_eq!(inventory::quantity_of(&next.player.inventory, Item::RawFish), 0);
    assert_eq!(inventory::quantity_of(&next.player.inventory, Item::BurntFish), 1);
    assert_eq!(skills::xp(&next.player, Skill::Cooking), Decimal::ZERO);
}

#[test]
fn killing_blow_rewards_and_idles() {
    let rules = GameRules::default();
    let mut dice = ScriptedDice::new().with_units([dec!(0.5)]);
    let fight = Command::StartActivity(ActivityRequest {
        activity: Activity::Combat,
        monster_key: Some(MonsterKey::Goblin),
        resource_key: None,
    });
    let mut state = apply(&new_game(), &fight, &rules, &mut dice);
    if let Some(goblin) = state.monster.as_mut() {
        goblin.hp = 1;
    }
    let hitpoints_before = skills::xp(&state.player, Skill::Hitpoints);

    let next = apply(&state, &Command::GameTick, &rules, &mut dice);

    assert_eq!(next.activity, Activity::Idle);
    assert!(next.monster.is_none());
    // One damage: round(1.33) = 1 for the hit, plus the goblin's 15.
    assert_eq!(
        skills::xp(&next.player, Skill::Hitpoints),
        hitpoints_before + dec!(16)
    );
    assert!(next.log.iter().any(|line| line == "You have defeated the Goblin!"));
}

#[test]
fn deposit_all_into_full_bank_changes_nothing() {
    let rules = GameRules::default();
    let mut dice = ScriptedDice::new();
    let mut state = new_game();
    state.player.inventory.push(ItemStack::new(Item::Logs, 50));
    state.player.bank = Item::ALL
        .iter()
        .filter(|item| **item != Item::Logs)
        .take(rules.bank_slots)
        .map(|item| ItemStack::new(*item, 1))
        .collect();
    assert_eq!(state.player.bank.len(), 56);

    let next = apply(
        &state,
        &Command::DepositItem(TransferRequest {
            item_name: Item::Logs,
            quantity: TransferAmount::All,
        }),
        &rules,
        &mut dice,
    );

    assert_eq!(next.player.inventory, state.player.inventory);
    assert_eq!(next.player.bank, state.player.bank);
    assert_eq!(last_line(&next), "Your bank is full.");
}

#[test]
fn prayer_toggle_and_drain() {
    let rules = GameRules::default();
    let mut dice = ScriptedDice::new();
    let state = new_game();

    let rejected = apply(
        &state,
        &Command::TogglePrayer(Prayer::ClarityOfThought),
        &rules,
        &mut dice,
    );
    assert!(rejected.player.active_prayers.is_empty());
    assert_eq!(rejected.log.len(), state.log.len() + 1);

    let mut state = state;
    state.player.skills.insert(Skill::Prayer, SkillXp::new(dec!(650)));
    let active = apply(
        &state,
        &Command::TogglePrayer(Prayer::ClarityOfThought),
        &rules,
        &mut dice,
    );
    assert!(active.player.active_prayers.contains(&Prayer::ClarityOfThought));

    let drained = apply(&active, &Command::PrayerTick, &rules, &mut dice);
    // One point per minute over a 3 s tick: 1 / (60000 / 3000).
    assert_eq!(
        drained.player.prayer_points,
        active.player.prayer_points - dec!(0.05)
    );
}

#[test]
fn purchase_is_clamped_to_stock() {
    let rules = GameRules::default();
    let mut dice = ScriptedDice::new();
    let mut state = new_game();
    state.shop_stock = vec![ItemStack::new(Item::AirRune, 4)];
    let price = item_def(Item::AirRune).value;

    let next = apply(
        &state,
        &Command::BuyItem(TradeRequest {
            item_name: Item::AirRune,
            quantity: 10,
        }),
        &rules,
        &mut dice,
    );

    assert_eq!(inventory::quantity_of(&next.player.inventory, Item::AirRune), 4);
    assert_eq!(
        inventory::quantity_of(&next.player.inventory, Item::GoldPiece),
        500 - price * 4
    );
    assert_eq!(inventory::quantity_of(&next.shop_stock, Item::AirRune), 0);
}

#[test]
fn seeded_rng_drives_a_full_session() {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    let rules = GameRules::default();
    let mut rng = SmallRng::seed_from_u64(42);
    let mut state = apply(&new_game(), &start(Activity::Mining, "copper"), &rules, &mut rng);
    for _ in 0..20 {
        state = apply(&state, &Command::GameTick, &rules, &mut rng);
    }
    assert_eq!(state.activity, Activity::Mining);
    assert_eq!(inventory::quantity_of(&state.player.inventory, Item::Ore), 20);
    assert_eq!(skills::xp(&state.player, Skill::Mining), dec!(350));
    assert!(state.player.inventory.len() <= rules.inventory_slots);
}
