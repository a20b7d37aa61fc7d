//! Combat rounds against the current encounter.
//!
//! A round is the player's attack (melee, ranged, or a spell) followed by
//! either the monster's death or its retaliation. Death rewards experience,
//! loot, gold, and slayer progress, then ends the activity. A retaliation
//! that takes the player to 0 hit points triggers soft-death recovery.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use simplescape_types::{
    Activity, EquipmentSlot, Encounter, GameState, Item, MonsterKey, Player, Skill,
};
use simplescape_world::{item_def, monster, prayer_boosting, spell};

use crate::actions::validation::{Rejection, has_ingredients};
use crate::config::GameRules;
use crate::dice::Dice;
use crate::equipment;
use crate::error::{ActionResult, PlayerError, overflow};
use crate::inventory;
use crate::skills;
use crate::slayer;
use crate::state::go_idle;
use crate::vitals;

/// Armour scaling constant: `mitigation = defence / (defence + 50)`.
const ARMOUR_CONSTANT: u32 = 50;

/// Hitpoints experience per point of damage dealt.
const HITPOINTS_XP_RATE: Decimal = Decimal::from_parts(133, 0, 0, false, 2); // 1.33

/// Combat-skill experience per point of damage dealt.
const DAMAGE_XP_RATE: u32 = 4;

// ---------------------------------------------------------------------------
// Numeric helpers
// ---------------------------------------------------------------------------

fn floor_u32(value: Decimal, context: &str) -> Result<u32, PlayerError> {
    value.floor().to_u32().ok_or_else(|| overflow(context))
}

fn round_u32(value: Decimal, context: &str) -> Result<u32, PlayerError> {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .ok_or_else(|| overflow(context))
}

fn ratio(numerator: u32, denominator: u32) -> Decimal {
    Decimal::from(numerator)
        .checked_div(Decimal::from(denominator))
        .unwrap_or(Decimal::ZERO)
}

/// Level in `skill`, scaled by the prayer multiplier when the prayer that
/// boosts it is active.
pub fn effective_level(player: &Player, skill: Skill, rules: &GameRules) -> Decimal {
    let base = Decimal::from(skills::level(player, skill));
    let boosted = prayer_boosting(skill).is_some_and(|prayer| player.active_prayers.contains(&prayer));
    if boosted {
        base.saturating_mul(rules.prayer_multiplier())
    } else {
        base
    }
}

/// Strength (or Ranged, or Magic) and Hitpoints experience for a hit.
fn grant_damage_xp(
    player: &mut Player,
    skill: Skill,
    damage: u32,
    xp: Option<Decimal>,
) -> Result<(), PlayerError> {
    let skill_xp = match xp {
        Some(fixed) => fixed,
        None => Decimal::from(damage.saturating_mul(DAMAGE_XP_RATE)),
    };
    skills::grant_xp(player, skill, skill_xp)?;
    let hitpoints = round_u32(
        Decimal::from(damage).saturating_mul(HITPOINTS_XP_RATE),
        "hitpoints experience for damage",
    )?;
    skills::grant_points(player, Skill::Hitpoints, hitpoints)
}

// ---------------------------------------------------------------------------
// Engaging
// ---------------------------------------------------------------------------

/// Spawn `monster_key` and enter combat.
pub fn engage(state: &mut GameState, monster_key: Option<MonsterKey>) -> ActionResult {
    let key = monster_key.ok_or(Rejection::NoTarget)?;
    let encounter = monster(key).spawn(key);
    state
        .log
        .push(format!("You are now fighting a {}!", encounter.name));
    state.activity = Activity::Combat;
    state.current_resource_key = None;
    state.monster = Some(encounter);
    Ok(())
}

// ---------------------------------------------------------------------------
// Rounds
// ---------------------------------------------------------------------------

/// One combat tick: the player's weapon attack and its consequences.
pub fn tick<D: Dice + ?Sized>(state: &mut GameState, rules: &GameRules, dice: &mut D) -> ActionResult {
    let Some(mut encounter) = state.monster.take() else {
        go_idle(state);
        return Ok(());
    };

    let ranged = equipment::weapon(&state.player).is_some_and(|item| item_def(item).is_ranged_weapon());
    let damage = if ranged {
        match ranged_attack(state, &encounter, dice)? {
            Some(damage) => damage,
            None => {
                go_idle(state);
                return Ok(());
            }
        }
    } else {
        melee_attack(state, &encounter, rules, dice)?
    };

    encounter.hp = encounter.hp.saturating_sub(damage);
    resolve_round(state, encounter, rules, dice)
}

/// Fire one arrow. `None` when there is nothing to fire; the round ends
/// without retaliation.
fn ranged_attack<D: Dice + ?Sized>(
    state: &mut GameState,
    encounter: &Encounter,
    dice: &mut D,
) -> Result<Option<u32>, PlayerError> {
    let Some(ammo) = state.player.equipment.get(&EquipmentSlot::Ammo).copied() else {
        state.log.push(String::from("You have no arrows equipped!"));
        return Ok(None);
    };
    if !inventory::has_item(&state.player.inventory, ammo, 1) {
        state
            .log
            .push(format!("You have run out of {}!", ammo.lowercase()));
        return Ok(None);
    }
    inventory::remove_item(&mut state.player.inventory, ammo, 1);

    let level = skills::level(&state.player, Skill::Ranged);
    let spread = ratio(level, 2).saturating_add(Decimal::TWO);
    let bonus = ratio(item_def(ammo).ranged_strength, 10);
    let damage = floor_u32(
        dice.unit().saturating_mul(spread).saturating_add(bonus),
        "ranged damage",
    )?;

    state.log.push(format!(
        "You fire an arrow, hitting the {} for {damage} damage.",
        encounter.name
    ));
    grant_damage_xp(&mut state.player, Skill::Ranged, damage, None)?;
    Ok(Some(damage))
}

fn melee_attack<D: Dice + ?Sized>(
    state: &mut GameState,
    encounter: &Encounter,
    rules: &GameRules,
    dice: &mut D,
) -> Result<u32, PlayerError> {
    let player = &state.player;
    let strength = effective_level(player, Skill::Strength, rules);
    let attack = effective_level(player, Skill::Attack, rules);
    let weapon_attack = equipment::weapon(player).map_or(0, |item| item_def(item).attack_bonus);

    let four = Decimal::from(4);
    let spread = strength
        .checked_div(four)
        .unwrap_or(Decimal::ZERO)
        .saturating_add(Decimal::TWO);
    let accuracy = attack
        .checked_div(four)
        .unwrap_or(Decimal::ZERO)
        .saturating_add(ratio(weapon_attack, 4));
    let damage = floor_u32(
        dice.unit().saturating_mul(spread).saturating_add(accuracy),
        "melee damage",
    )?;

    state.log.push(format!(
        "You hit the {} for {damage} damage.",
        encounter.name
    ));
    grant_damage_xp(&mut state.player, Skill::Strength, damage, None)?;
    Ok(damage)
}

/// Cast a combat spell at the current encounter.
pub fn cast_spell<D: Dice + ?Sized>(
    state: &mut GameState,
    key: &str,
    rules: &GameRules,
    dice: &mut D,
) -> ActionResult {
    if state.monster.is_none() {
        return Err(Rejection::NotInCombat.into());
    }
    let spell = spell(key).ok_or(Rejection::NothingInteresting)?;
    let max_hit = spell
        .max_hit()
        .ok_or(Rejection::NotCombatSpell { spell: spell.name })?;
    if skills::level(&state.player, Skill::Magic) < spell.level_req {
        return Err(Rejection::MagicLevel {
            level: spell.level_req,
            spell: spell.name,
        }
        .into());
    }
    if !has_ingredients(&state.player.inventory, spell.runes) {
        return Err(Rejection::NotEnoughRunes { spell: spell.name }.into());
    }

    let Some(mut encounter) = state.monster.take() else {
        return Err(Rejection::NotInCombat.into());
    };
    for rune in spell.runes {
        inventory::remove_item(&mut state.player.inventory, rune.item, rune.quantity);
    }
    let damage = dice.between(0, max_hit);
    state.log.push(format!(
        "You cast {} and hit the {} for {damage} damage.",
        spell.name, encounter.name
    ));
    grant_damage_xp(&mut state.player, Skill::Magic, damage, Some(spell.xp))?;

    encounter.hp = encounter.hp.saturating_sub(damage);
    resolve_round(state, encounter, rules, dice)
}

/// Settle a round after the player's attack landed.
fn resolve_round<D: Dice + ?Sized>(
    state: &mut GameState,
    encounter: Encounter,
    rules: &GameRules,
    dice: &mut D,
) -> ActionResult {
    if encounter.hp == 0 {
        return defeat(state, &encounter, rules, dice);
    }
    retaliate(state, encounter, rules, dice)
}

/// The monster died: experience, slayer progress, loot, gold.
fn defeat<D: Dice + ?Sized>(
    state: &mut GameState,
    encounter: &Encounter,
    rules: &GameRules,
    dice: &mut D,
) -> ActionResult {
    let name = &encounter.name;
    state.log.push(format!("You have defeated the {name}!"));
    skills::grant_points(&mut state.player, Skill::Hitpoints, encounter.xp)?;
    slayer::record_kill(
        &mut state.player,
        encounter.key,
        encounter.max_hp,
        &mut state.log,
    )?;

    let slots = Some(rules.inventory_slots);
    for entry in &encounter.loot {
        if !entry.drop_chance.is_none_or(|chance| dice.chance(chance)) {
            continue;
        }
        if inventory::add_item(&mut state.player.inventory, slots, entry.item, entry.quantity).is_ok() {
            state.log.push(format!(
                "The {name} dropped {}x {}!",
                entry.quantity, entry.item
            ));
        } else {
            state
                .log
                .push(String::from("Your inventory is full. The loot was dropped."));
        }
    }

    let (low, high) = encounter.gold_drop;
    let gold = dice.between(low, high);
    if gold > 0 {
        if inventory::add_item(&mut state.player.inventory, slots, Item::CURRENCY, gold).is_ok() {
            state
                .log
                .push(format!("The {name} dropped {gold} gold pieces!"));
        } else {
            state
                .log
                .push(String::from("Your inventory is full. The gold was dropped."));
        }
    }

    go_idle(state);
    Ok(())
}

/// Damage the monster deals back, after armour.
///
/// `round(raw * (1 - defence / (defence + 50)))` where defence is the
/// effective Defence level plus worn defence bonuses.
pub fn mitigate(raw: u32, player: &Player, rules: &GameRules) -> Result<u32, PlayerError> {
    let defence = effective_level(player, Skill::Defence, rules)
        .saturating_add(Decimal::from(equipment::defence_bonus(player)));
    let reduction = defence
        .checked_div(defence.saturating_add(Decimal::from(ARMOUR_CONSTANT)))
        .unwrap_or(Decimal::ZERO);
    round_u32(
        Decimal::from(raw).saturating_mul(Decimal::ONE.saturating_sub(reduction)),
        "mitigated damage",
    )
}

/// The monster survived and hits back.
fn retaliate<D: Dice + ?Sized>(
    state: &mut GameState,
    encounter: Encounter,
    rules: &GameRules,
    dice: &mut D,
) -> ActionResult {
    let raw = dice.between(0, encounter.attack);
    let damage = mitigate(raw, &state.player, rules)?;
    state.player.hp = state.player.hp.saturating_sub(damage);
    state
        .log
        .push(format!("{} hits you for {damage} damage.", encounter.name));

    if state.player.hp == 0 {
        state.log.push(String::from(
            "You have been defeated! You wake up feeling weak.",
        ));
        vitals::recover(state);
        return Ok(());
    }
    state.monster = Some(encounter);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use simplescape_types::{ItemStack, Prayer, SkillXp, SlayerTask};

    use crate::dice::ScriptedDice;
    use crate::state::new_game;

    fn fighting(key: MonsterKey) -> GameState {
        let mut state = new_game();
        engage(&mut state, Some(key)).unwrap();
        state
    }

    fn lines(state: &GameState, count: usize) -> Vec<&str> {
        let skip = state.log.len().saturating_sub(count);
        state.log.iter().skip(skip).map(String::as_str).collect()
    }

    #[test]
    fn engage_needs_a_monster() {
        let mut state = new_game();
        assert_eq!(engage(&mut state, None), Err(Rejection::NoTarget.into()));
        engage(&mut state, Some(MonsterKey::Goblin)).unwrap();
        assert_eq!(state.activity, Activity::Combat);
        assert_eq!(state.current_resource_key, None);
        assert_eq!(
            state.log.last().map(String::as_str),
            Some("You are now fighting a Goblin!")
        );
        assert_eq!(state.monster.as_ref().map(|m| m.hp), Some(10));
    }

    #[test]
    fn melee_hit_and_retaliation() {
        let rules = GameRules::default();
        let mut state = fighting(MonsterKey::Goblin);
        // floor(0.5 * 2.25 + 0.25) = 1; goblin rolls 1, defence 1 mitigates to 1.
        let mut dice = ScriptedDice::new().with_units([dec!(0.5)]).with_values([1]);
        tick(&mut state, &rules, &mut dice).unwrap();
        assert_eq!(
            lines(&state, 2),
            vec!["You hit the Goblin for 1 damage.", "Goblin hits you for 1 damage."]
        );
        assert_eq!(state.monster.as_ref().map(|m| m.hp), Some(9));
        assert_eq!(state.player.hp, 9);
        assert_eq!(skills::xp(&state.player, Skill::Strength), dec!(4));
        assert_eq!(skills::xp(&state.player, Skill::Hitpoints), dec!(1155));
    }

    #[test]
    fn kill_grants_loot_gold_and_idles() {
        let rules = GameRules::default();
        let mut state = fighting(MonsterKey::Cow);
        state.monster.as_mut().unwrap().hp = 1;
        let mut dice = ScriptedDice::new().with_units([dec!(0.5)]).with_values([7]);
        tick(&mut state, &rules, &mut dice).unwrap();
        assert_eq!(
            lines(&state, 4),
            vec![
                "You hit the Cow for 1 damage.",
                "You have defeated the Cow!",
                "The Cow dropped 1x Cowhide!",
                "The Cow dropped 7 gold pieces!",
            ]
        );
        assert_eq!(state.activity, Activity::Idle);
        assert!(state.monster.is_none());
        assert_eq!(inventory::quantity_of(&state.player.inventory, Item::GoldPiece), 507);
        assert_eq!(skills::xp(&state.player, Skill::Hitpoints), dec!(1165));
    }

    #[test]
    fn kill_counts_towards_slayer_task() {
        let rules = GameRules::default();
        let mut state = fighting(MonsterKey::Chicken);
        state.player.slayer_task = Some(SlayerTask {
            monster_key: MonsterKey::Chicken,
            initial_amount: 10,
            remaining: 1,
        });
        state.monster.as_mut().unwrap().hp = 1;
        let mut dice = ScriptedDice::new().with_units([dec!(0.5)]);
        tick(&mut state, &rules, &mut dice).unwrap();
        assert_eq!(state.player.slayer_task.map(|t| t.remaining), Some(0));
        assert_eq!(skills::xp(&state.player, Skill::Slayer), dec!(3));
        assert!(state.log.iter().any(|line| line
            == "You have completed your slayer task! Return to a slayer master for a new one."));
    }

    #[test]
    fn defeat_is_a_soft_death() {
        let rules = GameRules::default();
        let mut state = fighting(MonsterKey::TreeSpirit);
        state.player.hp = 1;
        let mut dice = ScriptedDice::new().with_values([15]);
        tick(&mut state, &rules, &mut dice).unwrap();
        assert_eq!(
            state.log.last().map(String::as_str),
            Some("You have been defeated! You wake up feeling weak.")
        );
        assert_eq!(state.player.hp, 9);
        assert_eq!(state.activity, Activity::Idle);
        assert!(state.monster.is_none());
    }

    #[test]
    fn ranged_without_ammo_stops_without_retaliation() {
        let rules = GameRules::default();
        let mut state = fighting(MonsterKey::Goblin);
        state.player.equipment.insert(EquipmentSlot::Weapon, Item::Shortbow);
        let mut dice = ScriptedDice::new().with_values([1]);
        tick(&mut state, &rules, &mut dice).unwrap();
        assert_eq!(
            state.log.last().map(String::as_str),
            Some("You have no arrows equipped!")
        );
        assert_eq!(state.player.hp, 10);
        assert_eq!(state.activity, Activity::Idle);

        let mut state = fighting(MonsterKey::Goblin);
        state.player.equipment.insert(EquipmentSlot::Weapon, Item::Shortbow);
        state.player.equipment.insert(EquipmentSlot::Ammo, Item::BronzeArrows);
        tick(&mut state, &rules, &mut dice).unwrap();
        assert_eq!(
            state.log.last().map(String::as_str),
            Some("You have run out of bronze arrows!")
        );
        assert_eq!(dice.remaining(), (0, 1));
    }

    #[test]
    fn ranged_consumes_an_arrow() {
        let rules = GameRules::default();
        let mut state = fighting(MonsterKey::Goblin);
        state.player.equipment.insert(EquipmentSlot::Weapon, Item::Shortbow);
        state.player.equipment.insert(EquipmentSlot::Ammo, Item::BronzeArrows);
        state.player.inventory.push(ItemStack::new(Item::BronzeArrows, 2));
        // floor(0.9 * 2.5 + 0.7) = 2
        let mut dice = ScriptedDice::new().with_units([dec!(0.9)]);
        tick(&mut state, &rules, &mut dice).unwrap();
        assert!(state
            .log
            .iter()
            .any(|line| line == "You fire an arrow, hitting the Goblin for 2 damage."));
        assert_eq!(inventory::quantity_of(&state.player.inventory, Item::BronzeArrows), 1);
        assert_eq!(skills::xp(&state.player, Skill::Ranged), dec!(8));
        assert_eq!(skills::xp(&state.player, Skill::Hitpoints), dec!(1157));
    }

    #[test]
    fn prayer_boosts_effective_level() {
        let rules = GameRules::default();
        let mut player = new_game().player;
        player.skills.insert(Skill::Defence, SkillXp::new(dec!(1154)));
        assert_eq!(effective_level(&player, Skill::Defence, &rules), dec!(10));
        player.active_prayers.insert(Prayer::ThickSkin);
        assert_eq!(effective_level(&player, Skill::Defence, &rules), dec!(10.50));
    }

    #[test]
    fn armour_mitigates_retaliation() {
        let rules = GameRules::default();
        let mut player = new_game().player;
        assert_eq!(mitigate(10, &player, &rules).unwrap(), 10);
        player.equipment.insert(EquipmentSlot::Body, Item::BronzePlatebody);
        // defence 11: 10 * 50/61 = 8.19...
        assert_eq!(mitigate(10, &player, &rules).unwrap(), 8);
        assert_eq!(mitigate(0, &player, &rules).unwrap(), 0);
    }

    #[test]
    fn spell_cast_rules() {
        let rules = GameRules::default();
        let mut dice = ScriptedDice::new().with_values([2, 0]);
        let mut state = new_game();
        assert_eq!(
            cast_spell(&mut state, "windStrike", &rules, &mut dice),
            Err(Rejection::NotInCombat.into())
        );

        let mut state = fighting(MonsterKey::Goblin);
        assert_eq!(
            cast_spell(&mut state, "enchantSapphireRing", &rules, &mut dice),
            Err(Rejection::NotCombatSpell {
                spell: "Enchant Sapphire Ring"
            }
            .into())
        );
        assert_eq!(
            cast_spell(&mut state, "windStrike", &rules, &mut dice),
            Err(Rejection::NotEnoughRunes {
                spell: "Wind Strike"
            }
            .into())
        );

        state.player.inventory.push(ItemStack::new(Item::AirRune, 1));
        state.player.inventory.push(ItemStack::new(Item::MindRune, 1));
        cast_spell(&mut state, "windStrike", &rules, &mut dice).unwrap();
        assert_eq!(
            lines(&state, 2),
            vec![
                "You cast Wind Strike and hit the Goblin for 2 damage.",
                "Goblin hits you for 0 damage."
            ]
        );
        assert_eq!(skills::xp(&state.player, Skill::Magic), dec!(5.5));
        assert!(!inventory::has_item(&state.player.inventory, Item::AirRune, 1));
        assert_eq!(state.monster.as_ref().map(|m| m.hp), Some(8));
    }
}
