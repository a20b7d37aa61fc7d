//! Recipe-driven activities: gathering, cooking, smithing, fletching,
//! firemaking, crafting, enchanting, and thieving.
//!
//! All of them follow one contract. Starting resolves the recipe and checks
//! level, tools, and inputs. Each tick re-checks the inputs, consumes them,
//! grants experience, and tries to store the output; a full inventory drops
//! the output but keeps the experience. The per-domain differences (burn
//! curve, success curve, gem rolls) live in [`RecipeKind`].

use rust_decimal::Decimal;
use simplescape_types::{Activity, GameState, Item, ItemStack, Skill};
use simplescape_world::{
    GEMS, Recipe, RecipeKind, Spell, SpellEffect, cooking_recipe, recipe_book, spell,
};

use crate::actions::validation::{
    Rejection, has_ingredients, has_tools, require_key,
};
use crate::config::GameRules;
use crate::dice::Dice;
use crate::error::{ActionError, ActionResult};
use crate::inventory;
use crate::skills;
use crate::state::go_idle;
use crate::vitals;

/// Thieving success chance never exceeds this.
const MAX_THIEVING_CHANCE: Decimal = Decimal::from_parts(99, 0, 0, false, 2); // 0.99

/// Success chance gained per level above the requirement.
const THIEVING_CHANCE_PER_LEVEL: Decimal = Decimal::from_parts(5, 0, 0, false, 3); // 0.005

// ---------------------------------------------------------------------------
// Starting
// ---------------------------------------------------------------------------

/// Start a keyed production or gathering activity.
pub fn start(state: &mut GameState, activity: Activity, key: Option<&str>) -> ActionResult {
    match activity {
        Activity::Cooking => return start_cooking(state),
        Activity::Enchanting => return start_enchanting(state, key),
        Activity::Idle | Activity::Combat => return Err(ActionError::Ignored),
        _ => {}
    }

    let key = require_key(key)?;
    let recipe = recipe_book(activity)
        .and_then(|book| book.get(key))
        .ok_or(Rejection::NothingInteresting)?;
    let skill = activity.skill().ok_or(ActionError::Ignored)?;
    let level = skills::level(&state.player, skill);
    let inventory = &state.player.inventory;
    let too_low = level < recipe.level_req;

    let message = match activity {
        Activity::Crafting => {
            if !has_tools(inventory, recipe.tools) {
                return Err(Rejection::NeedleAndThread.into());
            }
            if too_low {
                return Err(Rejection::CraftingLevel {
                    level: recipe.level_req,
                    name: recipe.name,
                }
                .into());
            }
            if !has_ingredients(inventory, recipe.inputs) {
                return Err(Rejection::MissingMaterials.into());
            }
            String::from("You begin crafting...")
        }
        Activity::Firemaking => {
            if !has_tools(inventory, recipe.tools) {
                return Err(Rejection::NoTinderbox.into());
            }
            let logs = recipe.primary_input().ok_or(ActionError::Ignored)?;
            if too_low {
                return Err(Rejection::FiremakingLevel {
                    level: recipe.level_req,
                    logs,
                }
                .into());
            }
            if !has_ingredients(inventory, recipe.inputs) {
                return Err(Rejection::NoLogs { logs }.into());
            }
            String::from("You begin to light the logs...")
        }
        Activity::Thieving => {
            if too_low {
                return Err(Rejection::ThievingLevel {
                    level: recipe.level_req,
                }
                .into());
            }
            String::from("You start to look for an opportunity...")
        }
        Activity::Fletching => {
            if too_low {
                return Err(Rejection::FletchingLevel {
                    level: recipe.level_req,
                }
                .into());
            }
            if !has_ingredients(inventory, recipe.inputs) {
                return Err(Rejection::MissingMaterials.into());
            }
            String::from("You begin fletching...")
        }
        Activity::Smithing => {
            if too_low {
                return Err(Rejection::SmithingLevel {
                    level: recipe.level_req,
                    name: recipe.name,
                }
                .into());
            }
            if !has_ingredients(inventory, recipe.inputs) {
                return Err(Rejection::SmithingMaterials { name: recipe.name }.into());
            }
            format!("You start to make a {}...", recipe.name.to_lowercase())
        }
        _ => {
            if too_low {
                return Err(Rejection::GatheringLevel {
                    level: recipe.level_req,
                    skill,
                }
                .into());
            }
            format!("You begin {}...", skill.name().to_lowercase())
        }
    };

    state.activity = activity;
    state.current_resource_key = Some(String::from(key));
    state.log.push(message);
    Ok(())
}

/// First carried stack that has a cooking recipe.
fn first_cookable(inventory: &[ItemStack]) -> Option<(Item, &'static Recipe)> {
    inventory
        .iter()
        .find_map(|stack| cooking_recipe(stack.item).map(|recipe| (stack.item, recipe)))
}

fn start_cooking(state: &mut GameState) -> ActionResult {
    let (raw, recipe) = first_cookable(&state.player.inventory).ok_or(Rejection::NothingToCook)?;
    if skills::level(&state.player, Skill::Cooking) < recipe.level_req {
        return Err(Rejection::CookingLevel {
            level: recipe.level_req,
            raw,
        }
        .into());
    }
    state.activity = Activity::Cooking;
    state.current_resource_key = None;
    state.log.push(String::from("You begin cooking..."));
    Ok(())
}

/// The enchantment behind `key`, if it is one.
fn enchantment(key: &str) -> Option<(&'static Spell, Item, Item)> {
    let spell = spell(key)?;
    match spell.effect {
        SpellEffect::Enchant { target, product } => Some((spell, target, product)),
        SpellEffect::Strike { .. } => None,
    }
}

fn start_enchanting(state: &mut GameState, key: Option<&str>) -> ActionResult {
    let key = require_key(key)?;
    let (spell, target, _) = enchantment(key).ok_or(Rejection::NothingInteresting)?;
    let inventory = &state.player.inventory;

    if skills::level(&state.player, Skill::Magic) < spell.level_req {
        return Err(Rejection::MagicLevel {
            level: spell.level_req,
            spell: spell.name,
        }
        .into());
    }
    if !has_ingredients(inventory, spell.runes) {
        return Err(Rejection::NotEnoughRunes { spell: spell.name }.into());
    }
    if !inventory::has_item(inventory, target, 1) {
        return Err(Rejection::NothingToEnchant { item: target }.into());
    }

    state.activity = Activity::Enchanting;
    state.current_resource_key = Some(String::from(key));
    state.log.push(String::from("You begin enchanting..."));
    Ok(())
}

// ---------------------------------------------------------------------------
// Ticking
// ---------------------------------------------------------------------------

/// Advance the current non-combat activity by one tick.
pub fn tick<D: Dice + ?Sized>(state: &mut GameState, rules: &GameRules, dice: &mut D) -> ActionResult {
    let activity = state.activity;
    if activity == Activity::Cooking {
        return cook_tick(state, rules, dice);
    }

    let Some(key) = state.current_resource_key.clone() else {
        go_idle(state);
        return Ok(());
    };

    if activity == Activity::Enchanting {
        return enchant_tick(state, &key, rules);
    }

    let Some(recipe) = recipe_book(activity).and_then(|book| book.get(&key)) else {
        go_idle(state);
        return Ok(());
    };
    let Some(skill) = activity.skill() else {
        return Err(ActionError::Ignored);
    };

    match recipe.kind {
        RecipeKind::Gathering { .. } => gather_tick(state, recipe, skill, rules, dice),
        RecipeKind::Thieving {
            damage,
            success_rate,
            loot,
            loot_range,
        } => {
            let target = Heist {
                damage,
                success_rate,
                loot,
                loot_range,
            };
            thieve_tick(state, recipe, &target, rules, dice)
        }
        RecipeKind::Standard | RecipeKind::Cooking { .. } => {
            make_tick(state, recipe, skill, rules)
        }
    }
}

/// Consume inputs and produce the output of a standard recipe.
fn make_tick(state: &mut GameState, recipe: &Recipe, skill: Skill, rules: &GameRules) -> ActionResult {
    let activity = state.activity;
    let name = recipe.name.to_lowercase();

    if !has_ingredients(&state.player.inventory, recipe.inputs) {
        let message = match activity {
            Activity::Smithing => format!("You've run out of materials to make a {name}."),
            Activity::Firemaking => format!(
                "You've run out of {}.",
                recipe.primary_input().map_or(name, Item::lowercase)
            ),
            _ => String::from("You've run out of materials."),
        };
        state.log.push(message);
        go_idle(state);
        return Ok(());
    }

    let player = &mut state.player;
    for input in recipe.inputs {
        inventory::remove_item(&mut player.inventory, input.item, input.quantity);
    }
    skills::grant_xp(player, skill, recipe.xp)?;

    if let Some(output) = recipe.output {
        let stored = inventory::add_item(
            &mut player.inventory,
            Some(rules.inventory_slots),
            output.item,
            output.quantity,
        )
        .is_ok();
        if !stored {
            state
                .log
                .push(String::from("Your inventory is full, so you drop the item."));
        }
    }

    let message = match activity {
        Activity::Crafting => format!("You make some {name}."),
        Activity::Fletching => format!("You fletch a {name}."),
        Activity::Firemaking => format!(
            "You burn the {}.",
            recipe.primary_input().map_or(name, Item::lowercase)
        ),
        _ => format!("You make a {name}."),
    };
    state.log.push(message);
    Ok(())
}

/// Gather one unit from a resource spot, with a chance of a gem when
/// mining.
fn gather_tick<D: Dice + ?Sized>(
    state: &mut GameState,
    recipe: &Recipe,
    skill: Skill,
    rules: &GameRules,
    dice: &mut D,
) -> ActionResult {
    let Some(output) = recipe.output else {
        return Err(ActionError::Ignored);
    };
    let player = &mut state.player;
    skills::grant_xp(player, skill, recipe.xp)?;

    let slots = Some(rules.inventory_slots);
    if inventory::add_item(&mut player.inventory, slots, output.item, output.quantity).is_err() {
        state.log.push(String::from("Your inventory is full."));
        return Ok(());
    }
    state
        .log
        .push(format!("You get some {}.", output.item.lowercase()));

    if state.activity == Activity::Mining && dice.chance(rules.gem_chance()) {
        let last = u32::try_from(GEMS.len().saturating_sub(1)).unwrap_or(0);
        let index = usize::try_from(dice.between(0, last)).unwrap_or(0);
        if let Some(gem) = GEMS.get(index).copied() {
            let player = &mut state.player;
            if inventory::add_item(&mut player.inventory, slots, gem, 1).is_ok() {
                state.log.push(format!(
                    "You find a rare {}!",
                    gem.name().replacen("Uncut ", "", 1).to_lowercase()
                ));
            }
        }
    }
    Ok(())
}

/// Cook one unit of the first raw food carried.
///
/// Burn chance is `1 - clamp01((level - req) / (stop - req))`; a burn
/// yields the burnt item and no experience.
fn cook_tick<D: Dice + ?Sized>(state: &mut GameState, rules: &GameRules, dice: &mut D) -> ActionResult {
    let Some((raw, recipe)) = first_cookable(&state.player.inventory) else {
        state
            .log
            .push(String::from("You've run out of things to cook."));
        go_idle(state);
        return Ok(());
    };
    let RecipeKind::Cooking {
        burnt,
        stop_burn_level,
    } = recipe.kind
    else {
        return Err(ActionError::Ignored);
    };

    let level = skills::level(&state.player, Skill::Cooking);
    let success = success_fraction(level, recipe.level_req, stop_burn_level);
    let burn_chance = Decimal::ONE.saturating_sub(success);

    let player = &mut state.player;
    let slots = Some(rules.inventory_slots);
    inventory::remove_item(&mut player.inventory, raw, 1);

    if dice.chance(burn_chance) {
        state
            .log
            .push(String::from("You accidentally burn the fish."));
        if inventory::add_item(&mut state.player.inventory, slots, burnt, 1).is_err() {
            state
                .log
                .push(String::from("Your inventory is full, so you drop the burnt fish."));
        }
        return Ok(());
    }

    state.log.push(format!(
        "You successfully cook the {}.",
        raw.lowercase().replacen("raw ", "", 1)
    ));
    skills::grant_xp(&mut state.player, Skill::Cooking, recipe.xp)?;
    if let Some(cooked) = recipe.output {
        if inventory::add_item(&mut state.player.inventory, slots, cooked.item, cooked.quantity)
            .is_err()
        {
            state
                .log
                .push(String::from("Your inventory is full, so you drop the cooked fish."));
        }
    }
    Ok(())
}

/// `clamp01((level - req) / (stop - req))`.
fn success_fraction(level: u32, level_req: u32, stop_level: u32) -> Decimal {
    let progress = Decimal::from(level).saturating_sub(Decimal::from(level_req));
    let span = Decimal::from(stop_level).saturating_sub(Decimal::from(level_req));
    progress
        .checked_div(span)
        .unwrap_or(Decimal::ONE)
        .clamp(Decimal::ZERO, Decimal::ONE)
}

/// Cast one enchantment.
fn enchant_tick(state: &mut GameState, key: &str, rules: &GameRules) -> ActionResult {
    let Some((spell, target, product)) = enchantment(key) else {
        go_idle(state);
        return Ok(());
    };

    let player = &mut state.player;
    if !has_ingredients(&player.inventory, spell.runes)
        || !inventory::has_item(&player.inventory, target, 1)
    {
        state.log.push(String::from("You've run out of materials."));
        go_idle(state);
        return Ok(());
    }

    for rune in spell.runes {
        inventory::remove_item(&mut player.inventory, rune.item, rune.quantity);
    }
    inventory::remove_item(&mut player.inventory, target, 1);
    skills::grant_xp(player, Skill::Magic, spell.xp)?;

    if inventory::add_item(&mut player.inventory, Some(rules.inventory_slots), product, 1).is_err() {
        state.log.push(String::from(
            "Your inventory is full, so you drop the enchanted item.",
        ));
    }
    state.log.push(format!("You enchant the {target}."));
    Ok(())
}

/// The thieving extras of a recipe.
struct Heist {
    damage: u32,
    success_rate: Decimal,
    loot: Item,
    loot_range: (u32, u32),
}

/// Thieving success chance: `min(0.99, rate + (level - req) * 0.005)`.
pub fn thieving_chance(success_rate: Decimal, level: u32, level_req: u32) -> Decimal {
    let above = Decimal::from(level).saturating_sub(Decimal::from(level_req));
    success_rate
        .saturating_add(above.saturating_mul(THIEVING_CHANCE_PER_LEVEL))
        .min(MAX_THIEVING_CHANCE)
}

/// One attempt at stealing.
fn thieve_tick<D: Dice + ?Sized>(
    state: &mut GameState,
    recipe: &Recipe,
    heist: &Heist,
    rules: &GameRules,
    dice: &mut D,
) -> ActionResult {
    let level = skills::level(&state.player, Skill::Thieving);
    let chance = thieving_chance(heist.success_rate, level, recipe.level_req);

    if dice.unit() <= chance {
        skills::grant_xp(&mut state.player, Skill::Thieving, recipe.xp)?;
        let xp = recipe.xp.normalize();
        let (low, high) = heist.loot_range;
        let amount = dice.between(low, high);
        if amount == 0 {
            state.log.push(format!("Success! (+{xp} XP)"));
            return Ok(());
        }
        let stored = inventory::add_item(
            &mut state.player.inventory,
            Some(rules.inventory_slots),
            heist.loot,
            amount,
        )
        .is_ok();
        state.log.push(format!(
            "Success! You steal {amount}x {}. (+{xp} XP)",
            heist.loot
        ));
        if !stored {
            state.log.push(String::from(
                "Your inventory is full, so you drop what you stole.",
            ));
        }
        return Ok(());
    }

    state.player.hp = state.player.hp.saturating_sub(heist.damage);
    state.log.push(format!(
        "You fail! You are caught and take {} damage.",
        heist.damage
    ));
    if state.player.hp == 0 {
        state.log.push(String::from(
            "You have been knocked out! You wake up feeling weak.",
        ));
        vitals::recover(state);
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use simplescape_types::SkillXp;

    use crate::dice::ScriptedDice;
    use crate::state::new_game;

    fn with_items(items: &[(Item, u32)]) -> GameState {
        let mut state = new_game();
        for (item, quantity) in items {
            state.player.inventory.push(ItemStack::new(*item, *quantity));
        }
        state
    }

    fn set_level_xp(state: &mut GameState, skill: Skill, xp: Decimal) {
        state.player.skills.insert(skill, SkillXp::new(xp));
    }

    fn last_line(state: &GameState) -> &str {
        state.log.last().map_or("", String::as_str)
    }

    #[test]
    fn gathering_below_level_is_rejected() {
        let mut state = new_game();
        let result = start(&mut state, Activity::Woodcutting, Some("oak"));
        assert_eq!(
            result,
            Err(Rejection::GatheringLevel {
                level: 15,
                skill: Skill::Woodcutting
            }
            .into())
        );
    }

    #[test]
    fn gathering_start_and_tick() {
        let rules = GameRules::default();
        let mut dice = ScriptedDice::new();
        let mut state = new_game();
        start(&mut state, Activity::Woodcutting, Some("normal")).unwrap();
        assert_eq!(state.activity, Activity::Woodcutting);
        assert_eq!(state.current_resource_key.as_deref(), Some("normal"));
        assert_eq!(last_line(&state), "You begin woodcutting...");

        tick(&mut state, &rules, &mut dice).unwrap();
        assert_eq!(inventory::quantity_of(&state.player.inventory, Item::Logs), 1);
        assert_eq!(skills::xp(&state.player, Skill::Woodcutting), dec!(25));
        assert_eq!(last_line(&state), "You get some logs.");
    }

    #[test]
    fn unknown_key_does_nothing_interesting() {
        let mut state = new_game();
        assert_eq!(
            start(&mut state, Activity::Mining, Some("adamantite")),
            Err(Rejection::NothingInteresting.into())
        );
        assert_eq!(
            start(&mut state, Activity::Mining, None),
            Err(Rejection::NoTarget.into())
        );
    }

    #[test]
    fn full_inventory_still_grants_gathering_xp() {
        let rules = GameRules {
            inventory_slots: 5,
            ..GameRules::default()
        };
        let mut dice = ScriptedDice::new();
        let mut state = new_game();
        start(&mut state, Activity::Mining, Some("copper")).unwrap();
        tick(&mut state, &rules, &mut dice).unwrap();
        assert_eq!(last_line(&state), "Your inventory is full.");
        assert_eq!(skills::xp(&state.player, Skill::Mining), dec!(17.5));
        assert_eq!(state.activity, Activity::Mining);
    }

    #[test]
    fn mining_can_find_a_gem() {
        let rules = GameRules::default();
        let mut dice = ScriptedDice::new()
            .with_units([dec!(0.01)])
            .with_values([2]);
        let mut state = new_game();
        start(&mut state, Activity::Mining, Some("tin")).unwrap();
        tick(&mut state, &rules, &mut dice).unwrap();
        assert_eq!(inventory::quantity_of(&state.player.inventory, Item::TinOre), 1);
        assert_eq!(inventory::quantity_of(&state.player.inventory, Item::UncutRuby), 1);
        assert_eq!(last_line(&state), "You find a rare ruby!");
    }

    #[test]
    fn cooking_burns_below_stop_level() {
        let rules = GameRules::default();
        let mut dice = ScriptedDice::new().with_units([dec!(0.5)]);
        let mut state = with_items(&[(Item::RawFish, 1)]);
        start(&mut state, Activity::Cooking, None).unwrap();
        assert_eq!(state.current_resource_key, None);
        tick(&mut state, &rules, &mut dice).unwrap();
        assert_eq!(inventory::quantity_of(&state.player.inventory, Item::RawFish), 0);
        assert_eq!(inventory::quantity_of(&state.player.inventory, Item::BurntFish), 1);
        assert_eq!(skills::xp(&state.player, Skill::Cooking), Decimal::ZERO);
        assert_eq!(last_line(&state), "You accidentally burn the fish.");

        tick(&mut state, &rules, &mut dice).unwrap();
        assert_eq!(last_line(&state), "You've run out of things to cook.");
        assert_eq!(state.activity, Activity::Idle);
    }

    #[test]
    fn cooking_never_burns_past_stop_level() {
        let rules = GameRules::default();
        let mut dice = ScriptedDice::new().with_units([Decimal::ZERO]);
        let mut state = with_items(&[(Item::RawTrout, 1)]);
        set_level_xp(&mut state, Skill::Cooking, dec!(110000));
        start(&mut state, Activity::Cooking, None).unwrap();
        tick(&mut state, &rules, &mut dice).unwrap();
        assert_eq!(last_line(&state), "You successfully cook the trout.");
        assert_eq!(inventory::quantity_of(&state.player.inventory, Item::CookedTrout), 1);
    }

    #[test]
    fn cooking_level_checks_first_raw_food() {
        let mut state = with_items(&[(Item::RawLobster, 1), (Item::RawFish, 1)]);
        assert_eq!(
            start(&mut state, Activity::Cooking, None),
            Err(Rejection::CookingLevel {
                level: 40,
                raw: Item::RawLobster
            }
            .into())
        );
        let mut empty = new_game();
        assert_eq!(
            start(&mut empty, Activity::Cooking, None),
            Err(Rejection::NothingToCook.into())
        );
    }

    #[test]
    fn success_fraction_is_clamped() {
        assert_eq!(success_fraction(1, 1, 34), Decimal::ZERO);
        assert_eq!(success_fraction(50, 1, 34), Decimal::ONE);
        assert_eq!(success_fraction(25, 15, 50), dec!(10) / dec!(35));
    }

    #[test]
    fn firemaking_checks_and_burns() {
        let rules = GameRules::default();
        let mut dice = ScriptedDice::new();
        let mut state = new_game();
        assert_eq!(
            start(&mut state, Activity::Firemaking, Some("logs")),
            Err(Rejection::NoLogs { logs: Item::Logs }.into())
        );
        state.player.inventory.push(ItemStack::new(Item::Logs, 1));
        start(&mut state, Activity::Firemaking, Some("logs")).unwrap();
        assert_eq!(last_line(&state), "You begin to light the logs...");
        tick(&mut state, &rules, &mut dice).unwrap();
        assert_eq!(last_line(&state), "You burn the logs.");
        assert_eq!(skills::xp(&state.player, Skill::Firemaking), dec!(40));
        tick(&mut state, &rules, &mut dice).unwrap();
        assert_eq!(last_line(&state), "You've run out of logs.");
        assert_eq!(state.activity, Activity::Idle);
        assert_eq!(state.current_resource_key, None);
    }

    #[test]
    fn firemaking_needs_tinderbox() {
        let mut state = with_items(&[(Item::Logs, 1)]);
        inventory::remove_item(&mut state.player.inventory, Item::Tinderbox, 1);
        assert_eq!(
            start(&mut state, Activity::Firemaking, Some("logs")),
            Err(Rejection::NoTinderbox.into())
        );
    }

    #[test]
    fn crafting_leather_needs_tools() {
        let mut state = with_items(&[(Item::Leather, 1)]);
        inventory::remove_item(&mut state.player.inventory, Item::Thread, 1);
        assert_eq!(
            start(&mut state, Activity::Crafting, Some("leatherGloves")),
            Err(Rejection::NeedleAndThread.into())
        );
    }

    #[test]
    fn crafting_tick_makes_item() {
        let rules = GameRules::default();
        let mut dice = ScriptedDice::new();
        let mut state = with_items(&[(Item::Leather, 1)]);
        start(&mut state, Activity::Crafting, Some("leatherGloves")).unwrap();
        tick(&mut state, &rules, &mut dice).unwrap();
        assert_eq!(last_line(&state), "You make some leather gloves.");
        assert_eq!(inventory::quantity_of(&state.player.inventory, Item::LeatherGloves), 1);
        assert!(inventory::has_item(&state.player.inventory, Item::Needle, 1));
        tick(&mut state, &rules, &mut dice).unwrap();
        assert_eq!(last_line(&state), "You've run out of materials.");
    }

    #[test]
    fn smithing_messages() {
        let rules = GameRules::default();
        let mut dice = ScriptedDice::new();
        let mut state = with_items(&[(Item::Ore, 1), (Item::TinOre, 1)]);
        assert_eq!(
            start(&mut state, Activity::Smithing, Some("iron")),
            Err(Rejection::SmithingLevel {
                level: 15,
                name: "Iron Bar"
            }
            .into())
        );
        start(&mut state, Activity::Smithing, Some("bronze")).unwrap();
        assert_eq!(last_line(&state), "You start to make a bronze bar...");
        tick(&mut state, &rules, &mut dice).unwrap();
        assert_eq!(last_line(&state), "You make a bronze bar.");
        tick(&mut state, &rules, &mut dice).unwrap();
        assert_eq!(
            last_line(&state),
            "You've run out of materials to make a bronze bar."
        );
    }

    #[test]
    fn full_inventory_drops_output_but_keeps_xp() {
        let rules = GameRules {
            inventory_slots: 6,
            ..GameRules::default()
        };
        let mut dice = ScriptedDice::new();
        let mut state = with_items(&[(Item::Logs, 2)]);
        start(&mut state, Activity::Fletching, Some("arrowShafts")).unwrap();
        tick(&mut state, &rules, &mut dice).unwrap();
        assert_eq!(inventory::quantity_of(&state.player.inventory, Item::ArrowShafts), 0);
        assert_eq!(inventory::quantity_of(&state.player.inventory, Item::Logs), 1);
        assert_eq!(skills::xp(&state.player, Skill::Fletching), dec!(5));
        let tail: Vec<&str> = state.log.iter().rev().take(2).map(String::as_str).collect();
        assert_eq!(
            tail,
            vec!["You fletch a arrow shafts.", "Your inventory is full, so you drop the item."]
        );
    }

    #[test]
    fn enchanting_consumes_runes_and_target() {
        let rules = GameRules::default();
        let mut dice = ScriptedDice::new();
        let mut state = with_items(&[
            (Item::WaterRune, 1),
            (Item::CosmicRune, 1),
            (Item::SapphireRing, 1),
        ]);
        assert_eq!(
            start(&mut state, Activity::Enchanting, Some("enchantSapphireRing")),
            Err(Rejection::MagicLevel {
                level: 7,
                spell: "Enchant Sapphire Ring"
            }
            .into())
        );
        set_level_xp(&mut state, Skill::Magic, dec!(650));
        assert_eq!(
            start(&mut state, Activity::Enchanting, Some("windStrike")),
            Err(Rejection::NothingInteresting.into())
        );
        start(&mut state, Activity::Enchanting, Some("enchantSapphireRing")).unwrap();
        tick(&mut state, &rules, &mut dice).unwrap();
        assert_eq!(last_line(&state), "You enchant the Sapphire Ring.");
        assert_eq!(inventory::quantity_of(&state.player.inventory, Item::WaterRune), 0);
        assert_eq!(skills::xp(&state.player, Skill::Magic), dec!(667.5));
        tick(&mut state, &rules, &mut dice).unwrap();
        assert_eq!(last_line(&state), "You've run out of materials.");
        assert_eq!(state.activity, Activity::Idle);
    }

    #[test]
    fn thieving_chance_is_capped() {
        assert_eq!(thieving_chance(dec!(0.85), 1, 1), dec!(0.85));
        assert_eq!(thieving_chance(dec!(0.85), 11, 1), dec!(0.90));
        assert_eq!(thieving_chance(dec!(0.85), 99, 1), dec!(0.99));
    }

    #[test]
    fn thieving_success_and_failure() {
        let rules = GameRules::default();
        let mut state = new_game();
        start(&mut state, Activity::Thieving, Some("man")).unwrap();
        assert_eq!(last_line(&state), "You start to look for an opportunity...");

        let mut dice = ScriptedDice::new().with_units([dec!(0.5)]).with_values([5]);
        tick(&mut state, &rules, &mut dice).unwrap();
        assert_eq!(last_line(&state), "Success! You steal 5x Gold piece. (+8 XP)");
        assert_eq!(inventory::quantity_of(&state.player.inventory, Item::GoldPiece), 505);

        let mut dice = ScriptedDice::new().with_units([dec!(0.95)]);
        tick(&mut state, &rules, &mut dice).unwrap();
        assert_eq!(last_line(&state), "You fail! You are caught and take 1 damage.");
        assert_eq!(state.player.hp, 9);
        assert_eq!(state.activity, Activity::Thieving);
    }

    #[test]
    fn thieving_knockout_is_a_soft_death() {
        let rules = GameRules::default();
        let mut state = new_game();
        state.player.hp = 1;
        state.player.active_prayers.insert(simplescape_types::Prayer::ThickSkin);
        start(&mut state, Activity::Thieving, Some("man")).unwrap();
        let mut dice = ScriptedDice::new().with_units([dec!(0.99)]);
        tick(&mut state, &rules, &mut dice).unwrap();
        assert_eq!(
            last_line(&state),
            "You have been knocked out! You wake up feeling weak."
        );
        assert_eq!(state.player.hp, 9);
        assert!(state.player.active_prayers.is_empty());
        assert_eq!(state.activity, Activity::Idle);
    }

    #[test]
    fn tick_without_recipe_goes_idle() {
        let rules = GameRules::default();
        let mut dice = ScriptedDice::new();
        let mut state = new_game();
        state.activity = Activity::Smithing;
        state.current_resource_key = Some(String::from("nonsense"));
        tick(&mut state, &rules, &mut dice).unwrap();
        assert_eq!(state.activity, Activity::Idle);
        assert_eq!(state.current_resource_key, None);
    }
}
