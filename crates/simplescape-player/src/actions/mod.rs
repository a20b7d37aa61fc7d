//! The command reducer.
//!
//! [`apply`] is the single entry point: it takes the current state and a
//! command and returns the next state. It never mutates its input and never
//! fails. Every command runs against a draft copy; the outcome decides
//! what is kept:
//!
//! - success keeps the draft and appends any level-up announcements,
//! - a [`Rejection`] keeps the input state plus one log line,
//! - an ignored command returns the input state unchanged,
//! - an internal failure keeps the input state plus an error line.
//!
//! # Submodules
//!
//! - [`handlers`] -- Routes each command to its subsystem.
//! - [`validation`] -- Precondition checks and the rejection messages.

pub mod handlers;
pub mod validation;

use simplescape_types::{Command, GameState};
use tracing::{debug, warn};

use crate::config::GameRules;
use crate::dice::Dice;
use crate::error::ActionError;
use crate::skills;

pub use validation::Rejection;

/// Apply one command to `state` and return the resulting state.
pub fn apply<D: Dice + ?Sized>(
    state: &GameState,
    command: &Command,
    rules: &GameRules,
    dice: &mut D,
) -> GameState {
    let mut draft = state.clone();
    match handlers::dispatch(&mut draft, command, rules, dice) {
        Ok(()) => {
            if !matches!(command, Command::LoadGame(_)) {
                let mut announcements = Vec::new();
                skills::announce_level_ups(&state.player, &mut draft.player, &mut announcements);
                draft.log.append(&mut announcements);
            }
            if draft.activity != state.activity {
                debug!(
                    command = command.kind(),
                    from = ?state.activity,
                    to = ?draft.activity,
                    "activity changed"
                );
            }
            draft
        }
        Err(ActionError::Ignored) => state.clone(),
        Err(ActionError::Rejected(reason)) => {
            debug!(command = command.kind(), %reason, "command rejected");
            let mut next = state.clone();
            next.log.push(reason.to_string());
            next
        }
        Err(ActionError::Internal(err)) => {
            warn!(command = command.kind(), error = %err, "command failed");
            let mut next = state.clone();
            next.log.push(format!("Error: {err}"));
            next
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use simplescape_types::{
        Activity, ActivityRequest, Item, ItemStack, MonsterKey, SaveSnapshot, Skill, SkillXp,
    };

    use crate::dice::ScriptedDice;
    use crate::state::new_game;

    fn start(activity: Activity, key: Option<&str>) -> Command {
        Command::StartActivity(ActivityRequest {
            activity,
            monster_key: None,
            resource_key: key.map(String::from),
        })
    }

    #[test]
    fn input_is_never_mutated() {
        let rules = GameRules::default();
        let mut dice = ScriptedDice::new();
        let state = new_game();
        let before = state.clone();
        let next = apply(&state, &start(Activity::Woodcutting, Some("normal")), &rules, &mut dice);
        assert_eq!(state, before);
        assert_eq!(next.activity, Activity::Woodcutting);
    }

    #[test]
    fn rejection_appends_exactly_one_line() {
        let rules = GameRules::default();
        let mut dice = ScriptedDice::new();
        let state = new_game();
        let next = apply(&state, &start(Activity::Woodcutting, Some("oak")), &rules, &mut dice);
        assert_eq!(next.player, state.player);
        assert_eq!(next.activity, Activity::Idle);
        assert_eq!(next.log.len(), state.log.len() + 1);
        assert_eq!(
            next.log.last().map(String::as_str),
            Some("You need level 15 Woodcutting to do that.")
        );
    }

    #[test]
    fn ignored_commands_leave_no_trace() {
        let rules = GameRules::default();
        let mut dice = ScriptedDice::new();
        let state = new_game();
        assert_eq!(apply(&state, &Command::GameTick, &rules, &mut dice), state);
        assert_eq!(apply(&state, &Command::PrayerTick, &rules, &mut dice), state);
        assert_eq!(apply(&state, &start(Activity::Idle, None), &rules, &mut dice), state);
    }

    #[test]
    fn busy_player_cannot_start_another_activity() {
        let rules = GameRules::default();
        let mut dice = ScriptedDice::new();
        let state = apply(
            &new_game(),
            &start(Activity::Woodcutting, Some("normal")),
            &rules,
            &mut dice,
        );
        let next = apply(&state, &start(Activity::Mining, Some("copper")), &rules, &mut dice);
        assert_eq!(next.activity, Activity::Woodcutting);
        assert_eq!(next.current_resource_key.as_deref(), Some("normal"));
        assert_eq!(next.log.last().map(String::as_str), Some("You are already busy."));
    }

    #[test]
    fn stop_discards_the_encounter() {
        let rules = GameRules::default();
        let mut dice = ScriptedDice::new();
        let fight = Command::StartActivity(ActivityRequest {
            activity: Activity::Combat,
            monster_key: Some(MonsterKey::Cow),
            resource_key: None,
        });
        let state = apply(&new_game(), &fight, &rules, &mut dice);
        assert!(state.monster.is_some());
        let next = apply(&state, &Command::StopActivity, &rules, &mut dice);
        assert_eq!(next.activity, Activity::Idle);
        assert!(next.monster.is_none());
    }

    #[test]
    fn level_ups_are_announced() {
        let rules = GameRules::default();
        let mut dice = ScriptedDice::new();
        let mut state = new_game();
        state.player.skills.insert(Skill::Woodcutting, SkillXp::new(dec!(70)));
        state.activity = Activity::Woodcutting;
        state.current_resource_key = Some(String::from("normal"));
        let next = apply(&state, &Command::GameTick, &rules, &mut dice);
        assert_eq!(
            next.log.last().map(String::as_str),
            Some("Congratulations! You've reached level 2 in Woodcutting!")
        );
    }

    #[test]
    fn load_replaces_player_and_shop() {
        let rules = GameRules::default();
        let mut dice = ScriptedDice::new();
        let mut saved = new_game();
        saved.player.inventory.push(ItemStack::new(Item::Logs, 3));
        saved.player.skills.insert(Skill::Mining, SkillXp::new(dec!(500)));
        let snapshot = SaveSnapshot {
            player: saved.player.clone(),
            shop_stock: Vec::new(),
        };

        let mut current = new_game();
        current.activity = Activity::Fishing;
        current.current_resource_key = Some(String::from("shrimps"));
        let next = apply(&current, &Command::LoadGame(Box::new(snapshot)), &rules, &mut dice);
        assert_eq!(next.player, saved.player);
        assert!(next.shop_stock.is_empty());
        assert_eq!(next.activity, Activity::Idle);
        assert_eq!(
            next.log.last().map(String::as_str),
            Some("Game loaded successfully.")
        );
    }

    #[test]
    fn examine_and_drop() {
        let rules = GameRules::default();
        let mut dice = ScriptedDice::new();
        let state = new_game();
        let next = apply(&state, &Command::ExamineItem(Item::Logs), &rules, &mut dice);
        assert_eq!(next.log.last().map(String::as_str), Some("A pile of sturdy logs."));

        let next = apply(&state, &Command::DropItem(Item::Tinderbox), &rules, &mut dice);
        assert!(!next.player.inventory.iter().any(|s| s.item == Item::Tinderbox));
        assert_eq!(next.log.last().map(String::as_str), Some("You drop the tinderbox."));
    }
}
