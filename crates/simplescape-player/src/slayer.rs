//! Slayer assignments and kill bookkeeping.

use simplescape_types::{GameState, MonsterKey, Player, Skill, SlayerTask};
use simplescape_world::{VANNAKA, monster};

use crate::actions::validation::Rejection;
use crate::dice::Dice;
use crate::error::{ActionResult, PlayerError};
use crate::skills;

/// Ask the slayer master for a new task.
///
/// Allowed only when there is no task or the current one is finished. The
/// monster is drawn uniformly from the assignments open at the player's
/// Slayer level, the kill count uniformly from that assignment's range.
pub fn assign<D: Dice + ?Sized>(state: &mut GameState, dice: &mut D) -> ActionResult {
    if state.player.slayer_task.is_some_and(|task| task.remaining > 0) {
        return Err(Rejection::SlayerTaskActive.into());
    }

    let level = skills::level(&state.player, Skill::Slayer);
    let eligible = VANNAKA.eligible(level);
    let last = u32::try_from(eligible.len().saturating_sub(1)).unwrap_or(0);
    let index = usize::try_from(dice.between(0, last)).unwrap_or(0);
    let assignment = eligible.get(index).copied().ok_or(Rejection::SlayerLevel)?;

    let (low, high) = assignment.amount;
    let amount = dice.between(low, high);
    state.player.slayer_task = Some(SlayerTask {
        monster_key: assignment.monster,
        initial_amount: amount,
        remaining: amount,
    });
    state.log.push(format!(
        "{} has assigned you to kill {amount} {}s.",
        VANNAKA.name,
        monster(assignment.monster).name
    ));
    Ok(())
}

/// Count a kill of `key` against the current task.
///
/// Grants Slayer experience equal to the monster's maximum hit points. The
/// completion line is logged once, on the kill that reaches zero.
pub fn record_kill(
    player: &mut Player,
    key: MonsterKey,
    max_hp: u32,
    log: &mut Vec<String>,
) -> Result<(), PlayerError> {
    let Some(task) = player.slayer_task.as_mut() else {
        return Ok(());
    };
    if task.monster_key != key || task.remaining == 0 {
        return Ok(());
    }

    task.remaining = task.remaining.saturating_sub(1);
    let finished = task.remaining == 0;
    skills::grant_points(player, Skill::Slayer, max_hp)?;
    log.push(format!("You receive {max_hp} Slayer XP."));
    if finished {
        log.push(String::from(
            "You have completed your slayer task! Return to a slayer master for a new one.",
        ));
    }
    Ok(())
}
