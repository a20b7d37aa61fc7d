//! Experience, levels, and level-up notifications.
//!
//! Levels are derived from experience through a fixed 99-level table built
//! once from the classic growth curve:
//!
//! ```text
//! diff(l)   = floor(l + 300 * 2^(l / 7))
//! table[l]  = floor(sum(diff(1..=l)) / 4)
//! ```
//!
//! `level(xp)` is the index of the first threshold above `xp`, capped at 99.
//! The seventh roots of two are kept as exact decimal constants so the table
//! is computed without floating point.

use std::sync::LazyLock;

use rust_decimal::Decimal;
use simplescape_types::{Player, Skill, SkillXp};

use crate::error::{PlayerError, overflow};

/// Highest reachable level.
pub const MAX_LEVEL: u32 = 99;

/// Hit points and prayer pool are `level + 9`.
pub const POOL_OFFSET: u32 = 9;

/// `2^(r / 7)` for `r` in `0..7`, scaled by `10^18`.
const SEVENTH_ROOTS_OF_TWO: [i64; 7] = [
    1_000_000_000_000_000_000,
    1_104_089_513_673_812_338,
    1_219_013_654_204_475_441,
    1_345_900_192_632_356_132,
    1_485_994_289_136_948_425,
    1_640_670_712_015_275_862,
    1_811_447_328_527_813_343,
];

/// Decimal places of [`SEVENTH_ROOTS_OF_TWO`].
const ROOT_SCALE: u32 = 18;

/// Cumulative experience needed for each level; index `l` is the threshold
/// for level `l + 1`.
static XP_TABLE: LazyLock<Vec<Decimal>> = LazyLock::new(|| {
    let three_hundred = Decimal::from(300_u32);
    let quarter = Decimal::new(25, 2); // 0.25
    let roots = SEVENTH_ROOTS_OF_TWO.map(|mantissa| Decimal::new(mantissa, ROOT_SCALE));

    let mut table = vec![Decimal::ZERO];
    let mut octave = Decimal::ONE;
    let mut total = Decimal::ZERO;
    for (level, root) in (1..=MAX_LEVEL).zip(roots.iter().cycle().skip(1)) {
        if *root == Decimal::ONE {
            octave = octave.saturating_mul(Decimal::TWO);
        }
        let growth = three_hundred.saturating_mul(octave).saturating_mul(*root);
        let diff = Decimal::from(level).saturating_add(growth).floor();
        total = total.saturating_add(diff);
        table.push(total.saturating_mul(quarter).floor());
    }
    table
});

/// The experience threshold table.
pub fn xp_table() -> &'static [Decimal] {
    XP_TABLE.as_slice()
}

/// Level for an experience total.
pub fn level_for_xp(xp: Decimal) -> u32 {
    XP_TABLE
        .iter()
        .position(|threshold| *threshold > xp)
        .and_then(|index| u32::try_from(index).ok())
        .unwrap_or(MAX_LEVEL)
}

/// Experience held in `skill`. Missing skills count as zero.
pub fn xp(player: &Player, skill: Skill) -> Decimal {
    player.skills.get(&skill).map_or(Decimal::ZERO, |entry| entry.xp)
}

/// Current level in `skill`.
pub fn level(player: &Player, skill: Skill) -> u32 {
    level_for_xp(xp(player, skill))
}

/// `level + 9`, the pool size derived from a level.
pub const fn pool_for_level(level: u32) -> u32 {
    level.saturating_add(POOL_OFFSET)
}

/// Maximum hit points.
pub fn max_hp(player: &Player) -> u32 {
    pool_for_level(level(player, Skill::Hitpoints))
}

/// Add `amount` experience to `skill`.
pub fn grant_xp(player: &mut Player, skill: Skill, amount: Decimal) -> Result<(), PlayerError> {
    if amount.is_zero() {
        return Ok(());
    }
    let entry = player.skills.entry(skill).or_insert_with(SkillXp::default);
    entry.xp = entry
        .xp
        .checked_add(amount)
        .ok_or_else(|| overflow("skill experience in grant_xp"))?;
    Ok(())
}

/// Add a whole number of experience points to `skill`.
pub fn grant_points(player: &mut Player, skill: Skill, amount: u32) -> Result<(), PlayerError> {
    grant_xp(player, skill, Decimal::from(amount))
}

/// Raise the prayer pool ceiling to match the Prayer level. Never lowers it.
pub fn sync_prayer_pool(player: &mut Player) {
    let candidate = Decimal::from(pool_for_level(level(player, Skill::Prayer)));
    if candidate > player.max_prayer_points {
        player.max_prayer_points = candidate;
    }
}

/// Log every level gained between `before` and `after`.
///
/// A Hitpoints gain also reports the max hit point increase. A Prayer gain
/// reports and applies the larger prayer pool.
pub fn announce_level_ups(before: &Player, after: &mut Player, log: &mut Vec<String>) {
    for skill in Skill::ALL {
        let old = level(before, skill);
        let new = level(after, skill);
        if new <= old {
            continue;
        }
        log.push(format!(
            "Congratulations! You've reached level {new} in {skill}!"
        ));
        match skill {
            Skill::Hitpoints => {
                let gained = pool_for_level(new).saturating_sub(pool_for_level(old));
                log.push(format!("Your max HP increased by {gained}!"));
            }
            Skill::Prayer => {
                sync_prayer_pool(after);
                log.push(String::from("Your max Prayer Points increased!"));
            }
            _ => {}
        }
    }
}
