//! Prayer definitions.

use rust_decimal::Decimal;
use simplescape_types::{Prayer, Skill};

/// Static definition of a prayer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrayerDef {
    /// Minimum Prayer level to activate.
    pub level_req: u32,
    /// Prayer points drained per minute while active.
    pub drain_per_minute: Decimal,
    /// The combat skill whose effective level is boosted.
    pub boosts: Skill,
    /// Prayer book text.
    pub description: &'static str,
}

/// Look up a prayer.
pub const fn prayer_def(prayer: Prayer) -> PrayerDef {
    match prayer {
        Prayer::ThickSkin => PrayerDef {
            level_req: 1,
            drain_per_minute: Decimal::ONE,
            boosts: Skill::Defence,
            description: "Increases your Defence by 5%.",
        },
        Prayer::BurstOfStrength => PrayerDef {
            level_req: 4,
            drain_per_minute: Decimal::ONE,
            boosts: Skill::Strength,
            description: "Increases your Strength by 5%.",
        },
        Prayer::ClarityOfThought => PrayerDef {
            level_req: 7,
            drain_per_minute: Decimal::ONE,
            boosts: Skill::Attack,
            description: "Increases your Attack by 5%.",
        },
    }
}

/// The prayer that boosts `skill`, if any.
pub fn prayer_boosting(skill: Skill) -> Option<Prayer> {
    Prayer::ALL
        .into_iter()
        .find(|prayer| prayer_def(*prayer).boosts == skill)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlock_levels() {
        assert_eq!(prayer_def(Prayer::ThickSkin).level_req, 1);
        assert_eq!(prayer_def(Prayer::BurstOfStrength).level_req, 4);
        assert_eq!(prayer_def(Prayer::ClarityOfThought).level_req, 7);
    }

    #[test]
    fn each_combat_skill_has_one_prayer() {
        assert_eq!(prayer_boosting(Skill::Defence), Some(Prayer::ThickSkin));
        assert_eq!(prayer_boosting(Skill::Strength), Some(Prayer::BurstOfStrength));
        assert_eq!(prayer_boosting(Skill::Attack), Some(Prayer::ClarityOfThought));
        assert_eq!(prayer_boosting(Skill::Ranged), None);
    }
}
