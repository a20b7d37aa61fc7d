//! Tunable rules applied by the reducer.
//!
//! [`GameRules`] bundles every numeric rule that is not part of the static
//! game data so that callers (the session, tests) can override defaults.
//! The session reads it from the `rules` section of
//! `simplescape-config.yaml`.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Numeric rules for collections, prayer, trading, and rolls.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameRules {
    /// Inventory slot capacity (default: 28).
    pub inventory_slots: usize,

    /// Bank slot capacity (default: 56).
    pub bank_slots: usize,

    /// Interval between prayer ticks in milliseconds (default: 3000).
    ///
    /// Each prayer tick drains `drain_per_minute * prayer_tick_ms / 60000`
    /// points per active prayer.
    pub prayer_tick_ms: u64,

    /// Share of an item's value paid when selling, in percent (default: 40).
    pub sell_price_pct: u32,

    /// Chance of an uncut gem on each mining tick, in percent (default: 2).
    pub gem_chance_pct: u32,

    /// Boost applied to a level by its matching prayer, in percent
    /// (default: 5).
    pub prayer_bonus_pct: u32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            inventory_slots: 28,
            bank_slots: 56,
            prayer_tick_ms: 3000,
            sell_price_pct: 40,
            gem_chance_pct: 2,
            prayer_bonus_pct: 5,
        }
    }
}

impl GameRules {
    /// Multiplier applied to a level while its prayer is active (1.05).
    pub fn prayer_multiplier(&self) -> Decimal {
        Decimal::ONE.saturating_add(Decimal::new(i64::from(self.prayer_bonus_pct), 2))
    }

    /// Gem chance as a probability (0.02).
    pub fn gem_chance(&self) -> Decimal {
        Decimal::new(i64::from(self.gem_chance_pct), 2)
    }

    /// Fraction of a minute covered by one prayer tick (0.05).
    pub fn prayer_tick_fraction(&self) -> Decimal {
        Decimal::from(self.prayer_tick_ms)
            .checked_div(Decimal::from(60_000_u32))
            .unwrap_or(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn defaults_match_the_classic_rules() {
        let rules = GameRules::default();
        assert_eq!(rules.inventory_slots, 28);
        assert_eq!(rules.bank_slots, 56);
        assert_eq!(rules.prayer_multiplier(), dec!(1.05));
        assert_eq!(rules.gem_chance(), dec!(0.02));
        assert_eq!(rules.prayer_tick_fraction(), dec!(0.05));
    }
}
