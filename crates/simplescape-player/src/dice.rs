//! Random rolls used by transitions.
//!
//! Every roll goes through the [`Dice`] trait so a transition stays a pure
//! function of `(state, command, dice)`. Any [`rand::Rng`] is a `Dice`; tests
//! that need an exact outcome use [`ScriptedDice`].

use std::collections::VecDeque;

use rust_decimal::Decimal;

/// Resolution of a unit roll: six decimal places.
const UNIT_STEPS: u32 = 1_000_000;

/// Source of random rolls.
pub trait Dice {
    /// A value in `[0, 1)`.
    fn unit(&mut self) -> Decimal;

    /// A value in `low..=high`. Returns `low` when `high < low`.
    fn between(&mut self, low: u32, high: u32) -> u32;

    /// `true` with probability `chance`.
    fn chance(&mut self, chance: Decimal) -> bool {
        self.unit() < chance
    }
}

impl<R: rand::Rng + ?Sized> Dice for R {
    fn unit(&mut self) -> Decimal {
        let step = self.random_range(0..UNIT_STEPS);
        Decimal::new(i64::from(step), 6)
    }

    fn between(&mut self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        self.random_range(low..=high)
    }
}

/// Dice that replay queued rolls.
///
/// Unit rolls and ranged rolls come from separate queues. An empty unit
/// queue yields `0`; an empty range queue yields the range's low end.
/// Queued range values are clamped into the requested range.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    units: VecDeque<Decimal>,
    values: VecDeque<u32>,
}

impl ScriptedDice {
    /// Empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue unit rolls, in order.
    #[must_use]
    pub fn with_units(mut self, units: impl IntoIterator<Item = Decimal>) -> Self {
        self.units.extend(units);
        self
    }

    /// Queue range rolls, in order.
    #[must_use]
    pub fn with_values(mut self, values: impl IntoIterator<Item = u32>) -> Self {
        self.values.extend(values);
        self
    }

    /// Rolls not yet consumed, as `(units, values)`.
    pub fn remaining(&self) -> (usize, usize) {
        (self.units.len(), self.values.len())
    }
}

impl Dice for ScriptedDice {
    fn unit(&mut self) -> Decimal {
        self.units.pop_front().unwrap_or(Decimal::ZERO)
    }

    fn between(&mut self, low: u32, high: u32) -> u32 {
        self.values
            .pop_front()
            .map_or(low, |value| value.clamp(low, high.max(low)))
    }
}
