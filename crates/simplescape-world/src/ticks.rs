//! Fixed tick intervals per activity.
//!
//! Gathering activities are paced by their spot's
//! [`RecipeKind::Gathering`](crate::RecipeKind::Gathering) duration instead.

use simplescape_types::Activity;

/// Interval for activities without a dedicated rate, in milliseconds.
pub const DEFAULT_TICK_MS: u64 = 2000;

/// Default interval between ticks of `activity`, in milliseconds.
pub const fn base_tick_ms(activity: Activity) -> u64 {
    match activity {
        Activity::Combat | Activity::Fletching | Activity::Crafting => 1800,
        Activity::Cooking | Activity::Firemaking => 2400,
        Activity::Smithing => 2800,
        Activity::Thieving => 2200,
        Activity::Enchanting
        | Activity::Idle
        | Activity::Woodcutting
        | Activity::Mining
        | Activity::Fishing => DEFAULT_TICK_MS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_rates() {
        assert_eq!(base_tick_ms(Activity::Combat), 1800);
        assert_eq!(base_tick_ms(Activity::Smithing), 2800);
        assert_eq!(base_tick_ms(Activity::Thieving), 2200);
        assert_eq!(base_tick_ms(Activity::Enchanting), 2000);
    }
}
