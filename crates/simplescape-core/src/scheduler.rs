//! Activity and prayer timers.
//!
//! The [`Scheduler`] decides when the session should feed itself a
//! [`Command::GameTick`] or a [`Command::PrayerTick`]. It holds no game
//! state of its own beyond the cadence each timer was started for:
//!
//! - The game timer runs while the activity is not idle. Its cadence is
//!   keyed by `(activity, resource key, equipped weapon)`; any change to
//!   that key restarts it with a freshly computed interval.
//! - The prayer timer runs while at least one prayer is active and the
//!   pool is above zero, restarting when the active set changes.
//!
//! Both timers stop as soon as their condition no longer holds. The
//! scheduler never fires anything itself; the session asks it for the
//! next deadline and reports back when a tick has been processed.

use std::collections::BTreeSet;
use std::time::Duration;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use simplescape_player::{GameRules, equipment};
use simplescape_types::{Activity, Command, GameState, Item, Prayer};
use simplescape_world::{RecipeKind, recipe_book};
use tokio::time::Instant;
use tracing::debug;

use crate::config::TickConfig;

/// Which timer came due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickKind {
    /// Advance the current activity.
    Game,
    /// Drain the prayer pool.
    Prayer,
}

impl TickKind {
    /// The command this tick feeds into the reducer.
    pub const fn command(self) -> Command {
        match self {
            Self::Game => Command::GameTick,
            Self::Prayer => Command::PrayerTick,
        }
    }
}

/// What the game timer's interval depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Cadence {
    activity: Activity,
    resource_key: Option<String>,
    weapon: Option<Item>,
}

impl Cadence {
    fn of(state: &GameState) -> Self {
        Self {
            activity: state.activity,
            resource_key: state.current_resource_key.clone(),
            weapon: equipment::weapon(&state.player),
        }
    }
}

/// A running periodic timer.
#[derive(Debug, Clone)]
struct Timer<K> {
    key: K,
    period: Duration,
    next: Instant,
}

impl<K> Timer<K> {
    fn start(key: K, period_ms: u64, now: Instant) -> Self {
        let period = Duration::from_millis(period_ms.max(1));
        Self {
            key,
            period,
            next: now.checked_add(period).unwrap_or(now),
        }
    }

    /// Schedule the following deadline. Missed periods are dropped rather
    /// than replayed back to back.
    fn advance(&mut self, now: Instant) {
        let next = self.next.checked_add(self.period).unwrap_or(now);
        self.next = if next > now {
            next
        } else {
            now.checked_add(self.period).unwrap_or(now)
        };
    }
}

/// Interval between game ticks for the current state, in milliseconds.
///
/// `None` while idle, or for a gathering activity whose spot is unknown.
/// Gathering runs at the spot's base duration shortened by the equipped
/// weapon's speed bonus for the activity's skill; every other activity
/// uses its fixed rate from `ticks`.
pub fn game_tick_ms(state: &GameState, ticks: &TickConfig) -> Option<u64> {
    let activity = state.activity;
    if activity == Activity::Idle {
        return None;
    }
    if !activity.is_gathering() {
        return Some(ticks.interval_ms(activity));
    }

    let key = state.current_resource_key.as_deref()?;
    let recipe = recipe_book(activity)?.get(key)?;
    let RecipeKind::Gathering { duration_ms } = recipe.kind else {
        return Some(ticks.default_ms);
    };

    let bonus = activity
        .skill()
        .and_then(|skill| equipment::speed_bonus(&state.player, skill))
        .unwrap_or(Decimal::ZERO);
    let factor = Decimal::ONE.saturating_sub(bonus).max(Decimal::ZERO);
    Decimal::from(duration_ms)
        .checked_mul(factor)
        .and_then(|ms| ms.round().to_u64())
        .or(Some(duration_ms))
}

/// Whether prayer drain should be running.
pub fn prayer_draining(state: &GameState) -> bool {
    !state.player.active_prayers.is_empty() && state.player.prayer_points > Decimal::ZERO
}

/// Owns the two session timers.
#[derive(Debug, Clone)]
pub struct Scheduler {
    ticks: TickConfig,
    prayer_tick_ms: u64,
    game: Option<Timer<Cadence>>,
    prayer: Option<Timer<BTreeSet<Prayer>>>,
}

impl Scheduler {
    /// A scheduler with both timers stopped.
    pub const fn new(ticks: TickConfig, rules: &GameRules) -> Self {
        Self {
            ticks,
            prayer_tick_ms: rules.prayer_tick_ms,
            game: None,
            prayer: None,
        }
    }

    /// Start, restart, or stop timers to match `state`.
    ///
    /// Call after every transition. A timer whose key is unchanged keeps
    /// its current deadline.
    pub fn reconcile(&mut self, state: &GameState, now: Instant) {
        self.reconcile_game(state, now);
        self.reconcile_prayer(state, now);
    }

    fn reconcile_game(&mut self, state: &GameState, now: Instant) {
        let Some(period_ms) = game_tick_ms(state, &self.ticks) else {
            if self.game.take().is_some() {
                debug!("Game tick stopped");
            }
            return;
        };

        let cadence = Cadence::of(state);
        if self.game.as_ref().is_some_and(|timer| timer.key == cadence) {
            return;
        }
        debug!(
            activity = ?cadence.activity,
            resource_key = cadence.resource_key.as_deref(),
            period_ms,
            "Game tick scheduled"
        );
        self.game = Some(Timer::start(cadence, period_ms, now));
    }

    fn reconcile_prayer(&mut self, state: &GameState, now: Instant) {
        if !prayer_draining(state) {
            if self.prayer.take().is_some() {
                debug!("Prayer drain stopped");
            }
            return;
        }

        let active = &state.player.active_prayers;
        if self.prayer.as_ref().is_some_and(|timer| &timer.key == active) {
            return;
        }
        debug!(prayers = active.len(), period_ms = self.prayer_tick_ms, "Prayer drain scheduled");
        self.prayer = Some(Timer::start(active.clone(), self.prayer_tick_ms, now));
    }

    /// The earliest pending deadline. Game ticks win ties.
    pub fn next_due(&self) -> Option<(Instant, TickKind)> {
        let game = self.game.as_ref().map(|timer| (timer.next, TickKind::Game));
        let prayer = self.prayer.as_ref().map(|timer| (timer.next, TickKind::Prayer));
        match (game, prayer) {
            (Some(game), Some(prayer)) => Some(if prayer.0 < game.0 { prayer } else { game }),
            (game, prayer) => game.or(prayer),
        }
    }

    /// Record that a `kind` tick was just processed.
    pub fn fired(&mut self, kind: TickKind, now: Instant) {
        match kind {
            TickKind::Game => {
                if let Some(timer) = self.game.as_mut() {
                    timer.advance(now);
                }
            }
            TickKind::Prayer => {
                if let Some(timer) = self.prayer.as_mut() {
                    timer.advance(now);
                }
            }
        }
    }

    /// Current game tick period, if the timer is running.
    pub fn game_period(&self) -> Option<Duration> {
        self.game.as_ref().map(|timer| timer.period)
    }

    /// Current prayer tick period, if the timer is running.
    pub fn prayer_period(&self) -> Option<Duration> {
        self.prayer.as_ref().map(|timer| timer.period)
    }
}
