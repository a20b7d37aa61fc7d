//! Session state construction and the idle transition.

use simplescape_types::{Activity, GameState};
use simplescape_world::{WELCOME_MESSAGE, general_store_stock, starting_player};

/// A brand new game: starting player, full shop, welcome line.
pub fn new_game() -> GameState {
    GameState {
        activity: Activity::Idle,
        current_resource_key: None,
        log: vec![String::from(WELCOME_MESSAGE)],
        player: starting_player(),
        shop_stock: general_store_stock(),
        monster: None,
    }
}

/// Return to idle, dropping the resource key and any encounter.
pub fn go_idle(state: &mut GameState) {
    state.activity = Activity::Idle;
    state.current_resource_key = None;
    state.monster = None;
}
