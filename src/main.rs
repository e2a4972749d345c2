//! Gridcycle entry point
//!
//! Headless demo driver: runs scripted rounds against the engine and logs
//! the results. Real frontends replace this with an event loop feeding
//! [`gridcycle::input`] from actual key presses.

use std::thread;
use std::time::Duration;

use gridcycle::input::{Key, action_for_key, dispatch};
use gridcycle::sim::GameState;
use gridcycle::GameConfig;

/// Key presses injected after the named tick completes
const SCRIPT: &[(u64, Key)] = &[
    (10, Key::W),
    (10, Key::Down),
    (25, Key::D),
    (25, Key::Left),
    (40, Key::S),
    (40, Key::Up),
];

fn main() {
    env_logger::init();

    let config = GameConfig::new(120, 90);
    let mut state = match GameState::new(&config) {
        Ok(state) => state,
        Err(err) => {
            log::error!("failed to start: {err}");
            std::process::exit(1);
        }
    };
    log::info!(
        "gridcycle demo on a {}x{} board",
        config.width,
        config.height
    );

    let mut rounds_left = 2u32;
    loop {
        for &(at, key) in SCRIPT {
            if at == state.time_ticks {
                dispatch(&mut state, action_for_key(key));
            }
        }

        let outcome = state.tick();
        let drawn = state.drain_changes().len();
        log::debug!("tick {}: {} cells drawn", state.time_ticks, drawn);

        if !outcome.continuing() {
            println!("{}", outcome.message());
            rounds_left -= 1;
            if rounds_left == 0 {
                break;
            }
            // Restart resets time_ticks, so the script replays next round.
            dispatch(&mut state, action_for_key(Key::Enter));
        }

        thread::sleep(Duration::from_millis(config.tick_ms));
    }
}
