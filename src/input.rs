//! Keyboard mapping
//!
//! Fixed two-player layout: WASD steers player 1, the arrow keys steer
//! player 2, Enter restarts a finished round. Keys translate to engine
//! actions here so the engine itself never sees a key code.

use crate::sim::{GameState, Phase, PlayerId};

/// The keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    W,
    A,
    S,
    D,
    Up,
    Down,
    Left,
    Right,
    Enter,
}

/// Engine-level intent decoded from a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Heading-change request for one player
    Turn { player: PlayerId, dx: i32, dy: i32 },
    /// Restart a finished round
    Confirm,
}

/// Map a key press to its action.
pub fn action_for_key(key: Key) -> Action {
    match key {
        Key::W => Action::Turn {
            player: PlayerId::One,
            dx: 0,
            dy: -1,
        },
        Key::S => Action::Turn {
            player: PlayerId::One,
            dx: 0,
            dy: 1,
        },
        Key::A => Action::Turn {
            player: PlayerId::One,
            dx: -1,
            dy: 0,
        },
        Key::D => Action::Turn {
            player: PlayerId::One,
            dx: 1,
            dy: 0,
        },
        Key::Up => Action::Turn {
            player: PlayerId::Two,
            dx: 0,
            dy: -1,
        },
        Key::Down => Action::Turn {
            player: PlayerId::Two,
            dx: 0,
            dy: 1,
        },
        Key::Left => Action::Turn {
            player: PlayerId::Two,
            dx: -1,
            dy: 0,
        },
        Key::Right => Action::Turn {
            player: PlayerId::Two,
            dx: 1,
            dy: 0,
        },
        Key::Enter => Action::Confirm,
    }
}

/// Apply an action to the engine. Returns true when it changed anything:
/// a turn that was applied immediately, or a restart of an ended round.
/// Confirm while a round is still running is ignored.
pub fn dispatch(state: &mut GameState, action: Action) -> bool {
    match action {
        Action::Turn { player, dx, dy } => state.change_dir(player, dx, dy),
        Action::Confirm => {
            if state.phase() == Phase::Ended {
                state.reset();
                true
            } else {
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use glam::IVec2;

    #[test]
    fn test_wasd_maps_to_player_one() {
        for (key, dx, dy) in [
            (Key::W, 0, -1),
            (Key::S, 0, 1),
            (Key::A, -1, 0),
            (Key::D, 1, 0),
        ] {
            assert_eq!(
                action_for_key(key),
                Action::Turn {
                    player: PlayerId::One,
                    dx,
                    dy
                }
            );
        }
    }

    #[test]
    fn test_arrows_map_to_player_two() {
        for (key, dx, dy) in [
            (Key::Up, 0, -1),
            (Key::Down, 0, 1),
            (Key::Left, -1, 0),
            (Key::Right, 1, 0),
        ] {
            assert_eq!(
                action_for_key(key),
                Action::Turn {
                    player: PlayerId::Two,
                    dx,
                    dy
                }
            );
        }
    }

    #[test]
    fn test_dispatch_turn_reaches_engine() {
        let mut state = GameState::new(&GameConfig::new(40, 40)).unwrap();
        state.tick();
        assert!(dispatch(&mut state, action_for_key(Key::S)));
        assert_eq!(state.player1.heading, IVec2::new(0, 1));
    }

    #[test]
    fn test_confirm_only_restarts_ended_round() {
        let mut state = GameState::new(&GameConfig::new(40, 40)).unwrap();
        assert!(!dispatch(&mut state, Action::Confirm));
        assert_eq!(state.phase(), Phase::Running);

        while state.tick().continuing() {}
        assert!(dispatch(&mut state, Action::Confirm));
        assert_eq!(state.phase(), Phase::Running);
        assert_eq!(state.time_ticks, 0);
    }
}
