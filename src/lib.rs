//! Gridcycle - a two-player grid lightcycle duel engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid occupancy, player movement, tick/outcome)
//! - `config`: Board geometry and cadence configuration
//! - `input`: Key-to-action mapping for external event sources
//!
//! Rendering, timers and raw event decoding live outside this crate: a host
//! drives [`sim::GameState::tick`] at a fixed cadence and drains cell-change
//! records to draw incrementally.

pub mod config;
pub mod error;
pub mod input;
pub mod sim;

pub use config::GameConfig;
pub use error::{GameError, MoveViolation};

/// Engine tuning constants
pub mod consts {
    /// Tick period expected from the external scheduler (milliseconds)
    pub const TICK_MS: u64 = 33;

    /// Fraction of board width where player 1 starts
    pub const P1_START_X_FRACTION: f32 = 0.2;
    /// Fraction of board width where player 2 starts
    pub const P2_START_X_FRACTION: f32 = 0.8;

    /// Trail half-width per unit of board height;
    /// displacement = floor(factor * height / 2). Kept f64: the f32
    /// rounding of 0.02 lands 0.02 * 100 / 2 just below 1.
    pub const DISPLACEMENT_FACTOR: f64 = 0.02;

    /// Cells advanced per tick
    pub const PLAYER_SPEED: i32 = 1;
}

/// Displacement (trail half-width in cells) for a board of the given height.
///
/// Computed once at game construction and shared by both players; each
/// footprint is `2 * displacement + 1` cells wide.
#[inline]
pub fn displacement_for_height(height: i32) -> i32 {
    ((consts::DISPLACEMENT_FACTOR * height as f64) / 2.0).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_displacement_scaling() {
        assert_eq!(displacement_for_height(40), 0);
        assert_eq!(displacement_for_height(100), 1);
        assert_eq!(displacement_for_height(200), 2);
        assert_eq!(displacement_for_height(1080), 10);
    }
}
