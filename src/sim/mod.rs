//! Deterministic game simulation
//!
//! Pure fixed-tick state machine with no timing, input or rendering of its
//! own. The host calls [`GameState::tick`] at its own cadence and feeds
//! heading changes between ticks; identical call sequences produce
//! identical rounds.

pub mod engine;
pub mod grid;
pub mod player;

pub use engine::{GameState, Outcome, Phase};
pub use grid::{CellChange, Grid, Occupancy};
pub use player::{Player, PlayerId};
