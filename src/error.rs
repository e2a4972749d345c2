//! Error taxonomy
//!
//! Only construction and snapshot decoding can fail as `Result` errors.
//! An illegal move is a legal, deterministic round outcome, so it travels
//! as a [`MoveViolation`] value instead of an error.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fatal engine errors
#[derive(Debug, Error)]
pub enum GameError {
    /// Board dimensions must both be positive
    #[error("invalid board dimensions {width}x{height}")]
    InvalidConstruction { width: i32, height: i32 },

    /// Snapshot encode/decode failure
    #[error("snapshot failed: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// Why an imprint aborted. The outcome table does not distinguish the two;
/// both read as "illegal move" for the player that triggered them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveViolation {
    /// Footprint cell outside the grid
    Boundary,
    /// Footprint cell already occupied by a trail (own or opponent's)
    Collision,
}
