//! Board geometry and cadence configuration
//!
//! Validated once, at game construction. The engine performs no timing of
//! its own; `tick_ms` is a hint for whatever scheduler drives it.

use serde::{Deserialize, Serialize};

use crate::consts::TICK_MS;
use crate::error::GameError;

/// Game configuration supplied by the host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board width in cells
    pub width: i32,
    /// Board height in cells
    pub height: i32,
    /// Scheduler period hint (milliseconds)
    pub tick_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 160,
            height: 100,
            tick_ms: TICK_MS,
        }
    }
}

impl GameConfig {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            tick_ms: TICK_MS,
        }
    }

    /// Board dimensions must both be positive.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(GameError::InvalidConstruction {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Trail half-width for this board, shared by both players
    pub fn displacement(&self) -> i32 {
        crate::displacement_for_height(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_non_positive_dimensions_rejected() {
        assert!(GameConfig::new(0, 100).validate().is_err());
        assert!(GameConfig::new(100, 0).validate().is_err());
        assert!(GameConfig::new(-5, 100).validate().is_err());
    }

    #[test]
    fn test_displacement_from_height() {
        assert_eq!(GameConfig::new(40, 40).displacement(), 0);
        assert_eq!(GameConfig::new(40, 100).displacement(), 1);
        assert_eq!(GameConfig::new(40, 200).displacement(), 2);
    }
}
