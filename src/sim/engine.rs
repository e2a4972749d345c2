//! Game state and the per-tick imprint/outcome algorithm
//!
//! All engine state lives here: the occupancy grid, both players, the
//! render change queue and the round lifecycle. The grid is owned
//! exclusively by [`GameState`] and mutated only through the imprint path.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::consts::{P1_START_X_FRACTION, P2_START_X_FRACTION};
use crate::error::{GameError, MoveViolation};
use crate::sim::grid::{CellChange, Grid, Occupancy};
use crate::sim::player::{Player, PlayerId};

/// Round lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// tick() advances the round
    Running,
    /// Outcome fixed; tick() is inert until reset()
    Ended,
}

/// Result of a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Continuing,
    Draw,
    Winner(PlayerId),
}

impl Outcome {
    /// True while the round keeps going
    pub fn continuing(self) -> bool {
        self == Outcome::Continuing
    }

    /// End-of-round banner text shown by the host. Player 1 is Green,
    /// player 2 is Red.
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Continuing => "",
            Outcome::Draw => "Draw!",
            Outcome::Winner(PlayerId::One) => "Green Wins!",
            Outcome::Winner(PlayerId::Two) => "Red Wins!",
        }
    }
}

/// Complete engine state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    grid: Grid,
    pub player1: Player,
    pub player2: Player,
    phase: Phase,
    outcome: Outcome,
    /// Ticks elapsed this round
    pub time_ticks: u64,
    /// Newly occupied cells since the last drain (render-only)
    #[serde(skip)]
    changes: Vec<CellChange>,
}

impl GameState {
    /// Build the board, place both players and imprint their starting
    /// footprints.
    ///
    /// Players start a short way in from the walls; edge starts make for
    /// boring, predictable rounds.
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let (width, height) = (config.width, config.height);
        let displacement = config.displacement();
        let start_y = height / 2;

        let player1 = Player::new(
            PlayerId::One,
            IVec2::new((P1_START_X_FRACTION * width as f32).floor() as i32, start_y),
            IVec2::new(1, 0),
            displacement,
        );
        let player2 = Player::new(
            PlayerId::Two,
            IVec2::new((P2_START_X_FRACTION * width as f32).floor() as i32, start_y),
            IVec2::new(-1, 0),
            displacement,
        );

        let mut state = Self {
            grid: Grid::new(width, height, Occupancy::Empty)?,
            player1,
            player2,
            phase: Phase::Running,
            outcome: Outcome::Continuing,
            time_ticks: 0,
            changes: Vec::new(),
        };

        if state.imprint(PlayerId::One).is_err() || state.imprint(PlayerId::Two).is_err() {
            log::warn!("board {width}x{height} too small for the starting footprints");
        }

        Ok(state)
    }

    /// Write the player's current footprint into the grid.
    ///
    /// The worm occupies `2 * displacement + 1` cells perpendicular to
    /// travel. The write aborts on the first out-of-bounds or occupied
    /// cell; cells written earlier in the same call stay on the grid, so
    /// the partially drawn worm of a lethal move remains visible.
    pub fn imprint(&mut self, id: PlayerId) -> Result<(), MoveViolation> {
        let player = self.player(id);
        let pos = player.position;
        let displacement = player.displacement();
        let horizontal = player.heading.x != 0;
        let signature = id.signature();

        for i in -displacement..=displacement {
            let cell = if horizontal {
                IVec2::new(pos.x, pos.y + i)
            } else {
                IVec2::new(pos.x + i, pos.y)
            };
            match self.grid.get(cell) {
                None => return Err(MoveViolation::Boundary),
                Some(Occupancy::Empty) => {
                    self.grid.set(cell, signature);
                    self.changes.push(CellChange {
                        x: cell.x,
                        y: cell.y,
                        signature,
                    });
                }
                Some(_) => return Err(MoveViolation::Collision),
            }
        }
        Ok(())
    }

    /// Advance one tick.
    ///
    /// Player 1 moves and imprints before player 2, so a perfectly
    /// symmetric head-on meeting is decided in player 1's favour for
    /// whichever cell is claimed first; both players always get their
    /// move+imprint attempt within the same tick. A non-continuing outcome
    /// freezes the engine until [`reset`](Self::reset).
    pub fn tick(&mut self) -> Outcome {
        if self.phase == Phase::Ended {
            return self.outcome;
        }
        self.time_ticks += 1;

        self.player1.advance();
        let p1_result = self.imprint(PlayerId::One);
        self.player2.advance();
        let p2_result = self.imprint(PlayerId::Two);

        self.outcome = match (p1_result.is_ok(), p2_result.is_ok()) {
            (true, true) => Outcome::Continuing,
            (false, false) => Outcome::Draw,
            (false, true) => Outcome::Winner(PlayerId::Two),
            (true, false) => Outcome::Winner(PlayerId::One),
        };

        if self.outcome != Outcome::Continuing {
            self.phase = Phase::Ended;
            log::info!(
                "round over after {} ticks: {}",
                self.time_ticks,
                self.outcome.message()
            );
        }
        self.outcome
    }

    /// Clear the grid, restore both players to their starting state and
    /// re-imprint the starting footprints, returning the engine to Running.
    pub fn reset(&mut self) {
        self.grid.map_cells(|_| Occupancy::Empty);
        self.player1.reset();
        self.player2.reset();
        self.changes.clear();
        self.phase = Phase::Running;
        self.outcome = Outcome::Continuing;
        self.time_ticks = 0;

        let _ = self.imprint(PlayerId::One);
        let _ = self.imprint(PlayerId::Two);
        log::debug!("game reset");
    }

    /// Drain the queued cell changes in emission order. This is the
    /// renderer's sole data source; it avoids full-grid redraws.
    pub fn drain_changes(&mut self) -> Vec<CellChange> {
        std::mem::take(&mut self.changes)
    }

    /// Route a heading-change request to the owning player.
    pub fn change_dir(&mut self, id: PlayerId, dx: i32, dy: i32) -> bool {
        self.player_mut(id).change_dir(dx, dy)
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        match id {
            PlayerId::One => &self.player1,
            PlayerId::Two => &self.player2,
        }
    }

    fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        match id {
            PlayerId::One => &mut self.player1,
            PlayerId::Two => &mut self.player2,
        }
    }

    /// Snapshot the engine as JSON. The render change queue is transient
    /// and not part of the snapshot.
    pub fn to_json(&self) -> Result<String, GameError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restore an engine snapshot.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(json)?)
    }
}
