//! Player movement and turning
//!
//! A player's coordinates are the center of its rendered "worm", which is
//! `2 * displacement + 1` cells wide perpendicular to travel. Turning has
//! to translate that center so the new footprint lines up with the old
//! trail instead of clipping it, and turns are rate-limited so a fresh
//! corner cannot fold back onto itself.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::PLAYER_SPEED;
use crate::sim::grid::Occupancy;

/// Which contestant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// The occupancy tag this player leaves on the grid
    pub fn signature(self) -> Occupancy {
        match self {
            PlayerId::One => Occupancy::Player1,
            PlayerId::Two => Occupancy::Player2,
        }
    }
}

/// One contestant's head state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Worm center, current head cell
    pub position: IVec2,
    /// Axis-aligned unit direction; exactly one component nonzero
    pub heading: IVec2,
    /// Cells advanced per tick
    pub speed: i32,
    /// Position recorded at the last successful turn; gates the next one
    turn_origin: IVec2,
    /// At most one buffered heading-change request; last write wins
    pending_turn: Option<IVec2>,
    /// Construction-time snapshot restored by reset
    start_position: IVec2,
    start_heading: IVec2,
    /// Trail half-width, identical for both players
    displacement: i32,
}

impl Player {
    pub fn new(id: PlayerId, position: IVec2, heading: IVec2, displacement: i32) -> Self {
        Self {
            id,
            position,
            heading,
            speed: PLAYER_SPEED,
            turn_origin: position,
            pending_turn: None,
            start_position: position,
            start_heading: heading,
            displacement,
        }
    }

    #[inline]
    pub fn displacement(&self) -> i32 {
        self.displacement
    }

    /// Restore the construction-time snapshot for a fresh round.
    pub fn reset(&mut self) {
        self.position = self.start_position;
        self.heading = self.start_heading;
        self.turn_origin = self.start_position;
        self.pending_turn = None;
    }

    /// Advance one tick: replay any pending turn first, then move the head
    /// by `heading * speed`. A pending turn that is still gated stays
    /// buffered for a later tick.
    pub fn advance(&mut self) {
        if let Some(pending) = self.pending_turn {
            if self.change_dir(pending.x, pending.y) {
                self.pending_turn = None;
            }
        }
        self.position += self.heading * self.speed;
    }

    /// Request a heading change. Returns true when the new heading was
    /// applied immediately.
    ///
    /// Rejected outright when the request shares an axis component with the
    /// current heading: that covers both "already going this way" and an
    /// instant 180-degree reversal, which always share one zero component.
    ///
    /// Deferred (buffered and retried by [`advance`](Self::advance)) until
    /// the head has travelled more than `2 * displacement` from the last
    /// turn on at least one axis; turning earlier would run the worm into
    /// its own fresh corner in a non-obvious way.
    pub fn change_dir(&mut self, new_dx: i32, new_dy: i32) -> bool {
        if new_dx == self.heading.x || new_dy == self.heading.y {
            return false;
        }

        let travelled = (self.position - self.turn_origin).abs();
        if travelled.x <= self.displacement * 2 && travelled.y <= self.displacement * 2 {
            log::debug!(
                "{:?}: turn ({new_dx},{new_dy}) deferred at {},{}",
                self.id,
                self.position.x,
                self.position.y
            );
            self.pending_turn = Some(IVec2::new(new_dx, new_dy));
            return false;
        }

        if new_dx != 0 {
            // Turning onto a horizontal run: lead the center along the new
            // axis and undo the old vertical centering offset.
            self.position.x += new_dx * self.displacement;
            self.position.y -= self.heading.y * self.displacement;
        } else {
            self.position.x -= self.heading.x * self.displacement;
            self.position.y += new_dy * self.displacement;
        }

        self.heading = IVec2::new(new_dx, new_dy);
        self.turn_origin = self.position;
        true
    }

    /// Whether a turn request is waiting for the distance gate
    pub fn has_pending_turn(&self) -> bool {
        self.pending_turn.is_some()
    }
}
