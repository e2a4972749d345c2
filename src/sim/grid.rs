//! Grid occupancy store
//!
//! One entry per board cell, three-valued. Occupied cells are written only
//! by the engine's imprint path and cleared only by a full reset; there is
//! no other mutation route.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Cell occupancy tag. Doubles as a player's signature in change records,
/// which is how renderers pick trail colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Occupancy {
    #[default]
    Empty,
    Player1,
    Player2,
}

/// A newly occupied cell, queued for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellChange {
    pub x: i32,
    pub y: i32,
    pub signature: Occupancy,
}

/// Fixed-size occupancy grid, row-major storage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Occupancy>,
}

impl Grid {
    /// Create a width x height grid with every cell set to `fill`.
    pub fn new(width: i32, height: i32, fill: Occupancy) -> Result<Self, GameError> {
        if width <= 0 || height <= 0 {
            return Err(GameError::InvalidConstruction { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![fill; (width * height) as usize],
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether (x, y) lies on the board
    #[inline]
    pub fn in_bounds(&self, pos: IVec2) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Cell value at (x, y); None when out of bounds
    pub fn get(&self, pos: IVec2) -> Option<Occupancy> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(self.cells[self.index(pos)])
    }

    /// Write a cell. Callers check bounds first via `get`/`in_bounds`.
    pub(crate) fn set(&mut self, pos: IVec2, value: Occupancy) {
        let idx = self.index(pos);
        self.cells[idx] = value;
    }

    /// Apply `f` to every cell in row-major order, storing its return value.
    /// The engine's only use is the bulk reset to Empty.
    pub fn map_cells(&mut self, mut f: impl FnMut(Occupancy) -> Occupancy) {
        for cell in &mut self.cells {
            *cell = f(*cell);
        }
    }

    /// Count of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Occupancy::Empty).count()
    }

    #[inline]
    fn index(&self, pos: IVec2) -> usize {
        (pos.y * self.width + pos.x) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fills_every_cell() {
        let grid = Grid::new(4, 3, Occupancy::Empty).unwrap();
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(grid.get(IVec2::new(x, y)), Some(Occupancy::Empty));
            }
        }
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn test_non_positive_dimensions_rejected() {
        assert!(Grid::new(0, 10, Occupancy::Empty).is_err());
        assert!(Grid::new(10, -1, Occupancy::Empty).is_err());
    }

    #[test]
    fn test_bounds() {
        let grid = Grid::new(5, 5, Occupancy::Empty).unwrap();
        assert!(grid.in_bounds(IVec2::new(0, 0)));
        assert!(grid.in_bounds(IVec2::new(4, 4)));
        assert!(!grid.in_bounds(IVec2::new(5, 0)));
        assert!(!grid.in_bounds(IVec2::new(0, 5)));
        assert!(!grid.in_bounds(IVec2::new(-1, 2)));
        assert_eq!(grid.get(IVec2::new(5, 0)), None);
    }

    #[test]
    fn test_set_then_get() {
        let mut grid = Grid::new(5, 5, Occupancy::Empty).unwrap();
        grid.set(IVec2::new(2, 3), Occupancy::Player1);
        assert_eq!(grid.get(IVec2::new(2, 3)), Some(Occupancy::Player1));
        assert_eq!(grid.occupied_count(), 1);
    }

    #[test]
    fn test_map_cells_bulk_reset() {
        let mut grid = Grid::new(5, 5, Occupancy::Empty).unwrap();
        grid.set(IVec2::new(1, 1), Occupancy::Player1);
        grid.set(IVec2::new(3, 4), Occupancy::Player2);
        grid.map_cells(|_| Occupancy::Empty);
        assert_eq!(grid.occupied_count(), 0);
    }
}
