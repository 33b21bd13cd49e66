//! # Navigable Grids
//!
//! The read-only view the pathfinder takes of a grid.

use deadgrid_core::GridPos;
use deadgrid_procedural::{TileGrid, World};

/// A fixed-size grid whose cells are either open or obstructed.
///
/// Implementations must answer consistently for the lifetime of one query.
pub trait NavGrid {
    /// Width in cells.
    fn width(&self) -> usize;

    /// Height in cells.
    fn height(&self) -> usize;

    /// Returns true if a structure blocks `pos`. Only called for in-bounds positions.
    fn is_obstructed(&self, pos: GridPos) -> bool;

    /// Row-major index of `pos`, or `None` when out of bounds.
    #[inline]
    fn cell_index(&self, pos: GridPos) -> Option<usize> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;
        (x < self.width() && y < self.height()).then(|| y * self.width() + x)
    }

    /// Returns true if `pos` lies inside the grid.
    #[inline]
    fn in_bounds(&self, pos: GridPos) -> bool {
        self.cell_index(pos).is_some()
    }

    /// Returns true if `pos` is in bounds and open.
    #[inline]
    fn is_open(&self, pos: GridPos) -> bool {
        self.in_bounds(pos) && !self.is_obstructed(pos)
    }
}

impl NavGrid for TileGrid {
    #[inline]
    fn width(&self) -> usize {
        TileGrid::width(self)
    }

    #[inline]
    fn height(&self) -> usize {
        TileGrid::height(self)
    }

    #[inline]
    fn is_obstructed(&self, pos: GridPos) -> bool {
        self.get(pos).map_or(true, |t| t.obstructed)
    }
}

impl NavGrid for World {
    #[inline]
    fn width(&self) -> usize {
        self.grid().width()
    }

    #[inline]
    fn height(&self) -> usize {
        self.grid().height()
    }

    #[inline]
    fn is_obstructed(&self, pos: GridPos) -> bool {
        NavGrid::is_obstructed(self.grid(), pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_grid_view() {
        let mut grid = TileGrid::new(4, 3).unwrap();
        grid.tile_at_mut(1, 1).unwrap().obstructed = true;

        assert_eq!(NavGrid::width(&grid), 4);
        assert_eq!(grid.cell_index(GridPos::new(3, 2)), Some(11));
        assert_eq!(grid.cell_index(GridPos::new(4, 0)), None);
        assert!(NavGrid::is_obstructed(&grid, GridPos::new(1, 1)));
        assert!(!grid.is_open(GridPos::new(1, 1)));
        assert!(grid.is_open(GridPos::new(0, 0)));
        assert!(!grid.is_open(GridPos::new(-1, 0)));
    }
}
