//! # Shared Grid
//!
//! Synchronization boundary for grids that change while agents navigate
//! (a building collapses, a barricade goes up).
//!
//! A path query holds the read lock for its whole lifetime, so it always
//! sees one quiescent snapshot. Edits take the write lock between queries.
//! The search loop itself never touches a lock.
//!
//! ```text
//!   agent A ──┐
//!   agent B ──┼── read lock ──► find_path (snapshot)
//!   agent C ──┘
//!   world events ──── write lock ──► set_obstructed / take_item
//! ```

use std::sync::Arc;

use deadgrid_core::GridPos;
use deadgrid_procedural::TileGrid;
use parking_lot::{RwLock, RwLockReadGuard};

use crate::astar::{find_path, find_path_with_stats, PathSearch};

/// A tile grid shared between navigating agents and world editors.
///
/// Cloning is cheap and yields another handle to the same grid.
#[derive(Clone, Debug)]
pub struct SharedGrid {
    inner: Arc<RwLock<TileGrid>>,
}

impl SharedGrid {
    /// Wraps a finished grid.
    #[must_use]
    pub fn new(grid: TileGrid) -> Self {
        Self {
            inner: Arc::new(RwLock::new(grid)),
        }
    }

    /// Runs one path query against a consistent snapshot.
    #[must_use]
    pub fn find_path(&self, start: GridPos, target: GridPos) -> Option<Vec<GridPos>> {
        let grid = self.inner.read();
        find_path(start, target, &*grid)
    }

    /// Runs one path query and reports the work done.
    #[must_use]
    pub fn find_path_with_stats(&self, start: GridPos, target: GridPos) -> PathSearch {
        let grid = self.inner.read();
        find_path_with_stats(start, target, &*grid)
    }

    /// Sets or clears obstruction at `pos`.
    ///
    /// Returns false (and changes nothing) if `pos` is out of bounds.
    pub fn set_obstructed(&self, pos: GridPos, obstructed: bool) -> bool {
        let mut grid = self.inner.write();
        match grid.get_mut(pos) {
            Some(tile) => {
                tile.obstructed = obstructed;
                true
            }
            None => false,
        }
    }

    /// Removes the most recently placed loot at `pos`.
    pub fn take_item(&self, pos: GridPos) -> Option<String> {
        self.inner.write().get_mut(pos).and_then(|tile| tile.take_item())
    }

    /// Read access for rendering or inspection. Blocks edits while held.
    pub fn read(&self) -> RwLockReadGuard<'_, TileGrid> {
        self.inner.read()
    }
}

impl From<TileGrid> for SharedGrid {
    fn from(grid: TileGrid) -> Self {
        Self::new(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_between_queries() {
        let shared = SharedGrid::new(TileGrid::new(5, 1).unwrap());
        let (start, target) = (GridPos::new(0, 0), GridPos::new(4, 0));

        assert_eq!(shared.find_path(start, target).map(|p| p.len()), Some(4));

        assert!(shared.set_obstructed(GridPos::new(2, 0), true));
        assert_eq!(shared.find_path(start, target), None);

        assert!(shared.set_obstructed(GridPos::new(2, 0), false));
        assert!(shared.find_path(start, target).is_some());

        assert!(!shared.set_obstructed(GridPos::new(9, 9), true));
    }

    #[test]
    fn test_loot_taken_through_handle() {
        let mut grid = TileGrid::new(2, 2).unwrap();
        grid.tile_at_mut(1, 1).unwrap().push_item("canned_food");
        let shared = SharedGrid::from(grid);
        let other = shared.clone();

        assert_eq!(other.take_item(GridPos::new(1, 1)).as_deref(), Some("canned_food"));
        assert_eq!(shared.take_item(GridPos::new(1, 1)), None);
        assert!(shared.read().tile_at(1, 1).unwrap().items.is_empty());
    }

    #[test]
    fn test_concurrent_queries_agree() {
        let shared = SharedGrid::new(TileGrid::new(40, 40).unwrap());
        shared.set_obstructed(GridPos::new(20, 20), true);
        let expected = shared.find_path(GridPos::new(0, 0), GridPos::new(39, 39));

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let shared = shared.clone();
                    scope.spawn(move || shared.find_path(GridPos::new(0, 0), GridPos::new(39, 39)))
                })
                .collect();

            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
        assert_eq!(expected.map(|p| p.len()), Some(78));
    }
}
