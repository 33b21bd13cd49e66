//! # World
//!
//! A finished tile grid together with the generation stream it was built
//! from. Placement queries keep drawing from that same stream, so a world
//! replayed from its seed answers the same sequence of queries identically.

use deadgrid_core::{DeterministicRng, GridPos};
use tracing::debug;

use crate::biome::Biome;
use crate::config::WorldConfig;
use crate::grid::TileGrid;
use crate::tile::{Classification, Tile};

/// A synthesized world.
#[derive(Clone, Debug)]
pub struct World {
    grid: TileGrid,
    rng: DeterministicRng,
    config: WorldConfig,
}

impl World {
    pub(crate) fn new(grid: TileGrid, rng: DeterministicRng, config: WorldConfig) -> Self {
        Self { grid, rng, config }
    }

    /// The tile grid.
    #[inline]
    #[must_use]
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Mutable tile grid, for collaborators that consume loot or destroy structures.
    #[inline]
    pub fn grid_mut(&mut self) -> &mut TileGrid {
        &mut self.grid
    }

    /// Gives up the stream and returns the grid.
    #[must_use]
    pub fn into_grid(self) -> TileGrid {
        self.grid
    }

    /// The configuration the world was built with.
    #[must_use]
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Seed the world was built from.
    #[must_use]
    pub fn seed(&self) -> u32 {
        self.config.seed
    }

    /// Width in tiles.
    #[must_use]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Height in tiles.
    #[must_use]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Returns true if `(x, y)` lies inside the grid.
    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.grid.in_bounds(x, y)
    }

    /// The tile at `(x, y)`, or `None` when out of bounds.
    #[must_use]
    pub fn tile_at(&self, x: i32, y: i32) -> Option<&Tile> {
        self.grid.tile_at(x, y)
    }

    /// Rejection-samples a cell whose biome or kind is in `classes`.
    ///
    /// Tries at most `tile_attempts` cells. `None` means the budget ran
    /// out, not that no such tile exists.
    pub fn random_tile_of(&mut self, classes: &[Classification]) -> Option<GridPos> {
        let found = self.sample(self.config.tile_attempts, |t| t.matches_any(classes));
        if found.is_none() {
            debug!(attempts = self.config.tile_attempts, ?classes, "random_tile_of budget exhausted");
        }
        found
    }

    /// Picks a rural or suburban cell for a fresh spawn.
    ///
    /// Tries at most `spawn_attempts` cells, then falls back to the centre
    /// cell. Never fails.
    pub fn random_spawn_site(&mut self) -> GridPos {
        self.sample(self.config.spawn_attempts, |t| Biome::is_safe_spawn(t.biome))
            .unwrap_or_else(|| {
                let center = self.grid.center();
                debug!(x = center.x, y = center.y, "no spawn site found, using centre");
                center
            })
    }

    /// Draws up to `attempts` uniform cells (x then y) and returns the first
    /// one satisfying `accept`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn sample(&mut self, attempts: usize, accept: impl Fn(&Tile) -> bool) -> Option<GridPos> {
        for _ in 0..attempts {
            let x = self.rng.next_index(self.grid.width()) as i32;
            let y = self.rng.next_index(self.grid.height()) as i32;
            if self.grid.tile_at(x, y).is_some_and(&accept) {
                return Some(GridPos::new(x, y));
            }
        }
        None
    }
}
