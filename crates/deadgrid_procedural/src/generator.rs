//! # World Synthesis
//!
//! Turns a seed into a finished `World`.
//!
//! ## Pipeline
//!
//! All randomness comes from one `DeterministicRng` opened on the seed,
//! consumed in this fixed order:
//!
//! 1. one draw: the noise lattice salt
//! 2. one draw per cell, row-major: obstruction (urban and other biomes
//!    use different probabilities)
//! 3. no draws: road columns (`road_offset`, then every `road_spacing`)
//! 4. per cluster: centre x, centre y, loot pick, then one draw per
//!    in-bounds neighbour of the centre for cluster growth
//!
//! Road carving changes `kind` only; obstruction is left as drawn.

use std::time::Instant;

use deadgrid_core::{DeterministicRng, GridPos};
use tracing::{debug, trace};

use crate::biome::{Biome, BiomeClassifier};
use crate::config::WorldConfig;
use crate::error::WorldResult;
use crate::grid::TileGrid;
use crate::loot::LootPool;
use crate::noise::{ValueNoise, WorldSeed};
use crate::tile::{Tile, TileKind};
use crate::world::World;

/// Produces worlds from a validated configuration.
///
/// # Example
///
/// ```rust
/// use deadgrid_procedural::{WorldConfig, WorldGenerator};
///
/// let generator = WorldGenerator::new(WorldConfig::new(40, 30, 7)).unwrap();
/// let a = generator.generate().unwrap();
/// let b = generator.generate().unwrap();
/// assert_eq!(a.grid(), b.grid());
/// ```
#[derive(Clone, Debug)]
pub struct WorldGenerator {
    config: WorldConfig,
    loot: LootPool,
}

impl WorldGenerator {
    /// Validates `config` and prepares a generator.
    ///
    /// # Errors
    ///
    /// Any error from `WorldConfig::validate`.
    pub fn new(config: WorldConfig) -> WorldResult<Self> {
        config.validate()?;
        let loot = LootPool::new(config.loot_pool.iter().cloned());
        Ok(Self { config, loot })
    }

    /// Synthesizes the world.
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` if the configuration was mutated out of range
    /// after validation (it cannot be through this type's API).
    pub fn generate(&self) -> WorldResult<World> {
        let start = Instant::now();
        let config = &self.config;
        let mut rng = WorldSeed::new(config.seed).stream();

        let noise = ValueNoise::new(&mut rng);
        let classifier = BiomeClassifier::new(noise, config);

        let mut grid = self.classify(&classifier, &mut rng)?;
        let roads = self.carve_roads(&mut grid);
        let clusters = self.place_points_of_interest(&mut grid, &mut rng);

        debug!(
            width = config.width,
            height = config.height,
            seed = config.seed,
            roads,
            clusters,
            obstructed = grid.count_where(|t| t.obstructed),
            elapsed_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX),
            "world synthesized"
        );

        Ok(World::new(grid, rng, config.clone()))
    }

    /// Steps 1 and 2: biome per cell, then one obstruction draw per cell.
    fn classify(&self, classifier: &BiomeClassifier, rng: &mut DeterministicRng) -> WorldResult<TileGrid> {
        let config = &self.config;
        TileGrid::from_fn(config.width, config.height, |pos| {
            let biome = classifier.classify(pos.x, pos.y);
            let mut tile = Tile::new(pos, biome);
            let p = if biome == Biome::Urban {
                config.urban_obstruction
            } else {
                config.base_obstruction
            };
            tile.obstructed = rng.chance(p);
            tile
        })
    }

    /// Step 3: full-height road columns. Returns the number of columns carved.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn carve_roads(&self, grid: &mut TileGrid) -> usize {
        let mut carved = 0;
        for x in (self.config.road_offset..grid.width()).step_by(self.config.road_spacing) {
            for y in 0..grid.height() {
                if let Some(tile) = grid.tile_at_mut(x as i32, y as i32) {
                    tile.kind = TileKind::Road;
                }
            }
            carved += 1;
        }
        carved
    }

    /// Step 4: obstructed clusters with loot at their centres.
    /// Returns the number of clusters placed.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn place_points_of_interest(&self, grid: &mut TileGrid, rng: &mut DeterministicRng) -> usize {
        for _ in 0..self.config.poi_clusters {
            let center = GridPos::new(
                rng.next_index(grid.width()) as i32,
                rng.next_index(grid.height()) as i32,
            );
            let item = self.loot.pick(rng).map(str::to_owned);

            if let Some(tile) = grid.get_mut(center) {
                tile.obstructed = true;
                if let Some(item) = &item {
                    tile.push_item(item.as_str());
                }
            }
            trace!(x = center.x, y = center.y, item = ?item, "point of interest");

            for dy in -1..=1 {
                for dx in -1..=1 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    if let Some(tile) = grid.get_mut(center.offset(dx, dy)) {
                        if rng.chance(self.config.cluster_growth) {
                            tile.obstructed = true;
                        }
                    }
                }
            }
        }
        self.config.poi_clusters
    }
}

/// Synthesizes a world with default tuning.
///
/// # Errors
///
/// `InvalidDimensions` if `width` or `height` is zero.
///
/// # Example
///
/// ```rust
/// use deadgrid_procedural::synthesize;
///
/// let world = synthesize(80, 60, 12345).unwrap();
/// assert!(world.grid().tile_at(79, 59).is_some());
/// assert!(synthesize(0, 60, 12345).is_err());
/// ```
pub fn synthesize(width: usize, height: usize, seed: u32) -> WorldResult<World> {
    WorldGenerator::new(WorldConfig::new(width, height, seed))?.generate()
}
