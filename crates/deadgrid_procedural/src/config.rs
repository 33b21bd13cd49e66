//! # World Configuration
//!
//! Every tunable of world synthesis, loaded once at startup.
//!
//! The defaults reproduce the stock world: an 80x60 grid seeded with
//! 12345, two noise layers (`/12` weighted 1.0 and `/6` weighted 0.5),
//! a road every 8th column from column 3, and 28 point-of-interest
//! clusters.
//!
//! ## Example
//!
//! ```rust
//! use deadgrid_procedural::WorldConfig;
//!
//! let config = WorldConfig::from_toml_str(r#"
//!     width = 40
//!     height = 30
//!     seed = 7
//!     poi_clusters = 10
//! "#).unwrap();
//!
//! assert_eq!(config.width, 40);
//! assert_eq!(config.road_spacing, 8);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{WorldError, WorldResult};

/// Composite-noise cut-offs, compared with `>` from the top down.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BiomeThresholds {
    /// Above this: urban.
    pub urban: f64,
    /// Above this (and not urban): suburban.
    pub suburban: f64,
    /// Above this (and not suburban): rural. Otherwise industrial.
    pub rural: f64,
}

impl Default for BiomeThresholds {
    fn default() -> Self {
        Self {
            urban: 0.6,
            suburban: 0.3,
            rural: 0.05,
        }
    }
}

/// Configuration for world synthesis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Grid width in tiles.
    pub width: usize,
    /// Grid height in tiles.
    pub height: usize,
    /// Seed of the single generation stream.
    pub seed: u32,

    /// Divisor of grid coordinates for the coarse noise layer.
    pub coarse_scale: f64,
    /// Divisor of grid coordinates for the fine noise layer.
    pub fine_scale: f64,
    /// Weight of the coarse layer in the composite.
    pub coarse_weight: f64,
    /// Weight of the fine layer in the composite.
    pub fine_weight: f64,
    /// Biome cut-offs on the composite.
    pub thresholds: BiomeThresholds,

    /// Probability that an urban tile starts obstructed.
    pub urban_obstruction: f64,
    /// Probability that any other tile starts obstructed.
    pub base_obstruction: f64,

    /// First road column.
    pub road_offset: usize,
    /// Distance between road columns.
    pub road_spacing: usize,

    /// Number of point-of-interest clusters to place.
    pub poi_clusters: usize,
    /// Probability that each neighbour of a cluster centre is obstructed too.
    pub cluster_growth: f64,
    /// Loot identifiers a cluster centre may receive.
    pub loot_pool: Vec<String>,

    /// Attempt budget for `random_tile_of`.
    pub tile_attempts: usize,
    /// Attempt budget for `random_spawn_site`.
    pub spawn_attempts: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 60,
            seed: 12_345,
            coarse_scale: 12.0,
            fine_scale: 6.0,
            coarse_weight: 1.0,
            fine_weight: 0.5,
            thresholds: BiomeThresholds::default(),
            urban_obstruction: 0.25,
            base_obstruction: 0.05,
            road_offset: 3,
            road_spacing: 8,
            poi_clusters: 28,
            cluster_growth: 0.5,
            loot_pool: ["bandage", "canned_food", "bottle_water", "scrap", "ammo_small"]
                .into_iter()
                .map(String::from)
                .collect(),
            tile_attempts: 500,
            spawn_attempts: 2_000,
        }
    }
}

impl WorldConfig {
    /// Default configuration with the given dimensions and seed.
    #[must_use]
    pub fn new(width: usize, height: usize, seed: u32) -> Self {
        Self {
            width,
            height,
            seed,
            ..Self::default()
        }
    }

    /// Parses and validates a TOML document. Missing keys take defaults.
    ///
    /// # Errors
    ///
    /// `ConfigParse` for malformed TOML, otherwise any `validate` error.
    pub fn from_toml_str(text: &str) -> WorldResult<Self> {
        let config: Self = toml::from_str(text).map_err(|e| WorldError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// `ConfigIo` if the file cannot be read, otherwise as `from_toml_str`.
    pub fn from_toml_file(path: impl AsRef<Path>) -> WorldResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| WorldError::ConfigIo(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Checks every value against its legal range.
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` for a zero or oversized grid, `InvalidConfig`
    /// for any other out-of-range value.
    pub fn validate(&self) -> WorldResult<()> {
        validate_dimensions(self.width, self.height)?;

        for (name, p) in [
            ("urban_obstruction", self.urban_obstruction),
            ("base_obstruction", self.base_obstruction),
            ("cluster_growth", self.cluster_growth),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(WorldError::InvalidConfig(format!("{name} must be in [0, 1], got {p}")));
            }
        }

        if !(self.coarse_scale > 0.0 && self.fine_scale > 0.0) {
            return Err(WorldError::InvalidConfig("noise scales must be positive".into()));
        }

        let t = &self.thresholds;
        if !(t.urban > t.suburban && t.suburban > t.rural) {
            return Err(WorldError::InvalidConfig(format!(
                "thresholds must decrease urban > suburban > rural, got {} / {} / {}",
                t.urban, t.suburban, t.rural
            )));
        }

        if self.road_spacing == 0 {
            return Err(WorldError::InvalidConfig("road_spacing must be positive".into()));
        }
        if self.tile_attempts == 0 || self.spawn_attempts == 0 {
            return Err(WorldError::InvalidConfig("attempt budgets must be positive".into()));
        }
        if self.loot_pool.is_empty() && self.poi_clusters > 0 {
            return Err(WorldError::InvalidConfig("loot_pool is empty but clusters are requested".into()));
        }

        Ok(())
    }
}

/// Rejects zero dimensions and dimensions that `i32` coordinates cannot address.
pub(crate) fn validate_dimensions(width: usize, height: usize) -> WorldResult<()> {
    let addressable = |n: usize| n > 0 && i32::try_from(n).is_ok();
    if addressable(width) && addressable(height) && width.checked_mul(height).is_some() {
        Ok(())
    } else {
        Err(WorldError::InvalidDimensions { width, height })
    }
}
