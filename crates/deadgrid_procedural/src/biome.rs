//! # Biome Classification
//!
//! Determines the coarse terrain class of a tile from layered noise.
//!
//! The classifier samples one `ValueNoise` field at two frequencies
//! (coarse and fine, in grid units) and sums them with fixed weights into a
//! composite value. Thresholds on that value pick the biome, highest first.

use serde::{Deserialize, Serialize};

use crate::config::{BiomeThresholds, WorldConfig};
use crate::noise::ValueNoise;

/// Biome types in the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Biome {
    /// Open countryside, sparse structures.
    Rural = 0,
    /// Residential sprawl.
    Suburban = 1,
    /// Dense city blocks; structures are common.
    Urban = 2,
    /// Factories and yards, only where the composite value bottoms out.
    Industrial = 3,
}

impl Biome {
    /// All biomes, in discriminant order.
    pub const ALL: [Self; 4] = [Self::Rural, Self::Suburban, Self::Urban, Self::Industrial];

    /// Returns whether a fresh spawn may be placed in this biome.
    #[must_use]
    pub const fn is_safe_spawn(self) -> bool {
        matches!(self, Self::Rural | Self::Suburban)
    }

    /// Lower-case name, as used in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rural => "rural",
            Self::Suburban => "suburban",
            Self::Urban => "urban",
            Self::Industrial => "industrial",
        }
    }

    /// Single-character glyph for diagnostic maps.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Rural => '.',
            Self::Suburban => ',',
            Self::Urban => ':',
            Self::Industrial => '%',
        }
    }
}

impl std::fmt::Display for Biome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Biome classifier that determines biome from grid coordinates.
#[derive(Clone, Debug)]
pub struct BiomeClassifier {
    /// The field sampled at both frequencies.
    noise: ValueNoise,
    /// Divisor for the coarse layer.
    coarse_scale: f64,
    /// Divisor for the fine layer.
    fine_scale: f64,
    /// Weight of the coarse layer.
    coarse_weight: f64,
    /// Weight of the fine layer.
    fine_weight: f64,
    /// Cut-offs on the composite value.
    thresholds: BiomeThresholds,
}

impl BiomeClassifier {
    /// Creates a classifier over `noise` using the layering in `config`.
    #[must_use]
    pub fn new(noise: ValueNoise, config: &WorldConfig) -> Self {
        Self {
            noise,
            coarse_scale: config.coarse_scale,
            fine_scale: config.fine_scale,
            coarse_weight: config.coarse_weight,
            fine_weight: config.fine_weight,
            thresholds: config.thresholds,
        }
    }

    /// Composite noise value at grid cell `(x, y)`.
    ///
    /// With the default weights the result lies in `[0, 1.5)`.
    #[must_use]
    pub fn composite(&self, x: i32, y: i32) -> f64 {
        let (x, y) = (f64::from(x), f64::from(y));
        let coarse = self.noise.sample(x / self.coarse_scale, y / self.coarse_scale);
        let fine = self.noise.sample(x / self.fine_scale, y / self.fine_scale);
        coarse * self.coarse_weight + fine * self.fine_weight
    }

    /// Classifies the biome at grid cell `(x, y)`.
    #[must_use]
    pub fn classify(&self, x: i32, y: i32) -> Biome {
        self.classify_value(self.composite(x, y))
    }

    /// Classifies a composite value. Thresholds are strict (`>`).
    #[must_use]
    pub fn classify_value(&self, value: f64) -> Biome {
        let t = &self.thresholds;
        if value > t.urban {
            Biome::Urban
        } else if value > t.suburban {
            Biome::Suburban
        } else if value > t.rural {
            Biome::Rural
        } else {
            Biome::Industrial
        }
    }
}
