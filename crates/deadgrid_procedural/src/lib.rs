//! # DEADGRID Procedural Generation
//!
//! Deterministic synthesis of a navigable grid of classified tiles.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Same seed always produces the same world
//! 2. **Single stream**: every random decision draws from one seeded PRNG
//! 3. **Fixed size**: a grid's dimensions never change after synthesis
//! 4. **Total queries**: out-of-range lookups answer `None`, never panic
//!
//! ## Core Components
//!
//! - `ValueNoise`: lattice noise with a smoothstep fade
//! - `BiomeClassifier`: two-frequency composite noise to biome
//! - `TileGrid`: fixed-size W x H tile storage
//! - `WorldGenerator`: obstruction, roads, point-of-interest clusters
//! - `World`: finished grid plus spawn / placement queries
//!
//! ## Example
//!
//! ```rust
//! use deadgrid_procedural::{synthesize, Biome};
//!
//! let mut world = synthesize(80, 60, 12345).unwrap();
//!
//! let spawn = world.random_spawn_site();
//! let tile = world.tile_at(spawn.x, spawn.y).unwrap();
//! assert!(matches!(tile.biome, Biome::Rural | Biome::Suburban));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod biome;
pub mod config;
pub mod error;
pub mod generator;
pub mod grid;
pub mod loot;
pub mod noise;
pub mod tile;
pub mod world;

pub use biome::{Biome, BiomeClassifier};
pub use config::{BiomeThresholds, WorldConfig};
pub use error::{WorldError, WorldResult};
pub use generator::{synthesize, WorldGenerator};
pub use grid::TileGrid;
pub use loot::LootPool;
pub use noise::{ValueNoise, WorldSeed};
pub use tile::{Classification, Tile, TileKind};
pub use world::World;

pub use deadgrid_core::{DeterministicRng, GridPos};
