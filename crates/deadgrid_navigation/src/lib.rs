//! # DEADGRID Navigation
//!
//! Shortest walkable routes across a tile grid.
//!
//! ## Contract
//!
//! - A query reads the grid and never changes it
//! - Each query allocates its own frontier, visited set and node arena,
//!   so any number of queries may run concurrently on a shared `&TileGrid`
//! - "No route" and "off the grid" are `None`, not errors
//! - Nothing is cached between calls
//!
//! ## Example
//!
//! ```rust
//! use deadgrid_navigation::find_path;
//! use deadgrid_procedural::{synthesize, GridPos};
//!
//! let mut world = synthesize(80, 60, 12345).unwrap();
//! let from = world.random_spawn_site();
//! let to = world.random_spawn_site();
//!
//! if let Some(path) = find_path(from, to, world.grid()) {
//!     assert!(path.len() as u32 >= from.manhattan(to));
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod astar;
pub mod grid;
pub mod shared;

pub use astar::{find_path, find_path_with_stats, PathSearch};
pub use grid::NavGrid;
pub use shared::SharedGrid;
