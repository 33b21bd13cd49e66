//! # DEADGRID Core
//!
//! Primitives shared by world synthesis and navigation.
//!
//! ## Contents
//!
//! - `GridPos`: integer tile coordinates with 4-neighbourhood helpers
//! - `DeterministicRng`: seeded 32-bit stream, bit-identical for identical seeds
//! - `MinHeap`: array-backed binary heap ordered by a caller-supplied comparator
//!
//! ## Example
//!
//! ```rust
//! use deadgrid_core::{DeterministicRng, GridPos, MinHeap};
//!
//! let mut a = DeterministicRng::new(12345);
//! let mut b = DeterministicRng::new(12345);
//! assert_eq!(a.next_f64(), b.next_f64());
//!
//! let mut heap = MinHeap::ordered();
//! heap.push(GridPos::new(3, 1).manhattan(GridPos::ORIGIN));
//! heap.push(1);
//! assert_eq!(heap.pop(), Some(1));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod heap;
pub mod pos;
pub mod rng;

pub use heap::MinHeap;
pub use pos::GridPos;
pub use rng::DeterministicRng;
