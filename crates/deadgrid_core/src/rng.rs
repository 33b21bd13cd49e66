//! # Deterministic PRNG
//!
//! A 32-bit multiply-xor-shift stream (Mulberry32 family).
//!
//! ## Determinism Guarantee
//!
//! Every value is a pure function of the seed and the number of draws
//! taken so far. All arithmetic is explicit `wrapping_*` on `u32`, so the
//! sequence is bit-identical on any platform and in any build profile.
//!
//! The stream also implements `rand::RngCore` and `rand::SeedableRng`,
//! so `rand` adaptors (`gen_range`, `choose`, ...) can be driven from a
//! world seed. World synthesis itself only uses the explicit draws below
//! so that its consumption of the stream never depends on `rand` internals.

use rand::{Error, RngCore, SeedableRng};

/// Seeded pseudo-random stream.
///
/// # Example
///
/// ```rust
/// use deadgrid_core::DeterministicRng;
///
/// let mut rng = DeterministicRng::new(42);
/// let value = rng.next_f64();
/// assert!((0.0..1.0).contains(&value));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeterministicRng {
    /// Weyl counter; advanced by a fixed odd increment per draw.
    state: u32,
}

impl DeterministicRng {
    /// Weyl increment. Odd, so the counter visits all 2^32 states.
    const INCREMENT: u32 = 0x6D2B_79F5;

    /// 2^32 as a float, the divisor mapping a `u32` into `[0, 1)`.
    const UNIT: f64 = 4_294_967_296.0;

    /// Creates a stream from a 32-bit seed.
    #[inline]
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Next raw 32-bit value.
    #[inline]
    pub fn next_raw(&mut self) -> u32 {
        self.state = self.state.wrapping_add(Self::INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Next value in `[0, 1)`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_raw()) / Self::UNIT
    }

    /// Next index in `[0, len)`, computed as `floor(next_f64() * len)`.
    ///
    /// Returns 0 when `len` is 0 (one draw is still consumed so that the
    /// stream position does not depend on `len`).
    #[inline]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn next_index(&mut self, len: usize) -> usize {
        let draw = self.next_f64();
        if len == 0 {
            return 0;
        }
        ((draw * len as f64) as usize).min(len - 1)
    }

    /// Returns true with probability `p`.
    #[inline]
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

impl RngCore for DeterministicRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next_raw()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let low = u64::from(self.next_raw());
        let high = u64::from(self.next_raw());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_raw().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for DeterministicRng {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    #[allow(clippy::cast_possible_truncation)]
    fn seed_from_u64(state: u64) -> Self {
        Self::new((state ^ (state >> 32)) as u32)
    }
}
