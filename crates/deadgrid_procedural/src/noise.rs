//! # Value Noise
//!
//! Continuous pseudo-random scalar field over 2D coordinates.
//!
//! The field is a lattice of corner values in `[0, 1)` produced by an
//! integer coordinate hash. Between lattice points the four surrounding
//! corners are blended bilinearly after smoothing each axis with the fade
//! curve `t²(3 − 2t)`.
//!
//! ## Determinism Guarantee
//!
//! The hash salt is drawn from the world's `DeterministicRng` when the
//! field is created. Identical `(x, y)` and identical stream state yield
//! identical output; the hash is integer-only, so results do not depend on
//! platform floating-point transcendental functions.

use deadgrid_core::DeterministicRng;

/// World seed for deterministic generation.
///
/// All procedural generation derives from this seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WorldSeed(u32);

impl WorldSeed {
    /// Creates a new world seed.
    #[inline]
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self(seed)
    }

    /// Derives a sub-seed for a specific purpose.
    ///
    /// Used to open independent streams (e.g. for tooling) without
    /// disturbing the main synthesis stream.
    #[inline]
    #[must_use]
    pub const fn derive(self, purpose: u32) -> Self {
        let mut hash = self.0 ^ purpose.wrapping_mul(0x9E37_79B9);
        hash = hash.wrapping_mul(0x85EB_CA6B);
        hash ^= hash >> 13;
        hash = hash.wrapping_mul(0xC2B2_AE35);
        hash ^= hash >> 16;
        Self(hash)
    }

    /// Opens the generation stream for this seed.
    #[inline]
    #[must_use]
    pub const fn stream(self) -> DeterministicRng {
        DeterministicRng::new(self.0)
    }
}

impl Default for WorldSeed {
    fn default() -> Self {
        Self(12_345)
    }
}

/// 2D value noise.
///
/// Produces values in the range `[0, 1)`.
///
/// # Example
///
/// ```rust
/// use deadgrid_core::DeterministicRng;
/// use deadgrid_procedural::ValueNoise;
///
/// let mut rng = DeterministicRng::new(42);
/// let noise = ValueNoise::new(&mut rng);
/// let value = noise.sample(10.0 / 12.0, 4.0 / 12.0);
/// assert!((0.0..1.0).contains(&value));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValueNoise {
    /// Mixed into every lattice hash.
    salt: u32,
}

impl ValueNoise {
    /// 2^32 as a float.
    const UNIT: f64 = 4_294_967_296.0;

    /// Creates a field whose lattice salt is the next draw of `rng`.
    #[must_use]
    pub fn new(rng: &mut DeterministicRng) -> Self {
        Self::from_salt(rng.next_raw())
    }

    /// Creates a field with an explicit lattice salt.
    #[inline]
    #[must_use]
    pub const fn from_salt(salt: u32) -> Self {
        Self { salt }
    }

    /// Samples the field at `(x, y)`.
    ///
    /// # Returns
    ///
    /// A value in the range `[0, 1)`.
    #[must_use]
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let xi = fast_floor(x);
        let yi = fast_floor(y);
        let u = fade(x - f64::from(xi));
        let v = fade(y - f64::from(yi));

        let v00 = self.lattice(xi, yi);
        let v10 = self.lattice(xi.wrapping_add(1), yi);
        let v01 = self.lattice(xi, yi.wrapping_add(1));
        let v11 = self.lattice(xi.wrapping_add(1), yi.wrapping_add(1));

        lerp(lerp(v00, v10, u), lerp(v01, v11, u), v)
    }

    /// Corner value at integer lattice point `(xi, yi)`, in `[0, 1)`.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn lattice(&self, xi: i32, yi: i32) -> f64 {
        let mut h = (xi as u32).wrapping_mul(0x27D4_EB2D)
            ^ (yi as u32).wrapping_mul(0x1656_67B1)
            ^ self.salt;
        h ^= h >> 15;
        h = h.wrapping_mul(0x2C1B_3C6D);
        h ^= h >> 12;
        h = h.wrapping_mul(0x297A_2D39);
        h ^= h >> 15;
        f64::from(h) / Self::UNIT
    }
}

/// Smoothstep fade curve `t²(3 − 2t)`.
#[inline]
fn fade(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Fast floor function.
///
/// Faster than `f64::floor()` followed by a cast for our use case.
#[inline]
#[allow(clippy::cast_possible_truncation)]
fn fast_floor(x: f64) -> i32 {
    let xi = x as i32;
    if x < f64::from(xi) { xi - 1 } else { xi }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let noise1 = ValueNoise::new(&mut DeterministicRng::new(12345));
        let noise2 = ValueNoise::new(&mut DeterministicRng::new(12345));

        for i in 0..100 {
            let x = f64::from(i) * 0.1;
            let y = f64::from(i) * 0.17;
            assert_eq!(
                noise1.sample(x, y).to_bits(),
                noise2.sample(x, y).to_bits(),
                "Noise should be deterministic"
            );
        }
    }

    #[test]
    fn test_different_salts_different_results() {
        let noise1 = ValueNoise::from_salt(1);
        let noise2 = ValueNoise::from_salt(2);

        let differing = (0..32)
            .filter(|&i| noise1.lattice(i, -i) != noise2.lattice(i, -i))
            .count();
        assert!(differing > 30, "Different salts should produce different lattices");
    }

    #[test]
    fn test_range() {
        let noise = ValueNoise::from_salt(42);

        for i in 0..10_000 {
            let x = f64::from(i) * 0.1 - 500.0;
            let y = f64::from(i) * 0.13 - 650.0;
            let value = noise.sample(x, y);

            assert!((0.0..1.0).contains(&value), "Value {value} out of range at ({x}, {y})");
        }
    }

    #[test]
    fn test_lattice_points_are_exact() {
        let noise = ValueNoise::from_salt(99);

        for (x, y) in [(0, 0), (3, -7), (-12, 40)] {
            assert_eq!(noise.sample(f64::from(x), f64::from(y)), noise.lattice(x, y));
        }
    }

    #[test]
    fn test_continuity() {
        let noise = ValueNoise::from_salt(42);

        let x = 100.3;
        let y = 100.6;
        let delta = 0.001;

        let v1 = noise.sample(x, y);
        let diff1 = (v1 - noise.sample(x + delta, y)).abs();
        let diff2 = (v1 - noise.sample(x, y + delta)).abs();

        assert!(diff1 < 0.01, "Noise should be continuous: diff = {diff1}");
        assert!(diff2 < 0.01, "Noise should be continuous: diff = {diff2}");
    }

    #[test]
    fn test_fade_endpoints() {
        assert_eq!(fade(0.0), 0.0);
        assert_eq!(fade(1.0), 1.0);
        assert_eq!(fade(0.5), 0.5);
    }

    #[test]
    fn test_fast_floor_negative() {
        assert_eq!(fast_floor(-0.5), -1);
        assert_eq!(fast_floor(-1.0), -1);
        assert_eq!(fast_floor(2.99), 2);
    }

    #[test]
    fn test_seed_derivation() {
        let base = WorldSeed::new(42);
        let derived1 = base.derive(1);
        let derived2 = base.derive(2);

        assert_ne!(derived1, derived2, "Different purposes should give different seeds");
        assert_eq!(derived1, base.derive(1), "Same purpose should give same seed");
        assert_ne!(derived1, base, "Derived seed should differ from base");
    }
}
