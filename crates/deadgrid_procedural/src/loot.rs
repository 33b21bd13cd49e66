//! # Loot Pool
//!
//! The fixed set of loot identifiers a point-of-interest may hold.

use deadgrid_core::DeterministicRng;

/// Uniform pool of loot identifiers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LootPool {
    items: Vec<String>,
}

impl LootPool {
    /// Creates a pool from identifiers.
    #[must_use]
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the pool holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All identifiers, in pool order.
    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Draws one identifier uniformly. Consumes exactly one draw, even when empty.
    pub fn pick(&self, rng: &mut DeterministicRng) -> Option<&str> {
        let index = rng.next_index(self.items.len());
        self.items.get(index).map(String::as_str)
    }
}

impl Default for LootPool {
    fn default() -> Self {
        Self::new(["bandage", "canned_food", "bottle_water", "scrap", "ammo_small"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_covers_pool() {
        let pool = LootPool::default();
        let mut rng = DeterministicRng::new(3);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..500 {
            seen.insert(pool.pick(&mut rng).unwrap().to_string());
        }
        assert_eq!(seen.len(), pool.len());
    }

    #[test]
    fn test_empty_pool_still_advances_stream() {
        let pool = LootPool::new(Vec::<String>::new());
        let mut rng = DeterministicRng::new(3);
        let mut reference = DeterministicRng::new(3);

        assert!(pool.pick(&mut rng).is_none());
        reference.next_raw();
        assert_eq!(rng, reference);
    }
}
