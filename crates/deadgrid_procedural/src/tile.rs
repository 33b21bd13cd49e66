//! # Tiles
//!
//! One grid cell: where it is, what it is, whether it blocks movement,
//! and what loot lies on it.

use deadgrid_core::GridPos;
use serde::{Deserialize, Serialize};

use crate::biome::Biome;

/// Surface type of a tile, independent of biome and obstruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileKind {
    /// Plain ground.
    #[default]
    Ground,
    /// Carved road.
    Road,
}

/// A biome or a tile kind; the unit of `random_tile_of` queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Classification {
    /// Matches tiles of this biome.
    Biome(Biome),
    /// Matches tiles of this kind.
    Kind(TileKind),
}

impl From<Biome> for Classification {
    fn from(biome: Biome) -> Self {
        Self::Biome(biome)
    }
}

impl From<TileKind> for Classification {
    fn from(kind: TileKind) -> Self {
        Self::Kind(kind)
    }
}

/// A single grid cell.
///
/// Coordinates are fixed at creation; every other field is readable by
/// consumers and writable through `TileGrid::tile_at_mut`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Position in the grid. Private so it cannot drift from the tile's slot.
    pos: GridPos,
    /// Terrain class.
    pub biome: Biome,
    /// Surface type.
    pub kind: TileKind,
    /// A structure occupies this cell and blocks traversal.
    pub obstructed: bool,
    /// Loot identifiers, oldest first.
    pub items: Vec<String>,
}

impl Tile {
    /// Creates an unobstructed, empty ground tile.
    #[must_use]
    pub fn new(pos: GridPos, biome: Biome) -> Self {
        Self {
            pos,
            biome,
            kind: TileKind::Ground,
            obstructed: false,
            items: Vec::new(),
        }
    }

    /// Position of this tile.
    #[inline]
    #[must_use]
    pub const fn pos(&self) -> GridPos {
        self.pos
    }

    /// Column of this tile.
    #[inline]
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.pos.x
    }

    /// Row of this tile.
    #[inline]
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.pos.y
    }

    /// Returns true if the tile's biome or kind equals `class`.
    #[inline]
    #[must_use]
    pub fn matches(&self, class: Classification) -> bool {
        match class {
            Classification::Biome(biome) => self.biome == biome,
            Classification::Kind(kind) => self.kind == kind,
        }
    }

    /// Returns true if the tile matches any of `classes`.
    #[must_use]
    pub fn matches_any(&self, classes: &[Classification]) -> bool {
        classes.iter().any(|&c| self.matches(c))
    }

    /// Appends a loot identifier.
    pub fn push_item(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    /// Removes and returns the most recently placed loot identifier.
    pub fn take_item(&mut self) -> Option<String> {
        self.items.pop()
    }

    /// Returns true if the tile can be walked on.
    #[inline]
    #[must_use]
    pub const fn is_walkable(&self) -> bool {
        !self.obstructed
    }

    /// Single-character glyph for diagnostic maps.
    ///
    /// Obstruction wins over loot, loot over roads, roads over biome.
    #[must_use]
    pub fn glyph(&self) -> char {
        if self.obstructed {
            '#'
        } else if !self.items.is_empty() {
            '$'
        } else if self.kind == TileKind::Road {
            '='
        } else {
            self.biome.glyph()
        }
    }
}
