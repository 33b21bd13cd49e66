//! # Tile Grid
//!
//! A fixed-size W x H array of tiles, stored row-major.
//!
//! Every `(x, y)` with `0 <= x < W` and `0 <= y < H` holds exactly one tile
//! whose stored coordinates are `(x, y)`. Dimensions never change after
//! construction, and out-of-range lookups answer `None` instead of
//! panicking.

use deadgrid_core::GridPos;

use crate::biome::Biome;
use crate::config::validate_dimensions;
use crate::error::WorldResult;
use crate::tile::Tile;

/// Fixed-size grid of tiles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    /// Width in tiles.
    width: usize,
    /// Height in tiles.
    height: usize,
    /// Tiles indexed as `y * width + x`.
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Creates a grid of unobstructed rural ground tiles.
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` if either dimension is zero or not addressable
    /// with `i32` coordinates.
    pub fn new(width: usize, height: usize) -> WorldResult<Self> {
        Self::from_fn(width, height, |pos| Tile::new(pos, Biome::Rural))
    }

    /// Creates a grid by calling `make` for every position in row-major order.
    ///
    /// The tile returned for a position must carry that position; this is
    /// checked in debug builds.
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` as for `new`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn from_fn(width: usize, height: usize, mut make: impl FnMut(GridPos) -> Tile) -> WorldResult<Self> {
        validate_dimensions(width, height)?;

        let mut tiles = Vec::with_capacity(width * height);
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let pos = GridPos::new(x, y);
                let tile = make(pos);
                debug_assert_eq!(tile.pos(), pos, "tile built for the wrong slot");
                tiles.push(tile);
            }
        }

        Ok(Self { width, height, tiles })
    }

    /// Width in tiles.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in tiles.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of tiles.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false; a grid has at least one tile.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Returns true if `(x, y)` lies inside the grid.
    #[inline]
    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    /// Returns true if `pos` lies inside the grid.
    #[inline]
    #[must_use]
    pub fn contains(&self, pos: GridPos) -> bool {
        self.in_bounds(pos.x, pos.y)
    }

    /// Row-major index of `(x, y)`, or `None` when out of bounds.
    #[inline]
    #[must_use]
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// The tile at `(x, y)`, or `None` when out of bounds.
    #[inline]
    #[must_use]
    pub fn tile_at(&self, x: i32, y: i32) -> Option<&Tile> {
        self.index(x, y).map(|i| &self.tiles[i])
    }

    /// Mutable access to the tile at `(x, y)`.
    ///
    /// Tile coordinates stay fixed; only biome, kind, obstruction and loot
    /// can change.
    #[inline]
    pub fn tile_at_mut(&mut self, x: i32, y: i32) -> Option<&mut Tile> {
        self.index(x, y).map(move |i| &mut self.tiles[i])
    }

    /// The tile at `pos`, or `None` when out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, pos: GridPos) -> Option<&Tile> {
        self.tile_at(pos.x, pos.y)
    }

    /// Mutable access to the tile at `pos`.
    #[inline]
    pub fn get_mut(&mut self, pos: GridPos) -> Option<&mut Tile> {
        self.tile_at_mut(pos.x, pos.y)
    }

    /// Returns true if `pos` is in bounds and not obstructed.
    #[inline]
    #[must_use]
    pub fn is_walkable(&self, pos: GridPos) -> bool {
        self.get(pos).is_some_and(Tile::is_walkable)
    }

    /// Iterates tiles in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Iterates tiles mutably in row-major order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Tile> {
        self.tiles.iter_mut()
    }

    /// Counts tiles satisfying `predicate`.
    #[must_use]
    pub fn count_where(&self, predicate: impl Fn(&Tile) -> bool) -> usize {
        self.tiles.iter().filter(|t| predicate(t)).count()
    }

    /// The centre cell, `(W / 2, H / 2)` rounded down.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub const fn center(&self) -> GridPos {
        GridPos::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    /// Renders the grid as text, one line per row, with `path` drawn as `*`.
    #[must_use]
    pub fn to_ascii(&self, path: &[GridPos]) -> String {
        let mut glyphs: Vec<char> = self.tiles.iter().map(Tile::glyph).collect();
        for pos in path {
            if let Some(i) = self.index(pos.x, pos.y) {
                glyphs[i] = '*';
            }
        }

        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in glyphs.chunks(self.width) {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}

impl<'a> IntoIterator for &'a TileGrid {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}
