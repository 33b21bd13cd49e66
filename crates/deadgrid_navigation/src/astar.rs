//! # A* Pathfinding
//!
//! Shortest walkable route between two cells of a `NavGrid`.
//!
//! ## Algorithm
//!
//! - Moves: 4 axis-aligned neighbours, cost 1 each
//! - Heuristic: Manhattan distance (admissible and consistent here, so the
//!   first time the target is popped its cost is optimal)
//! - Frontier: `MinHeap` ordered by `(f, insertion sequence)`; the sequence
//!   makes the chosen path among equal-cost routes reproducible
//! - Decrease-key: a better route pushes a fresh entry; the old one is
//!   skipped when popped because its cell is already visited (lazy deletion)
//!
//! Stale entries stay in the heap until popped, so heap size is bounded by
//! the number of pushes (O(E)), not by the number of cells.
//!
//! ## Edge Cases
//!
//! - Target out of bounds: `None`, nothing is explored
//! - Start out of bounds: `None`, nothing is explored
//! - Start equal to target: empty path
//! - Obstructed target: never enqueued, so `None`
//! - Obstructed start: allowed; only the cells stepped into are checked

use deadgrid_core::{GridPos, MinHeap};
use tracing::trace;

use crate::grid::NavGrid;

/// Outcome of one search, with the work it took.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathSearch {
    /// Cells to step through, excluding the start and ending at the target.
    /// `None` if the target cannot be reached.
    pub path: Option<Vec<GridPos>>,
    /// Number of cells expanded (popped and finalized).
    pub expanded: usize,
    /// Number of entries pushed onto the frontier, stale ones included.
    pub pushed: usize,
}

impl PathSearch {
    const fn unreachable(expanded: usize, pushed: usize) -> Self {
        Self {
            path: None,
            expanded,
            pushed,
        }
    }
}

/// One explored cell. Lives in the per-query arena.
#[derive(Clone, Copy, Debug)]
struct SearchNode {
    pos: GridPos,
    /// Steps from the start.
    g: u32,
    /// Arena index of the predecessor; `None` for the start node.
    parent: Option<usize>,
}

/// Frontier entry pointing into the arena.
#[derive(Clone, Copy, Debug)]
struct FrontierEntry {
    /// `g + h`.
    f: u32,
    /// Insertion order, the tie-break between equal `f`.
    seq: u64,
    node: usize,
}

/// Finds a shortest path from `start` to `target`.
///
/// Returns the cells to step through, excluding `start` and ending at
/// `target`. `None` means no route exists (or either end is off the grid);
/// that is a normal outcome, not an error.
///
/// # Example
///
/// ```rust
/// use deadgrid_core::GridPos;
/// use deadgrid_navigation::find_path;
/// use deadgrid_procedural::TileGrid;
///
/// let grid = TileGrid::new(5, 5).unwrap();
/// let path = find_path(GridPos::new(0, 0), GridPos::new(4, 0), &grid).unwrap();
/// assert_eq!(path, [(1, 0), (2, 0), (3, 0), (4, 0)].map(GridPos::from));
/// ```
#[must_use]
pub fn find_path<G: NavGrid + ?Sized>(start: GridPos, target: GridPos, grid: &G) -> Option<Vec<GridPos>> {
    find_path_with_stats(start, target, grid).path
}

/// Like `find_path`, also reporting how much of the grid was explored.
#[must_use]
pub fn find_path_with_stats<G: NavGrid + ?Sized>(start: GridPos, target: GridPos, grid: &G) -> PathSearch {
    let (Some(start_index), Some(_)) = (grid.cell_index(start), grid.cell_index(target)) else {
        trace!(%start, %target, "path endpoint out of bounds");
        return PathSearch::unreachable(0, 0);
    };

    let cells = grid.width() * grid.height();
    let mut nodes: Vec<SearchNode> = Vec::new();
    let mut best_g: Vec<Option<u32>> = vec![None; cells];
    let mut visited = vec![false; cells];
    let mut frontier = MinHeap::new(|a: &FrontierEntry, b: &FrontierEntry| {
        a.f.cmp(&b.f).then(a.seq.cmp(&b.seq))
    });
    let mut seq = 0u64;
    let mut expanded = 0usize;

    nodes.push(SearchNode {
        pos: start,
        g: 0,
        parent: None,
    });
    best_g[start_index] = Some(0);
    frontier.push(FrontierEntry {
        f: start.manhattan(target),
        seq,
        node: 0,
    });

    while let Some(entry) = frontier.pop() {
        let current = nodes[entry.node];
        let Some(current_index) = grid.cell_index(current.pos) else {
            continue;
        };
        if visited[current_index] {
            continue;
        }
        visited[current_index] = true;
        expanded += 1;

        if current.pos == target {
            let path = reconstruct(&nodes, entry.node);
            let pushed = usize::try_from(seq).unwrap_or(usize::MAX).saturating_add(1);
            trace!(%start, %target, steps = path.len(), expanded, pushed, "path found");
            return PathSearch {
                path: Some(path),
                expanded,
                pushed,
            };
        }

        for next in current.pos.neighbors() {
            let Some(next_index) = grid.cell_index(next) else {
                continue;
            };
            if visited[next_index] || grid.is_obstructed(next) {
                continue;
            }

            let g = current.g + 1;
            if best_g[next_index].map_or(true, |known| g < known) {
                best_g[next_index] = Some(g);
                nodes.push(SearchNode {
                    pos: next,
                    g,
                    parent: Some(entry.node),
                });
                seq += 1;
                frontier.push(FrontierEntry {
                    f: g + next.manhattan(target),
                    seq,
                    node: nodes.len() - 1,
                });
            }
        }
    }

    let pushed = usize::try_from(seq).unwrap_or(usize::MAX).saturating_add(1);
    trace!(%start, %target, expanded, pushed, "no path");
    PathSearch::unreachable(expanded, pushed)
}

/// Walks predecessor links from `last` back to the start, then returns the
/// cells in start-to-target order without the start cell.
fn reconstruct(nodes: &[SearchNode], last: usize) -> Vec<GridPos> {
    let mut path = Vec::new();
    let mut cursor = Some(last);
    while let Some(index) = cursor {
        let node = nodes[index];
        path.push(node.pos);
        cursor = node.parent;
    }
    path.reverse();
    path.remove(0);
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use deadgrid_procedural::TileGrid;

    fn open_grid(w: usize, h: usize) -> TileGrid {
        TileGrid::new(w, h).unwrap()
    }

    fn block(grid: &mut TileGrid, cells: &[(i32, i32)]) {
        for &(x, y) in cells {
            grid.tile_at_mut(x, y).unwrap().obstructed = true;
        }
    }

    fn p(x: i32, y: i32) -> GridPos {
        GridPos::new(x, y)
    }

    #[test]
    fn test_straight_line() {
        let grid = open_grid(5, 5);
        let path = find_path(p(0, 0), p(4, 0), &grid).unwrap();
        assert_eq!(path, vec![p(1, 0), p(2, 0), p(3, 0), p(4, 0)]);
    }

    #[test]
    fn test_detour_around_single_block() {
        let mut grid = open_grid(5, 5);
        block(&mut grid, &[(2, 0)]);

        let path = find_path(p(0, 0), p(4, 0), &grid).unwrap();
        assert_eq!(path.len(), 6);
        assert!(!path.contains(&p(2, 0)));
        assert_eq!(path.last(), Some(&p(4, 0)));
        assert!(path.iter().any(|c| c.y == 1), "detour should pass through row 1");
    }

    #[test]
    fn test_same_cell_is_empty_path() {
        let grid = open_grid(3, 3);
        assert_eq!(find_path(p(1, 1), p(1, 1), &grid), Some(Vec::new()));
    }

    #[test]
    fn test_out_of_bounds_target_explores_nothing() {
        let grid = open_grid(5, 5);
        let search = find_path_with_stats(p(0, 0), p(-1, 0), &grid);
        assert_eq!(search.path, None);
        assert_eq!(search.expanded, 0);
        assert_eq!(search.pushed, 0);

        assert_eq!(find_path(p(0, 0), p(5, 5), &grid), None);
    }

    #[test]
    fn test_out_of_bounds_start() {
        let grid = open_grid(5, 5);
        assert_eq!(find_path(p(-1, 0), p(0, 0), &grid), None);
    }

    #[test]
    fn test_walled_target_unreachable() {
        let mut grid = open_grid(5, 5);
        block(&mut grid, &[(2, 1), (1, 2), (3, 2), (2, 3)]);

        let search = find_path_with_stats(p(0, 0), p(2, 2), &grid);
        assert_eq!(search.path, None);
        // Everything outside the wall is explored before giving up.
        assert_eq!(search.expanded, 25 - 4 - 1);
    }

    #[test]
    fn test_obstructed_target_unreachable() {
        let mut grid = open_grid(3, 1);
        block(&mut grid, &[(2, 0)]);
        assert_eq!(find_path(p(0, 0), p(2, 0), &grid), None);
    }

    #[test]
    fn test_obstructed_start_may_leave() {
        let mut grid = open_grid(3, 1);
        block(&mut grid, &[(0, 0)]);
        assert_eq!(find_path(p(0, 0), p(2, 0), &grid), Some(vec![p(1, 0), p(2, 0)]));
    }

    #[test]
    fn test_corridor_maze() {
        // S . # . .
        // # . # . #
        // . . . . T
        let mut grid = open_grid(5, 3);
        block(&mut grid, &[(2, 0), (0, 1), (2, 1), (4, 1)]);

        let path = find_path(p(0, 0), p(4, 2), &grid).unwrap();
        assert_eq!(path.len(), 6);
        assert_eq!(path[0], p(1, 0));
        assert_eq!(path[1], p(1, 1));
        assert_eq!(path.last(), Some(&p(4, 2)));
    }

    #[test]
    fn test_equal_cost_choice_is_stable() {
        let grid = open_grid(6, 6);
        let first = find_path(p(0, 0), p(5, 5), &grid).unwrap();
        for _ in 0..5 {
            assert_eq!(find_path(p(0, 0), p(5, 5), &grid).unwrap(), first);
        }
        assert_eq!(first.len(), 10);
    }

    #[test]
    fn test_heuristic_keeps_search_focused() {
        let grid = open_grid(50, 50);
        let search = find_path_with_stats(p(0, 25), p(49, 25), &grid);
        assert_eq!(search.path.map(|path| path.len()), Some(49));
        assert!(search.expanded < 200, "expanded {} cells on an open field", search.expanded);
    }
}
