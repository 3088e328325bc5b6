//! A* search over 4-adjacent grid cells
//!
//! Corridor carving asks for shortest paths across unexcavated tiles with a
//! Manhattan heuristic and unit step cost. All per-call state lives in a node
//! arena indexed by flattened cell coordinates and is dropped when the call
//! returns. Ties on `f` break by insertion sequence, so equal-cost searches
//! are deterministic.

use crate::spatial::grid::{Point, TILE_EMPTY, TileGrid};
use bitvec::prelude::bitvec;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

/// The four cardinal neighbor offsets, scanned in a fixed order
const DIRECTIONS: [Point; 4] = [[0, -1], [1, 0], [0, 1], [-1, 0]];

/// Search parameters
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Also terminate on the goal's four neighbors
    ///
    /// Lets a search stop beside an occupied target footprint instead of
    /// having to land exactly on it.
    pub adjacent_goal: bool,
    /// Tile values the search may step on
    pub walkable: Vec<i32>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            adjacent_goal: false,
            walkable: vec![TILE_EMPTY],
        }
    }
}

/// Search node held in the per-call arena
#[derive(Debug, Clone, Copy)]
struct Node {
    pos: Point,
    g: i32,
    h: i32,
    f: i32,
    parent: Option<u32>,
}

/// `|dx| + |dy|`
pub const fn manhattan(a: Point, b: Point) -> i32 {
    (a[0] - b[0]).abs() + (a[1] - b[1]).abs()
}

/// Walk parent links back to the start, excluding the start point itself
fn reconstruct(arena: &[Node], mut index: u32) -> Vec<Point> {
    let mut path = Vec::new();

    loop {
        let Some(node) = arena.get(index as usize) else {
            break;
        };
        path.push(node.pos);

        match node.parent {
            Some(parent) => index = parent,
            None => break,
        }
    }

    // The chain ends at the start node; drop it and restore start-to-goal order
    path.pop();
    path.reverse();
    path
}

/// Shortest 4-connected path from `start` to `goal` over walkable tiles
///
/// Returns the path in start-to-goal order with the start point excluded.
/// An empty vector means no corridor exists (or the start already satisfies
/// the termination test); that is a normal outcome, not an error.
pub fn find_path(grid: &TileGrid, start: Point, goal: Point, config: &SearchConfig) -> Vec<Point> {
    let size = grid.size();
    if size == 0 || !grid.in_bounds(start[0], start[1]) {
        return Vec::new();
    }

    let flatten = |p: Point| p[1] as usize * size + p[0] as usize;

    let mut targets: Vec<Point> = vec![goal];
    if config.adjacent_goal {
        for dir in DIRECTIONS {
            targets.push([goal[0] + dir[0], goal[1] + dir[1]]);
        }
    }

    let mut arena: Vec<Node> = Vec::new();
    let mut node_index: HashMap<usize, u32> = HashMap::new();
    let mut closed = bitvec![0; size * size];

    // Lazy-deletion heap: stale entries are skipped when popped
    let mut open: BinaryHeap<Reverse<(i32, u32, u32)>> = BinaryHeap::new();
    let mut sequence: u32 = 0;

    let start_h = manhattan(start, goal);
    arena.push(Node {
        pos: start,
        g: 0,
        h: start_h,
        f: start_h,
        parent: None,
    });
    node_index.insert(flatten(start), 0);
    open.push(Reverse((start_h, sequence, 0)));

    while let Some(Reverse((f, _, id))) = open.pop() {
        let Some(current) = arena.get(id as usize).copied() else {
            continue;
        };

        // Entry superseded by a relaxation or already finalized
        let current_key = flatten(current.pos);
        if f > current.f || closed.get(current_key).is_some_and(|b| *b) {
            continue;
        }

        if targets.contains(&current.pos) {
            return reconstruct(&arena, id);
        }

        closed.set(current_key, true);

        for dir in DIRECTIONS {
            let neighbor_pos = [current.pos[0] + dir[0], current.pos[1] + dir[1]];

            if !grid.in_bounds(neighbor_pos[0], neighbor_pos[1])
                || !config.walkable.contains(&grid.get(neighbor_pos[0], neighbor_pos[1]))
            {
                continue;
            }

            let key = flatten(neighbor_pos);
            if closed.get(key).is_some_and(|b| *b) {
                continue;
            }

            let g = current.g + 1;

            if let Some(&existing_id) = node_index.get(&key) {
                if let Some(existing) = arena.get_mut(existing_id as usize) {
                    if g < existing.g {
                        existing.g = g;
                        existing.f = g + existing.h;
                        existing.parent = Some(id);
                        sequence += 1;
                        open.push(Reverse((existing.f, sequence, existing_id)));
                    }
                }
            } else {
                let h = manhattan(neighbor_pos, goal);
                let node = Node {
                    pos: neighbor_pos,
                    g,
                    h,
                    f: g + h,
                    parent: Some(id),
                };

                let new_id = arena.len() as u32;
                arena.push(node);
                node_index.insert(key, new_id);
                sequence += 1;
                open.push(Reverse((node.f, sequence, new_id)));
            }
        }
    }

    Vec::new()
}
