//! Corridor network construction over placed rooms
//!
//! Builds a Prim's-style spanning structure by repeatedly attaching the pool
//! room closest (by center distance) to any already-visited room, optionally
//! recording runner-up pairs as loop candidates that survive a later density
//! lottery. Every retained edge is then realized as an A* corridor between
//! the closest pair of room perimeter points.

use crate::algorithm::pathfinding::{SearchConfig, find_path};
use crate::math::SplitMix32;
use crate::spatial::grid::Point;
use crate::spatial::{Rect, TileGrid};
use std::time::{Duration, Instant};

/// Corridor construction parameters
#[derive(Debug, Clone, Copy)]
pub struct ConnectorConfig {
    /// How many runner-up pairs each round contributes as loop candidates
    pub extra_loop_level: usize,
    /// Probability that a recorded loop candidate is kept
    pub extra_loop_density: f64,
    /// Wall-clock budget for spanning construction
    ///
    /// A cooperative bail-out, not a preemption mechanism: on expiry the
    /// remaining pool rooms simply receive no spanning edge and the level
    /// may be disconnected.
    pub timeout: Duration,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            extra_loop_level: crate::io::configuration::DEFAULT_EXTRA_LOOP_LEVEL,
            extra_loop_density: crate::io::configuration::DEFAULT_EXTRA_LOOP_DENSITY,
            timeout: Duration::from_millis(crate::io::configuration::DEFAULT_TIMEOUT_MS),
        }
    }
}

/// An unordered pair of rooms selected for connection
#[derive(Debug, Clone, Copy)]
struct RoomPair {
    a: Rect,
    b: Rect,
}

/// Closest pair of perimeter points between two rooms
///
/// Exhaustive scan over both perimeters, O(perimeter^2) per edge.
fn closest_edge_points(a: &Rect, b: &Rect) -> Option<(Point, Point)> {
    let edge_a = a.edge_points();
    let edge_b = b.edge_points();

    let mut best: Option<(Point, Point, f64)> = None;

    for pa in &edge_a {
        for pb in &edge_b {
            let dx = f64::from(pb[0] - pa[0]);
            let dy = f64::from(pb[1] - pa[1]);
            let distance = dx.hypot(dy);

            if best.is_none_or(|(_, _, d)| distance < d) {
                best = Some((*pa, *pb, distance));
            }
        }
    }

    best.map(|(pa, pb, _)| (pa, pb))
}

/// Build the spanning edge set plus surviving loop edges
fn select_edges(rooms: &[Rect], rng: &mut SplitMix32, config: &ConnectorConfig) -> Vec<RoomPair> {
    let mut edges: Vec<RoomPair> = Vec::new();
    let mut loop_candidates: Vec<RoomPair> = Vec::new();

    let Some((first, rest)) = rooms.split_first() else {
        return edges;
    };

    let mut visited: Vec<Rect> = vec![*first];
    let mut pool: Vec<Rect> = rest.to_vec();
    let start_time = Instant::now();

    while !pool.is_empty() && start_time.elapsed() < config.timeout {
        // Rank every non-overlapping (visited, pool) pair by center distance
        let mut candidates: Vec<(usize, usize, f64)> = Vec::new();

        for (v, visited_room) in visited.iter().enumerate() {
            for (p, pool_room) in pool.iter().enumerate() {
                if !visited_room.intersects(pool_room, 0) {
                    candidates.push((v, p, visited_room.center_distance(pool_room)));
                }
            }
        }

        candidates.sort_by(|a, b| a.2.total_cmp(&b.2));

        let Some(&(best_v, best_p, _)) = candidates.first() else {
            // Every pool room overlaps every visited room; nothing to attach
            break;
        };

        if let (Some(a), Some(b)) = (visited.get(best_v), pool.get(best_p)) {
            edges.push(RoomPair { a: *a, b: *b });
        }

        for rank in 1..=config.extra_loop_level {
            if let Some(&(v, p, _)) = candidates.get(rank) {
                if let (Some(a), Some(b)) = (visited.get(v), pool.get(p)) {
                    loop_candidates.push(RoomPair { a: *a, b: *b });
                }
            }
        }

        let attached = pool.remove(best_p);
        visited.push(attached);
    }

    for candidate in loop_candidates {
        if rng.next_float() < config.extra_loop_density {
            edges.push(candidate);
        }
    }

    edges
}

/// Connect rooms with corridors and return one path per retained edge
///
/// Paths run through unexcavated tiles only, terminating adjacent to the
/// target perimeter point. Some paths may be empty when no route exists;
/// callers treat those as "no corridor" rather than a fault.
pub fn connect_rooms(
    grid: &TileGrid,
    rooms: &[Rect],
    rng: &mut SplitMix32,
    config: &ConnectorConfig,
) -> Vec<Vec<Point>> {
    let edges = select_edges(rooms, rng, config);

    let search = SearchConfig {
        adjacent_goal: true,
        ..SearchConfig::default()
    };

    edges
        .iter()
        .filter_map(|edge| closest_edge_points(&edge.a, &edge.b))
        .map(|(start, goal)| find_path(grid, start, goal, &search))
        .collect()
}
