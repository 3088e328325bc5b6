//! Axis-aligned room rectangles

use crate::spatial::grid::Point;
use serde::Serialize;

/// Axis-aligned rectangle with integer origin and extent
///
/// Rooms are created once by the placer and never resized; the connector and
/// door plotter only read them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width
    pub w: i32,
    /// Height
    pub h: i32,
}

impl Rect {
    /// Create a rectangle from origin and extent
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Geometric center as `(x + w/2, y + h/2)`
    pub fn center(&self) -> [f64; 2] {
        [
            f64::from(self.x) + f64::from(self.w) / 2.0,
            f64::from(self.y) + f64::from(self.h) / 2.0,
        ]
    }

    /// Euclidean distance between the centers of two rectangles
    pub fn center_distance(&self, other: &Self) -> f64 {
        let [ax, ay] = self.center();
        let [bx, by] = other.center();
        (bx - ax).hypot(by - ay)
    }

    /// Whether two rectangles overlap when both are grown by `padding`
    pub const fn intersects(&self, other: &Self, padding: i32) -> bool {
        self.x - padding < other.x + other.w + padding
            && self.x + self.w + padding > other.x - padding
            && self.y - padding < other.y + other.h + padding
            && self.y + self.h + padding > other.y - padding
    }

    /// Whether a point lies inside the rectangle grown by `padding`
    pub const fn contains(&self, point: Point, padding: i32) -> bool {
        let [x, y] = point;
        x >= self.x - padding
            && x <= self.x + self.w + padding
            && y >= self.y - padding
            && y <= self.y + self.h + padding
    }

    /// Every integer point along the four edges
    ///
    /// The corridor connector scans these exhaustively when picking the
    /// closest pair of boundary points between two rooms.
    pub fn edge_points(&self) -> Vec<Point> {
        let x2 = self.x + self.w;
        let y2 = self.y + self.h;

        let mut points = Vec::with_capacity(2 * (self.w + self.h).max(0) as usize);

        for x in self.x..x2 {
            points.push([x, self.y]);
            points.push([x, y2]);
        }

        for y in self.y..y2 {
            points.push([self.x, y]);
            points.push([x2, y]);
        }

        points
    }
}
