//! Cube wireframe with in-place translation and rotation
use std::fmt;

use crate::edge::Edge;
use crate::point::Point;
use crate::vector::Vector;

/// Pairs of vertex indices making up the 12 edges: top ring, bottom ring, then verticals.
pub const EDGE_TOPOLOGY: [(usize, usize); 12] = [
    // top face
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    // bottom face
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    // connecting edges between the two faces
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// Axis of rotation, local to the cuboid's center
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// The two coordinates that change when rotating about this axis, in the
    /// order used as (horizontal, vertical) for the polar angle.
    fn plane_coords(self, point: &Point) -> (f64, f64) {
        match self {
            Axis::X => (point.z(), point.y()),
            Axis::Y => (point.x(), point.z()),
            Axis::Z => (point.x(), point.y()),
        }
    }

    fn set_plane_coords(self, point: &mut Point, a: f64, b: f64) {
        match self {
            Axis::X => {
                point.set_z(a);
                point.set_y(b);
            }
            Axis::Y => {
                point.set_x(a);
                point.set_z(b);
            }
            Axis::Z => {
                point.set_x(a);
                point.set_y(b);
            }
        }
    }
}

/// An axis-aligned cube that owns its 8 vertices.
///
/// Edges are not stored as points. Each edge is a pair of indices into the
/// vertex array, so moving the vertices moves every edge with them.
#[derive(Debug, Clone, PartialEq)]
pub struct Cuboid {
    center: Point,
    side_length: f64,
    vertices: [Point; 8],
}

impl Cuboid {
    pub fn new(center: Point, side_length: f64) -> Self {
        let half = side_length / 2.0;
        let (x, y, z) = (center.x(), center.y(), center.z());

        let vertices = [
            Point::new(x + half, y + half, z + half),
            Point::new(x + half, y + half, z - half),
            Point::new(x - half, y + half, z - half),
            Point::new(x - half, y + half, z + half),
            Point::new(x + half, y - half, z + half),
            Point::new(x + half, y - half, z - half),
            Point::new(x - half, y - half, z - half),
            Point::new(x - half, y - half, z + half),
        ];

        Self {
            center,
            side_length,
            vertices,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn side_length(&self) -> f64 {
        self.side_length
    }

    pub fn vertices(&self) -> &[Point; 8] {
        &self.vertices
    }

    /// The 12 edges in topology order, built from the current vertex positions
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        EDGE_TOPOLOGY
            .iter()
            .map(move |&(a, b)| Edge::new(self.vertices[a], self.vertices[b]))
    }

    pub fn edge(&self, index: usize) -> Option<Edge> {
        EDGE_TOPOLOGY
            .get(index)
            .map(|&(a, b)| Edge::new(self.vertices[a], self.vertices[b]))
    }

    /// Move the center and every vertex by `(dx, dy, dz)`
    pub fn translate(&mut self, dx: f64, dy: f64, dz: f64) {
        let offset = Vector::new(dx, dy, dz);
        self.center += offset;
        for vertex in &mut self.vertices {
            *vertex += offset;
        }
    }

    /// Rotate every vertex by `angle` radians about `axis` through the cuboid's center.
    ///
    /// Each vertex's two affected coordinates, taken relative to the center, are
    /// converted to polar form, the angle is added, and the result is converted back.
    pub fn rotate(&mut self, axis: Axis, angle: f64) {
        let (ca, cb) = axis.plane_coords(&self.center);
        for vertex in &mut self.vertices {
            let (a, b) = axis.plane_coords(vertex);
            let (da, db) = (a - ca, b - cb);

            let r = da.hypot(db);
            let phi = db.atan2(da) + angle;

            axis.set_plane_coords(vertex, ca + r * phi.cos(), cb + r * phi.sin());
        }
    }

    /// Rotate about the x axis, acting on (z, y)
    pub fn rotate_x(&mut self, angle: f64) {
        self.rotate(Axis::X, angle);
    }

    /// Rotate about the y axis, acting on (x, z)
    pub fn rotate_y(&mut self, angle: f64) {
        self.rotate(Axis::Y, angle);
    }

    /// Rotate about the z axis, acting on (x, y)
    pub fn rotate_z(&mut self, angle: f64) {
        self.rotate(Axis::Z, angle);
    }
}

impl fmt::Display for Cuboid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cuboid({},{})", self.center, self.side_length)
    }
}
