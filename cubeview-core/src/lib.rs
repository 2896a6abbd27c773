//! Cubeview Core Library - Geometry and projection kernel
//!
//! Vector algebra, lines, planes and edges in 3D, a cuboid that rotates about
//! its own center, and a camera that maps 3D points onto a 2D viewport.

pub mod precision;
pub mod vector;
pub mod point;
pub mod line;
pub mod plane;
pub mod edge;
pub mod cuboid;
pub mod camera;

// Re-export commonly used types
pub use camera::Camera;
pub use cuboid::{Axis, Cuboid, EDGE_TOPOLOGY};
pub use edge::Edge;
pub use line::{HasPoint, Line};
pub use plane::Plane;
pub use point::Point;
pub use vector::Vector;
