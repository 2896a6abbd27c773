//! Pinhole camera and point-to-screen projection
use std::fmt;

use crate::edge::Edge;
use crate::plane::Plane;
use crate::point::Point;
use crate::vector::Vector;

/// A camera at `position` looking along `direction`, projecting onto a
/// viewport plane `viewport_distance` ahead of it.
///
/// The camera only faces +x. Screen x comes from world y and screen y from
/// world z; supporting other orientations needs a right/up basis derived from
/// the direction instead of fixed world axes.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Point,
    direction: Vector,
    viewport_distance: f64,
    viewport: Plane,
}

impl Camera {
    pub fn new(position: Point, viewport_distance: f64) -> Self {
        let direction = Vector::new(1.0, 0.0, 0.0).unit();
        let viewport = Plane::new(position + direction * viewport_distance, direction);

        Self {
            position,
            direction,
            viewport_distance,
            viewport,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn direction(&self) -> Vector {
        self.direction
    }

    pub fn viewport_distance(&self) -> f64 {
        self.viewport_distance
    }

    /// Plane the scene is projected onto, fixed at construction
    pub fn viewport(&self) -> &Plane {
        &self.viewport
    }

    /// Project a 3D point to 2D screen coordinates.
    ///
    /// The sight line from the camera to `point` is intersected with the
    /// viewport and the intersection's y and z are offset by the screen center.
    /// Returns `None` when the sight line never meets the viewport, which
    /// includes a point at the camera's own position.
    pub fn project(&self, point: &Point, center_x: f64, center_y: f64) -> Option<(f64, f64)> {
        let sight_line = Edge::new(self.position, *point);

        match self.viewport.intersection(&sight_line.line()) {
            Some(hit) => Some((center_x + hit.y(), center_y + hit.z())),
            None => {
                tracing::trace!(%point, "sight line parallel to viewport");
                None
            }
        }
    }
}

impl fmt::Display for Camera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Camera(position:{}, direction:{}, viewportDistance:{}, viewport:{})",
            self.position, self.direction, self.viewport_distance, self.viewport
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::HasPoint;

    #[test]
    fn test_camera_creation() {
        let camera = Camera::new(Point::new(10.0, 5.0, -5.0), 1000.0);
        assert_eq!(camera.direction(), Vector::new(1.0, 0.0, 0.0));
        assert_eq!(camera.viewport().anchor, Point::new(1010.0, 5.0, -5.0));
        assert_eq!(camera.viewport().normal, camera.direction());
        assert!(camera.viewport().has_point(&Point::new(1010.0, 300.0, 42.0)));
    }

    #[test]
    fn test_point_on_viewport_keeps_its_offsets() {
        let camera = Camera::new(Point::origin(), 1000.0);
        let screen = camera.project(&Point::new(1000.0, 50.0, 20.0), 450.0, 300.0);
        assert_eq!(screen, Some((500.0, 320.0)));
    }

    #[test]
    fn test_farther_points_shrink_towards_center() {
        let camera = Camera::new(Point::origin(), 1000.0);
        let (x, y) = camera
            .project(&Point::new(4000.0, 400.0, -200.0), 450.0, 300.0)
            .expect("point in front of camera");
        assert!((x - 550.0).abs() < 1e-9);
        assert!((y - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_sight_line_parallel_to_viewport() {
        let camera = Camera::new(Point::origin(), 1000.0);
        assert_eq!(camera.project(&Point::new(0.0, 30.0, -10.0), 450.0, 300.0), None);
    }

    #[test]
    fn test_point_at_camera_position() {
        let camera = Camera::new(Point::new(1.0, 2.0, 3.0), 1000.0);
        assert_eq!(camera.project(&Point::new(1.0, 2.0, 3.0), 0.0, 0.0), None);
    }

    #[test]
    fn test_point_behind_camera_is_mirrored() {
        let camera = Camera::new(Point::origin(), 1000.0);
        let screen = camera.project(&Point::new(-1000.0, 10.0, 20.0), 0.0, 0.0);
        let (x, y) = screen.expect("sight line still crosses the viewport plane");
        assert!((x + 10.0).abs() < 1e-9);
        assert!((y + 20.0).abs() < 1e-9);
    }
}
