//! Frame driver: moves the cuboid and projects its edges to screen space
use cubeview_core::{Axis, Camera, Cuboid, Point, Vector};
use serde::Serialize;
use tracing::debug;

use crate::config::ViewerConfig;

/// One projected cuboid edge.
///
/// An endpoint is `None` when its sight line never meets the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub edge: usize,
    pub start: Option<(f64, f64)>,
    pub end: Option<(f64, f64)>,
}

impl Segment {
    /// A renderer draws the segment only when both ends projected
    pub fn drawable(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

/// All segments of a single frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub index: usize,
    pub segments: Vec<Segment>,
}

impl Frame {
    pub fn drawable_count(&self) -> usize {
        self.segments.iter().filter(|s| s.drawable()).count()
    }
}

/// A single cuboid viewed through a single camera
pub struct Scene {
    cuboid: Cuboid,
    camera: Camera,
    center: (f64, f64),
    rotation: [f64; 3],
    translation: Vector,
}

impl Scene {
    pub fn new(cuboid: Cuboid, camera: Camera, width: u32, height: u32) -> Self {
        Self {
            cuboid,
            camera,
            center: (width as f64 / 2.0, height as f64 / 2.0),
            rotation: [0.0; 3],
            translation: Vector::zero(),
        }
    }

    pub fn from_config(config: &ViewerConfig) -> Self {
        let [cx, cy, cz] = config.cuboid.center;
        let [px, py, pz] = config.camera.position;
        let [tx, ty, tz] = config.motion.translation;

        let cuboid = Cuboid::new(Point::new(cx, cy, cz), config.cuboid.side_length);
        let camera = Camera::new(Point::new(px, py, pz), config.camera.viewport_distance);

        let mut scene = Self::new(cuboid, camera, config.screen.width, config.screen.height);
        scene.rotation = config.motion.rotation;
        scene.translation = Vector::new(tx, ty, tz);
        scene
    }

    pub fn cuboid(&self) -> &Cuboid {
        &self.cuboid
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn screen_center(&self) -> (f64, f64) {
        self.center
    }

    /// Advance one frame: translate, then rotate about x, y and z in that order
    pub fn step(&mut self) {
        let t = self.translation;
        if !t.is_zero() {
            self.cuboid.translate(t.x(), t.y(), t.z());
        }

        let [rx, ry, rz] = self.rotation;
        for (axis, angle) in [(Axis::X, rx), (Axis::Y, ry), (Axis::Z, rz)] {
            if angle != 0.0 {
                self.cuboid.rotate(axis, angle);
            }
        }
    }

    /// Project both ends of every edge, in topology order
    pub fn project_edges(&self) -> Vec<Segment> {
        let (cx, cy) = self.center;
        self.cuboid
            .edges()
            .enumerate()
            .map(|(edge, e)| Segment {
                edge,
                start: self.camera.project(&e.point0, cx, cy),
                end: self.camera.project(&e.point1, cx, cy),
            })
            .collect()
    }

    /// Project the current state, then step; repeated `frames` times
    pub fn run(&mut self, frames: usize) -> Vec<Frame> {
        let mut output = Vec::with_capacity(frames);
        for index in 0..frames {
            let frame = Frame {
                index,
                segments: self.project_edges(),
            };
            debug!(
                frame = index,
                drawable = frame.drawable_count(),
                cuboid = %self.cuboid,
                "projected frame"
            );
            output.push(frame);
            self.step();
        }
        output
    }
}
