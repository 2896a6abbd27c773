//! Headless frame driver for the cubeview geometry kernel
//!
//! Moves a cuboid frame by frame, projects its edges through the camera and
//! writes the resulting 2D segments for whatever renderer consumes them.

pub mod config;
pub mod output;
pub mod scene;

pub use config::{ConfigError, ViewerConfig};
pub use output::{write_frames, OutputFormat};
pub use scene::{Frame, Scene, Segment};
