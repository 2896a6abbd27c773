//! Viewer configuration loaded from TOML
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Error types for loading and validating a viewer configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Output surface size in pixels; projections are centered on it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub width: u32,
    pub height: u32,
}

impl ScreenConfig {
    pub fn center(&self) -> (f64, f64) {
        (self.width as f64 / 2.0, self.height as f64 / 2.0)
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 900,
            height: 600,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f64; 3],
    pub viewport_distance: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            viewport_distance: 1000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CuboidConfig {
    pub center: [f64; 3],
    pub side_length: f64,
}

impl Default for CuboidConfig {
    fn default() -> Self {
        Self {
            center: [3000.0, 0.0, 0.0],
            side_length: 1000.0,
        }
    }
}

/// Per-frame motion applied to the cuboid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Radians about the cuboid's local x, y and z axes
    pub rotation: [f64; 3],
    pub translation: [f64; 3],
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            rotation: [0.0, 0.0, 0.001],
            translation: [0.0, 0.0, 0.0],
        }
    }
}

/// Complete viewer configuration.
///
/// Every section is optional in the file; missing values fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub screen: ScreenConfig,
    pub camera: CameraConfig,
    pub cuboid: CuboidConfig,
    pub motion: MotionConfig,
    pub frames: usize,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            screen: ScreenConfig::default(),
            camera: CameraConfig::default(),
            cuboid: CuboidConfig::default(),
            motion: MotionConfig::default(),
            frames: 1,
        }
    }
}

impl ViewerConfig {
    /// Read and validate a TOML config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.screen.width == 0 || self.screen.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "screen size must be positive, got {}x{}",
                self.screen.width, self.screen.height
            )));
        }
        positive("camera.viewport_distance", self.camera.viewport_distance)?;
        positive("cuboid.side_length", self.cuboid.side_length)?;
        finite("camera.position", &self.camera.position)?;
        finite("cuboid.center", &self.cuboid.center)?;
        finite("motion.rotation", &self.motion.rotation)?;
        finite("motion.translation", &self.motion.translation)?;
        Ok(())
    }
}

fn positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")))
    }
}

fn finite(name: &str, values: &[f64; 3]) -> Result<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{name} must be finite, got {values:?}")))
    }
}
