//! Render settings consumed by the camera, integrator and frame driver.

use phos_math::{Vec3, EPSILON};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Render configuration.
///
/// Missing fields fall back to the defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Jittered camera rays averaged per pixel
    pub samples_per_pixel: u32,
    /// Samples drawn from every light at each shading point
    pub light_samples: u32,
    /// Number of mirror bounces after the camera hit (0 = direct lighting only)
    pub max_bounce: u32,
    /// Field of view in degrees
    pub fov: f32,
    pub camera_position: Vec3,
    pub camera_target: Vec3,
    pub camera_up: Vec3,
    /// Base seed; each image row derives its own stream from it
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            samples_per_pixel: 64,
            light_samples: 32,
            max_bounce: 1,
            fov: 60.0,
            camera_position: Vec3::new(0.0, 5.0, 15.0),
            camera_target: Vec3::new(0.0, 5.0, 0.0),
            camera_up: Vec3::Y,
            seed: 0,
        }
    }
}

impl RenderConfig {
    /// Check the settings before anything is traced.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyImage {
                width: self.width,
                height: self.height,
            });
        }
        if self.samples_per_pixel == 0 {
            return Err(ConfigError::ZeroSamples("samples_per_pixel"));
        }
        if self.light_samples == 0 {
            return Err(ConfigError::ZeroSamples("light_samples"));
        }
        if !(self.fov > 0.0 && self.fov < 180.0) {
            return Err(ConfigError::InvalidFov(self.fov));
        }

        let forward = self.camera_target - self.camera_position;
        if forward.length() < EPSILON {
            return Err(ConfigError::DegenerateView);
        }
        if forward.normalize().cross(self.camera_up).length() < EPSILON {
            return Err(ConfigError::DegenerateUp);
        }
        Ok(())
    }
}
