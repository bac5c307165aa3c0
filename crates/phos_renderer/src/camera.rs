//! Pinhole camera for ray generation.

use crate::{gen_f32, RenderConfig};
use phos_math::{Ray, Vec3};
use rand::RngCore;

/// Build a normalized camera ray through a point on the screen.
///
/// `x_screen` and `y_screen` run over [0, 1], left to right and bottom to
/// top. The same field of view applies to both screen axes.
pub fn make_camera_ray(
    fov_degrees: f32,
    origin: Vec3,
    target: Vec3,
    up_hint: Vec3,
    x_screen: f32,
    y_screen: f32,
) -> Ray {
    let forward = (target - origin).normalize();
    let right = forward.cross(up_hint).normalize();
    let up = right.cross(forward).normalize();

    let fov_scale = 2.0 * (fov_degrees.to_radians() / 2.0).tan();

    let direction = forward
        + right * ((x_screen - 0.5) * fov_scale)
        + up * ((y_screen - 0.5) * fov_scale);

    Ray::new(origin, direction.normalize())
}

/// Camera for generating rays into the scene.
#[derive(Debug, Clone)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,
    look_from: Vec3,
    look_at: Vec3,
    vup: Vec3,
    /// Field of view in degrees
    fov: f32,
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self {
            image_width: 800,
            image_height: 450,
            look_from: Vec3::new(0.0, 0.0, 0.0),
            look_at: Vec3::new(0.0, 0.0, -1.0),
            vup: Vec3::new(0.0, 1.0, 0.0),
            fov: 90.0,
        }
    }

    /// Camera described by the render settings.
    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new()
            .with_resolution(config.width, config.height)
            .with_position(config.camera_position, config.camera_target, config.camera_up)
            .with_fov(config.fov)
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set the field of view in degrees.
    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = fov;
        self
    }

    /// Ray through screen position (x_screen, y_screen) in [0, 1]^2.
    pub fn ray_at(&self, x_screen: f32, y_screen: f32) -> Ray {
        make_camera_ray(self.fov, self.look_from, self.look_at, self.vup, x_screen, y_screen)
    }

    /// Generate a ray for pixel (i, j) with random jitter inside the pixel.
    ///
    /// Row 0 is the top of the image.
    pub fn get_ray(&self, i: u32, j: u32, rng: &mut dyn RngCore) -> Ray {
        let xu = (i as f32 + gen_f32(rng)) / self.image_width as f32;
        let yu = 1.0 - (j as f32 + gen_f32(rng)) / self.image_height as f32;
        self.ray_at(xu, yu)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_center_ray_points_at_target() {
        let ray = make_camera_ray(60.0, Vec3::new(0.0, 5.0, 15.0), Vec3::new(0.0, 5.0, 0.0), Vec3::Y, 0.5, 0.5);

        assert_eq!(ray.origin, Vec3::new(0.0, 5.0, 15.0));
        assert!((ray.direction - -Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_screen_corners_follow_fov() {
        // 90 degrees: the screen edge sits one unit off axis per unit forward
        let right = make_camera_ray(90.0, Vec3::ZERO, -Vec3::Z, Vec3::Y, 1.0, 0.5);
        let top = make_camera_ray(90.0, Vec3::ZERO, -Vec3::Z, Vec3::Y, 0.5, 1.0);

        assert!((right.direction - Vec3::new(1.0, 0.0, -1.0).normalize()).length() < 1e-5);
        assert!((top.direction - Vec3::new(0.0, 1.0, -1.0).normalize()).length() < 1e-5);
    }

    #[test]
    fn test_rays_are_normalized() {
        let camera = Camera::new().with_resolution(16, 16).with_fov(60.0);
        let mut rng = StdRng::seed_from_u64(42);

        for j in 0..16 {
            for i in 0..16 {
                let ray = camera.get_ray(i, j, &mut rng);
                assert!((ray.direction.length() - 1.0).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_top_row_looks_up() {
        let camera = Camera::new().with_resolution(100, 100);
        let mut rng = StdRng::seed_from_u64(42);

        let top = camera.get_ray(50, 0, &mut rng);
        let bottom = camera.get_ray(50, 99, &mut rng);
        assert!(top.direction.y > 0.0);
        assert!(bottom.direction.y < 0.0);
    }

    #[test]
    fn test_from_config() {
        let config = RenderConfig {
            width: 32,
            height: 16,
            ..Default::default()
        };
        let camera = Camera::from_config(&config);

        assert_eq!(camera.image_width, 32);
        assert_eq!(camera.image_height, 16);
        let ray = camera.ray_at(0.5, 0.5);
        assert!((ray.direction - -Vec3::Z).length() < 1e-6);
    }
}
