//! Phos Renderer - CPU ray tracing core
//!
//! Traces camera rays through a scene of analytic surfaces, estimating
//! direct lighting from sampled area lights and following mirror
//! reflections up to a fixed depth.

mod camera;
mod config;
mod error;
mod integrator;
mod intersection;
mod light;
mod material;
mod plane;
mod rectangle;
mod renderer;
mod shape_set;
mod sphere;

pub use camera::{make_camera_ray, Camera};
pub use config::RenderConfig;
pub use error::{ConfigError, SceneError};
pub use integrator::trace_ray;
pub use intersection::{is_same_object, Intersect, Intersection, SurfaceHit};
pub use light::{Light, LightSample, RectangleLight};
pub use material::{Material, PhongMaterial, SurfaceProperties};
pub use plane::Plane;
pub use rectangle::Rectangle;
pub use renderer::{color_to_rgb, render, render_pixel, row_seed, ImageBuffer};
pub use shape_set::{Shape, ShapeSet};
pub use sphere::Sphere;

/// Re-export the math types from phos_math
pub use phos_math::{Color, Interval, Ray, Vec3};

use rand::{Rng, RngCore};

/// Uniform random float in [0, 1).
#[inline]
pub(crate) fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen()
}
