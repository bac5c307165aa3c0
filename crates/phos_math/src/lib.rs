// Re-export glam for convenience
pub use glam::*;

// Phos math types
mod interval;
mod ray;
pub use interval::Interval;
pub use ray::{Ray, EPSILON, RAY_T_MAX, RAY_T_MIN};

/// RGB color stored as (r, g, b) in (x, y, z). Unclamped until it is written out.
pub type Color = Vec3;
