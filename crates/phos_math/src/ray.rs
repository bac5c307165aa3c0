use crate::Vec3;

/// Closest distance along a ray at which a hit is accepted.
///
/// Secondary rays start on the surface they leave, so anything nearer than
/// this is treated as the origin surface hitting itself.
pub const RAY_T_MIN: f32 = 1e-4;

/// Far sentinel used when a ray is not bounded.
pub const RAY_T_MAX: f32 = 1e30;

/// Tolerance for near-zero denominators and boundary slack.
pub const EPSILON: f32 = 1e-4;

/// A half-line in 3D space bounded by a maximum parametric distance.
///
/// The direction is not normalized on construction; callers normalize it
/// before tracing.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    pub t_max: f32,
}

impl Ray {
    /// Create an unbounded ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self::with_t_max(origin, direction, RAY_T_MAX)
    }

    /// Create a ray that only reports hits closer than `t_max`.
    pub fn with_t_max(origin: Vec3, direction: Vec3, t_max: f32) -> Self {
        Self {
            origin,
            direction,
            t_max,
        }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Z)
    }
}
