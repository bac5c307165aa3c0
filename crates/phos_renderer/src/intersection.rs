//! Closest-hit record and the `Intersect` capability shared by all shapes.

use crate::{Color, Light, Material, Ray};
use phos_math::{Vec3, RAY_T_MIN};

/// Shading data written by the shape that currently owns the closest hit.
#[derive(Clone, Copy)]
pub struct SurfaceHit<'a> {
    /// Shape that produced the hit
    pub shape: &'a dyn Intersect,
    /// Material at the hit point
    pub material: &'a dyn Material,
    /// Shading normal (unit length)
    pub normal: Vec3,
    /// Radiance emitted by the surface toward the ray, zero for non-emitters
    pub emitted: Color,
}

/// Closest-hit accumulator for a single ray.
///
/// Seed it from a ray and hand it to every shape in turn. `t` only ever
/// shrinks, and `t` and `hit` are always replaced together.
#[derive(Clone, Copy)]
pub struct Intersection<'a> {
    pub ray: Ray,
    /// Distance of the closest hit so far (starts at `ray.t_max`)
    pub t: f32,
    pub hit: Option<SurfaceHit<'a>>,
}

impl<'a> Intersection<'a> {
    /// Start an empty record for `ray`.
    pub fn new(ray: Ray) -> Self {
        Self {
            ray,
            t: ray.t_max,
            hit: None,
        }
    }

    /// True once any shape has recorded a hit.
    pub fn intersected(&self) -> bool {
        self.hit.is_some()
    }

    /// Shading point of the current hit.
    pub fn position(&self) -> Vec3 {
        self.ray.at(self.t)
    }

    /// Whether a hit at distance `t` would improve this record.
    #[inline]
    pub fn accepts(&self, t: f32) -> bool {
        t >= RAY_T_MIN && t < self.t
    }

    /// Replace the current closest hit.
    pub fn record(&mut self, t: f32, hit: SurfaceHit<'a>) {
        self.t = t;
        self.hit = Some(hit);
    }
}

/// Trait for anything a ray can be tested against.
pub trait Intersect: Send + Sync {
    /// Test the ray carried by `intersection` against this object.
    ///
    /// Returns true only if this object produced a hit closer than the one
    /// already recorded, in which case the record now describes that hit.
    fn intersect<'a>(&'a self, intersection: &mut Intersection<'a>) -> bool;

    /// Light view of this object, for emitters.
    fn as_light(&self) -> Option<&dyn Light> {
        None
    }
}

/// True if `shape` and `light` are the same object.
#[inline]
pub fn is_same_object(shape: &dyn Intersect, light: &dyn Light) -> bool {
    std::ptr::addr_eq(shape, light)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PhongMaterial, Sphere};
    use std::sync::Arc;

    #[test]
    fn test_new_intersection_is_empty() {
        let ray = Ray::with_t_max(Vec3::ZERO, Vec3::X, 5.0);
        let intersection = Intersection::new(ray);

        assert!(!intersection.intersected());
        assert_eq!(intersection.t, 5.0);
    }

    #[test]
    fn test_accepts_window() {
        let intersection = Intersection::new(Ray::with_t_max(Vec3::ZERO, Vec3::X, 5.0));

        assert!(intersection.accepts(RAY_T_MIN));
        assert!(intersection.accepts(4.99));
        assert!(!intersection.accepts(5.0));
        assert!(!intersection.accepts(RAY_T_MIN * 0.5));
        assert!(!intersection.accepts(-1.0));
    }

    #[test]
    fn test_record_replaces_hit() {
        let material = Arc::new(PhongMaterial::new(Color::ONE, 1.0, 0.5, 0.5, 0.1));
        let sphere = Sphere::new(Vec3::ZERO, 1.0, material.clone()).unwrap();

        let mut intersection = Intersection::new(Ray::new(Vec3::new(0.0, 0.0, 5.0), -Vec3::Z));
        intersection.record(
            2.0,
            SurfaceHit {
                shape: &sphere,
                material: material.as_ref(),
                normal: Vec3::Y,
                emitted: Color::ZERO,
            },
        );

        assert!(intersection.intersected());
        assert_eq!(intersection.t, 2.0);
        assert_eq!(intersection.position(), Vec3::new(0.0, 0.0, 3.0));
        assert_eq!(intersection.hit.unwrap().normal, Vec3::Y);
    }
}
