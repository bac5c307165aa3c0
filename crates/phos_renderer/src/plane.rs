//! One-sided infinite plane.

use std::sync::Arc;

use crate::{Intersect, Intersection, Material, SceneError, SurfaceHit};
use phos_math::{Color, Vec3};

/// An infinite plane through `position` facing along `normal`.
///
/// Only the front side is visible: rays travelling along the normal, or
/// parallel to the plane, never hit it.
pub struct Plane {
    position: Vec3,
    normal: Vec3,
    material: Arc<dyn Material>,
}

impl Plane {
    /// Create a plane. The normal is normalized here.
    pub fn new(position: Vec3, normal: Vec3, material: Arc<dyn Material>) -> Result<Self, SceneError> {
        let normal = normal.try_normalize().ok_or(SceneError::ZeroNormal)?;
        Ok(Self {
            position,
            normal,
            material,
        })
    }

}

impl Intersect for Plane {
    fn intersect<'a>(&'a self, intersection: &mut Intersection<'a>) -> bool {
        // dot(n, origin + t * direction - p0) = 0
        //   => t = (dot(n, p0) - dot(n, origin)) / dot(n, direction)
        let n_dot_d = self.normal.dot(intersection.ray.direction);
        if n_dot_d >= 0.0 {
            return false;
        }

        let t = (self.position.dot(self.normal) - intersection.ray.origin.dot(self.normal)) / n_dot_d;
        if !intersection.accepts(t) {
            return false;
        }

        intersection.record(
            t,
            SurfaceHit {
                shape: self,
                material: self.material.as_ref(),
                normal: self.normal,
                emitted: Color::ZERO,
            },
        );
        true
    }
}
