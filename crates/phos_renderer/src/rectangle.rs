//! Bounded quad spanned by two edge vectors.

use std::sync::Arc;

use crate::{Intersect, Intersection, Material, SceneError, SurfaceHit};
use phos_math::{Color, Interval, Vec3, EPSILON};

/// A parallelogram with one corner at `position` and edges `side1`, `side2`.
///
/// The edge vectors carry both direction and extent. The shading normal is
/// `cross(side1, side2)`; hits are accepted from either side.
pub struct Rectangle {
    position: Vec3,
    side1: Vec3,
    side2: Vec3,
    material: Arc<dyn Material>,
}

impl Rectangle {
    /// Create a rectangle, rejecting zero-length or parallel edges.
    pub fn new(
        position: Vec3,
        side1: Vec3,
        side2: Vec3,
        material: Arc<dyn Material>,
    ) -> Result<Self, SceneError> {
        if side1.length() < EPSILON {
            return Err(SceneError::DegenerateEdge("side1"));
        }
        if side2.length() < EPSILON {
            return Err(SceneError::DegenerateEdge("side2"));
        }
        // Angle test on unit edges, independent of the quad's size
        if (side1 / side1.length()).cross(side2 / side2.length()).length() < EPSILON {
            return Err(SceneError::ParallelEdges);
        }

        Ok(Self {
            position,
            side1,
            side2,
            material,
        })
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn side1(&self) -> Vec3 {
        self.side1
    }

    pub fn side2(&self) -> Vec3 {
        self.side2
    }

    /// Unit normal of the supporting plane.
    pub fn normal(&self) -> Vec3 {
        self.side1.cross(self.side2).normalize()
    }
}

impl Intersect for Rectangle {
    fn intersect<'a>(&'a self, intersection: &mut Intersection<'a>) -> bool {
        let normal = self.normal();
        let n_dot_d = normal.dot(intersection.ray.direction);
        if n_dot_d.abs() < EPSILON {
            return false;
        }

        let t = (self.position.dot(normal) - intersection.ray.origin.dot(normal)) / n_dot_d;
        if !intersection.accepts(t) {
            return false;
        }

        // Project the hit into the (side1, side2) basis
        let side1_length = self.side1.length();
        let side2_length = self.side2.length();
        let relative = intersection.ray.at(t) - self.position;
        let local_x = relative.dot(self.side1 / side1_length);
        let local_y = relative.dot(self.side2 / side2_length);

        if !Interval::new(-EPSILON, side1_length).contains(local_x)
            || !Interval::new(-EPSILON, side2_length).contains(local_y)
        {
            return false;
        }

        intersection.record(
            t,
            SurfaceHit {
                shape: self,
                material: self.material.as_ref(),
                normal,
                emitted: Color::ZERO,
            },
        );
        true
    }
}
