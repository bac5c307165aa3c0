//! Sphere primitive for ray tracing.

use std::sync::Arc;

use crate::{Intersect, Intersection, Material, SceneError, SurfaceHit};
use phos_math::{Color, Ray, Vec3, EPSILON, RAY_T_MIN};

/// A sphere primitive.
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<dyn Material>,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Arc<dyn Material>) -> Result<Self, SceneError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SceneError::InvalidRadius(radius));
        }
        Ok(Self {
            center,
            radius,
            material,
        })
    }

    /// Both ray parameters where `ray` crosses the sphere, nearest first.
    ///
    /// Uses the cancellation-free form t0 = q / a, t1 = c / q. When `q` is
    /// too small to divide by, `fallback` stands in for the second root.
    pub fn roots(&self, ray: &Ray, fallback: f32) -> Option<(f32, f32)> {
        // Solve in a frame centered on the sphere
        let origin = ray.origin - self.center;

        let a = ray.direction.length_squared();
        if a < EPSILON * EPSILON {
            return None;
        }
        let b = 2.0 * ray.direction.dot(origin);
        let c = origin.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrt_d = discriminant.sqrt();

        let q = if b < 0.0 {
            -0.5 * (b - sqrt_d)
        } else {
            -0.5 * (b + sqrt_d)
        };

        let t0 = q / a;
        let t1 = if q.abs() > EPSILON { c / q } else { fallback };

        Some(if t0 > t1 { (t1, t0) } else { (t0, t1) })
    }
}

impl Intersect for Sphere {
    fn intersect<'a>(&'a self, intersection: &mut Intersection<'a>) -> bool {
        let Some((t0, t1)) = self.roots(&intersection.ray, intersection.t) else {
            return false;
        };

        if t0 >= intersection.t || t1 < RAY_T_MIN {
            return false;
        }

        let t = if t0 >= RAY_T_MIN {
            t0
        } else if t1 < intersection.t {
            t1
        } else {
            return false;
        };

        let normal = (intersection.ray.at(t) - self.center).normalize();
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PhongMaterial;
    use phos_math::RAY_T_MAX;

    fn sphere(center: Vec3, radius: f32) -> Sphere {
        let material = Arc::new(PhongMaterial::new(Color::new(0.0, 0.0, 0.5), 20.0, 0.5, 5.0, 0.5));
        Sphere::new(center, radius, material).unwrap()
    }

    #[test]
    fn test_roots_through_center() {
        let sphere = sphere(Vec3::ZERO, 3.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), -Vec3::Z);

        let (t0, t1) = sphere.roots(&ray, RAY_T_MAX).unwrap();
        assert!((t0 - 7.0).abs() < 1e-5);
        assert!((t1 - 13.0).abs() < 1e-5);
    }

    #[test]
    fn test_nearer_root_selected() {
        let sphere = sphere(Vec3::ZERO, 3.0);
        let mut intersection = Intersection::new(Ray::new(Vec3::new(0.0, 0.0, 10.0), -Vec3::Z));

        assert!(sphere.intersect(&mut intersection));
        assert!((intersection.t - 7.0).abs() < 1e-5);
        assert!((intersection.hit.unwrap().normal - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn test_roots_symmetric_about_center() {
        let sphere = sphere(Vec3::new(1.0, 2.0, 3.0), 2.0);
        let ray = Ray::new(Vec3::new(1.0, 2.0, 3.0 - RAY_T_MIN), Vec3::Z);

        let (t0, t1) = sphere.roots(&ray, RAY_T_MAX).unwrap();
        // Roots straddle the center, which sits at t = RAY_T_MIN
        assert!(((t0 + t1) * 0.5 - RAY_T_MIN).abs() < 1e-4);

        let mut intersection = Intersection::new(ray);
        assert!(sphere.intersect(&mut intersection));
        assert!((intersection.t - t1).abs() < 1e-5);
    }

    #[test]
    fn test_origin_inside_picks_exit() {
        let sphere = sphere(Vec3::ZERO, 3.0);
        let mut intersection = Intersection::new(Ray::new(Vec3::ZERO, Vec3::X));

        assert!(sphere.intersect(&mut intersection));
        assert!((intersection.t - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_miss() {
        let sphere = sphere(Vec3::ZERO, 3.0);
        let mut intersection = Intersection::new(Ray::new(Vec3::new(0.0, 5.0, 10.0), -Vec3::Z));

        assert!(!sphere.intersect(&mut intersection));
    }

    #[test]
    fn test_sphere_behind_ray() {
        let sphere = sphere(Vec3::ZERO, 3.0);
        let mut intersection = Intersection::new(Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::Z));

        assert!(!sphere.intersect(&mut intersection));
    }

    #[test]
    fn test_closer_hit_already_recorded() {
        let sphere = sphere(Vec3::ZERO, 3.0);
        let mut intersection = Intersection::new(Ray::with_t_max(Vec3::new(0.0, 0.0, 10.0), -Vec3::Z, 5.0));

        assert!(!sphere.intersect(&mut intersection));
        assert_eq!(intersection.t, 5.0);
    }

    #[test]
    fn test_zero_direction_is_a_miss() {
        let sphere = sphere(Vec3::ZERO, 3.0);
        assert!(sphere.roots(&Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO), RAY_T_MAX).is_none());
    }

    #[test]
    fn test_invalid_radius() {
        let material: Arc<dyn Material> = Arc::new(PhongMaterial::new(Color::ONE, 1.0, 0.5, 0.5, 0.0));
        assert_eq!(
            Sphere::new(Vec3::ZERO, 0.0, material.clone()).err(),
            Some(SceneError::InvalidRadius(0.0))
        );
        assert!(Sphere::new(Vec3::ZERO, f32::NAN, material).is_err());
    }
}
