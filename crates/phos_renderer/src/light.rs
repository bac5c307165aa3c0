//! Area lights: emitters that are also visible geometry.

use std::sync::Arc;

use rand::RngCore;

use crate::{gen_f32, Intersect, Intersection, Material, Rectangle, SceneError};
use phos_math::{Color, Vec3};

/// A point drawn on a light's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightSample {
    /// Point on the emitter
    pub position: Vec3,
    /// Emitter normal, oriented toward the shading point
    pub normal: Vec3,
}

/// Trait for shapes that emit light and can be sampled by area.
pub trait Light: Intersect {
    /// Radiance leaving the emitter, constant over its surface.
    fn emitted(&self) -> Color;

    /// Draw a uniformly distributed point on the emitter as seen from `shading_point`.
    fn sample_point(&self, rng: &mut dyn RngCore, shading_point: Vec3) -> LightSample;
}

/// Rectangular area light.
///
/// Camera rays see it as a two-sided emissive rectangle; for sampling, its
/// normal is `cross(side1, side2)` flipped toward the receiver.
pub struct RectangleLight {
    rectangle: Rectangle,
    emission: Color,
}

impl RectangleLight {
    /// Create a light emitting `material` color scaled by `power`.
    pub fn new(
        position: Vec3,
        side1: Vec3,
        side2: Vec3,
        material: Arc<dyn Material>,
        power: f32,
    ) -> Result<Self, SceneError> {
        if !(power.is_finite() && power >= 0.0) {
            return Err(SceneError::InvalidPower(power));
        }
        let emission = material.properties().color * power;
        let rectangle = Rectangle::new(position, side1, side2, material)?;
        Ok(Self {
            rectangle,
            emission,
        })
    }

    pub fn rectangle(&self) -> &Rectangle {
        &self.rectangle
    }
}

impl Intersect for RectangleLight {
    fn intersect<'a>(&'a self, intersection: &mut Intersection<'a>) -> bool {
        if !self.rectangle.intersect(intersection) {
            return false;
        }

        let direction = intersection.ray.direction;
        if let Some(hit) = intersection.hit.as_mut() {
            hit.shape = self;
            hit.emitted = self.emission;
            // Visible from both sides: face the incoming ray
            if hit.normal.dot(direction) > 0.0 {
                hit.normal = -hit.normal;
            }
        }
        true
    }

    fn as_light(&self) -> Option<&dyn Light> {
        Some(self)
    }
}

impl Light for RectangleLight {
    fn emitted(&self) -> Color {
        self.emission
    }

    fn sample_point(&self, rng: &mut dyn RngCore, shading_point: Vec3) -> LightSample {
        let u1 = gen_f32(rng);
        let u2 = gen_f32(rng);

        let rect = &self.rectangle;
        let position = rect.position() + rect.side1() * u1 + rect.side2() * u2;
        let mut normal = rect.normal();
        if normal.dot(position - shading_point) > 0.0 {
            normal = -normal;
        }

        LightSample { position, normal }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{is_same_object, PhongMaterial};
    use phos_math::Ray;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ceiling_light(power: f32) -> RectangleLight {
        let white = Arc::new(PhongMaterial::new(Color::ONE, 1.0, 0.5, 0.3, 0.3));
        RectangleLight::new(
            Vec3::new(-2.0, 11.99, -2.5),
            Vec3::new(4.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 4.0),
            white,
            power,
        )
        .unwrap()
    }

    #[test]
    fn test_emission_is_color_times_power() {
        assert_eq!(ceiling_light(2.5).emitted(), Color::splat(2.5));
    }

    #[test]
    fn test_negative_power_rejected() {
        let white = Arc::new(PhongMaterial::new(Color::ONE, 1.0, 0.5, 0.3, 0.3));
        let light = RectangleLight::new(Vec3::ZERO, Vec3::X, Vec3::Z, white, -1.0);
        assert_eq!(light.err(), Some(SceneError::InvalidPower(-1.0)));
    }

    #[test]
    fn test_samples_stay_on_surface() {
        let light = ceiling_light(1.0);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..256 {
            let sample = light.sample_point(&mut rng, Vec3::ZERO);
            assert!((sample.position.y - 11.99).abs() < 1e-4);
            assert!((-2.0..=2.0).contains(&sample.position.x));
            assert!((-2.5..=1.5).contains(&sample.position.z));
        }
    }

    #[test]
    fn test_sample_normal_faces_receiver() {
        let light = ceiling_light(1.0);
        let mut rng = StdRng::seed_from_u64(11);

        let below = light.sample_point(&mut rng, Vec3::ZERO);
        assert_eq!(below.normal, -Vec3::Y);

        let above = light.sample_point(&mut rng, Vec3::new(0.0, 20.0, 0.0));
        assert_eq!(above.normal, Vec3::Y);
    }

    #[test]
    fn test_visible_hit_carries_emission() {
        let light = ceiling_light(1.0);
        let mut intersection = Intersection::new(Ray::new(Vec3::ZERO, Vec3::Y));

        assert!(light.intersect(&mut intersection));
        let hit = intersection.hit.unwrap();
        assert_eq!(hit.emitted, Color::ONE);
        assert!(is_same_object(hit.shape, &light));
        assert!(hit.shape.as_light().is_some());
    }

    #[test]
    fn test_visible_normal_faces_ray() {
        let light = ceiling_light(1.0);

        let mut from_below = Intersection::new(Ray::new(Vec3::ZERO, Vec3::Y));
        assert!(light.intersect(&mut from_below));
        assert_eq!(from_below.hit.unwrap().normal, -Vec3::Y);

        let mut from_above = Intersection::new(Ray::new(Vec3::new(0.0, 20.0, 0.0), -Vec3::Y));
        assert!(light.intersect(&mut from_above));
        assert_eq!(from_above.hit.unwrap().normal, Vec3::Y);
    }

    #[test]
    fn test_miss_leaves_record_untouched() {
        let light = ceiling_light(1.0);
        let mut intersection = Intersection::new(Ray::new(Vec3::new(10.0, 0.0, 0.0), Vec3::Y));

        assert!(!light.intersect(&mut intersection));
        assert!(!intersection.intersected());
    }
}
