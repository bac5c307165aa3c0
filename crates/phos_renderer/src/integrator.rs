//! Recursive radiance estimator.
//!
//! Direct lighting comes from Monte Carlo sampling of area lights with a
//! shadow ray per sample; indirect light only arrives through perfect
//! mirror reflection, bounded by `max_bounce`.

use crate::{is_same_object, Intersect, Intersection, Light, RenderConfig, SurfaceHit};
use phos_math::{Color, Ray, Vec3};
use rand::RngCore;

/// Compute the radiance carried back along `ray`.
///
/// `n_bounce` is the depth of this ray: 0 for camera rays. A ray that
/// misses every shape returns black and spawns nothing.
pub fn trace_ray(
    ray: &Ray,
    world: &dyn Intersect,
    lights: &[&dyn Light],
    config: &RenderConfig,
    rng: &mut dyn RngCore,
    n_bounce: u32,
) -> Color {
    let mut intersection = Intersection::new(*ray);
    world.intersect(&mut intersection);
    let Some(hit) = intersection.hit else {
        return Color::ZERO;
    };

    let position = intersection.position();
    let mut color = direct_lighting(ray, &hit, position, world, lights, config, rng);

    // Emitters seen directly show their full emission
    if hit.shape.as_light().is_some() {
        color += hit.emitted;
    }

    if n_bounce >= config.max_bounce {
        return color;
    }

    let reflectivity = hit.material.properties().reflectivity;
    if reflectivity <= 0.0 {
        return color;
    }

    let reflected = Ray::new(position, reflect(ray.direction, hit.normal));
    color + reflectivity * trace_ray(&reflected, world, lights, config, rng, n_bounce + 1)
}

/// Ambient term plus the light-sample average at a shading point.
fn direct_lighting(
    ray: &Ray,
    hit: &SurfaceHit,
    position: Vec3,
    world: &dyn Intersect,
    lights: &[&dyn Light],
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let props = hit.material.properties();
    let samples = config.light_samples as f32;

    // Pre-scaled so the final division leaves it at k_ambient * color
    let mut color = props.k_ambient * props.color * samples;

    for _ in 0..config.light_samples {
        for &light in lights {
            let sample = light.sample_point(rng, position);

            let offset = sample.position - position;
            let distance = offset.length();
            // Sample coincides with the shading point: no direction to shade with
            let Some(to_light) = offset.try_normalize() else {
                continue;
            };

            let mut shadow = Intersection::new(Ray::with_t_max(position, to_light, distance));
            world.intersect(&mut shadow);
            let visible = match shadow.hit {
                None => true,
                // The emitter's own surface does not shadow its samples
                Some(blocker) => is_same_object(blocker.shape, light),
            };

            if visible {
                color += hit
                    .material
                    .shade(position, hit.normal, ray.direction, to_light, light.emitted());
            }
        }
    }

    color / samples
}

/// Mirror `direction` about `normal`.
#[inline]
fn reflect(direction: Vec3, normal: Vec3) -> Vec3 {
    direction - 2.0 * direction.dot(normal) * normal
}
