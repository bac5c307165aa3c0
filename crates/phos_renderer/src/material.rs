//! Material trait and the Phong surface model.

use phos_math::{Color, Vec3};

/// Coefficients shared by every material model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceProperties {
    /// Base surface color
    pub color: Color,
    /// Weight of the constant ambient term
    pub k_ambient: f32,
    /// Fraction of mirror-reflected radiance added on top of direct lighting
    pub reflectivity: f32,
    /// Reserved for refraction; no transport code reads it yet
    pub refractivity: f32,
}

/// Trait for materials that describe how light interacts with surfaces.
///
/// Materials are immutable and shared between shapes, so they must be
/// thread-safe.
pub trait Material: Send + Sync {
    /// Coefficients used by the integrator directly (ambient, reflection).
    fn properties(&self) -> &SurfaceProperties;

    /// Radiance reflected toward the viewer from one light sample.
    ///
    /// - `incoming`: direction of the ray that hit the surface
    /// - `to_light`: unit direction from `position` toward the light sample
    /// - `radiance`: radiance arriving from the light
    fn shade(
        &self,
        position: Vec3,
        normal: Vec3,
        incoming: Vec3,
        to_light: Vec3,
        radiance: Color,
    ) -> Color;
}

/// Phong-style material: a diffuse lobe plus a half-vector specular lobe.
#[derive(Debug, Clone)]
pub struct PhongMaterial {
    properties: SurfaceProperties,
    exponent: f32,
    k_diffuse: f32,
    k_specular: f32,
}

impl PhongMaterial {
    /// Create a non-reflective Phong material.
    ///
    /// - `exponent`: specular highlight sharpness
    /// - `k_diffuse`, `k_specular`, `k_ambient`: lobe weights
    pub fn new(color: Color, exponent: f32, k_diffuse: f32, k_specular: f32, k_ambient: f32) -> Self {
        Self {
            properties: SurfaceProperties {
                color,
                k_ambient,
                reflectivity: 0.0,
                refractivity: 0.0,
            },
            exponent,
            k_diffuse,
            k_specular,
        }
    }

    /// Set the mirror reflection weight.
    pub fn with_reflectivity(mut self, reflectivity: f32) -> Self {
        self.properties.reflectivity = reflectivity;
        self
    }

    /// Set the (currently unused) refraction weight.
    pub fn with_refractivity(mut self, refractivity: f32) -> Self {
        self.properties.refractivity = refractivity;
        self
    }
}

impl Material for PhongMaterial {
    fn properties(&self) -> &SurfaceProperties {
        &self.properties
    }

    fn shade(
        &self,
        _position: Vec3,
        normal: Vec3,
        incoming: Vec3,
        to_light: Vec3,
        radiance: Color,
    ) -> Color {
        let normal = normal.normalize_or_zero();
        // Zero when the light sits exactly behind the viewer's ray
        let half = (to_light - incoming).normalize_or_zero();

        let specular = self.k_specular * half.dot(normal).max(0.0).powf(self.exponent);
        let diffuse = self.k_diffuse * to_light.dot(normal).max(0.0);

        (specular + diffuse) * radiance * self.properties.color
    }
}
