//! Reference box scene: five walls, a mirror-ish sphere and a ceiling light.

use std::sync::Arc;

use phos_renderer::{
    Color, Material, PhongMaterial, Plane, RectangleLight, SceneError, ShapeSet, Sphere, Vec3,
};

pub fn build_scene() -> Result<ShapeSet, SceneError> {
    let grey: Arc<dyn Material> = Arc::new(PhongMaterial::new(Color::new(0.5, 0.5, 0.5), 1.0, 0.5, 0.8, 0.2));
    let green: Arc<dyn Material> = Arc::new(PhongMaterial::new(Color::new(0.0, 0.5, 0.0), 1.0, 0.5, 0.8, 0.2));
    let red: Arc<dyn Material> = Arc::new(PhongMaterial::new(Color::new(0.5, 0.0, 0.0), 1.0, 0.5, 0.8, 0.2));
    let blue: Arc<dyn Material> = Arc::new(
        PhongMaterial::new(Color::new(0.0, 0.0, 0.5), 20.0, 0.5, 5.0, 0.5).with_reflectivity(0.5),
    );
    let white: Arc<dyn Material> = Arc::new(PhongMaterial::new(Color::ONE, 1.0, 0.5, 0.3, 0.3));

    let mut world = ShapeSet::new();

    // Floor and ceiling
    world.add(Plane::new(Vec3::new(0.0, -2.0, 0.0), Vec3::Y, grey.clone())?);
    world.add(Plane::new(Vec3::new(0.0, 12.0, 0.0), -Vec3::Y, grey.clone())?);

    // Side walls
    world.add(Plane::new(Vec3::new(7.0, 0.0, 0.0), -Vec3::X, green)?);
    world.add(Plane::new(Vec3::new(-7.0, 0.0, 0.0), Vec3::X, red)?);

    // Back wall
    world.add(Plane::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z, grey)?);

    world.add(Sphere::new(Vec3::new(2.0, 1.0, 0.0), 3.0, blue)?);

    // Area light just below the ceiling
    world.add(RectangleLight::new(
        Vec3::new(-2.0, 11.99, -2.5),
        Vec3::new(4.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 4.0),
        white,
        1.0,
    )?);

    log::info!("Built scene with {} shapes, {} lights", world.len(), world.lights().len());
    Ok(world)
}
