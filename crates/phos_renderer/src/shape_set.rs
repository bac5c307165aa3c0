//! Closed set of scene primitives and their linear-scan aggregate.

use crate::{Intersect, Intersection, Light, Plane, Rectangle, RectangleLight, Sphere};

/// Every primitive a scene can hold.
pub enum Shape {
    Plane(Plane),
    Rectangle(Rectangle),
    Sphere(Sphere),
    RectangleLight(RectangleLight),
}

impl Shape {
    fn as_intersect(&self) -> &dyn Intersect {
        match self {
            Shape::Plane(plane) => plane,
            Shape::Rectangle(rect) => rect,
            Shape::Sphere(sphere) => sphere,
            Shape::RectangleLight(light) => light,
        }
    }
}

impl Intersect for Shape {
    fn intersect<'a>(&'a self, intersection: &mut Intersection<'a>) -> bool {
        self.as_intersect().intersect(intersection)
    }

    fn as_light(&self) -> Option<&dyn Light> {
        match self {
            Shape::RectangleLight(light) => Some(light),
            _ => None,
        }
    }
}

impl From<Plane> for Shape {
    fn from(plane: Plane) -> Self {
        Shape::Plane(plane)
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Shape::Rectangle(rect)
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<RectangleLight> for Shape {
    fn from(light: RectangleLight) -> Self {
        Shape::RectangleLight(light)
    }
}

/// An ordered list of shapes tested one after another.
#[derive(Default)]
pub struct ShapeSet {
    shapes: Vec<Shape>,
}

impl ShapeSet {
    /// Create a new empty set.
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Add a shape to the set.
    pub fn add(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    /// Remove all shapes.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Get the number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Every member that is also a light, in insertion order.
    pub fn lights(&self) -> Vec<&dyn Light> {
        self.shapes.iter().filter_map(|shape| shape.as_light()).collect()
    }
}

impl Intersect for ShapeSet {
    fn intersect<'a>(&'a self, intersection: &mut Intersection<'a>) -> bool {
        let mut hit_anything = false;
        for shape in &self.shapes {
            if shape.intersect(intersection) {
                hit_anything = true;
            }
        }
        hit_anything
    }
}
