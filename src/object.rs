use crate::shape::Shape;
use crate::*;

/// A shape placed in a scene together with its surface properties.
#[derive(Clone, Debug)]
pub struct Object {
    pub shape: Shape,
    pub colour: RGB,
    pub reflective: bool,
}

impl Object {
    pub fn new(shape: impl Into<Shape>, colour: RGB, reflective: bool) -> Self {
        Object {
            shape: shape.into(),
            colour,
            reflective,
        }
    }

    pub fn colour(&self) -> RGB {
        self.colour
    }

    pub fn is_reflective(&self) -> bool {
        self.reflective
    }

    pub fn intersection_points(&self, ray: &Ray) -> Option<Vec<P3>> {
        self.shape.intersection_points(ray)
    }

    pub fn closest_intersection_point(&self, ray: &Ray) -> Option<P3> {
        self.shape.closest_intersection_point(ray)
    }

    pub fn surface_normal_at(&self, point: &P3) -> Option<V3> {
        self.shape.surface_normal_at(point)
    }
}

pub struct ObjectHit<'a> {
    pub pos: P3,
    pub sq_dist: f32,
    pub object: &'a Object,
}

impl<'a> ObjectHit<'a> {
    pub fn nearer_option(x: Option<Self>, y: Option<Self>) -> Option<Self> {
        match (x, y) {
            (Some(x), Some(y)) => Some(if y.sq_dist < x.sq_dist { y } else { x }),
            (x, None) => x,
            (None, y) => y,
        }
    }
}
