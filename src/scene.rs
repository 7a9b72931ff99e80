use crate::object::{Object, ObjectHit};
use crate::*;

/// Objects of a scene, in insertion order. Read-only once built.
pub struct Scene {
    objects: Vec<Object>,
}

impl Scene {
    pub fn new(objects: Vec<Object>) -> Self {
        Scene { objects }
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    /// Nearest object along the ray. Ties go to the object inserted first.
    pub fn test_hit(&self, ray: &Ray) -> Option<ObjectHit<'_>> {
        let mut hit = None::<ObjectHit>;
        for o in self.objects.iter() {
            let new_hit = o.closest_intersection_point(ray).map(|pos| ObjectHit {
                pos,
                sq_dist: nalgebra::distance_squared(&ray.origin, &pos),
                object: o,
            });
            hit = ObjectHit::nearer_option(hit, new_hit);
        }
        hit
    }

    pub fn any_hit(&self, ray: &Ray) -> bool {
        self.objects
            .iter()
            .any(|o| o.intersection_points(ray).is_some())
    }
}
