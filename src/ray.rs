use crate::*;

/// A half-line with a unit direction.
#[derive(Clone, Debug)]
pub struct Ray {
    pub origin: P3,
    pub dir: V3,
}

impl Ray {
    /// `dir` is normalised; a zero-length direction stays zero so that every
    /// shape reports a miss for it.
    pub fn new(origin: P3, dir: V3) -> Self {
        let dir = dir.try_normalize(0.0).unwrap_or_else(V3::zeros);
        Ray { origin, dir }
    }

    pub fn at(&self, dist: f32) -> P3 {
        self.origin + self.dir * dist
    }
}
