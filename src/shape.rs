use crate::math::{cramer, CALCULATION_EPSILON, M3};
use crate::*;

pub trait ShapeImpl {
    /// Every point in front of the ray origin where the ray meets the surface.
    fn intersection_points(&self, ray: &Ray) -> Option<Vec<P3>>;

    fn surface_normal_at(&self, point: &P3) -> Option<V3>;

    fn closest_intersection_point(&self, ray: &Ray) -> Option<P3> {
        let mut closest = None::<(f32, P3)>;
        for p in self.intersection_points(ray)? {
            let dist = nalgebra::distance(&ray.origin, &p);
            if closest.map_or(true, |(d, _)| dist < d) {
                closest = Some((dist, p));
            }
        }
        closest.map(|(_, p)| p)
    }
}

pub mod shapes {
    use super::*;

    #[derive(Clone, Debug)]
    pub struct Sphere {
        pub center: P3,
        pub radius: f32,
    }

    impl Sphere {
        /// Panics if `radius` is not positive.
        pub fn new(center: P3, radius: f32) -> Self {
            assert!(radius > 0.0);
            Sphere { center, radius }
        }

        fn on_surface(&self, ray: &Ray, dist: f32) -> P3 {
            let v = (ray.at(dist) - self.center).normalize();
            self.center + v * self.radius
        }
    }

    impl ShapeImpl for Sphere {
        fn intersection_points(&self, ray: &Ray) -> Option<Vec<P3>> {
            let center_to_origin = ray.origin - self.center;
            let a = ray.dir.dot(&ray.dir);
            let b = 2.0 * center_to_origin.dot(&ray.dir);
            let c = center_to_origin.dot(&center_to_origin) - self.radius * self.radius;
            let mut disc = b * b - 4.0 * a * c;
            if disc.abs() <= CALCULATION_EPSILON {
                disc = 0.0;
            }

            if a == 0.0 {
                None
            } else if disc > 0.0 {
                // the root without cancellation first, the other from t1 * t2 = c / a
                let t1 = if b < 0.0 {
                    (-b + disc.sqrt()) / (2.0 * a)
                } else {
                    (-b - disc.sqrt()) / (2.0 * a)
                };
                let t2 = c / (a * t1);
                let points: Vec<P3> = [t1, t2]
                    .iter()
                    .filter(|t| **t > 0.0)
                    .map(|t| self.on_surface(ray, *t))
                    .collect();
                if points.is_empty() {
                    None
                } else {
                    Some(points)
                }
            } else if disc == 0.0 {
                let t = -b / (2.0 * a);
                if t > 0.0 {
                    Some(vec![self.on_surface(ray, t)])
                } else {
                    None
                }
            } else {
                None
            }
        }

        fn surface_normal_at(&self, point: &P3) -> Option<V3> {
            let rel = point - self.center;
            if (rel.norm() - self.radius).abs() < CALCULATION_EPSILON {
                Some(rel.normalize())
            } else {
                None
            }
        }
    }

    #[derive(Clone, Debug)]
    pub struct Triangle {
        pub abc: [P3; 3],
    }

    impl Triangle {
        pub fn new(a: P3, b: P3, c: P3) -> Self {
            Triangle { abc: [a, b, c] }
        }

        pub fn centroid(&self) -> P3 {
            P3::from((self.abc[0].coords + self.abc[1].coords + self.abc[2].coords) / 3.0)
        }

        /// Solves `origin + t * dir = A + β (B - A) + γ (C - A)` for `(t, β, γ)`.
        pub fn solve(&self, ray: &Ray) -> Option<(f32, f32, f32)> {
            let [a, b, c] = self.abc;
            let m = M3::from_columns(&[ray.dir, a - b, a - c]);
            cramer(&m, &(a - ray.origin)).map(|x| (x[0], x[1], x[2]))
        }

        /// Barycentric `(β, γ)` of a point assumed to lie in the triangle's plane.
        pub fn barycentric(&self, point: &P3) -> Option<(f32, f32)> {
            let [a, b, c] = self.abc;
            let ab = b - a;
            let ac = c - a;
            let m = M3::from_columns(&[ab.cross(&ac), ab, ac]);
            cramer(&m, &(point - a)).map(|x| (x[1], x[2]))
        }

        pub fn normal(&self) -> V3 {
            let [a, b, c] = self.abc;
            (b - a).cross(&(c - b)).normalize()
        }
    }

    fn inside(beta: f32, gamma: f32, tolerance: f32) -> bool {
        beta >= -tolerance && gamma >= -tolerance && beta + gamma <= 1.0 + tolerance
    }

    /// A surface made of flat triangles, e.g. a quadrilateral.
    #[derive(Clone, Debug)]
    pub struct TriangleBased {
        triangles: Vec<Triangle>,
    }

    impl TriangleBased {
        pub fn new(triangles: Vec<Triangle>) -> Self {
            TriangleBased { triangles }
        }

        pub fn quadrilateral(bottom_left: P3, bottom_right: P3, top_left: P3, top_right: P3) -> Self {
            Self::new(vec![
                Triangle::new(top_left, bottom_right, bottom_left),
                Triangle::new(top_left, top_right, bottom_right),
            ])
        }

        pub fn triangles(&self) -> &[Triangle] {
            &self.triangles
        }
    }

    impl From<Triangle> for TriangleBased {
        fn from(t: Triangle) -> Self {
            Self::new(vec![t])
        }
    }

    impl ShapeImpl for TriangleBased {
        fn intersection_points(&self, ray: &Ray) -> Option<Vec<P3>> {
            let points: Vec<P3> = self
                .triangles
                .iter()
                .filter_map(|tri| tri.solve(ray))
                .filter(|(t, beta, gamma)| inside(*beta, *gamma, 0.0) && *t > 0.0)
                .map(|(t, _, _)| ray.at(t))
                .collect();
            if points.is_empty() {
                None
            } else {
                Some(points)
            }
        }

        fn surface_normal_at(&self, point: &P3) -> Option<V3> {
            self.triangles
                .iter()
                .find(|tri| {
                    tri.barycentric(point)
                        .map_or(false, |(beta, gamma)| inside(beta, gamma, CALCULATION_EPSILON))
                })
                .map(Triangle::normal)
        }
    }
}

#[derive(Clone, Debug)]
pub enum Shape {
    Sphere(shapes::Sphere),
    TriangleBased(shapes::TriangleBased),
}

impl_wrap_from_many! {Shape, shapes, [Sphere, TriangleBased]}

impl From<shapes::Triangle> for Shape {
    fn from(t: shapes::Triangle) -> Self {
        Shape::TriangleBased(t.into())
    }
}

use Shape::*;
impl Shape {
    pub fn intersection_points(&self, ray: &Ray) -> Option<Vec<P3>> {
        match self {
            Sphere(s) => s.intersection_points(ray),
            TriangleBased(s) => s.intersection_points(ray),
        }
    }

    pub fn closest_intersection_point(&self, ray: &Ray) -> Option<P3> {
        match self {
            Sphere(s) => s.closest_intersection_point(ray),
            TriangleBased(s) => s.closest_intersection_point(ray),
        }
    }

    pub fn surface_normal_at(&self, point: &P3) -> Option<V3> {
        match self {
            Sphere(s) => s.surface_normal_at(point),
            TriangleBased(s) => s.surface_normal_at(point),
        }
    }
}
