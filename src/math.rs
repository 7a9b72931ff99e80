use crate::*;
use nalgebra::*;

pub type M3 = Matrix3<f32>;

pub const CALCULATION_EPSILON: f32 = 1e-5;

pub struct LocalCoord {
    l2w: Isometry3<f32>,
}

impl LocalCoord {
    pub fn new_zy(o: &P3, z: &V3, y_like: &V3) -> Self {
        let tr = Translation3::from(o.coords);
        let rot = UnitQuaternion::face_towards(z, y_like);
        LocalCoord {
            l2w: Isometry3::from_parts(tr, rot),
        }
    }

    //local to world
    pub fn l2w(&self) -> &Isometry3<f32> {
        &self.l2w
    }
}

/// Solves `m * x = rhs` with Cramer's rule.
///
/// Returns `None` when `m` is singular.
pub fn cramer(m: &M3, rhs: &V3) -> Option<V3> {
    let det = m.determinant();
    if det == 0.0 || !det.is_finite() {
        return None;
    }
    let mut x = V3::zeros();
    for i in 0..3 {
        let mut mi = *m;
        mi.set_column(i, rhs);
        x[i] = mi.determinant() / det;
    }
    Some(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cramer_solves_diagonal_system() {
        let m = M3::from_diagonal(&V3::new(2.0, 4.0, 8.0));
        let x = cramer(&m, &V3::new(2.0, 2.0, 2.0)).unwrap();
        assert_eq!(x, V3::new(1.0, 0.5, 0.25));
    }

    #[test]
    fn cramer_rejects_singular_matrix() {
        let m = M3::from_columns(&[V3::x(), V3::x(), V3::z()]);
        assert!(cramer(&m, &V3::new(1.0, 1.0, 1.0)).is_none());
    }

    #[test]
    fn local_frame_maps_z_and_y() {
        let lc = LocalCoord::new_zy(&P3::new(1.0, 2.0, 3.0), &V3::z(), &V3::y());
        let p = lc.l2w() * P3::new(1.0, 1.0, -1.0);
        assert!((p - P3::new(2.0, 3.0, 2.0)).norm() < 1e-6);
    }
}
