use crate::math::LocalCoord;
use crate::*;

/// A virtual screen in front of the eye, divided into `width × height` pixels.
pub struct ImagePlane {
    lc: LocalCoord,
    width: u32,
    height: u32,
    plane_width: f32,
    plane_height: f32,
    distance: f32,
}

impl ImagePlane {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        eye: P3,
        looking: V3,
        up: V3,
        width: u32,
        height: u32,
        plane_width: f32,
        plane_height: f32,
        distance: f32,
    ) -> Self {
        assert!(width > 0 && height > 0);
        // local -z looks along `looking`, local y is as close to `up` as possible
        let lc = LocalCoord::new_zy(&eye, &-looking, &up);
        ImagePlane {
            lc,
            width,
            height,
            plane_width,
            plane_height,
            distance,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Centre of pixel `(x, y)`; `x` grows rightwards and `y` downwards.
    pub fn pixel_to_3d(&self, x: u32, y: u32) -> P3 {
        let u = (x as f32 + 0.5) / self.width as f32 - 0.5;
        let v = 0.5 - (y as f32 + 0.5) / self.height as f32;
        self.lc.l2w()
            * P3::new(
                u * self.plane_width,
                v * self.plane_height,
                -self.distance,
            )
    }
}
