use crate::camera::ImagePlane;
use crate::object::Object;
use crate::renderer::RenderConfig;
use crate::scene::Scene;
use crate::shape::shapes::*;
use crate::*;

use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneComplexity {
    Low,
    Medium,
    High,
}

impl FromStr for SceneComplexity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "low" => Ok(SceneComplexity::Low),
            "medium" => Ok(SceneComplexity::Medium),
            "high" => Ok(SceneComplexity::High),
            _ => Err(Error::UnknownSceneComplexity(s.to_owned())),
        }
    }
}

pub fn make_scene(complexity: SceneComplexity) -> Scene {
    match complexity {
        SceneComplexity::Low => make_simple(),
        SceneComplexity::Medium => make_medium(),
        SceneComplexity::High => make_complex(),
    }
}

/// Horizontal quad at `y`, spanning `[-half, half]` in x and z.
fn floor(y: f32, half: f32) -> TriangleBased {
    TriangleBased::quadrilateral(
        P3::new(-half, y, half),
        P3::new(half, y, half),
        P3::new(-half, y, -half),
        P3::new(half, y, -half),
    )
}

pub fn make_simple() -> Scene {
    let mut objects = vec![];

    objects.push(Object::new(
        Sphere::new(P3::new(0.0, -10.0, -15.0), 10.0),
        RGB::new(0.1, 0.8, 0.3),
        false,
    ));
    objects.push(Object::new(floor(-30.0, 40.0), RGB::all(0.7), true));

    Scene::new(objects)
}

pub fn make_medium() -> Scene {
    let mut objects = vec![];

    objects.push(Object::new(
        Sphere::new(P3::origin(), 10.0),
        RGB::new(0.9, 0.1, 0.1),
        true,
    ));
    objects.push(Object::new(
        TriangleBased::quadrilateral(
            P3::new(0.0, -30.0, -40.0),
            P3::new(40.0, -30.0, -20.0),
            P3::new(0.0, 30.0, -40.0),
            P3::new(40.0, 30.0, -20.0),
        ),
        RGB::all(0.8),
        true,
    ));
    objects.push(Object::new(floor(-30.0, 40.0), RGB::new(0.1, 0.5, 0.5), false));

    Scene::new(objects)
}

pub fn make_complex() -> Scene {
    let mut objects = vec![];

    for i in -4..=4 {
        let x = 20.0 * i as f32;
        objects.push(Object::new(
            Sphere::new(P3::new(x, -30.0, 0.0), 10.0),
            RGB::all(0.7),
            true,
        ));
        objects.push(Object::new(
            Sphere::new(P3::new(x, 20.0, -20.0), 10.0),
            RGB::all(0.7),
            true,
        ));
    }
    objects.push(Object::new(
        Sphere::new(P3::new(0.0, -10.0, -10.0), 10.0),
        RGB::new(0.1, 0.9, 0.9),
        false,
    ));
    objects.push(Object::new(
        TriangleBased::quadrilateral(
            P3::new(-80.0, -30.0, -20.0),
            P3::new(0.0, -30.0, -20.0),
            P3::new(-80.0, 100.0, -20.0),
            P3::new(0.0, 100.0, -20.0),
        ),
        RGB::all(0.5),
        true,
    ));
    objects.push(Object::new(
        TriangleBased::quadrilateral(
            P3::new(0.0, -30.0, -20.0),
            P3::new(80.0, -30.0, -20.0),
            P3::new(0.0, 100.0, -20.0),
            P3::new(80.0, 100.0, -20.0),
        ),
        RGB::new(0.9, 0.9, 0.5),
        true,
    ));

    Scene::new(objects)
}

/// Camera and light shared by all presets.
#[derive(Clone, Debug)]
pub struct StandardView {
    pub eye: P3,
    pub looking: V3,
    pub up: V3,
    pub light: P3,
    pub plane_width: f32,
    pub plane_height: f32,
    pub distance: f32,
}

impl StandardView {
    pub fn new() -> Self {
        StandardView {
            eye: P3::new(0.0, 10.0, 25.0),
            looking: V3::new(0.0, -0.4, -1.0),
            up: V3::y(),
            light: P3::new(25.0, 25.0, 10.0),
            plane_width: 50.0,
            plane_height: 50.0,
            distance: 25.0,
        }
    }

    pub fn image_plane(&self, width: u32, height: u32) -> ImagePlane {
        ImagePlane::new(
            self.eye,
            self.looking,
            self.up,
            width,
            height,
            self.plane_width,
            self.plane_height,
            self.distance,
        )
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig::new(self.eye, self.light)
    }
}

impl Default for StandardView {
    fn default() -> Self {
        Self::new()
    }
}
