use crate::camera::ImagePlane;
use crate::image::Image;
use crate::object::Object;
use crate::scene::Scene;
use crate::*;

use log::*;

const AMBIENT: f32 = 0.4;
const DIFFUSE: f32 = 0.4;
const SPECULAR: f32 = 0.2;

#[derive(Clone, Copy, Debug)]
pub struct RenderConfig {
    pub eye: P3,
    pub light: P3,
    pub background: RGB,
    pub max_reflection_depth: usize,
    /// Offset of shadow and reflection ray origins along their direction.
    pub ray_bias: f32,
}

impl RenderConfig {
    pub fn new(eye: P3, light: P3) -> Self {
        RenderConfig {
            eye,
            light,
            background: RGB::new(0.05, 0.05, 0.1),
            max_reflection_depth: 10,
            ray_bias: 0.1,
        }
    }
}

/// `2 (v·n) (n - v)`: the bounce direction used for both highlights and mirrors.
fn reflect(v: &V3, n: &V3) -> V3 {
    2.0 * v.dot(n) * (n - v)
}

pub struct Renderer<'a> {
    scene: &'a Scene,
    config: RenderConfig,
}

impl<'a> Renderer<'a> {
    pub fn new(scene: &'a Scene, config: RenderConfig) -> Self {
        Renderer { scene, config }
    }

    pub fn render(&self, image_plane: &ImagePlane) -> Image {
        info!(
            "rendering {}x{} pixels, {} objects",
            image_plane.width(),
            image_plane.height(),
            self.scene.objects().len()
        );
        let mut image = Image::new(image_plane.width(), image_plane.height());
        for y in 0..image_plane.height() {
            for x in 0..image_plane.width() {
                let point = image_plane.pixel_to_3d(x, y);
                let ray = Ray::new(point, point - self.config.eye);
                *image.at_mut(x, y) = self.trace(&ray);
            }
            debug!("row {} done", y);
        }
        info!("render finished");
        image
    }

    /// Colour seen along a primary ray.
    pub fn trace(&self, ray: &Ray) -> RGB {
        let hit = match self.scene.test_hit(ray) {
            Some(hit) => hit,
            None => return self.config.background,
        };
        let normal = match hit.object.surface_normal_at(&hit.pos) {
            Some(n) => n,
            None => {
                warn!("no surface normal at {:?}, using background", hit.pos);
                return self.config.background;
            }
        };
        let to_light = (self.config.light - hit.pos).normalize();
        let to_eye = (self.config.eye - hit.pos).normalize();

        let light = self.total_light(&hit.pos, &normal, &to_light, &to_eye);
        self.colour_at(light, &hit.pos, &normal, &to_eye, hit.object)
    }

    pub(crate) fn total_light(&self, pos: &P3, normal: &V3, to_light: &V3, to_eye: &V3) -> f32 {
        let reflected_light = reflect(to_light, normal);
        let mut diffuse = DIFFUSE * to_light.dot(normal);
        let mut specular = SPECULAR * reflected_light.dot(to_eye).powi(2);

        let shadow_ray = Ray::new(pos + self.config.ray_bias * to_light, *to_light);
        if self.scene.any_hit(&shadow_ray) {
            diffuse = 0.0;
            specular = 0.0;
        }
        AMBIENT + diffuse + specular
    }

    fn colour_at(&self, light: f32, pos: &P3, normal: &V3, to_eye: &V3, object: &Object) -> RGB {
        let colour = object.colour() * light;
        if object.is_reflective() {
            let dir = reflect(to_eye, normal);
            let ray = Ray::new(pos + self.config.ray_bias * dir, dir);
            self.reflected_colour(colour, &ray, 0)
        } else {
            colour
        }
    }

    /// Tints `colour` by every surface the mirror ray bounces off, without shading.
    pub(crate) fn reflected_colour(&self, colour: RGB, ray: &Ray, depth: usize) -> RGB {
        if depth >= self.config.max_reflection_depth {
            return colour;
        }
        let hit = match self.scene.test_hit(ray) {
            Some(hit) => hit,
            None => return colour,
        };
        let colour = colour * hit.object.colour();
        if !hit.object.is_reflective() {
            return colour;
        }
        match hit.object.surface_normal_at(&hit.pos) {
            Some(normal) => {
                let incoming = (hit.pos - ray.origin).normalize();
                let dir = reflect(&incoming, &normal);
                let next = Ray::new(hit.pos + self.config.ray_bias * dir, dir);
                self.reflected_colour(colour, &next, depth + 1)
            }
            None => {
                debug!("reflection stopped, no surface normal at {:?}", hit.pos);
                colour
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::shapes::{Sphere, TriangleBased};

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-5, "{} != {}", a, b);
    }

    fn pixel_plane(eye: P3) -> ImagePlane {
        ImagePlane::new(eye, -V3::z(), V3::y(), 1, 1, 1.0, 1.0, 1.0)
    }

    fn red_sphere() -> Object {
        Object::new(Sphere::new(P3::origin(), 1.0), RGB::new(1.0, 0.0, 0.0), false)
    }

    fn quad_at_z(z: f32, colour: RGB, reflective: bool) -> Object {
        Object::new(
            TriangleBased::quadrilateral(
                P3::new(-5.0, -5.0, z),
                P3::new(5.0, -5.0, z),
                P3::new(-5.0, 5.0, z),
                P3::new(5.0, 5.0, z),
            ),
            colour,
            reflective,
        )
    }

    #[test]
    fn lit_sphere_gets_ambient_diffuse_and_specular() {
        let eye = P3::new(0.0, 0.0, 10.0);
        let light = P3::new(5.0, 5.0, 10.0);
        let scene = Scene::new(vec![red_sphere()]);
        let image = Renderer::new(&scene, RenderConfig::new(eye, light)).render(&pixel_plane(eye));

        let hit = P3::new(0.0, 0.0, 1.0);
        let n = V3::z();
        let l = (light - hit).normalize();
        let e = (eye - hit).normalize();
        let r = 2.0 * l.dot(&n) * (n - l);
        let expected = 0.4 + 0.4 * l.dot(&n) + 0.2 * r.dot(&e).powi(2);

        let c = image.at(0, 0);
        assert!(c.r > 0.0);
        assert_close(c.r, expected);
        assert_eq!(c.g, 0.0);
        assert_eq!(c.b, 0.0);
    }

    #[test]
    fn occluded_point_is_ambient_only() {
        let eye = P3::new(0.0, 0.0, 10.0);
        let light = P3::new(5.0, 0.0, 6.0);
        let blocker = Object::new(Sphere::new(P3::new(2.5, 0.0, 3.5), 0.5), RGB::all(1.0), false);
        let scene = Scene::new(vec![red_sphere(), blocker]);
        let image = Renderer::new(&scene, RenderConfig::new(eye, light)).render(&pixel_plane(eye));
        assert_close(image.at(0, 0).r, 0.4);
        assert_eq!(image.at(0, 0).g, 0.0);
    }

    #[test]
    fn unlit_side_still_uses_shadow_ray() {
        let eye = P3::new(0.0, 0.0, 10.0);
        // light behind the sphere: the shadow ray runs back through it
        let light = P3::new(0.0, 0.0, -10.0);
        let scene = Scene::new(vec![red_sphere()]);
        let renderer = Renderer::new(&scene, RenderConfig::new(eye, light));
        let light_at = renderer.total_light(&P3::new(0.0, 0.0, 1.0), &V3::z(), &-V3::z(), &V3::z());
        assert_close(light_at, 0.4);
    }

    #[test]
    fn empty_scene_is_background() {
        let eye = P3::new(0.0, 0.0, 10.0);
        let scene = Scene::new(vec![]);
        let config = RenderConfig::new(eye, P3::new(0.0, 10.0, 0.0));
        let image = Renderer::new(&scene, config).render(&pixel_plane(eye));
        assert_eq!(*image.at(0, 0), RGB::new(0.05, 0.05, 0.1));
    }

    #[test]
    fn mirror_shows_reflected_sphere_colour() {
        let eye = P3::new(1.0, 2.0, 10.0);
        let light = P3::new(6.0, 2.0, 5.0);
        let mirror = RGB::all(0.5);
        let sphere = RGB::new(0.2, 0.4, 0.8);
        let scene = Scene::new(vec![
            quad_at_z(0.0, mirror, true),
            // behind the image plane, only reachable by the bounce
            Object::new(Sphere::new(P3::new(1.0, 2.0, 15.0), 2.0), sphere, false),
        ]);
        let renderer = Renderer::new(&scene, RenderConfig::new(eye, light));
        let image = renderer.render(&pixel_plane(eye));

        let hit = P3::new(1.0, 2.0, 0.0);
        let n = -V3::z();
        let light_at = renderer.total_light(&hit, &n, &(light - hit).normalize(), &(eye - hit).normalize());
        let expected = mirror * light_at * sphere;
        let c = image.at(0, 0);
        assert_close(c.r, expected.r);
        assert_close(c.g, expected.g);
        assert_close(c.b, expected.b);
    }

    #[test]
    fn bounce_multiplies_without_shading() {
        let scene = Scene::new(vec![Object::new(
            Sphere::new(P3::new(0.0, 0.0, -5.0), 1.0),
            RGB::new(0.2, 0.4, 0.8),
            false,
        )]);
        let renderer = Renderer::new(&scene, RenderConfig::new(P3::origin(), P3::new(0.0, 10.0, 0.0)));
        let c = renderer.reflected_colour(RGB::new(0.5, 0.5, 2.0), &Ray::new(P3::origin(), -V3::z()), 0);
        assert_eq!(c, RGB::new(0.1, 0.2, 1.6));
    }

    #[test]
    fn reflection_depth_is_capped() {
        let objects = (0..15).map(|i| quad_at_z(i as f32, RGB::all(0.5), true)).collect();
        let scene = Scene::new(objects);
        let renderer = Renderer::new(&scene, RenderConfig::new(P3::origin(), P3::new(0.0, 10.0, 0.0)));
        let ray = Ray::new(P3::new(1.0, 2.0, -1.0), V3::z());
        let c = renderer.reflected_colour(RGB::all(1.0), &ray, 0);
        assert_eq!(c, RGB::all(0.5f32.powi(10)));

        let mut config = RenderConfig::new(P3::origin(), P3::new(0.0, 10.0, 0.0));
        config.max_reflection_depth = 3;
        let c = Renderer::new(&scene, config).reflected_colour(RGB::all(1.0), &ray, 0);
        assert_eq!(c, RGB::all(0.125));
    }

    #[test]
    fn facing_mirrors_terminate() {
        let eye = P3::new(0.5, 0.5, 8.0);
        let scene = Scene::new(vec![
            quad_at_z(-5.0, RGB::all(0.9), true),
            quad_at_z(5.0, RGB::all(0.9), true),
            Object::new(Sphere::new(P3::new(0.0, 0.0, 20.0), 30.0), RGB::all(0.9), true),
        ]);
        let config = RenderConfig::new(eye, P3::new(0.0, 4.0, 0.0));
        let plane = ImagePlane::new(eye, -V3::z(), V3::y(), 8, 8, 4.0, 4.0, 2.0);
        let image = Renderer::new(&scene, config).render(&plane);
        for x in 0..8 {
            for y in 0..8 {
                assert!(image.at(x, y).is_finite());
            }
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let scene = crate::example_scenes::make_scene(crate::example_scenes::SceneComplexity::Medium);
        let view = crate::example_scenes::StandardView::new();
        let plane = view.image_plane(16, 12);
        let renderer = Renderer::new(&scene, view.render_config());
        assert_eq!(renderer.render(&plane), renderer.render(&plane));
    }
}
