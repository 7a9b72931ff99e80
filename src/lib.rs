use nalgebra::{Point3, Vector3};

pub type P3 = Point3<f32>;
pub type V3 = Vector3<f32>;

#[macro_use]
pub mod util;

pub mod camera;
pub mod config;
pub mod error;
pub mod example_scenes;
pub mod image;
pub mod math;
pub mod object;
pub mod ray;
pub mod renderer;
pub mod rgb;
pub mod scene;
pub mod shape;

pub use error::Error;
pub use ray::Ray;
pub use rgb::RGB;
