use crate::*;
use log::*;
use std::path::Path;

/// Rendered pixel grid, row-major, origin at the top-left.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    w: u32,
    h: u32,
    buf: Vec<RGB>,
}

impl Image {
    /// Panics if `w * h` does not fit in `usize`.
    pub fn new(w: u32, h: u32) -> Self {
        let len = Self::pixel_count(w, h).unwrap_or_else(|| panic!("{}x{} image is too large", w, h));
        Image {
            w,
            h,
            buf: vec![RGB::all(0.0); len],
        }
    }

    /// Number of pixels in a `w` by `h` image, if it is addressable.
    pub fn pixel_count(w: u32, h: u32) -> Option<usize> {
        (w as usize).checked_mul(h as usize)
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.w as usize + x as usize
    }

    /// Writes 8 bits per channel; the format follows the file extension.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let raster =
            ::image::RgbImage::from_fn(self.w, self.h, |x, y| ::image::Rgb(self.at(x, y).to_rgb8()));
        raster.save(path.as_ref())?;
        info!("wrote {}x{} image to {}", self.w, self.h, path.as_ref().display());
        Ok(())
    }

    pub fn at(&self, x: u32, y: u32) -> &RGB {
        &self.buf[self.index(x, y)]
    }

    pub fn at_mut(&mut self, x: u32, y: u32) -> &mut RGB {
        let i = self.index(x, y);
        &mut self.buf[i]
    }

    pub fn w(&self) -> u32 {
        self.w
    }
    pub fn h(&self) -> u32 {
        self.h
    }
}
