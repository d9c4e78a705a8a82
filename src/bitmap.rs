use std::fmt;
use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::core::{color::Color, film::Film};

/// Display-ready 8-bit RGBA image with sRGB-encoded pixel values.
pub struct Bitmap {
    image: RgbaImage,
}

impl Bitmap {
    /// Converts a radiance film to 8-bit RGBA. Lossy and one-way: values are
    /// gamma encoded and clamped to [0, 255], alpha is fixed at 255.
    pub fn from_film(film: &Film) -> Self {
        let mut image = RgbaImage::new(film.width(), film.height());
        for (x, y, pixel) in image.enumerate_pixels_mut() {
            *pixel = color_to_srgb8(film.pixel_radiance(x, y));
        }
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.image.get_pixel(x, y).0
    }

    /// Writes the bitmap, with the container format inferred from the file
    /// extension. An existing file is overwritten.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        self.image.save(path.as_ref())?;
        Ok(())
    }
}

impl fmt::Display for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bitmap[{}x{}, rgba, uint8, srgb]",
            self.width(),
            self.height()
        )
    }
}

/// Piecewise sRGB transfer function for a linear value in [0, 1].
pub fn linear_to_srgb(v: f32) -> f32 {
    if v <= 0.0031308 {
        12.92 * v
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

fn component_to_srgb8(v: f32) -> u8 {
    (linear_to_srgb(v) * 255.0 + 0.5).clamp(0.0, 255.0) as u8
}

fn color_to_srgb8(color: Color) -> Rgba<u8> {
    Rgba([
        component_to_srgb8(color.r),
        component_to_srgb8(color.g),
        component_to_srgb8(color.b),
        255,
    ])
}
