use crate::core::color::Color;

/// Accumulated per-pixel radiance, still in linear floating point.
pub struct Film {
    width: u32,
    height: u32,
    sum: Vec<Color>,
    count: Vec<u32>,
}

impl Film {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            width,
            height,
            sum: vec![Color::BLACK; size],
            count: vec![0; size],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn add_sample(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index_of(x, y);
        self.sum[index] += color;
        self.count[index] += 1;
    }

    /// Average radiance at a pixel; black if the pixel received no samples.
    pub fn pixel_radiance(&self, x: u32, y: u32) -> Color {
        let index = self.index_of(x, y);
        if self.count[index] == 0 {
            Color::BLACK
        } else {
            self.sum[index] / self.count[index] as f32
        }
    }

    fn index_of(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }
}
