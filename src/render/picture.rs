use image::{ExtendedColorType, ImageResult, save_buffer};

pub type Color = (u8, u8, u8);

/// Packed RGB raster, row-major from the top-left corner.
pub struct Picture {
    pub xres: usize,
    pub yres: usize,
    pub data: Vec<u8>,
    background: Color,
}

impl Picture {
    pub fn new(xres: usize, yres: usize, background: &Color) -> Self {
        let mut picture = Self { xres, yres, data: vec![0; xres * yres * 3], background: *background };
        picture.clear();
        picture
    }

    pub fn clear(&mut self) {
        let (r, g, b) = self.background;

        for pixel in self.data.chunks_mut(3) {
            pixel.copy_from_slice(&[r, g, b]);
        }
    }

    // out of bounds points are clipped
    pub fn plot(&mut self, x: isize, y: isize, color: &Color) {
        if x < 0 || y < 0 || x as usize >= self.xres || y as usize >= self.yres {
            return;
        }

        let i = (y as usize * self.xres + x as usize) * 3;
        self.data[i..i + 3].copy_from_slice(&[color.0, color.1, color.2]);
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.xres || y >= self.yres {
            return None;
        }

        let i = (y * self.xres + x) * 3;
        Some((self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    // draws every pixel from x0 to x1 inclusive on row y
    pub fn draw_scanline(&mut self, x0: isize, x1: isize, y: isize, color: &Color) {
        if y < 0 || y as usize >= self.yres || x1 < x0 {
            return;
        }

        let start = x0.max(0);
        let end = x1.min(self.xres as isize - 1);

        for x in start..=end {
            self.plot(x, y, color);
        }
    }

    /// The format comes from the file extension; only PNG is compiled in.
    pub fn save_as_file(&self, file_path: &str) -> ImageResult<()> {
        save_buffer(file_path, &self.data, self.xres as u32, self.yres as u32, ExtendedColorType::Rgb8)
    }
}
