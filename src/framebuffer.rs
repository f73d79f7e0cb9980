use crate::error::RenderError;

/// Row-major packed `0xAARRGGBB` pixels. Writes outside the buffer are
/// clipped instead of panicking.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    pixels: Vec<u32>,
    width: usize,
    height: usize,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Result<Self, RenderError> {
        let len = width
            .checked_mul(height)
            .ok_or(RenderError::TooLarge { width, height })?;
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|source| RenderError::Allocation {
                width,
                height,
                source,
            })?;
        pixels.resize(len, 0);
        Ok(FrameBuffer {
            pixels,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: usize, y: usize, color: u32) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color;
        }
    }

    /// Fill a rectangle with a color
    pub fn fill_rect(&mut self, x: usize, y: usize, width: usize, height: usize, color: u32) {
        let x_end = x.saturating_add(width).min(self.width);
        let y_end = y.saturating_add(height).min(self.height);
        for py in y.min(y_end)..y_end {
            let row = py * self.width;
            self.pixels[row + x.min(x_end)..row + x_end].fill(color);
        }
    }

    /// Paint rows `top..bottom` of column `x`.
    pub fn fill_column(&mut self, x: usize, top: usize, bottom: usize, color: u32) {
        if x >= self.width {
            return;
        }
        for y in top..bottom.min(self.height) {
            self.pixels[y * self.width + x] = color;
        }
    }

    /// Converts to the RGBA byte layout `pixels` expects.
    pub fn draw_to_buffer(&self, frame: &mut [u8]) {
        for (pixel, &color) in frame.chunks_exact_mut(4).zip(&self.pixels) {
            let rgba = [
                (color >> 16) as u8,
                (color >> 8) as u8,
                color as u8,
                (color >> 24) as u8,
            ];
            pixel.copy_from_slice(&rgba);
        }
    }
}
