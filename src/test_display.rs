//! In-memory framebuffer for rendering tests.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PointsIter, Rectangle};

use crate::colors::BLACK;

/// Plain `Rgb565` pixel buffer, cleared to black.
pub struct FrameBuffer {
    size: Size,
    pixels: Vec<Rgb565>,
}

impl FrameBuffer {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pixels: vec![BLACK; (size.width * size.height) as usize],
        }
    }

    /// Color at `(x, y)`, `None` outside the buffer.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb565> {
        let (w, h) = (self.size.width as i32, self.size.height as i32);
        if x < 0 || y < 0 || x >= w || y >= h {
            return None;
        }
        self.pixels.get((y * w + x) as usize).copied()
    }

    /// Number of pixels exactly matching `color`.
    pub fn count(&self, color: Rgb565) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }

    /// Number of pixels of `color` inside `area`.
    pub fn count_in(&self, area: &Rectangle, color: Rgb565) -> usize {
        area.points().filter(|p| self.pixel(p.x, p.y) == Some(color)).count()
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let (w, h) = (self.size.width as i32, self.size.height as i32);
        for Pixel(point, color) in pixels {
            if point.x >= 0 && point.y >= 0 && point.x < w && point.y < h {
                self.pixels[(point.y * w + point.x) as usize] = color;
            }
        }
        Ok(())
    }
}
