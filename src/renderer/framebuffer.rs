//! Software RGBA framebuffer
//!
//! Used by the native host (and tests) as a drawing surface without a window.

use crate::sim::Rect;

use super::{Color, Glyph, RenderSurface};

/// RGBA8 pixel buffer
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Framebuffer {
    /// Create a buffer filled with opaque black
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; width as usize * height as usize],
        }
    }

    /// Pixel at (`x`, `y`); `None` outside the buffer
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Raw RGBA8 bytes, row-major
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Encode as a binary PPM (P6) image, dropping alpha
    pub fn to_ppm(&self) -> Vec<u8> {
        let header = format!("P6\n{} {}\n255\n", self.width, self.height);
        let mut out = Vec::with_capacity(header.len() + self.pixels.len() * 3);
        out.extend_from_slice(header.as_bytes());
        for px in &self.pixels {
            out.extend_from_slice(&[px.r, px.g, px.b]);
        }
        out
    }

    /// Clip a float span to pixel indices `[start, end)` within `0..limit`
    fn span(start: f32, end: f32, limit: u32) -> (u32, u32) {
        let clamp = |v: f32| v.round().clamp(0.0, limit as f32) as u32;
        (clamp(start), clamp(end))
    }
}

impl RenderSurface for Framebuffer {
    fn width(&self) -> f32 {
        self.width as f32
    }

    fn height(&self) -> f32 {
        self.height as f32
    }

    fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    fn fill_rect(&mut self, rect: &Rect, color: Color) {
        let (x0, x1) = Self::span(rect.left(), rect.right(), self.width);
        let (y0, y1) = Self::span(rect.top(), rect.bottom(), self.height);
        if x0 >= x1 {
            return;
        }
        for y in y0..y1 {
            let row = y as usize * self.width as usize;
            self.pixels[row + x0 as usize..row + x1 as usize].fill(color);
        }
    }

    fn blit_glyph(&mut self, glyph: &Glyph, x: f32, y: f32) {
        let ox = x.round() as i64;
        let oy = y.round() as i64;
        for gy in 0..glyph.height() {
            let ty = oy + gy as i64;
            if ty < 0 || ty >= self.height as i64 {
                continue;
            }
            for gx in 0..glyph.width() {
                let tx = ox + gx as i64;
                if tx < 0 || tx >= self.width as i64 {
                    continue;
                }
                let src = glyph.pixel(gx, gy);
                if src.a == 0 {
                    continue;
                }
                self.pixels[ty as usize * self.width as usize + tx as usize] = src;
            }
        }
    }
}
