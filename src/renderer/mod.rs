//! Rendering module
//!
//! The game needs only four primitives from whatever it draws on: clear,
//! filled rectangle, glyph blit, and the surface size. Hosts implement
//! [`RenderSurface`] over a browser canvas, a software framebuffer, etc.

pub mod framebuffer;
pub mod glyphs;

pub use framebuffer::Framebuffer;
pub use glyphs::{Glyph, ScoreRenderer};

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::sim::{GameState, Rect};

/// 8-bit RGBA color. Layout matches RGBA8 image data byte order.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// CSS color string for canvas fill styles
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {:.3})",
                self.r,
                self.g,
                self.b,
                self.a as f32 / 255.0
            )
        }
    }
}

/// Foreground (ball, paddles, score) and background colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub foreground: Color,
    pub background: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            foreground: Color::WHITE,
            background: Color::BLACK,
        }
    }
}

/// A 2D surface the game can draw on
pub trait RenderSurface {
    /// Logical width in pixels
    fn width(&self) -> f32;
    /// Logical height in pixels
    fn height(&self) -> f32;
    /// Fill the whole surface
    fn clear(&mut self, color: Color);
    /// Fill the area covered by `rect`
    fn fill_rect(&mut self, rect: &Rect, color: Color);
    /// Copy a glyph bitmap with its top-left corner at (`x`, `y`).
    /// Transparent glyph pixels leave the surface untouched.
    fn blit_glyph(&mut self, glyph: &Glyph, x: f32, y: f32);
}

/// Draw one complete frame: background, ball, paddles, then scores
pub fn draw<S>(state: &GameState, scoreboard: &ScoreRenderer, palette: &Palette, surface: &mut S)
where
    S: RenderSurface + ?Sized,
{
    surface.clear(palette.background);

    surface.fill_rect(&state.ball.rect, palette.foreground);
    for paddle in &state.paddles {
        surface.fill_rect(&paddle.rect, palette.foreground);
    }

    scoreboard.draw(&state.scores(), surface);
}
