//! Scoreboard digits from a tiny 3x5 bitmap font
//!
//! Each digit is rasterized once, at construction, into a bitmap scaled by the
//! cell size. Drawing a score is then just a row of glyph blits.

use crate::consts::{CHAR_COLS, CHAR_ROWS, MAX_CHAR_PIXEL, SCORE_TOP};

use super::{Color, RenderSurface};

/// Row-major 3x5 cell patterns for 0-9 ('1' = lit)
const DIGITS: [&str; 10] = [
    "111101101101111",
    "010010010010010",
    "111001111100111",
    "111001111001111",
    "101101111001001",
    "111100111001111",
    "111100111101111",
    "111001001001001",
    "111101111101111",
    "111101111001111",
];

/// A pre-rendered digit bitmap
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    digit: u8,
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Glyph {
    fn rasterize(digit: u8, pattern: &str, cell: u32, color: Color) -> Self {
        let width = CHAR_COLS as u32 * cell;
        let height = CHAR_ROWS as u32 * cell;
        let mut pixels = vec![Color::TRANSPARENT; width as usize * height as usize];

        for (i, fill) in pattern.bytes().enumerate() {
            if fill != b'1' {
                continue;
            }
            let cx = (i % CHAR_COLS) as u32 * cell;
            let cy = (i / CHAR_COLS) as u32 * cell;
            for y in cy..cy + cell {
                let row = y as usize * width as usize;
                pixels[row + cx as usize..row + (cx + cell) as usize].fill(color);
            }
        }

        Self {
            digit,
            width,
            height,
            pixels,
        }
    }

    pub fn digit(&self) -> u8 {
        self.digit
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at (`x`, `y`), transparent outside the bitmap
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        if x >= self.width || y >= self.height {
            return Color::TRANSPARENT;
        }
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Raw RGBA8 bytes, row-major
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

/// Lays out and draws both players' scores
#[derive(Debug, Clone)]
pub struct ScoreRenderer {
    cell: u32,
    glyphs: Vec<Glyph>,
}

impl ScoreRenderer {
    /// Rasterize all ten digits at `cell` pixels per font cell, clamped to
    /// `1..=MAX_CHAR_PIXEL`
    pub fn new(cell: u32, color: Color) -> Self {
        let cell = cell.clamp(1, MAX_CHAR_PIXEL);
        let glyphs = DIGITS
            .iter()
            .enumerate()
            .map(|(digit, pattern)| Glyph::rasterize(digit as u8, pattern, cell, color))
            .collect();
        Self { cell, glyphs }
    }

    pub fn cell(&self) -> u32 {
        self.cell
    }

    pub fn glyph(&self, digit: u8) -> Option<&Glyph> {
        self.glyphs.get(digit as usize)
    }

    /// Horizontal distance between consecutive digits (glyph plus one cell gap)
    pub fn advance(&self) -> f32 {
        self.cell as f32 * 4.0
    }

    /// Digit positions for `player`'s score.
    ///
    /// Scores are centered on thirds of the surface width: the left player on
    /// the first third, the right player on the second.
    pub fn layout(&self, player: usize, score: u32, surface_width: f32) -> Vec<(u8, f32, f32)> {
        let digits: Vec<u8> = score.to_string().bytes().map(|b| b - b'0').collect();

        let band_center = surface_width / 3.0 * (player + 1) as f32;
        let advance = self.advance();
        let offset = band_center - advance * digits.len() as f32 / 2.0 + self.cell as f32 / 2.0;

        digits
            .into_iter()
            .enumerate()
            .map(|(i, digit)| (digit, offset + i as f32 * advance, SCORE_TOP))
            .collect()
    }

    /// Blit every player's score onto `surface`
    pub fn draw<S>(&self, scores: &[u32], surface: &mut S)
    where
        S: RenderSurface + ?Sized,
    {
        let width = surface.width();
        for (player, &score) in scores.iter().enumerate() {
            for (digit, x, y) in self.layout(player, score, width) {
                if let Some(glyph) = self.glyph(digit) {
                    surface.blit_glyph(glyph, x, y);
                }
            }
        }
    }
}
