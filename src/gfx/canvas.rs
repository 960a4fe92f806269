//! Software pixel canvas and blit primitives
//!
//! All drawing is clip-on-write: every destination coordinate is bounds
//! checked and out-of-range pixels are silently discarded, never wrapped or
//! clamped. That includes coordinates that would be negative when a sprite
//! overhangs the left or bottom edge.

use super::sprite::{FontSheet, Sprite};

/// Pack an opaque colour as 0xRRGGBBFF.
pub const fn rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | 0xff
}

/// A fixed-size 2-D buffer of packed colour values.
#[derive(Debug, Clone)]
pub struct PixelCanvas {
    width: i32,
    height: i32,
    pixels: Vec<u32>,
}

impl PixelCanvas {
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "degenerate canvas dimensions");
        Self {
            width,
            height,
            pixels: vec![0; (width * height) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// The composited frame, row-major, one packed colour per pixel.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// The frame reinterpreted as raw bytes, for byte-oriented sinks.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Overwrite every pixel with `colour`.
    pub fn clear(&mut self, colour: u32) {
        self.pixels.fill(colour);
    }

    /// Draw a sprite's coverage mask in a single solid colour.
    ///
    /// (x, y) is the sprite's bottom-left corner in canvas space. The mask is
    /// stored top row first, so mask row `yi` lands on canvas row
    /// `y + (height - 1) - yi`. Pixels outside the canvas are discarded.
    pub fn blit_sprite(&mut self, sprite: &Sprite, x: i32, y: i32, colour: u32) {
        for yi in 0..sprite.height() {
            let dy = y + (sprite.height() as i32 - 1) - yi as i32;
            if dy < 0 || dy >= self.height {
                continue;
            }
            for xi in 0..sprite.width() {
                if !sprite.covers(xi, yi) {
                    continue;
                }
                let dx = x + xi as i32;
                if dx < 0 || dx >= self.width {
                    continue;
                }
                self.pixels[(dy * self.width + dx) as usize] = colour;
            }
        }
    }

    /// Draw a run of text with the given font sheet.
    ///
    /// Bytes the sheet has no glyph for are skipped without advancing the
    /// cursor; each drawn glyph advances the cursor by glyph width + 1.
    pub fn blit_text(&mut self, font: &FontSheet, text: &str, x: i32, y: i32, colour: u32) {
        let mut cursor = x;
        for byte in text.bytes() {
            let Some(glyph) = font.glyph(byte) else {
                continue;
            };
            self.blit_sprite(glyph, cursor, y, colour);
            cursor += glyph.width() as i32 + 1;
        }
    }

    /// Draw a decimal number, most significant digit first.
    ///
    /// Zero still renders one digit. Advance matches [`Self::blit_text`].
    pub fn blit_number(&mut self, font: &FontSheet, value: u64, x: i32, y: i32, colour: u32) {
        // u64::MAX has 20 decimal digits
        let mut digits = [0u8; 20];
        let mut count = 0;
        let mut rest = value;
        loop {
            digits[count] = (rest % 10) as u8;
            count += 1;
            rest /= 10;
            if rest == 0 {
                break;
            }
        }

        let mut cursor = x;
        for &digit in digits[..count].iter().rev() {
            let glyph = font.digit(digit);
            self.blit_sprite(glyph, cursor, y, colour);
            cursor += glyph.width() as i32 + 1;
        }
    }
}
