//! Sprite coverage masks and the bitmap font sheet
//!
//! A sprite is a per-pixel boolean mask; set pixels are drawn in whatever
//! solid colour the caller supplies, unset pixels are transparent. Masks are
//! stored row-major with the top row first and never change after load.

/// A read-only coverage mask.
#[derive(Debug, Clone)]
pub struct Sprite {
    width: u32,
    height: u32,
    mask: Vec<bool>,
}

impl Sprite {
    /// Parse row art into a mask: `@` is a set pixel, anything else is clear.
    ///
    /// Ragged or empty row art is a precondition violation and fails fast;
    /// a malformed mask must never reach collision or blit code.
    pub fn from_rows(rows: &[&str]) -> Self {
        assert!(!rows.is_empty(), "sprite has no rows");
        let width = rows[0].len() as u32;
        assert!(width > 0, "sprite has zero width");
        let mut mask = Vec::with_capacity(rows.len() * width as usize);
        for row in rows {
            assert_eq!(row.len() as u32, width, "ragged sprite row");
            mask.extend(row.bytes().map(|b| b == b'@'));
        }
        Self {
            width,
            height: rows.len() as u32,
            mask,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the mask pixel at (xi, yi) is set. yi counts from the top row.
    #[inline]
    pub fn covers(&self, xi: u32, yi: u32) -> bool {
        self.mask[(yi * self.width + xi) as usize]
    }
}

/// First byte the font sheet covers (ASCII space).
pub const FONT_FIRST_BYTE: u8 = 32;
/// Number of glyphs in the sheet; bytes in `[32, 32 + FONT_GLYPH_COUNT)` map
/// to glyphs, everything else is unsupported.
pub const FONT_GLYPH_COUNT: usize = 65;

/// A sheet of fixed-size glyphs indexed by `byte - 32`.
#[derive(Debug, Clone)]
pub struct FontSheet {
    glyph_width: u32,
    glyph_height: u32,
    glyphs: Vec<Sprite>,
}

impl FontSheet {
    pub fn new(glyphs: Vec<Sprite>) -> Self {
        assert_eq!(glyphs.len(), FONT_GLYPH_COUNT, "font sheet glyph count");
        let glyph_width = glyphs[0].width();
        let glyph_height = glyphs[0].height();
        for glyph in &glyphs {
            assert_eq!(glyph.width(), glyph_width, "mixed glyph widths");
            assert_eq!(glyph.height(), glyph_height, "mixed glyph heights");
        }
        Self {
            glyph_width,
            glyph_height,
            glyphs,
        }
    }

    pub fn glyph_width(&self) -> u32 {
        self.glyph_width
    }

    pub fn glyph_height(&self) -> u32 {
        self.glyph_height
    }

    /// Glyph for a text byte, or `None` if the byte is outside the sheet.
    pub fn glyph(&self, byte: u8) -> Option<&Sprite> {
        let index = byte.checked_sub(FONT_FIRST_BYTE)? as usize;
        self.glyphs.get(index)
    }

    /// Glyph for a decimal digit (0..=9), aligned with the glyph for ASCII '0'.
    pub fn digit(&self, digit: u8) -> &Sprite {
        debug_assert!(digit < 10);
        &self.glyphs[(b'0' - FONT_FIRST_BYTE + digit) as usize]
    }
}
