//! Bitmap art and the asset table
//!
//! All sprite art for the fixed wave lives here as row strings, parsed once
//! at startup into an [`Assets`] table. The table owns every mask for the
//! lifetime of the run; animation tracks refer to frames by [`SpriteId`]
//! index rather than by reference.

use serde::{Deserialize, Serialize};

use super::sprite::{FontSheet, Sprite};

/// Number of alien classes that have animation art (A, B, C).
pub const ALIEN_CLASSES: usize = 3;
/// Animation frames per alien class.
pub const FRAMES_PER_CLASS: usize = 2;

/// Index of an animation frame in the asset table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteId(usize);

/// Owns every sprite mask for the run.
#[derive(Debug)]
pub struct Assets {
    alien_frames: Vec<Sprite>,
    pub alien_death: Sprite,
    pub player: Sprite,
    pub projectile: Sprite,
    pub font: FontSheet,
}

impl Assets {
    /// Parse the built-in art. Panics only on malformed row strings, which is
    /// a defect in the tables below rather than a runtime condition.
    pub fn load() -> Self {
        let alien_frames = vec![
            Sprite::from_rows(&ALIEN_A0),
            Sprite::from_rows(&ALIEN_A1),
            Sprite::from_rows(&ALIEN_B0),
            Sprite::from_rows(&ALIEN_B1),
            Sprite::from_rows(&ALIEN_C0),
            Sprite::from_rows(&ALIEN_C1),
        ];
        let font = FontSheet::new(FONT_GLYPHS.iter().map(|g| Sprite::from_rows(g)).collect());
        log::debug!(
            "assets loaded: {} alien frames, {}x{} font",
            alien_frames.len(),
            font.glyph_width(),
            font.glyph_height()
        );
        Self {
            alien_frames,
            alien_death: Sprite::from_rows(&DEATH),
            player: Sprite::from_rows(&PLAYER),
            projectile: Sprite::from_rows(&PROJECTILE),
            font,
        }
    }

    /// The two animation frames for an alien class (0 = A, 1 = B, 2 = C).
    pub fn alien_frames(&self, class: usize) -> [SpriteId; 2] {
        assert!(class < ALIEN_CLASSES);
        [
            SpriteId(FRAMES_PER_CLASS * class),
            SpriteId(FRAMES_PER_CLASS * class + 1),
        ]
    }

    /// Resolve a frame id to its mask.
    pub fn sprite(&self, id: SpriteId) -> &Sprite {
        &self.alien_frames[id.0]
    }
}

const ALIEN_A0: [&str; 8] = [
    "...@@...",
    "..@@@@..",
    ".@@@@@@.",
    "@@.@@.@@",
    "@@@@@@@@",
    ".@.@@.@.",
    "@......@",
    ".@....@.",
];

const ALIEN_A1: [&str; 8] = [
    "...@@...",
    "..@@@@..",
    ".@@@@@@.",
    "@@.@@.@@",
    "@@@@@@@@",
    "..@..@..",
    ".@.@@.@.",
    "@.@..@.@",
];

const ALIEN_B0: [&str; 8] = [
    "..@.....@..",
    "...@...@...",
    "..@@@@@@@..",
    ".@@.@@@.@@.",
    "@@@@@@@@@@@",
    "@.@@@@@@@.@",
    "@.@.....@.@",
    "...@@.@@...",
];

const ALIEN_B1: [&str; 8] = [
    "..@.....@..",
    "@..@...@..@",
    "@.@@@@@@@.@",
    "@@@.@@@.@@@",
    "@@@@@@@@@@@",
    ".@@@@@@@@@.",
    "..@.....@..",
    ".@.......@.",
];

const ALIEN_C0: [&str; 8] = [
    "....@@@@....",
    ".@@@@@@@@@@.",
    "@@@@@@@@@@@@",
    "@@@..@@..@@@",
    "@@@@@@@@@@@@",
    "...@@..@@...",
    "..@@.@@.@@..",
    "@@........@@",
];

const ALIEN_C1: [&str; 8] = [
    "....@@@@....",
    ".@@@@@@@@@@.",
    "@@@@@@@@@@@@",
    "@@@..@@..@@@",
    "@@@@@@@@@@@@",
    "..@@@..@@@..",
    ".@@..@@..@@.",
    "..@@....@@..",
];

const DEATH: [&str; 7] = [
    ".@..@...@..@.",
    "..@..@.@..@..",
    "...@.....@...",
    "@@.........@@",
    "...@.....@...",
    "..@..@.@..@..",
    ".@..@...@..@.",
];

const PLAYER: [&str; 7] = [
    ".....@.....",
    "....@@@....",
    "....@@@....",
    ".@@@@@@@@@.",
    "@@@@@@@@@@@",
    "@@@@@@@@@@@",
    "@@@@@@@@@@@",
];

const PROJECTILE: [&str; 3] = [
    "@",
    "@",
    "@",
];

const FONT_GLYPHS: [[&str; 7]; 65] = [
    [".....", ".....", ".....", ".....", ".....", ".....", "....."], // ' '
    ["..@..", "..@..", "..@..", "..@..", "..@..", ".....", "..@.."], // '!'
    [".@.@.", ".@.@.", ".....", ".....", ".....", ".....", "....."], // '"'
    [".@.@.", ".@.@.", "@@@@@", ".@.@.", "@@@@@", ".@.@.", ".@.@."], // '#'
    ["..@..", ".@@@.", "@.@..", ".@@@.", "..@.@", ".@@@.", "..@.."], // '$'
    ["@@.@.", "@@.@.", "..@..", "..@..", "..@..", ".@.@@", ".@.@@"], // '%'
    [".@@..", "@..@.", "@..@.", ".@@..", "@..@.", "@...@", ".@@@@"], // '&'
    ["...@.", "..@..", ".....", ".....", ".....", ".....", "....."], // '\''
    ["....@", "...@.", "..@..", "..@..", "..@..", "...@.", "....@"], // '('
    ["@....", ".@...", "..@..", "..@..", "..@..", ".@...", "@...."], // ')'
    ["..@..", "@.@.@", ".@@@.", "..@..", ".@@@.", "@.@.@", "..@.."], // '*'
    [".....", "..@..", "..@..", "@@@@@", "..@..", "..@..", "....."], // '+'
    [".....", ".....", ".....", ".....", ".....", "..@..", "..@.."], // ','
    [".....", ".....", ".....", "@@@@@", ".....", ".....", "....."], // '-'
    [".....", ".....", ".....", ".....", ".....", ".....", "..@.."], // '.'
    ["...@.", "...@.", "..@..", "..@..", "..@..", ".@...", ".@..."], // '/'
    [".@@@.", "@...@", "@..@@", "@.@.@", "@@..@", "@...@", ".@@@."], // '0'
    ["..@..", ".@@..", "..@..", "..@..", "..@..", "..@..", ".@@@."], // '1'
    [".@@@.", "@...@", "....@", "..@@.", ".@...", "@....", "@@@@@"], // '2'
    ["@@@@@", "....@", "...@.", "..@@.", "....@", "@...@", ".@@@."], // '3'
    ["...@.", "..@@.", ".@.@.", "@..@.", "@@@@@", "...@.", "...@."], // '4'
    ["@@@@@", "@....", "@@@@.", "....@", "....@", "@...@", ".@@@."], // '5'
    [".@@@.", "@...@", "@....", "@@@@.", "@...@", "@...@", ".@@@."], // '6'
    ["@@@@@", "....@", "...@.", "..@..", ".@...", ".@...", ".@..."], // '7'
    [".@@@.", "@...@", "@...@", ".@@@.", "@...@", "@...@", ".@@@."], // '8'
    [".@@@.", "@...@", "@...@", ".@@@@", "....@", "@...@", ".@@@."], // '9'
    [".....", "..@..", ".....", ".....", ".....", "..@..", "....."], // ':'
    [".....", "..@..", ".....", ".....", ".....", "..@..", "..@.."], // ';'
    ["....@", "...@.", "..@..", ".@...", "..@..", "...@.", "....@"], // '<'
    [".....", ".....", "@@@@@", ".....", "@@@@@", ".....", "....."], // '='
    ["@....", ".@...", "..@..", "...@.", "..@..", ".@...", "@...."], // '>'
    [".@@@.", "@...@", "...@.", "..@..", "..@..", ".....", "..@.."], // '?'
    [".@@@.", "@...@", "@.@.@", "@@.@@", "@.@..", "@...@", ".@@@."], // '@'
    ["..@..", ".@.@.", "@...@", "@...@", "@@@@@", "@...@", "@...@"], // 'A'
    ["@@@@.", "@...@", "@...@", "@@@@.", "@...@", "@...@", "@@@@."], // 'B'
    [".@@@.", "@...@", "@....", "@....", "@....", "@...@", ".@@@."], // 'C'
    ["@@@@.", "@...@", "@...@", "@...@", "@...@", "@...@", "@@@@."], // 'D'
    ["@@@@@", "@....", "@....", "@@@@.", "@....", "@....", "@@@@@"], // 'E'
    ["@@@@@", "@....", "@....", "@@@@.", "@....", "@....", "@...."], // 'F'
    [".@@@.", "@...@", "@....", "@.@@@", "@...@", "@...@", ".@@@."], // 'G'
    ["@...@", "@...@", "@...@", "@@@@@", "@...@", "@...@", "@...@"], // 'H'
    [".@@@.", "..@..", "..@..", "..@..", "..@..", "..@..", ".@@@."], // 'I'
    ["....@", "....@", "....@", "....@", "....@", "@...@", ".@@@."], // 'J'
    ["@...@", "@..@.", "@.@..", "@@...", "@.@..", "@..@.", "@...@"], // 'K'
    ["@....", "@....", "@....", "@....", "@....", "@....", "@@@@@"], // 'L'
    ["@...@", "@@.@@", "@.@.@", "@.@.@", "@...@", "@...@", "@...@"], // 'M'
    ["@...@", "@...@", "@@..@", "@.@.@", "@..@@", "@...@", "@...@"], // 'N'
    [".@@@.", "@...@", "@...@", "@...@", "@...@", "@...@", ".@@@."], // 'O'
    ["@@@@.", "@...@", "@...@", "@@@@.", "@....", "@....", "@...."], // 'P'
    [".@@@.", "@...@", "@...@", "@...@", "@.@.@", "@..@@", ".@@@@"], // 'Q'
    ["@@@@.", "@...@", "@...@", "@@@@.", "@.@..", "@..@.", "@...@"], // 'R'
    [".@@@.", "@...@", "@....", ".@@@.", "@...@", "....@", ".@@@."], // 'S'
    ["@@@@@", "..@..", "..@..", "..@..", "..@..", "..@..", "..@.."], // 'T'
    ["@...@", "@...@", "@...@", "@...@", "@...@", "@...@", ".@@@."], // 'U'
    ["@...@", "@...@", "@...@", "@...@", "@...@", ".@.@.", "..@.."], // 'V'
    ["@...@", "@...@", "@...@", "@.@.@", "@.@.@", "@@.@@", "@...@"], // 'W'
    ["@...@", "@...@", ".@.@.", "..@..", ".@.@.", "@...@", "@...@"], // 'X'
    ["@...@", "@...@", ".@.@.", "..@..", "..@..", "..@..", "..@.."], // 'Y'
    ["@@@@@", "....@", "...@.", "..@..", ".@...", "@....", "@@@@@"], // 'Z'
    ["...@@", "..@..", "..@..", "..@..", "..@..", "..@..", "...@@"], // '['
    [".@...", ".@...", "..@..", "..@..", "..@..", "...@.", "...@."], // '\'
    ["@@...", "..@..", "..@..", "..@..", "..@..", "..@..", "@@..."], // ']'
    ["..@..", ".@.@.", "@...@", ".....", ".....", ".....", "....."], // '^'
    [".....", ".....", ".....", ".....", ".....", ".....", "@@@@@"], // '_'
    ["..@..", "...@.", ".....", ".....", ".....", ".....", "....."], // '`'
];
