//! Software rendering
//!
//! CPU-side compositing only: a fixed-size pixel buffer, coverage-mask
//! sprites, a 65-glyph bitmap font, and the per-tick frame composition.
//! Presenting the finished buffer is the platform layer's problem.

pub mod assets;
pub mod canvas;
pub mod frame;
pub mod sprite;

pub use assets::{Assets, SpriteId};
pub use canvas::{PixelCanvas, rgb};
pub use sprite::{FontSheet, Sprite};
