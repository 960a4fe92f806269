//! Pixel Invaders - a software-rendered arcade shooter core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, the tick)
//! - `gfx`: Software compositing (pixel canvas, sprites, bitmap font)
//! - `platform`: Presenter/input abstraction
//! - `game`: Tick orchestration

pub mod game;
pub mod gfx;
pub mod platform;
pub mod sim;

pub use game::GameLoop;
pub use gfx::{Assets, PixelCanvas, rgb};
pub use sim::{TickInput, World};

/// Game configuration constants
pub mod consts {
    use crate::gfx::rgb;

    /// Canvas dimensions in pixels
    pub const CANVAS_WIDTH: i32 = 224;
    pub const CANVAS_HEIGHT: i32 = 256;

    /// Alien grid layout
    pub const ALIEN_ROWS: usize = 5;
    pub const ALIEN_COLS: usize = 11;
    pub const NUM_ALIENS: usize = ALIEN_ROWS * ALIEN_COLS;
    pub const ALIEN_SPACING_X: i32 = 16;
    pub const ALIEN_SPACING_Y: i32 = 17;
    pub const GRID_OFFSET_X: i32 = 20;
    pub const GRID_OFFSET_Y: i32 = 128;

    /// Player defaults
    pub const PLAYER_START_X: i32 = 107;
    pub const PLAYER_START_Y: i32 = 32;
    pub const PLAYER_START_LIVES: u8 = 3;
    /// Horizontal pixels per tick per held direction
    pub const PLAYER_SPEED: i32 = 2;

    /// Projectile defaults
    pub const MAX_PROJECTILES: usize = 128;
    /// Vertical pixels per tick, upward
    pub const PROJECTILE_SPEED: i32 = 2;

    /// Ticks a killed alien's corpse stays on screen
    pub const DEATH_COUNTER_TICKS: u8 = 10;
    /// Ticks each animation frame is held
    pub const FRAME_DURATION_TICKS: u32 = 10;

    /// Frame colours
    pub const BACKGROUND_COLOUR: u32 = rgb(0, 128, 0);
    pub const FOREGROUND_COLOUR: u32 = rgb(128, 0, 0);
}
