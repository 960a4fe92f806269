//! Tick orchestration
//!
//! One tick runs render, animation advance, present, then state mutation, in
//! that order, every time. Quit is observed only between ticks; a started
//! tick always completes.

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::gfx::{Assets, PixelCanvas, frame};
use crate::platform::{InputSource, PresentSink};
use crate::sim::{TickInput, World, update};

/// Owns the world, the canvas, and the asset table for one run.
pub struct GameLoop {
    assets: Assets,
    world: World,
    canvas: PixelCanvas,
}

impl GameLoop {
    pub fn new() -> Self {
        let assets = Assets::load();
        let world = World::new(&assets);
        Self {
            assets,
            world,
            canvas: PixelCanvas::new(CANVAS_WIDTH, CANVAS_HEIGHT),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn canvas(&self) -> &PixelCanvas {
        &self.canvas
    }

    /// Run one complete tick against the given sink.
    pub fn tick(&mut self, input: &TickInput, sink: &mut dyn PresentSink) {
        frame::compose(&mut self.canvas, &self.world, &self.assets);
        self.world.advance_animations();
        sink.present(self.canvas.pixels());
        update(&mut self.world, input, &self.assets);
    }

    /// Drive ticks until the input source raises quit.
    pub fn run(&mut self, input: &mut dyn InputSource, sink: &mut dyn PresentSink) {
        loop {
            let snapshot = input.poll();
            if snapshot.quit {
                break;
            }
            self.tick(&snapshot, sink);
        }
        log::info!(
            "run finished after {} ticks, score {}",
            self.world.time_ticks,
            self.world.score
        );
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}
