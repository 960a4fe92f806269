//! Platform abstraction layer
//!
//! The core's entire outward contract: a sink that accepts one finished
//! frame per tick, and a source that supplies one input snapshot per tick.
//! Window, texture upload, and key plumbing live behind these seams in
//! whatever presenter hosts the core. Headless implementations here cover
//! tests and scripted runs.

use crate::sim::TickInput;

/// Accepts one composited frame per tick. The frame is row-major packed
/// colour, fixed canvas dimensions, and may be blocked on until vsync.
pub trait PresentSink {
    fn present(&mut self, frame: &[u32]);
}

/// Supplies the per-tick input snapshot.
pub trait InputSource {
    fn poll(&mut self) -> TickInput;
}

/// Discards frames, keeping a count. For headless runs and tests.
#[derive(Debug, Default)]
pub struct CountingSink {
    pub frames: u64,
}

impl PresentSink for CountingSink {
    fn present(&mut self, _frame: &[u32]) {
        self.frames += 1;
    }
}

/// Replays a fixed sequence of snapshots, then reports quit forever.
#[derive(Debug)]
pub struct ScriptedInput {
    script: Vec<TickInput>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(script: Vec<TickInput>) -> Self {
        Self { script, cursor: 0 }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> TickInput {
        match self.script.get(self.cursor) {
            Some(&snapshot) => {
                self.cursor += 1;
                snapshot
            }
            None => TickInput {
                quit: true,
                ..Default::default()
            },
        }
    }
}
