//! Pixel Invaders entry point
//!
//! Headless scripted run: drives the core for a fixed number of ticks with a
//! canned input script, then prints the final world snapshot as JSON. A real
//! presenter would swap CountingSink/ScriptedInput for a window-backed sink
//! and key-event source.

use pixel_invaders::GameLoop;
use pixel_invaders::platform::{CountingSink, ScriptedInput};
use pixel_invaders::sim::TickInput;

fn main() {
    env_logger::init();
    log::info!("Pixel Invaders (headless) starting...");

    let script: Vec<TickInput> = (0..600u32)
        .map(|t| TickInput {
            move_dir: match t {
                0..120 => 1,
                120..300 => -1,
                _ => 1,
            },
            fire: t % 25 == 0,
            quit: false,
        })
        .collect();

    let mut game = GameLoop::new();
    let mut input = ScriptedInput::new(script);
    let mut sink = CountingSink::default();
    game.run(&mut input, &mut sink);

    log::info!("presented {} frames, final score {}", sink.frames, game.world().score);

    match serde_json::to_string_pretty(game.world()) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("world snapshot failed: {err}"),
    }
}
