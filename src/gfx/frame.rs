//! Frame composition
//!
//! Pure read of the world: draws a complete frame onto the canvas without
//! touching simulation state. The score board, every alien slot whose death
//! counter is still running, every live projectile, then the player.

use crate::consts::{BACKGROUND_COLOUR, FOREGROUND_COLOUR};
use crate::sim::World;

use super::assets::Assets;
use super::canvas::PixelCanvas;

pub fn compose(canvas: &mut PixelCanvas, world: &World, assets: &Assets) {
    canvas.clear(BACKGROUND_COLOUR);

    let font = &assets.font;
    canvas.blit_text(
        font,
        "SCORE",
        4,
        canvas.height() - font.glyph_height() as i32 - 7,
        FOREGROUND_COLOUR,
    );
    canvas.blit_number(
        font,
        world.score,
        4 + 2 * font.glyph_width() as i32,
        canvas.height() - 2 * font.glyph_height() as i32 - 12,
        FOREGROUND_COLOUR,
    );

    for (alien, &counter) in world.aliens.iter().zip(world.death_counters.iter()) {
        if counter == 0 {
            continue;
        }
        match alien.kind.class() {
            Some(class) => {
                let sprite = assets.sprite(world.animations[class].current());
                canvas.blit_sprite(sprite, alien.pos.x, alien.pos.y, FOREGROUND_COLOUR);
            }
            None => {
                canvas.blit_sprite(&assets.alien_death, alien.pos.x, alien.pos.y, FOREGROUND_COLOUR)
            }
        }
    }

    for projectile in world.projectiles.iter() {
        canvas.blit_sprite(
            &assets.projectile,
            projectile.pos.x,
            projectile.pos.y,
            FOREGROUND_COLOUR,
        );
    }

    canvas.blit_sprite(
        &assets.player,
        world.player.pos.x,
        world.player.pos.y,
        FOREGROUND_COLOUR,
    );
}
