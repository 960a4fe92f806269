//! The mutation half of a tick
//!
//! Runs after the frame for this tick has been composed and presented, in a
//! fixed order: corpse decay, projectile motion and culling, projectile-alien
//! collision, player motion, firing. Given the same input snapshots the
//! sequence is fully deterministic; nothing here reads a clock or an RNG.

use glam::IVec2;

use crate::consts::{PLAYER_SPEED, PROJECTILE_SPEED};
use crate::gfx::Assets;

use super::collision::{Aabb, overlaps};
use super::state::{AlienKind, Projectile, World};

/// Input snapshot for a single tick. Built fresh by the input source each
/// tick; `fire` is edge-triggered and consumed with the snapshot, so one
/// request yields at most one projectile.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Net held direction: -1 left, +1 right, 0 idle or cancelled out.
    pub move_dir: i8,
    /// A fire request was raised since the previous tick.
    pub fire: bool,
    /// Stop the run at the next tick boundary.
    pub quit: bool,
}

/// Advance the world by one tick of simulation.
pub fn update(world: &mut World, input: &TickInput, assets: &Assets) {
    world.time_ticks += 1;

    decay_corpses(world);
    move_projectiles(world, assets);
    move_player(world, input, assets);
    fire(world, input, assets);
}

/// Count down corpse visibility. Counters floor at 0 and never reset; an
/// expired slot stays empty for the rest of the run.
fn decay_corpses(world: &mut World) {
    for (alien, counter) in world.aliens.iter().zip(world.death_counters.iter_mut()) {
        if alien.kind == AlienKind::Dead && *counter > 0 {
            *counter -= 1;
        }
    }
}

/// Move every live projectile, cull the ones leaving the vertical play area,
/// and resolve alien hits.
///
/// Removal is swap-based, so after removing at `bi` the slot holds a
/// projectile that has not been examined yet; the index only advances when
/// the slot survives.
fn move_projectiles(world: &mut World, assets: &Assets) {
    let projectile_height = assets.projectile.height() as i32;
    let mut bi = 0;
    while bi < world.projectiles.len() {
        let projectile = &mut world.projectiles[bi];
        projectile.pos.y += projectile.dir;
        let y = projectile.pos.y;
        if y >= world.height || y < projectile_height {
            world.projectiles.remove(bi);
            continue;
        }
        if collide_projectile(world, assets, bi) {
            continue;
        }
        bi += 1;
    }
}

/// Test the projectile at `index` against every live alien. On the first hit
/// the alien dies, the score increases, and the projectile is removed; a
/// projectile kills at most one alien per tick. Returns whether it hit.
fn collide_projectile(world: &mut World, assets: &Assets, index: usize) -> bool {
    let shot = Aabb::of_sprite(&assets.projectile, world.projectiles[index].pos);
    for ai in 0..world.aliens.len() {
        let kind = world.aliens[ai].kind;
        let Some(class) = kind.class() else {
            continue;
        };
        let sprite = assets.sprite(world.animations[class].current());
        if !overlaps(shot, Aabb::of_sprite(sprite, world.aliens[ai].pos)) {
            continue;
        }

        world.score += kind.score_value();
        let alien = &mut world.aliens[ai];
        alien.kind = AlienKind::Dead;
        // Re-centre the wider death sprite on the alien's footprint.
        alien.pos.x -= (assets.alien_death.width() as i32 - sprite.width() as i32) / 2;
        log::debug!("alien {ai} destroyed, score now {}", world.score);
        world.projectiles.remove(index);
        return true;
    }
    false
}

/// Apply horizontal player motion with an edge clamp. The clamp snaps the
/// player flush to the crossed edge without blocking motion on later ticks.
fn move_player(world: &mut World, input: &TickInput, assets: &Assets) {
    let velocity = PLAYER_SPEED * input.move_dir as i32;
    if velocity == 0 {
        return;
    }
    let player_width = assets.player.width() as i32;
    let x = world.player.pos.x;
    if x + player_width + velocity >= world.width {
        world.player.pos.x = world.width - player_width;
    } else if x + velocity <= 0 {
        world.player.pos.x = 0;
    } else {
        world.player.pos.x += velocity;
    }
}

/// Spawn a projectile at the player's muzzle if one was requested and the
/// pool has room. At capacity the request is dropped, not queued.
fn fire(world: &mut World, input: &TickInput, assets: &Assets) {
    if !input.fire {
        return;
    }
    let spawn = Projectile {
        pos: IVec2::new(
            world.player.pos.x + assets.player.width() as i32 / 2,
            world.player.pos.y + assets.player.height() as i32,
        ),
        dir: PROJECTILE_SPEED,
    };
    if !world.projectiles.try_spawn(spawn) {
        log::debug!("fire request dropped: projectile pool full");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn fresh() -> (Assets, World) {
        let assets = Assets::load();
        let world = World::new(&assets);
        (assets, world)
    }

    fn full_tick(world: &mut World, input: &TickInput, assets: &Assets) {
        // Steps a tick runs after rendering/presenting.
        world.advance_animations();
        update(world, input, assets);
    }

    #[test]
    fn test_nine_idle_ticks_change_nothing() {
        let (assets, mut world) = fresh();
        let baseline = world.aliens.clone();
        for _ in 0..9 {
            full_tick(&mut world, &TickInput::default(), &assets);
        }
        assert!(world.projectiles.is_empty());
        assert_eq!(world.score, 0);
        assert_eq!(world.aliens, baseline);
        assert!(world.death_counters.iter().all(|&c| c == DEATH_COUNTER_TICKS));
    }

    #[test]
    fn test_fire_spawns_one_projectile_at_muzzle() {
        let (assets, mut world) = fresh();
        let input = TickInput {
            fire: true,
            ..Default::default()
        };
        full_tick(&mut world, &input, &assets);

        assert_eq!(world.projectiles.len(), 1);
        let shot = world.projectiles[0];
        assert_eq!(
            shot.pos,
            IVec2::new(
                PLAYER_START_X + assets.player.width() as i32 / 2,
                PLAYER_START_Y + assets.player.height() as i32,
            )
        );
        assert_eq!(shot.dir, PROJECTILE_SPEED);

        // Edge-triggered: the next snapshot without a request spawns nothing.
        full_tick(&mut world, &TickInput::default(), &assets);
        assert_eq!(world.projectiles.len(), 1);
    }

    #[test]
    fn test_fire_dropped_at_capacity() {
        let (assets, mut world) = fresh();
        let parked = Projectile {
            // Below every alien and inside the vertical play area.
            pos: IVec2::new(0, 50),
            dir: 0,
        };
        while world.projectiles.len() < MAX_PROJECTILES {
            assert!(world.projectiles.try_spawn(parked));
        }
        let input = TickInput {
            fire: true,
            ..Default::default()
        };
        full_tick(&mut world, &input, &assets);
        assert_eq!(world.projectiles.len(), MAX_PROJECTILES);
    }

    #[test]
    fn test_kill_scores_and_centres_corpse() {
        let (assets, mut world) = fresh();
        // Alien 0 is kind C (5 points). Park a projectile so that after this
        // tick's motion it sits inside the alien's box.
        let target = world.aliens[0];
        assert_eq!(target.kind, AlienKind::TypeC);
        let frame_width = assets
            .sprite(world.animations[2].current())
            .width() as i32;
        assert!(world.projectiles.try_spawn(Projectile {
            pos: IVec2::new(target.pos.x + frame_width / 2, target.pos.y - PROJECTILE_SPEED),
            dir: PROJECTILE_SPEED,
        }));

        full_tick(&mut world, &TickInput::default(), &assets);

        assert_eq!(world.aliens[0].kind, AlienKind::Dead);
        assert_eq!(world.death_counters[0], DEATH_COUNTER_TICKS);
        assert_eq!(world.score, 5);
        assert!(world.projectiles.is_empty());
        let shift = (assets.alien_death.width() as i32 - frame_width) / 2;
        assert_eq!(world.aliens[0].pos.x, target.pos.x - shift);
    }

    #[test]
    fn test_kill_type_a_shifts_corpse_left() {
        let (assets, mut world) = fresh();
        // Top row (kind A, 8 wide) against the 13-wide death sprite: the
        // corpse shifts left by (13 - 8) / 2 = 2.
        let ai = 4 * ALIEN_COLS;
        let target = world.aliens[ai];
        assert_eq!(target.kind, AlienKind::TypeA);
        assert!(world.projectiles.try_spawn(Projectile {
            pos: IVec2::new(target.pos.x + 4, target.pos.y - PROJECTILE_SPEED),
            dir: PROJECTILE_SPEED,
        }));

        full_tick(&mut world, &TickInput::default(), &assets);

        assert_eq!(world.aliens[ai].kind, AlienKind::Dead);
        assert_eq!(world.aliens[ai].pos.x, target.pos.x - 2);
        assert_eq!(world.score, 15);
    }

    #[test]
    fn test_dead_is_terminal_and_corpse_not_hit() {
        let (assets, mut world) = fresh();
        world.aliens[0].kind = AlienKind::Dead;
        let pos = world.aliens[0].pos;

        // A projectile flying through the corpse's box hits nothing.
        assert!(world.projectiles.try_spawn(Projectile {
            pos: IVec2::new(pos.x + 2, pos.y),
            dir: PROJECTILE_SPEED,
        }));
        full_tick(&mut world, &TickInput::default(), &assets);

        assert_eq!(world.aliens[0].kind, AlienKind::Dead);
        assert_eq!(world.score, 0);
        assert_eq!(world.projectiles.len(), 1);
    }

    #[test]
    fn test_corpse_decay_floors_at_zero() {
        let (assets, mut world) = fresh();
        world.aliens[0].kind = AlienKind::Dead;
        for _ in 0..DEATH_COUNTER_TICKS + 3 {
            full_tick(&mut world, &TickInput::default(), &assets);
        }
        assert_eq!(world.death_counters[0], 0);
        // Live slots never decay.
        assert!(world.death_counters[1..].iter().all(|&c| c == DEATH_COUNTER_TICKS));
    }

    #[test]
    fn test_projectile_culled_at_top_before_collision() {
        let (assets, mut world) = fresh();
        // One step takes the projectile to exactly canvas height, which is
        // outside the play area and removed during motion.
        assert!(world.projectiles.try_spawn(Projectile {
            pos: IVec2::new(10, CANVAS_HEIGHT - PROJECTILE_SPEED),
            dir: PROJECTILE_SPEED,
        }));
        full_tick(&mut world, &TickInput::default(), &assets);
        assert!(world.projectiles.is_empty());
        assert_eq!(world.score, 0);
    }

    #[test]
    fn test_projectile_culled_below_sprite_height() {
        let (assets, mut world) = fresh();
        let height = assets.projectile.height() as i32;
        assert!(world.projectiles.try_spawn(Projectile {
            pos: IVec2::new(10, height),
            dir: -PROJECTILE_SPEED,
        }));
        full_tick(&mut world, &TickInput::default(), &assets);
        assert!(world.projectiles.is_empty());
    }

    #[test]
    fn test_player_clamps_at_left_edge() {
        let (assets, mut world) = fresh();
        world.player.pos.x = 0;
        let input = TickInput {
            move_dir: -1,
            ..Default::default()
        };
        full_tick(&mut world, &input, &assets);
        assert_eq!(world.player.pos.x, 0);

        // The clamp does not pin the player: moving right works immediately.
        let input = TickInput {
            move_dir: 1,
            ..Default::default()
        };
        full_tick(&mut world, &input, &assets);
        assert_eq!(world.player.pos.x, PLAYER_SPEED);
    }

    #[test]
    fn test_player_clamps_at_right_edge() {
        let (assets, mut world) = fresh();
        let flush = CANVAS_WIDTH - assets.player.width() as i32;
        world.player.pos.x = flush - 1;
        let input = TickInput {
            move_dir: 1,
            ..Default::default()
        };
        full_tick(&mut world, &input, &assets);
        assert_eq!(world.player.pos.x, flush);
        full_tick(&mut world, &input, &assets);
        assert_eq!(world.player.pos.x, flush);
    }

    #[test]
    fn test_score_monotone_under_fire() {
        let (assets, mut world) = fresh();
        let mut last = 0;
        for t in 0..400u32 {
            let input = TickInput {
                move_dir: if t % 60 < 30 { 1 } else { -1 },
                fire: t % 5 == 0,
                ..Default::default()
            };
            full_tick(&mut world, &input, &assets);
            assert!(world.score >= last);
            assert!(world.projectiles.len() <= MAX_PROJECTILES);
            last = world.score;
        }
        assert!(world.score > 0);
    }

    #[test]
    fn test_determinism() {
        let (assets, mut a) = fresh();
        let mut b = World::new(&assets);

        for t in 0..300u32 {
            let input = TickInput {
                move_dir: [-1i8, 0, 1][(t % 3) as usize],
                fire: t % 7 == 0,
                ..Default::default()
            };
            full_tick(&mut a, &input, &assets);
            full_tick(&mut b, &input, &assets);
        }
        assert_eq!(a, b);
    }
}
