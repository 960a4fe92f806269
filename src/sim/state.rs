//! Entity state and the fixed world layout
//!
//! Everything the tick mutates lives here. All of it is serializable and
//! comparable so identical input sequences can be checked for identical
//! worlds.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::gfx::Assets;
use crate::gfx::assets::ALIEN_CLASSES;

use super::animation::SpriteAnimation;

/// Alien classification. `Dead` is terminal: a slot never transitions back
/// to a live kind and is never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlienKind {
    Dead,
    TypeA,
    TypeB,
    TypeC,
}

impl AlienKind {
    /// Points awarded for destroying an alien of this kind.
    pub fn score_value(self) -> u64 {
        match self {
            AlienKind::Dead => 0,
            AlienKind::TypeA => 15,
            AlienKind::TypeB => 10,
            AlienKind::TypeC => 5,
        }
    }

    /// Animation class index for a live kind, `None` for a corpse.
    pub fn class(self) -> Option<usize> {
        match self {
            AlienKind::Dead => None,
            AlienKind::TypeA => Some(0),
            AlienKind::TypeB => Some(1),
            AlienKind::TypeC => Some(2),
        }
    }

    /// Kind seeded into grid row `row`: `(5 - row) / 2 + 1`, so two rows of
    /// C, two of B, one of A.
    fn from_grid_row(row: usize) -> Self {
        match (5 - row) / 2 + 1 {
            1 => AlienKind::TypeA,
            2 => AlienKind::TypeB,
            _ => AlienKind::TypeC,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Alien {
    pub kind: AlienKind,
    pub pos: IVec2,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: IVec2,
    /// Carried in the data model; nothing in the current wave damages the
    /// player, so this never decrements.
    pub lives: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: IVec2,
    /// Vertical pixels per tick; positive is upward.
    pub dir: i32,
}

/// Bounded projectile collection with swap-based removal.
///
/// Removal overwrites the removed slot with the last live element and shrinks
/// the count: O(1), but iteration order is not preserved. Callers must not
/// rely on projectile order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectilePool {
    live: Vec<Projectile>,
}

impl ProjectilePool {
    pub fn new() -> Self {
        Self {
            live: Vec::with_capacity(MAX_PROJECTILES),
        }
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Projectile> {
        self.live.iter()
    }

    /// Add a projectile if the pool is below capacity. Returns whether the
    /// projectile was accepted; at capacity the request is dropped.
    pub fn try_spawn(&mut self, projectile: Projectile) -> bool {
        if self.live.len() < MAX_PROJECTILES {
            self.live.push(projectile);
            true
        } else {
            false
        }
    }

    /// Remove the projectile at `index` by swapping in the last live element.
    pub fn remove(&mut self, index: usize) {
        self.live.swap_remove(index);
    }
}

impl std::ops::Index<usize> for ProjectilePool {
    type Output = Projectile;

    fn index(&self, index: usize) -> &Projectile {
        &self.live[index]
    }
}

impl std::ops::IndexMut<usize> for ProjectilePool {
    fn index_mut(&mut self, index: usize) -> &mut Projectile {
        &mut self.live[index]
    }
}

/// Complete simulation state for the single fixed wave.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub width: i32,
    pub height: i32,
    /// 5x11 grid in row-major construction order; slots are never resized.
    pub aliens: Vec<Alien>,
    /// Parallel per-slot countdown, in ticks, for how long a corpse stays
    /// visible. Initialized once, decrement-only, floors at 0.
    pub death_counters: Vec<u8>,
    pub player: Player,
    pub projectiles: ProjectilePool,
    /// Monotonically non-decreasing.
    pub score: u64,
    pub time_ticks: u64,
    /// One shared track per alien class; every alien of a class shows the
    /// same frame on a given tick.
    pub animations: [SpriteAnimation; ALIEN_CLASSES],
}

impl World {
    /// Build the fixed initial wave.
    ///
    /// Each alien's x gets a centering correction of half the width
    /// difference between the death sprite and its own art, so the later
    /// death-sprite substitution stays centred on the slot.
    pub fn new(assets: &Assets) -> Self {
        let animations = std::array::from_fn(|class| {
            SpriteAnimation::looping(assets.alien_frames(class).to_vec(), FRAME_DURATION_TICKS)
        });

        let death_width = assets.alien_death.width() as i32;
        let mut aliens = Vec::with_capacity(NUM_ALIENS);
        for row in 0..ALIEN_ROWS {
            for col in 0..ALIEN_COLS {
                let kind = AlienKind::from_grid_row(row);
                let class = kind.class().expect("grid rows seed live kinds");
                let width = assets.sprite(assets.alien_frames(class)[0]).width() as i32;
                aliens.push(Alien {
                    kind,
                    pos: IVec2::new(
                        ALIEN_SPACING_X * col as i32 + GRID_OFFSET_X + (death_width - width) / 2,
                        ALIEN_SPACING_Y * row as i32 + GRID_OFFSET_Y,
                    ),
                });
            }
        }

        log::info!("world built: {} aliens, player at x={}", aliens.len(), PLAYER_START_X);

        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            aliens,
            death_counters: vec![DEATH_COUNTER_TICKS; NUM_ALIENS],
            player: Player {
                pos: IVec2::new(PLAYER_START_X, PLAYER_START_Y),
                lives: PLAYER_START_LIVES,
            },
            projectiles: ProjectilePool::new(),
            score: 0,
            time_ticks: 0,
            animations,
        }
    }

    /// Advance every animation track by one tick.
    pub fn advance_animations(&mut self) {
        for track in &mut self.animations {
            track.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_kinds_by_row() {
        let assets = Assets::load();
        let world = World::new(&assets);
        assert_eq!(world.aliens.len(), NUM_ALIENS);

        let expected = [
            AlienKind::TypeC,
            AlienKind::TypeC,
            AlienKind::TypeB,
            AlienKind::TypeB,
            AlienKind::TypeA,
        ];
        for row in 0..ALIEN_ROWS {
            for col in 0..ALIEN_COLS {
                assert_eq!(world.aliens[row * ALIEN_COLS + col].kind, expected[row]);
            }
        }
    }

    #[test]
    fn test_grid_positions_centred_on_death_sprite() {
        let assets = Assets::load();
        let world = World::new(&assets);

        // Row 0 is kind C (12 wide); the 13-wide death sprite leaves no
        // integer slack, so the correction is (13 - 12) / 2 = 0.
        assert_eq!(world.aliens[0].pos, IVec2::new(20, 128));
        // Row 4 is kind A (8 wide): correction (13 - 8) / 2 = 2.
        let top_left = world.aliens[4 * ALIEN_COLS].pos;
        assert_eq!(top_left, IVec2::new(22, 128 + 17 * 4));
        // Columns advance by the fixed spacing.
        assert_eq!(world.aliens[1].pos.x - world.aliens[0].pos.x, ALIEN_SPACING_X);
    }

    #[test]
    fn test_initial_counters_player_score() {
        let assets = Assets::load();
        let world = World::new(&assets);
        assert!(world.death_counters.iter().all(|&c| c == DEATH_COUNTER_TICKS));
        assert_eq!(world.player.pos, IVec2::new(PLAYER_START_X, PLAYER_START_Y));
        assert_eq!(world.player.lives, PLAYER_START_LIVES);
        assert_eq!(world.score, 0);
        assert!(world.projectiles.is_empty());
    }

    #[test]
    fn test_pool_swap_remove_reorders() {
        let mut pool = ProjectilePool::new();
        for y in 0..3 {
            assert!(pool.try_spawn(Projectile {
                pos: IVec2::new(0, y),
                dir: 2
            }));
        }
        pool.remove(0);
        assert_eq!(pool.len(), 2);
        // The last element was swapped into slot 0.
        assert_eq!(pool[0].pos.y, 2);
        assert_eq!(pool[1].pos.y, 1);
    }

    #[test]
    fn test_pool_drops_spawn_at_capacity() {
        let mut pool = ProjectilePool::new();
        let shot = Projectile {
            pos: IVec2::ZERO,
            dir: 2,
        };
        for _ in 0..MAX_PROJECTILES {
            assert!(pool.try_spawn(shot));
        }
        assert!(!pool.try_spawn(shot));
        assert_eq!(pool.len(), MAX_PROJECTILES);
    }
}
