//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only, no wall-clock timing
//! - No randomness
//! - Single-threaded mutation, one path per tick
//! - No rendering or platform dependencies

pub mod animation;
pub mod collision;
pub mod state;
pub mod tick;

pub use animation::SpriteAnimation;
pub use collision::{Aabb, overlaps};
pub use state::{Alien, AlienKind, Player, Projectile, ProjectilePool, World};
pub use tick::{TickInput, update};
