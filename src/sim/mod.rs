//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame duration is supplied by the caller
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod pool;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, circles_overlap, direction_to};
pub use difficulty::{Scaling, enemy_radius, enemy_speed, spawn_interval};
pub use pool::Pool;
pub use state::{Enemy, EnemyPool, GameState, Mode, Player, Projectile, ProjectilePool};
pub use tick::{FrameInput, frame, step};
