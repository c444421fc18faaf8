//! Bullet Hell - a top-down survival shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (pools, spawning, collisions, game modes)
//! - `tuning`: Data-driven game balance
//! - `render`: Read-only render pass over the simulation state
//! - `platform`: Window/input/timing/render collaborator traits
//! - `autopilot`: AI input driver for headless demo runs

pub mod autopilot;
pub mod platform;
pub mod render;
pub mod sim;
pub mod tuning;

pub use tuning::{Milestone, MilestoneEffect, Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Projectile pool capacity
    pub const MAX_PROJECTILES: usize = 100;
    /// Enemy pool capacity
    pub const MAX_ENEMIES: usize = 100;

    pub const WINDOW_TITLE: &str = "Bullet Hell";
    /// Frame rate the headless demo runs at
    pub const TARGET_FPS: u32 = 60;

    /// Elapsed time used for the spawn cadence while the run clock is still at zero
    pub const MIN_SPAWN_ELAPSED: f32 = 0.01;
}
