//! Game balance and configuration
//!
//! Every balance constant lives here so a `tuning.json` file can override
//! any subset of them. Missing fields fall back to the defaults below.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(String),
}

/// A stat change applied each time the kill count hits a multiple of `every`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub every: u32,
    pub effect: MilestoneEffect,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "stat", content = "amount", rename_all = "snake_case")]
pub enum MilestoneEffect {
    ProjectileSpeed(f32),
    ProjectileRadius(f32),
    /// Negative: shots come faster
    ShootDelay(f32),
    ProjectilePierce(i32),
    PlayerRadius(f32),
}

impl MilestoneEffect {
    /// Whether this effect moves its stat in the "harder for enemies" direction
    fn is_monotonic(&self) -> bool {
        match *self {
            MilestoneEffect::ProjectileSpeed(v)
            | MilestoneEffect::ProjectileRadius(v)
            | MilestoneEffect::PlayerRadius(v) => v >= 0.0,
            MilestoneEffect::ShootDelay(v) => v <= 0.0,
            MilestoneEffect::ProjectilePierce(v) => v >= 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Tuning {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Player ===
    pub player_radius: f32,
    /// Units per second on each axis
    pub player_speed: f32,
    /// Radius lost per enemy contact
    pub player_hit_penalty: f32,

    // === Shooting ===
    /// Seconds between shots
    pub shoot_delay: f32,
    pub min_shoot_delay: f32,
    pub projectile_speed: f32,
    pub projectile_radius: f32,
    /// Extra enemies a projectile passes through
    pub projectile_pierce: i32,

    // === Enemies ===
    /// Spawn interval is `1 / (elapsed * spawn_rate)`
    pub spawn_rate: f32,
    pub enemy_radius: f32,
    pub min_enemy_radius: f32,
    /// Seconds of play per unit of radius lost
    pub enemy_shrink_time: f32,
    pub enemy_speed: f32,
    /// Seconds of play per unit of speed gained
    pub enemy_speedup_time: f32,

    // === Scaling ===
    pub milestones: Vec<Milestone>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: 800.0,
            screen_height: 450.0,

            player_radius: 20.0,
            player_speed: 50.0,
            player_hit_penalty: 10.0,

            shoot_delay: 0.3,
            min_shoot_delay: 0.05,
            projectile_speed: 100.0,
            projectile_radius: 4.0,
            projectile_pierce: 0,

            spawn_rate: 0.1,
            enemy_radius: 8.0,
            min_enemy_radius: 1.0,
            enemy_shrink_time: 20.0,
            enemy_speed: 40.0,
            enemy_speedup_time: 10.0,

            milestones: vec![
                Milestone {
                    every: 10,
                    effect: MilestoneEffect::ProjectileSpeed(10.0),
                },
                Milestone {
                    every: 12,
                    effect: MilestoneEffect::PlayerRadius(2.0),
                },
                Milestone {
                    every: 15,
                    effect: MilestoneEffect::ProjectileRadius(1.0),
                },
                Milestone {
                    every: 25,
                    effect: MilestoneEffect::ShootDelay(-0.05),
                },
                Milestone {
                    every: 30,
                    effect: MilestoneEffect::ProjectilePierce(1),
                },
            ],
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from `path`, falling back to defaults when the file is missing or bad
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(TuningError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No tuning file at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Reject values that would break the simulation (zero divisors, non-positive floors)
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("player_radius", self.player_radius),
            ("player_hit_penalty", self.player_hit_penalty),
            ("shoot_delay", self.shoot_delay),
            ("min_shoot_delay", self.min_shoot_delay),
            ("projectile_radius", self.projectile_radius),
            ("spawn_rate", self.spawn_rate),
            ("enemy_radius", self.enemy_radius),
            ("min_enemy_radius", self.min_enemy_radius),
            ("enemy_shrink_time", self.enemy_shrink_time),
            ("enemy_speedup_time", self.enemy_speedup_time),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return invalid(format!("{name} must be positive, got {value}"));
            }
        }
        if self.shoot_delay < self.min_shoot_delay {
            let (delay, floor) = (self.shoot_delay, self.min_shoot_delay);
            return invalid(format!("shoot_delay {delay} is below its floor {floor}"));
        }

        let non_negative = [
            ("player_speed", self.player_speed),
            ("projectile_speed", self.projectile_speed),
            ("enemy_speed", self.enemy_speed),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return invalid(format!("{name} must not be negative, got {value}"));
            }
        }

        if self.projectile_pierce < 0 {
            return invalid("projectile_pierce must not be negative");
        }

        for milestone in &self.milestones {
            let (every, effect) = (milestone.every, milestone.effect);
            if every == 0 {
                return invalid("milestone `every` must be at least 1");
            }
            if !effect.is_monotonic() {
                return invalid(format!(
                    "milestone every {every} kills weakens the player: {effect:?}"
                ));
            }
        }

        Ok(())
    }

    /// Distance from the player at which enemies appear
    pub fn spawn_distance(&self) -> f32 {
        self.screen_width / 2.0
    }
}

fn invalid(reason: impl Into<String>) -> Result<(), TuningError> {
    Err(TuningError::Invalid(reason.into()))
}
