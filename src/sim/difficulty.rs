//! Difficulty curves
//!
//! Two kinds of scaling drive the game:
//! - Enemy cadence, size and speed follow elapsed run time continuously
//! - Player weapon stats step up at kill-count milestones

use crate::consts::MIN_SPAWN_ELAPSED;
use crate::tuning::{MilestoneEffect, Tuning};

/// Seconds between enemy spawns at `elapsed` seconds into the run
///
/// The run clock starts at zero, so it is floored to keep the interval finite.
pub fn spawn_interval(elapsed: f32, tuning: &Tuning) -> f32 {
    1.0 / (elapsed.max(MIN_SPAWN_ELAPSED) * tuning.spawn_rate)
}

/// Radius of newly spawned enemies; shrinks over time down to a floor
pub fn enemy_radius(elapsed: f32, tuning: &Tuning) -> f32 {
    let shrunk = tuning.enemy_radius - elapsed / tuning.enemy_shrink_time;
    shrunk.max(tuning.min_enemy_radius)
}

/// Homing speed shared by every live enemy
pub fn enemy_speed(elapsed: f32, tuning: &Tuning) -> f32 {
    tuning.enemy_speed + elapsed / tuning.enemy_speedup_time
}

/// Weapon stats that scale with kills
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaling {
    pub projectile_speed: f32,
    pub projectile_radius: f32,
    pub shoot_delay: f32,
    pub projectile_pierce: i32,
    /// Total radius the player has gained from milestones
    pub player_growth: f32,
}

impl Scaling {
    /// Stats at the start of a run
    pub fn base(tuning: &Tuning) -> Self {
        Self {
            projectile_speed: tuning.projectile_speed,
            projectile_radius: tuning.projectile_radius,
            shoot_delay: tuning.shoot_delay,
            projectile_pierce: tuning.projectile_pierce,
            player_growth: 0.0,
        }
    }

    /// Stats after `kills` kills, computed from scratch
    pub fn at_kills(kills: u32, tuning: &Tuning) -> Self {
        let mut scaling = Self::base(tuning);
        for milestone in &tuning.milestones {
            if milestone.every == 0 {
                continue;
            }
            for _ in 0..kills / milestone.every {
                scaling.apply(milestone.effect, tuning);
            }
        }
        scaling
    }

    /// Apply every milestone that `kills` lands on. Returns how many fired.
    ///
    /// Milestones sharing a kill count stack.
    pub fn on_kill(&mut self, kills: u32, tuning: &Tuning) -> usize {
        let mut fired = 0;
        for milestone in &tuning.milestones {
            if milestone.every > 0 && kills % milestone.every == 0 {
                self.apply(milestone.effect, tuning);
                fired += 1;
            }
        }
        fired
    }

    fn apply(&mut self, effect: MilestoneEffect, tuning: &Tuning) {
        match effect {
            MilestoneEffect::ProjectileSpeed(v) => self.projectile_speed += v,
            MilestoneEffect::ProjectileRadius(v) => self.projectile_radius += v,
            MilestoneEffect::ShootDelay(v) => {
                self.shoot_delay = (self.shoot_delay + v).max(tuning.min_shoot_delay);
            }
            MilestoneEffect::ProjectilePierce(v) => self.projectile_pierce += v,
            MilestoneEffect::PlayerRadius(v) => self.player_growth += v,
        }
    }
}
