//! Projectile emission and enemy spawn cadence

use glam::Vec2;
use rand::Rng;

use super::collision::direction_to;
use super::difficulty::{enemy_radius, spawn_interval};
use super::state::{Enemy, GameState, Projectile};

/// Fire as many shots as the banked cooldown allows
///
/// The timer only accumulates while it is below the current delay, so idle
/// time never turns into a burst. Aiming at the player's own position fires
/// nothing.
pub fn emit_projectiles(state: &mut GameState, firing: bool, target: Vec2, dt: f32) {
    if state.shoot_timer < state.scaling.shoot_delay {
        state.shoot_timer += dt;
    }

    if !firing {
        return;
    }
    let Some(dir) = direction_to(state.player.pos, target) else {
        return;
    };

    while state.shoot_timer >= state.scaling.shoot_delay {
        let shot = Projectile {
            pos: state.player.pos,
            dir,
            radius: state.scaling.projectile_radius,
            speed: state.scaling.projectile_speed,
            pierce: state.scaling.projectile_pierce,
        };
        if !state.projectiles.add(shot) {
            log::debug!("Projectile pool full, holding fire");
            break;
        }
        state.shoot_timer -= state.scaling.shoot_delay;
    }
}

/// Spawn enemies on a ring around the player at the current cadence
///
/// When the pool fills up the leftover time is capped at one interval, so
/// freed slots don't get refilled all at once.
pub fn spawn_enemies(state: &mut GameState, dt: f32) {
    let interval = spawn_interval(state.elapsed, &state.tuning);
    let radius = enemy_radius(state.elapsed, &state.tuning);
    let distance = state.tuning.spawn_distance();

    state.spawn_timer += dt;

    while state.spawn_timer >= interval {
        if state.enemies.is_full() {
            log::debug!("Enemy pool full, dropping spawn backlog");
            state.spawn_timer = state.spawn_timer.min(interval);
            break;
        }

        let degrees: u32 = state.rng.random_range(0..=360);
        let offset = Vec2::from_angle((degrees as f32).to_radians()) * distance;
        state.enemies.add(Enemy {
            pos: state.player.pos + offset,
            radius,
        });
        state.spawn_timer -= interval;
    }
}
