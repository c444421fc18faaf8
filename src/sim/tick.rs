//! Per-frame simulation
//!
//! `frame` dispatches on the current mode; `step` advances a running game by
//! one variable-length frame. Step order is fixed:
//! clock, shooting, player movement, projectiles, enemy spawns, enemies.

use glam::Vec2;

use super::collision::{Rect, direction_to};
use super::difficulty::enemy_speed;
use super::spawn::{emit_projectiles, spawn_enemies};
use super::state::{GameState, Mode, Projectile};
use crate::platform::{Button, InputSource};

/// Input snapshot for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Fire button held
    pub fire: bool,
    /// Start/restart key pressed this frame
    pub confirm: bool,
    /// Aim point (mouse position)
    pub target: Vec2,
}

impl FrameInput {
    /// Sample the input collaborator once
    pub fn poll(input: &impl InputSource) -> Self {
        Self {
            left: input.is_down(Button::Left),
            right: input.is_down(Button::Right),
            up: input.is_down(Button::Up),
            down: input.is_down(Button::Down),
            fire: input.is_down(Button::Fire),
            confirm: input.is_pressed(Button::Confirm),
            target: input.pointer(),
        }
    }
}

/// Run one frame of whichever mode the game is in
pub fn frame(state: &mut GameState, input: &FrameInput, dt: f32) {
    match state.mode {
        Mode::Menu | Mode::GameOver => {
            if input.confirm {
                state.start_run();
            }
        }
        Mode::Running => step(state, input, dt),
    }
}

/// Advance a running game by `dt` seconds
pub fn step(state: &mut GameState, input: &FrameInput, dt: f32) {
    if state.mode != Mode::Running {
        return;
    }

    state.elapsed += dt;
    emit_projectiles(state, input.fire, input.target, dt);
    move_player(state, input, dt);
    update_projectiles(state, dt);
    spawn_enemies(state, dt);
    update_enemies(state, dt);
}

/// Axis-independent movement; opposite keys cancel. No screen clamp.
fn move_player(state: &mut GameState, input: &FrameInput, dt: f32) {
    let step = state.player.speed * dt;
    if input.left {
        state.player.pos.x -= step;
    }
    if input.right {
        state.player.pos.x += step;
    }
    if input.up {
        state.player.pos.y -= step;
    }
    if input.down {
        state.player.pos.y += step;
    }
}

/// Move shots, cull off-screen ones, then resolve hits
///
/// A shot kills at most one enemy per frame. Swap-removal means the slot is
/// re-examined instead of advancing the cursor.
fn update_projectiles(state: &mut GameState, dt: f32) {
    let screen = Rect::screen(state.tuning.screen_width, state.tuning.screen_height);

    for proj in state.projectiles.iter_mut() {
        proj.pos += proj.dir * proj.speed * dt;
    }

    let mut i = 0;
    while i < state.projectiles.len() {
        let Projectile { pos, radius, .. } = state.projectiles[i];
        if !screen.contains(pos) {
            state.projectiles.remove_at(i);
            continue;
        }

        let hit = state
            .enemies
            .iter()
            .position(|enemy| enemy.overlaps(pos, radius));

        if let Some(enemy_idx) = hit {
            state.enemies.remove_at(enemy_idx);
            state.projectiles[i].pierce -= 1;
            state.register_kill();

            if state.projectiles[i].pierce < 0 {
                state.projectiles.remove_at(i);
                continue;
            }
        }

        i += 1;
    }
}

/// Home enemies onto the player and resolve contacts
fn update_enemies(state: &mut GameState, dt: f32) {
    let speed = enemy_speed(state.elapsed, &state.tuning);

    let mut i = 0;
    while i < state.enemies.len() {
        let enemy = &mut state.enemies[i];
        if let Some(dir) = direction_to(enemy.pos, state.player.pos) {
            enemy.pos += dir * speed * dt;
        }

        if enemy.overlaps(state.player.pos, state.player.radius) {
            state.enemies.remove_at(i);
            if state.damage_player() {
                // Frozen for the game-over screen
                return;
            }
            continue;
        }

        i += 1;
    }
}
