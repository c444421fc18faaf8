//! Idle/demo mode - AI plays the game
//!
//! Produces a `FrameInput` from the current state: start runs automatically,
//! shoot at the nearest enemy, back away from anything inside the threat
//! radius and otherwise drift back toward the middle of the screen.

use glam::Vec2;

use crate::sim::{Enemy, FrameInput, GameState, Mode};

/// Enemies closer than this (beyond both radii) make the pilot retreat
const THREAT_RADIUS: f32 = 90.0;
/// Dead zone around the screen centre when drifting home
const HOME_SLACK: f32 = 20.0;

pub fn drive(state: &GameState) -> FrameInput {
    if state.mode != Mode::Running {
        return FrameInput {
            confirm: true,
            ..Default::default()
        };
    }

    let player = state.player.pos;
    let home = Vec2::new(state.tuning.screen_width, state.tuning.screen_height) / 2.0;

    let Some(enemy) = nearest_enemy(state) else {
        return steer(FrameInput::default(), home - player, HOME_SLACK);
    };

    let input = FrameInput {
        fire: true,
        target: enemy.pos,
        ..Default::default()
    };

    let gap = enemy.pos.distance(player) - enemy.radius - state.player.radius;
    if gap < THREAT_RADIUS {
        steer(input, player - enemy.pos, 0.0)
    } else {
        steer(input, home - player, HOME_SLACK)
    }
}

fn nearest_enemy(state: &GameState) -> Option<&Enemy> {
    let player = state.player.pos;
    let mut nearest: Option<(&Enemy, f32)> = None;
    for enemy in state.enemies.iter() {
        let dist = enemy.pos.distance_squared(player);
        match nearest {
            Some((_, best)) if best <= dist => {}
            _ => nearest = Some((enemy, dist)),
        }
    }
    nearest.map(|(enemy, _)| enemy)
}

/// Press the direction keys that move along `want`, ignoring components below `slack`
fn steer(mut input: FrameInput, want: Vec2, slack: f32) -> FrameInput {
    input.left = want.x < -slack;
    input.right = want.x > slack;
    input.up = want.y < -slack;
    input.down = want.y > slack;
    input
}
