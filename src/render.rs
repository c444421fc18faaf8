//! Render pass
//!
//! Walks a finished frame's state and emits draw calls. Never mutates the
//! simulation, so the core can run without any renderer attached.

use glam::Vec2;

use crate::platform::{Color, RenderSink};
use crate::sim::{GameState, Mode};

const TITLE_SIZE: f32 = 80.0;
const BODY_SIZE: f32 = 20.0;

/// Draw one complete frame for the current mode
pub fn draw_frame(state: &GameState, sink: &mut impl RenderSink) {
    sink.begin_frame();
    sink.clear(Color::Background);

    match state.mode {
        Mode::Menu => draw_menu(state, sink),
        Mode::Running => draw_scene(state, sink),
        Mode::GameOver => draw_game_over(state, sink),
    }

    sink.end_frame();
}

fn draw_menu(state: &GameState, sink: &mut impl RenderSink) {
    let center_x = state.tuning.screen_width / 2.0;
    draw_text_centered(sink, "Bullet Hell", Vec2::new(center_x, 40.0), TITLE_SIZE);
    let prompt = Vec2::new(center_x, 200.0);
    draw_text_centered(sink, "Press 'Enter' to start!", prompt, BODY_SIZE);
}

fn draw_scene(state: &GameState, sink: &mut impl RenderSink) {
    draw_text_centered(sink, &kill_counter(state), Vec2::new(40.0, 30.0), BODY_SIZE);

    sink.draw_circle(state.player.pos, state.player.radius, Color::Player);
    for proj in state.projectiles.iter() {
        sink.draw_circle(proj.pos, proj.radius, Color::Projectile);
    }
    for enemy in state.enemies.iter() {
        sink.draw_circle(enemy.pos, enemy.radius, Color::Enemy);
    }
}

fn draw_game_over(state: &GameState, sink: &mut impl RenderSink) {
    let center_x = state.tuning.screen_width / 2.0;
    draw_text_centered(sink, "DEFEAT", Vec2::new(center_x, 40.0), TITLE_SIZE);
    let counter = kill_counter(state);
    draw_text_centered(sink, &counter, Vec2::new(40.0, 100.0), BODY_SIZE);
    let prompt = Vec2::new(center_x, 200.0);
    draw_text_centered(sink, "Press 'Enter' to restart!", prompt, BODY_SIZE);
}

fn kill_counter(state: &GameState) -> String {
    format!("Kills: {}", state.kills)
}

/// Draw `text` horizontally centered on `pos.x`, top edge at `pos.y`
fn draw_text_centered(sink: &mut impl RenderSink, text: &str, pos: Vec2, size: f32) {
    let width = sink.measure_text(text, size).x;
    let left = pos.x - width / 2.0;
    sink.draw_text(text, Vec2::new(left, pos.y), size, Color::Text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{DrawCall, RecordingSink};
    use crate::sim::{Enemy, Projectile};
    use crate::tuning::Tuning;

    fn enemy_at(x: f32, y: f32) -> Enemy {
        Enemy {
            pos: Vec2::new(x, y),
            radius: 6.0,
        }
    }

    #[test]
    fn test_menu_screen() {
        let state = GameState::new(Tuning::default(), 1);
        let mut sink = RecordingSink::new();
        draw_frame(&state, &mut sink);

        assert_eq!(sink.texts(), vec!["Bullet Hell", "Press 'Enter' to start!"]);
        assert_eq!(sink.calls[0], DrawCall::Clear(Color::Background));
    }

    #[test]
    fn test_title_is_centered() {
        let state = GameState::new(Tuning::default(), 1);
        let mut sink = RecordingSink::new();
        draw_frame(&state, &mut sink);

        // 11 glyphs * 80 * 0.5 = 440 wide, centered on 400
        let title = DrawCall::Text(
            "Bullet Hell".to_string(),
            Vec2::new(180.0, 40.0),
            TITLE_SIZE,
            Color::Text,
        );
        assert!(sink.calls.contains(&title));
    }

    #[test]
    fn test_running_scene_draws_every_entity() {
        let mut state = GameState::new(Tuning::default(), 1);
        state.start_run();
        state.kills = 3;
        state.projectiles.add(Projectile {
            pos: Vec2::new(10.0, 10.0),
            dir: Vec2::X,
            radius: 4.0,
            speed: 100.0,
            pierce: 0,
        });
        state.enemies.add(enemy_at(50.0, 50.0));
        state.enemies.add(enemy_at(60.0, 50.0));

        let mut sink = RecordingSink::new();
        draw_frame(&state, &mut sink);

        assert_eq!(sink.circles(Color::Player).len(), 1);
        assert_eq!(sink.circles(Color::Projectile).len(), 1);
        assert_eq!(sink.circles(Color::Enemy).len(), 2);
        assert!(sink.texts().contains(&"Kills: 3"));
    }

    #[test]
    fn test_game_over_screen_shows_kills() {
        let mut state = GameState::new(Tuning::default(), 1);
        state.mode = Mode::GameOver;
        state.kills = 42;

        let mut sink = RecordingSink::new();
        draw_frame(&state, &mut sink);

        let expected = ["DEFEAT", "Kills: 42", "Press 'Enter' to restart!"];
        assert_eq!(sink.texts(), expected);
        assert!(sink.circles(Color::Player).is_empty());
    }

    #[test]
    fn test_render_does_not_touch_state() {
        let mut state = GameState::new(Tuning::default(), 1);
        state.start_run();
        state.enemies.add(enemy_at(50.0, 50.0));
        let before = state.clone();

        let mut sink = RecordingSink::new();
        draw_frame(&state, &mut sink);

        assert_eq!(state.enemies.as_slice(), before.enemies.as_slice());
        assert_eq!(state.player, before.player);
    }
}
