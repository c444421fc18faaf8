use bullet_hell::Tuning;
use bullet_hell::autopilot;
use bullet_hell::platform::{
    Button, Color, FixedClock, FrameClock, HeadlessWindow, RecordingSink, ScriptedInput, Window,
};
use bullet_hell::render::draw_frame;
use bullet_hell::sim::{FrameInput, GameState, Mode, frame};
use glam::Vec2;

#[test]
fn scripted_input_starts_and_shoots() {
    let mut state = GameState::new(Tuning::default(), 3);
    let mut input = ScriptedInput::new();
    let mut clock = FixedClock::from_fps(60);
    let mut sink = RecordingSink::new();

    input.press(Button::Confirm);
    let dt = clock.frame_duration();
    frame(&mut state, &FrameInput::poll(&input), dt);
    input.end_frame();
    assert_eq!(state.mode, Mode::Running);

    input.hold(Button::Fire);
    input.point_at(Vec2::new(400.0, 0.0));
    // Cooldown needs 0.3s to fill before the first shot
    for _ in 0..20 {
        let dt = clock.frame_duration();
        frame(&mut state, &FrameInput::poll(&input), dt);
        input.end_frame();
    }
    draw_frame(&state, &mut sink);

    assert_eq!(state.projectiles.len(), 1);
    let up = Vec2::new(0.0, -1.0);
    assert!(state.projectiles[0].dir.abs_diff_eq(up, 1e-6));
    assert_eq!(sink.circles(Color::Projectile).len(), 1);
}

#[test]
fn poll_reads_every_button() {
    let mut input = ScriptedInput::new();
    input.hold(Button::Left);
    input.hold(Button::Down);
    input.point_at(Vec2::new(3.0, 4.0));

    let polled = FrameInput::poll(&input);
    assert_eq!(
        polled,
        FrameInput {
            left: true,
            down: true,
            target: Vec2::new(3.0, 4.0),
            ..Default::default()
        }
    );
}

#[test]
fn autopilot_session_runs_to_close() {
    let mut window = HeadlessWindow::open(800, 450, "test", 60 * 60);
    let mut clock = FixedClock::from_fps(60);
    let mut sink = RecordingSink::new();
    let mut state = GameState::new(Tuning::default(), 2024);

    let mut frames = 0;
    while !window.should_close() {
        let input = autopilot::drive(&state);
        frame(&mut state, &input, clock.frame_duration());
        draw_frame(&state, &mut sink);
        frames += 1;
    }

    assert_eq!(frames, 60 * 60);
    assert_eq!(sink.frames, 60 * 60);
    assert_ne!(state.mode, Mode::Menu);
}
