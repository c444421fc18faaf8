//! Bullet Hell entry point
//!
//! There is no graphical frontend yet: the binary plays a headless demo
//! session with the autopilot and logs how it went.

use bullet_hell::Tuning;
use bullet_hell::autopilot;
use bullet_hell::consts::{TARGET_FPS, WINDOW_TITLE};
use bullet_hell::platform::{FixedClock, FrameClock, HeadlessWindow, RecordingSink, Window};
use bullet_hell::render::draw_frame;
use bullet_hell::sim::{GameState, Mode, frame};

const TUNING_PATH: &str = "tuning.json";
/// Two minutes of play
const DEMO_FRAMES: u64 = 120 * TARGET_FPS as u64;

fn main() {
    let env = env_logger::Env::default().default_filter_or("info");
    env_logger::Builder::from_env(env).init();
    log::info!("{} (headless demo) starting...", WINDOW_TITLE);

    let tuning = Tuning::load_or_default(TUNING_PATH);
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    let mut window = HeadlessWindow::open(
        tuning.screen_width as u32,
        tuning.screen_height as u32,
        WINDOW_TITLE,
        DEMO_FRAMES,
    );
    let mut clock = FixedClock::from_fps(TARGET_FPS);
    let mut sink = RecordingSink::new();
    let mut state = GameState::new(tuning, seed);
    log::info!("Game initialized with seed: {}", state.seed);

    let mut runs = 0u32;
    let mut best_kills = 0u32;
    let mut last_mode = state.mode;

    while !window.should_close() {
        let dt = clock.frame_duration();
        let input = autopilot::drive(&state);
        frame(&mut state, &input, dt);
        draw_frame(&state, &mut sink);

        if state.mode != last_mode {
            match state.mode {
                Mode::Running => runs += 1,
                Mode::GameOver => {
                    best_kills = best_kills.max(state.kills);
                    let (kills, elapsed) = (state.kills, state.elapsed);
                    log::info!("Run {runs} ended: {kills} kills in {elapsed:.1}s");
                }
                Mode::Menu => {}
            }
            last_mode = state.mode;
        }
    }
    window.close();

    if state.mode == Mode::Running {
        best_kills = best_kills.max(state.kills);
        let (kills, enemies) = (state.kills, state.enemies.len());
        log::info!("Run {runs} still going: {kills} kills, {enemies} enemies");
    }
    log::info!("Demo done: {runs} run(s), best {best_kills} kills");
    log::debug!("{} frames drawn", sink.frames);
}
