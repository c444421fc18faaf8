//! Game state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::circles_overlap;
use super::difficulty::Scaling;
use super::pool::Pool;
use crate::consts::{MAX_ENEMIES, MAX_PROJECTILES};
use crate::tuning::Tuning;

/// Which screen the game is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Title screen, waiting for the start key
    #[default]
    Menu,
    /// Active gameplay
    Running,
    /// Player ran out of radius; kill count kept for display
    GameOver,
}

/// A player shot
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Projectile {
    pub pos: Vec2,
    /// Unit length
    pub dir: Vec2,
    pub radius: f32,
    pub speed: f32,
    /// Enemies it can still pass through; removed once below zero
    pub pierce: i32,
}

/// A homing enemy. Speed is shared and derived from elapsed time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Enemy {
    pub pos: Vec2,
    pub radius: f32,
}

impl Enemy {
    /// Strict overlap with a circle at `pos`
    pub fn overlaps(&self, pos: Vec2, radius: f32) -> bool {
        circles_overlap(self.pos, self.radius, pos, radius)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    /// Doubles as health: contact with an enemy shrinks it
    pub radius: f32,
    pub speed: f32,
}

impl Player {
    /// Fresh player in the middle of the screen
    pub fn spawn(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.screen_width / 2.0, tuning.screen_height / 2.0),
            radius: tuning.player_radius,
            speed: tuning.player_speed,
        }
    }
}

pub type ProjectilePool = Pool<Projectile, MAX_PROJECTILES>;
pub type EnemyPool = Pool<Enemy, MAX_ENEMIES>;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub tuning: Tuning,
    pub mode: Mode,
    /// Seconds spent in the current run
    pub elapsed: f32,
    pub kills: u32,
    pub player: Player,
    pub scaling: Scaling,
    /// Time banked toward the next shot
    pub shoot_timer: f32,
    /// Time banked toward the next enemy spawn
    pub spawn_timer: f32,
    pub projectiles: ProjectilePool,
    pub enemies: EnemyPool,
    /// Spawn-angle source. Not reset between runs.
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a game sitting on the title screen
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self {
            seed,
            mode: Mode::Menu,
            elapsed: 0.0,
            kills: 0,
            player: Player::spawn(&tuning),
            scaling: Scaling::base(&tuning),
            shoot_timer: 0.0,
            spawn_timer: 0.0,
            projectiles: Pool::new(),
            enemies: Pool::new(),
            rng: Pcg32::seed_from_u64(seed),
            tuning,
        }
    }

    /// Reset everything but the tuning and RNG stream, then enter `Running`
    pub fn start_run(&mut self) {
        self.mode = Mode::Running;
        self.elapsed = 0.0;
        self.kills = 0;
        self.player = Player::spawn(&self.tuning);
        self.scaling = Scaling::base(&self.tuning);
        self.shoot_timer = 0.0;
        self.spawn_timer = 0.0;
        self.projectiles.clear();
        self.enemies.clear();
        log::info!("Run started");
    }

    /// Credit one projectile kill and apply any milestone it lands on
    pub fn register_kill(&mut self) {
        self.kills += 1;
        let growth_before = self.scaling.player_growth;
        let fired = self.scaling.on_kill(self.kills, &self.tuning);
        if fired > 0 {
            self.player.radius += self.scaling.player_growth - growth_before;
            let (kills, scaling) = (self.kills, self.scaling);
            log::debug!("Kill {kills}: {fired} milestone(s) -> {scaling:?}");
        }
    }

    /// Shrink the player after an enemy contact. Returns true once the player is gone.
    pub fn damage_player(&mut self) -> bool {
        self.player.radius -= self.tuning.player_hit_penalty;
        if self.player.radius <= 0.0 {
            self.mode = Mode::GameOver;
            let (elapsed, kills) = (self.elapsed, self.kills);
            log::info!("Game over after {elapsed:.1}s with {kills} kills");
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_on_menu() {
        let state = GameState::new(Tuning::default(), 1);
        assert_eq!(state.seed, 1);
        assert_eq!(state.mode, Mode::Menu);
        assert_eq!(state.player.pos, Vec2::new(400.0, 225.0));
        assert_eq!(state.player.radius, 20.0);
        assert!(state.projectiles.is_empty());
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn test_start_run_resets_everything() {
        let mut state = GameState::new(Tuning::default(), 1);
        state.mode = Mode::GameOver;
        state.kills = 37;
        state.elapsed = 93.0;
        state.player.radius = -4.0;
        state.player.pos = Vec2::new(-50.0, 9.0);
        state.scaling.projectile_speed = 500.0;
        state.shoot_timer = 0.2;
        state.spawn_timer = 0.7;
        state.projectiles.add(Projectile::default());
        state.enemies.add(Enemy::default());

        state.start_run();

        assert_eq!(state.mode, Mode::Running);
        assert_eq!(state.kills, 0);
        assert_eq!(state.elapsed, 0.0);
        assert_eq!(state.player, Player::spawn(&state.tuning));
        assert_eq!(state.scaling, Scaling::base(&state.tuning));
        assert_eq!(state.shoot_timer, 0.0);
        assert_eq!(state.spawn_timer, 0.0);
        assert!(state.projectiles.is_empty());
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn test_register_kill_grows_player_at_milestone() {
        let mut state = GameState::new(Tuning::default(), 1);
        state.start_run();
        state.kills = 11;
        state.register_kill();
        assert_eq!(state.kills, 12);
        assert_eq!(state.player.radius, 22.0);
    }

    #[test]
    fn test_damage_player() {
        let mut state = GameState::new(Tuning::default(), 1);
        state.start_run();
        assert!(!state.damage_player());
        assert_eq!(state.player.radius, 10.0);
        assert_eq!(state.mode, Mode::Running);
        assert!(state.damage_player());
        assert_eq!(state.mode, Mode::GameOver);
    }
}
