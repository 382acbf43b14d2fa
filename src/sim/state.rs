//! Game state and core simulation types
//!
//! Everything the renderer needs to draw a frame is public here; the
//! renderer reads the state, it never writes it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::effects::{Particle, ScorePopup};
use super::spawn;
use crate::consts::*;

/// Current mode of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Title screen, waiting for the first tap
    Menu,
    /// Active run
    Playing,
    /// Run ended, waiting out the restart cooldown
    GameOver,
}

/// Bell category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BellKind {
    Normal,
    /// Grants a stronger upward impulse
    Boost,
}

/// The player character
#[derive(Debug, Clone, Copy)]
pub struct Character {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Bounding size (square)
    pub size: f32,
    /// Visual lean toward the horizontal target; no physical effect
    pub rotation: f32,
}

impl Character {
    /// Spawn position for a fresh run
    pub fn at_start(width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(width / 2.0, height - CHARACTER_START_OFFSET),
            vel: Vec2::ZERO,
            size: CHARACTER_SIZE,
            rotation: 0.0,
        }
    }

    /// Collision foot point: a fixed offset below the center
    pub fn foot(&self) -> Vec2 {
        Vec2::new(self.pos.x, self.pos.y + FOOT_OFFSET)
    }
}

/// A bell platform. Single use: `active` goes false on contact and never back.
#[derive(Debug, Clone, Copy)]
pub struct Bell {
    pub pos: Vec2,
    pub kind: BellKind,
    /// Drawn size; one of the nine score tiers
    pub size: f32,
    /// Contact radius, always proportional to size
    pub hit_radius: f32,
    pub active: bool,
    /// Sway animation phase (render only)
    pub sway_phase: f32,
    /// Sway animation speed (render only)
    pub sway_speed: f32,
}

/// Ground decoration translated along with the world
#[derive(Debug, Clone, Copy)]
pub struct Decoration {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

/// Fire-and-forget collaborator triggers emitted by the sim and drained by
/// the session once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A jump started (run start or bell contact)
    Jump(BellKind),
    /// The character fell out of the run
    Fall,
    BgmStart,
    BgmStop,
    /// Run ended; `new_best` asks the session to persist `score`
    GameOver { score: u64, new_best: bool },
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Screen dimensions in logical pixels (constructed per session, no globals)
    pub width: f32,
    pub height: f32,
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,

    pub mode: GameMode,
    pub character: Character,
    /// Most recent pointer x; the integrator eases toward it
    pub target_x: Option<f32>,

    /// Cumulative upward camera scroll, never decreases
    pub camera_y: f32,
    /// Ground line y in camera space
    pub ground_y: f32,
    /// True once the run's first jump happened; death checks arm here
    pub has_started: bool,
    /// Derived from camera_y each tick, clamped to [0, DIFFICULTY_MAX]
    pub difficulty: f32,
    /// Current vertical gap between spawned bells
    pub bell_spacing: f32,

    pub score: u64,
    pub high_score: u64,

    pub bells: Vec<Bell>,
    pub particles: Vec<Particle>,
    pub popups: Vec<ScorePopup>,
    pub trees: Vec<Decoration>,

    /// Restart gate after game over
    pub can_restart: bool,
    pub(crate) ticks_since_game_over: u32,
    /// Simulation tick counter
    pub time_ticks: u64,

    /// Pending collaborator triggers
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a session-scoped state showing the menu over a seeded world
    pub fn new(seed: u64, width: f32, height: f32) -> Self {
        let mut state = Self {
            width,
            height,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            mode: GameMode::Menu,
            character: Character::at_start(width, height),
            target_x: None,
            camera_y: 0.0,
            ground_y: height - GROUND_OFFSET,
            has_started: false,
            difficulty: 0.0,
            bell_spacing: BASE_BELL_SPACING,
            score: 0,
            high_score: 0,
            bells: Vec::new(),
            particles: Vec::new(),
            popups: Vec::new(),
            trees: Vec::new(),
            can_restart: true,
            ticks_since_game_over: 0,
            time_ticks: 0,
            events: Vec::new(),
        };
        spawn::initial_populate(&mut state);
        state
    }

    /// Reset all run-scoped data. Does not touch `mode`; the state machine in
    /// `tick` decides when to transition.
    pub fn reset_run(&mut self, high_score: u64) {
        self.score = 0;
        self.high_score = high_score;

        self.character = Character::at_start(self.width, self.height);
        self.target_x = None;

        self.camera_y = 0.0;
        self.ground_y = self.height - GROUND_OFFSET;
        self.has_started = false;
        self.difficulty = 0.0;
        self.bell_spacing = BASE_BELL_SPACING;

        self.bells.clear();
        self.particles.clear();
        self.popups.clear();
        self.trees.clear();

        spawn::initial_populate(self);
    }

    /// Transition Playing -> GameOver. Idempotent: a second call while
    /// already in GameOver does nothing, so the high score is persisted once
    /// and the cooldown timer is not re-armed.
    pub fn trigger_game_over(&mut self) {
        if self.mode == GameMode::GameOver {
            return;
        }
        self.mode = GameMode::GameOver;
        self.can_restart = false;
        self.ticks_since_game_over = 0;

        let new_best = self.score > self.high_score;
        if new_best {
            self.high_score = self.score;
        }
        log::info!(
            "game over at score {} (best {}{})",
            self.score,
            self.high_score,
            if new_best { ", new best" } else { "" }
        );

        self.events.push(GameEvent::Fall);
        self.events.push(GameEvent::BgmStop);
        self.events.push(GameEvent::GameOver {
            score: self.score,
            new_best,
        });
    }

    /// Camera-follow threshold in screen space
    pub fn camera_threshold(&self) -> f32 {
        self.height * CAMERA_THRESHOLD_FRAC
    }

    /// Difficulty as a pure function of cumulative camera offset
    pub fn difficulty_for_camera(&self, camera_y: f32) -> f32 {
        (camera_y / (self.height * DIFFICULTY_HEIGHT_SCREENS)).min(DIFFICULTY_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_menu_with_seeded_world() {
        let state = GameState::new(42, 400.0, 800.0);
        assert_eq!(state.mode, GameMode::Menu);
        assert_eq!(state.bells.len(), INITIAL_BELLS);
        assert_eq!(state.trees.len(), INITIAL_TREES);
        assert_eq!(state.score, 0);
        assert!(state.can_restart);
    }

    #[test]
    fn test_reset_run_restores_start_position() {
        let mut state = GameState::new(7, 400.0, 800.0);
        state.character.pos = Vec2::new(10.0, 10.0);
        state.camera_y = 1234.0;
        state.score = 999;

        state.reset_run(500);
        assert_eq!(state.character.pos.x, 200.0);
        assert_eq!(state.character.pos.y, 800.0 - CHARACTER_START_OFFSET);
        assert_eq!(state.camera_y, 0.0);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 500);
        assert_eq!(state.bells.len(), INITIAL_BELLS);
    }

    #[test]
    fn test_trigger_game_over_idempotent() {
        let mut state = GameState::new(7, 400.0, 800.0);
        state.mode = GameMode::Playing;
        state.score = 100;

        state.trigger_game_over();
        assert_eq!(state.mode, GameMode::GameOver);
        assert!(!state.can_restart);
        let events_after_first = state.events.len();
        assert_eq!(
            state
                .events
                .iter()
                .filter(|e| matches!(e, GameEvent::GameOver { .. }))
                .count(),
            1
        );

        // Advance the cooldown a little, then trigger again
        state.ticks_since_game_over = 10;
        state.trigger_game_over();
        assert_eq!(state.events.len(), events_after_first);
        assert_eq!(state.ticks_since_game_over, 10);
    }

    #[test]
    fn test_game_over_updates_high_score_only_on_beat() {
        let mut state = GameState::new(7, 400.0, 800.0);
        state.mode = GameMode::Playing;
        state.high_score = 200;
        state.score = 100;
        state.trigger_game_over();
        assert_eq!(state.high_score, 200);
        assert!(matches!(
            state.events.last(),
            Some(GameEvent::GameOver {
                new_best: false,
                ..
            })
        ));

        state.mode = GameMode::Playing;
        state.score = 300;
        state.trigger_game_over();
        assert_eq!(state.high_score, 300);
        assert!(matches!(
            state.events.last(),
            Some(GameEvent::GameOver { new_best: true, .. })
        ));
    }
}
