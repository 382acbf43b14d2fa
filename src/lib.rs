//! Snowhop - an endless bell-hopping jumper
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, camera, world generation, collisions)
//! - `session`: Host-facing session object wiring the sim to its collaborators
//! - `platform`: Capability interfaces (storage, input) and host adapters
//! - `audio`: Fire-and-forget sound triggers
//! - `settings`: Player preferences

pub mod audio;
pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::Session;
pub use settings::Settings;

/// Game tuning constants
pub mod consts {
    /// Nominal tick rate the host scheduler drives us at
    pub const TICK_HZ: f32 = 60.0;

    /// Base downward acceleration per tick (screen-down positive)
    pub const GRAVITY: f32 = 0.15;
    /// Gravity multiplier contribution per unit of difficulty
    pub const GRAVITY_DIFFICULTY_SCALE: f32 = 0.4;
    /// |vy| below which the character floats at the apex of a jump
    pub const APEX_SPEED: f32 = 1.5;
    /// Gravity multiplier applied inside the apex window
    pub const APEX_GRAVITY_MULT: f32 = 0.65;

    /// Upward impulse from a NORMAL bell (negative = up)
    pub const JUMP_FORCE: f32 = -8.5;
    /// Upward impulse from a BOOST bell
    pub const BOOST_FORCE: f32 = -12.5;
    /// Impulse multiplier contribution per unit of difficulty
    pub const IMPULSE_DIFFICULTY_SCALE: f32 = 0.25;

    /// Fraction of the horizontal gap to the target closed per tick
    pub const MOVE_SPEED: f32 = 0.18;
    /// Visual rotation per pixel of remaining horizontal gap
    pub const ROTATION_FACTOR: f32 = 0.003;

    /// Character bounding size (square)
    pub const CHARACTER_SIZE: f32 = 40.0;
    /// Character spawn height above the bottom of the screen
    pub const CHARACTER_START_OFFSET: f32 = 150.0;
    /// Vertical offset from character center to the collision foot point
    pub const FOOT_OFFSET: f32 = 15.0;

    /// Ground line height above the bottom of the screen
    pub const GROUND_OFFSET: f32 = 100.0;
    /// Margin below the visible area before a fall is fatal (and bells are culled)
    pub const KILL_MARGIN: f32 = 50.0;

    /// Camera-follow threshold as a fraction of screen height
    pub const CAMERA_THRESHOLD_FRAC: f32 = 0.45;
    /// Score gained per pixel of camera climb
    pub const SCORE_FACTOR: f32 = 0.5;
    /// Difficulty reaches 1.0 after climbing this many screen heights
    pub const DIFFICULTY_HEIGHT_SCREENS: f32 = 4.0;
    /// Difficulty cap
    pub const DIFFICULTY_MAX: f32 = 1.5;

    /// Vertical spacing between bells at difficulty 0
    pub const BASE_BELL_SPACING: f32 = 70.0;
    /// Extra spacing per unit of difficulty
    pub const SPACING_DIFFICULTY_GAIN: f32 = 40.0;
    /// Bells seeded at world reset
    pub const INITIAL_BELLS: usize = 10;
    /// First seeded bell sits this far above the bottom of the screen
    pub const INITIAL_BELL_OFFSET: f32 = 250.0;
    /// Horizontal margin bells keep from the screen edges
    pub const BELL_X_MARGIN: f32 = 40.0;
    /// A new bell is spawned while the topmost one is below this y
    pub const SPAWN_AHEAD_Y: f32 = -50.0;
    /// Probability that a spawned bell is a BOOST bell
    pub const BOOST_PROBABILITY: f64 = 0.1;
    /// Hit radius as a fraction of bell size (proportional across all tiers)
    pub const HIT_RADIUS_FACTOR: f32 = 0.75;

    /// Decoration trees seeded on the ground line
    pub const INITIAL_TREES: usize = 6;

    /// Ticks after game over before a restart is accepted (500 ms at 60 Hz)
    pub const RESTART_DELAY_TICKS: u32 = 30;

    /// Particles per bell burst
    pub const BURST_PARTICLE_COUNT: usize = 12;
    /// Initial radial particle speed
    pub const BURST_PARTICLE_SPEED: f32 = 15.0;
    /// Initial upward drift of a score popup
    pub const POPUP_RISE: f32 = -1.2;
}
