//! Host-facing game session
//!
//! One `Session` per running game: it owns the simulation state plus the
//! collaborator capabilities the host selected, buffers asynchronous input
//! into the latest value of each kind, and turns simulation events into
//! audio/persistence side effects once per frame.

use crate::audio::AudioSink;
use crate::platform::{InputEvent, KeyValueStore};
use crate::sim::{self, GameEvent, GameState, TickInput};

/// Fixed store key for the single persisted scalar
pub const HIGHSCORE_KEY: &str = "snowhop_highscore";

pub struct Session {
    state: GameState,
    store: Box<dyn KeyValueStore>,
    audio: Box<dyn AudioSink>,
    /// Latest press since the last frame
    pending_start: Option<f32>,
    /// Latest drag since the last frame
    pending_move: Option<f32>,
}

impl Session {
    pub fn new(
        seed: u64,
        width: f32,
        height: f32,
        store: Box<dyn KeyValueStore>,
        audio: Box<dyn AudioSink>,
    ) -> Self {
        let mut state = GameState::new(seed, width, height);
        state.high_score = store.get(HIGHSCORE_KEY).unwrap_or(0);
        log::info!("session {}x{} (best {})", width, height, state.high_score);

        Self {
            state,
            store,
            audio,
            pending_start: None,
            pending_move: None,
        }
    }

    /// Read-only snapshot for the renderer
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Buffer a host input event. Only the most recent event of each kind
    /// survives until the next frame, so bursty delivery cannot cause more
    /// than one transition per press.
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Start { x } => self.pending_start = Some(x),
            InputEvent::Move { x } => self.pending_move = Some(x),
        }
    }

    /// Run one tick and flush its side effects. Called once per scheduler
    /// callback.
    pub fn frame(&mut self) {
        let input = TickInput {
            start: self.pending_start.take(),
            move_to: self.pending_move.take(),
        };
        sim::tick(&mut self.state, &input);

        for event in self.state.events.drain(..) {
            match event {
                GameEvent::Jump(kind) => self.audio.play_jump(kind),
                GameEvent::Fall => self.audio.play_fall(),
                GameEvent::BgmStart => self.audio.play_bgm(),
                GameEvent::BgmStop => self.audio.stop_bgm(),
                GameEvent::GameOver { score, new_best } => {
                    if new_best {
                        self.store.set(HIGHSCORE_KEY, score);
                    }
                }
            }
        }
    }
}
