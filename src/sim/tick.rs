//! Per-frame state machine and physics/camera integrator
//!
//! One call to [`tick`] advances the whole game by one fixed step. Outside
//! Playing only the restart cooldown advances; while Playing the integrator
//! runs, then the collision resolver, in that order.

use super::collision;
use super::effects;
use super::spawn;
use super::state::{BellKind, GameEvent, GameMode, GameState};
use crate::consts::*;

/// Input for a single tick: at most the latest event of each kind since the
/// last frame. The session does the buffering; bursty host input never
/// produces more than one transition per press.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// x of the most recent press since the last tick
    pub start: Option<f32>,
    /// x of the most recent drag since the last tick
    pub move_to: Option<f32>,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    // Restart gate opens a fixed delay after game over
    if state.mode == GameMode::GameOver && !state.can_restart {
        state.ticks_since_game_over += 1;
        if state.ticks_since_game_over >= RESTART_DELAY_TICKS {
            state.can_restart = true;
        }
    }

    apply_input(state, input);

    if state.mode != GameMode::Playing {
        return;
    }
    state.time_ticks += 1;

    // Single source of difficulty truth: cumulative camera offset
    state.difficulty = state.difficulty_for_camera(state.camera_y);

    integrate(state);
    collision::resolve(state);

    // Cull bells that scrolled out below, then age the feedback entities
    let cull_y = state.height + KILL_MARGIN;
    state.bells.retain(|b| b.pos.y < cull_y);
    effects::update_particles(&mut state.particles);
    effects::update_popups(&mut state.popups);
}

/// Route the buffered input through the state machine
fn apply_input(state: &mut GameState, input: &TickInput) {
    match state.mode {
        // Only a press starts a run; drags over the menu are ignored
        GameMode::Menu => {
            if let Some(x) = input.start {
                start_run(state, x);
            }
        }
        GameMode::GameOver => {
            if state.can_restart
                && let Some(x) = input.start
            {
                start_run(state, x);
            }
        }
        GameMode::Playing => {
            // Press and drag both steer; the integrator eases toward the target
            if let Some(x) = input.start {
                state.target_x = Some(x);
            }
            if let Some(x) = input.move_to {
                state.target_x = Some(x);
            }
        }
    }
}

/// Reset run-scoped data and launch the first jump at the pressed x
fn start_run(state: &mut GameState, x: f32) {
    state.reset_run(state.high_score);
    state.mode = GameMode::Playing;

    state.character.vel.y = JUMP_FORCE;
    state.has_started = true;
    // Snap to the finger on the first press so steering starts where the
    // player expects; afterwards only smoothed easing moves the character
    state.character.pos.x = x;
    state.target_x = Some(x);

    state.events.push(GameEvent::BgmStart);
    state.events.push(GameEvent::Jump(BellKind::Normal));
    log::info!("run started (best {})", state.high_score);
}

/// Physics, death checks, and upward-only camera follow
fn integrate(state: &mut GameState) {
    let difficulty = state.difficulty;

    // 1. Horizontal: exponential easing toward the target, cylindrical wrap
    if let Some(target_x) = state.target_x {
        state.character.pos.x += (target_x - state.character.pos.x) * MOVE_SPEED;
    }
    if state.character.pos.x > state.width {
        state.character.pos.x = 0.0;
    }
    if state.character.pos.x < 0.0 {
        state.character.pos.x = state.width;
    }

    // 2. Vertical: difficulty-scaled gravity, softened near the jump apex
    let mut gravity = GRAVITY * (1.0 + difficulty * GRAVITY_DIFFICULTY_SCALE);
    if state.character.vel.y.abs() < APEX_SPEED {
        gravity *= APEX_GRAVITY_MULT;
    }
    state.character.vel.y += gravity;
    state.character.pos.y += state.character.vel.y;

    // 3. Visual lean toward the target
    state.character.rotation = state
        .target_x
        .map(|t| (t - state.character.pos.x) * ROTATION_FACTOR)
        .unwrap_or(0.0);

    // 4. Death checks, armed once the run has jumped
    if state.has_started {
        if state.character.pos.y > state.height + KILL_MARGIN {
            state.trigger_game_over();
        }

        // Redescending to the ground line only matters while it is still
        // on screen, i.e. before the first camera scroll
        let absolute_ground = state.ground_y + state.camera_y;
        if absolute_ground < state.height
            && state.character.pos.y + state.character.size / 2.0 >= absolute_ground
        {
            state.trigger_game_over();
        }
    }

    // 5. Camera follow, strictly upward
    let threshold = state.camera_threshold();
    if state.character.pos.y < threshold {
        let diff = threshold - state.character.pos.y;
        state.character.pos.y = threshold;
        state.camera_y += diff;
        state.score += (diff * SCORE_FACTOR).floor() as u64;

        // Spacing widens with difficulty; the climb gets sparser
        state.bell_spacing = BASE_BELL_SPACING + difficulty * SPACING_DIFFICULTY_GAIN;

        // Translate the whole world down to keep camera-space positions
        for bell in &mut state.bells {
            bell.pos.y += diff;
        }
        for particle in &mut state.particles {
            particle.pos.y += diff;
        }
        for popup in &mut state.popups {
            popup.pos.y += diff;
        }
        for tree in &mut state.trees {
            tree.pos.y += diff;
        }
        state.ground_y += diff;

        spawn::extend_world(state);
    }
}
