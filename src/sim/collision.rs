//! Character/bell contact resolution
//!
//! Contact is only considered while the character is descending; ascending
//! overlap is ignored so the character never bounces off the underside of a
//! bell it is passing through.

use glam::Vec2;

use super::effects;
use super::state::{Bell, BellKind, GameEvent, GameState};
use crate::consts::*;

/// Circular-distance test between the character's foot point and a bell
pub fn foot_hits_bell(foot: Vec2, bell: &Bell) -> bool {
    foot.distance(bell.pos) < bell.hit_radius
}

/// Upward impulse for a bell kind at the given difficulty
pub fn bounce_impulse(kind: BellKind, difficulty: f32) -> f32 {
    let base = match kind {
        BellKind::Normal => JUMP_FORCE,
        BellKind::Boost => BOOST_FORCE,
    };
    base * (1.0 + difficulty * IMPULSE_DIFFICULTY_SCALE)
}

/// Resolve bell contacts for this tick.
///
/// Every overlapping active bell is consumed and each hit overwrites vy, so
/// when hit radii overlap the last bell in storage order wins. That
/// order-dependence is inherited game behavior, kept rather than replaced
/// with a fairness rule.
pub fn resolve(state: &mut GameState) {
    if state.character.vel.y <= 0.0 {
        return;
    }

    let foot = state.character.foot();
    for i in 0..state.bells.len() {
        let bell = state.bells[i];
        if !bell.active || !foot_hits_bell(foot, &bell) {
            continue;
        }

        state.bells[i].active = false;
        state.character.vel.y = bounce_impulse(bell.kind, state.difficulty);

        state.events.push(GameEvent::Jump(bell.kind));
        effects::spawn_burst(&mut state.particles, bell.pos, bell.kind);
        effects::spawn_popup(&mut state.popups, bell.pos, state.score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::GameMode;

    fn playing_state() -> GameState {
        let mut state = GameState::new(1, 400.0, 800.0);
        state.mode = GameMode::Playing;
        state.bells.clear();
        state
    }

    fn bell_at(pos: Vec2, kind: BellKind) -> Bell {
        Bell {
            pos,
            kind,
            size: 30.0,
            hit_radius: 30.0 * HIT_RADIUS_FACTOR,
            active: true,
            sway_phase: 0.0,
            sway_speed: 0.02,
        }
    }

    #[test]
    fn test_descending_contact_bounces() {
        let mut state = playing_state();
        state.character.pos = Vec2::new(200.0, 300.0);
        state.character.vel.y = 5.0;
        // Bell centered right on the foot point
        state.bells.push(bell_at(state.character.foot(), BellKind::Normal));

        resolve(&mut state);

        assert!(!state.bells[0].active);
        assert!(state.character.vel.y < 0.0);
        assert_eq!(state.character.vel.y, JUMP_FORCE);
        assert_eq!(state.particles.len(), BURST_PARTICLE_COUNT);
        assert_eq!(state.popups.len(), 1);
        assert_eq!(state.events, vec![GameEvent::Jump(BellKind::Normal)]);
    }

    #[test]
    fn test_ascending_contact_ignored() {
        let mut state = playing_state();
        state.character.pos = Vec2::new(200.0, 300.0);
        state.character.vel.y = -5.0;
        state.bells.push(bell_at(state.character.foot(), BellKind::Normal));

        resolve(&mut state);

        assert!(state.bells[0].active);
        assert_eq!(state.character.vel.y, -5.0);
        assert!(state.particles.is_empty());
    }

    #[test]
    fn test_consumed_bell_never_reactivates() {
        let mut state = playing_state();
        state.character.pos = Vec2::new(200.0, 300.0);
        state.character.vel.y = 5.0;
        state.bells.push(bell_at(state.character.foot(), BellKind::Normal));

        resolve(&mut state);
        assert!(!state.bells[0].active);

        // Descending through the same spot again: no second bounce
        state.character.vel.y = 5.0;
        state.particles.clear();
        resolve(&mut state);
        assert_eq!(state.character.vel.y, 5.0);
        assert!(state.particles.is_empty());
    }

    #[test]
    fn test_boost_outbounces_normal() {
        assert!(bounce_impulse(BellKind::Boost, 0.0) < bounce_impulse(BellKind::Normal, 0.0));
        // Difficulty scales both proportionally
        let scaled = bounce_impulse(BellKind::Normal, 1.0);
        assert_eq!(scaled, JUMP_FORCE * (1.0 + IMPULSE_DIFFICULTY_SCALE));
    }

    #[test]
    fn test_overlapping_bells_last_wins() {
        let mut state = playing_state();
        state.character.pos = Vec2::new(200.0, 300.0);
        state.character.vel.y = 5.0;
        let foot = state.character.foot();
        state.bells.push(bell_at(foot, BellKind::Boost));
        state.bells.push(bell_at(foot, BellKind::Normal));

        resolve(&mut state);

        // Both consumed, the later Normal bell decided the impulse
        assert!(!state.bells[0].active);
        assert!(!state.bells[1].active);
        assert_eq!(state.character.vel.y, JUMP_FORCE);
        assert_eq!(state.popups.len(), 2);
    }

    #[test]
    fn test_popup_captures_score_at_contact() {
        let mut state = playing_state();
        state.score = 4321;
        state.character.pos = Vec2::new(200.0, 300.0);
        state.character.vel.y = 5.0;
        state.bells.push(bell_at(state.character.foot(), BellKind::Normal));

        resolve(&mut state);
        assert_eq!(state.popups[0].value, 4321);
    }
}
