//! Procedural world generation
//!
//! Bells are placed ahead of the camera with a vertical spacing derived from
//! difficulty; their size shrinks through nine discrete tiers as the score
//! climbs, and the contact radius stays proportional so collision fairness is
//! consistent across tiers.

use glam::Vec2;
use rand::Rng;

use super::state::{Bell, BellKind, Decoration, GameState};
use crate::consts::*;

/// Score thresholds for the size tiers, ascending
pub const SCORE_TIER_THRESHOLDS: [u64; 9] =
    [0, 3000, 5000, 7000, 9000, 11000, 12000, 14000, 16000];

/// Bell size per tier, largest to smallest
pub const TIER_SIZES: [f32; 9] = [30.0, 28.0, 26.0, 25.0, 24.0, 23.0, 22.0, 21.0, 20.0];

/// Tier index for a cumulative score (step function over the thresholds)
pub fn size_tier(score: u64) -> usize {
    let mut tier = 0;
    for (i, &threshold) in SCORE_TIER_THRESHOLDS.iter().enumerate().skip(1) {
        if score >= threshold {
            tier = i;
        } else {
            break;
        }
    }
    tier
}

/// Bell size for a cumulative score
pub fn tier_size(score: u64) -> f32 {
    TIER_SIZES[size_tier(score)]
}

/// Construct one bell at the given camera-space y.
///
/// Shape is deterministic from score and difficulty; horizontal position,
/// category, and sway are drawn from the run RNG.
pub fn spawn_bell(state: &mut GameState, y: f32) {
    let size = tier_size(state.score);
    let x = state
        .rng
        .random_range(BELL_X_MARGIN..state.width - BELL_X_MARGIN);
    let kind = if state.rng.random_bool(BOOST_PROBABILITY) {
        BellKind::Boost
    } else {
        BellKind::Normal
    };

    let sway_phase = state.rng.random_range(0.0..std::f32::consts::PI);
    let sway_base = 0.02 + state.rng.random::<f32>() * 0.03;
    let sway_speed = sway_base * (1.0 + state.difficulty * 0.5);

    state.bells.push(Bell {
        pos: Vec2::new(x, y),
        kind,
        size,
        hit_radius: size * HIT_RADIUS_FACTOR,
        active: true,
        sway_phase,
        sway_speed,
    });
}

/// Keep bell density ahead of the camera: while the topmost bell has not yet
/// crossed above the near-top threshold, add exactly one bell above it at the
/// current spacing. Called once per frame after a camera advance.
pub fn extend_world(state: &mut GameState) {
    let Some(topmost_y) = state.bells.last().map(|b| b.pos.y) else {
        return;
    };
    if topmost_y > SPAWN_AHEAD_Y {
        let y = topmost_y - state.bell_spacing;
        spawn_bell(state, y);
    }
}

/// Seed the initial climbable ladder and the ground decorations
pub fn initial_populate(state: &mut GameState) {
    for i in 0..INITIAL_BELLS {
        let y = state.height - INITIAL_BELL_OFFSET - (i as f32 * BASE_BELL_SPACING);
        spawn_bell(state, y);
    }

    for _ in 0..INITIAL_TREES {
        let x = state.rng.random_range(0.0..state.width);
        let width = 50.0 + state.rng.random::<f32>() * 40.0;
        let height = 100.0 + state.rng.random::<f32>() * 80.0;
        state.trees.push(Decoration {
            // Planted slightly into the ground
            pos: Vec2::new(x, state.ground_y + 15.0),
            width,
            height,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(size_tier(0), 0);
        assert_eq!(size_tier(2999), 0);
        assert_eq!(size_tier(3000), 1);
        assert_eq!(size_tier(11999), 5);
        assert_eq!(size_tier(12000), 6);
        assert_eq!(size_tier(15999), 7);
        assert_eq!(size_tier(16000), 8);
        assert_eq!(size_tier(1_000_000), 8);
    }

    #[test]
    fn test_tier_sizes_at_extremes() {
        // Largest tier at a fresh run, smallest from 16000 up
        assert_eq!(tier_size(0), 30.0);
        assert_eq!(tier_size(16000), 20.0);
    }

    #[test]
    fn test_spawned_bell_within_margins() {
        let mut state = GameState::new(3, 400.0, 800.0);
        for _ in 0..50 {
            spawn_bell(&mut state, -100.0);
        }
        for bell in &state.bells {
            assert!(bell.pos.x >= BELL_X_MARGIN);
            assert!(bell.pos.x <= state.width - BELL_X_MARGIN);
            assert!(bell.active);
        }
    }

    #[test]
    fn test_hit_radius_proportional_to_size() {
        let mut state = GameState::new(3, 400.0, 800.0);
        state.score = 16000;
        spawn_bell(&mut state, 0.0);
        let bell = state.bells.last().unwrap();
        assert_eq!(bell.size, 20.0);
        assert!((bell.hit_radius - bell.size * HIT_RADIUS_FACTOR).abs() < f32::EPSILON);
    }

    #[test]
    fn test_extend_world_spawns_one_above_topmost() {
        let mut state = GameState::new(3, 400.0, 800.0);
        // Drop the ladder so the topmost bell is below the spawn threshold
        for bell in &mut state.bells {
            bell.pos.y += 400.0;
        }
        let before = state.bells.len();
        let topmost_y = state.bells.last().unwrap().pos.y;

        extend_world(&mut state);
        assert_eq!(state.bells.len(), before + 1);
        let spawned = state.bells.last().unwrap();
        assert!((spawned.pos.y - (topmost_y - state.bell_spacing)).abs() < 0.001);
    }

    #[test]
    fn test_extend_world_noop_once_ahead() {
        let mut state = GameState::new(3, 400.0, 800.0);
        // Force the topmost bell far above the threshold
        state.bells.last_mut().unwrap().pos.y = SPAWN_AHEAD_Y - 1.0;
        let before = state.bells.len();
        extend_world(&mut state);
        assert_eq!(state.bells.len(), before);
    }

    proptest! {
        #[test]
        fn prop_tier_size_non_increasing(a in 0u64..100_000, b in 0u64..100_000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(tier_size(hi) <= tier_size(lo));
        }

        #[test]
        fn prop_hit_radius_always_proportional(score in 0u64..100_000) {
            let mut state = GameState::new(9, 400.0, 800.0);
            state.score = score;
            spawn_bell(&mut state, 0.0);
            let bell = state.bells.last().unwrap();
            prop_assert!((bell.hit_radius - bell.size * HIT_RADIUS_FACTOR).abs() < f32::EPSILON);
        }
    }
}
