//! Ephemeral feedback entities
//!
//! Pure lifetime bookkeeping: the renderer reads these, nothing else does.
//! Particles burst radially and damp to a standstill while fading; score
//! popups drift upward and fade over a fixed number of ticks.

use glam::Vec2;

use super::state::BellKind;
use crate::consts::*;

/// Ticks during which a fresh particle still moves
const PARTICLE_MOVE_TICKS: u32 = 12;
/// Age after which a particle starts fading
const PARTICLE_FADE_AGE: u32 = 20;
/// Velocity damping while a particle is moving
const PARTICLE_DAMPING: f32 = 0.75;
/// Life lost per tick once fading
const PARTICLE_FADE_RATE: f32 = 0.1;

/// Popup drift damping per tick
const POPUP_DAMPING: f32 = 0.9;
/// Popup life lost per tick
const POPUP_FADE_RATE: f32 = 0.03;

/// A burst particle
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 1.0 at spawn, removed at <= 0
    pub life: f32,
    pub age: u32,
    /// Which bell kind spawned it (renderer picks the color)
    pub kind: BellKind,
}

/// A floating score readout spawned at the point of contact
#[derive(Debug, Clone, Copy)]
pub struct ScorePopup {
    pub pos: Vec2,
    /// Upward drift, decays each tick
    pub vy: f32,
    /// Score at the moment of contact
    pub value: u64,
    pub life: f32,
    pub age: u32,
}

/// Queue a radial particle burst at a bell position
pub fn spawn_burst(particles: &mut Vec<Particle>, pos: Vec2, kind: BellKind) {
    for i in 0..BURST_PARTICLE_COUNT {
        let angle = std::f32::consts::TAU * i as f32 / BURST_PARTICLE_COUNT as f32;
        particles.push(Particle {
            pos,
            vel: Vec2::new(angle.cos(), angle.sin()) * BURST_PARTICLE_SPEED,
            life: 1.0,
            age: 0,
            kind,
        });
    }
}

/// Queue a score popup at a bell position
pub fn spawn_popup(popups: &mut Vec<ScorePopup>, pos: Vec2, value: u64) {
    popups.push(ScorePopup {
        pos,
        vy: POPUP_RISE,
        value,
        life: 1.0,
        age: 0,
    });
}

/// Advance all particles one tick and drop the dead ones
pub fn update_particles(particles: &mut Vec<Particle>) {
    for p in particles.iter_mut() {
        p.age += 1;
        if p.age <= PARTICLE_MOVE_TICKS {
            p.pos += p.vel;
            p.vel *= PARTICLE_DAMPING;
        }
        if p.age > PARTICLE_FADE_AGE {
            p.life -= PARTICLE_FADE_RATE;
        }
    }
    particles.retain(|p| p.life > 0.0);
}

/// Advance all score popups one tick and drop the dead ones
pub fn update_popups(popups: &mut Vec<ScorePopup>) {
    for s in popups.iter_mut() {
        s.age += 1;
        s.pos.y += s.vy;
        s.vy *= POPUP_DAMPING;
        s.life -= POPUP_FADE_RATE;
    }
    popups.retain(|s| s.life > 0.0);
}
