//! Audio triggers
//!
//! The core fires these at well-defined moments (run start, bell contact,
//! game over) and never depends on their completion. The web sink synthesizes
//! everything with oscillators - no sound files needed.

use crate::sim::BellKind;

/// Fire-and-forget audio capability
pub trait AudioSink {
    /// Jump sound for a bell kind (also used for the run's first jump)
    fn play_jump(&mut self, kind: BellKind);
    /// Fall/game-over sound
    fn play_fall(&mut self);
    fn play_bgm(&mut self);
    fn stop_bgm(&mut self);
}

/// Silent sink for native runs and tests
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play_jump(&mut self, _kind: BellKind) {}
    fn play_fall(&mut self) {}
    fn play_bgm(&mut self) {}
    fn stop_bgm(&mut self) {}
}

#[cfg(target_arch = "wasm32")]
pub use web_audio::WebAudioSink;

#[cfg(target_arch = "wasm32")]
mod web_audio {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::AudioSink;
    use crate::sim::BellKind;

    /// Web Audio implementation
    pub struct WebAudioSink {
        ctx: Option<AudioContext>,
        /// Low drone standing in for background music
        bgm: Option<(OscillatorNode, GainNode)>,
        volume: f32,
    }

    impl WebAudioSink {
        pub fn new(volume: f32) -> Self {
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                bgm: None,
                volume: volume.clamp(0.0, 1.0),
            }
        }

        pub fn set_volume(&mut self, volume: f32) {
            self.volume = volume.clamp(0.0, 1.0);
        }

        /// Create an oscillator with a gain envelope
        fn create_osc(
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        fn ctx(&self) -> Option<&AudioContext> {
            let ctx = self.ctx.as_ref()?;
            // Browsers suspend the context until a user gesture
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }
            Some(ctx)
        }
    }

    impl AudioSink for WebAudioSink {
        fn play_jump(&mut self, kind: BellKind) {
            let vol = self.volume;
            if vol <= 0.0 {
                return;
            }
            let Some(ctx) = self.ctx() else { return };
            let t = ctx.current_time();

            match kind {
                BellKind::Boost => {
                    // Airy high chime with a slight vibrato
                    let Some((osc, gain)) = Self::create_osc(ctx, 1100.0, OscillatorType::Triangle)
                    else {
                        return;
                    };
                    osc.frequency().set_value_at_time(1100.0, t).ok();
                    osc.frequency()
                        .linear_ramp_to_value_at_time(1105.0, t + 0.1)
                        .ok();
                    gain.gain().set_value_at_time(vol * 0.2, t).ok();
                    gain.gain()
                        .exponential_ramp_to_value_at_time(0.01, t + 1.5)
                        .ok();
                    osc.start().ok();
                    osc.stop_with_when(t + 1.5).ok();
                }
                BellKind::Normal => {
                    // Bright bell decaying an octave down
                    let Some((osc, gain)) = Self::create_osc(ctx, 880.0, OscillatorType::Sine)
                    else {
                        return;
                    };
                    osc.frequency().set_value_at_time(880.0, t).ok();
                    osc.frequency()
                        .exponential_ramp_to_value_at_time(440.0, t + 1.0)
                        .ok();
                    gain.gain().set_value_at_time(vol * 0.3, t).ok();
                    gain.gain()
                        .exponential_ramp_to_value_at_time(0.01, t + 1.0)
                        .ok();
                    osc.start().ok();
                    osc.stop_with_when(t + 1.0).ok();
                }
            }
        }

        fn play_fall(&mut self) {
            let vol = self.volume;
            if vol <= 0.0 {
                return;
            }
            let Some(ctx) = self.ctx() else { return };
            let Some((osc, gain)) = Self::create_osc(ctx, 200.0, OscillatorType::Sawtooth) else {
                return;
            };
            let t = ctx.current_time();

            osc.frequency().set_value_at_time(200.0, t).ok();
            osc.frequency().linear_ramp_to_value_at_time(50.0, t + 0.8).ok();
            gain.gain().set_value_at_time(vol * 0.2, t).ok();
            gain.gain().linear_ramp_to_value_at_time(0.01, t + 0.8).ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.8).ok();
        }

        fn play_bgm(&mut self) {
            if self.bgm.is_some() || self.volume <= 0.0 {
                return;
            }
            let Some(ctx) = self.ctx() else { return };
            let Some((osc, gain)) = Self::create_osc(ctx, 110.0, OscillatorType::Sine) else {
                return;
            };
            gain.gain().set_value(self.volume * 0.04);
            if osc.start().is_ok() {
                self.bgm = Some((osc, gain));
            }
        }

        fn stop_bgm(&mut self) {
            if let Some((osc, _gain)) = self.bgm.take() {
                osc.stop().ok();
            }
        }
    }
}
