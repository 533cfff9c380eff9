//! Named audio cues and the sink the game loop fires them into.
//!
//! The core only ever asks for a cue by name; the Web Audio implementation
//! below synthesizes everything procedurally - no external files needed.

use crate::entity::powerup::PowerUpKind;

/// Cues fired at gameplay transition points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    IngredientCorrect,
    IngredientWrong,
    OrderComplete,
    OrderExpired,
    PowerUpActivate(PowerUpKind),
    GameOver,
    ButtonClick,
}

/// Audio collaborator. The core never depends on cue timing.
pub trait AudioSink {
    fn play(&mut self, cue: AudioCue);
    fn start_music(&mut self);
    fn stop_music(&mut self);
}

/// Silent sink for tests, headless runs, and blocked audio contexts
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: AudioCue) {}
    fn start_music(&mut self) {}
    fn stop_music(&mut self) {}
}

#[cfg(target_arch = "wasm32")]
pub use web::WebAudio;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AudioCue, AudioSink};
    use crate::entity::powerup::PowerUpKind;
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    /// Web Audio sink with procedurally generated effects
    pub struct WebAudio {
        ctx: Option<AudioContext>,
        music: Option<(OscillatorNode, GainNode)>,
        master_volume: f32,
        muted: bool,
    }

    impl WebAudio {
        pub fn new() -> Self {
            // May fail outside a secure context or before a user gesture
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                music: None,
                master_volume: 0.8,
                muted: false,
            }
        }

        pub fn set_muted(&mut self, muted: bool) {
            self.muted = muted;
        }

        fn volume(&self) -> f32 {
            if self.muted { 0.0 } else { self.master_volume }
        }

        /// Oscillator wired through a gain envelope to the destination
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

        /// One decaying blip, optionally sweeping to a second frequency
        fn blip(
            ctx: &AudioContext,
            vol: f32,
            freq: f32,
            sweep_to: Option<f32>,
            dur: f64,
            osc_type: OscillatorType,
        ) {
            let Some((osc, gain)) = Self::create_osc(ctx, freq, osc_type) else {
                return;
            };
            let t = ctx.current_time();
            gain.gain().set_value_at_time(vol, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + dur)
                .ok();
            if let Some(target) = sweep_to {
                osc.frequency().set_value_at_time(freq, t).ok();
                osc.frequency()
                    .exponential_ramp_to_value_at_time(target, t + dur)
                    .ok();
            }
            osc.start().ok();
            osc.stop_with_when(t + dur + 0.05).ok();
        }

        /// Short ascending arpeggio for celebratory cues
        fn arpeggio(ctx: &AudioContext, vol: f32, base: f32, steps: usize) {
            let t = ctx.current_time();
            for i in 0..steps {
                let Some((osc, gain)) =
                    Self::create_osc(ctx, base * 1.5f32.powi(i as i32), OscillatorType::Triangle)
                else {
                    continue;
                };
                let start = t + i as f64 * 0.08;
                gain.gain().set_value_at_time(vol * 0.4, start).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, start + 0.15)
                    .ok();
                osc.start_with_when(start).ok();
                osc.stop_with_when(start + 0.18).ok();
            }
        }
    }

    impl AudioSink for WebAudio {
        fn play(&mut self, cue: AudioCue) {
            let vol = self.volume();
            if vol <= 0.0 {
                return;
            }
            let Some(ctx) = &self.ctx else { return };
            // Browsers suspend the context until a user gesture
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            match cue {
                AudioCue::IngredientCorrect => {
                    Self::blip(ctx, vol * 0.35, 520.0, Some(780.0), 0.12, OscillatorType::Sine)
                }
                AudioCue::IngredientWrong => {
                    Self::blip(ctx, vol * 0.4, 220.0, Some(90.0), 0.25, OscillatorType::Sawtooth)
                }
                AudioCue::OrderComplete => Self::arpeggio(ctx, vol, 440.0, 3),
                AudioCue::OrderExpired => {
                    Self::blip(ctx, vol * 0.45, 300.0, Some(70.0), 0.45, OscillatorType::Square)
                }
                AudioCue::PowerUpActivate(kind) => {
                    let base = match kind {
                        PowerUpKind::SpeedBoost => 600.0,
                        PowerUpKind::TimeFreeze => 900.0,
                        PowerUpKind::ScoreMultiplier => 750.0,
                    };
                    Self::blip(ctx, vol * 0.35, base, Some(base * 2.0), 0.2, OscillatorType::Triangle)
                }
                AudioCue::GameOver => Self::blip(
                    ctx,
                    vol * 0.5,
                    392.0,
                    Some(65.0),
                    1.2,
                    OscillatorType::Sawtooth,
                ),
                AudioCue::ButtonClick => {
                    Self::blip(ctx, vol * 0.2, 800.0, None, 0.05, OscillatorType::Sine)
                }
            }
        }

        fn start_music(&mut self) {
            if self.music.is_some() {
                return;
            }
            let Some(ctx) = &self.ctx else { return };
            // Low ambient drone; the melodic layer lives outside the core
            if let Some((osc, gain)) = Self::create_osc(ctx, 110.0, OscillatorType::Triangle) {
                gain.gain().set_value(self.volume() * 0.06);
                if osc.start().is_ok() {
                    self.music = Some((osc, gain));
                }
            }
        }

        fn stop_music(&mut self) {
            if let Some((osc, _gain)) = self.music.take() {
                let _ = osc.stop();
            }
        }
    }
}
