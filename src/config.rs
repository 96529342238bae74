//! Effect parameters and their defaults.

use crate::{
    distortion::DEFAULT_FOLD_AMOUNT,
    effect::{Effect, EffectKind},
    pitch_shift::PitchFilter,
};

pub const DEFAULT_DELAY_TIME: f64 = 0.5;
pub const DEFAULT_DECAY_FACTOR: f64 = 0.5;
/// In samples.
pub const DEFAULT_REVERB_DELAY: usize = 300;
pub const DEFAULT_SPEEDUP_FACTOR: f64 = 2.0;
pub const DEFAULT_SLOWDOWN_FACTOR: f64 = 2.0;
pub const DEFAULT_GAIN: f64 = 1.5;

/// Every named parameter any effect takes. Each effect reads only its own.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectParams {
    /// Seconds, for delay and echo.
    pub delay_time: f64,
    /// For echo and reverb, in `[0, 1]`.
    pub decay_factor: f64,
    /// Samples, for reverb.
    pub reverb_delay: usize,
    pub speedup_factor: f64,
    pub slowdown_factor: f64,
    pub gain: f64,
    pub fold_amount: f64,
    pub filter: PitchFilter,
}

impl Default for EffectParams {
    fn default() -> Self {
        Self {
            delay_time: DEFAULT_DELAY_TIME,
            decay_factor: DEFAULT_DECAY_FACTOR,
            reverb_delay: DEFAULT_REVERB_DELAY,
            speedup_factor: DEFAULT_SPEEDUP_FACTOR,
            slowdown_factor: DEFAULT_SLOWDOWN_FACTOR,
            gain: DEFAULT_GAIN,
            fold_amount: DEFAULT_FOLD_AMOUNT,
            filter: PitchFilter::default(),
        }
    }
}

impl EffectParams {
    pub fn effect(&self, kind: EffectKind) -> Effect {
        match kind {
            EffectKind::Delay => Effect::Delay {
                delay_time: self.delay_time,
            },
            EffectKind::Echo => Effect::Echo {
                delay_time: self.delay_time,
                decay: self.decay_factor,
            },
            EffectKind::Reverb => Effect::Reverb {
                delay: self.reverb_delay,
                decay: self.decay_factor,
            },
            EffectKind::Chipmunk => Effect::Chipmunk {
                speedup: self.speedup_factor,
            },
            EffectKind::SlowMotion => Effect::SlowMotion {
                slowdown: self.slowdown_factor,
            },
            EffectKind::Distortion => Effect::Distortion {
                gain: self.gain,
                fold: self.fold_amount,
            },
            EffectKind::Reverse => Effect::Reverse,
            EffectKind::PitchShift => Effect::PitchShift {
                filter: self.filter,
            },
        }
    }
}
