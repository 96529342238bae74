use std::{fmt, str::FromStr};

use crate::{
    delay::{delay, echo},
    distortion::distortion,
    error::{ensure_not_empty, Error, Result},
    float::Float,
    pcm::{self, Pcm, QuantizePolicy},
    pitch_shift::{pitch_shift, PitchFilter},
    resample::chipmunk,
    reverb::reverb,
    reverse::reverse,
    time_stretch::slow_motion,
};

/// Effect names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKind {
    Delay,
    Echo,
    Reverb,
    Chipmunk,
    SlowMotion,
    Distortion,
    Reverse,
    PitchShift,
}

impl EffectKind {
    pub const ALL: [EffectKind; 8] = [
        EffectKind::Delay,
        EffectKind::Echo,
        EffectKind::Reverb,
        EffectKind::Chipmunk,
        EffectKind::SlowMotion,
        EffectKind::Distortion,
        EffectKind::Reverse,
        EffectKind::PitchShift,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EffectKind::Delay => "delay",
            EffectKind::Echo => "echo",
            EffectKind::Reverb => "reverb",
            EffectKind::Chipmunk => "chipmunk",
            EffectKind::SlowMotion => "slow-motion",
            EffectKind::Distortion => "distortion",
            EffectKind::Reverse => "reverse",
            EffectKind::PitchShift => "pitch-shift",
        }
    }
}

impl FromStr for EffectKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase().replace('_', "-");
        match name.as_str() {
            "delay" => Ok(EffectKind::Delay),
            "echo" => Ok(EffectKind::Echo),
            "reverb" => Ok(EffectKind::Reverb),
            "chipmunk" => Ok(EffectKind::Chipmunk),
            "slow-motion" | "slowmotion" => Ok(EffectKind::SlowMotion),
            "distortion" => Ok(EffectKind::Distortion),
            "reverse" => Ok(EffectKind::Reverse),
            "pitch-shift" | "pitchshift" => Ok(EffectKind::PitchShift),
            _ => {
                let known: Vec<_> = EffectKind::ALL.iter().map(|k| k.name()).collect();
                Err(Error::InvalidParameter(format!(
                    "unknown effect '{s}' (expected one of {})",
                    known.join(", ")
                )))
            }
        }
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One effect with its parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Delay { delay_time: f64 },
    Echo { delay_time: f64, decay: f64 },
    /// `delay` is in samples.
    Reverb { delay: usize, decay: f64 },
    Chipmunk { speedup: f64 },
    SlowMotion { slowdown: f64 },
    Distortion { gain: f64, fold: f64 },
    Reverse,
    PitchShift { filter: PitchFilter },
}

/// Output of [`Effect::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub pcm: Pcm,
    /// Samples saturated while converting back to 16 bit.
    pub clipped: usize,
}

impl Effect {
    pub fn kind(&self) -> EffectKind {
        match self {
            Effect::Delay { .. } => EffectKind::Delay,
            Effect::Echo { .. } => EffectKind::Echo,
            Effect::Reverb { .. } => EffectKind::Reverb,
            Effect::Chipmunk { .. } => EffectKind::Chipmunk,
            Effect::SlowMotion { .. } => EffectKind::SlowMotion,
            Effect::Distortion { .. } => EffectKind::Distortion,
            Effect::Reverse => EffectKind::Reverse,
            Effect::PitchShift { .. } => EffectKind::PitchShift,
        }
    }

    /// Runs the effect on float samples, returning the new samples and rate.
    pub fn process<T: Float>(&self, buf: &[T], sample_rate: u32) -> Result<(Vec<T>, u32)> {
        match *self {
            Effect::Delay { delay_time } => {
                Ok((delay(buf, delay_time, sample_rate)?, sample_rate))
            }
            Effect::Echo { delay_time, decay } => {
                Ok((echo(buf, delay_time, decay, sample_rate)?, sample_rate))
            }
            Effect::Reverb { delay, decay } => Ok((reverb(buf, delay, decay)?, sample_rate)),
            Effect::Chipmunk { speedup } => chipmunk(buf, sample_rate, speedup),
            Effect::SlowMotion { slowdown } => slow_motion(buf, sample_rate, slowdown),
            Effect::Distortion { gain, fold } => Ok((distortion(buf, gain, fold)?, sample_rate)),
            Effect::Reverse => Ok((reverse(buf), sample_rate)),
            Effect::PitchShift { filter } => {
                Ok((pitch_shift(buf, sample_rate, filter)?, sample_rate))
            }
        }
    }

    /// Runs the effect on a 16-bit buffer.
    ///
    /// Reversal works on the samples directly; everything else goes through
    /// the float domain and is quantized back under `policy`.
    pub fn apply(&self, input: &Pcm, policy: QuantizePolicy) -> Result<Rendered> {
        ensure_not_empty(&input.samples, self.kind().name())?;

        if let Effect::Reverse = self {
            return Ok(Rendered {
                pcm: input.with_samples(input.sample_rate, reverse(&input.samples)),
                clipped: 0,
            });
        }

        let buf: Vec<f32> = pcm::to_float(&input.samples);
        let (buf, sample_rate) = self.process(&buf, input.sample_rate)?;
        let quantized = pcm::quantize(&buf);
        policy.check(&quantized)?;

        Ok(Rendered {
            pcm: input.with_samples(sample_rate, quantized.samples),
            clipped: quantized.clipped,
        })
    }
}
