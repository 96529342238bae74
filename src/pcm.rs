//! 16-bit PCM buffers and their conversion to and from the float domain the
//! effects work in.
//!
//! A sample `s` maps to `s / 32768`, so the full 16-bit range covers `[-1, 1)`.

use crate::{
    error::{Error, Result},
    float::Float,
};

pub const FULL_SCALE: f64 = 32768.0;

/// Interleaved 16-bit samples with their format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pcm {
    pub sample_rate: u32,
    pub channels: u16,
    pub samples: Vec<i16>,
}

impl Pcm {
    pub fn new(sample_rate: u32, channels: u16, samples: Vec<i16>) -> Self {
        Self {
            sample_rate,
            channels,
            samples,
        }
    }

    pub fn mono(sample_rate: u32, samples: Vec<i16>) -> Self {
        Self::new(sample_rate, 1, samples)
    }

    /// Same channel layout, new content.
    pub fn with_samples(&self, sample_rate: u32, samples: Vec<i16>) -> Self {
        Self::new(sample_rate, self.channels, samples)
    }

    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 || self.channels == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.channels as f64 / self.sample_rate as f64
    }
}

pub fn to_float<T: Float>(samples: &[i16]) -> Vec<T> {
    let scale = T::lit(1.0 / FULL_SCALE);
    samples.iter().map(|&s| T::lit(s as f64) * scale).collect()
}

/// Samples rounded back to 16 bit, with the number that had to be saturated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quantized {
    pub samples: Vec<i16>,
    pub clipped: usize,
}

/// Rounds to the 16-bit grid, saturating instead of wrapping.
///
/// NaN samples become silence and count as clipped.
pub fn quantize<T: Float>(buf: &[T]) -> Quantized {
    let scale = T::lit(FULL_SCALE);
    let max = T::lit(i16::MAX as f64);
    let min = T::lit(i16::MIN as f64);

    let mut clipped = 0;
    let samples = buf
        .iter()
        .map(|&x| {
            let v = (x * scale).round();
            if v.is_nan() {
                clipped += 1;
                0
            } else if v > max {
                clipped += 1;
                i16::MAX
            } else if v < min {
                clipped += 1;
                i16::MIN
            } else {
                v.to_i16().unwrap_or(0)
            }
        })
        .collect();

    Quantized { samples, clipped }
}

/// What to do when a result does not fit the 16-bit range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuantizePolicy {
    /// Clip to the range and report the count.
    #[default]
    Saturate,
    /// Fail with [`Error::NumericOverflow`].
    Strict,
}

impl QuantizePolicy {
    pub fn check(self, quantized: &Quantized) -> Result<()> {
        match self {
            QuantizePolicy::Strict if quantized.clipped > 0 => Err(Error::NumericOverflow {
                clipped: quantized.clipped,
                total: quantized.samples.len(),
            }),
            _ => Ok(()),
        }
    }
}
