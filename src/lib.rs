pub mod config;
pub mod delay;
pub mod distortion;
pub mod effect;
pub mod error;
pub mod fft;
pub mod float;
pub mod pcm;
pub mod pitch_shift;
pub mod resample;
pub mod reverb;
pub mod reverse;
pub mod time_stretch;
pub mod transform;
pub mod wav;

pub use config::EffectParams;
pub use effect::{Effect, EffectKind, Rendered};
pub use error::{Error, Result};
pub use float::Float;
pub use pcm::{Pcm, QuantizePolicy};
pub use pitch_shift::PitchFilter;
pub use rustfft::{num_complex, num_traits};

/// RMS level.
pub fn power<T: Float>(buf: &[T]) -> T {
    if buf.is_empty() {
        return T::zero();
    }
    (buf.iter().map(|&x| x.powi(2)).sum::<T>() / T::from_len(buf.len())).sqrt()
}

/// Largest absolute sample value.
pub fn peak<T: Float>(buf: &[T]) -> T {
    buf.iter()
        .fold(T::zero(), |a, &x| a.max(num_traits::Float::abs(x)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_and_peak() {
        let buf = [0.5f64, -0.5, 0.5, -0.5];
        assert!((power(&buf) - 0.5).abs() < 1e-12);
        assert_eq!(peak(&[0.1f32, -0.75, 0.3]), 0.75);
        assert_eq!(power::<f32>(&[]), 0.0);
        assert_eq!(peak::<f32>(&[]), 0.0);
    }
}
