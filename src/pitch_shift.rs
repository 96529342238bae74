//! Coarse frequency shifter for interleaved stereo.
//!
//! Every 1/20 s frame is split into its two channels, each channel's spectrum
//! is rotated up by a fixed number of bins, the bins that wrapped around to
//! the bottom are silenced and the channels are transformed back and
//! re-interleaved. This moves all partials by the same offset, so it is a
//! pitch/formant smear rather than a phase vocoder.

use std::{fmt, str::FromStr};

use rustfft::{num_complex::Complex, num_traits::Zero};

use crate::{
    error::{ensure_not_empty, ensure_sample_rate, Error, Result},
    fft::Fft,
    float::Float,
    transform::transform,
};

/// Frames per second of interleaved audio.
pub const FRAME_RATE: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PitchFilter {
    #[default]
    Helium,
    Robot,
}

impl PitchFilter {
    /// Bins each channel spectrum is rotated by.
    pub fn shift_amount(self) -> usize {
        match self {
            PitchFilter::Helium => 6000 / 150,
            PitchFilter::Robot => 2500 / 100,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PitchFilter::Helium => "helium",
            PitchFilter::Robot => "robot",
        }
    }
}

impl FromStr for PitchFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "helium" => Ok(PitchFilter::Helium),
            "robot" | "default" => Ok(PitchFilter::Robot),
            _ => Err(Error::InvalidParameter(format!(
                "unknown pitch filter '{s}' (expected helium, robot or default)"
            ))),
        }
    }
}

impl fmt::Display for PitchFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Interleaved samples per frame at `sample_rate`.
pub fn frame_len(sample_rate: u32) -> usize {
    (sample_rate / FRAME_RATE) as usize
}

pub fn pitch_shift<T: Float>(buf: &[T], sample_rate: u32, filter: PitchFilter) -> Result<Vec<T>> {
    ensure_not_empty(buf, "pitch shift")?;
    ensure_sample_rate(sample_rate)?;

    let frame_len = frame_len(sample_rate);
    if frame_len < 2 {
        return Err(Error::InvalidInput(format!(
            "pitch shift: a {sample_rate} Hz frame holds no stereo sample pair"
        )));
    }
    if buf.len() < frame_len {
        return Err(Error::InvalidInput(format!(
            "pitch shift: {} samples do not fill a single {}-sample frame",
            buf.len(),
            frame_len
        )));
    }

    let shift = filter.shift_amount();
    log::debug!(
        "pitch shift: {} frames of {} samples, {} bins up, {} samples untouched",
        buf.len() / frame_len,
        frame_len,
        shift,
        buf.len() % frame_len
    );

    // Even indices go left; an odd frame gives the left channel one more sample.
    let left = Fft::new(frame_len.div_ceil(2));
    let right = Fft::new(frame_len / 2);
    Ok(transform(frame_len, buf, |frame| {
        shift_frame(&left, &right, shift, frame)
    }))
}

fn shift_frame<T: Float>(
    left_fft: &Fft<T>,
    right_fft: &Fft<T>,
    shift: usize,
    frame: &[T],
) -> Vec<T> {
    let (left, right) = deinterleave(frame);
    let left = shift_channel(left_fft, shift, &left);
    let right = shift_channel(right_fft, shift, &right);
    interleave(&left, &right)
}

/// Moves the spectrum of `channel` up by `shift` bins.
pub fn shift_channel<T: Float>(fft: &Fft<T>, shift: usize, channel: &[T]) -> Vec<T> {
    let mut spectrum = fft.real_forward(channel);
    rotate_bins(&mut spectrum, shift);
    fft.real_inverse(&spectrum)
}

/// Rolls the bins forward by `shift` (bin `k` lands on `(k + shift) % len`)
/// and silences the first `shift` bins, which now hold wrapped-around top
/// frequencies.
pub fn rotate_bins<T: Float>(spectrum: &mut [Complex<T>], shift: usize) {
    let len = spectrum.len();
    if len == 0 {
        return;
    }
    spectrum.rotate_right(shift % len);
    spectrum[..shift.min(len)].fill(Complex::zero());
}

pub fn deinterleave<T: Copy>(buf: &[T]) -> (Vec<T>, Vec<T>) {
    let left = buf.iter().step_by(2).copied().collect();
    let right = buf.iter().skip(1).step_by(2).copied().collect();
    (left, right)
}

pub fn interleave<T: Copy>(left: &[T], right: &[T]) -> Vec<T> {
    let mut buf = Vec::with_capacity(left.len() + right.len());
    for (i, &l) in left.iter().enumerate() {
        buf.push(l);
        if let Some(&r) = right.get(i) {
            buf.push(r);
        }
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stereo_tone(len: usize, sample_rate: u32) -> Vec<f64> {
        (0..len)
            .map(|i| {
                let t = (i / 2) as f64 / sample_rate as f64;
                (std::f64::consts::TAU * 440.0 * t).sin() * 0.4
            })
            .collect()
    }

    #[test]
    fn test_filter_names() {
        assert_eq!("helium".parse::<PitchFilter>().unwrap(), PitchFilter::Helium);
        assert_eq!("robot".parse::<PitchFilter>().unwrap(), PitchFilter::Robot);
        assert_eq!("default".parse::<PitchFilter>().unwrap(), PitchFilter::Robot);
        assert!(matches!(
            "chorus".parse::<PitchFilter>(),
            Err(Error::InvalidParameter(_))
        ));
        assert_eq!(PitchFilter::Helium.shift_amount(), 40);
        assert_eq!(PitchFilter::Robot.shift_amount(), 25);
    }

    #[test]
    fn test_rotate_bins() {
        let mut spectrum: Vec<Complex<f64>> =
            (1..=6).map(|i| Complex::new(i as f64, 0.0)).collect();
        rotate_bins(&mut spectrum, 2);
        let re: Vec<f64> = spectrum.iter().map(|x| x.re).collect();
        assert_eq!(re, vec![0.0, 0.0, 1.0, 2.0, 3.0, 4.0]);

        let mut spectrum = vec![Complex::new(1.0f64, 1.0); 3];
        rotate_bins(&mut spectrum, 40);
        assert!(spectrum.iter().all(|x| *x == Complex::zero()));
    }

    #[test]
    fn test_shift_channel_moves_tone_up() {
        let len = 1100;
        let fft = Fft::<f64>::new(len);
        let channel: Vec<f64> = (0..len)
            .map(|i| (std::f64::consts::TAU * 10.0 * i as f64 / len as f64).cos())
            .collect();
        let shifted = shift_channel(&fft, 40, &channel);
        assert_eq!(shifted.len(), len);
        let loudest = fft
            .real_forward(&shifted)
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.norm().total_cmp(&b.1.norm()))
            .map(|(i, _)| i);
        assert_eq!(loudest, Some(50));
    }

    #[test]
    fn test_interleave_roundtrip() {
        for len in [0, 1, 6, 7] {
            let buf: Vec<i32> = (0..len).collect();
            let (left, right) = deinterleave(&buf);
            assert_eq!(left.len(), (len as usize).div_ceil(2));
            assert_eq!(interleave(&left, &right), buf);
        }
    }

    #[test]
    fn test_pitch_shift_leaves_remainder_silent() {
        let buf = stereo_tone(16000, 44100);
        let out = pitch_shift(&buf, 44100, PitchFilter::Helium).unwrap();
        assert_eq!(out.len(), 16000);
        let frame_len = frame_len(44100);
        assert_eq!(frame_len, 2205);
        let tail = 16000 % frame_len;
        assert_eq!(tail, 565);
        assert!(out[16000 - tail..].iter().all(|&x| x == 0.0));
        assert!(out[..16000 - tail].iter().any(|&x| x != 0.0));
    }

    #[test]
    fn test_pitch_shift_keeps_silence() {
        let out = pitch_shift(&vec![0.0f32; 4000], 8000, PitchFilter::Robot).unwrap();
        assert!(out.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_pitch_shift_too_short() {
        assert!(matches!(
            pitch_shift(&[0.1f32; 100], 44100, PitchFilter::Helium),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            pitch_shift(&[0.1f32; 100], 30, PitchFilter::Helium),
            Err(Error::InvalidInput(_))
        ));
    }
}
