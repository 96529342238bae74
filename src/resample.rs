//! Band-limited resampling and the chipmunk effect built on it.

use rustfft::{num_complex::Complex, num_traits::Zero};

use crate::{
    error::{ensure_len, ensure_not_empty, ensure_positive, ensure_sample_rate, Error, Result},
    fft::{real_bins, Fft},
    float::Float,
};

/// Resamples `buf` to `new_len` points by truncating or zero-padding its
/// spectrum.
///
/// An even-length Nyquist bin is doubled when shrinking and halved when
/// growing so it keeps its weight once mirrored.
pub fn resample<T: Float>(buf: &[T], new_len: usize) -> Vec<T> {
    let len = buf.len();
    if new_len == 0 {
        return vec![];
    }
    if len == 0 {
        return vec![T::zero(); new_len];
    }
    if new_len == len {
        return buf.to_vec();
    }

    let spectrum = Fft::new(len).real_forward(buf);

    let n = new_len.min(len);
    let kept = real_bins(n);
    let mut half = vec![Complex::zero(); real_bins(new_len)];
    half[..kept].copy_from_slice(&spectrum[..kept]);

    if n % 2 == 0 {
        let nyquist = n / 2;
        if new_len < len {
            half[nyquist] = half[nyquist] * T::lit(2.0);
        } else {
            half[nyquist] = half[nyquist] * T::lit(0.5);
        }
    }

    let scale = T::from_len(new_len) / T::from_len(len);
    Fft::new(new_len)
        .real_inverse(&half)
        .into_iter()
        .map(|x| x * scale)
        .collect()
}

/// Plays `buf` `speedup` times faster: the buffer shrinks to
/// `floor(len / speedup)` samples and the rate grows to
/// `round(sample_rate * speedup)`, raising the pitch by the same factor.
pub fn chipmunk<T: Float>(buf: &[T], sample_rate: u32, speedup: f64) -> Result<(Vec<T>, u32)> {
    ensure_not_empty(buf, "chipmunk")?;
    ensure_sample_rate(sample_rate)?;
    ensure_positive("speedup factor", speedup)?;

    let new_rate = (sample_rate as f64 * speedup).round();
    if !(new_rate >= 1.0 && new_rate <= u32::MAX as f64) {
        return Err(Error::InvalidParameter(format!(
            "speedup factor {speedup} gives an unusable sample rate of {new_rate} Hz"
        )));
    }
    let new_len = ensure_len("chipmunk output", (buf.len() as f64 / speedup).floor())?;
    log::debug!(
        "chipmunk: {} -> {} samples, {} -> {} Hz",
        buf.len(),
        new_len,
        sample_rate,
        new_rate
    );

    Ok((resample(buf, new_len), new_rate as u32))
}
