use std::sync::Arc;

use rustfft::{num_complex::Complex, num_traits::Zero};

use crate::float::Float;

/// Forward and inverse plans for one transform length.
pub struct Fft<T: Float> {
    len: usize,
    forward: Arc<dyn rustfft::Fft<T>>,
    inverse: Arc<dyn rustfft::Fft<T>>,
}

impl<T: Float> Fft<T> {
    pub fn new(len: usize) -> Self {
        let mut planner = rustfft::FftPlanner::new();
        Self {
            len,
            forward: planner.plan_fft_forward(len),
            inverse: planner.plan_fft_inverse(len),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn forward(&self, buffer: &mut [Complex<T>]) {
        self.forward.process(buffer);
    }

    pub fn inverse(&self, buffer: &mut [Complex<T>]) {
        self.inverse.process(buffer);
    }

    /// Spectrum of a real signal of `len()` samples, bins `0..=len() / 2`.
    pub fn real_forward(&self, buf: &[T]) -> Vec<Complex<T>> {
        debug_assert_eq!(buf.len(), self.len);
        let mut spectrum: Vec<_> = buf.iter().copied().map(Complex::from).collect();
        self.forward(&mut spectrum);
        spectrum.truncate(real_bins(self.len));
        spectrum
    }

    /// Real signal of `len()` samples whose spectrum starts with `half`.
    ///
    /// Bins past `half` are taken as zero and bins past `len() / 2` are ignored.
    /// The imaginary parts of the DC bin and of an even-length Nyquist bin do
    /// not contribute to the output.
    pub fn real_inverse(&self, half: &[Complex<T>]) -> Vec<T> {
        let mut spectrum = vec![Complex::zero(); self.len];
        let bins = real_bins(self.len).min(half.len());
        spectrum[..bins].copy_from_slice(&half[..bins]);
        fill_right_part_of_spectrum(&mut spectrum);
        self.inverse(&mut spectrum);
        fix_scale(&mut spectrum);
        spectrum.into_iter().map(|x| x.re).collect()
    }
}

/// Number of non-redundant bins in the spectrum of a real signal.
pub fn real_bins(len: usize) -> usize {
    len / 2 + 1
}

pub fn fix_scale<T: Float>(buf: &mut [Complex<T>]) {
    let scale = T::one() / T::from_len(buf.len());
    for x in buf.iter_mut() {
        *x = *x * scale;
    }
}

/// Mirrors the positive-frequency bins onto the negative ones.
pub fn fill_right_part_of_spectrum<T: Float>(spectrum: &mut [Complex<T>]) {
    let len = spectrum.len();
    for i in 1..(len + 1) / 2 {
        spectrum[len - i] = spectrum[i].conj();
    }
}
