use crate::{
    error::{ensure_decay, ensure_not_empty, Error, Result},
    float::Float,
    peak,
};

/// Peak level of the reverb output.
pub const REVERB_PEAK: f64 = 0.5;

/// Single-tap reverb: every sample from `delay` on is mixed with the sample
/// `delay` earlier, scaled by `decay`. The first `delay` samples are silent.
/// The result is normalized to a peak of [`REVERB_PEAK`].
pub fn reverb<T: Float>(buf: &[T], delay: usize, decay: f64) -> Result<Vec<T>> {
    ensure_not_empty(buf, "reverb")?;
    ensure_decay(decay)?;
    log::debug!("reverb: {} samples pre-delay, decay {}", delay, decay);

    let decay = T::lit(decay);
    let mut output = vec![T::zero(); buf.len()];
    for i in delay..buf.len() {
        output[i] = buf[i] + decay * buf[i - delay];
    }

    normalize(&mut output, T::lit(REVERB_PEAK))?;
    Ok(output)
}

/// Scales `buf` so its peak absolute value is `target`.
pub fn normalize<T: Float>(buf: &mut [T], target: T) -> Result<()> {
    let peak = peak(buf);
    if !(peak > T::zero() && peak.is_finite()) {
        return Err(Error::InvalidInput(
            "cannot normalize a silent buffer".to_string(),
        ));
    }
    for x in buf.iter_mut() {
        *x = *x / peak * target;
    }
    Ok(())
}
