//! Delay and echo. Both lengthen the buffer by the delay time.

use crate::{
    error::{
        checked_len, ensure_decay, ensure_len, ensure_not_empty, ensure_sample_rate, try_zeroed,
        Error, Result,
    },
    float::Float,
};

/// Level of the delayed copy in [`delay`].
pub const DELAY_MIX: f64 = 0.5;

/// `floor(delay_time * sample_rate)`.
pub fn delay_samples(delay_time: f64, sample_rate: u32) -> Result<usize> {
    ensure_sample_rate(sample_rate)?;
    if !(delay_time.is_finite() && delay_time >= 0.0) {
        return Err(Error::InvalidParameter(format!(
            "delay time must be a non-negative number of seconds, got {delay_time}"
        )));
    }
    ensure_len("delay", (delay_time * sample_rate as f64).floor())
}

/// Appends `delay_time` of silence and mixes a half-level copy of the input
/// in, starting `delay_time` late.
///
/// With a zero delay the copy lands on the input itself and the result is the
/// input scaled by 1.5.
pub fn delay<T: Float>(buf: &[T], delay_time: f64, sample_rate: u32) -> Result<Vec<T>> {
    ensure_not_empty(buf, "delay")?;
    let delay = delay_samples(delay_time, sample_rate)?;
    let len = checked_len("delay", buf.len(), delay)?;
    log::debug!("delay: {} samples late, {} samples out", delay, len);

    let mix = T::lit(DELAY_MIX);
    let mut output = try_zeroed(len)?;
    output[..buf.len()].copy_from_slice(buf);
    for (y, &x) in output[delay..].iter_mut().zip(buf.iter()) {
        *y = *y + x * mix;
    }
    Ok(output)
}

/// Like [`delay`] with a caller-chosen decay, but echoes only land inside the
/// original length; the appended tail stays silent.
pub fn echo<T: Float>(
    buf: &[T],
    delay_time: f64,
    decay: f64,
    sample_rate: u32,
) -> Result<Vec<T>> {
    ensure_not_empty(buf, "echo")?;
    ensure_decay(decay)?;
    let delay = delay_samples(delay_time, sample_rate)?;
    log::debug!("echo: {} samples late, decay {}", delay, decay);

    let len = buf.len();
    let decay = T::lit(decay);
    let mut output = try_zeroed(checked_len("echo", len, delay)?)?;
    for (i, &x) in buf.iter().enumerate() {
        output[i] = output[i] + x;
        if i + delay < len {
            output[i + delay] = output[i + delay] + decay * x;
        }
    }
    Ok(output)
}
