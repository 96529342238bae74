use crate::{
    error::{ensure_len, ensure_not_empty, ensure_positive, ensure_sample_rate, try_zeroed, Result},
    float::Float,
};

/// Value of `buf` at the fractional index `pos`, interpolated linearly between
/// neighbours. Positions outside the buffer hold the edge sample.
///
/// The position stays in `f64` so indices past 2^24 resolve exactly for `f32`
/// buffers. `buf` must not be empty.
pub fn interpolate<T: Float>(buf: &[T], pos: f64) -> T {
    let last = buf.len() - 1;
    if !(pos > 0.0) {
        return buf[0];
    }
    let i = pos.floor() as usize;
    if i >= last {
        return buf[last];
    }
    let frac = T::lit(pos - i as f64);
    buf[i] + (buf[i + 1] - buf[i]) * frac
}

/// Stretches `buf` to `floor(len * slowdown)` samples at the same rate, so it
/// plays `slowdown` times longer (and lower).
///
/// The original samples sit on `len` uniform points over
/// `[0, len / sample_rate)`; the output samples the same span at `new_len`
/// uniform points.
pub fn slow_motion<T: Float>(
    buf: &[T],
    sample_rate: u32,
    slowdown: f64,
) -> Result<(Vec<T>, u32)> {
    ensure_not_empty(buf, "slow motion")?;
    ensure_sample_rate(sample_rate)?;
    ensure_positive("slowdown factor", slowdown)?;

    let len = buf.len();
    let new_len = ensure_len("slow motion output", (len as f64 * slowdown).floor())?;
    let duration = len as f64 / sample_rate as f64;
    log::debug!(
        "slow motion: {} -> {} samples over {:.3} s",
        len,
        new_len,
        duration
    );
    if new_len == 0 {
        return Ok((vec![], sample_rate));
    }

    // j * new_step / original_step, reduced to j * len / new_len
    let mut output = try_zeroed(new_len)?;
    for (j, y) in output.iter_mut().enumerate() {
        *y = interpolate(buf, j as f64 * len as f64 / new_len as f64);
    }
    Ok((output, sample_rate))
}
