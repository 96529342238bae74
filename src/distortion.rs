use crate::{
    error::{ensure_not_empty, Error, Result},
    float::Float,
};

pub const DEFAULT_FOLD_AMOUNT: f64 = 0.5;

/// Amplifies by `gain` and hard-clips at `±fold`.
pub fn distortion<T: Float>(buf: &[T], gain: f64, fold: f64) -> Result<Vec<T>> {
    ensure_not_empty(buf, "distortion")?;
    if !gain.is_finite() {
        return Err(Error::InvalidParameter(format!(
            "gain must be finite, got {gain}"
        )));
    }
    if !(fold.is_finite() && fold >= 0.0) {
        return Err(Error::InvalidParameter(format!(
            "fold amount must be non-negative, got {fold}"
        )));
    }

    let gain = T::lit(gain);
    let fold = T::lit(fold);
    Ok(buf
        .iter()
        .map(|&x| (x * gain).max(-fold).min(fold))
        .collect())
}
