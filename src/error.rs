use thiserror::Error;

/// Errors reported by the effects and the WAV layer
#[derive(Debug, Error)]
pub enum Error {
    /// A parameter is out of range or names nothing known
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The buffer cannot be processed by the requested effect
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Quantization had to saturate samples under the strict policy
    #[error("{clipped} of {total} samples exceed the 16-bit range")]
    NumericOverflow { clipped: usize, total: usize },

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn ensure_not_empty<T>(buf: &[T], effect: &str) -> Result<()> {
    if buf.is_empty() {
        return Err(Error::InvalidInput(format!("{effect}: empty buffer")));
    }
    Ok(())
}

pub(crate) fn ensure_sample_rate(sample_rate: u32) -> Result<()> {
    if sample_rate == 0 {
        return Err(Error::InvalidParameter(
            "sample rate must be positive".to_string(),
        ));
    }
    Ok(())
}

pub(crate) fn ensure_positive(name: &str, value: f64) -> Result<()> {
    if !(value.is_finite() && value > 0.0) {
        return Err(Error::InvalidParameter(format!(
            "{name} must be greater than zero, got {value}"
        )));
    }
    Ok(())
}

/// Converts an already floored output length, rejecting anything a `usize`
/// cannot hold.
pub(crate) fn ensure_len(what: &str, len: f64) -> Result<usize> {
    if !(len >= 0.0 && len < usize::MAX as f64) {
        return Err(Error::InvalidParameter(format!(
            "{what} of {len} samples is out of range"
        )));
    }
    Ok(len as usize)
}

/// `a + b` for lengths, as an error instead of an overflow.
pub(crate) fn checked_len(what: &str, a: usize, b: usize) -> Result<usize> {
    a.checked_add(b).ok_or_else(|| {
        Error::InvalidParameter(format!("{what}: {a} + {b} samples is out of range"))
    })
}

/// A zeroed buffer of `len` samples, or an error if it cannot be allocated.
pub(crate) fn try_zeroed<T>(len: usize) -> Result<Vec<T>>
where
    T: Clone + rustfft::num_traits::Zero,
{
    let mut buf = Vec::new();
    buf.try_reserve_exact(len).map_err(|e| {
        Error::InvalidParameter(format!("cannot allocate {len} samples: {e}"))
    })?;
    buf.resize(len, T::zero());
    Ok(buf)
}

pub(crate) fn ensure_decay(decay: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&decay) {
        return Err(Error::InvalidParameter(format!(
            "decay factor must lie in [0, 1], got {decay}"
        )));
    }
    Ok(())
}
