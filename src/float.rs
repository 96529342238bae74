use std::iter::Sum;

use rustfft::{num_traits, FftNum};

pub trait Float: FftNum + num_traits::Float + num_traits::FloatConst + Sum {
    /// Converts a parameter or constant into the sample type.
    fn lit(x: f64) -> Self {
        Self::from_f64(x).unwrap_or_else(Self::nan)
    }

    fn from_len(n: usize) -> Self {
        Self::from_usize(n).unwrap_or_else(Self::nan)
    }
}

impl<T: FftNum + num_traits::Float + num_traits::FloatConst + Sum> Float for T {}
