/// The buffer back to front. Reversing twice gives the input again.
pub fn reverse<T: Copy>(buf: &[T]) -> Vec<T> {
    buf.iter().rev().copied().collect()
}
