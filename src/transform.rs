use rayon::prelude::*;

use crate::float::Float;

/// Runs `process` on consecutive non-overlapping frames of `frame_len`
/// samples and writes each result back over the span it was read from.
///
/// Samples after the last full frame are left at zero. Frames are processed in
/// parallel; a result shorter than its frame leaves the rest of the span zero
/// and a longer one is cut to the frame.
pub fn transform<T, F>(frame_len: usize, buf: &[T], process: F) -> Vec<T>
where
    T: Float,
    F: Fn(&[T]) -> Vec<T> + Sync,
{
    let mut output = vec![T::zero(); buf.len()];
    if frame_len == 0 {
        return output;
    }

    let span = buf.len() / frame_len * frame_len;
    output[..span]
        .par_chunks_mut(frame_len)
        .zip(buf[..span].par_chunks(frame_len))
        .for_each(|(out, frame)| {
            for (y, x) in out.iter_mut().zip(process(frame)) {
                *y = x;
            }
        });
    output
}
