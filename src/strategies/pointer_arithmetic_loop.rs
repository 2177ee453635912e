use super::{ThresholdParams, ThresholdStrategy};
use crate::pixel_buffer::PixelBuffer;
use log::trace;

/// Walks input and output in lockstep, advancing one sample per step.
///
/// Same contiguity collapse as [`super::RowPointerLoop`], but no column
/// offset is computed inside the loop.
pub struct PointerArithmeticLoop;

#[inline(always)]
fn threshold_run(src: &[u8], dst: &mut [u8], params: ThresholdParams) {
    debug_assert_eq!(src.len(), dst.len(), "threshold_run() passed runs of different length");

    for (out, &sample) in dst.iter_mut().zip(src) {
        *out = params.classify(sample);
    }
}

impl ThresholdStrategy for PointerArithmeticLoop {
    fn apply(&self, input: &PixelBuffer, params: ThresholdParams) -> PixelBuffer {
        let mut output = input.same_extents();

        if let (Some(src), Some(dst)) = (input.as_flat(), output.as_flat_mut()) {
            trace!("{}: flattened {} samples into one run", self.name(), src.len());
            threshold_run(src, dst, params);
        } else {
            trace!("{}: strided input, walking {} rows", self.name(), input.rows());
            for row in 0..input.rows() {
                threshold_run(input.row(row), output.row_mut(row), params);
            }
        }

        output
    }

    fn name(&self) -> &str {
        "PointerArithmeticLoop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_row_pointer_loop_on_strided_input() {
        let data: Vec<u8> = (0..=255).collect();
        let input = PixelBuffer::with_stride(8, 30, 32, data).unwrap();
        let params = ThresholdParams::new(120);

        let ours = PointerArithmeticLoop.apply(&input, params);
        let theirs = crate::strategies::RowPointerLoop.apply(&input, params);
        assert_eq!(ours, theirs);
    }

    #[test]
    fn threshold_zero_maps_everything_high() {
        let input = PixelBuffer::from_vec(1, 3, vec![0, 1, 255]).unwrap();
        let out = PointerArithmeticLoop.apply(&input, ThresholdParams::new(0));
        assert_eq!(out.as_flat(), Some(&[255, 255, 255][..]));
    }
}
