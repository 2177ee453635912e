use super::{ThresholdParams, ThresholdStrategy};
use crate::pixel_buffer::PixelBuffer;
use log::trace;

/// Per-row slices indexed by column offset.
///
/// A contiguous input is treated as a single row of `rows * cols` samples so
/// the outer loop runs once. Otherwise each row is fetched separately.
pub struct RowPointerLoop;

#[inline(always)]
#[allow(clippy::needless_range_loop)]
fn threshold_row(src: &[u8], dst: &mut [u8], params: ThresholdParams) {
    debug_assert_eq!(src.len(), dst.len(), "threshold_row() passed rows of different length");

    for col in 0..src.len() {
        if src[col] < params.threshold {
            dst[col] = ThresholdParams::LOW_VALUE;
        } else {
            dst[col] = ThresholdParams::HIGH_VALUE;
        }
    }
}

impl ThresholdStrategy for RowPointerLoop {
    fn apply(&self, input: &PixelBuffer, params: ThresholdParams) -> PixelBuffer {
        let mut output = input.same_extents();

        if let (Some(src), Some(dst)) = (input.as_flat(), output.as_flat_mut()) {
            trace!("{}: flattened {} samples into one row", self.name(), src.len());
            threshold_row(src, dst, params);
        } else {
            trace!("{}: strided input, walking {} rows", self.name(), input.rows());
            for row in 0..input.rows() {
                threshold_row(input.row(row), output.row_mut(row), params);
            }
        }

        output
    }

    fn name(&self) -> &str {
        "RowPointerLoop"
    }
}
