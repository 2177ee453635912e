use super::{ThresholdParams, ThresholdStrategy};
use crate::pixel_buffer::PixelBuffer;

/// Nested row/column loop with a coordinate lookup per sample.
///
/// Does not care whether the input is contiguous since every access goes
/// through `(row, col)`.
pub struct IndexedLoop;

impl ThresholdStrategy for IndexedLoop {
    fn apply(&self, input: &PixelBuffer, params: ThresholdParams) -> PixelBuffer {
        let mut output = input.same_extents();

        for row in 0..input.rows() {
            for col in 0..input.cols() {
                if input.at(row, col) < params.threshold {
                    output.set(row, col, ThresholdParams::LOW_VALUE);
                } else {
                    output.set(row, col, ThresholdParams::HIGH_VALUE);
                }
            }
        }

        output
    }

    fn name(&self) -> &str {
        "IndexedLoop"
    }
}
