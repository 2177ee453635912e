use super::{ThresholdParams, ThresholdStrategy};
use crate::pixel_buffer::PixelBuffer;
use imageproc::contrast::{threshold, ThresholdType};

/// Cut point the reference always uses, whatever it is asked for.
pub const REFERENCE_THRESHOLD: u8 = 128;

/// Baseline backed by `imageproc`.
///
/// This strategy ignores `params` and always cuts at [`REFERENCE_THRESHOLD`].
/// The behavior is kept on purpose so benchmark numbers stay comparable with
/// earlier runs; equivalence checks against the loop strategies only hold
/// when they are also asked for 128. Callers that want to flag the override
/// compare [`ThresholdStrategy::effective_params`] with what they asked for.
///
/// `imageproc` works on `GrayImage`, so buffers wider or taller than
/// `u32::MAX` panic here.
pub struct ReferenceStrategy;

impl ThresholdStrategy for ReferenceStrategy {
    fn apply(&self, input: &PixelBuffer, _params: ThresholdParams) -> PixelBuffer {
        if input.is_empty() {
            return input.same_extents();
        }

        // imageproc maps `v > k` high, so k = 127 gives `v < 128` low
        let image = match input.to_gray_image() {
            Ok(image) => image,
            Err(e) => panic!("{} cannot hand this buffer to imageproc: {}", self.name(), e),
        };
        let output = threshold(&image, REFERENCE_THRESHOLD - 1, ThresholdType::Binary);

        PixelBuffer::from_gray_image(&output)
    }

    fn name(&self) -> &str {
        "ReferenceStrategy"
    }

    fn effective_params(&self, _params: ThresholdParams) -> ThresholdParams {
        ThresholdParams::new(REFERENCE_THRESHOLD)
    }
}
