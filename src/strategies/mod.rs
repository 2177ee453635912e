pub mod indexed_loop;
pub mod pointer_arithmetic_loop;
pub mod reference;
pub mod row_pointer_loop;
pub mod verify;

pub use indexed_loop::IndexedLoop;
pub use pointer_arithmetic_loop::PointerArithmeticLoop;
pub use reference::ReferenceStrategy;
pub use row_pointer_loop::RowPointerLoop;

use crate::pixel_buffer::PixelBuffer;

/// Cut point for a binary threshold. Samples strictly below `threshold` map
/// to [`ThresholdParams::LOW_VALUE`], everything else to
/// [`ThresholdParams::HIGH_VALUE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdParams {
    pub threshold: u8,
}

impl ThresholdParams {
    pub const LOW_VALUE: u8 = 0;
    pub const HIGH_VALUE: u8 = 255;

    pub fn new(threshold: u8) -> Self {
        Self { threshold }
    }

    #[inline(always)]
    pub fn classify(&self, sample: u8) -> u8 {
        if sample < self.threshold {
            Self::LOW_VALUE
        } else {
            Self::HIGH_VALUE
        }
    }
}

/// A binary threshold implementation.
///
/// Every implementation must produce a freshly allocated, contiguous output
/// with the input's extents, and must never write to the input.
pub trait ThresholdStrategy {
    /// Threshold `input` into a new buffer.
    ///
    /// # Arguments
    /// * `input` - The grayscale buffer to read
    /// * `params` - The cut point
    fn apply(&self, input: &PixelBuffer, params: ThresholdParams) -> PixelBuffer;

    /// Get the name of this strategy for logging and reporting
    fn name(&self) -> &str;

    /// The parameters `apply` actually honors when asked for `params`.
    fn effective_params(&self, params: ThresholdParams) -> ThresholdParams {
        params
    }
}

/// All four strategies, reference first.
pub fn all() -> Vec<Box<dyn ThresholdStrategy>> {
    vec![
        Box::new(ReferenceStrategy),
        Box::new(IndexedLoop),
        Box::new(RowPointerLoop),
        Box::new(PointerArithmeticLoop),
    ]
}
