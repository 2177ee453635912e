//! Bounds-checked verification of strategy outputs.
//!
//! Everything here reads through [`PixelBuffer::get`] so a malformed output
//! shows up as a mismatch instead of a panic.

use super::ThresholdParams;
use crate::error::BenchError;
use crate::pixel_buffer::PixelBuffer;

/// First coordinate where `a` and `b` disagree, comparing logical samples only.
pub fn first_difference(a: &PixelBuffer, b: &PixelBuffer) -> Option<(usize, usize)> {
    if a.rows() != b.rows() || a.cols() != b.cols() {
        return Some((0, 0));
    }

    for row in 0..a.rows() {
        for col in 0..a.cols() {
            if a.get(row, col) != b.get(row, col) {
                return Some((row, col));
            }
        }
    }

    None
}

/// Check `output` against the threshold contract applied to `input`.
pub fn check_contract(
    label: &str,
    input: &PixelBuffer,
    output: &PixelBuffer,
    params: ThresholdParams,
) -> Result<(), BenchError> {
    let mismatch = |row, col| BenchError::Mismatch {
        label: label.to_string(),
        row,
        col,
    };

    if input.rows() != output.rows() || input.cols() != output.cols() {
        return Err(mismatch(0, 0));
    }

    for row in 0..input.rows() {
        for col in 0..input.cols() {
            let expected = input.get(row, col).map(|v| params.classify(v));
            if output.get(row, col) != expected {
                return Err(mismatch(row, col));
            }
        }
    }

    Ok(())
}
