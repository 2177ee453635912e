//! Binary threshold micro-benchmarks.
//!
//! Four strategies compute the same threshold over a grayscale
//! [`PixelBuffer`] with different traversal mechanics; the
//! [`BenchmarkDriver`] times each one against a shared input.

pub mod driver;
pub mod error;
pub mod image_source;
pub mod pixel_buffer;
pub mod report;
pub mod stopwatch;
pub mod strategies;

pub use crate::driver::{BenchmarkDriver, RunOutcome, TimingSample};
pub use crate::error::BenchError;
pub use crate::pixel_buffer::PixelBuffer;
pub use crate::stopwatch::Stopwatch;
pub use crate::strategies::{ThresholdParams, ThresholdStrategy};
