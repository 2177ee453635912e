use std::io;

/// Errors surfaced to the top-level benchmark invocation.
#[derive(thiserror::Error, Debug)]
pub enum BenchError {
    /// The image source could not supply a usable buffer.
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("invalid buffer: {rows}x{cols} (stride {stride}) needs {needed} samples, got {actual}")]
    InvalidBuffer {
        rows: usize,
        cols: usize,
        stride: usize,
        needed: usize,
        actual: usize,
    },
    #[error("strategy {label} disagrees with the threshold contract at ({row}, {col})")]
    Mismatch { label: String, row: usize, col: usize },
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
