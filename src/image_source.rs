use crate::error::BenchError;
use crate::pixel_buffer::PixelBuffer;
use log::info;
use std::path::{Path, PathBuf};

/// Supplies the grayscale buffer every strategy runs against.
pub trait ImageSource {
    fn acquire(&self) -> Result<PixelBuffer, BenchError>;
}

/// Decodes an image file and converts it to 8-bit luma.
pub struct FileImageSource {
    path: PathBuf,
}

impl FileImageSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ImageSource for FileImageSource {
    fn acquire(&self) -> Result<PixelBuffer, BenchError> {
        let metadata = std::fs::metadata(&self.path).map_err(|e| {
            BenchError::Configuration(format!("cannot read {}: {}", self.path.display(), e))
        })?;

        if metadata.len() == 0 {
            return Err(BenchError::Configuration(format!(
                "{} is empty",
                self.path.display()
            )));
        }

        let decoded = image::open(&self.path).map_err(|e| {
            BenchError::Configuration(format!("cannot decode {}: {}", self.path.display(), e))
        })?;

        let gray = decoded.to_luma8();
        info!(
            "Loaded {} ({}x{}, {:?}) as grayscale",
            self.path.display(),
            gray.width(),
            gray.height(),
            decoded.color()
        );

        Ok(PixelBuffer::from_gray_image(&gray))
    }
}

/// Deterministic diagonal ramp, optionally with padding after every row.
pub struct SyntheticImageSource {
    pub rows: usize,
    pub cols: usize,
    /// Extra samples between rows; non-zero yields a non-contiguous buffer
    pub padding: usize,
}

impl SyntheticImageSource {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            padding: 0,
        }
    }

    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }
}

impl ImageSource for SyntheticImageSource {
    fn acquire(&self) -> Result<PixelBuffer, BenchError> {
        let len = self
            .cols
            .checked_add(self.padding)
            .and_then(|stride| Some((stride, self.rows.checked_mul(stride)?)));
        let Some((stride, len)) = len else {
            return Err(BenchError::Configuration(format!(
                "synthetic buffer {}x{} with padding {} overflows usize",
                self.rows, self.cols, self.padding
            )));
        };
        let mut data = vec![0u8; len];

        for (row, line) in data.chunks_exact_mut(stride.max(1)).enumerate() {
            for (col, sample) in line[..self.cols].iter_mut().enumerate() {
                *sample = ((row % 256) * 3 + (col % 256) * 5) as u8;
            }
        }

        PixelBuffer::with_stride(self.rows, self.cols, stride, data)
    }
}

/// Parse `ROWSxCOLS` (e.g. `512x512`) for the synthetic source.
pub fn parse_extents(extents: &str) -> Result<(usize, usize), BenchError> {
    let (rows, cols) = extents
        .split_once(['x', 'X'])
        .ok_or_else(|| BenchError::Configuration(format!("expected ROWSxCOLS, got {:?}", extents)))?;

    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|e| BenchError::Configuration(format!("bad extent {:?}: {}", part, e)))
    };

    Ok((parse(rows)?, parse(cols)?))
}
