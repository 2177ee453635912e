use crate::error::BenchError;
use image::GrayImage;

/// A 2-D grid of 8-bit grayscale samples stored row-major.
///
/// Rows start `stride` samples apart. When `stride == cols` the rows are
/// stored back-to-back and the whole grid can be walked as one linear run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    rows: usize,
    cols: usize,
    stride: usize,
    data: Vec<u8>,
}

/// Number of backing samples required to hold `rows` rows of `cols` samples
/// spaced `stride` apart, or `None` if that overflows `usize`.
fn required_len(rows: usize, cols: usize, stride: usize) -> Option<usize> {
    if rows == 0 || cols == 0 {
        Some(0)
    } else {
        (rows - 1).checked_mul(stride)?.checked_add(cols)
    }
}

impl PixelBuffer {
    /// Zero-filled contiguous buffer.
    ///
    /// Panics if `rows * cols` overflows `usize`, the same way `Vec` panics on
    /// capacity overflow.
    pub fn new(rows: usize, cols: usize) -> Self {
        let len = match rows.checked_mul(cols) {
            Some(len) => len,
            None => panic!("PixelBuffer::new: {}x{} overflows usize", rows, cols),
        };

        Self {
            rows,
            cols,
            stride: cols,
            data: vec![0; len],
        }
    }

    /// Contiguous buffer over `data`, which must hold exactly `rows * cols` samples.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<u8>) -> Result<Self, BenchError> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(BenchError::InvalidBuffer {
                rows,
                cols,
                stride: cols,
                needed: rows.saturating_mul(cols),
                actual: data.len(),
            });
        }

        Ok(Self {
            rows,
            cols,
            stride: cols,
            data,
        })
    }

    /// Buffer whose rows start `stride` samples apart. Samples between the
    /// end of one row and the start of the next are padding and never read.
    pub fn with_stride(
        rows: usize,
        cols: usize,
        stride: usize,
        data: Vec<u8>,
    ) -> Result<Self, BenchError> {
        let needed = required_len(rows, cols, stride);
        if stride < cols || needed.map_or(true, |needed| data.len() < needed) {
            return Err(BenchError::InvalidBuffer {
                rows,
                cols,
                stride,
                needed: needed.unwrap_or(usize::MAX),
                actual: data.len(),
            });
        }

        Ok(Self {
            rows,
            cols,
            stride,
            data,
        })
    }

    /// Fresh zeroed contiguous buffer with the same extents as `self`.
    pub fn same_extents(&self) -> Self {
        Self::new(self.rows, self.cols)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Number of logical samples (`rows * cols`), padding excluded.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when no padding separates consecutive rows.
    #[inline]
    pub fn is_contiguous(&self) -> bool {
        self.stride == self.cols || self.rows <= 1 || self.cols == 0
    }

    /// Sample at `(row, col)`. Panics when the coordinate lands outside the backing storage.
    #[inline(always)]
    pub fn at(&self, row: usize, col: usize) -> u8 {
        self.data[row * self.stride + col]
    }

    #[inline(always)]
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        self.data[row * self.stride + col] = value;
    }

    /// Bounds-checked read, `None` outside the logical grid.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.rows || col >= self.cols {
            return None;
        }

        self.data.get(row * self.stride + col).copied()
    }

    #[inline]
    pub fn row(&self, row: usize) -> &[u8] {
        let start = row * self.stride;
        &self.data[start..start + self.cols]
    }

    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [u8] {
        let start = row * self.stride;
        &mut self.data[start..start + self.cols]
    }

    /// The whole grid as one run of `rows * cols` samples, if contiguous.
    pub fn as_flat(&self) -> Option<&[u8]> {
        self.is_contiguous().then(|| &self.data[..self.len()])
    }

    pub fn as_flat_mut(&mut self) -> Option<&mut [u8]> {
        let len = self.len();
        if self.is_contiguous() {
            Some(&mut self.data[..len])
        } else {
            None
        }
    }

    /// Logical samples in row-major order, skipping any padding.
    pub fn samples(&self) -> impl Iterator<Item = u8> + '_ {
        (0..self.rows).flat_map(move |r| self.row(r).iter().copied())
    }

    /// Tightly packed copy of this buffer.
    pub fn to_contiguous(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            stride: self.cols,
            data: self.samples().collect(),
        }
    }

    pub fn from_gray_image(image: &GrayImage) -> Self {
        Self {
            rows: image.height() as usize,
            cols: image.width() as usize,
            stride: image.width() as usize,
            data: image.as_raw().clone(),
        }
    }

    /// Tightly packed `GrayImage` copy. The `image` crate limits each side to `u32::MAX`.
    pub fn to_gray_image(&self) -> Result<GrayImage, BenchError> {
        let too_large = || BenchError::InvalidBuffer {
            rows: self.rows,
            cols: self.cols,
            stride: self.stride,
            needed: self.len(),
            actual: self.data.len(),
        };
        let width = u32::try_from(self.cols).map_err(|_| too_large())?;
        let height = u32::try_from(self.rows).map_err(|_| too_large())?;

        let mut image = GrayImage::new(width, height);
        match self.as_flat() {
            Some(flat) => image.copy_from_slice(flat),
            None => {
                for (dst, src) in image.chunks_exact_mut(self.cols).zip(0..self.rows) {
                    dst.copy_from_slice(self.row(src));
                }
            }
        }
        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn padded() -> PixelBuffer {
        // 2x3 grid with one padding sample per row
        PixelBuffer::with_stride(2, 3, 4, vec![1, 2, 3, 99, 4, 5, 6, 99]).unwrap()
    }

    #[test]
    fn from_vec_rejects_wrong_length() {
        assert!(PixelBuffer::from_vec(2, 2, vec![0; 3]).is_err());
        assert!(PixelBuffer::from_vec(2, 2, vec![0; 4]).is_ok());
    }

    #[test]
    fn with_stride_validates_layout() {
        assert!(PixelBuffer::with_stride(2, 3, 2, vec![0; 8]).is_err());
        assert!(PixelBuffer::with_stride(2, 3, 4, vec![0; 6]).is_err());
        // last row needs no trailing padding
        assert!(PixelBuffer::with_stride(2, 3, 4, vec![0; 7]).is_ok());
    }

    #[test]
    fn contiguity_query() {
        assert!(PixelBuffer::new(4, 4).is_contiguous());
        assert!(!padded().is_contiguous());
        let single_row = PixelBuffer::with_stride(1, 3, 8, vec![0; 3]).unwrap();
        assert!(single_row.is_contiguous());
        assert_eq!(single_row.as_flat().map(<[u8]>::len), Some(3));
    }

    #[test]
    fn strided_rows_skip_padding() {
        let buf = padded();
        assert_eq!(buf.row(0), &[1, 2, 3]);
        assert_eq!(buf.row(1), &[4, 5, 6]);
        assert_eq!(buf.at(1, 2), 6);
        assert!(buf.as_flat().is_none());
        assert_eq!(buf.samples().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6]);

        let packed = buf.to_contiguous();
        assert!(packed.is_contiguous());
        assert_eq!(packed.as_flat(), Some(&[1, 2, 3, 4, 5, 6][..]));
    }

    #[test]
    fn checked_get() {
        let buf = padded();
        assert_eq!(buf.get(0, 0), Some(1));
        assert_eq!(buf.get(0, 3), None);
        assert_eq!(buf.get(2, 0), None);
    }

    #[test]
    fn same_extents_is_fresh_and_contiguous() {
        let out = padded().same_extents();
        assert_eq!((out.rows(), out.cols(), out.stride()), (2, 3, 3));
        assert!(out.samples().all(|v| v == 0));
    }

    #[test]
    fn gray_image_conversion() {
        let img = padded().to_gray_image().unwrap();
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.get_pixel(2, 1).0, [6]);

        let back = PixelBuffer::from_gray_image(&img);
        assert_eq!(back, padded().to_contiguous());
    }

    #[test]
    fn overflowing_extents_are_rejected() {
        let huge = (1usize << (usize::BITS - 2)) + 1;
        assert!(matches!(
            PixelBuffer::with_stride(huge, 3, 4, vec![1, 2, 3, 4]),
            Err(BenchError::InvalidBuffer { .. })
        ));
        assert!(matches!(
            PixelBuffer::with_stride(2, 3, usize::MAX, vec![0; 8]),
            Err(BenchError::InvalidBuffer { .. })
        ));
        assert!(matches!(
            PixelBuffer::from_vec(huge, 4, vec![0; 4]),
            Err(BenchError::InvalidBuffer { .. })
        ));
    }

    #[test]
    #[should_panic(expected = "overflows usize")]
    fn new_panics_on_overflowing_extents() {
        PixelBuffer::new(usize::MAX, 2);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn gray_image_side_limit() {
        let wide = PixelBuffer::new(0, u32::MAX as usize + 1);
        assert!(matches!(
            wide.to_gray_image(),
            Err(BenchError::InvalidBuffer { .. })
        ));
        assert!(PixelBuffer::new(0, u32::MAX as usize).to_gray_image().is_ok());
    }
}
