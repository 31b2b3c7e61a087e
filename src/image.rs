//! Turning a picture of a letter into network input.
//!
//! Images are plain grids of 24-bit pixel values; decoding them from a file
//! format is left to the caller. The pipeline centers the drawn object,
//! finds its bounding box, scales that box to a fixed resolution and
//! normalizes the pixels to `[0, 1]`.

use crate::error::{Error, Result};

/// The largest 24-bit pixel value.
pub const MAX_PIXEL_VALUE: u32 = 16_777_215;

/// The value of an empty pixel.
pub const BLANK: u32 = 0;

/// A grid of pixels, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    rows: usize,
    cols: usize,
    pixels: Vec<u32>,
}

/// The inclusive rows and columns an object spans.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub top: usize,
    pub bottom: usize,
    pub left: usize,
    pub right: usize,
}

impl Image {
    /// Wraps a row-major `pixels` array, which must hold `rows * cols`
    /// pixels.
    pub fn new(rows: usize, cols: usize, pixels: Vec<u32>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::EmptyImage);
        }
        if rows.checked_mul(cols) != Some(pixels.len()) {
            return Err(Error::ImageSize {
                rows,
                cols,
                found: pixels.len(),
            });
        }
        Ok(Image { rows, cols, pixels })
    }

    /// Builds an image out of nested rows, rejecting ragged input.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self>
    where
        R: AsRef<[u32]>,
    {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut pixels = Vec::with_capacity(rows.len() * cols);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != cols {
                return Err(Error::RaggedImage {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            pixels.extend_from_slice(values);
        }
        Image::new(rows.len(), cols, pixels)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.pixels[row * self.cols + col]
    }

    fn blank(rows: usize, cols: usize) -> Self {
        Image {
            rows,
            cols,
            pixels: vec![BLANK; rows * cols],
        }
    }

    /// Returns the pixel-weighted mean position `(row, col)`, rounded down,
    /// or `None` if the image is blank.
    pub fn center_of_mass(&self) -> Option<(usize, usize)> {
        let (mut row_moment, mut col_moment, mut mass) = (0u128, 0u128, 0u128);
        for row in 0..self.rows {
            for col in 0..self.cols {
                let p = u128::from(self.get(row, col));
                row_moment += row as u128 * p;
                col_moment += col as u128 * p;
                mass += p;
            }
        }
        if mass == 0 {
            return None;
        }
        Some(((row_moment / mass) as usize, (col_moment / mass) as usize))
    }

    /// Moves every pixel by `(rows, cols)`; pixels pushed out of the frame are
    /// lost and vacated ones become blank.
    pub fn shift(&self, rows: isize, cols: isize) -> Image {
        let mut shifted = Image::blank(self.rows, self.cols);
        for row in 0..self.rows {
            for col in 0..self.cols {
                let p = self.get(row, col);
                if p == BLANK {
                    continue;
                }
                let to_row = row as isize + rows;
                let to_col = col as isize + cols;
                if (0..self.rows as isize).contains(&to_row)
                    && (0..self.cols as isize).contains(&to_col)
                {
                    shifted.pixels[to_row as usize * self.cols + to_col as usize] = p;
                }
            }
        }
        shifted
    }

    /// Moves the center of mass onto the middle of the frame.
    ///
    /// A blank image is returned unchanged.
    pub fn centered(&self) -> Image {
        match self.center_of_mass() {
            None => self.clone(),
            Some((row, col)) => {
                let mid_row = (self.rows - 1) / 2;
                let mid_col = (self.cols - 1) / 2;
                self.shift(
                    mid_row as isize - row as isize,
                    mid_col as isize - col as isize,
                )
            }
        }
    }

    /// Locates the object in the image.
    ///
    /// An edge is the first row (column) holding at least `min_pixels` pixels
    /// that are `>= threshold`; the object ends right before the next row
    /// (column) that does not, or at the border of the frame. Returns `None`
    /// if no row or no column qualifies.
    pub fn bounds(&self, min_pixels: usize, threshold: u32) -> Option<Bounds> {
        let row_counts = (0..self.rows)
            .map(|row| (0..self.cols).filter(|&col| self.get(row, col) >= threshold).count());
        let (top, bottom) = first_run(row_counts, min_pixels)?;

        let col_counts = (0..self.cols)
            .map(|col| (0..self.rows).filter(|&row| self.get(row, col) >= threshold).count());
        let (left, right) = first_run(col_counts, min_pixels)?;

        Some(Bounds {
            top,
            bottom,
            left,
            right,
        })
    }

    /// Resamples the region inside `bounds` to `width × height` pixels.
    ///
    /// The region is cut into a grid by evenly spaced dividers; each output
    /// pixel is the average, rounded half up, of the source pixels between two
    /// consecutive dividers, both ends included.
    pub fn scale(&self, bounds: &Bounds, width: usize, height: usize) -> Image {
        assert!(width > 0 && height > 0);
        assert!(bounds.bottom < self.rows && bounds.right < self.cols);
        let cols = dividers(bounds.left, bounds.right, width);
        let rows = dividers(bounds.top, bounds.bottom, height);

        let mut scaled = Image::blank(height, width);
        for (i, col) in cols.windows(2).enumerate() {
            for (j, row) in rows.windows(2).enumerate() {
                scaled.pixels[j * width + i] = self.average(row[0], row[1], col[0], col[1]);
            }
        }
        scaled
    }

    /// Lays the rows end to end.
    pub fn flatten(&self) -> Vec<u32> {
        self.pixels.clone()
    }

    /// Flattens the image and maps every pixel onto `[0, 1]`.
    pub fn normalized(&self) -> Vec<f64> {
        self.pixels
            .iter()
            .map(|&p| f64::from(p) / f64::from(MAX_PIXEL_VALUE))
            .collect()
    }

    /// Runs the whole pipeline, producing `width * height` network inputs.
    pub fn to_input(
        &self,
        width: usize,
        height: usize,
        min_pixels: usize,
        threshold: u32,
    ) -> Result<Vec<f64>> {
        let centered = self.centered();
        let bounds = centered
            .bounds(min_pixels, threshold)
            .ok_or(Error::BlankImage)?;
        Ok(centered.scale(&bounds, width, height).normalized())
    }

    /// Averages the pixels in rows `top..=bottom` and columns `left..=right`.
    fn average(&self, top: usize, bottom: usize, left: usize, right: usize) -> u32 {
        let mut sum = 0u64;
        let mut count = 0u64;
        for row in top..=bottom {
            for col in left..=right {
                sum += u64::from(self.get(row, col));
                count += 1;
            }
        }
        ((sum + count / 2) / count) as u32
    }
}

/// Finds the first run of counts reaching `min`, returning its inclusive
/// start and end.
fn first_run<I>(counts: I, min: usize) -> Option<(usize, usize)>
where
    I: Iterator<Item = usize>,
{
    let mut start = None;
    let mut last = 0;
    for (i, count) in counts.enumerate() {
        last = i;
        match start {
            None if count >= min => start = Some(i),
            Some(s) if count < min => return Some((s, i - 1)),
            _ => {}
        }
    }
    start.map(|s| (s, last))
}

/// Splits `first..=last` into `parts` spans, returning the `parts + 1`
/// dividers between them.
fn dividers(first: usize, last: usize, parts: usize) -> Vec<usize> {
    let step = (last - first) as f64 / parts as f64;
    (0..parts)
        .map(|i| first + (i as f64 * step).round() as usize)
        .chain(Some(last))
        .collect()
}
