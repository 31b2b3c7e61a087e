use crate::error::{Error, Result};
use crate::utils::ZeroOut;

use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use std::convert::TryFrom;
use std::ops::{AddAssign, Index, IndexMut};

/// A dense weight matrix.
///
/// Row `j` holds the weights leaving node `j` of the lower layer, column `i`
/// the weights entering node `i` of the upper layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMat")]
pub struct Mat {
    rows: usize,
    cols: usize,
    data: Vec<f64>, // row-major array
}

/// The serialized form of [`Mat`], checked before it becomes one.
#[derive(Deserialize)]
struct RawMat {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl TryFrom<RawMat> for Mat {
    type Error = Error;

    fn try_from(raw: RawMat) -> Result<Self> {
        Mat::new(raw.rows, raw.cols, raw.data)
    }
}

impl Mat {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Mat {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Fills a new matrix with values drawn uniformly from `[0, 1)`.
    pub fn random<R>(rng: &mut R, rows: usize, cols: usize) -> Self
    where
        R: Rng + ?Sized,
    {
        let unit = Uniform::new(0.0, 1.0);
        Mat {
            rows,
            cols,
            data: (0..rows * cols).map(|_| unit.sample(&mut *rng)).collect(),
        }
    }

    /// Wraps a row-major `data` array, which must hold `rows * cols` values.
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(Error::MatrixSize {
                rows,
                cols,
                found: data.len(),
            });
        }
        Ok(Mat { rows, cols, data })
    }

    /// Wraps a row-major `data` array.
    ///
    /// Panics if `data` does not hold exactly `rows * cols` values.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        assert_eq!(data.len(), rows * cols);
        Mat { rows, cols, data }
    }

    /// Builds a matrix out of nested rows, rejecting ragged input.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self>
    where
        R: AsRef<[f64]>,
    {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != cols {
                return Err(Error::RaggedMatrix {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            data.extend_from_slice(values);
        }
        Ok(Mat {
            rows: rows.len(),
            cols,
            data,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the weights leaving node `row`.
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Returns every weight in row-major order.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

impl Index<(usize, usize)> for Mat {
    type Output = f64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        debug_assert!(row < self.rows && col < self.cols);
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Mat {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        debug_assert!(row < self.rows && col < self.cols);
        &mut self.data[row * self.cols + col]
    }
}

impl<'a> AddAssign<&'a Mat> for Mat {
    fn add_assign(&mut self, other: &Mat) {
        assert_eq!((self.rows, self.cols), (other.rows, other.cols));
        for (l, r) in self.data.iter_mut().zip(other.data.iter()) {
            *l += *r;
        }
    }
}

impl ZeroOut for Mat {
    fn zero_out(&mut self) {
        self.data.zero_out();
    }
}
