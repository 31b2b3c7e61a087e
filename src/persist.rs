//! Reading and writing weight tensors.
//!
//! The file layout is big-endian throughout:
//!
//! ```text
//! i32                 number of weight layers n
//! n × (i32, i32)      rows and columns of each layer
//! f64 ...             every weight, layer after layer, row-major
//! ```

use crate::error::{Error, Result};
use crate::matrix::Mat;

use std::convert::TryFrom;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Writes `weights` to `writer`.
pub fn write_weights<W: Write>(mut writer: W, weights: &[Mat]) -> Result<()> {
    write_len(&mut writer, weights.len())?;
    for w in weights {
        write_len(&mut writer, w.rows())?;
        write_len(&mut writer, w.cols())?;
    }
    for w in weights {
        for value in w.as_slice() {
            writer.write_all(&value.to_be_bytes())?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Reads a weight tensor from `reader`.
///
/// Only the layout is checked here; whether the layers chain is up to
/// [`Network::new`](crate::feed_forward::Network::new).
pub fn read_weights<R: Read>(mut reader: R) -> Result<Vec<Mat>> {
    let layers = read_len(&mut reader)?;
    let mut shapes = Vec::new();
    for _ in 0..layers {
        let rows = read_len(&mut reader)?;
        let cols = read_len(&mut reader)?;
        shapes.push((rows, cols));
    }

    let mut weights = Vec::with_capacity(shapes.len());
    for (rows, cols) in shapes {
        let len = area(rows, cols)?;
        // The header is untrusted; let a short read fail before a huge alloc.
        let mut data = Vec::with_capacity(len.min(1 << 16));
        for _ in 0..len {
            let mut buf = [0; 8];
            reader.read_exact(&mut buf)?;
            data.push(f64::from_be_bytes(buf));
        }
        weights.push(Mat::from_vec(rows, cols, data));
    }
    Ok(weights)
}

/// Writes `weights` to the file at `path`, replacing it.
pub fn save<P: AsRef<Path>>(path: P, weights: &[Mat]) -> Result<()> {
    write_weights(BufWriter::new(File::create(path)?), weights)
}

/// Reads the weights stored in the file at `path`.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Mat>> {
    read_weights(BufReader::new(File::open(path)?))
}

fn write_len<W: Write>(writer: &mut W, len: usize) -> Result<()> {
    let len = i32::try_from(len).map_err(|_| {
        io::Error::new(io::ErrorKind::InvalidInput, "dimension exceeds i32")
    })?;
    writer.write_all(&len.to_be_bytes())?;
    Ok(())
}

/// Counts the weights of a `rows × cols` layer, which may not fit a `usize`
/// on narrow targets.
fn area(rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols).ok_or(Error::InvalidDimension {
        value: i32::try_from(cols).unwrap_or(i32::MAX),
    })
}

fn read_len<R: Read>(reader: &mut R) -> Result<usize> {
    let mut buf = [0; 4];
    reader.read_exact(&mut buf)?;
    let value = i32::from_be_bytes(buf);
    if value <= 0 {
        return Err(Error::InvalidDimension { value });
    }
    Ok(value as usize)
}
