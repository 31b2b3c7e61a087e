//! Error types.

use std::io;
use thiserror::Error;

/// Everything that can go wrong while building, loading or feeding a
/// network.
#[derive(Debug, Error)]
pub enum Error {
    /// The network has no weight layers.
    #[error("a network needs at least one weight layer")]
    NoLayers,
    /// A weight matrix has no rows or no columns.
    #[error("weight layer {layer} has a zero dimension")]
    EmptyLayer { layer: usize },
    /// The columns of one weight layer do not match the rows of the next.
    #[error("weight layer {layer} expects {expected} inputs, found {found}")]
    LayerMismatch {
        layer: usize,
        expected: usize,
        found: usize,
    },
    /// Rows of a matrix have different lengths.
    #[error("matrix row {row} has {found} columns, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A flat matrix array does not hold `rows * cols` values.
    #[error("a {rows}x{cols} matrix cannot hold {found} values")]
    MatrixSize {
        rows: usize,
        cols: usize,
        found: usize,
    },
    /// No training examples were provided.
    #[error("the training set is empty")]
    EmptyTrainingSet,
    /// The number of inputs and targets differ.
    #[error("{inputs} training inputs but {targets} targets")]
    ExampleCount { inputs: usize, targets: usize },
    /// A training input does not match the width of the input layer.
    #[error("training input {example} has {found} values, expected {expected}")]
    InputWidth {
        example: usize,
        expected: usize,
        found: usize,
    },
    /// A training target does not match the width of the output layer.
    #[error("training target {example} has {found} values, expected {expected}")]
    TargetWidth {
        example: usize,
        expected: usize,
        found: usize,
    },
    /// A weight file holds a count or dimension that is not positive.
    #[error("invalid dimension {value} in weight file")]
    InvalidDimension { value: i32 },
    /// An image has no pixels.
    #[error("the image is empty")]
    EmptyImage,
    /// No object could be found in an image.
    #[error("the image holds no object")]
    BlankImage,
    /// A flat pixel array does not hold `rows * cols` pixels.
    #[error("a {rows}x{cols} image cannot hold {found} pixels")]
    ImageSize {
        rows: usize,
        cols: usize,
        found: usize,
    },
    /// Rows of an image have different lengths.
    #[error("image row {row} has {found} pixels, expected {expected}")]
    RaggedImage {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
