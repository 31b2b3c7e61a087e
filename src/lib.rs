//! A multilayer perceptron trained by backpropagation, together with the
//! plumbing needed to recognize letters with it: an image pipeline that turns
//! pictures into input vectors and a reader/writer for trained weights.

#[macro_use]
extern crate serde_derive;

pub mod activator;
pub mod error;
pub mod feed_forward;
pub mod image;
pub mod layer;
pub mod matrix;
pub mod persist;
pub mod trainer;

mod utils;

pub use crate::error::{Error, Result};
