//! Forward activation of a single weight layer.

use crate::activator::Activator;
use crate::matrix::Mat;

/// Computes the pre-activation sum feeding `node` of the upper layer.
///
/// The terms are accumulated in ascending input order starting from zero, so
/// the forward and backward passes produce bit-identical sums.
#[inline]
pub fn weighted_sum(inputs: &[f64], weights: &Mat, node: usize) -> f64 {
    debug_assert_eq!(inputs.len(), weights.rows());
    let mut sum = 0.0;
    for (j, x) in inputs.iter().enumerate() {
        sum += x * weights[(j, node)];
    }
    sum
}

/// Feeds `inputs` forward through one layer of `weights`.
///
/// Each output node `i` holds `f(Σ_j inputs[j] * weights[j][i])`.
pub fn activate(activator: Activator, inputs: &[f64], weights: &Mat) -> Vec<f64> {
    assert_eq!(inputs.len(), weights.rows());
    (0..weights.cols())
        .map(|i| activator.f(weighted_sum(inputs, weights, i)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_sum_multiplies_by_weight_column() {
        let w = Mat::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();
        let x = [1.0, 0.5, 0.25];
        assert_eq!(weighted_sum(&x, &w, 0), 1.0 + 1.5 + 1.25);
        assert_eq!(weighted_sum(&x, &w, 1), 2.0 + 2.0 + 1.5);
    }

    #[test]
    fn activate_applies_threshold_to_every_node() {
        let w = Mat::from_rows(&[[0.0, 1.0], [0.0, -1.0]]).unwrap();
        let out = activate(Activator::Sigmoid, &[2.0, 2.0], &w);
        assert_eq!(out, [0.5, 0.5]);
    }

    #[test]
    fn activate_maps_to_column_count() {
        let w = Mat::zeros(4, 3);
        assert_eq!(activate(Activator::TanH, &[1.0; 4], &w), [0.0; 3]);
    }

    #[test]
    #[should_panic]
    fn activate_rejects_wrong_input_width() {
        activate(Activator::Sigmoid, &[1.0; 3], &Mat::zeros(4, 3));
    }
}
