//! A [Feedforward neural network]
//! (https://en.wikipedia.org/wiki/Feedforward_neural_network) trained with
//! backpropagation.
//!
//! Two types share the work. A [`Network`] owns nothing but its weights and
//! can only be evaluated; a [`TrainableNetwork`] additionally owns a training
//! set plus the scratch buffers needed by the backward pass.
//!
//! # Example
//!
//! Evaluating a network built from known weights:
//!
//! ```
//! # use perceptron::feed_forward::*;
//! # use perceptron::matrix::Mat;
//! let weights = vec![
//!     Mat::from_rows(&[[1.0, -1.0], [1.0, -1.0]]).unwrap(),
//!     Mat::from_rows(&[[2.0], [-2.0]]).unwrap(),
//! ];
//! let network = Network::new(weights).unwrap();
//! assert_eq!(network.layer_widths(), [2, 2, 1]);
//!
//! let layers = network.evaluate_all_layers(&[1.0, 0.0]);
//! assert_eq!(layers[0], [1.0, 0.0]);
//! assert_eq!(network.evaluate(&[1.0, 0.0]), layers[2]);
//! assert!(layers[2][0] > 0.5);
//! ```

use crate::activator::Activator;
use crate::error::{Error, Result};
use crate::layer::{activate, weighted_sum};
use crate::matrix::Mat;
use crate::trainer::Trainable;
use crate::utils::{Ends, ZeroOut};

use itertools::{izip, Itertools};
use rand::Rng;
use std::convert::TryFrom;

/// A feedforward network that can only be evaluated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawNetwork")]
pub struct Network {
    /// The threshold function applied at every non-input node.
    activator: Activator,
    /// One matrix per pair of adjacent layers, input layer first.
    weights: Vec<Mat>,
}

/// The serialized form of [`Network`], validated like [`Network::new`].
#[derive(Deserialize)]
struct RawNetwork {
    activator: Activator,
    weights: Vec<Mat>,
}

impl TryFrom<RawNetwork> for Network {
    type Error = Error;

    fn try_from(raw: RawNetwork) -> Result<Self> {
        Ok(Network::new(raw.weights)?.activator(raw.activator))
    }
}

impl Network {
    /// Wraps pre-trained `weights`.
    ///
    /// Fails unless there is at least one matrix, no matrix has a zero
    /// dimension, and the columns of each matrix match the rows of the next.
    pub fn new(weights: Vec<Mat>) -> Result<Self> {
        let shapes = weights.iter().map(|w| (w.rows(), w.cols())).collect_vec();
        validate_shapes(&shapes)?;
        Ok(Network {
            activator: Activator::default(),
            weights,
        })
    }

    /// Sets the threshold function used by the network.
    pub fn activator(mut self, activator: Activator) -> Self {
        self.activator = activator;
        self
    }

    /// Returns the size of the input layer to the network.
    pub fn input_len(&self) -> usize {
        self.weights.front().rows()
    }

    /// Returns the size of the output layer from the network.
    pub fn output_len(&self) -> usize {
        self.weights.back().cols()
    }

    /// Returns the number of nodes in each layer, input layer first.
    pub fn layer_widths(&self) -> Vec<usize> {
        self.weights
            .iter()
            .map(Mat::rows)
            .chain(Some(self.output_len()))
            .collect()
    }

    /// Returns the current weight tensor.
    pub fn weights(&self) -> &[Mat] {
        &self.weights
    }

    /// Surrenders the weight tensor, e.g. for persisting it.
    pub fn into_weights(self) -> Vec<Mat> {
        self.weights
    }

    /// Feeds the provided `input` through the network, returning the output
    /// layer.
    pub fn evaluate(&self, input: &[f64]) -> Vec<f64> {
        assert_eq!(input.len(), self.input_len());
        let mut layer = input.to_vec();
        for weights in &self.weights {
            layer = activate(self.activator, &layer, weights);
        }
        layer
    }

    /// Feeds the provided `input` through the network, returning the activated
    /// values for each layer, starting with `input` itself.
    pub fn evaluate_all_layers(&self, input: &[f64]) -> Vec<Vec<f64>> {
        assert_eq!(input.len(), self.input_len());
        let mut layers = Vec::with_capacity(self.weights.len() + 1);
        layers.push(input.to_vec());
        for weights in &self.weights {
            let next = activate(self.activator, layers.back(), weights);
            layers.push(next);
        }
        layers
    }
}

/// A feedforward network bound to a training set.
///
/// Besides the weights this owns the per-node gradient signals ("psi") and
/// the per-example weight deltas. Both are cleared before every example and
/// never read across examples.
#[derive(Debug)]
pub struct TrainableNetwork {
    network: Network,
    inputs: Vec<Vec<f64>>,
    targets: Vec<Vec<f64>>,
    psi: Vec<Vec<f64>>,
    deltas: Vec<Mat>,
}

impl TrainableNetwork {
    /// Creates a new, untrained network with weights drawn from the thread
    /// local generator.
    ///
    /// Arguments:
    ///
    ///  * `inputs` - one input vector per training example.
    ///  * `targets` - the expected output for each input, by position.
    ///  * `shapes` - the `(rows, cols)` of each weight matrix, input layer
    ///               first.
    pub fn new(
        inputs: Vec<Vec<f64>>,
        targets: Vec<Vec<f64>>,
        shapes: &[(usize, usize)],
    ) -> Result<Self> {
        Self::with_rng(inputs, targets, shapes, &mut rand::thread_rng())
    }

    /// Like [`TrainableNetwork::new`], drawing the initial weights from `rng`.
    ///
    /// Everything is validated before a single weight is drawn.
    pub fn with_rng<R>(
        inputs: Vec<Vec<f64>>,
        targets: Vec<Vec<f64>>,
        shapes: &[(usize, usize)],
        rng: &mut R,
    ) -> Result<Self>
    where
        R: Rng + ?Sized,
    {
        validate_shapes(shapes)?;
        validate_examples(&inputs, &targets, shapes)?;

        let weights = shapes
            .iter()
            .map(|&(rows, cols)| Mat::random(&mut *rng, rows, cols))
            .collect();
        let deltas = shapes
            .iter()
            .map(|&(rows, cols)| Mat::zeros(rows, cols))
            .collect();
        let psi = shapes
            .iter()
            .map(|&(rows, _)| vec![0.0; rows])
            .chain(Some(vec![0.0; shapes.back().1]))
            .collect();

        Ok(TrainableNetwork {
            network: Network {
                activator: Activator::default(),
                weights,
            },
            inputs,
            targets,
            psi,
            deltas,
        })
    }

    /// Sets the threshold function used by the network.
    pub fn activator(mut self, activator: Activator) -> Self {
        self.network.activator = activator;
        self
    }

    /// Returns the network being trained.
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Finishes training, keeping only the weights.
    pub fn into_network(self) -> Network {
        self.network
    }

    /// Returns the number of training examples.
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// Returns `true` if there are no training examples.
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Returns the gradient signals computed for the last example.
    pub fn psi(&self) -> &[Vec<f64>] {
        &self.psi
    }

    /// Returns the weight deltas computed for the last example.
    pub fn deltas(&self) -> &[Mat] {
        &self.deltas
    }

    /// Computes `E = 0.5 * Σ_i Σ_k (target[i][k] - output[i][k])²` over the
    /// whole training set, from scratch.
    pub fn error(&self) -> f64 {
        let mut error = 0.0;
        for (input, target) in self.inputs.iter().zip(&self.targets) {
            let layers = self.network.evaluate_all_layers(input);
            error += squared_error(layers.back(), target);
        }
        0.5 * error
    }

    /// Fills the psi and delta buffers for training example `example`.
    ///
    /// The weights are left untouched; see [`TrainableNetwork::apply_update`].
    pub fn compute_update(&mut self, example: usize, learning_rate: f64) {
        assert!(example < self.len());
        self.psi.zero_out();
        self.deltas.zero_out();

        let Network {
            activator,
            ref weights,
        } = self.network;
        let layers = self.network.evaluate_all_layers(&self.inputs[example]);
        let last = layers.len() - 1;

        // Output layer. The weighted sum is recomputed from the penultimate
        // layer instead of being kept from the forward pass.
        let target = &self.targets[example];
        for (i, psi) in self.psi.back_mut().iter_mut().enumerate() {
            let sum = weighted_sum(&layers[last - 1], weights.back(), i);
            *psi = (target[i] - layers[last][i]) * activator.fprime(sum);
        }

        // Hidden layers, walking back towards (but excluding) the input.
        for layer in (1..last).rev() {
            let (lower, upper) = self.psi.split_at_mut(layer + 1);
            let next = &upper[0];
            for (curr, psi) in lower[layer].iter_mut().enumerate() {
                let sum = weighted_sum(&layers[layer - 1], &weights[layer - 1], curr);
                let psi_sum: f64 = izip!(next, weights[layer].row(curr))
                    .fold(0.0, |acc, (p, w)| acc + p * w);
                *psi = activator.fprime(sum) * psi_sum;
            }
        }

        for (layer, delta) in self.deltas.iter_mut().enumerate() {
            let psi = &self.psi[layer + 1];
            for (j, a) in layers[layer].iter().enumerate() {
                for (i, p) in psi.iter().enumerate() {
                    delta[(j, i)] = learning_rate * a * p;
                }
            }
        }
    }

    /// Adds the deltas of the last [`TrainableNetwork::compute_update`] into
    /// the weights.
    pub fn apply_update(&mut self) {
        for (weights, delta) in self.network.weights.iter_mut().zip(&self.deltas) {
            *weights += delta;
        }
    }

    /// Updates the weights once per example, in training set order.
    pub fn sweep(&mut self, learning_rate: f64) {
        for example in 0..self.len() {
            self.compute_update(example, learning_rate);
            self.apply_update();
        }
    }
}

impl Trainable for TrainableNetwork {
    fn error(&self) -> f64 {
        TrainableNetwork::error(self)
    }

    fn sweep(&mut self, learning_rate: f64) {
        TrainableNetwork::sweep(self, learning_rate)
    }
}

/// Computes `Σ_k (expected[k] - actual[k])²` for a single example.
pub fn squared_error(actual: &[f64], expected: &[f64]) -> f64 {
    assert_eq!(actual.len(), expected.len());
    let mut error = 0.0;
    for (a, e) in actual.iter().zip(expected) {
        error += (e - a) * (e - a);
    }
    error
}

/// Verifies that a list of matrix shapes forms a chain of layers.
fn validate_shapes(shapes: &[(usize, usize)]) -> Result<()> {
    if shapes.is_empty() {
        return Err(Error::NoLayers);
    }
    for (layer, &(rows, cols)) in shapes.iter().enumerate() {
        if rows == 0 || cols == 0 {
            return Err(Error::EmptyLayer { layer });
        }
    }
    for (layer, ((_, cols), (rows, _))) in shapes.iter().tuple_windows().enumerate() {
        if cols != rows {
            return Err(Error::LayerMismatch {
                layer: layer + 1,
                expected: *cols,
                found: *rows,
            });
        }
    }
    Ok(())
}

/// Verifies that every training example fits the input and output layers.
fn validate_examples(
    inputs: &[Vec<f64>],
    targets: &[Vec<f64>],
    shapes: &[(usize, usize)],
) -> Result<()> {
    if inputs.is_empty() || targets.is_empty() {
        return Err(Error::EmptyTrainingSet);
    }
    if inputs.len() != targets.len() {
        return Err(Error::ExampleCount {
            inputs: inputs.len(),
            targets: targets.len(),
        });
    }
    let input_len = shapes.front().0;
    let output_len = shapes.back().1;
    for (example, (input, target)) in inputs.iter().zip(targets).enumerate() {
        if input.len() != input_len {
            return Err(Error::InputWidth {
                example,
                expected: input_len,
                found: input.len(),
            });
        }
        if target.len() != output_len {
            return Err(Error::TargetWidth {
                example,
                expected: output_len,
                found: target.len(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trainer::{Logging, Trainer};
    use proptest::collection::vec;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use test_strategy::proptest;

    const LEARNING_RATE: f64 = 0.7;

    fn xor() -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
        let inputs = vec![
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 0.0],
            vec![1.0, 1.0],
        ];
        let targets = vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]];
        (inputs, targets)
    }

    fn random_network(seed: u64, shapes: &[(usize, usize)]) -> Network {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let weights = shapes
            .iter()
            .map(|&(rows, cols)| Mat::random(&mut rng, rows, cols))
            .collect();
        Network::new(weights).unwrap()
    }

    /// Half the squared error of a single example under `weights`.
    fn example_error(weights: Vec<Mat>, input: &[f64], target: &[f64]) -> f64 {
        let output = Network::new(weights).unwrap().evaluate(input);
        0.5 * squared_error(&output, target)
    }

    #[test]
    fn no_layers() {
        assert!(matches!(Network::new(vec![]), Err(Error::NoLayers)));
    }

    #[test]
    fn empty_layer() {
        let weights = vec![Mat::zeros(2, 0)];
        assert!(matches!(
            Network::new(weights),
            Err(Error::EmptyLayer { layer: 0 })
        ));
    }

    #[test]
    fn layers_must_chain() {
        let weights = vec![Mat::zeros(2, 3), Mat::zeros(2, 1)];
        assert!(matches!(
            Network::new(weights),
            Err(Error::LayerMismatch {
                layer: 1,
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn layer_widths_come_from_matrix_shapes() {
        let network = random_network(0, &[(64, 35), (35, 26)]);
        assert_eq!(network.layer_widths(), [64, 35, 26]);
        assert_eq!(network.input_len(), 64);
        assert_eq!(network.output_len(), 26);
    }

    #[test]
    fn network_survives_json() {
        let network = random_network(9, &[(3, 2), (2, 2)]).activator(Activator::TanH);
        let json = serde_json::to_string(&network).unwrap();
        let decoded: Network = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, network);
    }

    #[test]
    fn deserializing_validates_the_layers() {
        let empty = r#"{"activator":"Sigmoid","weights":[]}"#;
        assert!(serde_json::from_str::<Network>(empty).is_err());

        let unchained = r#"{"activator":"Sigmoid","weights":[
            {"rows":2,"cols":2,"data":[1,2,3,4]},
            {"rows":3,"cols":1,"data":[1,2,3]}
        ]}"#;
        assert!(serde_json::from_str::<Network>(unchained).is_err());

        let overfull = r#"{"activator":"Sigmoid","weights":[
            {"rows":2,"cols":2,"data":[1,2,3,4,5]},
            {"rows":2,"cols":1,"data":[1,2]}
        ]}"#;
        assert!(serde_json::from_str::<Network>(overfull).is_err());

        let valid = r#"{"activator":"TanH","weights":[
            {"rows":2,"cols":2,"data":[1,2,3,4]},
            {"rows":2,"cols":1,"data":[1,2]}
        ]}"#;
        let network: Network = serde_json::from_str(valid).unwrap();
        assert_eq!(network.layer_widths(), [2, 2, 1]);
        assert_eq!(network.activator, Activator::TanH);
    }

    #[test]
    #[should_panic]
    fn evaluate_rejects_wrong_input_width() {
        random_network(0, &[(2, 2), (2, 1)]).evaluate(&[1.0]);
    }

    #[test]
    fn empty_training_set() {
        assert!(matches!(
            TrainableNetwork::new(vec![], vec![], &[(2, 1)]),
            Err(Error::EmptyTrainingSet)
        ));
    }

    #[test]
    fn example_count_mismatch() {
        let (inputs, mut targets) = xor();
        targets.pop();
        assert!(matches!(
            TrainableNetwork::new(inputs, targets, &[(2, 2), (2, 1)]),
            Err(Error::ExampleCount {
                inputs: 4,
                targets: 3
            })
        ));
    }

    #[test]
    fn wrong_input_size() {
        let (mut inputs, targets) = xor();
        inputs[2].push(1.0);
        assert!(matches!(
            TrainableNetwork::new(inputs, targets, &[(2, 2), (2, 1)]),
            Err(Error::InputWidth {
                example: 2,
                expected: 2,
                found: 3
            })
        ));
    }

    #[test]
    fn wrong_output_size() {
        let (inputs, mut targets) = xor();
        targets[1].push(0.0);
        assert!(matches!(
            TrainableNetwork::new(inputs, targets, &[(2, 2), (2, 1)]),
            Err(Error::TargetWidth {
                example: 1,
                expected: 1,
                found: 2
            })
        ));
    }

    #[test]
    fn shape_errors_leave_the_generator_untouched() {
        let (inputs, targets) = xor();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let result = TrainableNetwork::with_rng(inputs, targets, &[(3, 2), (2, 1)], &mut rng);
        assert!(matches!(result, Err(Error::InputWidth { .. })));
        assert_eq!(rng.gen::<u64>(), ChaCha8Rng::seed_from_u64(7).gen::<u64>());
    }

    #[test]
    fn initial_weights_lie_in_unit_interval() {
        let (inputs, targets) = xor();
        let network = TrainableNetwork::new(inputs, targets, &[(2, 2), (2, 1)]).unwrap();
        assert_eq!(network.len(), 4);
        assert!(!network.is_empty());
        for w in network.network().weights() {
            assert!(w.as_slice().iter().all(|&x| (0.0..1.0).contains(&x)));
        }
        assert_eq!(network.psi().iter().map(Vec::len).collect_vec(), [2, 2, 1]);
    }

    #[test]
    fn error_is_zero_for_perfect_outputs() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let inputs = vec![vec![0.2, 0.4], vec![0.9, 0.1]];
        let probe = TrainableNetwork::with_rng(
            inputs.clone(),
            vec![vec![0.0]; 2],
            &[(2, 3), (3, 1)],
            &mut rng.clone(),
        )
        .unwrap();
        let targets = inputs.iter().map(|x| probe.network().evaluate(x)).collect();
        let network =
            TrainableNetwork::with_rng(inputs, targets, &[(2, 3), (3, 1)], &mut rng).unwrap();
        assert_eq!(network.error(), 0.0);
    }

    #[test]
    fn single_layer_delta_matches_direct_formula() {
        let inputs = vec![vec![0.3, 0.8, 0.5]];
        let targets = vec![vec![1.0, 0.0]];
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut network =
            TrainableNetwork::with_rng(inputs.clone(), targets.clone(), &[(3, 2)], &mut rng)
                .unwrap();
        network.compute_update(0, LEARNING_RATE);

        let x = &inputs[0];
        let w = &network.network().weights()[0];
        let output = network.network().evaluate(x);
        for i in 0..2 {
            let sum = (0..3).fold(0.0, |acc, j| acc + x[j] * w[(j, i)]);
            let psi = (targets[0][i] - output[i]) * Activator::Sigmoid.fprime(sum);
            for j in 0..3 {
                assert_eq!(network.deltas()[0][(j, i)], LEARNING_RATE * x[j] * psi);
            }
        }
    }

    #[test]
    fn compute_update_leaves_weights_alone() {
        let (inputs, targets) = xor();
        let mut network = TrainableNetwork::new(inputs, targets, &[(2, 2), (2, 1)]).unwrap();
        let before = network.network().clone();
        network.compute_update(1, LEARNING_RATE);
        assert_eq!(network.network(), &before);

        network.apply_update();
        for (w, b, d) in izip!(network.network().weights(), before.weights(), network.deltas()) {
            let mut expected = b.clone();
            expected += d;
            assert_eq!(w, &expected);
        }
    }

    #[test]
    fn deep_network_deltas_follow_the_error_gradient() {
        let shapes = [(3, 4), (4, 3), (3, 5), (5, 2)];
        let inputs = vec![vec![0.1, 0.7, 0.4]];
        let targets = vec![vec![0.9, 0.2]];
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut network =
            TrainableNetwork::with_rng(inputs.clone(), targets.clone(), &shapes, &mut rng)
                .unwrap()
                .activator(Activator::Sigmoid);
        // Spread the weights around zero so no node saturates.
        let weights = network
            .network()
            .weights()
            .iter()
            .map(|w| {
                let centered = w.as_slice().iter().map(|x| 2.0 * x - 1.0).collect();
                Mat::from_vec(w.rows(), w.cols(), centered)
            })
            .collect_vec();
        network.network.weights = weights.clone();
        network.compute_update(0, LEARNING_RATE);

        let h = 1e-6;
        for (l, w) in weights.iter().enumerate() {
            for j in 0..w.rows() {
                for i in 0..w.cols() {
                    let mut plus = weights.clone();
                    plus[l][(j, i)] += h;
                    let mut minus = weights.clone();
                    minus[l][(j, i)] -= h;
                    let gradient = (example_error(plus, &inputs[0], &targets[0])
                        - example_error(minus, &inputs[0], &targets[0]))
                        / (2.0 * h);
                    let delta = network.deltas()[l][(j, i)];
                    assert!(
                        (delta + LEARNING_RATE * gradient).abs() < 1e-8,
                        "layer {} weight ({}, {}): delta {} vs gradient {}",
                        l,
                        j,
                        i,
                        delta,
                        gradient
                    );
                }
            }
        }
    }

    #[test]
    fn sweep_reduces_error() {
        let (inputs, targets) = xor();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut network =
            TrainableNetwork::with_rng(inputs, targets, &[(2, 2), (2, 1)], &mut rng).unwrap();
        let before = network.error();
        for _ in 0..10 {
            network.sweep(LEARNING_RATE);
        }
        assert!(network.error() < before);
    }

    #[test]
    fn trains_xor() {
        // Most starting points settle in a local minimum without a bias term,
        // roughly one in eight converges near 12k sweeps.
        let trained = (0..128)
            .map(|seed| {
                let (inputs, targets) = xor();
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                let network =
                    TrainableNetwork::with_rng(inputs, targets, &[(2, 2), (2, 1)], &mut rng)
                        .unwrap();
                Trainer::new(network)
                    .max_sweeps(Some(20_000))
                    .logging(Logging::Silent)
                    .train()
            })
            .find(|trained| trained.report.converged)
            .expect("no starting point converged");

        assert!(trained.model.error() < 0.01);
        let network = trained.model.into_network();
        assert!(network.evaluate(&[0.0, 0.0])[0] < 0.5);
        assert!(network.evaluate(&[0.0, 1.0])[0] > 0.5);
        assert!(network.evaluate(&[1.0, 0.0])[0] > 0.5);
        assert!(network.evaluate(&[1.0, 1.0])[0] < 0.5);
    }

    #[proptest]
    fn evaluation_is_deterministic(seed: u64, #[strategy(vec(0.0f64..1.0, 4))] x: Vec<f64>) {
        let network = random_network(seed, &[(4, 3), (3, 2)]);
        assert_eq!(network.evaluate(&x), network.evaluate(&x));
    }

    #[proptest]
    fn layers_chain_from_input_to_output(
        seed: u64,
        #[strategy(vec(0.0f64..1.0, 3))] x: Vec<f64>,
    ) {
        let network = random_network(seed, &[(3, 5), (5, 4), (4, 2)]);
        let layers = network.evaluate_all_layers(&x);
        assert_eq!(layers.len(), 4);
        assert_eq!(layers[0], x);
        assert_eq!(layers.iter().map(Vec::len).collect_vec(), network.layer_widths());
        assert_eq!(network.evaluate(&x), layers[3]);
    }

    #[proptest]
    fn error_is_non_negative_and_repeatable(
        seed: u64,
        #[strategy(vec(vec(0.0f64..1.0, 2), 1..6))] inputs: Vec<Vec<f64>>,
    ) {
        let targets = inputs.iter().map(|x| vec![x[0] * x[1]]).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let network =
            TrainableNetwork::with_rng(inputs, targets, &[(2, 3), (3, 1)], &mut rng).unwrap();
        let error = network.error();
        assert!(error >= 0.0);
        assert_eq!(error, network.error());
    }
}
