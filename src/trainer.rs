//! Utilities for training neural networks.

use std::time::Instant;
use tracing::{debug, info, warn};

/// Makes a model trainable by repeated backpropagation sweeps.
pub trait Trainable {
    /// Returns the total error over the training set.
    fn error(&self) -> f64;

    /// Runs one backward-update pass over every training example, scaling the
    /// weight updates by `learning_rate`.
    fn sweep(&mut self, learning_rate: f64);
}

/// A builder for training new models.
#[derive(Debug)]
pub struct Trainer<T: Trainable> {
    model: T,
    learning_rate: f64,
    error_threshold: f64,
    max_sweeps: Option<usize>,
    logging: Logging,
}

/// The summary of a training run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Report {
    /// The number of sweeps performed.
    pub sweeps: usize,
    /// The error after the last sweep.
    pub error: f64,
    /// Whether the error reached the threshold before the sweep cap.
    pub converged: bool,
}

/// A trained model along with its training summary.
#[derive(Debug)]
pub struct Trained<T> {
    pub model: T,
    pub report: Report,
}

impl<T: Trainable> Trainer<T> {
    /// Creates a new Trainer instance.
    ///
    /// The trainer is initialized with some default values. These defaults are:
    ///
    /// * A learning rate of 0.7.
    /// * Stops once the training error is at most 0.01.
    /// * No cap on the number of sweeps.
    /// * Logs on training completion.
    pub fn new(model: T) -> Self {
        Trainer {
            model,
            learning_rate: 0.7,
            error_threshold: 0.01,
            max_sweeps: None,
            logging: Logging::Completion,
        }
    }

    /// Sets the learning rate to use during gradient descent.
    pub fn learning_rate(mut self, rate: f64) -> Self {
        self.learning_rate = rate;
        self
    }

    /// Sets the error at or below which training is complete.
    pub fn error_threshold(mut self, threshold: f64) -> Self {
        self.error_threshold = threshold;
        self
    }

    /// Bounds the number of sweeps; `None` trains until convergence, however
    /// long that takes.
    pub fn max_sweeps(mut self, sweeps: Option<usize>) -> Self {
        self.max_sweeps = sweeps;
        self
    }

    /// Sets the type of logging to be emitted during training.
    pub fn logging(mut self, logging: Logging) -> Self {
        self.logging = logging;
        self
    }

    /// Sweeps over the training set until the error drops to the threshold or
    /// the sweep cap is hit.
    ///
    /// Without a cap a model that never converges trains forever.
    pub fn train(mut self) -> Trained<T> {
        let start_time = Instant::now();
        let mut sweeps = 0;
        let mut error = self.model.error();
        while error > self.error_threshold {
            if self.max_sweeps.map_or(false, |cap| sweeps >= cap) {
                break;
            }
            self.model.sweep(self.learning_rate);
            error = self.model.error();
            sweeps += 1;

            debug!(sweeps, error, "sweep");
            self.logging.sweep(sweeps, error);
        }

        let report = Report {
            sweeps,
            error,
            converged: error <= self.error_threshold,
        };
        self.logging.completion(&report, start_time);
        Trained {
            model: self.model,
            report,
        }
    }
}

/// Logging frequency to use during training
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Logging {
    /// No logs will be emitted
    Silent,
    /// A summary will be emitted at completion
    Completion,
    /// A summary will be emitted after every `n` sweeps, and at completion
    Sweeps(usize),
}

impl Logging {
    /// Performs logging after sweep number `sweeps`.
    fn sweep(&self, sweeps: usize, training_error: f64) {
        if let Logging::Sweeps(freq) = *self {
            if freq > 0 && sweeps % freq == 0 {
                info!(sweeps, error = training_error, "training");
            }
        }
    }

    /// Performs logging at the end of training.
    fn completion(&self, report: &Report, start_time: Instant) {
        if let Logging::Silent = *self {
            return;
        }
        let elapsed = start_time.elapsed().as_secs_f64();
        if report.converged {
            info!(sweeps = report.sweeps, error = report.error, elapsed, "converged");
        } else {
            warn!(
                sweeps = report.sweeps,
                error = report.error,
                elapsed,
                "sweep cap reached before convergence"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A model whose error shrinks by a fixed factor every sweep.
    #[derive(Debug)]
    struct Decay {
        error: f64,
        factor: f64,
        rates: Vec<f64>,
    }

    impl Trainable for Decay {
        fn error(&self) -> f64 {
            self.error
        }

        fn sweep(&mut self, learning_rate: f64) {
            self.rates.push(learning_rate);
            self.error *= self.factor;
        }
    }

    fn decay(error: f64, factor: f64) -> Decay {
        Decay {
            error,
            factor,
            rates: Vec::new(),
        }
    }

    #[test]
    fn already_converged_models_are_not_swept() {
        let trained = Trainer::new(decay(0.005, 0.5)).train();
        assert_eq!(trained.report.sweeps, 0);
        assert!(trained.report.converged);
        assert!(trained.model.rates.is_empty());
    }

    #[test]
    fn stops_at_the_threshold() {
        let trained = Trainer::new(decay(1.0, 0.5))
            .error_threshold(0.125)
            .logging(Logging::Sweeps(1))
            .train();
        assert_eq!(trained.report.sweeps, 3);
        assert_eq!(trained.report.error, 0.125);
        assert!(trained.report.converged);
    }

    #[test]
    fn passes_the_learning_rate_to_every_sweep() {
        let trained = Trainer::new(decay(1.0, 0.5))
            .learning_rate(0.3)
            .error_threshold(0.25)
            .train();
        assert_eq!(trained.model.rates, [0.3, 0.3]);
    }

    #[test]
    fn sweep_cap_bounds_non_convergent_models() {
        let trained = Trainer::new(decay(1.0, 1.0))
            .max_sweeps(Some(50))
            .logging(Logging::Silent)
            .train();
        assert_eq!(trained.report.sweeps, 50);
        assert_eq!(trained.report.error, 1.0);
        assert!(!trained.report.converged);
    }

    #[test]
    fn unbounded_by_default() {
        let trainer = Trainer::new(decay(1.0, 0.5));
        assert_eq!(trainer.max_sweeps, None);
        assert_eq!(trainer.learning_rate, 0.7);
        assert_eq!(trainer.error_threshold, 0.01);
        assert_eq!(trainer.logging, Logging::Completion);
    }
}
