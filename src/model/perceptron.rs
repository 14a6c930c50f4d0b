use rand::Rng;
use tracing::warn;

use crate::activation::Activation;
use crate::error::ModelError;
use crate::loss::MseLoss;
use crate::model::next_id;
use crate::train::epoch_stats::EpochStats;
use crate::train::observer::{LogObserver, TrainObserver};
use crate::validate;

/// Learning rate every fresh unit starts with.
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;

/// A single trainable unit, the smallest model this library has.
///
/// Holds one weight per input feature plus a bias, applies an activation
/// function to the weighted sum, and learns with the classic Perceptron
/// Learning Rule: parameters move only when a sample is misclassified.
/// The feature count is fixed at construction; weights and bias change
/// only through [`Perceptron::fit`].
#[derive(Debug)]
pub struct Perceptron {
    id: u64,
    n: usize,
    weights: Vec<f64>,
    bias: f64,
    learning_rate: f64,
    activation: Activation,
}

impl Perceptron {
    /// Creates a unit with `entries` input features.
    ///
    /// Weights start as independent uniform draws from [0, 1), the bias at
    /// 0.0, the learning rate at [`DEFAULT_LEARNING_RATE`], the activation
    /// as the step function.
    pub fn new(entries: usize) -> Result<Perceptron, ModelError> {
        Self::new_with_rng(entries, &mut rand::thread_rng())
    }

    /// Like [`Perceptron::new`], but accepts the feature count as a float.
    ///
    /// Whole values are accepted (`4.0` behaves exactly like `4`);
    /// fractional, non-positive or non-finite values are rejected.
    pub fn from_entries(entries: f64) -> Result<Perceptron, ModelError> {
        Self::new(validate::entry_count(entries)?)
    }

    /// Creates a unit drawing its initial weights from `rng`.
    ///
    /// Supplying a seeded rng makes construction deterministic.
    pub fn new_with_rng(entries: usize, rng: &mut impl Rng) -> Result<Perceptron, ModelError> {
        if entries == 0 {
            return Err(ModelError::InvalidArgument {
                expected: "a positive number of input features",
                got: "0".to_string(),
            });
        }
        let weights = (0..entries).map(|_| rng.gen::<f64>()).collect();
        Ok(Perceptron {
            id: next_id(),
            n: entries,
            weights,
            bias: 0.0,
            learning_rate: DEFAULT_LEARNING_RATE,
            activation: Activation::default(),
        })
    }

    /// Creates a unit from explicit parameters instead of random ones.
    ///
    /// The feature count becomes `weights.len()`; everything else follows
    /// the [`Perceptron::new`] defaults.
    pub fn with_parameters(weights: Vec<f64>, bias: f64) -> Result<Perceptron, ModelError> {
        if weights.is_empty() {
            return Err(ModelError::InvalidArgument {
                expected: "a non-empty weight vector",
                got: "an empty one".to_string(),
            });
        }
        validate::numeric_slice(&weights, "numeric weights")?;
        let bias = validate::numeric(bias, "a numeric bias")?;
        Ok(Perceptron {
            id: next_id(),
            n: weights.len(),
            weights,
            bias,
            learning_rate: DEFAULT_LEARNING_RATE,
            activation: Activation::default(),
        })
    }

    /// Opaque instance id, unique per constructed unit.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Number of input features, fixed at construction.
    pub fn entries(&self) -> usize {
        self.n
    }

    /// Read-only view of the per-feature weights.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Replaces the learning rate; the value must be an actual number.
    pub fn set_learning_rate(&mut self, value: f64) -> Result<(), ModelError> {
        self.learning_rate = validate::numeric(value, "a numeric learning rate")?;
        Ok(())
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Swaps the activation function. Any registry variant is valid.
    pub fn set_activation(&mut self, activation: Activation) {
        self.activation = activation;
    }

    /// Runs the forward pass for one sample.
    ///
    /// `inputs` must hold exactly [`Perceptron::entries`] finite values;
    /// the length check runs first, then the element check, both before
    /// any arithmetic. No state is touched.
    pub fn predict(&self, inputs: &[f64]) -> Result<f64, ModelError> {
        validate::exact_len(inputs, self.n)?;
        validate::numeric_slice(inputs, "numeric inputs")?;
        Ok(self.activation.function(self.weighted_sum(inputs)))
    }

    /// Trains the unit with the Perceptron Learning Rule and returns the
    /// per-epoch loss history.
    ///
    /// `x` is a flat sequence of concatenated samples, each
    /// [`Perceptron::entries`] values long; `y` holds one target per
    /// sample and drives the epoch count. With `verbose` set, one line
    /// per epoch goes through [`LogObserver`].
    ///
    /// Soft conditions: when `x.len()` is not a multiple of the feature
    /// count a warning is logged and training proceeds; when `x` holds
    /// less than one sample's worth of values the call returns an empty
    /// history.
    pub fn fit(&mut self, x: &[f64], y: &[f64], verbose: bool) -> Result<Vec<f64>, ModelError> {
        if verbose {
            self.fit_inner(x, y, Some(&mut LogObserver))
        } else {
            self.fit_inner(x, y, None)
        }
    }

    /// Like [`Perceptron::fit`], reporting every epoch to `observer`
    /// instead of the logger.
    pub fn fit_observed(
        &mut self,
        x: &[f64],
        y: &[f64],
        observer: &mut dyn TrainObserver,
    ) -> Result<Vec<f64>, ModelError> {
        self.fit_inner(x, y, Some(observer))
    }

    fn fit_inner(
        &mut self,
        x: &[f64],
        y: &[f64],
        mut observer: Option<&mut dyn TrainObserver>,
    ) -> Result<Vec<f64>, ModelError> {
        validate::numeric_slice(x, "numeric training inputs")?;
        validate::numeric_slice(y, "numeric targets")?;

        if x.len() % self.n != 0 {
            warn!(
                "training input length {} is not a multiple of the {} features per sample; \
                 the target count drives training",
                x.len(),
                self.n
            );
        }
        if x.len() < self.n {
            return Ok(Vec::new());
        }

        let mut history = Vec::with_capacity(y.len());
        for (epoch, &target) in y.iter().enumerate() {
            let sample = sample_at(x, epoch, self.n);
            let prediction = self.predict(sample)?;

            // The update fires only on an exact mismatch.
            if prediction != target {
                let delta = self.learning_rate * (target - prediction);
                for (w, &xi) in self.weights.iter_mut().zip(sample) {
                    *w += delta * xi;
                }
                self.bias += delta;
            }

            let loss = self.dataset_loss(x, y)?;
            history.push(loss);

            if let Some(obs) = observer.as_deref_mut() {
                obs.on_step(&EpochStats {
                    epoch,
                    prediction,
                    target,
                    loss,
                });
            }
        }
        Ok(history)
    }

    /// MSE over every sample `y` names, with the current parameters.
    /// Rescanned after each epoch, so one `fit` call costs O(len(y)²)
    /// predictions.
    fn dataset_loss(&self, x: &[f64], y: &[f64]) -> Result<f64, ModelError> {
        let mut predictions = Vec::with_capacity(y.len());
        for epoch in 0..y.len() {
            predictions.push(self.predict(sample_at(x, epoch, self.n))?);
        }
        Ok(MseLoss::loss(&predictions, y))
    }

    fn weighted_sum(&self, inputs: &[f64]) -> f64 {
        inputs
            .iter()
            .zip(&self.weights)
            .map(|(x, w)| x * w)
            .sum::<f64>()
            + self.bias
    }
}

/// The `index`-th sample window of the flat input sequence, clamped at the
/// end of `x`. A short window fails inside `predict` with the length error.
fn sample_at(x: &[f64], index: usize, n: usize) -> &[f64] {
    let start = (index * n).min(x.len());
    let end = (start + n).min(x.len());
    &x[start..end]
}
