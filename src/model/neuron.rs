use rand::Rng;

use crate::activation::Activation;
use crate::error::ModelError;
use crate::model::next_id;
use crate::validate;

/// A single generic neuron that remembers its last forward pass.
///
/// Where [`Perceptron`](crate::model::Perceptron) is a stateless
/// classifier with a training rule, `Neuron` is the building-block view:
/// it keeps the inputs it last saw and the weighted sum it last computed,
/// the state a composite model wires together. It has no training
/// behavior of its own.
#[derive(Debug)]
pub struct Neuron {
    id: u64,
    weights: Vec<f64>,
    bias: f64,
    activation: Activation,
    inputs: Vec<f64>,
    z: f64,
}

impl Neuron {
    /// Creates a neuron with `input_size` connections, uniform random
    /// weights in [0, 1) and zero bias.
    pub fn new(input_size: usize, activation: Activation) -> Result<Neuron, ModelError> {
        Self::new_with_rng(input_size, activation, &mut rand::thread_rng())
    }

    /// Creates a neuron drawing its initial weights from `rng`.
    pub fn new_with_rng(
        input_size: usize,
        activation: Activation,
        rng: &mut impl Rng,
    ) -> Result<Neuron, ModelError> {
        if input_size == 0 {
            return Err(ModelError::InvalidArgument {
                expected: "a positive number of input connections",
                got: "0".to_string(),
            });
        }
        Ok(Neuron {
            id: next_id(),
            weights: (0..input_size).map(|_| rng.gen::<f64>()).collect(),
            bias: 0.0,
            activation,
            inputs: Vec::new(),
            z: 0.0,
        })
    }

    /// Feeds one input vector through the neuron.
    ///
    /// Validates the way a unit's `predict` does, then stores both the
    /// inputs and the weighted sum before returning the activated output.
    pub fn forward(&mut self, inputs: &[f64]) -> Result<f64, ModelError> {
        validate::exact_len(inputs, self.weights.len())?;
        validate::numeric_slice(inputs, "numeric inputs")?;

        self.z = inputs
            .iter()
            .zip(&self.weights)
            .map(|(x, w)| x * w)
            .sum::<f64>()
            + self.bias;
        self.inputs.clear();
        self.inputs.extend_from_slice(inputs);
        Ok(self.activation.function(self.z))
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn input_size(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// The inputs of the last `forward` call (empty before the first one).
    pub fn inputs(&self) -> &[f64] {
        &self.inputs
    }

    /// The weighted sum of the last `forward` call (0.0 before the first
    /// one).
    pub fn z(&self) -> f64 {
        self.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_forward_stores_inputs_and_weighted_sum() {
        let mut neuron =
            Neuron::new_with_rng(3, Activation::Identity, &mut StdRng::seed_from_u64(3)).unwrap();
        let inputs = [1.0, -2.0, 0.5];
        let expected_z: f64 = inputs
            .iter()
            .zip(neuron.weights())
            .map(|(x, w)| x * w)
            .sum::<f64>()
            + neuron.bias();

        let out = neuron.forward(&inputs).unwrap();
        // Identity activation: the output is the weighted sum itself.
        assert_eq!(out, neuron.z());
        assert!((neuron.z() - expected_z).abs() < 1e-12);
        assert_eq!(neuron.inputs(), &inputs[..]);
    }

    #[test]
    fn test_forward_validates_like_predict() {
        let mut neuron = Neuron::new(2, Activation::Step).unwrap();
        assert!(matches!(
            neuron.forward(&[1.0]),
            Err(ModelError::ShapeMismatch { .. })
        ));
        assert!(matches!(
            neuron.forward(&[1.0, f64::NAN]),
            Err(ModelError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_state_starts_empty() {
        let neuron = Neuron::new(2, Activation::Sigmoid).unwrap();
        assert!(neuron.inputs().is_empty());
        assert_eq!(neuron.z(), 0.0);
    }

    #[test]
    fn test_zero_input_size_rejected() {
        assert!(Neuron::new(0, Activation::Step).is_err());
    }
}
