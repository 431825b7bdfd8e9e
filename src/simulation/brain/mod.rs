//! Fixed-topology feedforward network used as a bird's brain.
//!
//! The network has exactly one hidden layer. Topology is chosen at
//! construction and never changes afterwards; evolution only touches the
//! weight and bias values through [`NeuralNetwork::mutate`].

use ndarray::Array1;
use rand::Rng;

use super::mutation::MutationPolicy;

pub mod mlp;

pub use mlp::Mlp;

/// Range used for freshly initialised weights and biases: `U[-1, 1)`.
pub const INIT_SCALE: f32 = 1.0;

/// Input → hidden → output network with sigmoid activations.
///
/// `Clone` produces a fully independent copy: the `ndarray` buffers are owned,
/// so a cloned child can be mutated without touching its parent.
#[derive(Debug, Clone, PartialEq)]
pub struct NeuralNetwork {
    /// Input → hidden layer.
    pub hidden: Mlp,
    /// Hidden → output layer.
    pub output: Mlp,
}

impl NeuralNetwork {
    /// Creates a network with every weight and bias drawn from `U[-1, 1)`.
    pub fn new(input_size: usize, hidden_size: usize, output_size: usize) -> Self {
        Self {
            hidden: Mlp::new_random(input_size, hidden_size, INIT_SCALE),
            output: Mlp::new_random(hidden_size, output_size, INIT_SCALE),
        }
    }

    /// Like [`new`](Self::new) but draws the initial values from `rng`.
    pub fn new_with<R: Rng>(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        rng: &mut R,
    ) -> Self {
        Self {
            hidden: Mlp::new_random_with(input_size, hidden_size, INIT_SCALE, rng),
            output: Mlp::new_random_with(hidden_size, output_size, INIT_SCALE, rng),
        }
    }

    /// Assembles a network from two existing layers.
    ///
    /// Panics if the hidden layer's width does not feed the output layer.
    pub fn from_layers(hidden: Mlp, output: Mlp) -> Self {
        assert_eq!(
            hidden.output_size(),
            output.input_size(),
            "hidden width must match output layer input"
        );
        Self { hidden, output }
    }

    /// Number of inputs expected by [`predict`](Self::predict).
    pub fn input_size(&self) -> usize {
        self.hidden.input_size()
    }

    /// Width of the hidden layer.
    pub fn hidden_size(&self) -> usize {
        self.hidden.output_size()
    }

    /// Number of outputs produced by [`predict`](Self::predict).
    pub fn output_size(&self) -> usize {
        self.output.output_size()
    }

    /// Runs a forward pass. Inputs are used as given; callers normalise them.
    #[inline]
    pub fn predict(&self, inputs: &Array1<f32>) -> Array1<f32> {
        debug_assert_eq!(inputs.len(), self.input_size());
        let hidden = self.hidden.forward(inputs);
        self.output.forward(&hidden)
    }

    /// Forward pass that also returns the hidden activations, for inspection.
    pub fn activations(&self, inputs: &Array1<f32>) -> (Array1<f32>, Array1<f32>) {
        let hidden = self.hidden.forward(inputs);
        let output = self.output.forward(&hidden);
        (hidden, output)
    }

    /// Perturbs every weight and bias in place according to `policy`.
    pub fn mutate(&mut self, policy: &MutationPolicy) {
        self.mutate_with(policy, &mut rand::rng());
    }

    /// Like [`mutate`](Self::mutate) but draws from the supplied generator.
    pub fn mutate_with<R: Rng>(&mut self, policy: &MutationPolicy, rng: &mut R) {
        self.hidden.mutate(policy, rng);
        self.output.mutate(policy, rng);
    }

    /// Flattens all weights and biases into a single vector.
    pub fn to_flat_vector(&self) -> Vec<f32> {
        let mut flat = Vec::with_capacity(self.parameter_count());
        for layer in [&self.hidden, &self.output] {
            flat.extend(layer.weights.iter().copied());
            flat.extend(layer.biases.iter().copied());
        }
        flat
    }

    /// Total number of trainable values.
    pub fn parameter_count(&self) -> usize {
        [&self.hidden, &self.output]
            .iter()
            .map(|layer| layer.weights.len() + layer.biases.len())
            .sum()
    }

    /// Euclidean distance between the parameters of two networks of equal shape.
    pub fn distance(a: &NeuralNetwork, b: &NeuralNetwork) -> f32 {
        a.to_flat_vector()
            .iter()
            .zip(b.to_flat_vector())
            .map(|(x, y)| (x - y) * (x - y))
            .sum::<f32>()
            .sqrt()
    }
}
