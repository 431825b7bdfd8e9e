//! Single dense layer with sigmoid activation.

use ndarray::{Array1, Array2};
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use rand::Rng;

use crate::simulation::mutation::MutationPolicy;

/// Logistic squashing into `(0, 1)`.
#[inline]
pub fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// A single fully connected layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Mlp {
    /// Weight matrix (`output_size` × `input_size`).
    pub weights: Array2<f32>,
    /// Bias vector (`output_size`).
    pub biases: Array1<f32>,
}

impl Mlp {
    /// Creates a new layer with weights and biases drawn from `U[-scale, scale)`.
    pub fn new_random(input_size: usize, output_size: usize, scale: f32) -> Self {
        Self {
            weights: Array2::random((output_size, input_size), Uniform::new(-scale, scale)),
            biases: Array1::random(output_size, Uniform::new(-scale, scale)),
        }
    }

    /// Like [`new_random`](Self::new_random) but draws from the supplied generator.
    pub fn new_random_with<R: Rng>(
        input_size: usize,
        output_size: usize,
        scale: f32,
        rng: &mut R,
    ) -> Self {
        Self {
            weights: Array2::from_shape_fn((output_size, input_size), |_| {
                rng.random_range(-scale..scale)
            }),
            biases: Array1::from_shape_fn(output_size, |_| rng.random_range(-scale..scale)),
        }
    }

    /// Builds a layer from explicit parameters.
    ///
    /// Panics if the bias length does not match the weight rows.
    pub fn from_parts(weights: Array2<f32>, biases: Array1<f32>) -> Self {
        assert_eq!(
            weights.nrows(),
            biases.len(),
            "bias vector must have one entry per output"
        );
        Self { weights, biases }
    }

    /// Number of inputs this layer accepts.
    pub fn input_size(&self) -> usize {
        self.weights.ncols()
    }

    /// Number of outputs this layer produces.
    pub fn output_size(&self) -> usize {
        self.weights.nrows()
    }

    /// Performs a forward pass with sigmoid activation.
    #[inline]
    pub fn forward(&self, inputs: &Array1<f32>) -> Array1<f32> {
        let mut output = self.weights.dot(inputs);
        output += &self.biases;
        output.mapv_inplace(sigmoid);
        output
    }

    /// Applies `policy` independently to every weight and bias.
    pub fn mutate<R: Rng>(&mut self, policy: &MutationPolicy, rng: &mut R) {
        self.weights.mapv_inplace(|w| policy.apply(w, rng));
        self.biases.mapv_inplace(|b| policy.apply(b, rng));
    }
}
