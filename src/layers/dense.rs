use crate::error::{check_len, NnError, Result};
use crate::math::init::{initialize_bias, initialize_weights, InitRng};
use crate::math::matrix::Matrix;
use crate::math::vector::{outer, scale, subtract};
use crate::optim::sgd::Sgd;

/// Fully connected layer computing `output[i] = dot(weights[i], input) + biases[i]`.
///
/// Weights are (output_size × input_size) and biases have output_size
/// entries; every mutation keeps those shapes.
#[derive(Debug, Clone)]
pub struct Dense {
    input_size: usize,
    output_size: usize,
    weights: Matrix,
    biases: Vec<f64>,
    input: Option<Vec<f64>>, // last forward input, required by backward
    output: Vec<f64>,
}

/// Gradients of one backward step.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseGradients {
    /// ∂E/∂W, the outer product of the error and the cached input.
    pub weights: Matrix,
    /// ∂E/∂b, equal to the error itself.
    pub biases: Vec<f64>,
    /// ∂E/∂x, `Wᵀ · error`.
    pub input: Vec<f64>,
}

impl Dense {
    /// Creates a layer with parameters drawn from U[-1, 1] using a fresh
    /// entropy-seeded generator.
    pub fn new(input_size: usize, output_size: usize) -> Dense {
        Dense::with_rng(input_size, output_size, &mut InitRng::from_entropy())
    }

    pub fn with_rng(input_size: usize, output_size: usize, rng: &mut InitRng) -> Dense {
        let weights = initialize_weights(output_size, input_size, rng);
        let biases = initialize_bias(output_size, rng);

        Dense {
            input_size,
            output_size,
            weights,
            biases,
            input: None,
            output: Vec::new(),
        }
    }

    /// Builds a layer from explicit parameters. `biases` must have one entry
    /// per weight row.
    pub fn from_parameters(weights: Matrix, biases: Vec<f64>) -> Result<Dense> {
        check_len("Dense::from_parameters biases", weights.rows, biases.len())?;
        Ok(Dense {
            input_size: weights.cols,
            output_size: weights.rows,
            weights,
            biases,
            input: None,
            output: Vec::new(),
        })
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn output_size(&self) -> usize {
        self.output_size
    }

    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    pub fn biases(&self) -> &[f64] {
        &self.biases
    }

    /// Output of the most recent `forward`, empty before the first call.
    pub fn output(&self) -> &[f64] {
        &self.output
    }

    /// Affine transform without touching the forward cache.
    pub fn evaluate(&self, input: &[f64]) -> Result<Vec<f64>> {
        check_len("Dense input", self.input_size, input.len())?;
        let z = self.weights.mat_vec(input)?;
        Ok(z.iter().zip(self.biases.iter()).map(|(z, b)| z + b).collect())
    }

    pub fn forward(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        let output = self.evaluate(input)?;
        self.input = Some(input.to_vec());
        self.output = output.clone();
        Ok(output)
    }

    /// Gradients for `error` (∂E/∂output) against the cached forward input.
    pub fn compute_gradients(&self, error: &[f64]) -> Result<DenseGradients> {
        let input = self
            .input
            .as_ref()
            .ok_or(NnError::UncalledForward { layer: "dense" })?;
        check_len("Dense error", self.output_size, error.len())?;

        let weights = Matrix::from_rows(outer(error, input))?;
        let input_grad = self.weights.transpose()?.mat_vec(error)?;

        Ok(DenseGradients {
            weights,
            biases: error.to_vec(),
            input: input_grad,
        })
    }

    /// One gradient-descent step: `b -= lr·∂b`, `W[i] -= lr·∂W[i]`.
    ///
    /// Shapes are checked before anything is written; a rejected step leaves
    /// both weights and biases as they were.
    pub fn apply_gradients(&mut self, grads: &DenseGradients, lr: f64) -> Result<()> {
        check_len("Dense bias gradient", self.output_size, grads.biases.len())?;
        check_len("Dense weight gradient rows", self.output_size, grads.weights.rows)?;
        check_len("Dense weight gradient cols", self.input_size, grads.weights.cols)?;

        let biases = subtract(&self.biases, &scale(&grads.biases, lr))?;
        self.weights.sub_scaled(&grads.weights, lr)?;
        self.biases = biases;
        Ok(())
    }

    /// Returns ∂E/∂input and updates the parameters in place by one SGD step.
    ///
    /// The returned gradient is computed from the weights as they were
    /// before the update.
    pub fn backward(&mut self, error: &[f64], learning_rate: f64) -> Result<Vec<f64>> {
        let grads = self.compute_gradients(error)?;
        Sgd::new(learning_rate).step(self, &grads)?;
        Ok(grads.input)
    }
}
