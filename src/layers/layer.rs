use crate::activation::activation::Activation;
use crate::error::Result;
use crate::layers::activation_layer::ActivationLayer;
use crate::layers::dense::Dense;
use crate::math::init::InitRng;

/// One stage of a pipeline.
///
/// `backward` is only defined relative to the input cached by the most
/// recent `forward` on the same instance; calling it first returns
/// `NnError::UncalledForward`.
#[derive(Debug, Clone)]
pub enum Layer {
    Dense(Dense),
    Activation(ActivationLayer),
}

impl Layer {
    pub fn dense(input_size: usize, output_size: usize) -> Layer {
        Layer::Dense(Dense::new(input_size, output_size))
    }

    pub fn dense_with_rng(input_size: usize, output_size: usize, rng: &mut InitRng) -> Layer {
        Layer::Dense(Dense::with_rng(input_size, output_size, rng))
    }

    pub fn sigmoid() -> Layer {
        Layer::Activation(ActivationLayer::new(Activation::Sigmoid))
    }

    pub fn relu() -> Layer {
        Layer::Activation(ActivationLayer::new(Activation::ReLU))
    }

    pub fn leaky_relu() -> Layer {
        Layer::Activation(ActivationLayer::new(Activation::leaky_relu()))
    }

    pub fn tanh() -> Layer {
        Layer::Activation(ActivationLayer::new(Activation::Tanh))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Layer::Dense(_) => "dense",
            Layer::Activation(a) => a.activation().name(),
        }
    }

    pub fn is_trainable(&self) -> bool {
        matches!(self, Layer::Dense(_))
    }

    pub fn forward(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        match self {
            Layer::Dense(d) => d.forward(input),
            Layer::Activation(a) => Ok(a.forward(input)),
        }
    }

    /// Same values as `forward`, without updating the cache.
    pub fn evaluate(&self, input: &[f64]) -> Result<Vec<f64>> {
        match self {
            Layer::Dense(d) => d.evaluate(input),
            Layer::Activation(a) => Ok(a.evaluate(input)),
        }
    }

    /// Propagates `error` to this layer's input. Dense layers also take one
    /// gradient-descent step on their parameters.
    pub fn backward(&mut self, error: &[f64], learning_rate: f64) -> Result<Vec<f64>> {
        match self {
            Layer::Dense(d) => d.backward(error, learning_rate),
            Layer::Activation(a) => a.backward(error, learning_rate),
        }
    }
}

impl From<Dense> for Layer {
    fn from(d: Dense) -> Self {
        Layer::Dense(d)
    }
}

impl From<Activation> for Layer {
    fn from(a: Activation) -> Self {
        Layer::Activation(ActivationLayer::new(a))
    }
}
