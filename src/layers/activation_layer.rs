use crate::activation::activation::Activation;
use crate::error::{check_len, NnError, Result};

/// Stateless elementwise nonlinearity. Only the last forward buffers are kept.
#[derive(Debug, Clone)]
pub struct ActivationLayer {
    activation: Activation,
    input: Option<Vec<f64>>,
    output: Vec<f64>,
}

impl ActivationLayer {
    pub fn new(activation: Activation) -> ActivationLayer {
        ActivationLayer {
            activation,
            input: None,
            output: Vec::new(),
        }
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn output(&self) -> &[f64] {
        &self.output
    }

    pub fn evaluate(&self, input: &[f64]) -> Vec<f64> {
        self.activation.apply(input)
    }

    pub fn forward(&mut self, input: &[f64]) -> Vec<f64> {
        let output = self.evaluate(input);
        self.input = Some(input.to_vec());
        self.output = output.clone();
        output
    }

    /// `grad[i] = error[i] * f'(input[i])`. There is nothing to train, so
    /// the learning rate is ignored.
    pub fn backward(&mut self, error: &[f64], _learning_rate: f64) -> Result<Vec<f64>> {
        let input = self.input.as_ref().ok_or(NnError::UncalledForward {
            layer: self.activation.name(),
        })?;
        check_len("activation error", input.len(), error.len())?;

        Ok(error
            .iter()
            .zip(self.activation.derivative_all(input))
            .map(|(e, d)| e * d)
            .collect())
    }
}
