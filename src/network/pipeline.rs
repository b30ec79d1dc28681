use tracing::trace;

use crate::error::Result;
use crate::layers::layer::Layer;
use crate::train::epoch_stats::EpochStats;
use crate::train::loop_fn::train_loop;
use crate::train::train_config::TrainConfig;

/// Ordered sequence of layers that owns each of them.
///
/// The output length of layer `i` must equal the input length of layer
/// `i + 1`; this is not checked when layers are added, a mismatch surfaces
/// as `NnError::ShapeMismatch` on the first forward pass.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    layers: Vec<Layer>,
}

impl Pipeline {
    pub fn new() -> Pipeline {
        Pipeline { layers: Vec::new() }
    }

    /// Appends a layer, taking ownership of it.
    pub fn add(&mut self, layer: impl Into<Layer>) -> &mut Self {
        let layer = layer.into();
        trace!(index = self.layers.len(), kind = layer.name(), "layer added");
        self.layers.push(layer);
        self
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Forward pass; each layer caches its input for the next `back`.
    pub fn forward(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        let mut current = input.to_vec();
        for layer in &mut self.layers {
            current = layer.forward(&current)?;
        }
        Ok(current)
    }

    /// Inference only. Produces the same values as `forward` but leaves every
    /// layer untouched.
    pub fn predict(&self, input: &[f64]) -> Result<Vec<f64>> {
        let mut current = input.to_vec();
        for layer in &self.layers {
            current = layer.evaluate(&current)?;
        }
        Ok(current)
    }

    /// Backward pass in reverse insertion order. Dense layers update their
    /// parameters as they are visited. Returns the gradient with respect to
    /// the pipeline input.
    pub fn back(&mut self, error: &[f64], learning_rate: f64) -> Result<Vec<f64>> {
        let mut current = error.to_vec();
        for layer in self.layers.iter_mut().rev() {
            current = layer.backward(&current, learning_rate)?;
        }
        Ok(current)
    }

    /// Online SGD on binary cross-entropy, printing one
    /// `Epoch: <i> Loss: <total>` line per epoch.
    pub fn fit(
        &mut self,
        features: &[Vec<f64>],
        labels: &[Vec<f64>],
        epochs: usize,
        learning_rate: f64,
    ) -> Result<Vec<EpochStats>> {
        self.fit_with(features, labels, &TrainConfig::new(epochs, learning_rate))
    }

    pub fn fit_with(
        &mut self,
        features: &[Vec<f64>],
        labels: &[Vec<f64>],
        config: &TrainConfig,
    ) -> Result<Vec<EpochStats>> {
        train_loop(self, features, labels, config)
    }
}
