use crate::error::Result;
use crate::layers::dense::{Dense, DenseGradients};

/// Plain gradient descent with a fixed learning rate.
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one SGD update to a layer given its pre-computed gradients.
    pub fn step(&self, layer: &mut Dense, grads: &DenseGradients) -> Result<()> {
        layer.apply_gradients(grads, self.learning_rate)
    }
}
