pub mod activation_layer;
pub mod dense;
pub mod layer;

pub use activation_layer::ActivationLayer;
pub use dense::{Dense, DenseGradients};
pub use layer::Layer;
