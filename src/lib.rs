pub mod error;
pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use error::{NnError, Result};
pub use math::{InitRng, Matrix};
pub use activation::Activation;
pub use layers::{ActivationLayer, Dense, Layer};
pub use network::Pipeline;
pub use loss::{bce_loss, bce_loss_gradient, GradientMode};
pub use optim::Sgd;
pub use train::{EpochStats, TrainConfig};
