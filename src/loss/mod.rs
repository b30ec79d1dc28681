pub mod bce;
pub mod gradient_mode;

pub use bce::{bce_loss, bce_loss_gradient, BceLoss, EPSILON};
pub use gradient_mode::GradientMode;
