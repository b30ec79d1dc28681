pub mod activation;

pub use activation::{Activation, DEFAULT_LEAK};
