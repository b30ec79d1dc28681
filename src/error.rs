use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NnError>;

/// Failures raised by layers, the loss module and the training loop.
///
/// All of these are precondition violations detected where they occur; none
/// of them is transient, so nothing in the crate retries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NnError {
    /// Two buffers that must agree in length do not, or a layer received a
    /// buffer whose length differs from its configured size.
    #[error("shape mismatch in {context}: expected length {expected}, got {actual}")]
    ShapeMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A non-finite value reached a numeric routine that cannot clamp it.
    #[error("numeric domain error in {context}: value {value} is not finite")]
    NumericDomain { context: &'static str, value: f64 },

    /// `backward` was called on a layer that has never run `forward`.
    #[error("backward called on {layer} layer before any forward pass")]
    UncalledForward { layer: &'static str },

    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Fails with `ShapeMismatch` unless `actual == expected`.
pub(crate) fn check_len(context: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(NnError::ShapeMismatch { context, expected, actual })
    }
}
