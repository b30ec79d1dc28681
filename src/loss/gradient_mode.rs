use serde::{Serialize, Deserialize};

/// Selects how the BCE gradient is formed during training.
///
/// - `FirstOutput` — derivative for output 0 only (default). Networks must
///   end in a single output for the backward pass to line up.
/// - `Elementwise` — per-output derivative for every index, for networks with
///   several independent sigmoid outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientMode {
    #[default]
    FirstOutput,
    Elementwise,
}
