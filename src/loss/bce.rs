use crate::error::{check_len, NnError, Result};
use crate::loss::gradient_mode::GradientMode;

/// Predictions are clamped to `[EPSILON, 1 - EPSILON]` before any log or
/// division.
pub const EPSILON: f64 = 1e-12;

pub struct BceLoss;

impl BceLoss {
    /// Mean binary cross-entropy:
    ///   -(1/N)·Σ (y·ln(p) + (1-y)·ln(1-p))
    pub fn loss(expected: &[f64], predicted: &[f64]) -> Result<f64> {
        validate("bce loss", expected, predicted)?;
        let n = predicted.len() as f64;
        let sum: f64 = predicted.iter().zip(expected.iter())
            .map(|(&p, y)| {
                let p = clamp(p);
                y * p.ln() + (1.0 - y) * (1.0 - p).ln()
            })
            .sum();
        Ok(-sum / n)
    }

    /// Gradient of the loss with respect to the predictions.
    ///
    /// `FirstOutput` yields a single-element vector for index 0 and ignores
    /// the rest, which limits training to single-output networks.
    /// `Elementwise` applies `(p - y) / (p·(1 - p))` to every index.
    pub fn derivative(expected: &[f64], predicted: &[f64], mode: GradientMode) -> Result<Vec<f64>> {
        validate("bce gradient", expected, predicted)?;
        let grad = |p: f64, y: f64| {
            let p = clamp(p);
            (p - y) / (p * (1.0 - p))
        };
        Ok(match mode {
            GradientMode::FirstOutput => vec![grad(predicted[0], expected[0])],
            GradientMode::Elementwise => predicted.iter().zip(expected.iter())
                .map(|(&p, &y)| grad(p, y))
                .collect(),
        })
    }
}

/// Mean binary cross-entropy of `predictions` against `labels`.
pub fn bce_loss(labels: &[f64], predictions: &[f64]) -> Result<f64> {
    BceLoss::loss(labels, predictions)
}

/// First-output BCE gradient, the form the default training loop uses.
pub fn bce_loss_gradient(labels: &[f64], predictions: &[f64]) -> Result<Vec<f64>> {
    BceLoss::derivative(labels, predictions, GradientMode::FirstOutput)
}

fn clamp(p: f64) -> f64 {
    p.clamp(EPSILON, 1.0 - EPSILON)
}

fn validate(context: &'static str, expected: &[f64], predicted: &[f64]) -> Result<()> {
    if predicted.is_empty() {
        return Err(NnError::EmptyInput(context));
    }
    check_len(context, expected.len(), predicted.len())?;
    if let Some(&value) = predicted.iter().chain(expected.iter()).find(|v| !v.is_finite()) {
        return Err(NnError::NumericDomain { context, value });
    }
    Ok(())
}
