use serde::{Serialize, Deserialize};
use std::f64::consts::E;

/// Default slope of `LeakyReLU` for negative inputs.
pub const DEFAULT_LEAK: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Activation {
    Sigmoid,
    ReLU,
    LeakyReLU { alpha: f64 },
    Tanh,
}

impl Activation {
    /// `LeakyReLU` with the default leak of 0.01.
    pub fn leaky_relu() -> Activation {
        Activation::LeakyReLU { alpha: DEFAULT_LEAK }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Activation::Sigmoid => "sigmoid",
            Activation::ReLU => "relu",
            Activation::LeakyReLU { .. } => "leaky_relu",
            Activation::Tanh => "tanh",
        }
    }

    pub fn function(&self, x: f64) -> f64 {
        match self {
            Activation::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
            Activation::ReLU => if x > 0.0 { x } else { 0.0 },
            Activation::LeakyReLU { alpha } => if x > 0.0 { x } else { alpha * x },
            Activation::Tanh => x.tanh(),
        }
    }

    /// Derivative evaluated at the pre-activation input `x`.
    ///
    /// The rectifiers report a slope of 1 at exactly `x == 0`.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            Activation::Sigmoid => {
                let fx = self.function(x);
                fx * (1.0 - fx)
            },
            Activation::ReLU => if x >= 0.0 { 1.0 } else { 0.0 },
            Activation::LeakyReLU { alpha } => if x >= 0.0 { 1.0 } else { *alpha },
            Activation::Tanh => {
                let t = x.tanh();
                1.0 - t * t
            }
        }
    }

    /// Applies `function` to every element.
    pub fn apply(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.function(x)).collect()
    }

    /// Applies `derivative` to every element.
    pub fn derivative_all(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.derivative(x)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_midpoint() {
        assert!((Activation::Sigmoid.function(0.0) - 0.5).abs() < 1e-12);
        assert!((Activation::Sigmoid.derivative(0.0) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn rectifier_boundary_slope_is_one() {
        assert_eq!(Activation::ReLU.function(0.0), 0.0);
        assert_eq!(Activation::ReLU.derivative(0.0), 1.0);
        assert_eq!(Activation::ReLU.derivative(-0.1), 0.0);
        assert_eq!(Activation::leaky_relu().derivative(0.0), 1.0);
        assert_eq!(Activation::leaky_relu().derivative(-3.0), DEFAULT_LEAK);
        assert_eq!(Activation::leaky_relu().function(-2.0), -0.02);
    }

    #[test]
    fn tanh_matches_exponential_form() {
        for &x in &[-2.0, -0.3, 0.0, 0.7, 1.9] {
            let expected = (E.powf(x) - E.powf(-x)) / (E.powf(x) + E.powf(-x));
            assert!((Activation::Tanh.function(x) - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn vectorized_forms_apply_elementwise() {
        let xs = [-1.0, 0.0, 2.0];
        assert_eq!(Activation::ReLU.apply(&xs), vec![0.0, 0.0, 2.0]);
        assert_eq!(Activation::ReLU.derivative_all(&xs), vec![0.0, 1.0, 1.0]);
    }
}
