use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::math::matrix::Matrix;

/// Random source for parameter initialization.
///
/// Unseeded by default; pass `InitRng::seeded` wherever reproducible weights
/// are needed (tests, the `--seed` flag of the binary).
#[derive(Debug, Clone)]
pub struct InitRng {
    rng: StdRng,
}

impl InitRng {
    pub fn from_entropy() -> InitRng {
        InitRng { rng: StdRng::from_entropy() }
    }

    pub fn seeded(seed: u64) -> InitRng {
        InitRng { rng: StdRng::seed_from_u64(seed) }
    }

    fn uniform_sample(&mut self, dist: &Uniform<f64>) -> f64 {
        dist.sample(&mut self.rng)
    }
}

impl Default for InitRng {
    fn default() -> Self {
        InitRng::from_entropy()
    }
}

fn unit_range() -> Uniform<f64> {
    Uniform::new_inclusive(-1.0, 1.0)
}

/// (rows × cols) matrix with every entry drawn independently from U[-1, 1].
pub fn initialize_weights(rows: usize, cols: usize, rng: &mut InitRng) -> Matrix {
    let dist = unit_range();
    let mut res = Matrix::zeros(rows, cols);
    for row in res.data.iter_mut() {
        for x in row.iter_mut() {
            *x = rng.uniform_sample(&dist);
        }
    }
    res
}

/// `size` values drawn independently from U[-1, 1].
pub fn initialize_bias(size: usize, rng: &mut InitRng) -> Vec<f64> {
    let dist = unit_range();
    (0..size).map(|_| rng.uniform_sample(&dist)).collect()
}
