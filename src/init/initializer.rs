use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::math::matrix::Matrix;

/// Source of initial parameters for a layer.
///
/// `rows` is the layer's output width (fan-out) and `cols` its input width
/// (fan-in). Implementations carry their own state; there is no process-wide
/// random source.
pub trait WeightInit {
    fn weights(&mut self, rows: usize, cols: usize) -> Matrix;

    fn biases(&mut self, len: usize) -> Vec<f64> {
        vec![0.0; len]
    }
}

/// Xavier (Glorot) uniform initialization.
///
/// Each weight is drawn from `U(-s, s)` with `s = sqrt(6 / (fan_in + fan_out))`.
/// Biases start at zero.
#[derive(Debug, Clone)]
pub struct XavierUniform<R: Rng> {
    rng: R,
}

impl<R: Rng> XavierUniform<R> {
    pub fn new(rng: R) -> Self {
        XavierUniform { rng }
    }
}

impl XavierUniform<StdRng> {
    /// Deterministic initializer: the same seed always yields the same weights.
    pub fn seeded(seed: u64) -> Self {
        XavierUniform::new(StdRng::seed_from_u64(seed))
    }
}

/// Half-width of the Xavier-uniform interval for a `fan_out × fan_in` layer.
pub fn xavier_bound(fan_in: usize, fan_out: usize) -> f64 {
    (6.0 / (fan_in + fan_out) as f64).sqrt()
}

impl<R: Rng> WeightInit for XavierUniform<R> {
    fn weights(&mut self, rows: usize, cols: usize) -> Matrix {
        let s = xavier_bound(cols, rows);
        let rng = &mut self.rng;
        Matrix::from_fn(rows, cols, |_, _| rng.gen_range(-s..=s))
    }
}

/// Every weight and bias set to a fixed value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constant {
    pub weight: f64,
    pub bias: f64,
}

impl WeightInit for Constant {
    fn weights(&mut self, rows: usize, cols: usize) -> Matrix {
        Matrix::from_fn(rows, cols, |_, _| self.weight)
    }

    fn biases(&mut self, len: usize) -> Vec<f64> {
        vec![self.bias; len]
    }
}
