//! Vector primitives used by the forward pass.
//!
//! Everything here is a pure function over slices. Length preconditions are
//! checked and reported as [`NnError::Shape`]; nothing truncates or pads.
//!
//! `dot` has two evaluation strategies that compute the same formula:
//!
//! - [`EvalPath::Scalar`]: one accumulator per output row, summed in index order.
//! - [`EvalPath::Grouped`]: four lane accumulators fed four inputs at a time,
//!   reduced pairwise, followed by a scalar tail for the remaining `n % 4`
//!   elements.
//!
//! The two paths differ only in summation order, so results agree to within
//! floating-point reassociation error, not bit for bit.

use serde::{Deserialize, Serialize};

use crate::error::{NnError, Result};
use crate::math::matrix::Matrix;

/// Number of lanes in the grouped dot product.
pub const LANES: usize = 4;

/// Selects how `dot` accumulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvalPath {
    #[default]
    Scalar,
    Grouped,
}

impl EvalPath {
    /// Maps the `vectorized` construction flag to a path.
    pub fn from_flag(vectorized: bool) -> EvalPath {
        if vectorized {
            EvalPath::Grouped
        } else {
            EvalPath::Scalar
        }
    }
}

/// `result[i] = <input, weights.row(i)>`.
///
/// Fails with a shape error when `input.len() != weights.cols()`.
pub fn dot(input: &[f64], weights: &Matrix, path: EvalPath) -> Result<Vec<f64>> {
    if input.len() != weights.cols() {
        return Err(NnError::Shape {
            what: "dot input",
            got: input.len(),
            expected: weights.cols(),
        });
    }
    let inner: fn(&[f64], &[f64]) -> f64 = match path {
        EvalPath::Scalar => dot_row_scalar,
        EvalPath::Grouped => dot_row_grouped,
    };
    Ok(weights.iter_rows().map(|row| inner(input, row)).collect())
}

/// Scalar-path `dot`.
pub fn dot_scalar(input: &[f64], weights: &Matrix) -> Result<Vec<f64>> {
    dot(input, weights, EvalPath::Scalar)
}

/// Grouped-path `dot`.
pub fn dot_grouped(input: &[f64], weights: &Matrix) -> Result<Vec<f64>> {
    dot(input, weights, EvalPath::Grouped)
}

#[inline]
fn dot_row_scalar(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    let mut sum = 0.0;
    for (x, w) in a.iter().zip(b) {
        sum += x * w;
    }
    sum
}

#[inline]
fn dot_row_grouped(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    let a_chunks = a.chunks_exact(LANES);
    let b_chunks = b.chunks_exact(LANES);
    let a_tail = a_chunks.remainder();
    let b_tail = b_chunks.remainder();

    let mut acc = [0.0_f64; LANES];
    for (xa, xb) in a_chunks.zip(b_chunks) {
        for lane in 0..LANES {
            acc[lane] += xa[lane] * xb[lane];
        }
    }

    let mut sum = (acc[0] + acc[1]) + (acc[2] + acc[3]);
    for (x, w) in a_tail.iter().zip(b_tail) {
        sum += x * w;
    }
    sum
}

/// Elementwise `a + b`. Fails with a shape error on unequal lengths.
pub fn add(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    if a.len() != b.len() {
        return Err(NnError::Shape {
            what: "add operand",
            got: b.len(),
            expected: a.len(),
        });
    }
    Ok(a.iter().zip(b).map(|(x, y)| x + y).collect())
}

pub fn relu(x: &[f64]) -> Vec<f64> {
    x.iter().map(|&v| if v > 0.0 { v } else { 0.0 }).collect()
}

/// Elementwise `1 / (1 + e^-x)`.
///
/// Unguarded: NaN inputs produce NaN. Large magnitudes saturate to 0 or 1
/// through IEEE overflow of `e^-x` rather than through clamping.
pub fn sigmoid(x: &[f64]) -> Vec<f64> {
    x.iter().map(|&v| 1.0 / (1.0 + (-v).exp())).collect()
}

pub fn tanh_act(x: &[f64]) -> Vec<f64> {
    x.iter().map(|v| v.tanh()).collect()
}

/// Max-subtracted softmax.
///
/// Fails on empty input. Non-finite entries are not clamped: a `+inf`
/// logit makes the max-subtraction produce NaN, which propagates.
pub fn softmax(x: &[f64]) -> Result<Vec<f64>> {
    let max = x
        .iter()
        .copied()
        .reduce(f64::max)
        .ok_or(NnError::EmptyInput("softmax"))?;
    let exps: Vec<f64> = x.iter().map(|v| (v - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    Ok(exps.into_iter().map(|e| e / sum).collect())
}

/// Index of the largest entry; the first one wins on ties. NaN entries never win.
pub fn argmax(x: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in x.iter().enumerate() {
        if v.is_nan() {
            continue;
        }
        if best.map_or(true, |(_, b)| v > b) {
            best = Some((i, v));
        }
    }
    best.map(|(i, _)| i)
}
