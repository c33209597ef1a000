use crate::error::{NnError, Result};
use crate::math::matrix::Matrix;
use crate::math::vector_math::{self, EvalPath};

/// One affine stage: `z = W·x + b`.
///
/// `weights` is `size × input_size`; `biases` has `size` entries. Both are
/// fixed once the layer is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    weights: Matrix,
    biases: Vec<f64>,
}

impl Layer {
    pub fn new(weights: Matrix, biases: Vec<f64>) -> Result<Layer> {
        if biases.len() != weights.rows() {
            return Err(NnError::config(format!(
                "bias vector has {} entries but weight matrix has {} rows",
                biases.len(),
                weights.rows()
            )));
        }
        Ok(Layer { weights, biases })
    }

    /// Number of neurons (output width).
    #[inline]
    pub fn size(&self) -> usize {
        self.weights.rows()
    }

    #[inline]
    pub fn input_size(&self) -> usize {
        self.weights.cols()
    }

    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    pub fn biases(&self) -> &[f64] {
        &self.biases
    }

    /// Pre-activation output for `input`.
    pub fn affine(&self, input: &[f64], path: EvalPath) -> Result<Vec<f64>> {
        let z = vector_math::dot(input, &self.weights, path)?;
        vector_math::add(&z, &self.biases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bias_length_mismatch() {
        let err = Layer::new(Matrix::zeros(3, 2), vec![0.0; 2]).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn affine_adds_bias_after_dot() {
        let w = Matrix::from_data(vec![vec![1.0, 0.0], vec![2.0, -1.0]]).unwrap();
        let layer = Layer::new(w, vec![0.5, -0.5]).unwrap();
        assert_eq!(layer.size(), 2);
        assert_eq!(layer.input_size(), 2);
        for path in [EvalPath::Scalar, EvalPath::Grouped] {
            assert_eq!(layer.affine(&[3.0, 1.0], path).unwrap(), vec![3.5, 4.5]);
        }
    }

    #[test]
    fn affine_reports_input_width() {
        let layer = Layer::new(Matrix::zeros(2, 4), vec![0.0; 2]).unwrap();
        let err = layer.affine(&[1.0; 3], EvalPath::Scalar).unwrap_err();
        assert!(matches!(err, NnError::Shape { got: 3, expected: 4, .. }));
    }
}
