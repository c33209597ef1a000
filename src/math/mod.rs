pub mod matrix;
pub mod vector_math;

pub use matrix::Matrix;
pub use vector_math::{add, argmax, dot, relu, sigmoid, softmax, tanh_act, EvalPath};
