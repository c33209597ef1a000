pub mod initializer;

pub use initializer::{xavier_bound, Constant, WeightInit, XavierUniform};
