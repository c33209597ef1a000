//! Forward inference for small dense feed-forward networks.
//!
//! A [`Network`] is built once from a layer-size list, a hidden activation and
//! a flag selecting the grouped 4-lane dot product, then queried with
//! [`Network::forward`]. Hidden layers use the chosen activation; the output
//! layer always applies softmax.
//!
//! ```
//! use ferrite_infer::{ActivationFunction, Network};
//!
//! # fn main() -> ferrite_infer::Result<()> {
//! let net = Network::with_seed(&[4, 8, 3], ActivationFunction::ReLU, true, 7)?;
//! let probs = net.forward(&[0.1, 0.2, 0.3, 0.4])?;
//! assert_eq!(probs.len(), 3);
//! # Ok(())
//! # }
//! ```

pub mod math;
pub mod activation;
pub mod error;
pub mod init;
pub mod layers;
pub mod network;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use math::vector_math::EvalPath;
pub use activation::activation::ActivationFunction;
pub use error::{NnError, Result};
pub use init::initializer::{Constant, WeightInit, XavierUniform};
pub use layers::dense::Layer;
pub use network::network::Network;
pub use network::spec::NetworkSpec;
