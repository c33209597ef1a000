use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NnError;
use crate::math::vector_math;

/// Activation applied to every hidden layer of a network.
///
/// The output layer always uses softmax, so softmax is not a variant here.
/// Names parse case-insensitively: `"identity"`, `"relu"`, `"sigmoid"`, `"tanh"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationFunction {
    Identity,
    #[serde(rename = "relu")]
    ReLU,
    Sigmoid,
    Tanh,
}

impl ActivationFunction {
    pub const ALL: [ActivationFunction; 4] = [
        ActivationFunction::Identity,
        ActivationFunction::ReLU,
        ActivationFunction::Sigmoid,
        ActivationFunction::Tanh,
    ];

    /// Applies the activation to a whole pre-activation vector.
    pub fn apply(&self, z: Vec<f64>) -> Vec<f64> {
        match self {
            ActivationFunction::Identity => z,
            ActivationFunction::ReLU => vector_math::relu(&z),
            ActivationFunction::Sigmoid => vector_math::sigmoid(&z),
            ActivationFunction::Tanh => vector_math::tanh_act(&z),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ActivationFunction::Identity => "identity",
            ActivationFunction::ReLU => "relu",
            ActivationFunction::Sigmoid => "sigmoid",
            ActivationFunction::Tanh => "tanh",
        }
    }
}

impl fmt::Display for ActivationFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActivationFunction {
    type Err = NnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ActivationFunction::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                NnError::config(format!(
                    "unknown activation {s:?}; expected one of identity, relu, sigmoid, tanh"
                ))
            })
    }
}
