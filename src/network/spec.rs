use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::activation::activation::ActivationFunction;
use crate::error::Result;
use crate::network::network::Network;

/// Declarative description of a network, loadable from JSON.
///
/// ```json
/// { "layer_sizes": [784, 128, 10], "activation": "relu", "vectorized": true, "seed": 7 }
/// ```
///
/// `activation` is kept as a name and parsed once in [`NetworkSpec::build`],
/// so an unknown name surfaces as a configuration error at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// `[n0, n1, …, nL]`: input width, hidden widths, output width.
    pub layer_sizes: Vec<usize>,
    /// One of `identity`, `relu`, `sigmoid`, `tanh`.
    pub activation: String,
    /// Use the grouped 4-lane dot product.
    #[serde(default)]
    pub vectorized: bool,
    /// Seed for Xavier initialization. A fresh one is drawn when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl NetworkSpec {
    pub fn from_json(json: &str) -> Result<NetworkSpec> {
        Ok(serde_json::from_str(json)?)
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn build(&self) -> Result<Network> {
        let activation: ActivationFunction = self.activation.parse()?;
        let seed = match self.seed {
            Some(seed) => seed,
            None => {
                let seed: u64 = rand::thread_rng().gen();
                debug!("no seed in network spec, drew {seed}");
                seed
            }
        };
        Network::with_seed(&self.layer_sizes, activation, self.vectorized, seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NnError;

    #[test]
    fn parses_with_defaults() {
        let spec = NetworkSpec::from_json(r#"{"layer_sizes":[3,4,2],"activation":"tanh"}"#).unwrap();
        assert!(!spec.vectorized);
        assert_eq!(spec.seed, None);
        let net = spec.build().unwrap();
        assert_eq!(net.layer_sizes(), vec![3, 4, 2]);
        assert_eq!(net.activation(), ActivationFunction::Tanh);
    }

    #[test]
    fn seeded_spec_builds_the_same_network_twice() {
        let spec = NetworkSpec {
            layer_sizes: vec![5, 7, 3],
            activation: "sigmoid".to_owned(),
            vectorized: true,
            seed: Some(99),
        };
        assert_eq!(spec.build().unwrap(), spec.build().unwrap());
    }

    #[test]
    fn unknown_activation_fails_at_build() {
        let spec =
            NetworkSpec::from_json(r#"{"layer_sizes":[2,2],"activation":"swish","seed":1}"#).unwrap();
        assert!(spec.build().unwrap_err().is_configuration());
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = NetworkSpec::from_json(r#"{"layer_sizes":"nope"}"#).unwrap_err();
        assert!(matches!(err, NnError::Json(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = NetworkSpec::load_json("/nonexistent/ferrite-infer/spec.json").unwrap_err();
        assert!(matches!(err, NnError::Io(_)));
    }

    #[test]
    fn load_json_reads_file() {
        let path = std::env::temp_dir().join(format!("ferrite-infer-spec-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"layer_sizes":[2,3,2],"activation":"relu","seed":4}"#).unwrap();
        let spec = NetworkSpec::load_json(path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(spec.layer_sizes, vec![2, 3, 2]);
        assert_eq!(spec.seed, Some(4));
    }
}
