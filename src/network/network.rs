use std::fmt;

use log::{debug, trace, warn};

use crate::activation::activation::ActivationFunction;
use crate::error::{NnError, Result};
use crate::init::initializer::{WeightInit, XavierUniform};
use crate::layers::dense::Layer;
use crate::math::vector_math::{self, EvalPath};

/// A dense feed-forward network, ready for inference.
///
/// Hidden layers apply `activation`; the output layer always applies
/// softmax. Parameters never change after construction, so a `Network` can
/// be shared across threads and `forward` called concurrently.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    layers: Vec<Layer>,
    activation: ActivationFunction,
    path: EvalPath,
}

impl Network {
    /// Builds a network for `layer_sizes = [n0, n1, …, nL]`, drawing every
    /// layer's parameters from `init`.
    ///
    /// Fails with a configuration error when fewer than two sizes are given
    /// or any size is zero.
    pub fn new<I: WeightInit + ?Sized>(
        layer_sizes: &[usize],
        activation: ActivationFunction,
        vectorized: bool,
        init: &mut I,
    ) -> Result<Network> {
        validate_sizes(layer_sizes)?;
        let layers = layer_sizes
            .windows(2)
            .map(|pair| {
                let (input_size, size) = (pair[0], pair[1]);
                let weights = init.weights(size, input_size);
                if weights.rows() != size || weights.cols() != input_size {
                    return Err(NnError::config(format!(
                        "initializer produced a {}x{} weight matrix, expected {size}x{input_size}",
                        weights.rows(),
                        weights.cols()
                    )));
                }
                Layer::new(weights, init.biases(size))
            })
            .collect::<Result<Vec<_>>>()?;
        Network::from_layers(layers, activation, vectorized)
    }

    /// `new` with Xavier-uniform weights from a seeded generator.
    pub fn with_seed(
        layer_sizes: &[usize],
        activation: ActivationFunction,
        vectorized: bool,
        seed: u64,
    ) -> Result<Network> {
        Network::new(
            layer_sizes,
            activation,
            vectorized,
            &mut XavierUniform::seeded(seed),
        )
    }

    /// Assembles a network from caller-supplied layers. No width may be zero,
    /// and each layer's input width must equal the previous layer's size.
    pub fn from_layers(
        layers: Vec<Layer>,
        activation: ActivationFunction,
        vectorized: bool,
    ) -> Result<Network> {
        if layers.is_empty() {
            return Err(NnError::config("network needs at least one layer"));
        }
        if let Some(i) = layers
            .iter()
            .position(|l| l.size() == 0 || l.input_size() == 0)
        {
            return Err(NnError::config(format!(
                "layer {i} is {}x{}; widths must be > 0",
                layers[i].size(),
                layers[i].input_size()
            )));
        }
        for (i, pair) in layers.windows(2).enumerate() {
            if pair[1].input_size() != pair[0].size() {
                return Err(NnError::config(format!(
                    "layer {} expects {} inputs but layer {i} produces {}",
                    i + 1,
                    pair[1].input_size(),
                    pair[0].size()
                )));
            }
        }

        let network = Network {
            layers,
            activation,
            path: EvalPath::from_flag(vectorized),
        };
        debug!(
            "built network {:?} activation={} path={:?}",
            network.layer_sizes(),
            network.activation,
            network.path
        );
        Ok(network)
    }

    /// Runs one input vector through every layer.
    ///
    /// Fails with a shape error when `input.len() != self.input_size()`.
    /// Non-finite outputs are returned as-is and logged at warn level.
    pub fn forward(&self, input: &[f64]) -> Result<Vec<f64>> {
        if input.len() != self.input_size() {
            return Err(NnError::Shape {
                what: "network input",
                got: input.len(),
                expected: self.input_size(),
            });
        }

        let last = self.layers.len() - 1;
        let mut current = input.to_vec();
        for (i, layer) in self.layers.iter().enumerate() {
            let z = layer.affine(&current, self.path)?;
            current = if i == last {
                vector_math::softmax(&z)?
            } else {
                self.activation.apply(z)
            };
            trace!("layer {i}: {} -> {}", layer.input_size(), layer.size());
        }

        if current.iter().any(|v| !v.is_finite()) {
            warn!("network output contains non-finite values: {current:?}");
        }
        Ok(current)
    }

    /// Index of the most probable output class.
    pub fn predict(&self, input: &[f64]) -> Result<usize> {
        let output = self.forward(input)?;
        vector_math::argmax(&output).ok_or(NnError::EmptyInput("predict"))
    }

    pub fn input_size(&self) -> usize {
        self.layers[0].input_size()
    }

    pub fn output_size(&self) -> usize {
        self.layers[self.layers.len() - 1].size()
    }

    /// Widths strictly between the input and the output, in order.
    pub fn hidden_sizes(&self) -> Vec<usize> {
        let n = self.layers.len();
        self.layers[..n - 1].iter().map(Layer::size).collect()
    }

    /// `[n0, n1, …, nL]`.
    pub fn layer_sizes(&self) -> Vec<usize> {
        std::iter::once(self.input_size())
            .chain(self.layers.iter().map(Layer::size))
            .collect()
    }

    pub fn activation(&self) -> ActivationFunction {
        self.activation
    }

    pub fn eval_path(&self) -> EvalPath {
        self.path
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sizes: Vec<String> = self.layer_sizes().iter().map(usize::to_string).collect();
        write!(
            f,
            "Network [{}] hidden={} output=softmax path={:?}",
            sizes.join(", "),
            self.activation,
            self.path
        )
    }
}

fn validate_sizes(layer_sizes: &[usize]) -> Result<()> {
    if layer_sizes.len() < 2 {
        return Err(NnError::config(format!(
            "layer sizes must include input and output widths, got {layer_sizes:?}"
        )));
    }
    if let Some(i) = layer_sizes.iter().position(|&n| n == 0) {
        return Err(NnError::config(format!(
            "layer size at index {i} must be > 0"
        )));
    }
    Ok(())
}
