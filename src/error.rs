use thiserror::Error;

/// Errors produced while building or running a network.
///
/// Every failure is returned as a value; nothing in the inference path
/// panics on bad input.
#[derive(Debug, Error)]
pub enum NnError {
    /// Invalid construction parameters (layer sizes, activation name, layer chain).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A length invariant was violated.
    #[error("shape mismatch for {what}: got {got}, expected {expected}")]
    Shape {
        what: &'static str,
        got: usize,
        expected: usize,
    },

    /// An operation that needs at least one element was given none.
    #[error("empty input to {0}")]
    EmptyInput(&'static str),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed network spec: {0}")]
    Json(#[from] serde_json::Error),
}

impl NnError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        NnError::Configuration(msg.into())
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, NnError::Configuration(_))
    }

    pub fn is_shape(&self) -> bool {
        matches!(self, NnError::Shape { .. })
    }
}

pub type Result<T> = std::result::Result<T, NnError>;
