//! Activation identifiers for Keras layers.

use serde::{Deserialize, Serialize};

/// Activation functions the dense layer's configuration offers.
///
/// Rendered lowercase in generated code, matching the identifiers Keras
/// accepts for its `activation` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    /// Identity, Keras' default.
    #[default]
    Linear,
    /// Rectified Linear Unit.
    Relu,
    /// Sigmoid.
    Sigmoid,
    /// Hyperbolic tangent.
    Tanh,
    /// Softmax normalization.
    Softmax,
    /// Exponential Linear Unit.
    Elu,
}

impl Activation {
    /// Returns the identifier Keras uses for this activation.
    pub fn as_keras_name(&self) -> &'static str {
        match self {
            Activation::Linear => "linear",
            Activation::Relu => "relu",
            Activation::Sigmoid => "sigmoid",
            Activation::Tanh => "tanh",
            Activation::Softmax => "softmax",
            Activation::Elu => "elu",
        }
    }

    /// Parses a Keras activation identifier.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "linear" => Some(Activation::Linear),
            "relu" => Some(Activation::Relu),
            "sigmoid" => Some(Activation::Sigmoid),
            "tanh" => Some(Activation::Tanh),
            "softmax" => Some(Activation::Softmax),
            "elu" => Some(Activation::Elu),
            _ => None,
        }
    }
}
